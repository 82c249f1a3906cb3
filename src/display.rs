//! Display queries against the native platform.
//!
//! Each function builds a [`ScreenDirectory`] over [`NativeProvider`] and asks
//! it once. Use [`ScreenDirectory`] directly to inject another provider.

use crate::directory::ScreenDirectory;
use crate::error::Result;
use crate::geometry::{PixelPoint, PixelRect, Rect};
use crate::platform::NativeProvider;
use crate::screen::{Screen, WindowHandle};

fn native() -> ScreenDirectory<NativeProvider> {
    ScreenDirectory::new(NativeProvider::new())
}

/// List all available displays. Never empty.
pub fn screens() -> Result<Vec<Screen>> {
    native().all_screens()
}

/// Get the primary display.
pub fn primary_screen() -> Result<Screen> {
    native().primary_screen()
}

/// Find the display containing a point (pixel coordinates), or the nearest one.
pub fn screen_from_point(x: i32, y: i32) -> Result<Screen> {
    native().screen_from_point(PixelPoint::new(x, y))
}

/// Find the display holding most of a window.
pub fn screen_from_window(window: WindowHandle) -> Result<Screen> {
    native().screen_from_window(window)
}

/// Work area of a display in pixels.
pub fn working_area(screen: &Screen) -> Result<PixelRect> {
    native().working_area(screen)
}

/// Work area of a display in scaled coordinates.
pub fn working_area_scaled(screen: &Screen) -> Result<Rect> {
    native().working_area_scaled(screen)
}

/// Bounds of the whole virtual screen in pixels.
pub fn virtual_screen() -> PixelRect {
    native().virtual_screen()
}

/// Bounds of the whole virtual screen, scaled per display.
pub fn virtual_screen_scaled() -> Result<Rect> {
    native().virtual_screen_scaled()
}

/// Whether the system reports multi-monitor support.
pub fn multi_monitor_support() -> bool {
    native().multi_monitor_support()
}

/// Whether the current process is DPI aware.
pub fn is_process_dpi_aware() -> bool {
    native().is_process_dpi_aware()
}
