//! Linux platform implementation.
//!
//! ## Feature Flags
//!
//! - `x11` (default): query the X server's default screen through Xlib
//!
//! Without `x11` a stub provider is used. It reports no monitors and a
//! zero-sized screen, so the directory still returns one primary screen.

#[cfg(feature = "x11")]
mod x11;

#[cfg(feature = "x11")]
pub use self::x11::X11Provider as LinuxProvider;

#[cfg(not(feature = "x11"))]
mod stub {
    use crate::error::{Error, Result};
    use crate::geometry::{PixelPoint, PixelRect};
    use crate::provider::{DisplayProvider, MonitorDefault, MonitorInfo};
    use crate::screen::{MonitorHandle, WindowHandle};

    /// Provider used when no Linux backend is enabled.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct StubProvider;

    impl StubProvider {
        pub fn new() -> Self {
            Self
        }
    }

    impl DisplayProvider for StubProvider {
        fn supports_multiple_monitors(&self) -> bool {
            false
        }

        fn is_process_dpi_aware(&self) -> bool {
            false
        }

        fn monitor_handles(&self) -> Vec<MonitorHandle> {
            Vec::new()
        }

        fn monitor_info(&self, handle: MonitorHandle) -> Result<MonitorInfo> {
            Err(Error::NoSuchMonitor(handle))
        }

        fn dpi_for_monitor(&self, _handle: MonitorHandle) -> Result<u32> {
            Err(Error::NotSupported(
                "No Linux backend enabled. Enable the 'x11' feature.".into(),
            ))
        }

        fn legacy_desktop_dpi(&self) -> Result<f32> {
            Err(Error::NotSupported(
                "No Linux backend enabled. Enable the 'x11' feature.".into(),
            ))
        }

        fn monitor_from_point(
            &self,
            _point: PixelPoint,
            _default: MonitorDefault,
        ) -> Option<MonitorHandle> {
            None
        }

        fn monitor_from_window(&self, _window: WindowHandle) -> Option<MonitorHandle> {
            None
        }

        fn primary_screen_size(&self) -> (i32, i32) {
            (0, 0)
        }

        fn virtual_screen(&self) -> PixelRect {
            PixelRect::default()
        }

        fn work_area(&self) -> PixelRect {
            PixelRect::default()
        }
    }
}

#[cfg(not(feature = "x11"))]
pub use stub::StubProvider as LinuxProvider;
