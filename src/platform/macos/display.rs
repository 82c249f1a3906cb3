//! macOS display queries through CoreGraphics.
//!
//! CoreGraphics reports bounds in global points. Pixel bounds place every
//! origin with the largest backing scale of all active displays and size each
//! display with its own scale, so displays that do not overlap in points do
//! not overlap in pixels. A display's scale is reported as `96 * scale` DPI so
//! the resolver derives the same factor back.

use crate::error::{Error, Result};
use crate::geometry::{PixelPoint, PixelRect};
use crate::provider::{BASELINE_DPI, DisplayProvider, MonitorDefault, MonitorInfo};
use crate::screen::{MonitorHandle, WindowHandle};
use objc2_core_foundation::CGRect;
use objc2_core_graphics::{
    CGDirectDisplayID, CGDisplayBounds, CGDisplayPixelsWide, CGError, CGGetActiveDisplayList,
    CGMainDisplayID,
};

/// [`DisplayProvider`] backed by CoreGraphics.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacosProvider;

impl MacosProvider {
    pub fn new() -> Self {
        Self
    }
}

fn active_displays() -> Result<Vec<CGDirectDisplayID>> {
    let mut max_displays = 8usize;
    loop {
        let mut displays = vec![0; max_displays];
        let mut count: u32 = 0;
        let status = unsafe {
            CGGetActiveDisplayList(max_displays as u32, displays.as_mut_ptr(), &mut count)
        };
        if status != CGError::Success {
            return Err(Error::Platform(format!(
                "CGGetActiveDisplayList failed: {:?}",
                status
            )));
        }

        if (count as usize) <= max_displays {
            displays.truncate(count as usize);
            return Ok(displays);
        }

        max_displays = count as usize;
    }
}

fn active_displays_or_empty() -> Vec<CGDirectDisplayID> {
    active_displays().unwrap_or_else(|e| {
        log::warn!("{e}");
        Vec::new()
    })
}

fn display_id(handle: MonitorHandle) -> CGDirectDisplayID {
    handle.0 as CGDirectDisplayID
}

fn backing_scale(display: CGDirectDisplayID, bounds: &CGRect) -> f64 {
    let width_points = bounds.size.width as f64;
    let width_pixels = CGDisplayPixelsWide(display) as f64;
    if width_points > 0.0 && width_pixels > 0.0 {
        width_pixels / width_points
    } else {
        1.0
    }
}

/// Lay out point-space display rectangles in a shared pixel space.
///
/// Each entry is a display's bounds in points with its backing scale. The
/// origin is scaled by the largest scale in the set, the size by the
/// display's own scale.
fn layout_pixel_bounds(displays: &[(CGRect, f64)]) -> Vec<PixelRect> {
    let origin_scale = displays
        .iter()
        .map(|(_, scale)| *scale)
        .fold(1.0_f64, f64::max);
    displays
        .iter()
        .map(|(bounds, scale)| {
            PixelRect::new(
                (bounds.origin.x as f64 * origin_scale).round() as i32,
                (bounds.origin.y as f64 * origin_scale).round() as i32,
                (bounds.size.width as f64 * scale).round() as i32,
                (bounds.size.height as f64 * scale).round() as i32,
            )
        })
        .collect()
}

/// Every active display with its pixel bounds.
fn display_layout() -> Vec<(CGDirectDisplayID, PixelRect)> {
    let displays = active_displays_or_empty();
    let points: Vec<(CGRect, f64)> = displays
        .iter()
        .map(|id| {
            let bounds = CGDisplayBounds(*id);
            (bounds, backing_scale(*id, &bounds))
        })
        .collect();
    displays.into_iter().zip(layout_pixel_bounds(&points)).collect()
}

fn main_display_bounds() -> PixelRect {
    let main = CGMainDisplayID();
    display_layout()
        .into_iter()
        .find(|(id, _)| *id == main)
        .map(|(_, bounds)| bounds)
        .unwrap_or_default()
}

impl DisplayProvider for MacosProvider {
    fn supports_multiple_monitors(&self) -> bool {
        !active_displays_or_empty().is_empty()
    }

    fn is_process_dpi_aware(&self) -> bool {
        true
    }

    fn monitor_handles(&self) -> Vec<MonitorHandle> {
        active_displays_or_empty()
            .into_iter()
            .map(|id| MonitorHandle(id as isize))
            .collect()
    }

    fn monitor_info(&self, handle: MonitorHandle) -> Result<MonitorInfo> {
        let id = display_id(handle);
        let (_, bounds) = display_layout()
            .into_iter()
            .find(|(display, _)| *display == id)
            .ok_or(Error::NoSuchMonitor(handle))?;
        Ok(MonitorInfo {
            monitor: bounds,
            work: bounds,
            primary: id == CGMainDisplayID(),
            device_name: format!("Display {id}"),
        })
    }

    fn dpi_for_monitor(&self, handle: MonitorHandle) -> Result<u32> {
        let id = display_id(handle);
        let scale = backing_scale(id, &CGDisplayBounds(id));
        Ok((BASELINE_DPI as f64 * scale).round() as u32)
    }

    fn legacy_desktop_dpi(&self) -> Result<f32> {
        let id = CGMainDisplayID();
        let scale = backing_scale(id, &CGDisplayBounds(id));
        Ok((BASELINE_DPI as f64 * scale) as f32)
    }

    fn monitor_from_point(
        &self,
        point: PixelPoint,
        default: MonitorDefault,
    ) -> Option<MonitorHandle> {
        if let Some((id, _)) = display_layout()
            .into_iter()
            .find(|(_, bounds)| bounds.contains(point))
        {
            return Some(MonitorHandle(id as isize));
        }
        match default {
            MonitorDefault::Null => None,
            // Nearest is approximated by the main display.
            MonitorDefault::Primary | MonitorDefault::Nearest => {
                Some(MonitorHandle(CGMainDisplayID() as isize))
            }
        }
    }

    fn monitor_from_window(&self, _window: WindowHandle) -> Option<MonitorHandle> {
        log::debug!("window lookup is not available through CoreGraphics");
        None
    }

    fn primary_screen_size(&self) -> (i32, i32) {
        let bounds = main_display_bounds();
        (bounds.width, bounds.height)
    }

    fn virtual_screen(&self) -> PixelRect {
        display_layout()
            .into_iter()
            .map(|(_, bounds)| bounds)
            .reduce(|acc, rect| acc.union(&rect))
            .unwrap_or_default()
    }

    fn work_area(&self) -> PixelRect {
        main_display_bounds()
    }
}
