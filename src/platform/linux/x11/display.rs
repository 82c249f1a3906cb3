//! X11 display queries.
//!
//! Only the core protocol is used, so the default screen is reported as the
//! single display: multi-monitor support is always absent and every query
//! takes the primary-screen path. The legacy DPI is the logical `Xft.dpi`
//! resource from the root window's `RESOURCE_MANAGER` property. When it is
//! not set the query fails and the resolver uses 96.

use crate::error::{Error, Result};
use crate::geometry::{PixelPoint, PixelRect};
use crate::provider::{DisplayProvider, MonitorDefault, MonitorInfo};
use crate::screen::{MonitorHandle, WindowHandle};
use std::collections::HashMap;
use std::ffi::CStr;
use std::ptr::null;
use x11::xlib;

const XFT_DPI: &str = "Xft.dpi";

/// [`DisplayProvider`] backed by Xlib.
#[derive(Debug, Clone, Copy, Default)]
pub struct X11Provider;

impl X11Provider {
    pub fn new() -> Self {
        Self
    }
}

fn with_display<T>(f: impl FnOnce(*mut xlib::Display) -> Result<T>) -> Result<T> {
    unsafe {
        let display = xlib::XOpenDisplay(null());
        if display.is_null() {
            return Err(Error::Platform("XOpenDisplay failed".into()));
        }
        let result = f(display);
        xlib::XCloseDisplay(display);
        result
    }
}

fn screen_size() -> Result<(i32, i32)> {
    with_display(|display| unsafe {
        let screen = xlib::XDefaultScreen(display);
        Ok((
            xlib::XDisplayWidth(display, screen),
            xlib::XDisplayHeight(display, screen),
        ))
    })
}

fn screen_rect() -> PixelRect {
    match screen_size() {
        Ok((width, height)) => PixelRect::new(0, 0, width, height),
        Err(e) => {
            log::warn!("{e}");
            PixelRect::default()
        }
    }
}

/// Parses the resource database text, e.g.
/// `"Xft.dpi:\t144\nXcursor.size:\t24\n"`, into key/value pairs.
fn parse_resource_manager(text: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in text.split('\n') {
        if let Some((key, value)) = line.split_once(':') {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    map
}

fn xft_dpi(resources: &HashMap<String, String>) -> Result<f32> {
    let value = resources
        .get(XFT_DPI)
        .ok_or_else(|| Error::DpiQueryUnavailable(format!("{XFT_DPI} is not set")))?;
    value
        .parse::<f32>()
        .map_err(|e| Error::DpiQueryUnavailable(format!("bad {XFT_DPI} value {value:?}: {e}")))
}

impl DisplayProvider for X11Provider {
    fn supports_multiple_monitors(&self) -> bool {
        false
    }

    fn is_process_dpi_aware(&self) -> bool {
        true
    }

    fn monitor_handles(&self) -> Vec<MonitorHandle> {
        Vec::new()
    }

    fn monitor_info(&self, handle: MonitorHandle) -> Result<MonitorInfo> {
        Err(Error::NoSuchMonitor(handle))
    }

    fn dpi_for_monitor(&self, _handle: MonitorHandle) -> Result<u32> {
        Err(Error::DpiQueryUnavailable(
            "X11 core protocol has no per-monitor DPI".into(),
        ))
    }

    fn legacy_desktop_dpi(&self) -> Result<f32> {
        with_display(|display| unsafe {
            // Owned by the display connection; copied before it is closed.
            let text = xlib::XResourceManagerString(display);
            if text.is_null() {
                return Err(Error::DpiQueryUnavailable(
                    "root window has no RESOURCE_MANAGER property".into(),
                ));
            }
            let text = CStr::from_ptr(text).to_string_lossy();
            xft_dpi(&parse_resource_manager(&text))
        })
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
        let rect = screen_rect();
        (rect.width, rect.height)
    }

    fn virtual_screen(&self) -> PixelRect {
        screen_rect()
    }

    fn work_area(&self) -> PixelRect {
        screen_rect()
    }
}
