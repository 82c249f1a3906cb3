//! The platform display capability.
//!
//! [`DisplayProvider`] is the only place this crate touches the operating
//! system. Everything else ([`crate::resolver`], [`crate::directory`]) is
//! written against the trait, so it can run against [`FakeProvider`] in tests.
//!
//! Each platform implements the trait in `crate::platform`; the right one is
//! re-exported as [`crate::NativeProvider`].

use crate::error::{Error, Result};
use crate::geometry::{PixelPoint, PixelRect};
use crate::screen::{MonitorHandle, WindowHandle};
use std::cell::Cell;

/// Baseline DPI the scale factor is measured against.
pub const BASELINE_DPI: u32 = 96;

/// Behaviour of [`DisplayProvider::monitor_from_point`] when the point is
/// outside every monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorDefault {
    /// Return no monitor.
    Null,
    /// Return the primary monitor.
    Primary,
    /// Return the monitor nearest to the point.
    Nearest,
}

/// Geometry and flags for one monitor handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorInfo {
    /// Full monitor bounds in pixels.
    pub monitor: PixelRect,
    /// Work area in pixels (bounds minus task bars and docked tool bars).
    pub work: PixelRect,
    pub primary: bool,
    /// Device name with trailing NUL padding removed.
    pub device_name: String,
}

/// Direct, synchronous platform queries about displays.
///
/// Implementations must not cache: every call re-queries the platform.
pub trait DisplayProvider {
    /// True if the platform reports at least one monitor through its
    /// multi-monitor metric.
    fn supports_multiple_monitors(&self) -> bool;

    /// Whether the calling process opted into DPI awareness.
    fn is_process_dpi_aware(&self) -> bool;

    /// Handles of all attached monitors. An empty list is a valid answer.
    fn monitor_handles(&self) -> Vec<MonitorHandle>;

    /// Geometry, flags and device name of a monitor.
    ///
    /// Fails with [`Error::NoSuchMonitor`] if the handle is stale.
    fn monitor_info(&self, handle: MonitorHandle) -> Result<MonitorInfo>;

    /// Horizontal effective DPI of a monitor.
    ///
    /// Fails with [`Error::DpiQueryUnavailable`] where the platform has no
    /// per-monitor DPI query.
    fn dpi_for_monitor(&self, handle: MonitorHandle) -> Result<u32>;

    /// Horizontal desktop DPI through the degraded, system-wide path.
    fn legacy_desktop_dpi(&self) -> Result<f32>;

    fn monitor_from_point(&self, point: PixelPoint, default: MonitorDefault)
    -> Option<MonitorHandle>;

    /// Monitor holding the largest part of a window, or the nearest one.
    fn monitor_from_window(&self, window: WindowHandle) -> Option<MonitorHandle>;

    /// Width and height of the primary screen in pixels.
    fn primary_screen_size(&self) -> (i32, i32);

    /// Bounds of the union of all displays, in unscaled pixels.
    fn virtual_screen(&self) -> PixelRect;

    /// Work area of the primary display.
    fn work_area(&self) -> PixelRect;
}

/// Convert a fixed-size UTF-16 device name buffer, dropping trailing NUL padding.
pub fn device_name_from_wide(buffer: &[u16]) -> String {
    String::from_utf16_lossy(buffer)
        .trim_end_matches('\0')
        .to_string()
}

/// One monitor known to a [`FakeProvider`].
#[derive(Debug, Clone)]
pub struct FakeMonitor {
    pub handle: MonitorHandle,
    pub bounds: PixelRect,
    pub work: PixelRect,
    pub primary: bool,
    pub device_name: String,
    /// Effective horizontal DPI reported by [`DisplayProvider::dpi_for_monitor`].
    pub dpi: u32,
    /// Still enumerated, but `monitor_info` reports it as gone (hot-unplug).
    pub detached: bool,
}

impl FakeMonitor {
    /// A monitor whose work area equals its bounds, at 96 DPI.
    pub fn new(handle: isize, bounds: PixelRect) -> Self {
        Self {
            handle: MonitorHandle(handle),
            bounds,
            work: bounds,
            primary: false,
            device_name: format!("\\\\.\\DISPLAY{handle}"),
            dpi: BASELINE_DPI,
            detached: false,
        }
    }

    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn with_work_area(mut self, work: PixelRect) -> Self {
        self.work = work;
        self
    }

    pub fn detached(mut self) -> Self {
        self.detached = true;
        self
    }
}

/// An in-memory [`DisplayProvider`] that never touches the operating system.
///
/// The monitor layout is given at construction time. The provider counts the
/// DPI queries it answers so tests can check which fallback path was taken.
#[derive(Debug)]
pub struct FakeProvider {
    pub monitors: Vec<FakeMonitor>,
    /// Answer for [`DisplayProvider::supports_multiple_monitors`].
    pub multi_monitor: bool,
    pub dpi_aware: bool,
    /// When false, `dpi_for_monitor` reports [`Error::DpiQueryUnavailable`].
    pub per_monitor_dpi: bool,
    /// Answer for `legacy_desktop_dpi`; `None` means the factory cannot be created.
    pub legacy_dpi: Option<f32>,
    pub screen_size: (i32, i32),
    pub work_area: PixelRect,
    /// Explicit virtual screen; the union of all monitors when unset.
    pub virtual_screen: Option<PixelRect>,
    pub windows: Vec<(WindowHandle, MonitorHandle)>,
    modern_dpi_queries: Cell<usize>,
    legacy_dpi_queries: Cell<usize>,
}

impl FakeProvider {
    /// A DPI-aware provider with multi-monitor support and no monitors.
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
            multi_monitor: true,
            dpi_aware: true,
            per_monitor_dpi: true,
            legacy_dpi: None,
            screen_size: (0, 0),
            work_area: PixelRect::default(),
            virtual_screen: None,
            windows: Vec::new(),
            modern_dpi_queries: Cell::new(0),
            legacy_dpi_queries: Cell::new(0),
        }
    }

    /// A single 1920x1080 primary monitor at 96 DPI.
    pub fn single_1080p() -> Self {
        let bounds = PixelRect::new(0, 0, 1920, 1080);
        let mut provider = Self::new()
            .with_monitor(
                FakeMonitor::new(1, bounds)
                    .primary()
                    .with_work_area(PixelRect::new(0, 0, 1920, 1040)),
            )
            .with_screen_size(1920, 1080);
        provider.work_area = PixelRect::new(0, 0, 1920, 1040);
        provider
    }

    /// A 1920x1080 primary at 96 DPI with a 1280x1024 monitor at 120 DPI
    /// (scale 1.25) to its right.
    pub fn dual_mixed_dpi() -> Self {
        Self::new()
            .with_monitor(FakeMonitor::new(1, PixelRect::new(0, 0, 1920, 1080)).primary())
            .with_monitor(FakeMonitor::new(2, PixelRect::new(1920, 0, 1280, 1024)).with_dpi(120))
            .with_screen_size(1920, 1080)
    }

    pub fn with_monitor(mut self, monitor: FakeMonitor) -> Self {
        self.monitors.push(monitor);
        self
    }

    pub fn with_screen_size(mut self, width: i32, height: i32) -> Self {
        self.screen_size = (width, height);
        self
    }

    pub fn with_window(mut self, window: WindowHandle, monitor: MonitorHandle) -> Self {
        self.windows.push((window, monitor));
        self
    }

    /// Number of `dpi_for_monitor` calls answered so far.
    pub fn modern_dpi_queries(&self) -> usize {
        self.modern_dpi_queries.get()
    }

    /// Number of `legacy_desktop_dpi` calls answered so far.
    pub fn legacy_dpi_queries(&self) -> usize {
        self.legacy_dpi_queries.get()
    }

    fn find(&self, handle: MonitorHandle) -> Option<&FakeMonitor> {
        self.monitors.iter().find(|m| m.handle == handle)
    }

    fn primary_monitor(&self) -> Option<&FakeMonitor> {
        self.monitors.iter().find(|m| m.primary)
    }
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Squared distance from a point to the nearest pixel of a rectangle.
fn distance_squared(rect: &PixelRect, point: PixelPoint) -> i64 {
    let dx = if point.x < rect.left() {
        rect.left() - point.x
    } else if point.x >= rect.right() {
        point.x - rect.right() + 1
    } else {
        0
    };
    let dy = if point.y < rect.top() {
        rect.top() - point.y
    } else if point.y >= rect.bottom() {
        point.y - rect.bottom() + 1
    } else {
        0
    };
    let (dx, dy) = (dx as i64, dy as i64);
    dx * dx + dy * dy
}

impl DisplayProvider for FakeProvider {
    fn supports_multiple_monitors(&self) -> bool {
        self.multi_monitor
    }

    fn is_process_dpi_aware(&self) -> bool {
        self.dpi_aware
    }

    fn monitor_handles(&self) -> Vec<MonitorHandle> {
        self.monitors.iter().map(|m| m.handle).collect()
    }

    fn monitor_info(&self, handle: MonitorHandle) -> Result<MonitorInfo> {
        match self.find(handle) {
            Some(monitor) if !monitor.detached => Ok(MonitorInfo {
                monitor: monitor.bounds,
                work: monitor.work,
                primary: monitor.primary,
                device_name: monitor.device_name.clone(),
            }),
            _ => Err(Error::NoSuchMonitor(handle)),
        }
    }

    fn dpi_for_monitor(&self, handle: MonitorHandle) -> Result<u32> {
        self.modern_dpi_queries.set(self.modern_dpi_queries.get() + 1);
        if !self.per_monitor_dpi {
            return Err(Error::DpiQueryUnavailable(
                "per-monitor DPI disabled on fake provider".into(),
            ));
        }
        self.find(handle)
            .map(|m| m.dpi)
            .ok_or_else(|| Error::DpiQueryUnavailable(format!("unknown monitor {handle}")))
    }

    fn legacy_desktop_dpi(&self) -> Result<f32> {
        self.legacy_dpi_queries.set(self.legacy_dpi_queries.get() + 1);
        self.legacy_dpi
            .ok_or_else(|| Error::DpiQueryUnavailable("no legacy DPI factory".into()))
    }

    fn monitor_from_point(
        &self,
        point: PixelPoint,
        default: MonitorDefault,
    ) -> Option<MonitorHandle> {
        let attached = || self.monitors.iter().filter(|m| !m.detached);
        if let Some(monitor) = attached().find(|m| m.bounds.contains(point)) {
            return Some(monitor.handle);
        }
        match default {
            MonitorDefault::Null => None,
            MonitorDefault::Primary => self.primary_monitor().map(|m| m.handle),
            MonitorDefault::Nearest => attached()
                .min_by_key(|m| distance_squared(&m.bounds, point))
                .map(|m| m.handle),
        }
    }

    fn monitor_from_window(&self, window: WindowHandle) -> Option<MonitorHandle> {
        self.windows
            .iter()
            .find(|(w, _)| *w == window)
            .map(|(_, monitor)| *monitor)
            .or_else(|| self.primary_monitor().map(|m| m.handle))
    }

    fn primary_screen_size(&self) -> (i32, i32) {
        self.screen_size
    }

    fn virtual_screen(&self) -> PixelRect {
        if let Some(rect) = self.virtual_screen {
            return rect;
        }
        self.monitors
            .iter()
            .map(|m| m.bounds)
            .reduce(|acc, rect| acc.union(&rect))
            .unwrap_or(PixelRect::new(0, 0, self.screen_size.0, self.screen_size.1))
    }

    fn work_area(&self) -> PixelRect {
        self.work_area
    }
}
