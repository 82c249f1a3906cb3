//! Display descriptors and the handles that identify them.

use crate::geometry::{PixelRect, Rect};
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque platform identifier for one physical display.
///
/// The operating system owns the underlying handle; this crate never releases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MonitorHandle(pub isize);

impl MonitorHandle {
    /// Reserved value meaning "the primary display, resolved through the
    /// point at the origin" rather than a real platform handle.
    pub const PRIMARY: MonitorHandle = MonitorHandle(0xBAAD_F00D_u32 as isize);

    /// True for [`MonitorHandle::PRIMARY`].
    pub fn is_primary_sentinel(&self) -> bool {
        *self == Self::PRIMARY
    }

    /// True for the zero handle platforms return when no monitor matches.
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for MonitorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Opaque platform window handle (an `HWND` on Windows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

/// Information about one display.
///
/// All fields are resolved once when the descriptor is built. Two screens are
/// equal when they refer to the same monitor handle, regardless of geometry.
///
/// With the `serde` feature a screen can be serialized for diagnostics, but
/// only a [`DisplayProvider`](crate::DisplayProvider) can build one.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Screen {
    pub(crate) handle: MonitorHandle,
    pub(crate) bounds: PixelRect,
    pub(crate) device_name: String,
    pub(crate) primary: bool,
    pub(crate) scale_factor: f64,
}

impl Screen {
    pub(crate) fn new(
        handle: MonitorHandle,
        bounds: PixelRect,
        device_name: String,
        primary: bool,
        scale_factor: f64,
    ) -> Self {
        Self {
            handle,
            bounds,
            device_name,
            primary,
            scale_factor,
        }
    }

    /// The monitor handle, or [`MonitorHandle::PRIMARY`] for the single-monitor path.
    pub fn handle(&self) -> MonitorHandle {
        self.handle
    }

    /// Check whether this screen was resolved from `handle`.
    pub fn is_same_handle(&self, handle: MonitorHandle) -> bool {
        self.handle == handle
    }

    /// Display bounds in pixels.
    pub fn bounds(&self) -> PixelRect {
        self.bounds
    }

    /// Display bounds divided by the scale factor.
    pub fn bounds_scaled(&self) -> Rect {
        self.bounds.scaled(self.scale_factor)
    }

    /// Device name, e.g. `\\.\DISPLAY1` on Windows.
    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    /// Whether the platform flags this display as primary.
    pub fn is_primary(&self) -> bool {
        self.primary
    }

    /// Scale factor relative to 1.0 (96 DPI).
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }
}

impl PartialEq for Screen {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl Eq for Screen {}

impl Hash for Screen {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.handle.hash(state);
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, bounds: {}, primary: {}, scaleFactor: {}",
            self.device_name,
            self.bounds,
            if self.primary { "yes" } else { "no" },
            self.scale_factor
        )
    }
}
