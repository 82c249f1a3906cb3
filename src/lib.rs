//! # multiscreen
//!
//! Cross-platform monitor enumeration with per-display DPI scale factors.
//!
//! ## Features
//!
//! - Enumerate every attached display with its pixel bounds, work area,
//!   device name and primary flag
//! - Per-monitor DPI with a fallback chain (per-monitor, legacy desktop, 96)
//! - Scaled (logical) views of bounds, work areas and the virtual screen
//! - Platform access behind the [`DisplayProvider`] trait, with an in-memory
//!   [`FakeProvider`] for tests
//!
//! ## Quick Start
//!
//! ```no_run
//! use multiscreen::{screens, virtual_screen_scaled};
//!
//! for screen in screens()? {
//!     println!("{screen}");
//!     println!("  scaled bounds: {}", screen.bounds_scaled());
//! }
//! println!("virtual screen: {}", virtual_screen_scaled()?);
//! # Ok::<(), multiscreen::Error>(())
//! ```
//!
//! ### Injecting a provider
//!
//! ```
//! use multiscreen::{FakeProvider, Rect, ScreenDirectory};
//!
//! let directory = ScreenDirectory::new(FakeProvider::dual_mixed_dpi());
//! assert_eq!(directory.all_screens()?.len(), 2);
//! assert_eq!(
//!     directory.virtual_screen_scaled()?,
//!     Rect::new(0.0, 0.0, 2944.0, 1080.0)
//! );
//! # Ok::<(), multiscreen::Error>(())
//! ```
//!
//! ## Architecture
//!
//! Nothing is cached. Every query goes back to the provider, and every
//! [`Screen`] is resolved from scratch, so results reflect the hardware at the
//! time of the call.

pub mod directory;
pub mod display;
pub mod error;
pub mod geometry;
pub mod provider;
pub mod resolver;
pub mod screen;

mod platform;

// Re-exports
pub use directory::ScreenDirectory;
pub use display::{
    is_process_dpi_aware, multi_monitor_support, primary_screen, screen_from_point,
    screen_from_window, screens, virtual_screen, virtual_screen_scaled, working_area,
    working_area_scaled,
};
pub use error::{Error, Result};
pub use geometry::{PixelPoint, PixelRect, Point, Rect, Size};
pub use platform::NativeProvider;
pub use provider::{DisplayProvider, FakeMonitor, FakeProvider, MonitorDefault, MonitorInfo};
pub use screen::{MonitorHandle, Screen, WindowHandle};
