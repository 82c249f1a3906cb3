//! X11 implementation using Xlib.

mod display;

pub use display::X11Provider;
