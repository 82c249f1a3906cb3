//! macOS platform implementation.

mod display;

pub use display::MacosProvider;
