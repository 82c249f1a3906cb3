//! Platform-specific implementations of [`DisplayProvider`](crate::DisplayProvider).
//!
//! | Module    | OS      | API used                                                  |
//! |-----------|---------|-----------------------------------------------------------|
//! | `windows` | Windows | `EnumDisplayMonitors`, `GetDpiForMonitor`, Direct2D       |
//! | `macos`   | macOS   | `CGGetActiveDisplayList`, `CGDisplayBounds`               |
//! | `linux`   | Linux   | `XOpenDisplay`, `XDisplayWidth`, `XDisplayWidthMM` (Xlib) |

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
pub use self::macos::MacosProvider as NativeProvider;

#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "windows")]
pub use self::windows::WindowsProvider as NativeProvider;

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "linux")]
pub use self::linux::LinuxProvider as NativeProvider;

// Ensure at least one platform is supported
#[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
compile_error!("multiscreen only supports macOS, Windows, and Linux");
