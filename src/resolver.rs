//! Builds [`Screen`] descriptors from monitor handles.
//!
//! Scale factors come from a fallback chain: per-monitor DPI, then the legacy
//! desktop DPI, then the 96 DPI baseline. DPI failures never abort a
//! resolution. A stale handle in the geometry query does, with
//! [`Error::NoSuchMonitor`](crate::Error::NoSuchMonitor).

use crate::error::{Error, Result};
use crate::geometry::{PixelPoint, PixelRect};
use crate::provider::{BASELINE_DPI, DisplayProvider, MonitorDefault};
use crate::screen::{MonitorHandle, Screen};

/// Device name used for the single-monitor path.
pub const GENERIC_DEVICE_NAME: &str = "DISPLAY";

/// Resolve a monitor handle, or [`MonitorHandle::PRIMARY`], into a [`Screen`].
pub fn resolve<P: DisplayProvider + ?Sized>(provider: &P, handle: MonitorHandle) -> Result<Screen> {
    let scale_factor = if provider.is_process_dpi_aware() {
        monitor_dpi(provider, handle) / BASELINE_DPI as f64
    } else {
        1.0
    };

    if !provider.supports_multiple_monitors() || handle.is_primary_sentinel() {
        let (width, height) = provider.primary_screen_size();
        return Ok(Screen::new(
            handle,
            PixelRect::new(0, 0, width, height),
            GENERIC_DEVICE_NAME.to_string(),
            true,
            scale_factor,
        ));
    }

    let info = provider.monitor_info(handle)?;
    Ok(Screen::new(
        handle,
        info.monitor,
        info.device_name,
        info.primary,
        scale_factor,
    ))
}

/// Horizontal DPI of a monitor, always positive.
fn monitor_dpi<P: DisplayProvider + ?Sized>(provider: &P, handle: MonitorHandle) -> f64 {
    let target = if handle.is_primary_sentinel() {
        provider.monitor_from_point(PixelPoint::new(0, 0), MonitorDefault::Primary)
    } else {
        Some(handle)
    };

    let modern = match target {
        Some(target) => provider.dpi_for_monitor(target),
        None => {
            log::warn!("no monitor at the origin, skipping per-monitor DPI query");
            Err(Error::DpiQueryUnavailable("no primary monitor".into()))
        }
    };

    match modern {
        Ok(dpi) if dpi > 0 => return dpi as f64,
        Ok(dpi) => log::debug!("monitor {handle} reported DPI {dpi}, trying legacy DPI"),
        Err(e) => log::debug!("per-monitor DPI for {handle} failed ({e}), trying legacy DPI"),
    }

    match provider.legacy_desktop_dpi() {
        Ok(dpi) if dpi.is_finite() && dpi > 0.0 => dpi as f64,
        Ok(dpi) => {
            log::debug!("legacy DPI query returned {dpi}, using {BASELINE_DPI}");
            BASELINE_DPI as f64
        }
        Err(e) => {
            log::debug!("legacy DPI query failed ({e}), using {BASELINE_DPI}");
            BASELINE_DPI as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{FakeMonitor, FakeProvider};

    #[test]
    fn test_resolve_uses_monitor_info_and_dpi() {
        let provider = FakeProvider::dual_mixed_dpi();
        let screen = resolve(&provider, MonitorHandle(2)).unwrap();

        assert_eq!(screen.handle(), MonitorHandle(2));
        assert_eq!(screen.bounds(), PixelRect::new(1920, 0, 1280, 1024));
        assert_eq!(screen.device_name(), "\\\\.\\DISPLAY2");
        assert!(!screen.is_primary());
        assert_eq!(screen.scale_factor(), 1.25);
        assert_eq!(provider.legacy_dpi_queries(), 0);
    }

    #[test]
    fn test_not_dpi_aware_skips_dpi_queries() {
        let mut provider = FakeProvider::dual_mixed_dpi();
        provider.dpi_aware = false;

        let screen = resolve(&provider, MonitorHandle(2)).unwrap();
        assert_eq!(screen.scale_factor(), 1.0);
        assert_eq!(provider.modern_dpi_queries(), 0);
        assert_eq!(provider.legacy_dpi_queries(), 0);
    }

    #[test]
    fn test_falls_back_to_legacy_dpi() {
        let mut provider = FakeProvider::dual_mixed_dpi();
        provider.per_monitor_dpi = false;
        provider.legacy_dpi = Some(144.0);

        let screen = resolve(&provider, MonitorHandle(1)).unwrap();
        assert_eq!(screen.scale_factor(), 1.5);
        assert_eq!(provider.modern_dpi_queries(), 1);
        assert_eq!(provider.legacy_dpi_queries(), 1);
    }

    #[test]
    fn test_zero_per_monitor_dpi_falls_back_to_legacy() {
        let mut provider = FakeProvider::new()
            .with_monitor(FakeMonitor::new(1, PixelRect::new(0, 0, 1920, 1080)).primary().with_dpi(0));
        provider.legacy_dpi = Some(144.0);

        let screen = resolve(&provider, MonitorHandle(1)).unwrap();
        assert_eq!(screen.scale_factor(), 1.5);
        assert_eq!(provider.modern_dpi_queries(), 1);
        assert_eq!(provider.legacy_dpi_queries(), 1);
    }

    #[test]
    fn test_falls_back_to_baseline_dpi() {
        let mut provider = FakeProvider::dual_mixed_dpi();
        provider.per_monitor_dpi = false;
        provider.legacy_dpi = None;
        assert_eq!(resolve(&provider, MonitorHandle(2)).unwrap().scale_factor(), 1.0);

        provider.legacy_dpi = Some(0.0);
        assert_eq!(resolve(&provider, MonitorHandle(2)).unwrap().scale_factor(), 1.0);

        provider.legacy_dpi = Some(f32::NAN);
        assert_eq!(resolve(&provider, MonitorHandle(2)).unwrap().scale_factor(), 1.0);
    }

    #[test]
    fn test_sentinel_takes_single_monitor_path() {
        let provider = FakeProvider::new()
            .with_monitor(FakeMonitor::new(1, PixelRect::new(0, 0, 2560, 1440)).primary().with_dpi(192))
            .with_screen_size(2560, 1440);

        let screen = resolve(&provider, MonitorHandle::PRIMARY).unwrap();
        assert_eq!(screen.handle(), MonitorHandle::PRIMARY);
        assert_eq!(screen.bounds(), PixelRect::new(0, 0, 2560, 1440));
        assert_eq!(screen.device_name(), GENERIC_DEVICE_NAME);
        assert!(screen.is_primary());
        // DPI comes from the monitor at the origin.
        assert_eq!(screen.scale_factor(), 2.0);
    }

    #[test]
    fn test_sentinel_without_primary_monitor_degrades() {
        let mut provider = FakeProvider::new().with_screen_size(1024, 768);
        provider.legacy_dpi = Some(120.0);

        let screen = resolve(&provider, MonitorHandle::PRIMARY).unwrap();
        assert_eq!(screen.scale_factor(), 1.25);
        assert_eq!(provider.modern_dpi_queries(), 0);
    }

    #[test]
    fn test_no_multi_monitor_support_ignores_monitor_info() {
        let mut provider = FakeProvider::dual_mixed_dpi();
        provider.multi_monitor = false;

        let screen = resolve(&provider, MonitorHandle(2)).unwrap();
        assert_eq!(screen.handle(), MonitorHandle(2));
        assert_eq!(screen.bounds(), PixelRect::new(0, 0, 1920, 1080));
        assert_eq!(screen.device_name(), GENERIC_DEVICE_NAME);
        assert!(screen.is_primary());
    }

    #[test]
    fn test_stale_handle_is_surfaced() {
        let provider = FakeProvider::new()
            .with_monitor(FakeMonitor::new(3, PixelRect::new(0, 0, 800, 600)).detached());
        let err = resolve(&provider, MonitorHandle(3)).unwrap_err();
        assert!(matches!(err, Error::NoSuchMonitor(MonitorHandle(3))));
    }
}
