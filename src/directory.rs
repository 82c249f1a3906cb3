//! All displays on the system, and the virtual screen they form.

use crate::error::Result;
use crate::geometry::{PixelPoint, PixelRect, Rect};
use crate::provider::{DisplayProvider, MonitorDefault};
use crate::resolver::resolve;
use crate::screen::{MonitorHandle, Screen, WindowHandle};

/// Display queries against an injected [`DisplayProvider`].
///
/// Nothing is cached: every call goes back to the provider, so two calls may
/// observe different hardware if monitors were plugged in between them.
#[derive(Debug, Clone, Default)]
pub struct ScreenDirectory<P> {
    provider: P,
}

impl<P: DisplayProvider> ScreenDirectory<P> {
    /// Wrap a provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The provider every query goes through.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Whether the platform reports multi-monitor support.
    pub fn multi_monitor_support(&self) -> bool {
        self.provider.supports_multiple_monitors()
    }

    /// Whether scale factors are queried at all. When false, every scale factor is 1.0.
    pub fn is_process_dpi_aware(&self) -> bool {
        self.provider.is_process_dpi_aware()
    }

    /// Every display on the system. Never empty.
    ///
    /// Falls back to a single primary screen when the platform has no
    /// multi-monitor support or enumerates nothing.
    pub fn all_screens(&self) -> Result<Vec<Screen>> {
        if self.provider.supports_multiple_monitors() {
            let screens = self
                .provider
                .monitor_handles()
                .into_iter()
                .map(|handle| resolve(&self.provider, handle))
                .collect::<Result<Vec<_>>>()?;
            if !screens.is_empty() {
                return Ok(screens);
            }
            log::debug!("monitor enumeration returned nothing, using the primary screen");
        }

        Ok(vec![self.sentinel_screen()?])
    }

    /// The primary display.
    pub fn primary_screen(&self) -> Result<Screen> {
        if !self.provider.supports_multiple_monitors() {
            return self.sentinel_screen();
        }

        match self.all_screens()?.into_iter().find(Screen::is_primary) {
            Some(screen) => Ok(screen),
            None => {
                log::debug!("no enumerated screen is flagged primary, using the primary screen");
                self.sentinel_screen()
            }
        }
    }

    /// The display containing a pixel, or the one nearest to it.
    pub fn screen_from_point(&self, point: PixelPoint) -> Result<Screen> {
        if !self.provider.supports_multiple_monitors() {
            return self.sentinel_screen();
        }
        match self.provider.monitor_from_point(point, MonitorDefault::Nearest) {
            Some(handle) if !handle.is_null() => resolve(&self.provider, handle),
            _ => {
                log::warn!("no monitor near ({}, {}), using the primary screen", point.x, point.y);
                self.sentinel_screen()
            }
        }
    }

    /// The display holding the largest part of a window, or the one nearest to it.
    pub fn screen_from_window(&self, window: WindowHandle) -> Result<Screen> {
        if !self.provider.supports_multiple_monitors() {
            return self.sentinel_screen();
        }
        match self.provider.monitor_from_window(window) {
            Some(handle) if !handle.is_null() => resolve(&self.provider, handle),
            _ => {
                log::warn!("no monitor for window {:#x}, using the primary screen", window.0);
                self.sentinel_screen()
            }
        }
    }

    /// Work area of a display in pixels, queried again on every call.
    pub fn working_area(&self, screen: &Screen) -> Result<PixelRect> {
        if !self.provider.supports_multiple_monitors() || screen.handle().is_primary_sentinel() {
            return Ok(self.provider.work_area());
        }
        Ok(self.provider.monitor_info(screen.handle())?.work)
    }

    /// Work area of a display divided by its scale factor.
    pub fn working_area_scaled(&self, screen: &Screen) -> Result<Rect> {
        Ok(self.working_area(screen)?.scaled(screen.scale_factor()))
    }

    /// Bounds of all displays in unscaled pixels, as the platform reports them.
    pub fn virtual_screen(&self) -> PixelRect {
        self.provider.virtual_screen()
    }

    /// Bounds of all displays in scaled coordinates.
    ///
    /// Without DPI awareness this is [`Self::virtual_screen`] unchanged.
    /// Otherwise it is the box around every screen's scaled bounds, always
    /// including the origin.
    pub fn virtual_screen_scaled(&self) -> Result<Rect> {
        if !self.provider.is_process_dpi_aware() {
            return Ok(Rect::from(self.virtual_screen()));
        }

        let (x_min, y_min, x_max, y_max) = self.all_screens()?.iter().fold(
            (0.0_f64, 0.0_f64, 0.0_f64, 0.0_f64),
            |(x_min, y_min, x_max, y_max), screen| {
                let scaled = screen.bounds_scaled();
                (
                    x_min.min(scaled.left()),
                    y_min.min(scaled.top()),
                    x_max.max(scaled.right()),
                    y_max.max(scaled.bottom()),
                )
            },
        );
        Ok(Rect::from_ltrb(x_min, y_min, x_max, y_max))
    }

    /// One-line diagnostic description of a screen, including its work area.
    pub fn describe(&self, screen: &Screen) -> Result<String> {
        Ok(format!(
            "{}, bounds: {}, workArea: {}, primary: {}, scaleFactor: {}",
            screen.device_name(),
            screen.bounds(),
            self.working_area(screen)?,
            if screen.is_primary() { "yes" } else { "no" },
            screen.scale_factor()
        ))
    }

    fn sentinel_screen(&self) -> Result<Screen> {
        resolve(&self.provider, MonitorHandle::PRIMARY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::provider::{FakeMonitor, FakeProvider};

    #[test]
    fn test_all_screens_resolves_each_handle() {
        let directory = ScreenDirectory::new(FakeProvider::dual_mixed_dpi());
        let screens = directory.all_screens().unwrap();

        assert_eq!(screens.len(), 2);
        assert_eq!(screens[0].handle(), MonitorHandle(1));
        assert_eq!(screens[1].handle(), MonitorHandle(2));
        assert_eq!(screens.iter().filter(|s| s.is_primary()).count(), 1);
    }

    #[test]
    fn test_empty_enumeration_falls_back_to_sentinel() {
        let directory = ScreenDirectory::new(FakeProvider::new().with_screen_size(1280, 800));
        let screens = directory.all_screens().unwrap();

        assert_eq!(screens.len(), 1);
        assert_eq!(screens[0].handle(), MonitorHandle::PRIMARY);
        assert_eq!(screens[0].bounds(), PixelRect::new(0, 0, 1280, 800));
        assert!(screens[0].is_primary());
    }

    #[test]
    fn test_no_multi_monitor_support_returns_sentinel_only() {
        let mut provider = FakeProvider::dual_mixed_dpi();
        provider.multi_monitor = false;
        let directory = ScreenDirectory::new(provider);

        let screens = directory.all_screens().unwrap();
        assert_eq!(screens, vec![directory.primary_screen().unwrap()]);
        assert_eq!(screens[0].handle(), MonitorHandle::PRIMARY);
    }

    #[test]
    fn test_stale_handle_fails_enumeration() {
        let provider = FakeProvider::dual_mixed_dpi()
            .with_monitor(FakeMonitor::new(9, PixelRect::new(3200, 0, 800, 600)).detached());
        let directory = ScreenDirectory::new(provider);

        assert!(matches!(
            directory.all_screens(),
            Err(Error::NoSuchMonitor(MonitorHandle(9)))
        ));
    }

    #[test]
    fn test_primary_screen_prefers_flagged_monitor() {
        let provider = FakeProvider::new()
            .with_monitor(FakeMonitor::new(4, PixelRect::new(-1920, 0, 1920, 1080)))
            .with_monitor(FakeMonitor::new(5, PixelRect::new(0, 0, 2560, 1440)).primary());
        let directory = ScreenDirectory::new(provider);

        let primary = directory.primary_screen().unwrap();
        assert_eq!(primary.handle(), MonitorHandle(5));
        assert_eq!(primary.bounds(), PixelRect::new(0, 0, 2560, 1440));
    }

    #[test]
    fn test_primary_screen_without_flag_uses_sentinel() {
        let provider = FakeProvider::new()
            .with_monitor(FakeMonitor::new(4, PixelRect::new(0, 0, 1920, 1080)))
            .with_screen_size(1920, 1080);
        let directory = ScreenDirectory::new(provider);

        let primary = directory.primary_screen().unwrap();
        assert_eq!(primary.handle(), MonitorHandle::PRIMARY);
        assert!(primary.is_primary());
    }

    #[test]
    fn test_working_area_paths() {
        let mut provider = FakeProvider::single_1080p().with_monitor(
            FakeMonitor::new(2, PixelRect::new(1920, 0, 1920, 1080))
                .with_dpi(192)
                .with_work_area(PixelRect::new(1920, 0, 1920, 1000)),
        );
        provider.work_area = PixelRect::new(0, 0, 1920, 1040);
        let directory = ScreenDirectory::new(provider);

        let screens = directory.all_screens().unwrap();
        assert_eq!(
            directory.working_area(&screens[1]).unwrap(),
            PixelRect::new(1920, 0, 1920, 1000)
        );
        assert_eq!(
            directory.working_area_scaled(&screens[1]).unwrap(),
            Rect::new(960.0, 0.0, 960.0, 500.0)
        );

        let sentinel = resolve(directory.provider(), MonitorHandle::PRIMARY).unwrap();
        assert_eq!(
            directory.working_area(&sentinel).unwrap(),
            PixelRect::new(0, 0, 1920, 1040)
        );
    }

    #[test]
    fn test_virtual_screen_scaled_mixed_dpi() {
        let directory = ScreenDirectory::new(FakeProvider::dual_mixed_dpi());
        assert_eq!(
            directory.virtual_screen_scaled().unwrap(),
            Rect::new(0.0, 0.0, 2944.0, 1080.0)
        );
        assert_eq!(directory.virtual_screen(), PixelRect::new(0, 0, 3200, 1080));
    }

    #[test]
    fn test_virtual_screen_scaled_includes_origin() {
        let provider = FakeProvider::new()
            .with_monitor(FakeMonitor::new(1, PixelRect::new(1000, 500, 800, 600)).primary());
        let directory = ScreenDirectory::new(provider);

        assert_eq!(
            directory.virtual_screen_scaled().unwrap(),
            Rect::new(0.0, 0.0, 1800.0, 1100.0)
        );
    }

    #[test]
    fn test_virtual_screen_scaled_negative_coordinates() {
        let provider = FakeProvider::new()
            .with_monitor(FakeMonitor::new(1, PixelRect::new(0, 0, 1920, 1080)).primary())
            .with_monitor(FakeMonitor::new(2, PixelRect::new(-3840, -400, 3840, 2160)).with_dpi(192));
        let directory = ScreenDirectory::new(provider);

        assert_eq!(
            directory.virtual_screen_scaled().unwrap(),
            Rect::from_ltrb(-1920.0, -200.0, 1920.0, 1080.0)
        );
    }

    #[test]
    fn test_virtual_screen_scaled_without_dpi_awareness_is_unscaled() {
        let mut provider = FakeProvider::dual_mixed_dpi();
        provider.dpi_aware = false;
        provider.virtual_screen = Some(PixelRect::new(-10, -10, 3210, 1090));
        let directory = ScreenDirectory::new(provider);

        assert_eq!(
            directory.virtual_screen_scaled().unwrap(),
            Rect::from(directory.virtual_screen())
        );
        assert_eq!(directory.provider().modern_dpi_queries(), 0);
    }

    #[test]
    fn test_screen_from_point_and_window() {
        let provider = FakeProvider::dual_mixed_dpi().with_window(WindowHandle(0x42), MonitorHandle(2));
        let directory = ScreenDirectory::new(provider);

        let screen = directory.screen_from_point(PixelPoint::new(2500, 100)).unwrap();
        assert_eq!(screen.handle(), MonitorHandle(2));

        let nearest = directory.screen_from_point(PixelPoint::new(-50, 100)).unwrap();
        assert_eq!(nearest.handle(), MonitorHandle(1));

        let window = directory.screen_from_window(WindowHandle(0x42)).unwrap();
        assert_eq!(window.handle(), MonitorHandle(2));
        assert_eq!(window.scale_factor(), 1.25);
    }

    #[test]
    fn test_screen_from_point_without_monitors_uses_sentinel() {
        let directory = ScreenDirectory::new(FakeProvider::new().with_screen_size(800, 600));
        let screen = directory.screen_from_point(PixelPoint::new(10, 10)).unwrap();
        assert_eq!(screen.handle(), MonitorHandle::PRIMARY);
    }

    #[test]
    fn test_describe_includes_work_area() {
        let directory = ScreenDirectory::new(FakeProvider::single_1080p());
        let screen = directory.primary_screen().unwrap();
        assert_eq!(
            directory.describe(&screen).unwrap(),
            "\\\\.\\DISPLAY1, bounds: {X=0, Y=0, Width=1920, Height=1080}, \
             workArea: {X=0, Y=0, Width=1920, Height=1040}, primary: yes, scaleFactor: 1"
        );
    }
}
