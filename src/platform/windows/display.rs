//! Windows display queries through GDI, HiDpi and Direct2D.

use crate::error::{Error, Result};
use crate::geometry::{PixelPoint, PixelRect};
use crate::provider::{DisplayProvider, MonitorDefault, MonitorInfo, device_name_from_wide};
use crate::screen::{MonitorHandle, WindowHandle};
use std::ffi::c_void;
use std::mem::size_of;
use windows::Win32::Foundation::{BOOL, HWND, LPARAM, POINT, RECT};
use windows::Win32::Graphics::Direct2D::{
    D2D1_FACTORY_TYPE_SINGLE_THREADED, D2D1CreateFactory, ID2D1Factory,
};
use windows::Win32::Graphics::Gdi::{
    EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITOR_DEFAULTTONEAREST,
    MONITOR_DEFAULTTONULL, MONITOR_DEFAULTTOPRIMARY, MONITOR_FROM_FLAGS, MONITORINFO,
    MONITORINFOEXW, MonitorFromPoint, MonitorFromWindow,
};
use windows::Win32::UI::HiDpi::{GetDpiForMonitor, MDT_EFFECTIVE_DPI};
use windows::Win32::UI::WindowsAndMessaging::{
    GetSystemMetrics, IsProcessDPIAware, MONITORINFOF_PRIMARY, SM_CMONITORS, SM_CXSCREEN,
    SM_CXVIRTUALSCREEN, SM_CYSCREEN, SM_CYVIRTUALSCREEN, SM_XVIRTUALSCREEN, SM_YVIRTUALSCREEN,
    SPI_GETWORKAREA, SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS, SystemParametersInfoW,
};

/// [`DisplayProvider`] backed by the Win32 API.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsProvider;

impl WindowsProvider {
    pub fn new() -> Self {
        Self
    }
}

fn to_hmonitor(handle: MonitorHandle) -> HMONITOR {
    HMONITOR(handle.0 as *mut c_void)
}

fn from_hmonitor(hmonitor: HMONITOR) -> Option<MonitorHandle> {
    if hmonitor.0.is_null() {
        None
    } else {
        Some(MonitorHandle(hmonitor.0 as isize))
    }
}

fn pixel_rect(rect: &RECT) -> PixelRect {
    PixelRect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom)
}

fn monitor_from_flags(default: MonitorDefault) -> MONITOR_FROM_FLAGS {
    match default {
        MonitorDefault::Null => MONITOR_DEFAULTTONULL,
        MonitorDefault::Primary => MONITOR_DEFAULTTOPRIMARY,
        MonitorDefault::Nearest => MONITOR_DEFAULTTONEAREST,
    }
}

/// Collects every handle into the `Vec` passed through `lparam`.
///
/// # Safety
///
/// Only called inside `EnumDisplayMonitors`, with `lparam` pointing at a
/// `Vec<MonitorHandle>` that outlives that call.
unsafe extern "system" fn monitor_enum_proc(
    hmonitor: HMONITOR,
    _hdc: HDC,
    _lprc: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    let handles = unsafe { &mut *(lparam.0 as *mut Vec<MonitorHandle>) };
    if let Some(handle) = from_hmonitor(hmonitor) {
        handles.push(handle);
    }
    BOOL(1)
}

impl DisplayProvider for WindowsProvider {
    fn supports_multiple_monitors(&self) -> bool {
        unsafe { GetSystemMetrics(SM_CMONITORS) != 0 }
    }

    fn is_process_dpi_aware(&self) -> bool {
        unsafe { IsProcessDPIAware().as_bool() }
    }

    fn monitor_handles(&self) -> Vec<MonitorHandle> {
        let mut handles: Vec<MonitorHandle> = Vec::new();
        let ok = unsafe {
            EnumDisplayMonitors(
                None,
                None,
                Some(monitor_enum_proc),
                LPARAM(&mut handles as *mut Vec<MonitorHandle> as isize),
            )
        };
        if !ok.as_bool() {
            log::warn!("EnumDisplayMonitors failed after {} monitors", handles.len());
        }
        handles
    }

    fn monitor_info(&self, handle: MonitorHandle) -> Result<MonitorInfo> {
        let mut info = MONITORINFOEXW {
            monitorInfo: MONITORINFO {
                cbSize: size_of::<MONITORINFOEXW>() as u32,
                ..Default::default()
            },
            ..Default::default()
        };
        let ok = unsafe {
            GetMonitorInfoW(to_hmonitor(handle), &mut info as *mut _ as *mut MONITORINFO)
        };
        if !ok.as_bool() {
            return Err(Error::NoSuchMonitor(handle));
        }

        Ok(MonitorInfo {
            monitor: pixel_rect(&info.monitorInfo.rcMonitor),
            work: pixel_rect(&info.monitorInfo.rcWork),
            primary: (info.monitorInfo.dwFlags & MONITORINFOF_PRIMARY) != 0,
            device_name: device_name_from_wide(&info.szDevice),
        })
    }

    fn dpi_for_monitor(&self, handle: MonitorHandle) -> Result<u32> {
        let mut dpi_x: u32 = 0;
        let mut dpi_y: u32 = 0;
        unsafe { GetDpiForMonitor(to_hmonitor(handle), MDT_EFFECTIVE_DPI, &mut dpi_x, &mut dpi_y) }
            .map_err(|e| Error::DpiQueryUnavailable(format!("GetDpiForMonitor failed: {e}")))?;
        Ok(dpi_x)
    }

    #[allow(deprecated)]
    fn legacy_desktop_dpi(&self) -> Result<f32> {
        // The factory is released when it goes out of scope, whatever the outcome.
        let factory: ID2D1Factory =
            unsafe { D2D1CreateFactory(D2D1_FACTORY_TYPE_SINGLE_THREADED, None) }.map_err(|e| {
                Error::DpiQueryUnavailable(format!("D2D1CreateFactory failed: {e}"))
            })?;
        let mut dpi_x: f32 = 0.0;
        let mut dpi_y: f32 = 0.0;
        unsafe { factory.GetDesktopDpi(&mut dpi_x, &mut dpi_y) };
        Ok(dpi_x)
    }

    fn monitor_from_point(
        &self,
        point: PixelPoint,
        default: MonitorDefault,
    ) -> Option<MonitorHandle> {
        let pt = POINT {
            x: point.x,
            y: point.y,
        };
        from_hmonitor(unsafe { MonitorFromPoint(pt, monitor_from_flags(default)) })
    }

    fn monitor_from_window(&self, window: WindowHandle) -> Option<MonitorHandle> {
        let hwnd = HWND(window.0 as *mut c_void);
        from_hmonitor(unsafe { MonitorFromWindow(hwnd, MONITOR_DEFAULTTONEAREST) })
    }

    fn primary_screen_size(&self) -> (i32, i32) {
        unsafe { (GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) }
    }

    fn virtual_screen(&self) -> PixelRect {
        unsafe {
            PixelRect::new(
                GetSystemMetrics(SM_XVIRTUALSCREEN),
                GetSystemMetrics(SM_YVIRTUALSCREEN),
                GetSystemMetrics(SM_CXVIRTUALSCREEN),
                GetSystemMetrics(SM_CYVIRTUALSCREEN),
            )
        }
    }

    fn work_area(&self) -> PixelRect {
        let mut rect = RECT::default();
        let result = unsafe {
            SystemParametersInfoW(
                SPI_GETWORKAREA,
                0,
                Some((&mut rect as *mut RECT).cast()),
                SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS(0),
            )
        };
        if let Err(e) = result {
            log::warn!("SPI_GETWORKAREA failed: {e}");
        }
        pixel_rect(&rect)
    }
}
