//! Win32 window enumeration, process resolution and activation.
//!
//! The only platform with real backends today. Everything here is a thin
//! translation layer: no ranking logic, just OS calls mapped onto the
//! capability traits.

use std::os::windows::ffi::OsStringExt;
use std::path::Path;

use windows_sys::Win32::Foundation::{CloseHandle, HWND, LPARAM, MAX_PATH};
use windows_sys::Win32::System::Threading::{
    OpenProcess, PROCESS_QUERY_LIMITED_INFORMATION, QueryFullProcessImageNameW,
};
use windows_sys::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetWindowTextLengthW, GetWindowTextW, GetWindowThreadProcessId, IsWindowVisible,
    SetForegroundWindow,
};

use crate::error::{PlatformError, Result};
use crate::session::ActivationSink;
use crate::snapshot::{ProcessResolver, WindowSource};
use crate::types::WindowHandle;

fn to_handle(hwnd: HWND) -> WindowHandle {
    WindowHandle(hwnd as usize as u64)
}

fn to_hwnd(handle: WindowHandle) -> HWND {
    handle.0 as usize as HWND
}

/// Snapshots visible top-level windows with a non-empty title.
pub struct Win32WindowSource;

impl WindowSource for Win32WindowSource {
    fn open_windows(&self) -> Result<Vec<(WindowHandle, String)>> {
        let mut windows: Vec<(WindowHandle, String)> = Vec::new();

        unsafe extern "system" fn visit(hwnd: HWND, lparam: LPARAM) -> i32 {
            // lparam is the &mut Vec passed below; only live for this call.
            let windows = unsafe { &mut *(lparam as *mut Vec<(WindowHandle, String)>) };
            if unsafe { IsWindowVisible(hwnd) } == 0 {
                return 1;
            }
            let length = unsafe { GetWindowTextLengthW(hwnd) };
            if length <= 0 {
                return 1;
            }
            let mut buffer = vec![0_u16; length as usize + 1];
            let copied = unsafe { GetWindowTextW(hwnd, buffer.as_mut_ptr(), buffer.len() as i32) };
            if copied > 0 {
                let title = String::from_utf16_lossy(&buffer[..copied as usize]);
                windows.push((to_handle(hwnd), title));
            }
            1
        }

        let ok = unsafe {
            EnumWindows(
                Some(visit),
                std::ptr::addr_of_mut!(windows) as isize,
            )
        };
        if ok == 0 {
            return Err(PlatformError::Enumeration(last_error_message()).into());
        }
        Ok(windows)
    }
}

/// Resolves a window's owning executable through its process image path.
pub struct Win32ProcessResolver;

impl ProcessResolver for Win32ProcessResolver {
    fn executable_name(&self, handle: WindowHandle) -> String {
        let mut process_id = 0_u32;
        unsafe { GetWindowThreadProcessId(to_hwnd(handle), &mut process_id) };
        if process_id == 0 {
            return String::new();
        }

        // Access can be denied for elevated processes; the candidate is then
        // ranked on its title alone.
        let process =
            unsafe { OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, 0, process_id) };
        if process.is_null() {
            return String::new();
        }

        let mut buffer = vec![0_u16; MAX_PATH as usize];
        let mut size = buffer.len() as u32;
        let ok = unsafe { QueryFullProcessImageNameW(process, 0, buffer.as_mut_ptr(), &mut size) };
        unsafe { CloseHandle(process) };
        if ok == 0 {
            return String::new();
        }

        let full_path = std::ffi::OsString::from_wide(&buffer[..size as usize]);
        Path::new(&full_path)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Brings the selected window to the foreground.
pub struct Win32ActivationSink;

impl ActivationSink for Win32ActivationSink {
    fn activate(&self, handle: WindowHandle) -> Result<()> {
        let ok = unsafe { SetForegroundWindow(to_hwnd(handle)) };
        if ok == 0 {
            return Err(PlatformError::Activation {
                handle,
                reason: last_error_message(),
            }
            .into());
        }
        Ok(())
    }
}

fn last_error_message() -> String {
    std::io::Error::last_os_error().to_string()
}
