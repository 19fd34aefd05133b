use windows::Win32::Foundation::{HWND, LPARAM};
use windows::Win32::UI::WindowsAndMessaging::{EnumWindows, GetWindowTextW, IsWindowVisible};
use windows::core::{BOOL, Result};

#[derive(Clone, Debug)]
pub struct WindowInfo {
    pub handle: HWND,
    pub title: String,
    pub visible: bool,
}

impl WindowInfo {
    pub fn new(window_handle: HWND) -> Self {
        let mut title = [0u16; 512];
        let len = unsafe { GetWindowTextW(window_handle, &mut title) };
        let title = String::from_utf16_lossy(&title[..len.max(0) as usize]);
        let visible = unsafe { IsWindowVisible(window_handle) }.as_bool();

        Self {
            handle: window_handle,
            title,
            visible,
        }
    }
}

/// Snapshot of every top-level window, in z-order.
pub fn enumerate_windows() -> Result<Vec<WindowInfo>> {
    let mut windows: Vec<WindowInfo> = Vec::new();

    unsafe extern "system" fn enum_window(window: HWND, state: LPARAM) -> BOOL {
        let windows = unsafe { &mut *(state.0 as *mut Vec<WindowInfo>) };
        windows.push(WindowInfo::new(window));
        true.into()
    }

    unsafe { EnumWindows(Some(enum_window), LPARAM(&mut windows as *mut _ as isize))? };
    Ok(windows)
}
