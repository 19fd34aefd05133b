use tracing::trace;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{GetClassNameW, RealGetWindowClassW};

use crate::class_name::{ClassNameMatcher, ClassNameSource};
use crate::comparison::Comparison;

/// Class names as reported by user32.
#[derive(Clone, Copy, Debug, Default)]
pub struct Win32ClassNames;

impl ClassNameSource for Win32ClassNames {
    type Handle = HWND;

    fn is_null(&self, handle: HWND) -> bool {
        handle.is_invalid()
    }

    fn class_name(&self, handle: HWND, buffer: &mut [u16]) -> usize {
        let len = unsafe { GetClassNameW(handle, buffer) };
        if len <= 0 {
            trace!(hwnd = ?handle.0, "GetClassNameW returned no class name");
            return 0;
        }
        len as usize
    }

    fn real_class_name(&self, handle: HWND, buffer: &mut [u16]) -> usize {
        let len = unsafe { RealGetWindowClassW(handle, buffer) };
        if len == 0 {
            trace!(hwnd = ?handle.0, "RealGetWindowClassW returned no class name");
        }
        len as usize
    }
}

/// Class name predicates directly on a window handle.
pub trait HwndExt {
    fn real_class_name_equals(self, value: &str, comparison: Comparison) -> bool;

    fn class_name_equals(self, value: &str, comparison: Comparison) -> bool;

    fn class_name_equals_any<I>(self, comparison: Comparison, values: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>;

    fn class_name_contains(self, value: &str, comparison: Comparison) -> bool;
}

impl HwndExt for HWND {
    fn real_class_name_equals(self, value: &str, comparison: Comparison) -> bool {
        ClassNameMatcher::new(Win32ClassNames).real_class_name_equals(self, value, comparison)
    }

    fn class_name_equals(self, value: &str, comparison: Comparison) -> bool {
        ClassNameMatcher::new(Win32ClassNames).class_name_equals(self, value, comparison)
    }

    fn class_name_equals_any<I>(self, comparison: Comparison, values: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        ClassNameMatcher::new(Win32ClassNames).class_name_equals_any(self, comparison, values)
    }

    fn class_name_contains(self, value: &str, comparison: Comparison) -> bool {
        ClassNameMatcher::new(Win32ClassNames).class_name_contains(self, value, comparison)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use windows::Win32::UI::WindowsAndMessaging::GetDesktopWindow;

    #[test]
    fn test_null_hwnd() {
        let hwnd = HWND::default();
        assert!(!hwnd.class_name_equals("", Comparison::Ordinal));
        assert!(!hwnd.class_name_contains("", Comparison::Ordinal));
        assert!(!hwnd.real_class_name_equals("", Comparison::Ordinal));
        assert!(!hwnd.class_name_equals_any(Comparison::Ordinal, ["#32769"]));
    }

    #[test]
    fn test_desktop_window() {
        // The desktop window's class is the "#32769" atom.
        let hwnd = unsafe { GetDesktopWindow() };
        assert!(hwnd.class_name_equals("#32769", Comparison::Ordinal));
        assert!(hwnd.class_name_contains("327", Comparison::Ordinal));
    }
}
