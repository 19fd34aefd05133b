use std::sync::atomic::{AtomicUsize, Ordering};

use crate::class_name::ClassNameSource;

#[derive(Clone, Debug)]
struct DryRunWindow {
    handle: isize,
    class_name: String,
    real_class_name: String,
}

/// A fixed table of fake windows standing in for the window manager.
///
/// Handles are plain integers and `0` is the null handle. Unknown handles
/// report no class name. Names are truncated to leave room for a terminating
/// null, as user32 does. Every query, successful or not, is counted.
#[derive(Debug, Default)]
pub struct DryRunClassNames {
    windows: Vec<DryRunWindow>,
    queries: AtomicUsize,
}

impl DryRunClassNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Common controls and shell windows, plus one subclassed button.
    pub fn sample() -> Self {
        Self::new()
            .with_window(0x10010, "Shell_TrayWnd")
            .with_window(0x10020, "ToolbarWindow32")
            .with_window(0x10030, "Button")
            .with_window(0x10040, "Edit")
            .with_window(0x10050, "Static")
            .with_window(0x10060, "SysListView32")
            .with_subclassed_window(0x10070, "WindowsForms10.BUTTON.app.0.141b42a_r6_ad1", "Button")
    }

    pub fn with_window(self, handle: isize, class_name: impl Into<String>) -> Self {
        let class_name = class_name.into();
        self.with_subclassed_window(handle, class_name.clone(), class_name)
    }

    pub fn with_subclassed_window(
        mut self,
        handle: isize,
        class_name: impl Into<String>,
        real_class_name: impl Into<String>,
    ) -> Self {
        self.windows.push(DryRunWindow {
            handle,
            class_name: class_name.into(),
            real_class_name: real_class_name.into(),
        });
        self
    }

    pub fn handles(&self) -> impl Iterator<Item = isize> + '_ {
        self.windows.iter().map(|window| window.handle)
    }

    /// Number of class name queries issued so far.
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::Relaxed)
    }

    fn copy_name(
        &self,
        handle: isize,
        buffer: &mut [u16],
        select: impl Fn(&DryRunWindow) -> &str,
    ) -> usize {
        self.queries.fetch_add(1, Ordering::Relaxed);
        let Some(window) = self.windows.iter().find(|window| window.handle == handle) else {
            return 0;
        };
        // Like user32, the last slot is kept for the terminating null.
        let Some(capacity) = buffer.len().checked_sub(1) else {
            return 0;
        };
        let mut written = 0;
        for (slot, unit) in buffer[..capacity].iter_mut().zip(select(window).encode_utf16()) {
            *slot = unit;
            written += 1;
        }
        buffer[written] = 0;
        written
    }
}

impl ClassNameSource for DryRunClassNames {
    type Handle = isize;

    fn is_null(&self, handle: isize) -> bool {
        handle == 0
    }

    fn class_name(&self, handle: isize, buffer: &mut [u16]) -> usize {
        self.copy_name(handle, buffer, |window| window.class_name.as_str())
    }

    fn real_class_name(&self, handle: isize, buffer: &mut [u16]) -> usize {
        self.copy_name(handle, buffer, |window| window.real_class_name.as_str())
    }
}
