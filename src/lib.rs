//! Predicates that test a window's class name against caller-supplied values.
//!
//! Class names are read through a [`ClassNameSource`] into a fixed stack
//! buffer and compared without allocating. On Windows, [`Win32ClassNames`]
//! reads them from user32 and [`HwndExt`] exposes the predicates on `HWND`.

mod class_name;
mod comparison;
mod dry_run;
#[cfg(windows)]
mod win32;
#[cfg(windows)]
mod window_info;

pub use class_name::{ClassNameKind, ClassNameMatcher, ClassNameSource, MAX_CLASS_NAME};
pub use comparison::Comparison;
pub use dry_run::DryRunClassNames;
#[cfg(windows)]
pub use win32::{HwndExt, Win32ClassNames};
#[cfg(windows)]
pub use window_info::{WindowInfo, enumerate_windows};
