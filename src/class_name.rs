use crate::comparison::Comparison;

/// Size of the class name buffer in UTF-16 code units. It includes the
/// terminating null, so at most `MAX_CLASS_NAME - 1` units of a name are
/// reported.
pub const MAX_CLASS_NAME: usize = 256;

/// Which of the two OS class name queries to issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassNameKind {
    /// The class the window was registered with (`GetClassNameW`).
    Registered,
    /// The class of the window procedure that actually handles messages
    /// (`RealGetWindowClassW`). Differs from the registered class for
    /// subclassed windows.
    Real,
}

/// Something that can read class names through a window handle.
///
/// Both queries write into a caller-supplied buffer and return the number of
/// code units written, not counting the terminating null. Zero means the
/// query failed.
pub trait ClassNameSource {
    type Handle: Copy;

    fn is_null(&self, handle: Self::Handle) -> bool;

    fn class_name(&self, handle: Self::Handle, buffer: &mut [u16]) -> usize;

    fn real_class_name(&self, handle: Self::Handle, buffer: &mut [u16]) -> usize;
}

impl<S: ClassNameSource + ?Sized> ClassNameSource for &S {
    type Handle = S::Handle;

    fn is_null(&self, handle: Self::Handle) -> bool {
        (**self).is_null(handle)
    }

    fn class_name(&self, handle: Self::Handle, buffer: &mut [u16]) -> usize {
        (**self).class_name(handle, buffer)
    }

    fn real_class_name(&self, handle: Self::Handle, buffer: &mut [u16]) -> usize {
        (**self).real_class_name(handle, buffer)
    }
}

struct ClassNameBuffer {
    units: [u16; MAX_CLASS_NAME],
    len: usize,
}

impl ClassNameBuffer {
    fn query<S: ClassNameSource>(
        source: &S,
        handle: S::Handle,
        kind: ClassNameKind,
    ) -> Option<Self> {
        let mut units = [0u16; MAX_CLASS_NAME];
        let len = match kind {
            ClassNameKind::Registered => source.class_name(handle, &mut units),
            ClassNameKind::Real => source.real_class_name(handle, &mut units),
        }
        .min(MAX_CLASS_NAME);
        (len != 0).then_some(Self { units, len })
    }

    fn as_units(&self) -> &[u16] {
        &self.units[..self.len]
    }
}

/// Class name predicates over a [`ClassNameSource`].
///
/// Every predicate returns `false` for a null handle without querying the
/// source, and `false` when the query reports no name. Names that do not fit
/// in [`MAX_CLASS_NAME`] units with their terminator are matched as truncated
/// by the source.
#[derive(Clone, Debug, Default)]
pub struct ClassNameMatcher<S> {
    source: S,
}

impl<S: ClassNameSource> ClassNameMatcher<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn query(&self, handle: S::Handle, kind: ClassNameKind) -> Option<ClassNameBuffer> {
        if self.source.is_null(handle) {
            return None;
        }
        ClassNameBuffer::query(&self.source, handle, kind)
    }

    /// Returns `true` if the real class name of `handle` equals `value`.
    ///
    /// See <https://devblogs.microsoft.com/oldnewthing/20101231-00/?p=11863>
    /// for how this differs from [`class_name_equals`](Self::class_name_equals).
    pub fn real_class_name_equals(
        &self,
        handle: S::Handle,
        value: &str,
        comparison: Comparison,
    ) -> bool {
        self.query(handle, ClassNameKind::Real)
            .is_some_and(|name| comparison.equals(name.as_units(), value))
    }

    /// Returns `true` if the registered class name of `handle` equals `value`.
    pub fn class_name_equals(&self, handle: S::Handle, value: &str, comparison: Comparison) -> bool {
        self.query(handle, ClassNameKind::Registered)
            .is_some_and(|name| comparison.equals(name.as_units(), value))
    }

    /// Returns `true` if the registered class name of `handle` equals any of
    /// `values`. The name is queried once and the values are tried in order.
    pub fn class_name_equals_any<I>(&self, handle: S::Handle, comparison: Comparison, values: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let Some(name) = self.query(handle, ClassNameKind::Registered) else {
            return false;
        };
        values
            .into_iter()
            .any(|value| comparison.equals(name.as_units(), value.as_ref()))
    }

    /// Returns `true` if `value` occurs within the registered class name of `handle`.
    pub fn class_name_contains(&self, handle: S::Handle, value: &str, comparison: Comparison) -> bool {
        self.query(handle, ClassNameKind::Registered)
            .is_some_and(|name| comparison.contains(name.as_units(), value))
    }

    pub fn class_name(&self, handle: S::Handle) -> Option<String> {
        self.read(handle, ClassNameKind::Registered)
    }

    pub fn real_class_name(&self, handle: S::Handle) -> Option<String> {
        self.read(handle, ClassNameKind::Real)
    }

    fn read(&self, handle: S::Handle, kind: ClassNameKind) -> Option<String> {
        self.query(handle, kind)
            .map(|name| String::from_utf16_lossy(name.as_units()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dry_run::DryRunClassNames;

    const BUTTON: isize = 1;
    const TOOLBAR: isize = 2;
    const SUBCLASSED: isize = 3;
    const UNKNOWN: isize = 99;

    fn matcher() -> ClassNameMatcher<DryRunClassNames> {
        ClassNameMatcher::new(
            DryRunClassNames::new()
                .with_window(BUTTON, "Button")
                .with_window(TOOLBAR, "ToolbarWindow32")
                .with_subclassed_window(SUBCLASSED, "WindowsForms10.BUTTON.app.0.1", "Button"),
        )
    }

    #[test]
    fn test_null_handle_never_queries() {
        let matcher = matcher();
        let cmp = Comparison::Ordinal;
        assert!(!matcher.real_class_name_equals(0, "Button", cmp));
        assert!(!matcher.class_name_equals(0, "Button", cmp));
        assert!(!matcher.class_name_equals_any(0, cmp, ["Button", "Edit"]));
        assert!(!matcher.class_name_contains(0, "", cmp));
        assert_eq!(matcher.class_name(0), None);
        assert_eq!(matcher.source().queries(), 0);
    }

    #[test]
    fn test_failed_query_is_false() {
        let matcher = matcher();
        assert!(!matcher.class_name_equals(UNKNOWN, "", Comparison::Ordinal));
        assert!(!matcher.class_name_contains(UNKNOWN, "", Comparison::Ordinal));
        assert!(!matcher.real_class_name_equals(UNKNOWN, "", Comparison::Ordinal));
        assert!(!matcher.class_name_equals_any(UNKNOWN, Comparison::Ordinal, [""]));
        assert_eq!(matcher.class_name(UNKNOWN), None);
        assert_eq!(matcher.source().queries(), 5);
    }

    #[test]
    fn test_class_name_equals_case() {
        let matcher = matcher();
        assert!(matcher.class_name_equals(BUTTON, "Button", Comparison::Ordinal));
        assert!(!matcher.class_name_equals(BUTTON, "BUTTON", Comparison::Ordinal));
        assert!(matcher.class_name_equals(BUTTON, "BUTTON", Comparison::OrdinalIgnoreCase));
    }

    #[test]
    fn test_class_name_equals_any() {
        let matcher = matcher();
        let cmp = Comparison::Ordinal;
        assert!(matcher.class_name_equals_any(BUTTON, cmp, ["Edit", "Button", "Static"]));
        assert!(!matcher.class_name_equals_any(BUTTON, cmp, ["Edit", "Static"]));
        assert!(!matcher.class_name_equals_any(BUTTON, cmp, Vec::<String>::new()));
        assert_eq!(matcher.source().queries(), 3);
    }

    #[test]
    fn test_class_name_contains() {
        let matcher = matcher();
        assert!(matcher.class_name_contains(TOOLBAR, "Toolbar", Comparison::Ordinal));
        assert!(!matcher.class_name_contains(TOOLBAR, "toolbar", Comparison::Ordinal));
        assert!(matcher.class_name_contains(TOOLBAR, "toolbar", Comparison::OrdinalIgnoreCase));
    }

    #[test]
    fn test_real_and_registered_stay_distinct() {
        let matcher = matcher();
        let cmp = Comparison::Ordinal;
        assert!(matcher.real_class_name_equals(SUBCLASSED, "Button", cmp));
        assert!(!matcher.class_name_equals(SUBCLASSED, "Button", cmp));
        assert!(matcher.class_name_contains(SUBCLASSED, "WindowsForms10", cmp));
        assert_eq!(matcher.real_class_name(SUBCLASSED).as_deref(), Some("Button"));
        assert_eq!(
            matcher.class_name(SUBCLASSED).as_deref(),
            Some("WindowsForms10.BUTTON.app.0.1")
        );
    }

    #[test]
    fn test_repeated_calls_agree() {
        let matcher = matcher();
        for _ in 0..2 {
            assert!(matcher.class_name_equals(BUTTON, "Button", Comparison::Ordinal));
            assert!(!matcher.class_name_contains(BUTTON, "Edit", Comparison::Ordinal));
        }
    }

    #[test]
    fn test_longest_name_matches() {
        let name = "A".repeat(MAX_CLASS_NAME - 1);
        let matcher = ClassNameMatcher::new(DryRunClassNames::new().with_window(BUTTON, &name));
        assert!(matcher.class_name_equals(BUTTON, &name, Comparison::Ordinal));
        assert_eq!(matcher.class_name(BUTTON), Some(name));
    }

    #[test]
    fn test_name_at_capacity_is_truncated() {
        let name = format!("{}B", "A".repeat(MAX_CLASS_NAME - 1));
        assert_eq!(name.len(), MAX_CLASS_NAME);
        let matcher = ClassNameMatcher::new(DryRunClassNames::new().with_window(BUTTON, &name));
        let truncated = &name[..MAX_CLASS_NAME - 1];
        assert!(!matcher.class_name_equals(BUTTON, &name, Comparison::Ordinal));
        assert!(matcher.class_name_equals(BUTTON, truncated, Comparison::Ordinal));
        assert!(!matcher.class_name_contains(BUTTON, "B", Comparison::Ordinal));
        assert!(matcher.real_class_name_equals(BUTTON, truncated, Comparison::Ordinal));
    }

    #[test]
    fn test_borrowed_source() {
        let source = DryRunClassNames::new().with_window(BUTTON, "Button");
        let matcher = ClassNameMatcher::new(&source);
        assert!(matcher.class_name_equals(BUTTON, "Button", Comparison::Ordinal));
        assert_eq!(source.queries(), 1);
    }
}
