use clap::Parser;
use window_class::{ClassNameMatcher, ClassNameSource, Comparison};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Inspect only this window handle (decimal or 0x-prefixed hex).
    #[arg(long, value_parser = parse_handle)]
    pub hwnd: Option<isize>,

    /// List windows whose class name equals the provided input.
    #[arg(short, long, conflicts_with_all = ["any", "contains"])]
    equals: Option<String>,

    /// List windows whose class name equals any of the provided inputs.
    #[arg(short, long, num_args = 1.., conflicts_with_all = ["equals", "contains"])]
    any: Vec<String>,

    /// List windows whose class name contains the provided input.
    #[arg(short, long, conflicts_with_all = ["equals", "any"])]
    contains: Option<String>,

    /// Compare against the real class name instead of the registered one.
    #[arg(short, long, requires = "equals")]
    real: bool,

    /// Ignore case when comparing.
    #[arg(short, long)]
    ignore_case: bool,

    /// Skip hidden windows.
    #[arg(long)]
    pub visible: bool,

    /// Use a fixed set of fake windows instead of asking the OS.
    #[arg(long)]
    pub dry_run: bool,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    All,
    Equals { value: String, real: bool },
    Any(Vec<String>),
    Contains(String),
}

impl Args {
    pub fn filter(&self) -> Filter {
        if let Some(value) = &self.equals {
            Filter::Equals {
                value: value.clone(),
                real: self.real,
            }
        } else if !self.any.is_empty() {
            Filter::Any(self.any.clone())
        } else if let Some(value) = &self.contains {
            Filter::Contains(value.clone())
        } else {
            Filter::All
        }
    }

    pub fn comparison(&self) -> Comparison {
        if self.ignore_case {
            Comparison::OrdinalIgnoreCase
        } else {
            Comparison::Ordinal
        }
    }
}

impl Filter {
    pub fn matches<S: ClassNameSource>(
        &self,
        matcher: &ClassNameMatcher<S>,
        handle: S::Handle,
        comparison: Comparison,
    ) -> bool {
        match self {
            Filter::All => matcher.class_name(handle).is_some(),
            Filter::Equals { value, real: true } => {
                matcher.real_class_name_equals(handle, value, comparison)
            }
            Filter::Equals { value, real: false } => {
                matcher.class_name_equals(handle, value, comparison)
            }
            Filter::Any(values) => matcher.class_name_equals_any(handle, comparison, values),
            Filter::Contains(value) => matcher.class_name_contains(handle, value, comparison),
        }
    }
}

fn parse_handle(input: &str) -> Result<isize, String> {
    let input = input.trim();
    let parsed = match input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) {
        Some(hex) => isize::from_str_radix(hex, 16),
        None => input.parse::<isize>(),
    };
    parsed.map_err(|e| format!("'{}' is not a window handle: {}", input, e))
}
