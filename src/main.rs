mod cli;
mod error;

use clap::Parser;
use cli::{Args, Filter};
use error::Result;
use std::fmt::Debug;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use window_class::{ClassNameMatcher, ClassNameSource, Comparison, DryRunClassNames};

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let filter = args.filter();
    let comparison = args.comparison();
    debug!(?filter, ?comparison, "Starting window-class");

    let matched = if args.dry_run {
        run_dry(&args, &filter, comparison)
    } else {
        run_os(&args, &filter, comparison)?
    };

    info!("{} window(s) matched", matched);
    Ok(())
}

struct Candidate<H> {
    handle: H,
    title: String,
}

fn report<S>(
    matcher: &ClassNameMatcher<S>,
    candidates: impl IntoIterator<Item = Candidate<S::Handle>>,
    filter: &Filter,
    comparison: Comparison,
) -> usize
where
    S: ClassNameSource,
    S::Handle: Debug,
{
    let mut matched = 0;
    for candidate in candidates {
        if !filter.matches(matcher, candidate.handle, comparison) {
            continue;
        }
        matched += 1;
        let class_name = matcher.class_name(candidate.handle).unwrap_or_default();
        let real_class_name = matcher.real_class_name(candidate.handle).unwrap_or_default();
        println!(
            "{:<24?} {:<40} {:<24} {}",
            candidate.handle, class_name, real_class_name, candidate.title
        );
    }
    matched
}

fn run_dry(args: &Args, filter: &Filter, comparison: Comparison) -> usize {
    info!("Dry run: matching against built-in sample windows");
    let matcher = ClassNameMatcher::new(DryRunClassNames::sample());
    let handles: Vec<isize> = match args.hwnd {
        Some(handle) => vec![handle],
        None => matcher.source().handles().collect(),
    };
    let candidates = handles.into_iter().map(|handle| Candidate {
        handle,
        title: String::new(),
    });
    let matched = report(&matcher, candidates, filter, comparison);
    debug!("Dry run issued {} class name queries", matcher.source().queries());
    matched
}

#[cfg(windows)]
fn run_os(args: &Args, filter: &Filter, comparison: Comparison) -> Result<usize> {
    use window_class::{Win32ClassNames, WindowInfo, enumerate_windows};
    use windows::Win32::Foundation::HWND;

    let windows = match args.hwnd {
        Some(handle) => vec![WindowInfo::new(HWND(handle as *mut _))],
        None => enumerate_windows()?,
    };
    debug!("Inspecting {} window(s)", windows.len());

    let candidates = windows
        .into_iter()
        .filter(|window| !args.visible || window.visible)
        .map(|window| Candidate {
            handle: window.handle,
            title: window.title,
        });
    Ok(report(
        &ClassNameMatcher::new(Win32ClassNames),
        candidates,
        filter,
        comparison,
    ))
}

#[cfg(not(windows))]
fn run_os(_args: &Args, _filter: &Filter, _comparison: Comparison) -> Result<usize> {
    Err(error::Error::Unsupported)
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = log_filter(std::env::var("RUST_LOG").ok().as_deref(), level)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
        .init();

    Ok(())
}

// RUST_LOG wins over --log-level. A malformed RUST_LOG is an error.
fn log_filter(env: Option<&str>, level: &str) -> Result<EnvFilter> {
    Ok(EnvFilter::try_new(env.unwrap_or(level))?)
}
