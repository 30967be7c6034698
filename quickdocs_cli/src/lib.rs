use std::path::Path;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use clap::Parser;
#[doc(hidden)]
pub use owo_colors::OwoColorize as __OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;
use tracing_subscriber::EnvFilter;

static USE_COLOR: AtomicBool = AtomicBool::new(true);

pub fn color_enabled() -> bool {
	USE_COLOR.load(Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
#[macro_export]
macro_rules! colored {
	(@paint $text:expr, $style:ident) => {{
		use $crate::__OwoColorize as _;
		if $crate::color_enabled() {
			format!("{}", $text.$style())
		} else {
			format!("{}", $text)
		}
	}};
	($text:expr,red) => {
		$crate::colored!(@paint $text, red)
	};
	($text:expr,green) => {
		$crate::colored!(@paint $text, green)
	};
	($text:expr,yellow) => {
		$crate::colored!(@paint $text, yellow)
	};
	($text:expr,bold) => {
		$crate::colored!(@paint $text, bold)
	};
}

#[derive(Parser)]
#[command(
	name = "sync-readmes",
	version,
	about = "Regenerate each quickstart's README.mdx from snippets/_meta.json and its snippet files.",
	long_about = "Regenerate each quickstart's README.mdx from snippets/_meta.json and its \
	              snippet files.\n\nA README is only rewritten when its content changes. A \
	              quickstart with a broken descriptor or a missing snippet is reported and \
	              skipped without stopping the others."
)]
pub struct SyncReadmesCli {
	/// Quickstart directory name under `apps/`. Syncs every quickstart when
	/// omitted.
	pub quickstart: Option<String>,

	/// Path to the repository root containing `apps/`.
	#[arg(long, short)]
	pub path: Option<PathBuf>,

	/// Report out-of-date READMEs without writing them. Exits with a non-zero
	/// status code when any README is stale.
	#[arg(long, default_value_t = false)]
	pub check: bool,

	/// With `--check`, show a unified diff for each stale README.
	#[arg(long, requires = "check", default_value_t = false)]
	pub diff: bool,

	/// Enable verbose output.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Parser)]
#[command(
	name = "sync-to-docs",
	version,
	about = "Copy every generated apps/<id>/docs.mdx into the documentation repository."
)]
pub struct SyncToDocsCli {
	/// Path to a checkout of the documentation repository.
	#[arg(long, value_name = "PATH")]
	pub docs_path: Option<PathBuf>,

	/// Path to the repository root containing `apps/`.
	#[arg(long, short)]
	pub path: Option<PathBuf>,

	/// Print where each file would be written without writing anything.
	#[arg(long, default_value_t = false)]
	pub dry_run: bool,

	/// Enable verbose output.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}

/// Configure color, the miette report handler, and tracing for a binary.
///
/// Respects the `NO_COLOR` env var and the `--no-color` flag. Logs go to
/// stderr and are filtered by `RUST_LOG`, defaulting to `error` (or `debug`
/// for this workspace with `--verbose`). Outcomes are already printed to the
/// terminal, so warnings only show up when asked for.
pub fn init_output(no_color: bool, verbose: bool) {
	let use_color = !no_color && std::env::var_os("NO_COLOR").is_none();
	USE_COLOR.store(use_color, Ordering::Relaxed);

	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let default_filter = if verbose {
		"warn,quickdocs_core=debug,sync_readmes=debug,sync_to_docs=debug"
	} else {
		"error"
	};
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.try_init()
		.ok();
}

/// Render a fatal error through miette so codes and help text are shown.
pub fn report_error(error: quickdocs_core::QuickdocsError) {
	let report: miette::Report = error.into();
	eprintln!("{report:?}");
}

/// Resolve the repository root from `--path`, falling back to the current
/// directory.
pub fn resolve_root(path: Option<&Path>) -> PathBuf {
	path.map_or_else(
		|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
		Path::to_path_buf,
	)
}

/// Make a path relative to root for display purposes.
pub fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}

/// Print a line diff from `current` to `expected` on stderr.
pub fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		let line = change.to_string_lossy();
		let line = line.trim_end_matches('\n');
		match change.tag() {
			ChangeTag::Delete => {
				eprintln!("  {}", colored!(format!("-{line}"), red));
			}
			ChangeTag::Insert => {
				eprintln!("  {}", colored!(format!("+{line}"), green));
			}
			ChangeTag::Equal => {
				eprintln!("   {line}");
			}
		}
	}
}
