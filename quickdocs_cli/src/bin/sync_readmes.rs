use std::process;

use clap::Parser;
use quickdocs_cli::SyncReadmesCli;
use quickdocs_cli::colored;
use quickdocs_cli::init_output;
use quickdocs_cli::make_relative;
use quickdocs_cli::print_diff;
use quickdocs_cli::report_error;
use quickdocs_cli::resolve_root;
use quickdocs_core::QuickdocsResult;
use quickdocs_core::config::README_FILE;
use quickdocs_core::project::SyncMode;
use quickdocs_core::project::SyncOutcome;
use quickdocs_core::project::SyncReport;
use quickdocs_core::project::load_project;
use quickdocs_core::project::sync_quickstarts;

fn main() {
	let args = SyncReadmesCli::parse();
	init_output(args.no_color, args.verbose);

	match run(&args) {
		Ok(code) => process::exit(code),
		Err(error) => {
			report_error(error);
			process::exit(1);
		}
	}
}

/// Returns the process exit code. Per-quickstart failures never change it;
/// only a stale README in `--check` mode does.
fn run(args: &SyncReadmesCli) -> QuickdocsResult<i32> {
	let root = resolve_root(args.path.as_deref());
	let ctx = load_project(&root)?;
	let mode = if args.check {
		SyncMode::Check
	} else {
		SyncMode::Write
	};

	if args.check {
		println!("Checking {README_FILE} files...\n");
	} else {
		println!("Syncing {README_FILE} files...\n");
	}

	tracing::debug!(root = %root.display(), ?mode, quickstart = ?args.quickstart, "syncing readmes");
	let report = sync_quickstarts(&ctx, args.quickstart.as_deref(), mode)?;
	tracing::debug!(
		updated = report.updated_count(),
		skipped = report.skipped_count(),
		failed = report.failed_count(),
		stale = report.stale_count(),
		"sync finished"
	);
	print_entries(&report, args, &root);

	println!();
	if args.check {
		let stale = report.stale_count();
		if stale > 0 {
			println!(
				"{} {stale} {README_FILE} file(s) out of date. Run `sync-readmes` to update them.",
				colored!("Check failed:", red)
			);
			return Ok(1);
		}
		println!(
			"Check passed: {} quickstart(s) up to date.",
			report.synced_count()
		);
	} else {
		println!("Done! Synced {} quickstart(s).", report.synced_count());
	}

	let failed = report.failed_count();
	if failed > 0 {
		eprintln!(
			"{} {failed} quickstart(s) could not be generated",
			colored!("warning:", yellow)
		);
	}

	Ok(0)
}

fn print_entries(report: &SyncReport, args: &SyncReadmesCli, root: &std::path::Path) {
	for entry in &report.entries {
		let id = &entry.quickstart;
		match &entry.outcome {
			SyncOutcome::Updated => println!("  {} {id} (updated)", colored!("✓", green)),
			SyncOutcome::Unchanged => println!("  {} {id} (no changes)", colored!("✓", green)),
			SyncOutcome::Skipped => {
				println!(
					"  {} Skipping {id} (no snippets/_meta.json)",
					colored!("-", yellow)
				);
			}
			SyncOutcome::Stale { current, expected } => {
				println!(
					"  {} {id} (out of date: {})",
					colored!("!", yellow),
					make_relative(&entry.artifact, root)
				);
				if args.diff {
					print_diff(current, expected);
				}
			}
			SyncOutcome::Failed(error) => eprintln!("  {} {error}", colored!("✗", red)),
		}
	}
}
