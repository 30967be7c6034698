use std::path::Path;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use quickdocs_cli::SyncToDocsCli;
use quickdocs_cli::colored;
use quickdocs_cli::init_output;
use quickdocs_cli::report_error;
use quickdocs_cli::resolve_root;
use quickdocs_core::QuickdocsResult;
use quickdocs_core::config::DOCS_FILE;
use quickdocs_core::project::load_project;
use quickdocs_core::replicate::ReplicateOptions;
use quickdocs_core::replicate::ReplicateOutcome;
use quickdocs_core::replicate::replicate_docs;

fn main() {
	let args = match SyncToDocsCli::try_parse() {
		Ok(args) => args,
		Err(error) if matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
			error.exit()
		}
		Err(error) => {
			eprintln!("{error}");
			print_usage();
			process::exit(1);
		}
	};
	init_output(args.no_color, args.verbose);

	let Some(docs_path) = args
		.docs_path
		.as_deref()
		.filter(|path| !path.as_os_str().is_empty())
	else {
		print_usage();
		process::exit(1);
	};

	if let Err(error) = run(&args, docs_path) {
		report_error(error);
		process::exit(1);
	}
}

fn print_usage() {
	println!("Usage: sync-to-docs --docs-path <path-to-docs-repo>");
	println!();
	println!("Example:");
	println!("  sync-to-docs --docs-path ../docs");
}

fn run(args: &SyncToDocsCli, docs_path: &Path) -> QuickdocsResult<()> {
	let root = resolve_root(args.path.as_deref());
	let ctx = load_project(&root)?;
	tracing::debug!(
		root = %root.display(),
		docs_path = %docs_path.display(),
		dry_run = args.dry_run,
		mappings = ctx.docs_mapping.len(),
		"replicating docs"
	);
	let report = replicate_docs(&ctx, docs_path, ReplicateOptions {
		dry_run: args.dry_run,
	})?;

	println!(
		"Found {} quickstart(s) with {DOCS_FILE}\n",
		report.entries.len()
	);

	for entry in &report.entries {
		let id = &entry.quickstart;
		match &entry.outcome {
			ReplicateOutcome::Copied { destination } => {
				println!("{} {id} → {}", colored!("✓", green), destination.display());
			}
			ReplicateOutcome::WouldCopy { destination } => {
				println!("{id} would be written to {}", destination.display());
			}
			ReplicateOutcome::Unmapped => {
				println!(
					"{} {id}: No docs path mapping defined, skipping",
					colored!("warning:", yellow)
				);
			}
			ReplicateOutcome::Failed(error) => eprintln!("{} {error}", colored!("✗", red)),
		}
	}

	tracing::debug!(
		copied = report.copied_count(),
		unmapped = report.unmapped().count(),
		failed = report.failed_count(),
		"replication finished"
	);

	println!();
	if args.dry_run {
		println!("Dry run complete. No files were written.");
	} else {
		println!(
			"Sync complete! Copied {} quickstart(s).",
			report.copied_count()
		);
	}

	Ok(())
}
