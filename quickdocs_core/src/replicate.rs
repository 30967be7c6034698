use std::path::Path;
use std::path::PathBuf;

use crate::QuickdocsError;
use crate::QuickdocsResult;
use crate::QuickstartError;
use crate::config::DOCS_FILE;
use crate::config::REPOSITORY_URL;
use crate::project::ProjectContext;

/// Prepend the provenance header marking a replicated artifact as generated.
pub fn with_provenance_header(content: &str) -> String {
	format!("{{/* AUTO-GENERATED - Source: {REPOSITORY_URL} */}}\n\n{content}")
}

/// A quickstart with a generated `docs.mdx` ready for replication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplicationSource {
	pub quickstart: String,
	/// Absolute path of the generated artifact.
	pub artifact: PathBuf,
	/// Destination relative to the docs repository, if mapped.
	pub destination: Option<PathBuf>,
}

/// What happened to one quickstart during replication.
#[derive(Debug)]
pub enum ReplicateOutcome {
	/// The artifact was written to `destination` (relative to the docs root).
	Copied { destination: PathBuf },
	/// Dry run: the artifact would have been written to `destination`.
	WouldCopy { destination: PathBuf },
	/// No destination mapping exists for this quickstart. Nothing was
	/// written.
	Unmapped,
	/// Reading the artifact or writing the destination failed.
	Failed(QuickstartError),
}

#[derive(Debug)]
pub struct ReplicateEntry {
	pub quickstart: String,
	pub outcome: ReplicateOutcome,
}

/// Result of a replication run in discovery order.
#[derive(Debug, Default)]
pub struct ReplicateReport {
	pub entries: Vec<ReplicateEntry>,
}

impl ReplicateReport {
	pub fn copied_count(&self) -> usize {
		self.entries
			.iter()
			.filter(|e| {
				matches!(
					e.outcome,
					ReplicateOutcome::Copied { .. } | ReplicateOutcome::WouldCopy { .. }
				)
			})
			.count()
	}

	pub fn unmapped(&self) -> impl Iterator<Item = &str> {
		self.entries
			.iter()
			.filter(|e| matches!(e.outcome, ReplicateOutcome::Unmapped))
			.map(|e| e.quickstart.as_str())
	}

	pub fn failed_count(&self) -> usize {
		self.entries
			.iter()
			.filter(|e| matches!(e.outcome, ReplicateOutcome::Failed(_)))
			.count()
	}
}

/// Options for a replication run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplicateOptions {
	/// Report destinations without creating directories or writing files.
	pub dry_run: bool,
}

/// Every quickstart that has a generated `docs.mdx`, sorted by id, with its
/// mapped destination.
pub fn discover_sources(ctx: &ProjectContext) -> QuickdocsResult<Vec<ReplicationSource>> {
	let mut sources = Vec::new();
	for id in ctx.quickstart_ids()? {
		let artifact = ctx.quickstart_dir(&id).join(DOCS_FILE);
		if !artifact.is_file() {
			continue;
		}

		sources.push(ReplicationSource {
			destination: ctx.docs_mapping.get(&id).map(Path::to_path_buf),
			quickstart: id,
			artifact,
		});
	}

	Ok(sources)
}

/// Copy every generated `docs.mdx` into the docs repository at `docs_root`.
///
/// Mapped destinations are always overwritten. Unmapped quickstarts and
/// per-target I/O failures are recorded without stopping the run.
pub fn replicate_docs(
	ctx: &ProjectContext,
	docs_root: &Path,
	options: ReplicateOptions,
) -> QuickdocsResult<ReplicateReport> {
	if !docs_root.exists() {
		return Err(QuickdocsError::DocsPathNotFound(
			docs_root.display().to_string(),
		));
	}

	let mut report = ReplicateReport::default();
	for source in discover_sources(ctx)? {
		let outcome = match &source.destination {
			None => {
				tracing::warn!(
					quickstart = %source.quickstart,
					"no docs path mapping defined, skipping"
				);
				ReplicateOutcome::Unmapped
			}
			Some(destination) if options.dry_run => {
				ReplicateOutcome::WouldCopy {
					destination: destination.clone(),
				}
			}
			Some(destination) => {
				match replicate_one(&source, &docs_root.join(destination)) {
					Ok(()) => {
						ReplicateOutcome::Copied {
							destination: destination.clone(),
						}
					}
					Err(error) => {
						tracing::warn!(quickstart = %source.quickstart, %error, "replication failed");
						ReplicateOutcome::Failed(error)
					}
				}
			}
		};

		report.entries.push(ReplicateEntry {
			quickstart: source.quickstart,
			outcome,
		});
	}

	Ok(report)
}

fn replicate_one(source: &ReplicationSource, target: &Path) -> Result<(), QuickstartError> {
	let id = source.quickstart.as_str();
	let content = std::fs::read_to_string(&source.artifact)
		.map_err(|e| QuickstartError::io(id, &source.artifact, e))?;

	if let Some(parent) = target.parent() {
		std::fs::create_dir_all(parent).map_err(|e| QuickstartError::io(id, parent, e))?;
	}

	std::fs::write(target, with_provenance_header(&content))
		.map_err(|e| QuickstartError::io(id, target, e))?;
	tracing::debug!(quickstart = id, target = %target.display(), "replicated artifact");

	Ok(())
}
