use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use crate::QuickdocsError;
use crate::QuickdocsResult;
use crate::QuickstartError;
use crate::QuickstartResult;
use crate::config::DEFAULT_APPS_DIR;
use crate::config::DocsMapping;
use crate::config::LanguageTable;
use crate::config::META_FILE;
use crate::config::QuickdocsConfig;
use crate::config::README_FILE;
use crate::config::SNIPPETS_DIR;
use crate::descriptor::load_descriptor;
use crate::document::GeneratedDocument;
use crate::document::render_document;
use crate::snippet::resolve_snippets;
use crate::writer::ArtifactStatus;
use crate::writer::WriteOutcome;
use crate::writer::check_artifact;
use crate::writer::write_if_changed;

/// A quickstarts repository together with its loaded tables, ready for
/// generating or replicating documentation.
#[derive(Debug, Clone)]
pub struct ProjectContext {
	/// Repository root.
	pub root: PathBuf,
	/// Directory holding one subdirectory per quickstart.
	pub apps_dir: PathBuf,
	/// Extension to code fence language table.
	pub languages: LanguageTable,
	/// Quickstart id to docs repository destination table.
	pub docs_mapping: DocsMapping,
}

impl ProjectContext {
	/// Build a context for `root`, layering `config` over the built-in
	/// tables.
	pub fn new(root: &Path, config: Option<&QuickdocsConfig>) -> QuickdocsResult<Self> {
		let apps_dir = config
			.and_then(|c| c.apps_dir.clone())
			.unwrap_or_else(|| PathBuf::from(DEFAULT_APPS_DIR));
		let languages = config.map(QuickdocsConfig::language_table).unwrap_or_default();
		let docs_mapping = match config {
			Some(config) => config.docs_mapping()?,
			None => DocsMapping::default(),
		};

		Ok(Self {
			root: root.to_path_buf(),
			apps_dir: root.join(apps_dir),
			languages,
			docs_mapping,
		})
	}

	/// Directory of a single quickstart.
	pub fn quickstart_dir(&self, id: &str) -> PathBuf {
		self.apps_dir.join(id)
	}

	/// Every quickstart directory name under the apps root, sorted so the
	/// batch order never depends on directory listing order.
	pub fn quickstart_ids(&self) -> QuickdocsResult<Vec<String>> {
		if !self.apps_dir.is_dir() {
			return Err(QuickdocsError::AppsDirNotFound(
				self.apps_dir.display().to_string(),
			));
		}

		let mut ids = Vec::new();
		for entry in std::fs::read_dir(&self.apps_dir)? {
			let entry = entry?;
			if !entry.file_type()?.is_dir() {
				continue;
			}

			match entry.file_name().into_string() {
				Ok(name) => ids.push(name),
				Err(name) => {
					tracing::debug!(?name, "ignoring quickstart directory with a non UTF-8 name");
				}
			}
		}

		ids.sort();
		Ok(ids)
	}
}

/// Load `quickdocs.toml` (if any) and build the [`ProjectContext`] for
/// `root`.
pub fn load_project(root: &Path) -> QuickdocsResult<ProjectContext> {
	let config = QuickdocsConfig::load(root)?;
	ProjectContext::new(root, config.as_ref())
}

/// Whether the generator writes artifacts or only reports drift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncMode {
	#[default]
	Write,
	Check,
}

/// What happened to one quickstart during a generator run.
#[derive(Debug)]
pub enum SyncOutcome {
	/// The artifact was rewritten.
	Updated,
	/// The artifact already matched.
	Unchanged,
	/// Check mode only: the artifact differs from the generated text.
	Stale { current: String, expected: String },
	/// No `snippets/_meta.json`; the directory is not a documented
	/// quickstart.
	Skipped,
	/// The quickstart could not be generated. Other targets are unaffected.
	Failed(QuickstartError),
}

impl SyncOutcome {
	/// Updated and unchanged quickstarts count as synced.
	pub fn is_synced(&self) -> bool {
		matches!(self, Self::Updated | Self::Unchanged)
	}
}

/// Outcome for one quickstart together with the artifact it targets.
#[derive(Debug)]
pub struct QuickstartReport {
	pub quickstart: String,
	pub artifact: PathBuf,
	pub outcome: SyncOutcome,
}

/// Result of a generator run, one entry per attempted quickstart in
/// processing order.
#[derive(Debug, Default)]
pub struct SyncReport {
	pub entries: Vec<QuickstartReport>,
}

impl SyncReport {
	/// Number of quickstarts that were updated or already up to date.
	pub fn synced_count(&self) -> usize {
		self.entries.iter().filter(|e| e.outcome.is_synced()).count()
	}

	pub fn updated_count(&self) -> usize {
		self.count(|outcome| matches!(outcome, SyncOutcome::Updated))
	}

	pub fn skipped_count(&self) -> usize {
		self.count(|outcome| matches!(outcome, SyncOutcome::Skipped))
	}

	pub fn failed_count(&self) -> usize {
		self.count(|outcome| matches!(outcome, SyncOutcome::Failed(_)))
	}

	pub fn stale_count(&self) -> usize {
		self.count(|outcome| matches!(outcome, SyncOutcome::Stale { .. }))
	}

	/// Per-quickstart errors in processing order.
	pub fn errors(&self) -> impl Iterator<Item = &QuickstartError> {
		self.entries.iter().filter_map(|entry| {
			match &entry.outcome {
				SyncOutcome::Failed(error) => Some(error),
				_ => None,
			}
		})
	}

	fn count(&self, predicate: impl Fn(&SyncOutcome) -> bool) -> usize {
		self.entries.iter().filter(|e| predicate(&e.outcome)).count()
	}
}

/// Generate artifacts for `target`, or for every quickstart when `target`
/// is `None`.
///
/// An explicit target that does not name an existing quickstart directory is
/// fatal. Failures inside individual quickstarts are recorded in the report
/// and never stop the batch.
pub fn sync_quickstarts(
	ctx: &ProjectContext,
	target: Option<&str>,
	mode: SyncMode,
) -> QuickdocsResult<SyncReport> {
	let ids = match target {
		Some(id) => {
			if !is_plain_name(id) || !ctx.quickstart_dir(id).is_dir() {
				return Err(QuickdocsError::TargetNotFound(id.to_string()));
			}
			vec![id.to_string()]
		}
		None => ctx.quickstart_ids()?,
	};

	let mut report = SyncReport::default();
	for id in ids {
		let outcome = sync_quickstart(ctx, &id, mode);
		report.entries.push(QuickstartReport {
			artifact: ctx.quickstart_dir(&id).join(README_FILE),
			quickstart: id,
			outcome,
		});
	}

	tracing::debug!(
		synced = report.synced_count(),
		skipped = report.skipped_count(),
		failed = report.failed_count(),
		"generator run finished"
	);

	Ok(report)
}

/// Generate, compare, and (in [`SyncMode::Write`]) write one quickstart's
/// artifact.
pub fn sync_quickstart(ctx: &ProjectContext, id: &str, mode: SyncMode) -> SyncOutcome {
	let app_dir = ctx.quickstart_dir(id);
	let meta_path = app_dir.join(SNIPPETS_DIR).join(META_FILE);

	if !meta_path.is_file() {
		tracing::debug!(quickstart = id, "no descriptor, skipping");
		return SyncOutcome::Skipped;
	}

	let document = match generate_document(ctx, id) {
		Ok(document) => document,
		Err(error) => {
			tracing::warn!(quickstart = id, %error, "failed to generate documentation");
			return SyncOutcome::Failed(error);
		}
	};

	let artifact = app_dir.join(README_FILE);
	let text = document.text();
	let result = match mode {
		SyncMode::Write => {
			write_if_changed(&artifact, &text).map(|outcome| {
				match outcome {
					WriteOutcome::Updated => SyncOutcome::Updated,
					WriteOutcome::Unchanged => SyncOutcome::Unchanged,
				}
			})
		}
		SyncMode::Check => {
			check_artifact(&artifact, &text).map(|status| {
				match status {
					ArtifactStatus::UpToDate => SyncOutcome::Unchanged,
					ArtifactStatus::Stale { current, expected } => {
						SyncOutcome::Stale { current, expected }
					}
				}
			})
		}
	};

	result.unwrap_or_else(|e| {
		let error = QuickstartError::io(id, &artifact, e);
		tracing::warn!(quickstart = id, %error, "failed to sync artifact");
		SyncOutcome::Failed(error)
	})
}

/// Load, validate, resolve and render one quickstart without touching its
/// artifact.
pub fn generate_document(ctx: &ProjectContext, id: &str) -> QuickstartResult<GeneratedDocument> {
	let snippets_dir = ctx.quickstart_dir(id).join(SNIPPETS_DIR);
	let descriptor = load_descriptor(id, &snippets_dir.join(META_FILE))?;
	let contents = resolve_snippets(id, &snippets_dir, &descriptor.snippets)?;

	render_document(&descriptor, &contents, &ctx.languages)
}

/// A single normal path component, so the id cannot reach outside the apps
/// root.
fn is_plain_name(id: &str) -> bool {
	let mut components = Path::new(id).components();
	matches!(
		(components.next(), components.next()),
		(Some(Component::Normal(_)), None)
	)
}
