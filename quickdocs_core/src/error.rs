use miette::Diagnostic;
use thiserror::Error;

/// Fatal errors caused by caller input or by the environment the batch runs
/// in. These abort the whole invocation.
#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum QuickdocsError {
	#[error(transparent)]
	#[diagnostic(code(quickdocs::io_error))]
	Io(#[from] std::io::Error),

	#[error("quickstart `{0}` not found in apps/")]
	#[diagnostic(
		code(quickdocs::target_not_found),
		help("pass the name of a directory under the apps root, or omit it to sync everything")
	)]
	TargetNotFound(String),

	#[error("docs path does not exist: `{0}`")]
	#[diagnostic(
		code(quickdocs::docs_path_not_found),
		help("point `--docs-path` at a checkout of the documentation repository")
	)]
	DocsPathNotFound(String),

	#[error("apps directory does not exist: `{0}`")]
	#[diagnostic(
		code(quickdocs::apps_dir_not_found),
		help("run from the repository root or pass `--path <root>`")
	)]
	AppsDirNotFound(String),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(quickdocs::config_parse),
		help("check that quickdocs.toml is valid TOML with [languages] and/or [docs_paths] sections")
	)]
	ConfigParse(String),

	#[error("invalid docs path mapping for `{id}`: `{path}`")]
	#[diagnostic(
		code(quickdocs::invalid_docs_mapping),
		help("destination paths must be relative to the docs repository and must not contain `..`")
	)]
	InvalidDocsMapping { id: String, path: String },
}

/// Errors local to a single quickstart. The batch driver records them and
/// moves on to the next target.
#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum QuickstartError {
	#[error("{quickstart}: {reason}")]
	#[diagnostic(
		code(quickdocs::schema),
		help(
			"_meta.json requires non-empty `id`, `framework`, `description`, `howItWorks` and a \
			 `snippets` array"
		)
	)]
	Schema { quickstart: String, reason: String },

	#[error("{quickstart}: snippet file not found: {file}")]
	#[diagnostic(
		code(quickdocs::missing_snippet),
		help("add the file to the snippets/ directory or remove it from _meta.json")
	)]
	MissingSnippet { quickstart: String, file: String },

	#[error("{quickstart}: failed to access `{path}`: {source}")]
	#[diagnostic(code(quickdocs::quickstart_io))]
	Io {
		quickstart: String,
		path: String,
		#[source]
		source: std::io::Error,
	},
}

impl QuickstartError {
	pub(crate) fn schema(quickstart: &str, reason: impl Into<String>) -> Self {
		Self::Schema {
			quickstart: quickstart.to_string(),
			reason: reason.into(),
		}
	}

	pub(crate) fn io(quickstart: &str, path: &std::path::Path, source: std::io::Error) -> Self {
		Self::Io {
			quickstart: quickstart.to_string(),
			path: path.display().to_string(),
			source,
		}
	}

	/// Returns true for descriptor schema violations.
	pub fn is_schema(&self) -> bool {
		matches!(self, Self::Schema { .. })
	}
}

pub type QuickdocsResult<T> = Result<T, QuickdocsError>;
pub type QuickstartResult<T> = Result<T, QuickstartError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
