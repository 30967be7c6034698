use std::collections::BTreeMap;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::QuickdocsError;
use crate::QuickdocsResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = [
	"quickdocs.toml",
	".quickdocs.toml",
	".config/quickdocs.toml",
];

/// Default apps root, relative to the project root.
pub const DEFAULT_APPS_DIR: &str = "apps";
/// Directory inside each quickstart holding the descriptor and snippets.
pub const SNIPPETS_DIR: &str = "snippets";
/// Descriptor file name inside [`SNIPPETS_DIR`].
pub const META_FILE: &str = "_meta.json";
/// Generator output artifact inside each quickstart.
pub const README_FILE: &str = "README.mdx";
/// Pre-generated artifact consumed by the replicator.
pub const DOCS_FILE: &str = "docs.mdx";

/// Public location of the quickstarts repository. Used in the generated
/// setup instructions, the "View Source" card, and the provenance header.
pub const REPOSITORY_URL: &str = "https://github.com/Crossmint/5-minute-quickstarts";

/// Language tag used for extensions missing from the [`LanguageTable`].
pub const FALLBACK_LANGUAGE: &str = "text";

const DEFAULT_LANGUAGES: [(&str, &str); 5] = [
	(".tsx", "tsx"),
	(".ts", "typescript"),
	(".swift", "swift"),
	(".kt", "kotlin"),
	(".sh", "bash"),
];

const DEFAULT_DOCS_PATHS: [(&str, &str); 4] = [
	("wallets-react", "wallets/quickstarts/react.mdx"),
	("wallets-react-native", "wallets/quickstarts/react-native.mdx"),
	("wallets-nextjs", "wallets/quickstarts/nextjs.mdx"),
	("onramp-react", "onramp/quickstarts/react.mdx"),
];

/// Configuration loaded from a `quickdocs.toml` file.
///
/// ```toml
/// apps_dir = "apps"
///
/// [languages]
/// ".vue" = "vue"
///
/// [docs_paths]
/// "wallets-vue" = "wallets/quickstarts/vue.mdx"
/// ```
///
/// Every section is optional. Entries in `[languages]` and `[docs_paths]`
/// are layered over the built-in tables, so adding a quickstart or a file
/// type never requires a code change.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuickdocsConfig {
	/// Apps root relative to the project root. Defaults to `apps`.
	#[serde(default)]
	pub apps_dir: Option<PathBuf>,
	/// Extra extension (including the leading dot) to language tag entries.
	#[serde(default)]
	pub languages: BTreeMap<String, String>,
	/// Extra quickstart id to docs repository path entries.
	#[serde(default)]
	pub docs_paths: BTreeMap<String, String>,
}

impl QuickdocsConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> QuickdocsResult<Option<QuickdocsConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config = Self::parse(&content)?;
		tracing::debug!(path = %config_path.display(), "loaded config");

		Ok(Some(config))
	}

	/// Parse config text.
	pub fn parse(content: &str) -> QuickdocsResult<QuickdocsConfig> {
		toml::from_str(content).map_err(|e| QuickdocsError::ConfigParse(e.to_string()))
	}

	/// The extension table with configured entries applied.
	pub fn language_table(&self) -> LanguageTable {
		let mut table = LanguageTable::default();
		for (extension, tag) in &self.languages {
			table.insert(extension, tag);
		}
		table
	}

	/// The replication table with configured entries applied. Fails if a
	/// configured destination could escape the docs repository.
	pub fn docs_mapping(&self) -> QuickdocsResult<DocsMapping> {
		let mut mapping = DocsMapping::default();
		for (id, path) in &self.docs_paths {
			mapping.insert(id, path)?;
		}
		Ok(mapping)
	}
}

/// Static mapping from snippet file extension to code fence language tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTable(BTreeMap<String, String>);

impl Default for LanguageTable {
	fn default() -> Self {
		Self(
			DEFAULT_LANGUAGES
				.iter()
				.map(|(extension, tag)| ((*extension).to_string(), (*tag).to_string()))
				.collect(),
		)
	}
}

impl LanguageTable {
	/// Add or replace the tag for `extension` (e.g. `".vue"`).
	pub fn insert(&mut self, extension: &str, tag: &str) {
		self.0.insert(extension.to_string(), tag.to_string());
	}

	/// Language tag for a snippet file name. The extension is everything from
	/// the last `.`; names without a dot and unknown extensions map to
	/// [`FALLBACK_LANGUAGE`].
	pub fn language_for(&self, file: &str) -> &str {
		file.rfind('.')
			.and_then(|idx| self.0.get(&file[idx..]))
			.map_or(FALLBACK_LANGUAGE, String::as_str)
	}
}

/// Static mapping from quickstart id to a destination path inside the
/// external docs repository. A missing entry means "not replicated".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsMapping(BTreeMap<String, PathBuf>);

impl Default for DocsMapping {
	fn default() -> Self {
		Self(
			DEFAULT_DOCS_PATHS
				.iter()
				.map(|(id, path)| ((*id).to_string(), PathBuf::from(path)))
				.collect(),
		)
	}
}

impl DocsMapping {
	/// A mapping with no entries.
	pub fn empty() -> Self {
		Self(BTreeMap::new())
	}

	/// Add or replace the destination for `id`.
	pub fn insert(&mut self, id: &str, path: &str) -> QuickdocsResult<()> {
		let destination = PathBuf::from(path);
		if !is_contained_relative(&destination) {
			return Err(QuickdocsError::InvalidDocsMapping {
				id: id.to_string(),
				path: path.to_string(),
			});
		}
		self.0.insert(id.to_string(), destination);
		Ok(())
	}

	/// Destination path for `id`, relative to the docs repository root.
	pub fn get(&self, id: &str) -> Option<&Path> {
		self.0.get(id).map(PathBuf::as_path)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

/// Whether `path` is a non-empty relative path made only of normal
/// components, i.e. it cannot point outside the directory it is joined to.
pub(crate) fn is_contained_relative(path: &Path) -> bool {
	path.components()
		.any(|component| matches!(component, Component::Normal(_)))
		&& path
			.components()
			.all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}
