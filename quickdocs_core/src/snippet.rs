use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::QuickstartError;
use crate::QuickstartResult;
use crate::descriptor::SnippetRef;

/// Presentation-only attributes removed from snippets, applied in order.
///
/// Brace-delimited values are matched up to the first `}` only. A value with
/// nested braces, such as `style={{ a: { b: 1 } }}`, is therefore cut short
/// and leaves its tail behind. Existing documentation depends on this
/// output, so it is kept as is.
static PRESENTATION_ATTRIBUTES: LazyLock<[Regex; 4]> = LazyLock::new(|| {
	[
		r#"\s+className=["'][^"']*["']"#,
		r"\s+className=\{[^}]*\}",
		r"\s+style=\{\{[^}]*\}\}",
		r"\s+style=\{[^}]*\}",
	]
	.map(|pattern| Regex::new(pattern).unwrap_or_else(|e| panic!("invalid pattern: {e}")))
});

static EXCESS_BLANK_LINES: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\n{3,}").unwrap_or_else(|e| panic!("invalid pattern: {e}")));

static ORDERING_PREFIX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[0-9]+-").unwrap_or_else(|e| panic!("invalid pattern: {e}")));

/// Raw snippet text keyed by the `file` value declared in the descriptor.
pub type SnippetContents = HashMap<String, String>;

/// Read every snippet referenced by `snippets` from `snippets_dir`.
///
/// The returned map holds exactly the referenced files. The first reference
/// that is not a regular file fails the whole quickstart with
/// [`QuickstartError::MissingSnippet`].
pub fn resolve_snippets(
	quickstart: &str,
	snippets_dir: &Path,
	snippets: &[SnippetRef],
) -> QuickstartResult<SnippetContents> {
	let mut contents = SnippetContents::with_capacity(snippets.len());

	for snippet in snippets {
		if contents.contains_key(&snippet.file) {
			continue;
		}

		let path = snippets_dir.join(&snippet.file);
		if !path.is_file() {
			return Err(QuickstartError::MissingSnippet {
				quickstart: quickstart.to_string(),
				file: snippet.file.clone(),
			});
		}

		let text =
			std::fs::read_to_string(&path).map_err(|e| QuickstartError::io(quickstart, &path, e))?;
		tracing::debug!(quickstart, file = %snippet.file, bytes = text.len(), "read snippet");
		contents.insert(snippet.file.clone(), text);
	}

	Ok(contents)
}

/// Prepare raw snippet source for display: drop `className` and `style`
/// attributes, collapse runs of blank lines to one, and trim the result.
pub fn sanitize_snippet(code: &str) -> String {
	let mut result = code.to_string();

	for pattern in PRESENTATION_ATTRIBUTES.iter() {
		result = pattern.replace_all(&result, "").into_owned();
	}

	let collapsed = EXCESS_BLANK_LINES.replace_all(&result, "\n\n");
	collapsed.trim_matches(is_trimmable).to_string()
}

/// Whitespace plus the byte order mark, which editors leave at the start of
/// some snippet files.
fn is_trimmable(c: char) -> bool {
	c.is_whitespace() || c == '\u{feff}'
}

/// The label shown for a snippet file, without its ordering prefix.
///
/// `01-provider-setup.tsx` becomes `provider-setup.tsx`.
pub fn display_filename(file: &str) -> &str {
	ORDERING_PREFIX
		.find(file)
		.map_or(file, |prefix| &file[prefix.end()..])
}
