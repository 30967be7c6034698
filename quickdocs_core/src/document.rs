use std::fmt;

use crate::QuickstartError;
use crate::QuickstartResult;
use crate::config::LanguageTable;
use crate::config::REPOSITORY_URL;
use crate::descriptor::QuickstartDescriptor;
use crate::descriptor::SnippetRef;
use crate::snippet::SnippetContents;
use crate::snippet::display_filename;
use crate::snippet::sanitize_snippet;

/// Marker placed below the front matter of every generated artifact.
pub const GENERATED_MARKER: &str =
	"{/* AUTO-GENERATED FROM _meta.json AND snippets/ - DO NOT EDIT MANUALLY */}";

const CHECKOUT_DIR: &str = "5-minute-quickstarts";
const CONSOLE_URL: &str = "https://staging.crossmint.com/console";
const ACCORDION_TITLE: &str = "What's happening here?";

/// A rendered documentation artifact, held as its ordered lines.
///
/// The text form joins lines with `\n` and has no trailing newline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedDocument {
	lines: Vec<String>,
}

impl GeneratedDocument {
	pub fn lines(&self) -> &[String] {
		&self.lines
	}

	/// The artifact text as written to disk.
	pub fn text(&self) -> String {
		self.lines.join("\n")
	}

	fn line(&mut self, line: impl Into<String>) {
		self.lines.push(line.into());
	}

	fn blank(&mut self) {
		self.lines.push(String::new());
	}
}

impl fmt::Display for GeneratedDocument {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.text())
	}
}

/// Render the documentation artifact for one quickstart.
///
/// Output is a pure function of the arguments: sections always appear in the
/// same order, snippets follow declaration order, and field values are
/// emitted verbatim.
pub fn render_document(
	descriptor: &QuickstartDescriptor,
	contents: &SnippetContents,
	languages: &LanguageTable,
) -> QuickstartResult<GeneratedDocument> {
	let mut doc = GeneratedDocument::default();

	push_front_matter(&mut doc, descriptor);
	push_prerequisites(&mut doc);

	if let Some(note) = &descriptor.note {
		doc.line("<Note>");
		doc.line(note.as_str());
		doc.line("</Note>");
		doc.blank();
	}

	push_quick_setup(&mut doc, &descriptor.id);

	doc.line("## How It Works");
	doc.blank();
	doc.line(descriptor.how_it_works.as_str());
	doc.blank();

	doc.line("## Code Walkthrough");
	doc.blank();
	for snippet in &descriptor.snippets {
		let Some(raw) = contents.get(&snippet.file) else {
			return Err(QuickstartError::MissingSnippet {
				quickstart: descriptor.id.clone(),
				file: snippet.file.clone(),
			});
		};
		push_snippet(&mut doc, snippet, raw, languages);
	}

	doc.line("## Next Steps");
	doc.blank();
	doc.line(format!(
		"<Card title=\"View Source\" icon=\"github\" href=\"{REPOSITORY_URL}/tree/main/apps/{}\">",
		descriptor.id
	));
	doc.line("  See the full quickstart code");
	doc.line("</Card>");

	Ok(doc)
}

fn push_front_matter(doc: &mut GeneratedDocument, descriptor: &QuickstartDescriptor) {
	doc.line("---");
	doc.line(format!("title: \"{}\"", descriptor.framework));
	doc.line(format!("description: \"{}\"", descriptor.description));
	doc.line("---");
	doc.blank();
	doc.line(GENERATED_MARKER);
	doc.blank();
}

fn push_prerequisites(doc: &mut GeneratedDocument) {
	doc.line("## Prerequisites");
	doc.blank();
	doc.line("- Node.js 18+");
	doc.blank();
}

fn push_quick_setup(doc: &mut GeneratedDocument, id: &str) {
	doc.line("## Quick Setup");
	doc.blank();
	doc.line("<Steps>");
	doc.line("  <Step title=\"Clone and run\">");
	doc.line("    ```bash");
	doc.line(format!("    git clone {REPOSITORY_URL}"));
	doc.line(format!("    cd {CHECKOUT_DIR}"));
	doc.line(format!("    ./setup.sh {id}"));
	doc.line("    ```");
	doc.line("  </Step>");
	doc.line("  <Step title=\"Follow the prompts\">");
	doc.line(format!(
		"    The setup script installs dependencies, prompts for your API key (or [create one \
		 here]({CONSOLE_URL})), and starts the dev server."
	));
	doc.line("  </Step>");
	doc.line("</Steps>");
	doc.blank();
}

fn push_snippet(
	doc: &mut GeneratedDocument,
	snippet: &SnippetRef,
	raw: &str,
	languages: &LanguageTable,
) {
	let language = languages.language_for(&snippet.file);
	let label = display_filename(&snippet.file);

	doc.line(format!("### {}", snippet.title));
	doc.blank();
	doc.line(snippet.description.as_str());
	doc.blank();
	doc.line(format!("```{language} title=\"{label}\""));
	doc.line(sanitize_snippet(raw));
	doc.line("```");
	doc.blank();

	if let Some(accordion) = &snippet.accordion {
		doc.line(format!("<Accordion title=\"{ACCORDION_TITLE}\">"));
		doc.line(accordion.as_str());
		doc.line("</Accordion>");
		doc.blank();
	}
}
