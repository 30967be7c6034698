use std::path::Path;

use serde_json::Value;
use serde_json::json;

use crate::config::META_FILE;
use crate::config::SNIPPETS_DIR;
use crate::descriptor::QuickstartDescriptor;
use crate::descriptor::SnippetRef;
use crate::snippet::SnippetContents;

pub const PROVIDER_SNIPPET: &str = "export function Providers({ children }) {\n  return \
                                    <Provider apiKey={key}>{children}</Provider>;\n}\n";

pub const AUTH_BUTTON_SNIPPET: &str = "export function AuthButton() {\n  return (\n    <button \
                                       className=\"qs-btn\" onClick={login}>\n      Sign In\n    \
                                       </button>\n  );\n}\n";

pub fn snippet_ref(file: &str, title: &str, accordion: Option<&str>) -> SnippetRef {
	SnippetRef {
		file: file.to_string(),
		title: title.to_string(),
		description: format!("About {title}."),
		accordion: accordion.map(str::to_string),
	}
}

pub fn sample_descriptor() -> QuickstartDescriptor {
	QuickstartDescriptor {
		id: "wallets-react".to_string(),
		framework: "React".to_string(),
		description: "Create wallets with email login in React".to_string(),
		how_it_works: "Users log in with email.\n\nA wallet is created automatically.".to_string(),
		note: Some("Uses the staging environment.".to_string()),
		snippets: vec![
			snippet_ref(
				"01-provider-setup.tsx",
				"Provider Setup",
				Some("The provider holds the API key."),
			),
			snippet_ref("02-auth-button.tsx", "Auth Button", None),
		],
	}
}

pub fn sample_contents() -> SnippetContents {
	SnippetContents::from([
		(
			"01-provider-setup.tsx".to_string(),
			PROVIDER_SNIPPET.to_string(),
		),
		(
			"02-auth-button.tsx".to_string(),
			AUTH_BUTTON_SNIPPET.to_string(),
		),
	])
}

/// Descriptor JSON for a quickstart with a single `01-app.tsx` snippet.
pub fn meta_json(id: &str) -> Value {
	json!({
		"id": id,
		"framework": format!("Framework {id}"),
		"description": format!("Quickstart for {id}"),
		"howItWorks": "It just works.",
		"snippets": [
			{ "file": "01-app.tsx", "title": "App", "description": "The app." }
		]
	})
}

/// Create `apps/<id>/snippets/` with the given descriptor and snippet files.
pub fn write_quickstart(
	apps_dir: &Path,
	id: &str,
	meta: Option<&Value>,
	snippets: &[(&str, &str)],
) -> std::io::Result<()> {
	let snippets_dir = apps_dir.join(id).join(SNIPPETS_DIR);
	std::fs::create_dir_all(&snippets_dir)?;

	if let Some(meta) = meta {
		std::fs::write(snippets_dir.join(META_FILE), meta.to_string())?;
	}

	for (file, content) in snippets {
		std::fs::write(snippets_dir.join(file), content)?;
	}

	Ok(())
}

/// A complete quickstart that generates successfully.
pub fn write_valid_quickstart(apps_dir: &Path, id: &str) -> std::io::Result<()> {
	write_quickstart(
		apps_dir,
		id,
		Some(&meta_json(id)),
		&[("01-app.tsx", "export const App = () => <main className=\"app\" />;\n")],
	)
}
