#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use serde_json::json;

pub fn sync_readmes_cmd() -> Command {
	cmd("sync-readmes")
}

pub fn sync_to_docs_cmd() -> Command {
	cmd("sync-to-docs")
}

fn cmd(name: &str) -> Command {
	let mut cmd = Command::cargo_bin(name).unwrap_or_else(|e| panic!("missing binary {name}: {e}"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("RUST_LOG");
	cmd
}

/// Write `apps/<id>/snippets/` with a one-snippet descriptor. When
/// `framework` is `None` the field is left out.
pub fn write_quickstart(root: &Path, id: &str, framework: Option<&str>) -> std::io::Result<()> {
	let snippets = root.join("apps").join(id).join("snippets");
	std::fs::create_dir_all(&snippets)?;

	let mut meta = json!({
		"id": id,
		"description": format!("Quickstart for {id}"),
		"howItWorks": "It just works.",
		"snippets": [
			{ "file": "01-app.tsx", "title": "App", "description": "The app." }
		]
	});
	if let Some(framework) = framework {
		meta["framework"] = json!(framework);
	}

	std::fs::write(snippets.join("_meta.json"), meta.to_string())?;
	std::fs::write(
		snippets.join("01-app.tsx"),
		"export const App = () => <main className=\"app\" />;\n",
	)
}

pub fn write_docs_artifact(root: &Path, id: &str, content: &str) -> std::io::Result<()> {
	let dir = root.join("apps").join(id);
	std::fs::create_dir_all(&dir)?;
	std::fs::write(dir.join("docs.mdx"), content)
}
