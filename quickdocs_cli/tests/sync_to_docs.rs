mod common;

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use quickdocs_core::AnyEmptyResult;

#[test]
fn sync_to_docs_requires_docs_path() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::sync_to_docs_cmd()
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stdout(contains("Usage: sync-to-docs --docs-path <path-to-docs-repo>"));

	common::sync_to_docs_cmd()
		.arg("--path")
		.arg(tmp.path())
		.arg("--docs-path")
		.assert()
		.code(1)
		.stdout(contains("Usage: sync-to-docs"));

	Ok(())
}

#[test]
fn sync_to_docs_rejects_missing_docs_repo() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_docs_artifact(tmp.path(), "wallets-react", "# React\n")?;

	common::sync_to_docs_cmd()
		.arg("--path")
		.arg(tmp.path())
		.arg("--docs-path")
		.arg(tmp.path().join("no-such-docs"))
		.assert()
		.code(1)
		.stderr(contains("docs path does not exist"));

	Ok(())
}

#[test]
fn sync_to_docs_copies_mapped_artifacts() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let docs = tmp.path().join("docs");
	std::fs::create_dir_all(&docs)?;
	common::write_docs_artifact(tmp.path(), "wallets-react-native", "# React Native\n")?;
	common::write_docs_artifact(tmp.path(), "wallets-vue", "# Vue\n")?;

	common::sync_to_docs_cmd()
		.arg("--path")
		.arg(tmp.path())
		.arg("--docs-path")
		.arg(&docs)
		.assert()
		.success()
		.stdout(contains("Found 2 quickstart(s) with docs.mdx"))
		.stdout(contains(
			"wallets-react-native → wallets/quickstarts/react-native.mdx",
		))
		.stdout(contains("wallets-vue: No docs path mapping defined, skipping"));

	let copied = std::fs::read_to_string(docs.join("wallets/quickstarts/react-native.mdx"))?;
	assert!(copied.starts_with("{/* AUTO-GENERATED - Source: "));
	assert!(copied.ends_with("*/}\n\n# React Native\n"));

	Ok(())
}

#[test]
fn sync_to_docs_uses_configured_mapping() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let docs = tmp.path().join("docs");
	std::fs::create_dir_all(&docs)?;
	std::fs::write(
		tmp.path().join("quickdocs.toml"),
		"[docs_paths]\n\"wallets-vue\" = \"wallets/quickstarts/vue.mdx\"\n",
	)?;
	common::write_docs_artifact(tmp.path(), "wallets-vue", "# Vue\n")?;

	common::sync_to_docs_cmd()
		.arg("--path")
		.arg(tmp.path())
		.arg("--docs-path")
		.arg(&docs)
		.assert()
		.success()
		.stdout(contains("No docs path mapping").not());

	assert!(docs.join("wallets/quickstarts/vue.mdx").is_file());

	Ok(())
}

#[test]
fn sync_to_docs_dry_run_writes_nothing() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let docs = tmp.path().join("docs");
	std::fs::create_dir_all(&docs)?;
	common::write_docs_artifact(tmp.path(), "onramp-react", "# Onramp\n")?;

	common::sync_to_docs_cmd()
		.arg("--dry-run")
		.arg("--path")
		.arg(tmp.path())
		.arg("--docs-path")
		.arg(&docs)
		.assert()
		.success()
		.stdout(contains("onramp-react would be written to onramp/quickstarts/react.mdx"));

	assert_eq!(std::fs::read_dir(&docs)?.count(), 0);

	Ok(())
}

#[test]
fn sync_to_docs_verbose_logs_run_summary() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let docs = tmp.path().join("docs");
	std::fs::create_dir_all(&docs)?;
	common::write_docs_artifact(tmp.path(), "wallets-react", "# React\n")?;

	common::sync_to_docs_cmd()
		.arg("--verbose")
		.arg("--path")
		.arg(tmp.path())
		.arg("--docs-path")
		.arg(&docs)
		.assert()
		.success()
		.stderr(contains("replicating docs"))
		.stderr(contains("replication finished"));

	Ok(())
}
