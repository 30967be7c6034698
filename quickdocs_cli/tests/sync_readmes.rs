mod common;

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use quickdocs_core::AnyEmptyResult;

#[test]
fn sync_readmes_generates_every_quickstart() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_quickstart(tmp.path(), "wallets-react", Some("React"))?;
	common::write_quickstart(tmp.path(), "wallets-nextjs", Some("Next.js"))?;
	std::fs::create_dir_all(tmp.path().join("apps/shared"))?;

	common::sync_readmes_cmd()
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(contains("wallets-react (updated)"))
		.stdout(contains("Skipping shared (no snippets/_meta.json)"))
		.stdout(contains("Done! Synced 2 quickstart(s)."));

	let readme = std::fs::read_to_string(tmp.path().join("apps/wallets-react/README.mdx"))?;
	assert!(readme.starts_with("---\ntitle: \"React\"\n"));
	assert!(readme.contains("```tsx title=\"app.tsx\"\nexport const App = () => <main />;\n```"));

	Ok(())
}

#[test]
fn sync_readmes_second_run_reports_no_changes() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_quickstart(tmp.path(), "wallets-react", Some("React"))?;

	common::sync_readmes_cmd()
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	common::sync_readmes_cmd()
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(contains("wallets-react (no changes)"))
		.stdout(contains("(updated)").not());

	Ok(())
}

#[test]
fn sync_readmes_continues_past_broken_quickstart() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_quickstart(tmp.path(), "alpha", Some("Alpha"))?;
	common::write_quickstart(tmp.path(), "beta", None)?;
	common::write_quickstart(tmp.path(), "gamma", Some("Gamma"))?;

	common::sync_readmes_cmd()
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stderr(contains("beta: Missing required field \"framework\" in _meta.json"))
		.stdout(contains("Done! Synced 2 quickstart(s)."));

	assert!(!tmp.path().join("apps/beta/README.mdx").exists());

	Ok(())
}

#[test]
fn sync_readmes_single_quickstart() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_quickstart(tmp.path(), "alpha", Some("Alpha"))?;
	common::write_quickstart(tmp.path(), "beta", Some("Beta"))?;

	common::sync_readmes_cmd()
		.arg("beta")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(contains("beta (updated)"))
		.stdout(contains("alpha").not());

	assert!(!tmp.path().join("apps/alpha/README.mdx").exists());

	Ok(())
}

#[test]
fn sync_readmes_unknown_quickstart_exits_with_error() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_quickstart(tmp.path(), "alpha", Some("Alpha"))?;

	common::sync_readmes_cmd()
		.arg("missing")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stderr(contains("quickstart `missing` not found"));

	Ok(())
}

#[test]
fn sync_readmes_check_detects_stale_readme() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_quickstart(tmp.path(), "alpha", Some("Alpha"))?;
	std::fs::write(tmp.path().join("apps/alpha/README.mdx"), "stale\n")?;

	common::sync_readmes_cmd()
		.arg("--check")
		.arg("--diff")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stdout(contains("alpha (out of date"))
		.stderr(contains("-stale"));

	assert_eq!(
		std::fs::read_to_string(tmp.path().join("apps/alpha/README.mdx"))?,
		"stale\n"
	);

	common::sync_readmes_cmd()
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	common::sync_readmes_cmd()
		.arg("--check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(contains("Check passed"));

	Ok(())
}

#[test]
fn sync_readmes_verbose_logs_run_summary() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_quickstart(tmp.path(), "alpha", Some("Alpha"))?;

	common::sync_readmes_cmd()
		.arg("--verbose")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stderr(contains("syncing readmes"))
		.stderr(contains("sync finished"));

	common::sync_readmes_cmd()
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stderr(contains("sync finished").not());

	Ok(())
}
