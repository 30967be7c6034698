use std::io::ErrorKind;
use std::path::Path;

/// Outcome of writing an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
	/// The artifact differed (or was absent) and has been rewritten.
	Updated,
	/// The artifact already held the expected text. Nothing was written.
	Unchanged,
}

/// Outcome of comparing an artifact without writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactStatus {
	UpToDate,
	/// The on-disk text (empty when the file is absent) differs from the
	/// expected text.
	Stale { current: String, expected: String },
}

/// Read an existing artifact. An absent file reads as the empty string.
pub fn read_existing(path: &Path) -> std::io::Result<String> {
	match std::fs::read_to_string(path) {
		Ok(content) => Ok(content),
		Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
		Err(e) => Err(e),
	}
}

/// Write `content` to `path` only when it differs from what is already
/// there. This is the only place the generator mutates the filesystem.
pub fn write_if_changed(path: &Path, content: &str) -> std::io::Result<WriteOutcome> {
	if read_existing(path)? == content {
		return Ok(WriteOutcome::Unchanged);
	}

	std::fs::write(path, content)?;
	tracing::debug!(path = %path.display(), bytes = content.len(), "wrote artifact");
	Ok(WriteOutcome::Updated)
}

/// Compare `content` with the artifact at `path` without touching it.
pub fn check_artifact(path: &Path, content: &str) -> std::io::Result<ArtifactStatus> {
	let current = read_existing(path)?;
	if current == content {
		return Ok(ArtifactStatus::UpToDate);
	}

	Ok(ArtifactStatus::Stale {
		current,
		expected: content.to_string(),
	})
}
