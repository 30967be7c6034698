use std::path::Path;

use serde::Deserialize;
use serde::Deserializer;
use serde_json::Value;

use crate::QuickstartError;
use crate::QuickstartResult;
use crate::config::is_contained_relative;

/// Descriptor fields that must be present and truthy, in the order they are
/// checked.
pub const REQUIRED_FIELDS: [&str; 5] = ["id", "framework", "description", "howItWorks", "snippets"];

const REQUIRED_SNIPPET_FIELDS: [&str; 3] = ["file", "title", "description"];

/// Validated per-quickstart metadata read from `snippets/_meta.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickstartDescriptor {
	/// Quickstart identity. Also the directory name under the apps root.
	pub id: String,
	/// Display title used in the front matter.
	pub framework: String,
	/// One-line summary used in the front matter.
	pub description: String,
	/// Prose for the "How It Works" section, emitted verbatim.
	pub how_it_works: String,
	/// Optional callout rendered inside a `<Note>` block.
	#[serde(default, deserialize_with = "optional_text")]
	pub note: Option<String>,
	/// Snippets in walkthrough order.
	pub snippets: Vec<SnippetRef>,
}

/// A reference from a descriptor to one file in the snippet directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SnippetRef {
	/// File name relative to the snippet directory. This is the lookup key.
	pub file: String,
	pub title: String,
	pub description: String,
	/// Optional explanation rendered in a collapsible block.
	#[serde(default, deserialize_with = "optional_text")]
	pub accordion: Option<String>,
}

/// Read and validate the descriptor at `path`. `quickstart` names the target
/// in error messages.
pub fn load_descriptor(quickstart: &str, path: &Path) -> QuickstartResult<QuickstartDescriptor> {
	let content =
		std::fs::read_to_string(path).map_err(|e| QuickstartError::io(quickstart, path, e))?;
	tracing::debug!(quickstart, path = %path.display(), "read descriptor");

	parse_descriptor(quickstart, &content)
}

/// Parse descriptor JSON and enforce the required-field schema.
pub fn parse_descriptor(quickstart: &str, content: &str) -> QuickstartResult<QuickstartDescriptor> {
	let value: Value = serde_json::from_str(content).map_err(|e| {
		QuickstartError::schema(quickstart, format!("invalid JSON in _meta.json: {e}"))
	})?;

	let Some(object) = value.as_object() else {
		return Err(QuickstartError::schema(
			quickstart,
			"_meta.json must contain a JSON object",
		));
	};

	for field in REQUIRED_FIELDS {
		if !object.get(field).is_some_and(is_truthy) {
			return Err(QuickstartError::schema(
				quickstart,
				format!("Missing required field \"{field}\" in _meta.json"),
			));
		}
	}

	let Some(snippets) = object.get("snippets").and_then(Value::as_array) else {
		return Err(QuickstartError::schema(
			quickstart,
			"field \"snippets\" in _meta.json must be an array",
		));
	};

	for (index, snippet) in snippets.iter().enumerate() {
		validate_snippet(quickstart, index, snippet)?;
	}

	serde_json::from_value(value).map_err(|e| {
		QuickstartError::schema(quickstart, format!("invalid _meta.json: {e}"))
	})
}

fn validate_snippet(quickstart: &str, index: usize, snippet: &Value) -> QuickstartResult<()> {
	let Some(entry) = snippet.as_object() else {
		return Err(QuickstartError::schema(
			quickstart,
			format!("snippets[{index}] in _meta.json must be an object"),
		));
	};

	for field in REQUIRED_SNIPPET_FIELDS {
		match entry.get(field) {
			Some(Value::String(text)) if !text.is_empty() => {}
			_ => {
				return Err(QuickstartError::schema(
					quickstart,
					format!("Missing required field \"snippets[{index}].{field}\" in _meta.json"),
				));
			}
		}
	}

	let file = entry.get("file").and_then(Value::as_str).unwrap_or_default();
	if !is_contained_relative(Path::new(file)) {
		return Err(QuickstartError::schema(
			quickstart,
			format!("snippets[{index}].file `{file}` must stay inside the snippets directory"),
		));
	}

	Ok(())
}

/// Truthiness of a descriptor value: `null`, `false`, `0` and `""` are falsy,
/// every array and object is truthy.
fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(flag) => *flag,
		Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
		Value::String(text) => !text.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}

/// Optional display text where falsy values mean "absent".
fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Value::deserialize(deserializer)?;
	match value {
		Value::String(text) if !text.is_empty() => Ok(Some(text)),
		other if !is_truthy(&other) => Ok(None),
		other => {
			Err(serde::de::Error::custom(format!(
				"expected a string, found `{other}`"
			)))
		}
	}
}
