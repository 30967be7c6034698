//! `quickdocs_core` keeps quickstart documentation in sync with the code it
//! describes. It generates a deterministic `README.mdx` for every quickstart
//! from the quickstart's `snippets/_meta.json` descriptor and snippet files,
//! and mirrors generated `docs.mdx` artifacts into an external documentation
//! repository.
//!
//! ## Processing Pipeline
//!
//! ```text
//! apps/<id>/snippets/_meta.json
//!   → Descriptor loader (parses JSON, enforces the required-field schema)
//!   → Snippet resolver (reads every referenced snippet file)
//!   → Snippet transformer (strips className/style, collapses blank lines)
//!   → Document renderer (fixed section order, snippets in declared order)
//!   → Writer (rewrites README.mdx only when the text changed)
//! ```
//!
//! Replication is a separate job: every `apps/<id>/docs.mdx` is copied to the
//! destination configured for `<id>` with a provenance header prepended.
//!
//! ## Modules
//!
//! - [`config`]: Built-in tables and `quickdocs.toml` loading.
//! - [`descriptor`]: Descriptor types and schema validation.
//! - [`snippet`]: Snippet resolution and display sanitization.
//! - [`document`]: Rendering of the documentation artifact.
//! - [`writer`]: Compare-then-write for artifacts.
//! - [`project`]: The generator batch over the apps root.
//! - [`replicate`]: Copying generated artifacts into a docs repository.
//!
//! ## Error Handling
//!
//! [`QuickstartError`] covers problems local to one quickstart; the batch
//! records them and continues. [`QuickdocsError`] covers caller mistakes such
//! as naming a quickstart that does not exist, and aborts the run.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quickdocs_core::project::SyncMode;
//! use quickdocs_core::project::load_project;
//! use quickdocs_core::project::sync_quickstarts;
//! use std::path::Path;
//!
//! let ctx = load_project(Path::new(".")).unwrap();
//! let report = sync_quickstarts(&ctx, None, SyncMode::Write).unwrap();
//! println!("synced {} quickstart(s)", report.synced_count());
//! ```

pub use error::*;

pub mod config;
pub mod descriptor;
pub mod document;
#[allow(unused_assignments)]
mod error;
pub mod project;
pub mod replicate;
pub mod snippet;
pub mod writer;

#[cfg(test)]
mod __fixtures;
