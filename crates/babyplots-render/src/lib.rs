//! Output backend for babyplots-rs.
//!
//! This crate turns a scene document into files the browser engine can load:
//! - Output configuration (engine script source, page title)
//! - Standalone HTML pages and embeddable fragments
//! - JSON scene files

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

pub mod config;
pub mod html;
pub mod output;

pub use config::{EngineSource, OutputConfig};
pub use html::{display_id, render_fragment, render_page, sanitize_identifier, View};
pub use output::{write_html, write_json};
