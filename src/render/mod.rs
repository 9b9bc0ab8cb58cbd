//! Template composition and rendering pipeline.
//!
//! This module provides:
//! - Named template sources classified as main or partial (`loader`)
//! - Per-invocation composition of a main template plus partials
//!   (`compositor`)
//! - Custom formatting helpers invocable from templates (`helpers`)
//! - Record selection and HTML production (`renderer`)
//!
//! # Example
//!
//! ```ignore
//! let loader = TemplateLoader::new("templates");
//! let set = compose(&loader, &["head".into(), "page".into()])?;
//! let html = render_record(&set, &payload)?;
//! ```

mod compositor;
mod helpers;
mod loader;
mod renderer;

pub use compositor::{compose, TemplateSet};
pub use helpers::register_helpers;
pub use loader::{TemplateLoader, TemplateRole, TemplateSource, MAIN_TEMPLATE};
pub use renderer::render_record;

use thiserror::Error;

/// Render-pipeline error type
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("No main template in the configured name list")]
    NoMainTemplate,

    #[error("Template compile failed: {0}")]
    Compile(#[from] handlebars::TemplateError),

    #[error("Template render failed: {0}")]
    Engine(#[from] handlebars::RenderError),

    #[error("Fetched payload contains no records")]
    EmptyResultSet,
}

/// Result type for render-pipeline operations
pub type RenderResult<T> = std::result::Result<T, RenderError>;
