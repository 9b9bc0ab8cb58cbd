//! Template source loading from the on-disk template directory.

use std::fs;
use std::path::PathBuf;

use super::{RenderError, RenderResult};

/// Reserved name of the main document template.
pub const MAIN_TEMPLATE: &str = "page";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateRole {
    Main,
    Partial,
}

/// A named template body plus its role. Identity = name; immutable after
/// load.
#[derive(Debug, Clone)]
pub struct TemplateSource {
    pub name: String,
    pub body: String,
    pub role: TemplateRole,
}

/// Reads named template sources from a fixed directory, resolved as
/// `<name>.html`.
pub struct TemplateLoader {
    dir: PathBuf,
}

impl TemplateLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Load one template source. A missing or unreadable file propagates as
    /// `TemplateNotFound` carrying the template name only; the filesystem
    /// path stays server-side.
    pub fn load(&self, name: &str) -> RenderResult<TemplateSource> {
        let path = self.dir.join(format!("{name}.html"));
        let body = fs::read_to_string(&path).map_err(|e| {
            tracing::error!(template = name, path = %path.display(), error = %e, "template source unreadable");
            RenderError::TemplateNotFound(name.to_string())
        })?;

        let role = if name == MAIN_TEMPLATE {
            TemplateRole::Main
        } else {
            TemplateRole::Partial
        };

        Ok(TemplateSource {
            name: name.to_string(),
            body,
            role,
        })
    }
}
