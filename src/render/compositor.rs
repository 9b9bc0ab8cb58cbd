//! Per-invocation assembly of the template namespace.

use handlebars::Handlebars;
use serde::Serialize;

use super::helpers::register_helpers;
use super::loader::{TemplateLoader, TemplateRole, MAIN_TEMPLATE};
use super::{RenderError, RenderResult};

/// One invocation's template namespace: every partial plus the compiled
/// main template, with the formatting helpers installed.
///
/// Built fresh per request and passed through the pipeline by value, so
/// concurrent requests never observe each other's composition state.
pub struct TemplateSet {
    registry: Handlebars<'static>,
}

impl TemplateSet {
    /// Render the main template against `data`, expanding nested partials
    /// and helper invocations.
    pub fn render<T: Serialize>(&self, data: &T) -> RenderResult<String> {
        Ok(self.registry.render(MAIN_TEMPLATE, data)?)
    }
}

/// Compose a `TemplateSet` from the caller-ordered name list.
///
/// Names are loaded in the caller's order, so the first unresolvable name
/// is the one reported. Partials are registered before the main template;
/// duplicate names overwrite (last writer wins). A list without the
/// reserved main name fails with `NoMainTemplate` instead of producing a
/// namespace that cannot render.
pub fn compose(loader: &TemplateLoader, names: &[String]) -> RenderResult<TemplateSet> {
    let mut sources = Vec::with_capacity(names.len());
    for name in names {
        sources.push(loader.load(name)?);
    }

    let mut registry = Handlebars::new();

    // Partials go in first so every name the main template references is
    // resolvable by the time it can be rendered.
    for source in sources.iter().filter(|s| s.role == TemplateRole::Partial) {
        registry.register_template_string(&source.name, &source.body)?;
    }

    let main = sources
        .iter()
        .find(|s| s.role == TemplateRole::Main)
        .ok_or(RenderError::NoMainTemplate)?;
    registry.register_template_string(&main.name, &main.body)?;

    register_helpers(&mut registry);

    Ok(TemplateSet { registry })
}
