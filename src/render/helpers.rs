//! Custom formatting helpers available inside templates.

use handlebars::{handlebars_helper, Handlebars};
use serde_json::Value;

/// Call-to-action label for the closed set of content types a card can
/// point at. Anything outside the known tags falls through to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CallToAction {
    Video,
    Pdf,
    Link,
    Other,
}

impl CallToAction {
    fn from_tag(tag: &str) -> Self {
        match tag {
            "VIDEO" => Self::Video,
            "PDF" => Self::Pdf,
            "LINK" => Self::Link,
            _ => Self::Other,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Video => "Watch video",
            Self::Pdf => "Download PDF",
            Self::Link => "Visit website",
            Self::Other => "Read more",
        }
    }
}

fn card_links_helper(
    h: &handlebars::Helper,
    _: &Handlebars,
    _: &handlebars::Context,
    _: &mut handlebars::RenderContext,
    out: &mut dyn handlebars::Output,
) -> handlebars::HelperResult {
    let tag = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
    out.write(CallToAction::from_tag(tag).label())?;
    Ok(())
}

// Value-returning form so it composes as a subexpression, e.g.
// {{#each (filter items "type" "PDF")}}.
handlebars_helper!(filter: |items: Json, key: str, value: Json| {
    match items.as_array() {
        // Order-preserving subsequence; elements missing the key compare
        // unequal and are excluded.
        Some(elements) => Value::Array(
            elements
                .iter()
                .filter(|element| element.get(key) == Some(value))
                .cloned()
                .collect(),
        ),
        None => Value::Array(Vec::new()),
    }
});

/// Install the formatting helpers into a template registry.
///
/// Re-registering a name overwrites the previous definition, so calling
/// this more than once on the same registry is safe.
pub fn register_helpers(registry: &mut Handlebars) {
    registry.register_helper("cardLinks", Box::new(card_links_helper));
    registry.register_helper("filter", Box::new(filter));
}
