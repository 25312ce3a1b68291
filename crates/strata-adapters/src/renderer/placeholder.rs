//! Literal placeholder substitution.

use strata_core::{
    application::ports::TemplateRenderer, domain::ReplacementMap, error::StrataResult,
};
use tracing::{instrument, trace};

/// Renderer that replaces `{{ key }}` tokens and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    #[instrument(skip_all, fields(tokens = replacements.len()))]
    fn render(&self, template: &str, replacements: &ReplacementMap) -> StrataResult<String> {
        let rendered = replacements.render(template);
        trace!(bytes = rendered.len(), "Stub rendered");
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_case_variants_of_each_key() {
        let map = ReplacementMap::new()
            .with_key("module", "UserProfile")
            .with_key("module_snake", "user_profile");

        let out = PlaceholderRenderer
            .render("{{ module }} {{MODULE_SNAKE}} {{ moduleSnake }}", &map)
            .unwrap();
        assert_eq!(out, "UserProfile user_profile user_profile");
    }

    #[test]
    fn unknown_tokens_stay_literal() {
        let map = ReplacementMap::new().with_key("class", "Post");
        let out = PlaceholderRenderer.render("{{ class }} {{ other }}", &map).unwrap();
        assert_eq!(out, "Post {{ other }}");
    }
}
