// ABOUTME: Page shell for the big-deck application
// ABOUTME: Interpolates joined slide fragments into an HTML page template

use crate::errors::{DeckError, Result};
use crate::slide::escape_html;

/// Placeholder replaced by the joined slide fragments.
pub const SLIDES_PLACEHOLDER: &str = "<%= slides %>";

/// Placeholder replaced by the escaped page title.
pub const TITLE_PLACEHOLDER: &str = "<%- title %>";

pub const DEFAULT_TEMPLATE: &str = "<!DOCTYPE html>
<html lang=\"en\">
<head>
<meta charset=\"UTF-8\">
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
<title><%- title %></title>
</head>
<body>
<%= slides %>
</body>
</html>
";

/// An HTML page wrapping the rendered slides.
#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub template: String,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            title: "Presentation".to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Substitute the slides (raw) and the title (escaped) into the template.
    pub fn render(&self, slides_html: &str) -> Result<String> {
        if !self.template.contains(SLIDES_PLACEHOLDER) {
            return Err(DeckError::TemplateError(format!(
                "template has no {} placeholder",
                SLIDES_PLACEHOLDER
            )));
        }

        // Title first, so a title can never inject a slides placeholder.
        Ok(self
            .template
            .replace(TITLE_PLACEHOLDER, &escape_html(&self.title))
            .replace(SLIDES_PLACEHOLDER, slides_html))
    }
}
