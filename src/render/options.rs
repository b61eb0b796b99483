//! Rendering options and configuration.

/// Options for rendering document content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Render the title page ahead of the body
    pub include_title_page: bool,

    /// Append one extra newline after the rendered text
    pub trailing_newline: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable title page rendering.
    pub fn with_title_page(mut self, include: bool) -> Self {
        self.include_title_page = include;
        self
    }

    /// Enable or disable the extra trailing newline.
    pub fn with_trailing_newline(mut self, newline: bool) -> Self {
        self.trailing_newline = newline;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_title_page: true,
            trailing_newline: false,
        }
    }
}
