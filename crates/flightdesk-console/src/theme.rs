//! Named terminal styles used by the templates.

use std::collections::HashMap;

use console::Style;

/// A set of named styles.
///
/// Templates refer to styles by name through the `style` filter. Unknown
/// names leave the text unstyled.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a named style.
    pub fn add(mut self, name: impl Into<String>, style: Style) -> Self {
        self.styles.insert(name.into(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Styles `text` with `name`, or returns it as-is when `use_color` is off.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style
                .clone()
                .force_styling(true)
                .apply_to(text)
                .to_string(),
            _ => text.to_string(),
        }
    }

    /// The console's default palette.
    pub fn console() -> Self {
        Self::new()
            .add("title", Style::new().bold().cyan())
            .add("header", Style::new().bold().underlined())
            .add("label", Style::new().yellow())
            .add("muted", Style::new().dim())
            .add("page", Style::new())
            .add("current", Style::new().bold().reverse())
            .add("command", Style::new().green())
            .add("on", Style::new().green())
            .add("off", Style::new().red())
            .add("info", Style::new().blue())
            .add("success", Style::new().green().bold())
            .add("warning", Style::new().yellow().bold())
            .add("error", Style::new().red().bold())
    }
}
