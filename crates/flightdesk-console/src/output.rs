//! Output mode control.

use serde::{Deserialize, Serialize};

/// How command output is rendered.
///
/// This is the user-facing enum for the `--output` flag and the `output`
/// config key.
///
/// - `Auto`: styled text on a color terminal, plain text otherwise
/// - `Term`: always styled text
/// - `Text`: plain text
/// - `Json`: the view data serialized as JSON, skipping templates
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Auto,
    Term,
    Text,
    Json,
}

impl OutputMode {
    /// Returns true if view data is serialized instead of rendered.
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputMode::Json)
    }

    /// Resolves `Auto` to `Term` or `Text` from stdout's color support.
    ///
    /// Other modes are returned unchanged.
    pub fn resolve_auto(&self) -> OutputMode {
        match self {
            OutputMode::Auto => {
                if console::Term::stdout().features().colors_supported() {
                    OutputMode::Term
                } else {
                    OutputMode::Text
                }
            }
            other => *other,
        }
    }

    /// Whether rendered text should carry ANSI styles.
    pub fn should_use_color(&self) -> bool {
        matches!(self.resolve_auto(), OutputMode::Term)
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputMode::Auto => "auto",
            OutputMode::Term => "term",
            OutputMode::Text => "text",
            OutputMode::Json => "json",
        };
        write!(f, "{name}")
    }
}
