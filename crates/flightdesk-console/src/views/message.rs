//! Status messages attached to views.

use serde::{Deserialize, Serialize};

/// Severity of a [`Message`]; picks its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl std::fmt::Display for MessageLevel {
    /// The level name doubles as the theme style name.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MessageLevel::Info => "info",
            MessageLevel::Success => "success",
            MessageLevel::Warning => "warning",
            MessageLevel::Error => "error",
        };
        f.write_str(name)
    }
}

/// A status line shown after a view's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub level: MessageLevel,
    pub text: String,
}

macro_rules! level_shortcuts {
    ($($name:ident => $level:ident),+ $(,)?) => {
        $(
            pub fn $name(text: impl Into<String>) -> Self {
                Message { level: MessageLevel::$level, text: text.into() }
            }
        )+
    };
}

impl Message {
    level_shortcuts! {
        info => Info,
        success => Success,
        warning => Warning,
        error => Error,
    }
}
