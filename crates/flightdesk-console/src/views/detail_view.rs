//! Detail view: a single record with related data and follow-up commands.

use std::collections::BTreeMap;

use serde::Serialize;

use super::Message;

/// A command the user might run next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionSuggestion {
    pub label: String,
    /// Full command line, e.g. `flightdesk orders toggle o-1001`.
    pub command: String,
}

impl ActionSuggestion {
    pub fn new(label: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            command: command.into(),
        }
    }
}

/// Result of show, create, update and toggle commands.
#[derive(Debug, Clone, Serialize)]
pub struct DetailView<T> {
    pub item: T,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Related records keyed by relationship name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub related: BTreeMap<String, serde_json::Value>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<ActionSuggestion>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,
}

/// Builder for [`DetailView`]. Start with [`detail_view`].
#[derive(Debug)]
pub struct DetailViewBuilder<T> {
    view: DetailView<T>,
}

impl<T> DetailViewBuilder<T> {
    pub fn new(item: T) -> Self {
        Self {
            view: DetailView {
                item,
                title: None,
                subtitle: None,
                related: BTreeMap::new(),
                actions: Vec::new(),
                messages: Vec::new(),
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.view.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.view.subtitle = Some(subtitle.into());
        self
    }

    /// Adds a related record. Values that fail to serialize are skipped.
    pub fn related(mut self, name: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(value) = serde_json::to_value(value) {
            self.view.related.insert(name.into(), value);
        }
        self
    }

    pub fn action(mut self, label: impl Into<String>, command: impl Into<String>) -> Self {
        self.view.actions.push(ActionSuggestion::new(label, command));
        self
    }

    /// Appends a status line, e.g. the outcome of the command that
    /// produced this view.
    pub fn message(mut self, message: Message) -> Self {
        self.view.messages.push(message);
        self
    }

    pub fn build(self) -> DetailView<T> {
        self.view
    }
}

/// Starts building a detail view of `item`.
pub fn detail_view<T>(item: T) -> DetailViewBuilder<T> {
    DetailViewBuilder::new(item)
}
