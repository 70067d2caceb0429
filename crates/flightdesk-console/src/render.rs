//! Turns views into terminal text or JSON.
//!
//! Text output goes through `minijinja` templates with a `style` filter
//! backed by a [`Theme`]. Tables are laid out here, with width-aware padding
//! from `console`, and handed to the templates as finished lines.

use console::{measure_text_width, pad_str, Alignment};
use flightdesk_query::{PageLink, Value};
use minijinja::{context, Environment};
use serde::Serialize;

use crate::entities::Resource;
use crate::error::Result;
use crate::output::OutputMode;
use crate::theme::Theme;
use crate::views::{Dashboard, DetailView, ListView, Message};

/// Cells wider than this are truncated with an ellipsis.
pub const MAX_COLUMN_WIDTH: usize = 32;

const LIST_TEMPLATE: &str = r#"{{ title | style("title") }}
{% if filter_summary %}
{{ ("filtered by " ~ filter_summary) | style("muted") }}
{% endif %}
{% if intro %}
{{ intro }}
{% endif %}

{% if no_results %}
{{ "No results found." | style("muted") }}
{% elif not rows %}
{{ ("No items on page " ~ current_page ~ " of " ~ total_pages ~ ".") | style("muted") }}
{% else %}
{{ header | style("header") }}
{% for row in rows %}
{{ row }}
{% endfor %}
{% endif %}
{% if showing %}

{{ ("Showing " ~ showing[0] ~ "-" ~ showing[1] ~ " of " ~ total_items) | style("muted") }}
{% endif %}
{% if window | length > 1 %}
{% for link in window %}{% if link.current %}{{ ("[" ~ link.label ~ "]") | style("current") }}{% else %}{{ link.label | style("page") }}{% endif %}{% if not loop.last %} {% endif %}{% endfor %}{{ "" | nl }}
{% endif %}
{% if query %}
{{ "query: " | style("muted") }}{{ query }}
{% endif %}
{% for message in messages %}
{{ message.text | style(message.level) }}
{% endfor %}
"#;

const DETAIL_TEMPLATE: &str = r##"{{ title | style("title") }}
{% if subtitle %}
{{ subtitle | style("muted") }}
{% endif %}

{% for field in fields %}
{{ field.name | col(key_width) | style("label") }}  {{ field.value }}
{% endfor %}
{% if related %}

{{ "Related" | style("header") }}
{% for field in related %}
{{ field.name | col(key_width) | style("label") }}  {{ field.value }}
{% endfor %}
{% endif %}
{% if actions %}

{{ "Next" | style("header") }}
{% for action in actions %}
  {{ action.command | style("command") }}  {{ ("# " ~ action.label) | style("muted") }}
{% endfor %}
{% endif %}
{% for message in messages %}
{{ message.text | style(message.level) }}
{% endfor %}
"##;

const DASHBOARD_TEMPLATE: &str = r#"{{ "Dashboard" | style("title") }}
{{ ("signed in as " ~ session.name ~ " (" ~ session.role ~ ")") | style("muted") }}

{{ header | style("header") }}
{% for row in rows %}
{{ row }}
{% endfor %}

{{ "Orders by status" | style("header") }}
{% for entry in order_statuses %}
{{ entry.status | col(status_width) | style("label") }}  {{ entry.count }}
{% endfor %}

{{ "Paid revenue" | col(status_width) | style("label") }}  {{ revenue }}
{% for message in messages %}
{{ message.text | style(message.level) }}
{% endfor %}
"#;

const MESSAGES_TEMPLATE: &str = r#"{% for message in messages %}
{{ message.text | style(message.level) }}
{% endfor %}
"#;

/// Renders views in one output mode.
pub struct Renderer {
    env: Environment<'static>,
    mode: OutputMode,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer").field("mode", &self.mode).finish()
    }
}

impl Renderer {
    /// A renderer using [`Theme::console`].
    pub fn new(mode: OutputMode) -> Result<Self> {
        Self::with_theme(mode, Theme::console())
    }

    pub fn with_theme(mode: OutputMode, theme: Theme) -> Result<Self> {
        let mode = mode.resolve_auto();
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        register_filters(&mut env, theme, mode.should_use_color());
        env.add_template("list", LIST_TEMPLATE)?;
        env.add_template("detail", DETAIL_TEMPLATE)?;
        env.add_template("dashboard", DASHBOARD_TEMPLATE)?;
        env.add_template("messages", MESSAGES_TEMPLATE)?;
        Ok(Self { env, mode })
    }

    /// The resolved output mode; never `Auto`.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn list<T: Resource>(&self, view: &ListView<T>) -> Result<String> {
        if self.mode.is_structured() {
            return to_json(view);
        }

        let table = Table::of(T::COLUMNS, &view.items);
        let (header, rows) = table.lines();
        let pagination = &view.pagination;
        let window: Vec<WindowLink> = pagination
            .window
            .iter()
            .map(|link| WindowLink::new(*link, pagination.current_page))
            .collect();
        let title = match view.total_count {
            Some(total) if total != pagination.total_items => format!(
                "{} ({} of {})",
                capitalize(&view.resource),
                pagination.total_items,
                total
            ),
            _ => format!("{} ({})", capitalize(&view.resource), pagination.total_items),
        };

        self.render(
            "list",
            context! {
                title => title,
                intro => &view.intro,
                filter_summary => &view.filter_summary,
                no_results => view.no_results(),
                header => header,
                rows => rows,
                showing => pagination.showing,
                total_items => pagination.total_items,
                current_page => pagination.current_page,
                total_pages => pagination.total_pages,
                window => window,
                query => &view.query,
                messages => &view.messages,
            },
        )
    }

    pub fn detail<T: Resource>(&self, view: &DetailView<T>) -> Result<String> {
        if self.mode.is_structured() {
            return to_json(view);
        }

        let fields = detail_fields::<T>(&serde_json::to_value(&view.item)?);
        let related: Vec<Field> = view
            .related
            .iter()
            .map(|(name, value)| Field {
                name: name.clone(),
                value: display_json(value),
            })
            .collect();
        let key_width = fields
            .iter()
            .chain(related.iter())
            .map(|f| measure_text_width(&f.name))
            .max()
            .unwrap_or(0);
        let title = view.title.clone().unwrap_or_else(|| view.item.label());

        self.render(
            "detail",
            context! {
                title => title,
                subtitle => &view.subtitle,
                fields => fields,
                related => related,
                key_width => key_width,
                actions => &view.actions,
                messages => &view.messages,
            },
        )
    }

    pub fn dashboard(&self, view: &Dashboard) -> Result<String> {
        if self.mode.is_structured() {
            return to_json(view);
        }

        let table = Table {
            headers: vec!["resource".into(), "total".into(), "flag".into(), "on".into()],
            rows: view
                .tiles
                .iter()
                .map(|tile| {
                    vec![
                        tile.resource.to_string(),
                        tile.total.to_string(),
                        tile.flag.to_string(),
                        tile.flagged.to_string(),
                    ]
                })
                .collect(),
            right: vec![false, true, false, true],
        };
        let (header, rows) = table.lines();
        let status_width = view
            .order_statuses
            .iter()
            .map(|s| measure_text_width(s.status))
            .chain(std::iter::once(measure_text_width("Paid revenue")))
            .max()
            .unwrap_or(0);

        self.render(
            "dashboard",
            context! {
                session => &view.session,
                header => header,
                rows => rows,
                order_statuses => &view.order_statuses,
                status_width => status_width,
                revenue => format_cents(view.paid_revenue),
                messages => &view.messages,
            },
        )
    }

    /// Renders bare status messages, e.g. after a delete.
    pub fn messages(&self, messages: &[Message]) -> Result<String> {
        if self.mode.is_structured() {
            return to_json(&serde_json::json!({ "messages": messages }));
        }
        self.render("messages", context! { messages => messages })
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String> {
        let template = self.env.get_template(name)?;
        Ok(template.render(ctx)?)
    }
}

fn register_filters(env: &mut Environment<'static>, theme: Theme, use_color: bool) {
    env.add_filter(
        "style",
        move |value: minijinja::Value, name: String| -> String {
            theme.apply(&name, &value.to_string(), use_color)
        },
    );

    // {{ value | col(width) }} pads or truncates to a display width.
    env.add_filter("col", |value: minijinja::Value, width: usize| -> String {
        pad_str(&value.to_string(), width, Alignment::Left, Some("…")).into_owned()
    });

    env.add_filter("nl", |value: minijinja::Value| -> String {
        format!("{value}\n")
    });
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

#[derive(Debug, Serialize)]
struct Field {
    name: String,
    value: String,
}

#[derive(Debug, Serialize)]
struct WindowLink {
    label: String,
    current: bool,
}

impl WindowLink {
    fn new(link: PageLink, current_page: usize) -> Self {
        Self {
            label: link.to_string(),
            current: link.page() == Some(current_page),
        }
    }
}

/// Column-aligned text table.
#[derive(Debug)]
struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    /// Right-align flags per column.
    right: Vec<bool>,
}

impl Table {
    /// Lays out `items` under `columns`. Numeric columns align right.
    fn of<T: Resource>(columns: &[&str], items: &[T]) -> Self {
        let mut right = vec![false; columns.len()];
        let rows: Vec<Vec<String>> = items
            .iter()
            .map(|item| {
                columns
                    .iter()
                    .enumerate()
                    .map(|(i, column)| {
                        let value = item.field_value(column);
                        if matches!(value, Value::Number(_)) {
                            right[i] = true;
                        }
                        display_value(&value)
                    })
                    .collect()
            })
            .collect();
        Self {
            headers: columns.iter().map(|c| c.to_string()).collect(),
            rows,
            right,
        }
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| measure_text_width(cell))
                    .chain(std::iter::once(measure_text_width(header)))
                    .max()
                    .unwrap_or(0)
                    .min(MAX_COLUMN_WIDTH)
            })
            .collect()
    }

    fn format_row(&self, cells: &[String], widths: &[usize]) -> String {
        let line = cells
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, width))| {
                let align = if self.right.get(i).copied().unwrap_or(false) {
                    Alignment::Right
                } else {
                    Alignment::Left
                };
                pad_str(cell, *width, align, Some("…")).into_owned()
            })
            .collect::<Vec<_>>()
            .join("  ");
        line.trim_end().to_string()
    }

    /// Header line and body lines.
    fn lines(&self) -> (String, Vec<String>) {
        let widths = self.widths();
        let header = self.format_row(&self.headers, &widths);
        let rows = self
            .rows
            .iter()
            .map(|row| self.format_row(row, &widths))
            .collect();
        (header, rows)
    }
}

/// Fields of a serialized item: `id` first, then the table columns, then
/// everything else alphabetically.
fn detail_fields<T: Resource>(item: &serde_json::Value) -> Vec<Field> {
    let Some(object) = item.as_object() else {
        return vec![Field {
            name: "value".to_string(),
            value: display_json(item),
        }];
    };

    let mut names: Vec<&str> = Vec::with_capacity(object.len());
    for name in std::iter::once("id").chain(T::COLUMNS.iter().copied()) {
        if object.contains_key(name) && !names.contains(&name) {
            names.push(name);
        }
    }
    let mut rest: Vec<&str> = object
        .keys()
        .map(String::as_str)
        .filter(|key| !names.contains(key))
        .collect();
    rest.sort_unstable();
    names.extend(rest);

    names
        .into_iter()
        .map(|name| Field {
            name: name.to_string(),
            value: object.get(name).map(display_json).unwrap_or_default(),
        })
        .collect()
}

/// Text for a table cell.
pub fn display_value(value: &Value<'_>) -> String {
    match value {
        Value::String(s) => s.to_string(),
        Value::Number(flightdesk_query::Number::I64(n)) => n.to_string(),
        Value::Number(flightdesk_query::Number::U64(n)) => n.to_string(),
        Value::Number(flightdesk_query::Number::F64(n)) => n.to_string(),
        Value::Bool(true) => "yes".to_string(),
        Value::Bool(false) => "no".to_string(),
        Value::None => "-".to_string(),
    }
}

/// Text for a detail field.
pub fn display_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "-".to_string(),
        serde_json::Value::Bool(true) => "yes".to_string(),
        serde_json::Value::Bool(false) => "no".to_string(),
        serde_json::Value::String(s) if s.is_empty() => "-".to_string(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// `12345` cents as `123.45`.
pub fn format_cents(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
