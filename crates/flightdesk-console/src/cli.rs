//! The `flightdesk` command line.
//!
//! Every resource gets the same action set (`list`, `show`, `create`,
//! `update`, `toggle`, `delete`), dispatched generically over its
//! [`ResourceStore`]. Handlers build a view, the [`Renderer`] turns it into
//! text or JSON, and [`run_with_catalog`] writes the result out.
//!
//! Session scopes apply to every action: a pilot can't show, edit or delete
//! a record outside their scope any more than they can list it.

use std::io::Write;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use flightdesk_query::{is_reserved, Listable, OrderBy, QueryState, Value};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::entities::Resource;
use crate::error::{ConsoleError, Result};
use crate::output::OutputMode;
use crate::render::Renderer;
use crate::session::{Scope, Session};
use crate::store::ResourceStore;
use crate::views::{detail_view, list_view, Dashboard, Message};

#[derive(Debug, Parser)]
#[command(name = "flightdesk")]
#[command(about = "Admin console for drone flight review bookings")]
#[command(version)]
pub struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, env = "FLIGHTDESK_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as this user id (defaults to the configured user)
    #[arg(long = "as", global = true, env = "FLIGHTDESK_USER", value_name = "USER_ID")]
    pub user: Option<String>,

    /// Output format (defaults to the configured one)
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputMode>,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Console accounts
    Users {
        #[command(subcommand)]
        action: Action,
    },
    /// Fleet aircraft
    Drones {
        #[command(subcommand)]
        action: Action,
    },
    /// Pilot profiles
    Pilots {
        #[command(subcommand)]
        action: Action,
    },
    /// Flight review bookings
    Orders {
        #[command(subcommand)]
        action: Action,
    },
    /// Pre-flight site surveys
    Surveys {
        #[command(subcommand)]
        action: Action,
    },
    /// Review packages on sale
    Packages {
        #[command(subcommand)]
        action: Action,
    },
    /// Review addresses
    Addresses {
        #[command(subcommand)]
        action: Action,
    },
    /// Pilot badges
    Badges {
        #[command(subcommand)]
        action: Action,
    },
    /// Totals per resource and paid revenue
    Dashboard,
}

#[derive(Debug, Subcommand)]
pub enum Action {
    /// List one page of records
    List(ListArgs),
    /// Show one record
    Show { id: String },
    /// Add a record from a JSON object
    Create {
        #[arg(long, value_name = "JSON")]
        data: String,
    },
    /// Merge a JSON object into a record
    Update {
        id: String,
        #[arg(long, value_name = "JSON")]
        data: String,
    },
    /// Flip the record's status flag
    Toggle { id: String },
    /// Remove a record
    Delete { id: String },
}

#[derive(Debug, Default, Args)]
pub struct ListArgs {
    /// Case-insensitive text search
    #[arg(short, long)]
    pub search: Option<String>,

    /// Filter value, repeatable (`all` or empty clears it)
    #[arg(short = 'f', long = "filter", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub filters: Vec<(String, String)>,

    /// Sort fields, comma separated; prefix with `-` for descending
    #[arg(long, value_name = "FIELDS", allow_hyphen_values = true)]
    pub sort: Option<String>,

    /// Page number, starting at 1
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Items per page
    #[arg(long)]
    pub size: Option<usize>,

    /// Start from a shared query string, e.g. `q=drag&status=active&page=2`
    #[arg(short, long, value_name = "QUERYSTRING")]
    pub query: Option<String>,
}

fn parse_key_value(s: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing filter key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Builds the query state for a `list` invocation.
///
/// `--query` is decoded strictly and forms the base; the individual flags
/// override it.
pub fn build_state(args: &ListArgs, config: &Config) -> Result<QueryState> {
    let mut state = match &args.query {
        Some(query) => QueryState::parse_query_string(query, config.default_page_size)?,
        None => QueryState::new(config.default_page_size),
    };

    if let Some(text) = &args.search {
        state.search_text = text.clone();
    }
    for (key, value) in &args.filters {
        if is_reserved(key) {
            return Err(ConsoleError::InvalidArgument(format!(
                "'{key}' is reserved and can't be used as a filter"
            )));
        }
        state.filters.insert(key.clone(), value.clone());
    }
    if let Some(sort) = &args.sort {
        let orderings = OrderBy::parse_list(sort);
        if orderings.is_empty() {
            return Err(ConsoleError::InvalidArgument(format!(
                "no sort field in '{sort}'"
            )));
        }
        state.sort = orderings;
    }
    if let Some(page) = args.page {
        if page == 0 {
            return Err(ConsoleError::InvalidArgument(
                "pages start at 1".to_string(),
            ));
        }
        state.page = page;
    }
    if let Some(size) = args.size {
        state.page_size = size;
    }
    if state.page_size == 0 || state.page_size > config.max_page_size {
        return Err(ConsoleError::InvalidArgument(format!(
            "page size must be between 1 and {}",
            config.max_page_size
        )));
    }
    Ok(state)
}

/// Runs `cli` against `catalog`, writing the rendered result to `out`.
pub fn run_with_catalog(catalog: &Catalog, cli: Cli, out: &mut dyn Write) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    let mode = cli.output.unwrap_or(config.output);
    let user = cli.user.as_deref().unwrap_or(&config.default_user);
    let session = Session::resolve(catalog, user)?;
    let renderer = Renderer::new(mode)?;
    tracing::debug!(session = %session, mode = %renderer.mode(), "dispatching");

    let ctx = Context {
        catalog,
        config: &config,
        session: &session,
        renderer: &renderer,
    };
    let text = match cli.command {
        Command::Users { action } => ctx.run(&catalog.users, action)?,
        Command::Drones { action } => ctx.run(&catalog.drones, action)?,
        Command::Pilots { action } => ctx.run(&catalog.pilots, action)?,
        Command::Orders { action } => ctx.run(&catalog.orders, action)?,
        Command::Surveys { action } => ctx.run(&catalog.surveys, action)?,
        Command::Packages { action } => ctx.run(&catalog.packages, action)?,
        Command::Addresses { action } => ctx.run(&catalog.addresses, action)?,
        Command::Badges { action } => ctx.run(&catalog.badges, action)?,
        Command::Dashboard => renderer.dashboard(&Dashboard::build(catalog, &session)?)?,
    };
    out.write_all(text.as_bytes())?;
    Ok(())
}

struct Context<'a> {
    catalog: &'a Catalog,
    config: &'a Config,
    session: &'a Session,
    renderer: &'a Renderer,
}

impl Context<'_> {
    fn run<S: ResourceStore>(&self, store: &S, action: Action) -> Result<String> {
        let scope = S::Item::scope(self.session);
        let scope = scope.as_ref();
        match action {
            Action::List(args) => self.list(store, &args, scope),
            Action::Show { id } => {
                let item = fetch(store, &id, scope)?;
                self.detail(item, None)
            }
            Action::Create { data } => {
                let data = parse_data(&data)?;
                if let Some(scope) = scope {
                    check_scope_field(&data, scope)?;
                }
                let item = store.create(data)?;
                let text = format!("Created {} {}.", S::Item::KIND.singular(), item.id());
                self.detail(item, Some(Message::success(text)))
            }
            Action::Update { id, data } => {
                let current = fetch(store, &id, scope)?;
                let data = parse_data(&data)?;
                if let Some(scope) = scope {
                    if data.get(scope.field).is_some() {
                        check_scope_field(&data, scope)?;
                    }
                }
                let item = store.update(current.id(), data)?;
                let text = format!("Updated {} {}.", S::Item::KIND.singular(), item.id());
                self.detail(item, Some(Message::success(text)))
            }
            Action::Toggle { id } => {
                let current = fetch(store, &id, scope)?;
                let item = store.toggle(current.id())?;
                let text = format!(
                    "{} is now {}.",
                    S::Item::FLAG,
                    if item.flag() { "on" } else { "off" }
                );
                self.detail(item, Some(Message::success(text)))
            }
            Action::Delete { id } => {
                let current = fetch(store, &id, scope)?;
                store.delete(current.id())?;
                self.renderer.messages(&[Message::success(format!(
                    "Deleted {} {}.",
                    S::Item::KIND.singular(),
                    current.id()
                ))])
            }
        }
    }

    fn list<S: ResourceStore>(
        &self,
        store: &S,
        args: &ListArgs,
        scope: Option<&Scope>,
    ) -> Result<String> {
        let state = build_state(args, self.config)?;
        let predicates = S::Item::predicates();
        let page = store.list(&state, scope)?;
        let requested = state.page;
        let out_of_range = page.out_of_range;
        let total = store.list(&QueryState::new(1), scope)?.total_items;

        let kind = S::Item::KIND;
        let mut builder = list_view(kind.as_str(), page)
            .window(self.config.page_window)
            .total_count(total)
            .filter_summary(predicates.summary(&state))
            .query(state.to_query_string());

        if let Some(scope) = scope {
            builder = builder.info(format!("Showing only {kind} where {scope}."));
        }
        for (key, _) in state.set_filters() {
            if predicates.rule_for(key).is_none() {
                builder = builder.warning(format!(
                    "'{key}' is not a {} filter; ignored.",
                    kind.singular()
                ));
            }
        }
        for order in &state.sort {
            if !is_known_field::<S::Item>(&order.field) {
                builder = builder.warning(format!(
                    "'{}' is not a {} field; sort ignored.",
                    order.field,
                    kind.singular()
                ));
            }
        }
        if out_of_range {
            builder = builder.warning(format!("Page {requested} is past the last page."));
        }

        self.renderer.list(&builder.build())
    }

    fn detail<T: Resource>(&self, item: T, message: Option<Message>) -> Result<String> {
        let kind = T::KIND;
        let id = item.id().to_string();
        let related = item.related(self.catalog);
        let subtitle = format!(
            "{} {}, {}: {}",
            kind.singular(),
            id,
            T::FLAG,
            if item.flag() { "yes" } else { "no" }
        );

        let mut builder = detail_view(item)
            .subtitle(subtitle)
            .action(
                format!("toggle {}", T::FLAG),
                format!("flightdesk {kind} toggle {id}"),
            )
            .action("edit", format!("flightdesk {kind} update {id} --data '{{...}}'"))
            .action("delete", format!("flightdesk {kind} delete {id}"));
        for (name, value) in related {
            builder = builder.related(name, value);
        }
        if let Some(message) = message {
            builder = builder.message(message);
        }
        self.renderer.detail(&builder.build())
    }
}

/// Resolves `id`, hiding records outside `scope`.
fn fetch<S: ResourceStore>(store: &S, id: &str, scope: Option<&Scope>) -> Result<S::Item> {
    let item = store.resolve(id)?;
    match scope {
        Some(scope) if !in_scope(&item, scope) => Err(S::not_found_error(item.id())),
        _ => Ok(item),
    }
}

fn in_scope<T: Listable>(item: &T, scope: &Scope) -> bool {
    matches!(item.field_value(scope.field), Value::String(value) if value == scope.value)
}

fn check_scope_field(data: &serde_json::Value, scope: &Scope) -> Result<()> {
    match data.get(scope.field).and_then(serde_json::Value::as_str) {
        Some(value) if value == scope.value => Ok(()),
        _ => Err(ConsoleError::InvalidArgument(format!(
            "this session can only write records with {scope}"
        ))),
    }
}

fn parse_data(data: &str) -> Result<serde_json::Value> {
    serde_json::from_str(data)
        .map_err(|e| ConsoleError::InvalidArgument(format!("--data is not valid JSON: {e}")))
}

fn is_known_field<T: Resource>(field: &str) -> bool {
    let predicates = T::predicates();
    T::COLUMNS.contains(&field)
        || predicates.searchable().iter().any(|f| f == field)
        || predicates.rule_for(field).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> ListArgs {
        let mut full = vec!["flightdesk", "drones", "list"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Command::Drones {
                action: Action::List(args),
            } => args,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn key_value_parser() {
        assert_eq!(
            parse_key_value("status=active").unwrap(),
            ("status".to_string(), "active".to_string())
        );
        assert_eq!(
            parse_key_value("note=a=b").unwrap(),
            ("note".to_string(), "a=b".to_string())
        );
        assert!(parse_key_value("status").is_err());
        assert!(parse_key_value("=x").is_err());
    }

    #[test]
    fn flags_override_query_string() {
        let args = args(&["--query", "q=drag&status=active&page=3", "-p", "2", "-s", "owl"]);
        let state = build_state(&args, &Config::default()).unwrap();
        assert_eq!(state.search_text, "owl");
        assert_eq!(state.filters["status"], "active");
        assert_eq!(state.page, 2);
        assert_eq!(state.page_size, Config::default().default_page_size);
    }

    #[test]
    fn descending_sort_flag() {
        let args = args(&["--sort", "-flight_hours,nickname"]);
        let state = build_state(&args, &Config::default()).unwrap();
        assert_eq!(
            state.sort,
            vec![OrderBy::desc("flight_hours"), OrderBy::asc("nickname")]
        );
    }

    #[test]
    fn rejects_bad_list_arguments() {
        let config = Config::default();
        for argv in [
            &["--size", "0"][..],
            &["--size", "1000"],
            &["--page", "0"],
            &["-f", "page=2"],
            &["--sort", ","],
            &["--query", "page=abc"],
        ] {
            assert!(build_state(&args(argv), &config).is_err(), "{argv:?}");
        }
    }

    #[test]
    fn scope_membership() {
        let catalog = Catalog::demo();
        let scope = Scope::new("owner_pilot_id", "p-01");
        let mine = catalog.drones.resolve("d-01").unwrap();
        let theirs = catalog.drones.resolve("d-02").unwrap();
        let unowned = catalog.drones.resolve("d-05").unwrap();
        assert!(in_scope(&mine, &scope));
        assert!(!in_scope(&theirs, &scope));
        assert!(!in_scope(&unowned, &scope));
    }

    #[test]
    fn scoped_fetch_hides_foreign_records() {
        let catalog = Catalog::demo();
        let scope = Scope::new("pilot_id", "p-01");
        assert!(fetch(&catalog.orders, "o-1007", Some(&scope)).is_ok());
        let err = fetch(&catalog.orders, "o-1001", Some(&scope)).unwrap_err();
        assert!(matches!(err, ConsoleError::NotFound { .. }));
    }

    #[test]
    fn scope_field_check() {
        let scope = Scope::new("pilot_id", "p-01");
        assert!(check_scope_field(&serde_json::json!({"pilot_id": "p-01"}), &scope).is_ok());
        assert!(check_scope_field(&serde_json::json!({"pilot_id": "p-02"}), &scope).is_err());
        assert!(check_scope_field(&serde_json::json!({}), &scope).is_err());
    }
}
