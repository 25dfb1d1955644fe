//! CLI commands - terminal front end over the core services
//!
//! Every command checks the route guard for the screen it stands in for,
//! runs through [`execute_command`](crate::utils::command_helpers::execute_command)
//! and returns the text to print.

mod auth;
mod donors;
mod navigation;
mod organization;
mod projects;
mod sectors;
mod settings;
mod transactions;
mod users;

use baitulmal_core::navigation::{resolve, Route};
use baitulmal_core::{DataTable, TableView};
use baitulmal_domain::{BaitulMalError, Result, UserRole};
use serde::Serialize;

use crate::cli::{Command, ListArgs};
use crate::context::AppContext;

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const fn from_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Run one parsed command
pub async fn run(ctx: &AppContext, command: Command, format: OutputFormat) -> Result<String> {
    match command {
        Command::Login { email, password } => auth::login(ctx, &email, &password, format).await,
        Command::Logout => auth::logout(ctx).await,
        Command::Me => auth::me(ctx, format).await,
        Command::Nav => navigation::links(ctx, format),
        Command::Organization(command) => organization::run(ctx, command, format).await,
        Command::Users(command) => users::run(ctx, command, format).await,
        Command::Sectors(command) => sectors::run(ctx, command, format).await,
        Command::Projects(command) => projects::run(ctx, command, format).await,
        Command::Donors(command) => donors::run(ctx, command, format).await,
        Command::Transactions(command) => transactions::run(ctx, command, format).await,
        Command::Settings(command) => settings::run(ctx, command, format),
    }
}

/// Route guard for a command
///
/// Returns the viewer's role when `route` is reachable as-is.
fn authorize(ctx: &AppContext, route: Route) -> Result<Option<UserRole>> {
    let role = ctx.viewer_role()?;
    match resolve(route.clone(), role) {
        resolved if resolved == route => Ok(role),
        Route::Login => {
            Err(BaitulMalError::Unauthorized("not signed in; run `baitulmal login`".into()))
        }
        _ => {
            let role = role.map(|role| role.to_string()).unwrap_or_default();
            Err(BaitulMalError::InvalidInput(format!("{route} is not available to {role}")))
        }
    }
}

/// Apply paging, sorting, search and column choices to a fresh table
fn prepare_table<T>(mut table: DataTable<T>, args: &ListArgs) -> Result<DataTable<T>> {
    if let Some(size) = args.page_size {
        table.set_page_size(size);
    }
    if let Some(term) = &args.search {
        table.apply_search(term);
    }
    if let Some(field) = &args.sort {
        if !table.is_sortable(field) {
            return Err(BaitulMalError::InvalidInput(format!("cannot sort by {field}")));
        }
        if table.params().sort_by_field.as_deref() != Some(field.as_str()) {
            table.toggle_sort(field);
        }
    }
    if args.include_deleted && !table.set_include_deleted(true) {
        return Err(BaitulMalError::InvalidInput(
            "--include-deleted is only available to admins".into(),
        ));
    }
    for name in &args.hidden {
        let id = table.columns().iter().map(|column| column.id()).find(|id| id == name);
        match id {
            Some(id) => table.set_column_visible(id, false),
            None => return Err(BaitulMalError::InvalidInput(format!("unknown column {name}"))),
        }
    }
    table.go_to_page(args.page.saturating_sub(1));
    Ok(table)
}

fn render<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce(&T) -> String,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text(value)),
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|e| BaitulMalError::Internal(format!("failed to encode output: {e}"))),
    }
}

fn render_table(format: OutputFormat, view: &TableView) -> Result<String> {
    render(format, view, ToString::to_string)
}
