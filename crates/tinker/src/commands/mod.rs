//! Command dispatch: bridges CLI args -> routing / API calls -> output formatting.

pub mod config_cmd;
pub mod resources;
pub mod routes;

use tinker_core::RouteTable;

use crate::cli::{Command, GlobalOpts};
use crate::config::build_client;
use crate::error::CliError;

/// Dispatch a command that needs the route table and/or the API client.
///
/// The client is built lazily so pure routing commands never touch config.
pub async fn dispatch(
    cmd: Command,
    table: &RouteTable,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Routes => routes::list(table, global),
        Command::Resolve { path } => routes::resolve(table, &path, global),
        Command::Link { view, id } => routes::link(table, &view, id.as_deref(), global),
        Command::Open { path } => {
            let client = build_client(global)?;
            resources::open(&client, table, &path, global).await
        }
        Command::Sensors(args) => resources::sensors(&build_client(global)?, args, global).await,
        Command::Spaces(args) => resources::spaces(&build_client(global)?, args, global).await,
        Command::Query(args) => resources::query(&build_client(global)?, args, global).await,
        Command::Config(args) => config_cmd::handle(args, global),
        // Completions are handled before dispatch
        Command::Completions(_) => Ok(()),
    }
}
