//! Route table command handlers.

use serde::Serialize;
use tabled::Tabled;

use tinker_core::{Route, RouteTable, ViewId};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Serialize, Tabled)]
struct RouteRow {
    #[tabled(rename = "Pattern")]
    pattern: String,
    #[tabled(rename = "View")]
    view: String,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Params")]
    params: String,
}

impl From<&Route> for RouteRow {
    fn from(route: &Route) -> Self {
        Self {
            pattern: route.pattern().to_owned(),
            view: route.view().to_string(),
            name: route.view().route_name(),
            params: route.param_names().join(", "),
        }
    }
}

pub fn list(table: &RouteTable, global: &GlobalOpts) -> Result<(), CliError> {
    let rows: Vec<RouteRow> = table.iter().map(RouteRow::from).collect();
    let out = output::render_list(global.output, &rows)?;
    output::print_output(&out, global.quiet)
}

pub fn resolve(table: &RouteTable, path: &str, global: &GlobalOpts) -> Result<(), CliError> {
    let matched = table.resolve(path)?;
    let out = output::render_value(global.output, &matched)?;
    output::print_output(&out, global.quiet)
}

#[derive(Serialize)]
struct Link {
    view: ViewId,
    path: String,
}

/// Reverse-route a view by its route name.
pub fn link(
    table: &RouteTable,
    name: &str,
    id: Option<&str>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let view = ViewId::from_route_name(name).ok_or_else(|| {
        let known: Vec<&str> = ViewId::ALL.into_iter().map(ViewId::route_name).collect();
        CliError::Validation {
            field: "view".into(),
            reason: format!("unknown route name '{name}', expected one of {}", known.join(", ")),
        }
    })?;

    let params: Vec<(&str, &str)> = match (view.is_detail(), id) {
        (true, Some(id)) => vec![("id", id)],
        (false, None) => Vec::new(),
        (true, None) => {
            return Err(CliError::Validation {
                field: "--id".into(),
                reason: format!("the {name} view needs an --id"),
            });
        }
        (false, Some(_)) => {
            return Err(CliError::Validation {
                field: "--id".into(),
                reason: format!("the {name} view takes no --id"),
            });
        }
    };

    let path = table.path_for(view, &params)?;
    let out = output::render_value(global.output, &Link { view, path })?;
    output::print_output(&out, global.quiet)
}
