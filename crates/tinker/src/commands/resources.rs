//! Sensor, space and channel-query command handlers.
//!
//! Every handler builds one `ResourceOperation`; `--dry-run` prints the
//! expanded request instead of sending it.

use serde::Serialize;
use serde_json::Value;

use tinker_api::{ApiClient, HttpRequestSpec, ResourceOperation};
use tinker_core::{RouteMatch, RouteParams, RouteTable, ViewId};

use crate::cli::{GlobalOpts, QueryArgs, SensorsArgs, SensorsCommand, SpacesArgs, SpacesCommand};
use crate::error::CliError;
use crate::output;

// ── Shared ──────────────────────────────────────────────────────────

/// Either the request that would be sent, or the body that came back.
enum Outcome {
    Planned(HttpRequestSpec),
    Fetched(Value),
}

async fn perform(
    client: &ApiClient,
    op: &ResourceOperation,
    global: &GlobalOpts,
) -> Result<Outcome, CliError> {
    if global.dry_run {
        return Ok(Outcome::Planned(client.request_spec(op)?));
    }
    Ok(Outcome::Fetched(client.execute(op).await?))
}

async fn run(
    client: &ApiClient,
    op: &ResourceOperation,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let out = match perform(client, op, global).await? {
        Outcome::Planned(spec) => output::render_value(global.output, &spec)?,
        Outcome::Fetched(body) => output::render_value(global.output, &body)?,
    };
    output::print_output(&out, global.quiet)
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn sensors(
    client: &ApiClient,
    args: SensorsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let op = match args.command {
        SensorsCommand::List => ResourceOperation::ListSensors,
        SensorsCommand::Get { id } => ResourceOperation::GetSensor { sensor_id: id },
    };
    run(client, &op, global).await
}

pub async fn spaces(
    client: &ApiClient,
    args: SpacesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let op = match args.command {
        SpacesCommand::List => ResourceOperation::ListSpaces,
        SpacesCommand::Get { id } => ResourceOperation::GetSpace { space_id: id },
    };
    run(client, &op, global).await
}

pub async fn query(client: &ApiClient, args: QueryArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let op = ResourceOperation::QuerySensorChannel {
        sensor_id: args.sensor_id,
        channel_id: args.channel,
        start_date: args.start,
        end_date: args.end,
    };
    run(client, &op, global).await
}

// ── Open: navigate, then load what the view shows ───────────────────

/// The fetch a view performs on activation, if any.
fn operation_for(matched: &RouteMatch) -> Option<ResourceOperation> {
    let id = || matched.params.get("id").unwrap_or_default().to_owned();
    match matched.view {
        ViewId::Dashboard => None,
        ViewId::SensorList => Some(ResourceOperation::ListSensors),
        ViewId::SensorDetail => Some(ResourceOperation::get_sensor(id())),
        ViewId::SpaceList => Some(ResourceOperation::ListSpaces),
        ViewId::SpaceDetail => Some(ResourceOperation::get_space(id())),
    }
}

#[derive(Serialize)]
struct OpenedView {
    view: ViewId,
    params: RouteParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    request: Option<HttpRequestSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

pub async fn open(
    client: &ApiClient,
    table: &RouteTable,
    path: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let matched = table.resolve(path)?;
    tracing::info!(path, view = %matched.view, "navigating");

    let (request, data) = match operation_for(&matched) {
        None => (None, None),
        Some(op) => match perform(client, &op, global).await? {
            Outcome::Planned(spec) => (Some(spec), None),
            Outcome::Fetched(body) => (None, Some(body)),
        },
    };

    let opened = OpenedView {
        view: matched.view,
        params: matched.params,
        request,
        data,
    };
    let out = output::render_value(global.output, &opened)?;
    output::print_output(&out, global.quiet)
}
