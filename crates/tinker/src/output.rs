//! Output formatting: JSON, YAML, table.
//!
//! Structured formats go through serde. `table` uses `tabled` for list
//! data and falls back to pretty JSON for free-form API payloads.

use std::io::{self, Write};

use tabled::{Table, Tabled, settings::Style};

use crate::cli::OutputFormat;
use crate::error::CliError;

// ── Render dispatchers ───────────────────────────────────────────────

/// Render rows in the chosen format; `table` uses the `Tabled` derive.
pub fn render_list<T>(format: OutputFormat, rows: &[T]) -> Result<String, CliError>
where
    T: serde::Serialize + Tabled,
{
    match format {
        OutputFormat::Table => Ok(render_table(rows)),
        other => render_value(other, rows),
    }
}

/// Render any serde-serializable value in the chosen format.
pub fn render_value<T>(format: OutputFormat, data: &T) -> Result<String, CliError>
where
    T: serde::Serialize + ?Sized,
{
    match format {
        OutputFormat::Json | OutputFormat::Table => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) -> Result<(), CliError> {
    if quiet || output.is_empty() {
        return Ok(());
    }
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}")?;
    Ok(())
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    if rows.is_empty() {
        return String::new();
    }
    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> Result<String, CliError> {
    let rendered = if compact {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    rendered.map_err(|e| CliError::Output {
        message: e.to_string(),
    })
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    serde_yaml::to_string(data)
        .map(|s| s.trim_end().to_owned())
        .map_err(|e| CliError::Output {
            message: e.to_string(),
        })
}
