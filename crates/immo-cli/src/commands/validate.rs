//! Validate command implementation.

use anyhow::Result;
use immo_core::{Severity, Validate, ValidationIssue};
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{print_json, print_output, print_success};
use crate::store::load_for_read;

#[derive(Debug, Serialize, Tabled)]
struct IssueRow {
    #[tabled(rename = "Severity")]
    severity: String,
    #[tabled(rename = "Record")]
    record: String,
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Message")]
    message: String,
}

impl From<&ValidationIssue> for IssueRow {
    fn from(issue: &ValidationIssue) -> Self {
        Self {
            severity: match issue.severity {
                Severity::Error => "error".to_string(),
                Severity::Warning => "warning".to_string(),
            },
            record: issue.record_id.clone().unwrap_or_default(),
            field: issue.field.clone(),
            message: issue.message.clone(),
        }
    }
}

/// Executes the validate command. Fails when any error-level issue is found.
pub fn execute(ctx: &Context) -> Result<()> {
    let (dataset, source) = load_for_read(&ctx.config, ctx.strict)?;
    let issues = dataset.validate();
    let errors = issues.iter().filter(|i| i.is_error()).count();

    match ctx.format {
        OutputFormat::Json => print_json(&issues)?,
        OutputFormat::Table if issues.is_empty() => {
            ctx.report_source(source);
            if !ctx.quiet {
                print_success(&format!("{} properties, no issues found", dataset.len()));
            }
        }
        format => {
            if format == OutputFormat::Table {
                ctx.report_source(source);
            }
            let rows: Vec<IssueRow> = issues.iter().map(IssueRow::from).collect();
            print_output(&rows, format)?;
        }
    }

    if errors > 0 {
        return Err(CliError::ValidationFailed { errors }.into());
    }
    Ok(())
}
