//! KPIs command implementation.

use anyhow::Result;
use immo_analytics::PortfolioKpis;

use super::Context;
use crate::cli::OutputFormat;
use crate::output::{print_single, print_table, KeyValue};
use crate::store::load_for_read;

/// The five KPIs as display rows.
pub fn kpi_rows(kpis: &PortfolioKpis) -> Vec<KeyValue> {
    vec![
        KeyValue::new("Properties", kpis.total_properties.to_string()),
        KeyValue::from_eur("Total value", kpis.total_value),
        KeyValue::from_eur("Monthly income", kpis.monthly_income),
        KeyValue::from_percent("Average net yield", kpis.average_net_yield),
        KeyValue::from_eur("Projected annual income", kpis.projected_annual_income),
    ]
}

/// Executes the kpis command.
pub fn execute(ctx: &Context) -> Result<()> {
    let (dataset, source) = load_for_read(&ctx.config, ctx.strict)?;
    let kpis = PortfolioKpis::calculate(dataset.properties(), &ctx.config.analytics);

    match ctx.format {
        OutputFormat::Table => {
            ctx.report_source(source);
            print_table(&kpi_rows(&kpis))?;
        }
        OutputFormat::Json | OutputFormat::Csv => print_single(&kpis, ctx.format)?,
    }
    Ok(())
}
