//! Dashboard command implementation.
//!
//! Renders every panel of the portfolio dashboard for the stored dataset.

use anyhow::Result;
use clap::Args;
use immo_analytics::{AnalyticsConfig, DashboardSnapshot};
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::cli::OutputFormat;
use crate::commands::kpis::kpi_rows;
use crate::output::{format_eur, format_pct, print_csv, print_header, print_json, print_table};
use crate::store::load_for_read;

/// Width of the text bars, in characters, at 100 %.
const BAR_WIDTH: usize = 20;

/// Arguments for the dashboard command.
#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Only show properties whose name, type, address, city, postal code or
    /// country contains this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Number of cities in the geography breakdown
    #[arg(long)]
    pub top: Option<usize>,
}

#[derive(Debug, Serialize, Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: usize,
    #[tabled(rename = "Revenue")]
    revenue: String,
    #[tabled(rename = "")]
    bar: String,
}

#[derive(Debug, Serialize, Tabled)]
struct TypeRow {
    #[tabled(rename = "Type")]
    label: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Colour")]
    colour: String,
}

#[derive(Debug, Serialize, Tabled)]
struct CityRow {
    #[tabled(rename = "City")]
    label: String,
    #[tabled(rename = "Properties")]
    count: usize,
    #[tabled(rename = "")]
    bar: String,
}

#[derive(Debug, Serialize, Tabled)]
struct YieldRow {
    #[tabled(rename = "Property")]
    name: String,
    #[tabled(rename = "Net yield")]
    net_yield: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Renders a percentage in `[0, 100]` as a bar of block characters.
fn bar(pct: f64) -> String {
    let filled = (pct.clamp(0.0, 100.0) / 100.0 * BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled)
}

/// Executes the dashboard command.
pub fn execute(args: DashboardArgs, ctx: &Context) -> Result<()> {
    let mut analytics = ctx.config.analytics.clone();
    if let Some(top) = args.top {
        analytics = analytics.with_geo_top_n(top);
    }
    let query = args.search.unwrap_or_default();

    let (dataset, source) = load_for_read(&ctx.config, ctx.strict)?;
    let snapshot = DashboardSnapshot::calculate(&dataset, &query, &analytics);

    match ctx.format {
        OutputFormat::Json => print_json(&snapshot)?,
        OutputFormat::Csv => print_csv(&kpi_rows(&snapshot.kpis))?,
        OutputFormat::Table => {
            ctx.report_source(source);
            render_tables(&snapshot, &analytics)?;
        }
    }

    Ok(())
}

fn render_tables(snapshot: &DashboardSnapshot, analytics: &AnalyticsConfig) -> Result<()> {
    print_header("Portfolio");
    print_table(&kpi_rows(&snapshot.kpis))?;

    print_header("Monthly revenue");
    let months: Vec<MonthRow> = snapshot
        .monthly_series
        .iter()
        .enumerate()
        .map(|(i, point)| MonthRow {
            month: i + 1,
            revenue: format_eur(point.value),
            bar: bar(point.scaled_percent),
        })
        .collect();
    print_table(&months)?;
    println!("Total: {}", format_eur(snapshot.monthly_series.total()));

    print_header("Value by type");
    let total = snapshot.type_breakdown.total();
    let denominator = if total == 0.0 { 1.0 } else { total };
    let types: Vec<TypeRow> = snapshot
        .type_breakdown
        .slices()
        .iter()
        .map(|slice| TypeRow {
            label: slice.label.clone(),
            value: format_eur(slice.value),
            share: format_pct(slice.value / denominator * 100.0),
            colour: analytics.color_for(slice.color_index).unwrap_or_default().to_string(),
        })
        .collect();
    print_table(&types)?;

    print_header("Top cities");
    let cities: Vec<CityRow> = snapshot
        .geo_breakdown
        .buckets()
        .iter()
        .map(|bucket| CityRow {
            label: bucket.label.clone(),
            count: bucket.value,
            bar: bar(snapshot.geo_breakdown.bar_width_pct(bucket)),
        })
        .collect();
    print_table(&cities)?;

    print_header("Net yield");
    let yields: Vec<YieldRow> = snapshot
        .performance
        .iter()
        .map(|entry| YieldRow {
            name: entry.name.clone(),
            net_yield: format_pct(entry.net_yield_percent),
            bar: bar(entry.bar_width_pct()),
        })
        .collect();
    print_table(&yields)?;

    println!();
    if snapshot.query.trim().is_empty() {
        println!("{} properties", snapshot.filtered_count);
    } else {
        println!(
            "{} of {} properties match '{}'",
            snapshot.filtered_count, snapshot.kpis.total_properties, snapshot.query
        );
    }
    Ok(())
}
