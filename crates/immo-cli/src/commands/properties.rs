//! Properties command implementation.

use anyhow::Result;
use clap::Args;
use immo_analytics::{compute_property_cards, filter_properties, PropertyCard, StatusTone};
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::cli::OutputFormat;
use crate::output::{format_eur, format_pct, print_csv, print_json, print_table};
use crate::store::load_for_read;

/// Arguments for the properties command.
#[derive(Args, Debug)]
pub struct PropertiesArgs {
    /// Only list properties whose name, type, address, city, postal code or
    /// country contains this text
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Table row of a property card.
#[derive(Debug, Serialize, Tabled)]
struct CardRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "City")]
    city: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Rent")]
    rent: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Net / month")]
    net_monthly: String,
    #[tabled(rename = "Net yield")]
    net_yield: String,
}

impl From<&PropertyCard> for CardRow {
    fn from(card: &PropertyCard) -> Self {
        let marker = match card.tone {
            StatusTone::Occupied => "●",
            StatusTone::Vacant => "○",
            StatusTone::Other => "◌",
        };
        Self {
            id: card.id.clone(),
            name: card.name.clone(),
            kind: card.kind.clone(),
            city: card.city.clone(),
            status: format!("{marker} {}", card.status),
            rent: format_eur(card.rent),
            value: format_eur(card.current_value),
            net_monthly: format_eur(card.net_monthly),
            net_yield: format_pct(card.net_yield_percent),
        }
    }
}

/// Executes the properties command.
pub fn execute(args: PropertiesArgs, ctx: &Context) -> Result<()> {
    let (dataset, source) = load_for_read(&ctx.config, ctx.strict)?;
    let query = args.search.unwrap_or_default();
    let filtered = filter_properties(dataset.properties(), &query);
    let cards = compute_property_cards(&filtered, &ctx.config.analytics);

    match ctx.format {
        OutputFormat::Json => print_json(&cards)?,
        OutputFormat::Csv => print_csv(&cards)?,
        OutputFormat::Table => {
            ctx.report_source(source);
            let rows: Vec<CardRow> = cards.iter().map(CardRow::from).collect();
            print_table(&rows)?;
        }
    }
    Ok(())
}
