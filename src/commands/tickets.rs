//! Ticket listing command (`corkboard tickets`)
//!
//! Fetches the collection once and prints it grouped the way the board
//! displays it. The same grouping and sort selectors apply, so the table
//! order matches the column order on the interactive board.

use std::path::PathBuf;

use owo_colors::OwoColorize;
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use unicase::UniCase;

use super::{build_source, print_json};
use crate::error::Result;
use crate::ordering::derive_order;
use crate::tui::filter_tickets;
use crate::types::{DisplayConfig, Grouping, SortKey, Ticket};

/// Options for the tickets command
pub struct TicketsOptions {
    pub endpoint: Option<String>,
    pub from_file: Option<PathBuf>,
    pub group_by: Option<Grouping>,
    pub sort_by: Option<SortKey>,
    pub filter: Option<String>,
    pub output_json: bool,
}

/// A row in the ticket listing table
#[derive(Tabled)]
struct TicketRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Assignee")]
    assignee: String,
    #[tabled(rename = "Priority")]
    priority: String,
}

impl From<&Ticket> for TicketRow {
    fn from(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id.clone(),
            title: ticket.title.clone(),
            status: ticket.status.clone(),
            assignee: ticket.assigned_user.clone(),
            priority: format!("{} ({})", ticket.priority_name, ticket.priority_level),
        }
    }
}

/// The group header for a ticket under the active grouping
fn group_label(ticket: &Ticket, grouping: Grouping) -> String {
    match grouping {
        Grouping::Status => ticket.status.clone(),
        Grouping::User => ticket.assigned_user.clone(),
        Grouping::Priority => ticket.priority_name.clone(),
    }
}

/// Partition an ordered collection into groups, keyed case-insensitively.
/// Groups appear in first-encounter order and keep the first spelling seen;
/// members keep their incoming order.
fn partition_by_group(tickets: &[Ticket], grouping: Grouping) -> Vec<(String, Vec<&Ticket>)> {
    let mut groups: Vec<(String, Vec<&Ticket>)> = Vec::new();
    for ticket in tickets {
        let label = group_label(ticket, grouping);
        let existing = groups
            .iter_mut()
            .find(|(name, _)| UniCase::new(name.as_str()) == UniCase::new(label.as_str()));
        match existing {
            Some((_, members)) => members.push(ticket),
            None => groups.push((label, vec![ticket])),
        }
    }
    groups
}

/// Fetch, order, and print the ticket listing
pub async fn cmd_tickets(options: TicketsOptions) -> Result<()> {
    let source = build_source(options.endpoint.as_deref(), options.from_file.as_deref())?;
    let batch = source.fetch_tickets().await?;

    let config = DisplayConfig {
        grouping: options.group_by.unwrap_or_default(),
        sort: options.sort_by.unwrap_or_default(),
    };

    let mut tickets = batch.tickets;
    if let Some(query) = options.filter.as_deref() {
        tickets = filter_tickets(&tickets, query)
            .into_iter()
            .map(|matched| (*matched.ticket).clone())
            .collect();
    }

    let ordered = derive_order(&tickets, config);
    let groups = partition_by_group(&ordered, config.grouping);

    if options.output_json {
        let json_groups: Vec<serde_json::Value> = groups
            .iter()
            .map(|(label, members)| {
                json!({
                    "group": label,
                    "tickets": members,
                })
            })
            .collect();

        return print_json(&json!({
            "groupBy": config.grouping.to_string(),
            "sortBy": config.sort.to_string(),
            "total": ordered.len(),
            "skipped": batch.skipped.len(),
            "groups": json_groups,
        }));
    }

    if ordered.is_empty() {
        if options.filter.is_some() {
            println!("No tickets match the filter.");
        } else {
            println!("No tickets found.");
        }
        return Ok(());
    }

    for (label, members) in &groups {
        println!(
            "{} {}",
            label.cyan().bold(),
            format!("({})", members.len()).dimmed()
        );

        let rows: Vec<TicketRow> = members.iter().map(|t| TicketRow::from(*t)).collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        println!();
    }

    println!("{} ticket(s)", ordered.len());

    if !batch.skipped.is_empty() {
        let noun = if batch.skipped.len() == 1 {
            "entry"
        } else {
            "entries"
        };
        eprintln!(
            "{}",
            format!(
                "warning: skipped {} malformed ticket {noun}",
                batch.skipped.len()
            )
            .yellow()
        );
    }

    Ok(())
}
