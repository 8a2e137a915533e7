//! Pure derivation of the board's display order.
//!
//! Two stable passes over an owned copy of the collection: a grouping pass,
//! then a sort pass over the whole sequence. The sort pass is global, not a
//! per-group sub-sort. When the sort key disagrees with the grouping key it
//! takes precedence, and the grouping order survives only between tickets
//! that compare equal under the sort key.

use unicase::UniCase;

use crate::types::{DisplayConfig, Grouping, SortKey, Ticket};

/// Order a copy of the collection by the grouping key. The input is never
/// mutated. Ties keep their input order.
pub fn group_tickets(tickets: &[Ticket], grouping: Grouping) -> Vec<Ticket> {
    let mut ordered = tickets.to_vec();
    match grouping {
        Grouping::Status => {
            ordered.sort_by(|a, b| UniCase::new(a.status.as_str()).cmp(&UniCase::new(b.status.as_str())));
        }
        Grouping::User => {
            ordered.sort_by(|a, b| {
                UniCase::new(a.assigned_user.as_str()).cmp(&UniCase::new(b.assigned_user.as_str()))
            });
        }
        Grouping::Priority => {
            ordered.sort_by(|a, b| a.priority_level.cmp(&b.priority_level).reverse());
        }
    }
    ordered
}

/// Re-sort the grouped sequence by the sort key. Ties keep their incoming
/// (grouped) order.
pub fn sort_tickets(mut tickets: Vec<Ticket>, sort: SortKey) -> Vec<Ticket> {
    match sort {
        SortKey::Priority => {
            tickets.sort_by(|a, b| a.priority_level.cmp(&b.priority_level).reverse());
        }
        SortKey::Title => {
            tickets.sort_by(|a, b| UniCase::new(a.title.as_str()).cmp(&UniCase::new(b.title.as_str())));
        }
    }
    tickets
}

/// Full derivation: grouping pass, then sort pass. Deterministic for a given
/// input and config.
pub fn derive_order(tickets: &[Ticket], config: DisplayConfig) -> Vec<Ticket> {
    sort_tickets(group_tickets(tickets, config.grouping), config.sort)
}
