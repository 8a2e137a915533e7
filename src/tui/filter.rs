//! Fuzzy filter logic for the board
//!
//! Provides fuzzy matching across multiple ticket fields with support for
//! priority shorthand (p0-p4) filtering. The board keeps its grouping and
//! ordering while filtering; matches only decide which cards stay visible.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use regex::Regex;
use std::sync::Arc;

use crate::types::Ticket;

/// A ticket that passed the filter, with its fuzzy match score
#[derive(Debug, Clone)]
pub struct FilteredTicket {
    /// The matching ticket (shared via Arc to avoid cloning)
    pub ticket: Arc<Ticket>,
    /// The fuzzy match score (higher is better)
    pub score: i64,
}

/// Filter tickets by a fuzzy query
///
/// Supports:
/// - Fuzzy matching across id, title, assignee, and status
/// - Priority shorthand: `p0`..`p4` filters by priority level
/// - Smart case: case-insensitive unless query contains uppercase
///
/// Results keep the input order so the board layout stays stable while
/// typing.
pub fn filter_tickets(tickets: &[Ticket], query: &str) -> Vec<FilteredTicket> {
    if query.is_empty() {
        return tickets
            .iter()
            .map(|t| FilteredTicket {
                ticket: Arc::new(t.clone()),
                score: 0,
            })
            .collect();
    }

    // Check for priority shorthand: "p0", "p1", etc.
    let priority_filter = parse_priority_filter(query);

    // Pre-filter by priority if needed
    let candidates: Vec<&Ticket> = if let Some(level) = priority_filter {
        tickets
            .iter()
            .filter(|t| t.priority_level == level)
            .collect()
    } else {
        tickets.iter().collect()
    };

    // Strip priority shorthand from query for fuzzy match
    let fuzzy_query = strip_priority_shorthand(query);

    if fuzzy_query.is_empty() {
        return candidates
            .iter()
            .map(|t| FilteredTicket {
                ticket: Arc::new((*t).clone()),
                score: 0,
            })
            .collect();
    }

    let matcher = SkimMatcherV2::default().smart_case();

    candidates
        .iter()
        .filter_map(|ticket| {
            let search_text = format!(
                "{} {} {} {}",
                ticket.id, ticket.title, ticket.assigned_user, ticket.status,
            );

            matcher
                .fuzzy_match(&search_text, &fuzzy_query)
                .map(|score| FilteredTicket {
                    ticket: Arc::new((*ticket).clone()),
                    score,
                })
        })
        .collect()
}

/// Parse a priority filter from the query (e.g., "p0", "p1", "P2")
pub fn parse_priority_filter(query: &str) -> Option<i64> {
    let re = Regex::new(r"(?i)\bp([0-4])\b").expect("priority filter regex should be valid");
    re.captures(query)
        .and_then(|c| c.get(1)?.as_str().parse().ok())
}

/// Strip priority shorthand from the query for fuzzy matching
pub fn strip_priority_shorthand(query: &str) -> String {
    let re = Regex::new(r"(?i)\bp[0-4]\b").expect("priority shorthand regex should be valid");
    re.replace_all(query, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_ticket(id: &str, title: &str, user: &str, level: i64) -> Ticket {
        Ticket {
            id: id.to_string(),
            title: title.to_string(),
            status: "Todo".to_string(),
            assigned_user: user.to_string(),
            priority_level: level,
            priority_name: String::new(),
        }
    }

    #[test]
    fn test_empty_query_returns_all() {
        let tickets = vec![
            make_ticket("CAM-1", "Fix bug", "ramesh", 0),
            make_ticket("CAM-2", "Add feature", "suresh", 2),
        ];

        let results = filter_tickets(&tickets, "");
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_fuzzy_match_title() {
        let tickets = vec![
            make_ticket("CAM-1", "Fix bug in parser", "ramesh", 2),
            make_ticket("CAM-2", "Add new feature", "suresh", 2),
        ];

        let results = filter_tickets(&tickets, "bug");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].ticket.id, "CAM-1");
    }

    #[test]
    fn test_fuzzy_match_id() {
        let tickets = vec![
            make_ticket("CAM-1", "Fix bug", "ramesh", 2),
            make_ticket("SYN-9", "Add feature", "suresh", 2),
        ];

        let results = filter_tickets(&tickets, "syn");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].ticket.id, "SYN-9");
    }

    #[test]
    fn test_fuzzy_match_assignee() {
        let tickets = vec![
            make_ticket("CAM-1", "Fix bug", "ramesh", 2),
            make_ticket("CAM-2", "Add feature", "suresh kumar", 2),
        ];

        let results = filter_tickets(&tickets, "kumar");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].ticket.id, "CAM-2");
    }

    #[test]
    fn test_priority_filter() {
        let tickets = vec![
            make_ticket("CAM-1", "Critical fix", "ramesh", 4),
            make_ticket("CAM-2", "Normal task", "suresh", 2),
            make_ticket("CAM-3", "Someday", "mahesh", 0),
        ];

        let results = filter_tickets(&tickets, "p4");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].ticket.id, "CAM-1");
    }

    #[test]
    fn test_priority_filter_with_query() {
        let tickets = vec![
            make_ticket("CAM-1", "Critical fix", "ramesh", 4),
            make_ticket("CAM-2", "Another critical", "suresh", 4),
            make_ticket("CAM-3", "Low priority fix", "mahesh", 1),
        ];

        let results = filter_tickets(&tickets, "p4 fix");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].ticket.id, "CAM-1");
    }

    #[test]
    fn test_results_keep_input_order() {
        let tickets = vec![
            make_ticket("CAM-1", "fix parser", "ramesh", 2),
            make_ticket("CAM-2", "fix", "suresh", 2),
            make_ticket("CAM-3", "prefix", "mahesh", 2),
        ];

        let results = filter_tickets(&tickets, "fix");
        let ids: Vec<&str> = results.iter().map(|r| r.ticket.id.as_str()).collect();
        assert_eq!(ids, vec!["CAM-1", "CAM-2", "CAM-3"]);
    }

    #[test]
    fn test_smart_case() {
        let tickets = vec![make_ticket("CAM-1", "Fix Parser", "ramesh", 2)];

        // Lowercase query matches case-insensitively
        assert_eq!(filter_tickets(&tickets, "parser").len(), 1);
        // Uppercase query requires matching case
        assert_eq!(filter_tickets(&tickets, "PARSER").len(), 0);
    }

    #[test]
    fn test_parse_priority_filter() {
        assert_eq!(parse_priority_filter("p0"), Some(0));
        assert_eq!(parse_priority_filter("P1"), Some(1));
        assert_eq!(parse_priority_filter("fix p2 bug"), Some(2));
        assert_eq!(parse_priority_filter("no priority"), None);
        assert_eq!(parse_priority_filter("p5"), None);
    }

    #[test]
    fn test_strip_priority_shorthand() {
        assert_eq!(strip_priority_shorthand("p0"), "");
        assert_eq!(strip_priority_shorthand("p0 fix bug"), "fix bug");
        assert_eq!(strip_priority_shorthand("fix p1 bug"), "fix  bug");
        assert_eq!(strip_priority_shorthand("no priority"), "no priority");
    }
}
