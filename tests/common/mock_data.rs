//! Mock data builders for creating test tickets and fixture sources.
//!
//! This module provides builder patterns for creating test data without
//! needing a network or the real listing endpoint.

#![allow(dead_code)]

use corkboard::{CorkboardError, Ticket, TicketBatch, TicketSource};

/// Builder for creating test tickets
pub struct TicketBuilder {
    ticket: Ticket,
}

impl TicketBuilder {
    /// Create a new ticket builder with the given ID
    pub fn new(id: &str) -> Self {
        Self {
            ticket: Ticket {
                id: id.to_string(),
                title: format!("Test ticket {id}"),
                status: "Todo".to_string(),
                assigned_user: "amy".to_string(),
                priority_level: 2,
                priority_name: "Medium".to_string(),
            },
        }
    }

    /// Set the ticket title
    pub fn title(mut self, title: &str) -> Self {
        self.ticket.title = title.to_string();
        self
    }

    /// Set the ticket status
    pub fn status(mut self, status: &str) -> Self {
        self.ticket.status = status.to_string();
        self
    }

    /// Set the assignee
    pub fn assignee(mut self, user: &str) -> Self {
        self.ticket.assigned_user = user.to_string();
        self
    }

    /// Set the priority level with the matching display name
    pub fn priority(mut self, level: i64) -> Self {
        self.ticket.priority_level = level;
        self.ticket.priority_name = match level {
            4 => "Urgent",
            3 => "High",
            2 => "Medium",
            1 => "Low",
            _ => "No priority",
        }
        .to_string();
        self
    }

    /// Build the ticket
    pub fn build(self) -> Ticket {
        self.ticket
    }
}

/// Create a basic ticket with minimal setup
pub fn mock_ticket(id: &str, status: &str) -> Ticket {
    TicketBuilder::new(id).status(status).build()
}

/// A small, varied collection exercising every grouping and sort key:
/// three statuses, four assignees, the full priority range.
pub fn sample_tickets() -> Vec<Ticket> {
    vec![
        TicketBuilder::new("CAM-1")
            .title("Refactor auth flow")
            .status("In progress")
            .assignee("Ramesh")
            .priority(3)
            .build(),
        TicketBuilder::new("CAM-2")
            .title("Fix login crash")
            .status("Todo")
            .assignee("Anoop")
            .priority(4)
            .build(),
        TicketBuilder::new("CAM-3")
            .title("Update docs")
            .status("Backlog")
            .assignee("Suresh")
            .priority(1)
            .build(),
        TicketBuilder::new("CAM-4")
            .title("Add filters")
            .status("Todo")
            .assignee("Yogesh")
            .priority(2)
            .build(),
        TicketBuilder::new("CAM-5")
            .title("Ship dark mode")
            .status("In progress")
            .assignee("Anoop")
            .priority(0)
            .build(),
    ]
}

/// The endpoint payload shape, with one malformed entry at index 1
/// (missing the priority fields).
pub const PAYLOAD_WITH_BAD_ENTRY: &str = r#"{
    "tickets": [
        {
            "id": "CAM-1",
            "title": "Conduct security vulnerability assessment",
            "tag": ["Feature Request"],
            "status": "Todo",
            "assignedUser": "Anoop",
            "priorityLevel": 4,
            "priorityName": "Urgent"
        },
        {
            "id": "CAM-2",
            "title": "Entry without priority fields",
            "status": "Todo",
            "assignedUser": "Yogesh"
        },
        {
            "id": "CAM-3",
            "title": "Add multi-select in the dropdown",
            "status": "In progress",
            "assignedUser": "Ramesh",
            "priorityLevel": 2,
            "priorityName": "Medium"
        }
    ]
}"#;

/// In-memory ticket source for driving the board without a network.
pub struct FixtureSource {
    batch: TicketBatch,
    fail_with: Option<String>,
}

impl FixtureSource {
    /// A source that serves the given tickets with no skips
    pub fn new(tickets: Vec<Ticket>) -> Self {
        Self {
            batch: TicketBatch {
                tickets,
                skipped: Vec::new(),
            },
            fail_with: None,
        }
    }

    /// A source that serves a prebuilt batch (tickets plus skips)
    pub fn with_batch(batch: TicketBatch) -> Self {
        Self {
            batch,
            fail_with: None,
        }
    }

    /// A source whose every fetch fails with the given message
    pub fn failing(message: &str) -> Self {
        Self {
            batch: TicketBatch::new(),
            fail_with: Some(message.to_string()),
        }
    }
}

#[async_trait::async_trait]
impl TicketSource for FixtureSource {
    async fn fetch_tickets(&self) -> Result<TicketBatch, CorkboardError> {
        match &self.fail_with {
            Some(message) => Err(CorkboardError::Other(message.clone())),
            None => Ok(self.batch.clone()),
        }
    }

    fn describe(&self) -> String {
        "fixture".to_string()
    }
}
