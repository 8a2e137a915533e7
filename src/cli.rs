use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use crate::types::{Grouping, SortKey, VALID_GROUPINGS, VALID_SORT_KEYS};

#[derive(Parser)]
#[command(name = "corkboard")]
#[command(about = "Terminal kanban board for remote ticket queues")]
#[command(version)]
pub struct Cli {
    /// Override the listing endpoint URL
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Read the ticket payload from a local JSON file instead of the endpoint
    #[arg(long, global = true, value_name = "PATH")]
    pub from_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive board (the default when no subcommand is given)
    #[command(visible_alias = "b")]
    Board {
        /// Initial grouping: status, user, priority (case-insensitive, default: status)
        #[arg(long, value_parser = parse_grouping)]
        group_by: Option<Grouping>,

        /// Initial sort: priority, title (case-insensitive, default: priority)
        #[arg(long, value_parser = parse_sort_key)]
        sort_by: Option<SortKey>,
    },

    /// Print the ticket listing as grouped tables
    #[command(visible_alias = "ls")]
    Tickets {
        /// Group tickets by: status, user, priority (case-insensitive, default: status)
        #[arg(long, value_parser = parse_grouping)]
        group_by: Option<Grouping>,

        /// Sort tickets by: priority, title (case-insensitive, default: priority)
        #[arg(long, value_parser = parse_sort_key)]
        sort_by: Option<SortKey>,

        /// Fuzzy filter across id, title, assignee, and status
        #[arg(long)]
        filter: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (endpoint, api_key)
        key: String,
        /// Value to set
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (endpoint, api_key)
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Execute the parsed invocation, dispatching to the appropriate handler.
    pub async fn run(self) -> crate::error::Result<()> {
        use crate::commands::{
            BoardOptions, TicketsOptions, cmd_board, cmd_config_get, cmd_config_set,
            cmd_config_show, cmd_tickets,
        };

        let Cli {
            endpoint,
            from_file,
            command,
        } = self;

        // Bare `corkboard` opens the board with the default selectors.
        let command = command.unwrap_or(Commands::Board {
            group_by: None,
            sort_by: None,
        });

        match command {
            Commands::Board { group_by, sort_by } => {
                cmd_board(BoardOptions {
                    endpoint,
                    from_file,
                    group_by,
                    sort_by,
                })
                .await
            }

            Commands::Tickets {
                group_by,
                sort_by,
                filter,
                json,
            } => {
                cmd_tickets(TicketsOptions {
                    endpoint,
                    from_file,
                    group_by,
                    sort_by,
                    filter,
                    output_json: json,
                })
                .await
            }

            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
                ConfigAction::Get { key, json } => cmd_config_get(&key, json),
            },

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

/// Generic validation helper for parsing values with a standard error message format.
fn parse_with_validation<T, F>(
    s: &str,
    parser: F,
    field_name: &str,
    valid_values: &[&str],
) -> Result<T, String>
where
    F: FnOnce(&str) -> Result<T, String>,
{
    parser(s).map_err(|_| {
        format!(
            "Invalid {}. Must be one of: {}",
            field_name,
            valid_values.join(", ")
        )
    })
}

fn parse_grouping(s: &str) -> Result<Grouping, String> {
    parse_with_validation(
        s,
        |v| Grouping::from_str(v).map_err(|_| String::new()),
        "grouping",
        VALID_GROUPINGS,
    )
}

fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    parse_with_validation(
        s,
        |v| SortKey::from_str(v).map_err(|_| String::new()),
        "sort key",
        VALID_SORT_KEYS,
    )
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "corkboard", &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grouping_valid() {
        assert_eq!(parse_grouping("status").unwrap(), Grouping::Status);
        assert_eq!(parse_grouping("user").unwrap(), Grouping::User);
        assert_eq!(parse_grouping("priority").unwrap(), Grouping::Priority);
    }

    #[test]
    fn test_parse_grouping_case_insensitive() {
        assert_eq!(parse_grouping("STATUS").unwrap(), Grouping::Status);
        assert_eq!(parse_grouping("User").unwrap(), Grouping::User);
    }

    #[test]
    fn test_parse_grouping_invalid_rejected() {
        assert!(parse_grouping("assignee").is_err());
        assert!(parse_grouping("state").is_err());
        assert!(parse_grouping("").is_err());
    }

    #[test]
    fn test_parse_grouping_error_message_lists_valid_values() {
        let err = parse_grouping("bogus").unwrap_err();
        assert!(
            err.contains("status") && err.contains("user") && err.contains("priority"),
            "Error should list valid grouping values, got: {err}"
        );
    }

    #[test]
    fn test_parse_sort_key_valid() {
        assert_eq!(parse_sort_key("priority").unwrap(), SortKey::Priority);
        assert_eq!(parse_sort_key("title").unwrap(), SortKey::Title);
        assert_eq!(parse_sort_key("TITLE").unwrap(), SortKey::Title);
    }

    #[test]
    fn test_parse_sort_key_invalid_rejected() {
        assert!(parse_sort_key("created").is_err());
        assert!(parse_sort_key("id").is_err());
        assert!(parse_sort_key("").is_err());
    }

    #[test]
    fn test_bare_invocation_has_no_subcommand() {
        let cli = Cli::try_parse_from(["corkboard"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.endpoint.is_none());
        assert!(cli.from_file.is_none());
    }

    #[test]
    fn test_global_flags_reach_subcommands() {
        let cli = Cli::try_parse_from([
            "corkboard",
            "tickets",
            "--endpoint",
            "http://localhost:9999/tickets",
        ])
        .unwrap();
        assert_eq!(
            cli.endpoint.as_deref(),
            Some("http://localhost:9999/tickets")
        );
        assert!(matches!(cli.command, Some(Commands::Tickets { .. })));
    }

    #[test]
    fn test_board_selector_flags() {
        let cli = Cli::try_parse_from([
            "corkboard",
            "board",
            "--group-by",
            "user",
            "--sort-by",
            "title",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Board { group_by, sort_by }) => {
                assert_eq!(group_by, Some(Grouping::User));
                assert_eq!(sort_by, Some(SortKey::Title));
            }
            _ => panic!("expected board subcommand"),
        }
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
