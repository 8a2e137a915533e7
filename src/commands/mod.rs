mod board;
mod config;
mod tickets;

pub use board::{BoardOptions, cmd_board};
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use tickets::{TicketsOptions, cmd_tickets};

use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::source::{FileTicketSource, HttpTicketSource, TicketSource};

/// Build the ticket source for an invocation. A `--from-file` path wins over
/// the endpoint chain (flag, env var, config file, built-in default).
pub(crate) fn build_source(
    endpoint: Option<&str>,
    from_file: Option<&Path>,
) -> Result<Arc<dyn TicketSource>> {
    if let Some(path) = from_file {
        return Ok(Arc::new(FileTicketSource::new(path)));
    }

    let config = Config::load()?;
    Ok(Arc::new(HttpTicketSource::from_config(&config, endpoint)?))
}

/// Print a value as pretty JSON to stdout
pub(crate) fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_source_prefers_file() {
        let source =
            build_source(Some("http://example.com"), Some(Path::new("/tmp/payload.json")))
                .unwrap();
        assert_eq!(source.describe(), "payload.json");
    }

    #[test]
    fn test_build_source_http_uses_endpoint_override() {
        let source = build_source(Some("http://localhost:9000/tickets"), None).unwrap();
        assert_eq!(source.describe(), "localhost");
    }
}
