//! ArgMatches → CliAction conversion.

use clap::ArgMatches;
use std::path::PathBuf;

/// The result of parsing the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Rank templates for a query.
    Search {
        query: String,
        top_k: Option<usize>,
    },
    /// Templates used by matching clients.
    Client { name: String },
    /// Most frequent profile keywords.
    Keywords { top: usize },
    /// Write the default config file.
    Init,
}

/// Where the data and config live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub data_dir: PathBuf,
    pub config: Option<PathBuf>,
}

/// Read the global location flags.
pub fn location(matches: &ArgMatches) -> Location {
    Location {
        data_dir: matches
            .get_one::<String>("data")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".")),
        config: matches.get_one::<String>("config").map(PathBuf::from),
    }
}

/// Convert the parsed subcommand into an action.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (name, sub) = matches
        .subcommand()
        .ok_or_else(|| "No command given".to_string())?;

    match name {
        "search" => {
            let query = sub
                .get_many::<String>("query")
                .map(|words| words.map(String::as_str).collect::<Vec<_>>().join(" "))
                .unwrap_or_default();
            Ok(CliAction::Search {
                query,
                top_k: sub.get_one::<usize>("top-k").copied(),
            })
        }
        "client" => Ok(CliAction::Client {
            name: sub.get_one::<String>("name").cloned().unwrap_or_default(),
        }),
        "keywords" => Ok(CliAction::Keywords {
            top: sub.get_one::<usize>("top").copied().unwrap_or(10),
        }),
        "init" => Ok(CliAction::Init),
        other => Err(format!("Unknown command: {}", other)),
    }
}
