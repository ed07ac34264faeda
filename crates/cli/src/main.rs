//! Curator CLI: rank advertising templates for a free-text query.
//!
//! `curator [--data DIR] [--config PATH] [--json] COMMAND`
//!
//! - `search <QUERY>...` ranked recommendations
//! - `client <NAME>` templates used by a client
//! - `keywords` most frequent client-profile keywords
//! - `init` write a default `curator.toml`
//!
//! Logging goes to stderr, filtered by `CURATOR_LOG` (default `warn`).

mod commands;
mod format;
mod parse;

use std::process;

use curator_core::{Result, SearchRequest};
use curator_engine::{Curator, CuratorConfig, CONFIG_FILE_NAME};
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_client, format_error, format_keywords, format_search, OutputMode};
use parse::{location, matches_to_action, CliAction, Location};

fn main() {
    init_logging();

    let matches = build_cli().get_matches();
    let mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let action = match matches_to_action(&matches) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            process::exit(1);
        }
    };

    match run(&location(&matches), action, mode) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            process::exit(1);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("CURATOR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(loc: &Location) -> Result<CuratorConfig> {
    match &loc.config {
        Some(path) => CuratorConfig::from_file(path),
        None => CuratorConfig::from_file_or_default(&loc.data_dir.join(CONFIG_FILE_NAME)),
    }
}

fn run(loc: &Location, action: CliAction, mode: OutputMode) -> Result<String> {
    if action == CliAction::Init {
        let path = loc
            .config
            .clone()
            .unwrap_or_else(|| loc.data_dir.join(CONFIG_FILE_NAME));
        let created = CuratorConfig::write_default_if_missing(&path)?;
        let status = if created { "created" } else { "exists" };
        return Ok(match mode {
            OutputMode::Json => serde_json::json!({
                "path": path.display().to_string(),
                "status": status,
            })
            .to_string(),
            OutputMode::Human => format!("{} {}", status, path.display()),
        });
    }

    let config = load_config(loc)?;
    let curator = Curator::open_with_config(&loc.data_dir, config)?;

    Ok(match action {
        CliAction::Search { query, top_k } => {
            let top_k = top_k.unwrap_or(curator.config().top_k);
            let response = curator.search(&SearchRequest::new(query).with_top_k(top_k))?;
            format_search(&response, mode)
        }
        CliAction::Client { name } => format_client(&curator.templates_by_client(&name), mode),
        CliAction::Keywords { top } => format_keywords(&curator.popular_keywords(top), mode),
        CliAction::Init => String::new(),
    })
}
