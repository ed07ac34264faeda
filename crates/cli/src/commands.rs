//! Clap command tree definition.

use clap::{value_parser, Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("curator")
        .about("Recommend advertising templates for a free-text query")
        .version(clap::crate_version!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("data")
                .long("data")
                .help("Data directory holding the record files (default: .)")
                .default_value(".")
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Config file (default: <data>/curator.toml, defaults if absent)")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(build_search())
        .subcommand(build_client())
        .subcommand(build_keywords())
        .subcommand(build_init())
}

// =========================================================================
// Search
// =========================================================================

fn build_search() -> Command {
    Command::new("search")
        .about("Rank templates for a query")
        .arg(
            Arg::new("query")
                .required(true)
                .num_args(1..)
                .help("Query words"),
        )
        .arg(
            Arg::new("top-k")
                .long("top-k")
                .short('k')
                .value_parser(value_parser!(usize))
                .help("Number of results (default: top_k from config)"),
        )
}

// =========================================================================
// Client
// =========================================================================

fn build_client() -> Command {
    Command::new("client")
        .about("List templates used by clients whose name contains NAME")
        .arg(Arg::new("name").required(true).help("Client name (substring, case-insensitive)"))
}

// =========================================================================
// Keywords
// =========================================================================

fn build_keywords() -> Command {
    Command::new("keywords")
        .about("Most frequent client-profile keywords")
        .arg(
            Arg::new("top")
                .long("top")
                .value_parser(value_parser!(usize))
                .default_value("10")
                .help("Number of keywords"),
        )
}

// =========================================================================
// Init
// =========================================================================

fn build_init() -> Command {
    Command::new("init").about("Write a default curator.toml into the data directory if missing")
}
