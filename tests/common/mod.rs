//! Shared test utilities for the integration suites.
//!
//! Import via `mod common;`.

#![allow(dead_code)]

use curator::{Curator, CuratorConfig, MemorySource, RawTables, Table};
use curator_core::table::{CLIENT_PROFILES, TEMPLATE_DETAILS, TEMPLATE_TAGS};
use std::path::Path;
use std::sync::Arc;

// ============================================================================
// Fixtures
// ============================================================================

/// The two-template, one-profile scenario
pub fn gaming_tables() -> RawTables {
    RawTables {
        template_details: Table::new(
            TEMPLATE_DETAILS,
            &["template_name", "description", "avg_ctr", "preview_url"],
        )
        .with_row(&["T1", "gaming mobile launch", "1.2%", ""])
        .with_row(&["T2", "banking credit card", "6%", ""]),
        template_tags: Table::new(TEMPLATE_TAGS, &["campaign_name", "client_name", "template_name"]),
        client_profiles: Table::new(CLIENT_PROFILES, &["client_type", "keywords"])
            .with_row(&["Gaming", "mobile gaming app"]),
    }
}

/// A larger catalog with associations, duplicates and messy cells
pub fn marketing_tables() -> RawTables {
    RawTables {
        template_details: Table::new(
            TEMPLATE_DETAILS,
            &["template_name", "description", "avg_ctr", "preview_url"],
        )
        .with_row(&["Spin Wheel", "Spin the wheel to win prizes!", "4.5%", "http://d/spin"])
        .with_row(&["Scratch Card", "Digital scratch card reveal", "3%-5%", ""])
        .with_row(&["Loan Calculator", "Interactive loan calculator", "2.1", ""])
        .with_row(&["Countdown", "Flash sale countdown timer", "", "http://d/countdown"])
        .with_row(&["Spin Wheel", "Duplicate row", "99%", ""])
        .with_row(&["Style Quiz", "Which look suits you? Fashion quiz", "bogus", ""]),
        template_tags: Table::new(
            TEMPLATE_TAGS,
            &["campaign_name", "client_name", "template_name", "preview_url"],
        )
        .with_row(&["Arcade Week", "PlayCo", "Spin Wheel", "http://t/spin"])
        .with_row(&["Gold Card", "BankCo", "Scratch Card", ""])
        .with_row(&["Home Loans", "BankCo", "Loan Calculator", "http://t/loan"])
        .with_row(&["Summer Sale", "ShopCo", "Countdown", ""])
        .with_row(&["Spring Looks", "ShopCo", "Style Quiz", ""]),
        client_profiles: Table::new(
            CLIENT_PROFILES,
            &[
                "client_type",
                "keywords",
                "domain_url",
                "industry",
                "business_niche",
                "marketing_focus",
                "relevant_keywords",
            ],
        )
        .with_row(&[
            "PlayCo Gaming",
            "mobile, gaming, arcade",
            "playco.example",
            "Entertainment",
            "casual games",
            "engagement",
            "prizes, rewards",
        ])
        .with_row(&[
            "BankCo Finance",
            "credit, loans, mortgage",
            "bankco.example",
            "Banking",
            "retail banking",
            "acquisition",
            "rewards",
        ])
        .with_row(&[
            "ShopCo Retail",
            "fashion, apparel, sale",
            "shopco.example",
            "Retail",
            "ecommerce",
            "conversion",
            "discount",
        ]),
    }
}

/// Curator over in-memory tables with the given config
pub fn curator_with(tables: RawTables, config: CuratorConfig) -> Curator {
    Curator::new(Arc::new(MemorySource::new(tables)), config).unwrap()
}

/// Curator over in-memory tables with default config
pub fn curator(tables: RawTables) -> Curator {
    curator_with(tables, CuratorConfig::default())
}

/// Write `tables` as the three default JSON files into `dir`
pub fn write_json_dir(dir: &Path, tables: &RawTables) {
    let files = [
        ("template_details.json", &tables.template_details),
        ("template_tags.json", &tables.template_tags),
        ("client_profiles.json", &tables.client_profiles),
    ];
    for (file, table) in files {
        let rows = serde_json::to_string_pretty(&table.rows).unwrap();
        std::fs::write(dir.join(file), rows).unwrap();
    }
}
