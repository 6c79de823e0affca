//! Report and maintenance command handlers

use anyhow::Result;
use serde_json::json;

use reliefdesk::config::Config;
use reliefdesk::presentation::factory;

use super::print_json;

pub fn cmd_report(config: &Config, json: bool) -> Result<()> {
    let desk = factory::open_desk(config)?;
    let report = desk.generate_report();

    if json {
        return print_json(&report);
    }
    println!("{report}");
    Ok(())
}

/// Rewrite both files so legacy field names and list layouts are gone for good.
pub fn cmd_migrate(config: &Config, json: bool) -> Result<()> {
    let desk = factory::open_desk(config)?;
    desk.persist_all()?;

    let camps = desk.store().camp_count();
    let victims = desk.store().victim_count();
    if json {
        return print_json(&json!({ "camps": camps, "victims": victims }));
    }
    println!("Rewrote {camps} camps and {victims} victims in canonical form");
    Ok(())
}
