//! Command handlers
//!
//! Each handler opens the desk, runs one operation and prints the result as
//! a table/text or JSON.

mod camps;
mod report;
mod victims;

use anyhow::Result;
use serde::Serialize;

use reliefdesk::config::{Config, OutputFormat};
use reliefdesk::presentation::Commands;

pub fn run(command: Commands, config: &Config) -> Result<()> {
    let json = config.output.format == OutputFormat::Json;
    match command {
        Commands::AddCamp {
            id,
            location,
            capacity,
            food,
            medical,
            volunteers,
        } => camps::cmd_add_camp(config, id, location, capacity, food, medical, volunteers, json),
        Commands::AddResources { camp, food, medical } => {
            camps::cmd_add_resources(config, camp, food, medical, json)
        }
        Commands::Camps => camps::cmd_camps(config, json),
        Commands::Register {
            id,
            name,
            age,
            health,
            camp,
        } => victims::cmd_register(config, id, name, age, health, camp, json),
        Commands::Distribute {
            victim,
            food,
            medical,
        } => victims::cmd_distribute(config, victim, food, medical, json),
        Commands::Find { victim } => victims::cmd_find(config, &victim, json),
        Commands::Victims { camp, critical } => {
            victims::cmd_victims(config, camp.as_deref(), critical, json)
        }
        Commands::Report => report::cmd_report(config, json),
        Commands::Migrate => report::cmd_migrate(config, json),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
