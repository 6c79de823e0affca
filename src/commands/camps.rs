//! Camp command handlers

use anyhow::Result;

use reliefdesk::config::Config;
use reliefdesk::presentation::{factory, output};
use reliefdesk::{NewCamp, Restock};

use super::print_json;

#[allow(clippy::too_many_arguments)]
pub fn cmd_add_camp(
    config: &Config,
    id: String,
    location: String,
    capacity: i64,
    food: i64,
    medical: i64,
    volunteers: i64,
    json: bool,
) -> Result<()> {
    let mut desk = factory::open_desk(config)?;
    let camp = desk.add_camp(NewCamp {
        id,
        location,
        capacity,
        food,
        medical,
        volunteers,
    })?;

    if json {
        return print_json(&output::camp_json(camp));
    }
    println!("Camp '{}' added (capacity {})", camp.id, camp.capacity);
    Ok(())
}

pub fn cmd_add_resources(
    config: &Config,
    camp_id: String,
    food: i64,
    medical: i64,
    json: bool,
) -> Result<()> {
    let mut desk = factory::open_desk(config)?;
    let camp = desk.add_resources(Restock {
        camp_id,
        food,
        medical,
    })?;

    if json {
        return print_json(&output::camp_json(camp));
    }
    println!(
        "Camp '{}' restocked: {} food / {} medical",
        camp.id, camp.food, camp.medical
    );
    Ok(())
}

pub fn cmd_camps(config: &Config, json: bool) -> Result<()> {
    let desk = factory::open_desk(config)?;
    let camps = desk.list_camps();

    if json {
        let values: Vec<_> = camps.iter().map(|c| output::camp_json(c)).collect();
        return print_json(&values);
    }
    if camps.is_empty() {
        println!("No camps registered.");
        return Ok(());
    }
    print!("{}", output::camps_table(camps).render());
    Ok(())
}
