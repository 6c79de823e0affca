//! Victim command handlers

use anyhow::Result;

use reliefdesk::config::Config;
use reliefdesk::presentation::{factory, output};
use reliefdesk::{Distribution, NewVictim};

use super::print_json;

pub fn cmd_register(
    config: &Config,
    id: String,
    name: String,
    age: i64,
    health: String,
    camp_id: String,
    json: bool,
) -> Result<()> {
    let mut desk = factory::open_desk(config)?;
    let victim = desk
        .register_victim(NewVictim {
            id,
            name,
            age,
            health,
            camp_id,
        })?
        .clone();

    if json {
        return print_json(&output::victim_json(&victim));
    }
    match desk.store().camp(&victim.camp) {
        Some(camp) => println!(
            "Victim '{}' registered at camp '{}' ({}/{})",
            victim.id, camp.id, camp.occupancy, camp.capacity
        ),
        None => println!("Victim '{}' registered", victim.id),
    }
    Ok(())
}

pub fn cmd_distribute(
    config: &Config,
    victim_id: String,
    food: i64,
    medical: i64,
    json: bool,
) -> Result<()> {
    let mut desk = factory::open_desk(config)?;
    let receipt = desk.distribute(Distribution {
        victim_id,
        food,
        medical,
    })?;

    if json {
        return print_json(&receipt);
    }
    println!("{}", output::receipt_line(&receipt));
    Ok(())
}

pub fn cmd_find(config: &Config, victim_id: &str, json: bool) -> Result<()> {
    let desk = factory::open_desk(config)?;
    let victim = desk.find_victim(victim_id)?;

    if json {
        return print_json(&output::victim_json(victim));
    }
    print!("{}", output::victim_card(victim));
    Ok(())
}

pub fn cmd_victims(config: &Config, camp: Option<&str>, critical: bool, json: bool) -> Result<()> {
    let desk = factory::open_desk(config)?;
    let victims: Vec<_> = desk
        .list_victims()
        .into_iter()
        .filter(|v| camp.map_or(true, |c| v.camp == c))
        .filter(|v| !critical || v.is_critical())
        .collect();

    if json {
        let values: Vec<_> = victims.iter().map(|v| output::victim_json(v)).collect();
        return print_json(&values);
    }
    if victims.is_empty() {
        println!("No victims found.");
        return Ok(());
    }
    print!("{}", output::victims_table(victims).render());
    Ok(())
}
