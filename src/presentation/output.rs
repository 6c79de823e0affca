//! Output Rendering
//!
//! Column-aligned tables for terminals and JSON values for scripting.

use serde_json::{json, Value};
use unicode_width::UnicodeWidthStr;

use crate::application::DistributionReceipt;
use crate::domain::entities::{Camp, Victim};

/// A plain text table. Columns are padded to the widest cell by display
/// width, so names in any script line up.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(cell.width()),
                    None => widths.push(cell.width()),
                }
            }
        }

        let mut out = String::new();
        out.push_str(&render_line(&self.headers, &widths));
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&render_line(&rule, &widths));
        for row in &self.rows {
            out.push_str(&render_line(row, &widths));
        }
        out
    }
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        let pad = widths.get(i).copied().unwrap_or(0).saturating_sub(cell.width());
        line.push_str(&" ".repeat(pad));
    }
    let mut line = line.trim_end().to_string();
    line.push('\n');
    line
}

pub fn camps_table<'a>(camps: impl IntoIterator<Item = &'a Camp>) -> Table {
    let mut table = Table::new(["ID", "Location", "Occupancy", "Food", "Medical", "Volunteers"]);
    for camp in camps {
        table.row([
            camp.id.clone(),
            camp.location.clone(),
            format!("{}/{}", camp.occupancy, camp.capacity),
            camp.food.to_string(),
            camp.medical.to_string(),
            camp.volunteers.to_string(),
        ]);
    }
    table
}

pub fn victims_table<'a>(victims: impl IntoIterator<Item = &'a Victim>) -> Table {
    let mut table = Table::new(["ID", "Name", "Age", "Health", "Camp", "Food", "Medical"]);
    for victim in victims {
        table.row([
            victim.id.clone(),
            victim.name.clone(),
            victim.age.to_string(),
            victim.health.to_string(),
            victim.camp.clone(),
            victim.food_received.to_string(),
            victim.medical_received.to_string(),
        ]);
    }
    table
}

/// Multi-line description of one victim
pub fn victim_card(victim: &Victim) -> String {
    format!(
        "Victim: {}\nName: {}\nAge: {}\nHealth: {}\nCamp: {}\nFood received: {}\nMedical received: {}\n",
        victim.id,
        victim.name,
        victim.age,
        victim.health,
        victim.camp,
        victim.food_received,
        victim.medical_received
    )
}

pub fn receipt_line(receipt: &DistributionReceipt) -> String {
    let mut line = format!(
        "Distributed {} food / {} medical from camp '{}' to victim '{}'",
        receipt.food, receipt.medical, receipt.camp_id, receipt.victim_id
    );
    if receipt.medical_floor_applied() {
        line.push_str(&format!(
            " (critical: medical raised from {})",
            receipt.requested_medical
        ));
    }
    line
}

pub fn camp_json(camp: &Camp) -> Value {
    json!({
        "camp_id": camp.id,
        "location": camp.location,
        "capacity": camp.capacity,
        "occupancy": camp.occupancy,
        "food": camp.food,
        "medical": camp.medical,
        "volunteers": camp.volunteers,
    })
}

pub fn victim_json(victim: &Victim) -> Value {
    json!({
        "victim_id": victim.id,
        "name": victim.name,
        "age": victim.age,
        "health": victim.health,
        "camp": victim.camp,
        "food_received": victim.food_received,
        "medical_received": victim.medical_received,
    })
}
