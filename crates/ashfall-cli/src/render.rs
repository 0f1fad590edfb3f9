//! Terminal rendering of the simulation state.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use ashfall_core::player::{NOMINAL_TEMPERATURE, Skill};
use ashfall_simulation::{ActionReport, Simulation};

/// Print the status panel: day header, vital bars, camp state, and the
/// recent message log.
pub fn status(sim: &Simulation) {
    let env = sim.environment();
    let player = sim.player();

    println!(
        "  {} {}",
        format!("{} - Day {}", player.name(), env.days_survived).bold(),
        format!("- {} - {}", env.time_of_day, env.weather).dimmed()
    );
    println!("  Health {}", stat_bar(player.health()));
    println!("  Hunger {}", stat_bar(player.hunger()));
    println!("  Thirst {}", stat_bar(player.thirst()));
    println!("  Energy {}", stat_bar(player.energy()));

    let temperature = player.body_temperature();
    let temperature_label = format!("{temperature:.1} C");
    if (temperature - NOMINAL_TEMPERATURE).abs() > 2.0 {
        println!("  Body temperature: {}", temperature_label.red().bold());
    } else {
        println!("  Body temperature: {temperature_label}");
    }

    let fire = if player.has_fire {
        format!("fire burning ({:.1}h left)", player.fire_duration)
    } else {
        "no fire".to_string()
    };
    let shelter = if player.has_shelter {
        "shelter built"
    } else {
        "no shelter"
    };
    println!("  Camp: {fire}, {shelter}");

    let skills = Skill::all()
        .iter()
        .map(|skill| format!("{skill} {:.1}", player.skill(*skill)))
        .collect::<Vec<_>>()
        .join(", ");
    println!("  Skills: {}", skills.dimmed());

    if !player.message_log().is_empty() {
        println!();
        for message in player.message_log().messages() {
            println!("  {}", message.dimmed());
        }
    }
}

/// Print the inventory as a table with a weight header.
pub fn inventory(sim: &Simulation) {
    let player = sim.player();
    println!(
        "  {} {}",
        "Inventory".bold(),
        format!(
            "({:.1}/{:.1} kg)",
            player.inventory.current_weight(),
            player.inventory.max_weight()
        )
        .dimmed()
    );

    if player.inventory.is_empty() {
        println!("  {}", "(empty)".dimmed());
        return;
    }

    let mut stacks: Vec<_> = player.inventory.stacks().collect();
    stacks.sort_by(|a, b| a.0.cmp(b.0));

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Item", "Qty", "kg", "Notes"]);
    for (name, quantity) in stacks {
        let Ok(def) = sim.catalog().get(name) else {
            continue;
        };
        let mut notes = Vec::new();
        if def.is_food {
            notes.push("food");
        }
        if def.is_drinkable {
            notes.push("drink");
        }
        if def.is_weapon {
            notes.push("weapon");
        }
        if def.is_tool {
            notes.push("tool");
        }
        table.add_row(vec![
            name.to_string(),
            quantity.to_string(),
            format!("{:.1}", def.weight * f64::from(quantity)),
            notes.join(", "),
        ]);
    }
    println!("{table}");
}

/// Print the messages produced by one action call.
pub fn report(report: &ActionReport) {
    for message in &report.messages {
        if report.success {
            println!("  {message}");
        } else {
            println!("  {}", message.yellow());
        }
    }
}

/// Print the terminal banner once health has reached zero.
pub fn game_over(sim: &Simulation) {
    println!();
    println!("  {}", "You did not survive.".red().bold());
    println!("  Days survived: {}", sim.environment().days_survived);
    println!("  Type 'restart' to try again, or 'quit'.");
}

/// A ten-segment bar for a 0-100 stat, colored by how dire it is.
fn stat_bar(value: f64) -> String {
    let pct = value.round() as u32;
    let filled = (value / 10.0).round() as usize;
    let empty = 10_usize.saturating_sub(filled);
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(empty));

    if value <= 15.0 {
        format!("[{}] {:>3}", bar.red(), pct)
    } else if value <= 40.0 {
        format!("[{}] {:>3}", bar.yellow(), pct)
    } else {
        format!("[{}] {:>3}", bar.green(), pct)
    }
}
