//! Parsing of console input lines into commands.

use ashfall_core::item::ItemCatalog;
use ashfall_simulation::Action;

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Show the status panel.
    Status,
    /// Show the inventory table.
    Inventory,
    /// Perform a simulation action.
    Do(Action),
    /// Let a number of ticks pass.
    Wait(u64),
    /// Abandon the attempt and start over.
    Restart,
    /// Print the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// Command list printed by `help`.
pub const HELP: &str = "\
Commands:
  status                 show vitals, day, and weather
  inventory              show what you carry
  eat <item>             eat one unit of a food item
  drink <item>           drink one unit of a drinkable item
  cook [item]            cook raw meat over the fire
  craft <item>           craft an item (knife, spear, axe)
  rest <hours>           sleep for 1-24 hours
  hunt                   hunt for raw meat (20 energy)
  forage                 search for resources (15 energy)
  fire                   light a fire from 3 wood
  shelter                build a shelter from 5 wood and 2 rope
  purify                 boil rainwater into drinking water
  wait [n]               let n ticks pass (default 1)
  restart                abandon this attempt and start over
  help                   this list
  quit                   leave the game";

/// Parse one input line.
///
/// Item arguments are matched against the catalog case-insensitively,
/// and a single word that uniquely names an item works too ("craft
/// knife" finds "Crude Knife").
pub fn parse(line: &str, catalog: &ItemCatalog) -> Result<ConsoleCommand, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Err("Type 'help' for the list of commands.".to_string());
    };
    let rest = words.collect::<Vec<_>>().join(" ");

    match verb.to_lowercase().as_str() {
        "status" | "st" => Ok(ConsoleCommand::Status),
        "inventory" | "inv" | "i" => Ok(ConsoleCommand::Inventory),
        "eat" => item_arg(&rest, catalog, "eat").map(|item| ConsoleCommand::Do(Action::Eat(item))),
        "drink" => {
            item_arg(&rest, catalog, "drink").map(|item| ConsoleCommand::Do(Action::Drink(item)))
        }
        "cook" => {
            if rest.is_empty() {
                Ok(ConsoleCommand::Do(Action::Cook("Raw Meat".to_string())))
            } else {
                item_arg(&rest, catalog, "cook").map(|item| ConsoleCommand::Do(Action::Cook(item)))
            }
        }
        "craft" => {
            item_arg(&rest, catalog, "craft").map(|item| ConsoleCommand::Do(Action::Craft(item)))
        }
        "rest" | "sleep" => match rest.parse::<u32>() {
            Ok(hours) if (1..=24).contains(&hours) => Ok(ConsoleCommand::Do(Action::Rest(hours))),
            _ => Err("Rest for how long? Try: rest 8".to_string()),
        },
        "hunt" => Ok(ConsoleCommand::Do(Action::Hunt)),
        "forage" => Ok(ConsoleCommand::Do(Action::Forage)),
        "fire" => Ok(ConsoleCommand::Do(Action::MakeFire)),
        "shelter" => Ok(ConsoleCommand::Do(Action::BuildShelter)),
        "purify" => Ok(ConsoleCommand::Do(Action::PurifyWater)),
        "wait" | "w" => {
            if rest.is_empty() {
                Ok(ConsoleCommand::Wait(1))
            } else {
                match rest.parse::<u64>() {
                    Ok(ticks) if ticks >= 1 => Ok(ConsoleCommand::Wait(ticks)),
                    _ => Err("Wait how long? Try: wait 10".to_string()),
                }
            }
        }
        "restart" => Ok(ConsoleCommand::Restart),
        "help" | "?" => Ok(ConsoleCommand::Help),
        "quit" | "exit" | "q" => Ok(ConsoleCommand::Quit),
        other => Err(format!(
            "Unknown command '{other}'. Type 'help' for the list."
        )),
    }
}

fn item_arg(rest: &str, catalog: &ItemCatalog, verb: &str) -> Result<String, String> {
    if rest.is_empty() {
        Err(format!("{verb} what?"))
    } else {
        Ok(canonical_name(rest, catalog))
    }
}

/// Resolve user spelling to a catalog name where unambiguous; otherwise
/// hand the raw words through and let the engine report the miss.
fn canonical_name(raw: &str, catalog: &ItemCatalog) -> String {
    if let Some(def) = catalog
        .definitions()
        .find(|def| def.name.eq_ignore_ascii_case(raw))
    {
        return def.name.clone();
    }

    let lowered = raw.to_lowercase();
    let word_matches: Vec<_> = catalog
        .definitions()
        .filter(|def| {
            def.name
                .split_whitespace()
                .any(|word| word.to_lowercase() == lowered)
        })
        .collect();
    if let [only] = word_matches.as_slice() {
        return only.name.clone();
    }

    raw.to_string()
}
