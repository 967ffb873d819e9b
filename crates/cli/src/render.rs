use anyhow::Result;
use shipfinder_catalog::ShipMatch;

/// Print matches as a table, or as pretty JSON when `json` is set.
pub fn print_matches(matches: &[ShipMatch], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(matches)?);
        return Ok(());
    }

    println!(
        "{:<4} {:<40} {:<6} {:<30} {:<40} {}",
        "id", "name", "size", "engines", "weapons", "crew"
    );
    for m in matches {
        println!(
            "{:<4} {:<40} {:<6} {:<30} {:<40} {}",
            m.id,
            m.ship.name,
            m.ship.size.label(),
            join(m.ship.engines.iter().map(|e| e.label())),
            join(m.ship.weapons.iter().map(|w| w.label())),
            m.ship.crew.label(),
        );
    }
    Ok(())
}

fn join<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    labels.collect::<Vec<_>>().join(", ")
}
