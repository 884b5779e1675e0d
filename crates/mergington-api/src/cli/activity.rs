//! Activity listing command.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use mergington_types::activity::Activity;

use crate::state::AppState;

/// Print the seeded directory as a table, or as the `/activities` JSON.
pub async fn list_activities(state: &AppState, json: bool) -> Result<()> {
    let directory = state.activity_service.list_activities().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&directory)?);
        return Ok(());
    }

    if directory.is_empty() {
        println!();
        println!(
            "  {} No activities configured. Check the {} setting.",
            style("i").blue().bold(),
            style("seed_file").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Activity").fg(Color::White),
        Cell::new("Schedule").fg(Color::White),
        Cell::new("Enrolled").fg(Color::White),
        Cell::new("Spots Left").fg(Color::White),
    ]);

    for activity in directory.iter() {
        table.add_row(vec![
            Cell::new(&activity.name).fg(Color::Cyan),
            Cell::new(&activity.schedule),
            Cell::new(enrolled(activity)),
            spots_cell(activity),
        ]);
    }

    println!();
    println!("{table}");
    println!(
        "  {} activities, {} students enrolled",
        style(directory.len()).bold(),
        style(directory.iter().map(|a| a.participants.len()).sum::<usize>()).bold()
    );
    println!();

    Ok(())
}

fn enrolled(activity: &Activity) -> String {
    format!("{}/{}", activity.participants.len(), activity.max_participants)
}

fn spots_cell(activity: &Activity) -> Cell {
    let spots = activity.spots_left();
    let color = match spots {
        0 => Color::Red,
        1..=3 => Color::Yellow,
        _ => Color::Green,
    };
    Cell::new(spots).fg(color)
}
