//! Text views of the event log and the roster.

use crate::models::{Event, RosterEntry};
use crate::utils::colors::{colorize_action, colorize_optional};
use crate::utils::formatting::since;
use crate::utils::table::Table;
use chrono::Local;

pub fn events_table(events: &[Event]) -> String {
    let mut table = Table::new(vec!["Id", "First Name", "Last Name", "Action", "Timestamp"]);

    for ev in events {
        table.add_row(vec![
            ev.id.to_string(),
            ev.first_name.clone(),
            ev.last_name.clone(),
            colorize_action(ev.action),
            ev.display_time(),
        ]);
    }

    table.render()
}

pub fn roster_table(roster: &[RosterEntry]) -> String {
    let now = Local::now();
    let mut table = Table::new(vec!["Id", "Name", "Checked in at", "For"]);

    for entry in roster {
        table.add_row(vec![
            entry.event_id.to_string(),
            entry.person.to_string(),
            entry.since.format("%Y-%m-%d %H:%M:%S").to_string(),
            colorize_optional(&since(&entry.since, &now)),
        ]);
    }

    table.render()
}

pub fn print_events(title: &str, events: &[Event]) {
    super::messages::header(title);
    if events.is_empty() {
        println!("No records.");
    } else {
        print!("{}", events_table(events));
    }
}

pub fn print_roster(roster: &[RosterEntry]) {
    super::messages::header("Currently checked in");
    if roster.is_empty() {
        println!("Nobody is checked in.");
    } else {
        print!("{}", roster_table(roster));
    }
}
