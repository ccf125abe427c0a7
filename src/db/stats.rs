use crate::db::pool::DbPool;
use crate::models::event::parse_timestamp;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::{Connection, OptionalExtension};
use std::fs;

pub struct RecordCounts {
    pub total: i64,
    pub check_ins: i64,
    /// distinct (first name, last name) pairs
    pub people: i64,
}

pub fn record_counts(conn: &Connection) -> rusqlite::Result<RecordCounts> {
    conn.query_row(
        "SELECT COUNT(*),
                COALESCE(SUM(action = 'Check-In'), 0),
                (SELECT COUNT(*) FROM (SELECT DISTINCT first_name, last_name FROM records))
         FROM records",
        [],
        |row| {
            Ok(RecordCounts {
                total: row.get(0)?,
                check_ins: row.get(1)?,
                people: row.get(2)?,
            })
        },
    )
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) RECORD COUNTS
    //
    let counts = record_counts(&pool.conn)?;
    let (total, check_ins, people) = (counts.total, counts.check_ins, counts.people);

    println!("{}• Records:{} {}{}{}", CYAN, RESET, GREEN, total, RESET);
    println!("    check-ins:  {}", check_ins);
    println!("    check-outs: {}", total - check_ins);
    println!("{}• People:{} {}", CYAN, RESET, people);

    //
    // 3) TIME SPAN (by insertion order)
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT timestamp FROM records ORDER BY id ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT timestamp FROM records ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt = |v: Option<String>| match v.as_deref().and_then(parse_timestamp) {
        Some(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
        None => format!("{GREY}--{RESET}"),
    };

    println!("{}• Span:{}", CYAN, RESET);
    println!("    from: {}", fmt(first));
    println!("    to:   {}", fmt(last));

    println!();
    Ok(())
}
