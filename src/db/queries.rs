use crate::errors::{AppError, AppResult};
use crate::models::event::{format_timestamp, parse_timestamp};
use crate::models::{Action, Event, LogFilter, NewEvent, PersonName};
use chrono::{DateTime, Local, SubsecRound, TimeDelta};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_RECORDS: &str = "SELECT id, first_name, last_name, action, timestamp FROM records";

pub fn map_row(row: &Row) -> Result<Event> {
    let action_str: String = row.get("action")?;
    let action = Action::from_db_str(&action_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidAction(action_str.clone())),
        )
    })?;

    let ts_str: String = row.get("timestamp")?;
    let timestamp = parse_timestamp(&ts_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(ts_str.clone())),
        )
    })?;

    Ok(Event {
        id: row.get("id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        action,
        timestamp,
    })
}

fn collect(conn: &Connection, sql: &str, params: &[&dyn rusqlite::ToSql]) -> AppResult<Vec<Event>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map(params, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// "Now", but strictly after the newest stored timestamp, so that id
/// order and timestamp order never disagree for defaulted timestamps.
fn next_default_timestamp(conn: &Connection) -> AppResult<DateTime<Local>> {
    let now = Local::now().trunc_subsecs(6);

    let last: Option<String> = conn
        .query_row(
            "SELECT timestamp FROM records ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    match last.as_deref().and_then(parse_timestamp) {
        Some(last) if now <= last => Ok(last + TimeDelta::microseconds(1)),
        _ => Ok(now),
    }
}

pub fn insert_event(conn: &Connection, ev: &NewEvent) -> AppResult<Event> {
    // stored with microsecond precision; the returned event matches a later read
    let timestamp = match ev.timestamp {
        Some(ts) => ts.trunc_subsecs(6),
        None => next_default_timestamp(conn)?,
    };

    conn.execute(
        "INSERT INTO records (first_name, last_name, action, timestamp)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            ev.first_name,
            ev.last_name,
            ev.action.to_db_str(),
            format_timestamp(&timestamp),
        ],
    )?;

    Ok(Event {
        id: conn.last_insert_rowid(),
        first_name: ev.first_name.clone(),
        last_name: ev.last_name.clone(),
        action: ev.action,
        timestamp,
    })
}

pub fn load_event(conn: &Connection, id: i64) -> AppResult<Option<Event>> {
    let sql = format!("{SELECT_RECORDS} WHERE id = ?1");
    let mut stmt = conn.prepare_cached(&sql)?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

pub fn load_latest_for_person(
    conn: &Connection,
    person: &PersonName,
    action: Action,
) -> AppResult<Option<Event>> {
    let sql = format!(
        "{SELECT_RECORDS}
         WHERE first_name = ?1 AND last_name = ?2 AND action = ?3
         ORDER BY id DESC
         LIMIT 1"
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let ev = stmt
        .query_row(
            params![person.first_name, person.last_name, action.to_db_str()],
            map_row,
        )
        .optional()?;
    Ok(ev)
}

pub fn count_for_person(conn: &Connection, person: &PersonName) -> AppResult<usize> {
    let n: i64 = conn.query_row(
        "SELECT COUNT(*) FROM records WHERE first_name = ?1 AND last_name = ?2",
        params![person.first_name, person.last_name],
        |row| row.get(0),
    )?;
    Ok(n as usize)
}

pub fn load_recent(conn: &Connection, limit: usize) -> AppResult<Vec<Event>> {
    let sql = format!("{SELECT_RECORDS} ORDER BY id DESC LIMIT ?1");
    collect(conn, &sql, params![limit as i64])
}

pub fn load_by_action(conn: &Connection, action: Action) -> AppResult<Vec<Event>> {
    let sql = format!("{SELECT_RECORDS} WHERE action = ?1 ORDER BY id ASC");
    collect(conn, &sql, params![action.to_db_str()])
}

pub fn load_all(conn: &Connection) -> AppResult<Vec<Event>> {
    let sql = format!("{SELECT_RECORDS} ORDER BY id DESC");
    collect(conn, &sql, params![])
}

/// Most-recent-first rows matching every filter that is set.
pub fn load_filtered(conn: &Connection, filter: &LogFilter, limit: usize) -> AppResult<Vec<Event>> {
    let mut clauses: Vec<&str> = Vec::new();
    let mut values: Vec<String> = Vec::new();

    if let Some(first) = &filter.first_name {
        clauses.push("first_name = ?");
        values.push(first.clone());
    }
    if let Some(last) = &filter.last_name {
        clauses.push("last_name = ?");
        values.push(last.clone());
    }
    if let Some(action) = filter.action {
        clauses.push("action = ?");
        values.push(action.to_db_str().to_string());
    }

    let where_sql = if clauses.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", clauses.join(" AND "))
    };

    let sql = format!("{SELECT_RECORDS}{where_sql} ORDER BY id DESC LIMIT ?");

    let limit = limit as i64;
    let mut bound: Vec<&dyn rusqlite::ToSql> =
        values.iter().map(|s| s as &dyn rusqlite::ToSql).collect();
    bound.push(&limit);

    collect(conn, &sql, &bound)
}
