use crate::config::Config;
use crate::core::attendance::AttendanceLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::PersonRef;
use crate::utils::input;

// Names are validated before the database is opened.

pub fn checkin(cfg: &Config, first_name: &str, last_name: &str) -> AppResult<()> {
    let person = input::person(first_name, last_name)?;
    let mut pool = DbPool::open(cfg)?;
    AttendanceLogic::check_in(&mut pool, cfg, &person)?;
    Ok(())
}

pub fn checkout(
    cfg: &Config,
    first_name: Option<&str>,
    last_name: Option<&str>,
    id: Option<i64>,
) -> AppResult<()> {
    let target = match id {
        Some(id) => PersonRef::ById(id),
        None => PersonRef::ByName(input::person(
            first_name.unwrap_or_default(),
            last_name.unwrap_or_default(),
        )?),
    };
    let mut pool = DbPool::open(cfg)?;
    AttendanceLogic::check_out(&mut pool, cfg, &target)?;
    Ok(())
}

pub fn roster(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::open(cfg)?;
    AttendanceLogic::roster(&mut pool, cfg)
}

pub fn status(cfg: &Config, first_name: &str, last_name: &str) -> AppResult<()> {
    let person = input::person(first_name, last_name)?;
    let mut pool = DbPool::open(cfg)?;
    AttendanceLogic::status(&mut pool, cfg, &person)?;
    Ok(())
}

pub fn recent(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::open(cfg)?;
    AttendanceLogic::recent(&mut pool, cfg)
}

pub fn log(
    cfg: &Config,
    first_name: Option<&String>,
    last_name: Option<&String>,
    action: Option<&String>,
    limit: Option<usize>,
) -> AppResult<()> {
    let filter = input::log_filter(first_name, last_name, action)?;
    let limit = input::limit(limit, cfg.log_limit)?;
    let mut pool = DbPool::open(cfg)?;
    AttendanceLogic::log(&mut pool, &filter, limit)
}
