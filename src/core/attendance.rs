//! Command-level flows for check-in, check-out and the read-only views.
//! Each flow opens a resolver over the injected pool, prints the outcome
//! and writes an audit line.

use crate::config::Config;
use crate::core::resolver::StatusResolver;
use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::db::store::EventStore;
use crate::errors::{AppError, AppResult, RuleViolation};
use crate::models::{Event, LogFilter, PersonName, PersonRef, Status};
use crate::ui::messages::{info, success, violation};
use crate::ui::views::{print_events, print_roster};

/// What a submission ended with. Rule violations are an outcome, not an
/// error, so the caller can show them alongside the current data.
#[derive(Debug)]
pub enum Submission {
    Recorded(Event),
    Rejected(RuleViolation),
}

impl Submission {
    fn from_result(res: AppResult<Event>) -> AppResult<Self> {
        match res {
            Ok(ev) => Ok(Submission::Recorded(ev)),
            Err(AppError::Rule(v)) => Ok(Submission::Rejected(v)),
            Err(e) => Err(e),
        }
    }
}

pub struct AttendanceLogic;

impl AttendanceLogic {
    pub fn check_in(
        pool: &mut DbPool,
        cfg: &Config,
        person: &PersonName,
    ) -> AppResult<Submission> {
        let res = StatusResolver::new(pool, cfg.write_mode).submit_check_in(person);
        let outcome = Submission::from_result(res)?;

        match &outcome {
            Submission::Recorded(ev) => {
                audit_or_warn(
                    &pool.conn,
                    "checkin",
                    &person.to_string(),
                    &format!("record #{}", ev.id),
                );
                success(format!(
                    "{} checked in at {} (id {}).",
                    person,
                    ev.display_time(),
                    ev.id
                ));
            }
            Submission::Rejected(v) => {
                violation(*v);
                print_events("Recent records", &pool.recent(cfg.recent_limit)?);
            }
        }

        Ok(outcome)
    }

    pub fn check_out(
        pool: &mut DbPool,
        cfg: &Config,
        target: &PersonRef,
    ) -> AppResult<Submission> {
        let res = StatusResolver::new(pool, cfg.write_mode).submit_check_out(target);
        let outcome = Submission::from_result(res)?;

        match &outcome {
            Submission::Recorded(ev) => {
                let person = ev.person();
                audit_or_warn(
                    &pool.conn,
                    "checkout",
                    &person.to_string(),
                    &format!("record #{}", ev.id),
                );
                success(format!("{} checked out at {}.", person, ev.display_time()));
            }
            Submission::Rejected(v) => {
                violation(*v);
                let resolver = StatusResolver::new(pool, cfg.write_mode);
                print_roster(&resolver.current_roster()?);
                print_events("Recent records", &resolver.store().recent(cfg.recent_limit)?);
            }
        }

        Ok(outcome)
    }

    pub fn roster(pool: &mut DbPool, cfg: &Config) -> AppResult<()> {
        let roster = StatusResolver::new(pool, cfg.write_mode).current_roster()?;
        print_roster(&roster);
        if !roster.is_empty() {
            info("Check out with: rcheckin checkout --id <Id>");
        }
        Ok(())
    }

    pub fn status(pool: &mut DbPool, cfg: &Config, person: &PersonName) -> AppResult<Status> {
        let status = StatusResolver::new(pool, cfg.write_mode).resolve_status(person)?;
        let count = pool.count_for_person(person)?;
        info(format!(
            "{} is {} ({} records).",
            person,
            status.label(),
            count
        ));
        Ok(status)
    }

    pub fn recent(pool: &mut DbPool, cfg: &Config) -> AppResult<()> {
        print_events("Recent records", &pool.recent(cfg.recent_limit)?);
        Ok(())
    }

    pub fn log(pool: &mut DbPool, filter: &LogFilter, limit: usize) -> AppResult<()> {
        let title = if filter.is_empty() {
            format!("Log (last {limit})")
        } else {
            format!("Filtered log (up to {limit})")
        };
        print_events(&title, &pool.filtered(filter, limit)?);
        Ok(())
    }
}
