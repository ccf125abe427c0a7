//! Append-only event store.
//!
//! The resolver only talks to this trait; `DbPool` is the SQLite
//! implementation used by the CLI and the tests.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::{Action, Event, LogFilter, NewEvent, PersonName};

/// Latest event of each action for one person.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatestEvents {
    pub last_check_in: Option<Event>,
    pub last_check_out: Option<Event>,
}

pub trait EventStore {
    /// Persist a new event. Purely mechanical: no business rules here.
    fn append(&mut self, event: NewEvent) -> AppResult<Event>;

    fn find(&self, id: i64) -> AppResult<Option<Event>>;

    fn most_recent_for_person(&self, person: &PersonName) -> AppResult<LatestEvents>;

    fn count_for_person(&self, person: &PersonName) -> AppResult<usize>;

    /// Most-recent-first, at most `limit` rows.
    fn recent(&self, limit: usize) -> AppResult<Vec<Event>>;

    fn all_by_action(&self, action: Action) -> AppResult<Vec<Event>>;

    /// Most-recent-first, at most `limit` rows.
    fn filtered(&self, filter: &LogFilter, limit: usize) -> AppResult<Vec<Event>>;

    /// Every event, most-recent-first.
    fn all(&self) -> AppResult<Vec<Event>>;

    /// Run a read-then-write sequence so that no other writer can slip in
    /// between. The default gives no isolation at all.
    fn guarded<T, F>(&mut self, f: F) -> AppResult<T>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> AppResult<T>,
    {
        f(self)
    }
}

impl EventStore for DbPool {
    fn append(&mut self, event: NewEvent) -> AppResult<Event> {
        queries::insert_event(&self.conn, &event)
    }

    fn find(&self, id: i64) -> AppResult<Option<Event>> {
        queries::load_event(&self.conn, id)
    }

    fn most_recent_for_person(&self, person: &PersonName) -> AppResult<LatestEvents> {
        Ok(LatestEvents {
            last_check_in: queries::load_latest_for_person(&self.conn, person, Action::CheckIn)?,
            last_check_out: queries::load_latest_for_person(&self.conn, person, Action::CheckOut)?,
        })
    }

    fn count_for_person(&self, person: &PersonName) -> AppResult<usize> {
        queries::count_for_person(&self.conn, person)
    }

    fn recent(&self, limit: usize) -> AppResult<Vec<Event>> {
        queries::load_recent(&self.conn, limit)
    }

    fn all_by_action(&self, action: Action) -> AppResult<Vec<Event>> {
        queries::load_by_action(&self.conn, action)
    }

    fn filtered(&self, filter: &LogFilter, limit: usize) -> AppResult<Vec<Event>> {
        queries::load_filtered(&self.conn, filter, limit)
    }

    fn all(&self) -> AppResult<Vec<Event>> {
        queries::load_all(&self.conn)
    }

    /// `BEGIN IMMEDIATE` takes the database write lock up front, so two
    /// processes submitting for the same person are serialized.
    fn guarded<T, F>(&mut self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut Self) -> AppResult<T>,
    {
        self.conn.execute_batch("BEGIN IMMEDIATE;")?;

        let outcome = f(self).and_then(|value| {
            self.conn.execute_batch("COMMIT;")?;
            Ok(value)
        });

        // a failed COMMIT leaves the transaction open as well
        if outcome.is_err()
            && !self.conn.is_autocommit()
            && let Err(rollback) = self.conn.execute_batch("ROLLBACK;")
        {
            crate::ui::messages::warning(format!("Rollback failed: {}", rollback));
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn at(h: u32, m: u32) -> chrono::DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 10, h, m, 0).unwrap()
    }

    fn seed(pool: &mut DbPool) {
        let alice = PersonName::new("Alice", "Smith");
        let bob = PersonName::new("Bob", "Jones");
        pool.append(NewEvent::new(&alice, Action::CheckIn).at(at(8, 0)))
            .unwrap();
        pool.append(NewEvent::new(&bob, Action::CheckIn).at(at(8, 30)))
            .unwrap();
        pool.append(NewEvent::new(&alice, Action::CheckOut).at(at(12, 0)))
            .unwrap();
        pool.append(NewEvent::new(&alice, Action::CheckIn).at(at(13, 0)))
            .unwrap();
    }

    #[test]
    fn append_assigns_increasing_ids_and_default_timestamp() {
        let mut pool = DbPool::open_in_memory().unwrap();
        let p = PersonName::new("John", "Doe");

        let a = pool.append(NewEvent::new(&p, Action::CheckIn)).unwrap();
        let b = pool.append(NewEvent::new(&p, Action::CheckOut)).unwrap();

        assert!(b.id > a.id);
        assert!(b.timestamp >= a.timestamp);
        assert_eq!(pool.find(a.id).unwrap(), Some(a));
    }

    #[test]
    fn most_recent_for_person_picks_latest_of_each_action() {
        let mut pool = DbPool::open_in_memory().unwrap();
        seed(&mut pool);

        let latest = pool
            .most_recent_for_person(&PersonName::new("Alice", "Smith"))
            .unwrap();
        assert_eq!(latest.last_check_in.unwrap().timestamp, at(13, 0));
        assert_eq!(latest.last_check_out.unwrap().timestamp, at(12, 0));

        let nobody = pool
            .most_recent_for_person(&PersonName::new("Carol", "White"))
            .unwrap();
        assert_eq!(nobody, LatestEvents::default());
    }

    #[test]
    fn recent_and_all_are_most_recent_first() {
        let mut pool = DbPool::open_in_memory().unwrap();
        seed(&mut pool);

        let recent = pool.recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert!(recent[0].id > recent[1].id);
        assert_eq!(recent[0].timestamp, at(13, 0));

        let all = pool.all().unwrap();
        assert_eq!(all.len(), 4);
        assert!(all.windows(2).all(|w| w[0].id > w[1].id));
    }

    #[test]
    fn filtered_combines_equality_filters() {
        let mut pool = DbPool::open_in_memory().unwrap();
        seed(&mut pool);

        let filter = LogFilter {
            first_name: Some("Alice".into()),
            last_name: None,
            action: Some(Action::CheckIn),
        };
        let rows = pool.filtered(&filter, 20).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|e| e.first_name == "Alice" && e.action.is_check_in()));

        let limited = pool.filtered(&LogFilter::default(), 3).unwrap();
        assert_eq!(limited.len(), 3);
    }

    #[test]
    fn guarded_rolls_back_on_error() {
        let mut pool = DbPool::open_in_memory().unwrap();
        let p = PersonName::new("John", "Doe");

        let res: AppResult<()> = pool.guarded(|store| {
            store.append(NewEvent::new(&p, Action::CheckIn))?;
            Err(crate::errors::AppError::EventNotFound(42))
        });

        assert!(res.is_err());
        assert_eq!(pool.count_for_person(&p).unwrap(), 0);
    }

    #[test]
    fn failed_commit_leaves_no_open_transaction() {
        let mut pool = DbPool::open_in_memory().unwrap();
        let p = PersonName::new("John", "Doe");

        // a deferred foreign key violation only surfaces at COMMIT
        pool.conn
            .execute_batch(
                "PRAGMA foreign_keys = ON;
                 CREATE TABLE parent (id INTEGER PRIMARY KEY);
                 CREATE TABLE child (
                     parent_id INTEGER REFERENCES parent(id) DEFERRABLE INITIALLY DEFERRED
                 );",
            )
            .unwrap();

        let res: AppResult<()> = pool.guarded(|store| {
            store.append(NewEvent::new(&p, Action::CheckIn))?;
            store.conn.execute("INSERT INTO child VALUES (7)", [])?;
            Ok(())
        });

        assert!(res.is_err());
        assert!(pool.conn.is_autocommit());
        assert_eq!(pool.count_for_person(&p).unwrap(), 0);

        // the pool stays usable for the next guarded write
        let ev = pool
            .guarded(|store| store.append(NewEvent::new(&p, Action::CheckIn)))
            .unwrap();
        assert_eq!(ev.action, Action::CheckIn);
    }
}
