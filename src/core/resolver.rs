//! Check-in / check-out status logic.
//!
//! Status is derived from the event log alone: the latest check-in and
//! check-out of a person are compared by timestamp, and a tie counts as
//! "checked out".

use crate::config::WriteMode;
use crate::db::store::{EventStore, LatestEvents};
use crate::errors::{AppError, AppResult, RuleViolation};
use crate::models::{Action, Event, NewEvent, PersonName, PersonRef, RosterEntry, Status};
use std::collections::HashMap;

/// Decision table over the latest check-in / check-out of one person.
pub fn decide(latest: &LatestEvents) -> Status {
    match (&latest.last_check_in, &latest.last_check_out) {
        (None, None) => Status::Unknown,
        (Some(_), None) => Status::CheckedIn,
        (None, Some(_)) => Status::CheckedOut,
        (Some(cin), Some(cout)) => {
            if cin.timestamp > cout.timestamp {
                Status::CheckedIn
            } else {
                Status::CheckedOut
            }
        }
    }
}

/// Everybody whose latest check-in is strictly later than their latest
/// check-out. One pass over each slice; result sorted by name.
pub fn build_roster(check_ins: &[Event], check_outs: &[Event]) -> Vec<RosterEntry> {
    let mut latest: HashMap<PersonName, LatestEvents> = HashMap::new();

    for ev in check_ins.iter().chain(check_outs) {
        let slot = latest.entry(ev.person()).or_default();
        let current = match ev.action {
            Action::CheckIn => &mut slot.last_check_in,
            Action::CheckOut => &mut slot.last_check_out,
        };
        // ids are monotonic: the highest id is the most recent event
        if current.as_ref().is_none_or(|c| ev.id > c.id) {
            *current = Some(ev.clone());
        }
    }

    let mut roster: Vec<RosterEntry> = latest
        .into_iter()
        .filter(|(_, l)| decide(l) == Status::CheckedIn)
        .filter_map(|(person, l)| {
            l.last_check_in.map(|cin| RosterEntry {
                person,
                event_id: cin.id,
                since: cin.timestamp,
            })
        })
        .collect();

    roster.sort_by(|a, b| a.person.cmp(&b.person));
    roster
}

/// Gatekeeper for writes to the event log.
///
/// In [`WriteMode::Relaxed`] the status read and the append are two
/// independent statements, so two concurrent check-ins for the same
/// person can both succeed. [`WriteMode::Guarded`] runs them inside
/// [`EventStore::guarded`].
pub struct StatusResolver<'a, S: EventStore> {
    store: &'a mut S,
    mode: WriteMode,
}

impl<'a, S: EventStore> StatusResolver<'a, S> {
    pub fn new(store: &'a mut S, mode: WriteMode) -> Self {
        Self { store, mode }
    }

    pub fn store(&self) -> &S {
        &*self.store
    }

    pub fn resolve_status(&self, person: &PersonName) -> AppResult<Status> {
        resolve_in(&*self.store, person)
    }

    pub fn submit_check_in(&mut self, person: &PersonName) -> AppResult<Event> {
        self.write(|store| {
            if resolve_in(store, person)? == Status::CheckedIn {
                return Err(RuleViolation::AlreadyCheckedIn.into());
            }
            store.append(NewEvent::new(person, Action::CheckIn))
        })
    }

    pub fn submit_check_out(&mut self, target: &PersonRef) -> AppResult<Event> {
        self.write(|store| {
            let person = match target {
                PersonRef::ById(id) => store
                    .find(*id)?
                    .ok_or(AppError::EventNotFound(*id))?
                    .person(),
                PersonRef::ByName(p) => p.clone(),
            };

            if resolve_in(store, &person)? != Status::CheckedIn {
                return Err(RuleViolation::NotCheckedIn.into());
            }
            store.append(NewEvent::new(&person, Action::CheckOut))
        })
    }

    pub fn current_roster(&self) -> AppResult<Vec<RosterEntry>> {
        let check_ins = self.store.all_by_action(Action::CheckIn)?;
        let check_outs = self.store.all_by_action(Action::CheckOut)?;
        Ok(build_roster(&check_ins, &check_outs))
    }

    fn write<T, F>(&mut self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut S) -> AppResult<T>,
    {
        match self.mode {
            WriteMode::Relaxed => f(self.store),
            WriteMode::Guarded => self.store.guarded(f),
        }
    }
}

fn resolve_in<S: EventStore>(store: &S, person: &PersonName) -> AppResult<Status> {
    Ok(decide(&store.most_recent_for_person(person)?))
}
