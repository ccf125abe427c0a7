pub mod action;
pub mod event;
pub mod filter;
pub mod person;

pub use action::Action;
pub use event::{Event, NewEvent};
pub use filter::LogFilter;
pub use person::{PersonName, PersonRef, RosterEntry, Status};
