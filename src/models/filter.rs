use super::action::Action;

/// Equality filters for the log view. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub action: Option<Action>,
}

impl LogFilter {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.action.is_none()
    }
}
