use super::step::Cursor;
use super::timer::TimerId;

/// Animation session for one demo identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub(crate) demo_id: String,
    pub(crate) cursor: Cursor,
    pub(crate) active: bool,
    /// At most one continuation is outstanding per session
    pub(crate) pending: Option<TimerId>,
}

impl Session {
    /// Fresh session typing from line 0, char 0
    pub(crate) fn started(demo_id: &str) -> Self {
        Self {
            demo_id: demo_id.to_string(),
            cursor: Cursor::START,
            active: true,
            pending: None,
        }
    }

    /// Inactive session waiting on a deferred start
    pub(crate) fn waiting(demo_id: &str, timer: TimerId) -> Self {
        Self {
            demo_id: demo_id.to_string(),
            cursor: Cursor::START,
            active: false,
            pending: Some(timer),
        }
    }

    pub fn demo_id(&self) -> &str {
        &self.demo_id
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
