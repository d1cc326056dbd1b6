use serde::{Deserialize, Serialize};

use crate::model::ids::UnitId;

/// Persisted frontier position: `{"currentLessonIndex": n}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    current_lesson_index: usize,
}

impl Progress {
    #[must_use]
    pub fn new(current_lesson_index: usize) -> Self {
        Self {
            current_lesson_index,
        }
    }

    /// Index of the frontier unit (the furthest unlocked one).
    #[must_use]
    pub fn frontier(&self) -> usize {
        self.current_lesson_index
    }

    /// Move the frontier forward by one, never beyond `last_index`.
    ///
    /// Returns true when the frontier moved.
    pub(crate) fn advance(&mut self, last_index: usize) -> bool {
        if self.current_lesson_index < last_index {
            self.current_lesson_index += 1;
            true
        } else {
            false
        }
    }

    /// Pull a frontier read from storage back inside the plan.
    #[must_use]
    pub(crate) fn clamped(self, last_index: Option<usize>) -> Self {
        let limit = last_index.unwrap_or(0);
        Self::new(self.current_lesson_index.min(limit))
    }
}

/// Append-only set of finished units, kept in completion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletedLessons(Vec<UnitId>);

impl CompletedLessons {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build from stored ids, dropping repeats.
    #[must_use]
    pub fn from_ids(ids: impl IntoIterator<Item = UnitId>) -> Self {
        let mut completed = Self::new();
        for id in ids {
            completed.insert(id);
        }
        completed
    }

    /// Returns true if the id was not present before.
    pub fn insert(&mut self, id: UnitId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.0.push(id);
        true
    }

    #[must_use]
    pub fn contains(&self, id: &UnitId) -> bool {
        self.0.iter().any(|existing| existing == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnitId> {
        self.0.iter()
    }
}

/// Display status of a unit, derived from progress and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitStatus {
    Completed,
    Current,
    Locked,
    Reviewable,
}

impl UnitStatus {
    /// Completion wins over position: a finished unit stays reviewable at any index.
    #[must_use]
    pub fn derive(
        index: usize,
        unit_id: &UnitId,
        frontier: usize,
        completed: &CompletedLessons,
    ) -> Self {
        if completed.contains(unit_id) {
            Self::Completed
        } else if index == frontier {
            Self::Current
        } else if index > frontier {
            Self::Locked
        } else {
            Self::Reviewable
        }
    }

    #[must_use]
    pub fn is_locked(self) -> bool {
        matches!(self, Self::Locked)
    }
}
