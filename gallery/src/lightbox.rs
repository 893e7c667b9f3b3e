//! Lightbox navigation over the visible subset.
//!
//! `Lightbox` is a plain value: every transition takes the current subset and
//! returns the next state. The index always refers to a member of the subset the
//! transition was computed against. A photo opened while hidden by the filter sits
//! at index 0 with no [`Position`] until the next step lands on a visible photo.

use catalog::Photo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open { photo_id: String, index: usize },
}

/// 1-based position of the open photo, rendered as `3 of 10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub current: usize,
    pub total: usize,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.current, self.total)
    }
}

fn position_of(subset: &[&Photo], photo_id: &str) -> Option<usize> {
    subset.iter().position(|p| p.id == photo_id)
}

impl Lightbox {
    /// Opens on `photo_id`. A photo absent from `subset` opens at index 0.
    pub fn open(photo_id: &str, subset: &[&Photo]) -> Self {
        let index = match position_of(subset, photo_id) {
            Some(i) => i,
            None => {
                tracing::warn!(photo_id, "Opened photo is not in the visible subset");
                0
            }
        };
        Lightbox::Open { photo_id: photo_id.to_string(), index }
    }

    pub fn close(&self) -> Self {
        Lightbox::Closed
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open { .. })
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Lightbox::Open { index, .. } => Some(*index),
            Lightbox::Closed => None,
        }
    }

    pub fn photo_id(&self) -> Option<&str> {
        match self {
            Lightbox::Open { photo_id, .. } => Some(photo_id),
            Lightbox::Closed => None,
        }
    }

    pub fn next(&self, subset: &[&Photo]) -> Self {
        self.navigate(Direction::Next, subset)
    }

    pub fn prev(&self, subset: &[&Photo]) -> Self {
        self.navigate(Direction::Prev, subset)
    }

    /// Cyclic step. Closed or empty-subset navigation leaves the state unchanged.
    pub fn navigate(&self, direction: Direction, subset: &[&Photo]) -> Self {
        let Lightbox::Open { index, .. } = self else {
            return self.clone();
        };
        let len = subset.len();
        if len == 0 {
            return self.clone();
        }
        let index = (*index).min(len - 1);
        let new_index = match direction {
            Direction::Next => (index + 1) % len,
            Direction::Prev => (index + len - 1) % len,
        };
        tracing::debug!(?direction, from = index, to = new_index, len, "Lightbox navigation");
        Lightbox::Open { photo_id: subset[new_index].id.clone(), index: new_index }
    }

    /// Re-seats the lightbox after the subset changed. The open photo keeps being
    /// shown at its new position; if it left the subset the lightbox closes.
    pub fn reconcile(&self, subset: &[&Photo]) -> Self {
        let Lightbox::Open { photo_id, .. } = self else {
            return Lightbox::Closed;
        };
        match position_of(subset, photo_id) {
            Some(index) => Lightbox::Open { photo_id: photo_id.clone(), index },
            None => {
                tracing::debug!(%photo_id, "Open photo filtered out, closing lightbox");
                Lightbox::Closed
            }
        }
    }

    /// Position of the open photo, or `None` when the photo at `index` is not
    /// the one on display (it was opened while hidden by the filter).
    pub fn position(&self, subset: &[&Photo]) -> Option<Position> {
        let Lightbox::Open { photo_id, index } = self else {
            return None;
        };
        let photo = subset.get(*index)?;
        (photo.id == *photo_id).then(|| Position { current: index + 1, total: subset.len() })
    }
}
