use std::collections::BTreeSet;

/// Session-only set of liked photo ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikedSet(BTreeSet<String>);

impl LikedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, photo_id: &str) -> bool {
        self.0.contains(photo_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Copy of the set with `photo_id` flipped.
    pub fn toggled(&self, photo_id: &str) -> Self {
        let mut next = self.0.clone();
        if !next.remove(photo_id) {
            next.insert(photo_id.to_string());
        }
        Self(next)
    }
}

impl<S: Into<String>> FromIterator<S> for LikedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

pub fn toggle_like(liked: &LikedSet, photo_id: &str) -> LikedSet {
    liked.toggled(photo_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let empty = LikedSet::new();
        let one = toggle_like(&empty, "a");
        assert!(one.contains("a"));
        assert!(!empty.contains("a"));
        let none = toggle_like(&one, "a");
        assert!(none.is_empty());
    }

    #[test]
    fn toggle_twice_is_identity() {
        let set: LikedSet = ["a", "b"].into_iter().collect();
        for id in ["a", "c"] {
            assert_eq!(toggle_like(&toggle_like(&set, id), id), set);
        }
    }

    #[test]
    fn iter_is_sorted() {
        let set: LikedSet = ["b", "a"].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(set.len(), 2);
    }
}
