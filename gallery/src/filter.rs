use catalog::Photo;

/// Sentinel category value that matches every photo.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Key(String),
}

impl CategorySelection {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Key(key) => key == category,
        }
    }
}

impl From<&str> for CategorySelection {
    fn from(s: &str) -> Self {
        if s == ALL_CATEGORIES {
            CategorySelection::All
        } else {
            CategorySelection::Key(s.to_string())
        }
    }
}

impl std::fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategorySelection::All => write!(f, "{}", ALL_CATEGORIES),
            CategorySelection::Key(key) => write!(f, "{}", key),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub search_term: String,
    pub category: CategorySelection,
    pub event: Option<String>,
}

impl FilterState {
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty() || self.category != CategorySelection::All || self.event.is_some()
    }

    pub fn matches(&self, photo: &Photo) -> bool {
        Matcher::new(self).matches(photo)
    }
}

// Needles are lowercased once per pass.
struct Matcher<'f> {
    term: String,
    category: &'f CategorySelection,
    event: Option<String>,
}

impl<'f> Matcher<'f> {
    fn new(state: &'f FilterState) -> Self {
        Self {
            term: state.search_term.to_lowercase(),
            category: &state.category,
            event: state.event.as_ref().map(|e| e.to_lowercase()),
        }
    }

    fn matches(&self, photo: &Photo) -> bool {
        let matches_search = contains_ci(&photo.title, &self.term)
            || contains_ci(&photo.description, &self.term)
            || photo.tags.iter().any(|t| contains_ci(t, &self.term));
        if !(matches_search && self.category.matches(&photo.category)) {
            return false;
        }
        match &self.event {
            Some(event) => {
                contains_ci(&photo.title, event) || photo.tags.iter().any(|t| contains_ci(t, event))
            }
            None => true,
        }
    }
}

// ASCII text is compared in place; only non-ASCII haystacks are lowercased.
fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    if lowered_needle.is_empty() {
        return true;
    }
    if haystack.is_ascii() && lowered_needle.is_ascii() {
        let needle = lowered_needle.as_bytes();
        return haystack
            .as_bytes()
            .windows(needle.len())
            .any(|w| w.eq_ignore_ascii_case(needle));
    }
    haystack.to_lowercase().contains(lowered_needle)
}

/// Photos matching `state`, in catalog order.
#[cfg_attr(feature = "trace-spans", tracing::instrument(skip(photos)))]
pub fn filter_photos<'a>(photos: &'a [Photo], state: &FilterState) -> Vec<&'a Photo> {
    let matcher = Matcher::new(state);
    photos.iter().filter(|p| matcher.matches(p)).collect()
}

pub fn filter<'a>(
    photos: &'a [Photo],
    search_term: &str,
    selected_category: &str,
    selected_event: Option<&str>,
) -> Vec<&'a Photo> {
    let state = FilterState {
        search_term: search_term.to_string(),
        category: CategorySelection::from(selected_category),
        event: selected_event.map(str::to_string),
    };
    filter_photos(photos, &state)
}
