use crate::events::{group_by_event, EventGroups};
use crate::filter::{filter_photos, CategorySelection, FilterState};
use crate::lightbox::{Direction, Lightbox, Position};
use crate::likes::{toggle_like, LikedSet};
use catalog::{Catalog, Photo};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    Masonry,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::Grid, ViewMode::Masonry];

    /// `grid|masonry`, for usage and error text.
    pub fn choices() -> String {
        Self::ALL.map(|m| m.to_string()).join("|")
    }

    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::Masonry,
            ViewMode::Masonry => ViewMode::Grid,
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ViewMode::Grid => "grid",
            ViewMode::Masonry => "masonry",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown view mode: {0}")]
pub struct ParseViewModeError(String);

impl std::str::FromStr for ViewMode {
    type Err = ParseViewModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "masonry" => Ok(ViewMode::Masonry),
            other => Err(ParseViewModeError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    SearchChanged(String),
    CategorySelected(CategorySelection),
    SelectEvent(String),
    ClearEventFilter,
    ClearFilters,
    ViewModeChanged(ViewMode),
    ToggleViewMode,
    OpenPhoto(String),
    ClosePhoto,
    EscapePressed,
    NextPhoto,
    PrevPhoto,
    ToggleLike(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryStats {
    pub total_photos: usize,
    pub events: usize,
    pub categories: usize,
    pub visible: usize,
    pub liked: usize,
}

/// Everything the page needs to render, driven only through [`Gallery::update`].
///
/// Event groups are computed once from the full catalog; the visible subset is
/// recomputed from the filter state on every read.
pub struct Gallery<'a> {
    catalog: &'a Catalog,
    events: EventGroups<'a>,
    filter: FilterState,
    lightbox: Lightbox,
    liked: LikedSet,
    view_mode: ViewMode,
}

impl<'a> Gallery<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            events: group_by_event(catalog.photos()),
            filter: FilterState::default(),
            lightbox: Lightbox::Closed,
            liked: LikedSet::new(),
            view_mode: ViewMode::default(),
        }
    }

    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    #[cfg_attr(feature = "trace-spans", tracing::instrument(skip(self)))]
    pub fn update(&mut self, message: Message) {
        tracing::debug!(?message, "Gallery update");
        match message {
            Message::SearchChanged(term) => {
                self.filter.search_term = term;
                self.reconcile_lightbox();
            }
            Message::CategorySelected(category) => {
                self.filter.category = category;
                self.reconcile_lightbox();
            }
            Message::SelectEvent(name) => {
                self.filter = FilterState {
                    search_term: String::new(),
                    category: CategorySelection::All,
                    event: Some(name),
                };
                self.reconcile_lightbox();
            }
            Message::ClearEventFilter => {
                self.filter.event = None;
                self.reconcile_lightbox();
            }
            Message::ClearFilters => {
                self.filter = FilterState::default();
                self.reconcile_lightbox();
            }
            Message::ViewModeChanged(mode) => {
                self.view_mode = mode;
            }
            Message::ToggleViewMode => {
                self.view_mode = self.view_mode.toggle();
            }
            Message::OpenPhoto(id) => {
                if self.catalog.photo(&id).is_none() {
                    tracing::warn!(photo_id = %id, "Ignoring open of unknown photo");
                    return;
                }
                let visible = self.visible();
                self.lightbox = Lightbox::open(&id, &visible);
            }
            Message::ClosePhoto | Message::EscapePressed => {
                self.lightbox = self.lightbox.close();
            }
            Message::NextPhoto => self.navigate(Direction::Next),
            Message::PrevPhoto => self.navigate(Direction::Prev),
            Message::ToggleLike(id) => {
                self.liked = toggle_like(&self.liked, &id);
            }
        }
    }

    fn navigate(&mut self, direction: Direction) {
        let visible = self.visible();
        if visible.len() < 2 {
            return;
        }
        self.lightbox = self.lightbox.navigate(direction, &visible);
    }

    fn reconcile_lightbox(&mut self) {
        if self.lightbox.is_open() {
            let visible = self.visible();
            self.lightbox = self.lightbox.reconcile(&visible);
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn liked(&self) -> &LikedSet {
        &self.liked
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn event_groups(&self) -> &EventGroups<'a> {
        &self.events
    }

    pub fn visible(&self) -> Vec<&'a Photo> {
        filter_photos(self.catalog.photos(), &self.filter)
    }

    pub fn current_photo(&self) -> Option<&'a Photo> {
        let id = self.lightbox.photo_id()?;
        self.catalog.photo(id)
    }

    pub fn position(&self) -> Option<Position> {
        self.lightbox.position(&self.visible())
    }

    /// Prev/next controls are only offered with more than one visible photo.
    pub fn show_navigation(&self) -> bool {
        self.visible().len() > 1
    }

    pub fn is_liked(&self, photo_id: &str) -> bool {
        self.liked.contains(photo_id)
    }

    pub fn category_label(&self, key: &str) -> Option<&'a str> {
        self.catalog.categories().label(key)
    }

    pub fn stats(&self) -> GalleryStats {
        GalleryStats {
            total_photos: self.catalog.len(),
            events: self.events.len(),
            categories: self.catalog.categories().len(),
            visible: self.visible().len(),
            liked: self.liked.len(),
        }
    }
}
