//! Browsing logic for the photo gallery page: filtering, event grouping,
//! lightbox navigation and likes, all as plain values over a [`catalog::Catalog`].

pub mod events;
pub mod filter;
pub mod lightbox;
pub mod likes;
pub mod state;

pub use events::{event_name, group_by_event, EventGroup, EventGroups};
pub use filter::{filter, filter_photos, CategorySelection, FilterState, ALL_CATEGORIES};
pub use lightbox::{Direction, Lightbox, Position};
pub use likes::{toggle_like, LikedSet};
pub use state::{Gallery, GalleryStats, Message, ParseViewModeError, ViewMode};
