use catalog::{Catalog, CategoryMap, Photo};
use gallery::{filter, group_by_event, Gallery, Lightbox, Message, ViewMode};

fn photo(id: &str, title: &str, tags: &[&str], category: &str) -> Photo {
    Photo {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{} description", title),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        category: category.to_string(),
        date: "2024-03-15".into(),
        image_url: format!("https://example.com/{}.jpg", id),
    }
}

fn sample_catalog() -> Catalog {
    Catalog::new(
        vec![
            photo("a", "Hackathon - Day 1", &["ai", "ml"], "events"),
            photo("b", "Hackathon - Day 2", &["ai"], "events"),
            photo("c", "Workshop - Intro", &["react"], "workshops"),
        ],
        CategoryMap::new()
            .with("events", "Events")
            .with("workshops", "Workshops")
            .with("team", "Team"),
    )
    .unwrap()
}

fn ids(photos: &[&Photo]) -> Vec<String> {
    photos.iter().map(|p| p.id.clone()).collect()
}

#[test]
fn search_and_grouping_scenario() {
    let catalog = sample_catalog();
    let photos = catalog.photos();

    assert_eq!(ids(&filter(photos, "ai", "all", None)), vec!["a", "b"]);

    let groups = group_by_event(photos);
    assert_eq!(groups.len(), 2);
    assert_eq!(ids(&groups.get("Hackathon").unwrap().photos), vec!["a", "b"]);
    assert_eq!(ids(&groups.get("Workshop").unwrap().photos), vec!["c"]);
}

#[test]
fn initial_state() {
    let catalog = sample_catalog();
    let gallery = Gallery::new(&catalog);
    let stats = gallery.stats();
    assert_eq!(stats.total_photos, 3);
    assert_eq!(stats.events, 2);
    assert_eq!(stats.categories, 3);
    assert_eq!(stats.visible, 3);
    assert_eq!(stats.liked, 0);
    assert_eq!(gallery.view_mode(), ViewMode::Grid);
    assert_eq!(gallery.lightbox(), &Lightbox::Closed);
    assert_eq!(gallery.category_label("workshops"), Some("Workshops"));
}

#[test]
fn open_navigate_and_close() {
    let catalog = sample_catalog();
    let mut gallery = Gallery::new(&catalog);

    gallery.update(Message::OpenPhoto("a".into()));
    assert_eq!(gallery.position().unwrap().to_string(), "1 of 3");

    gallery.update(Message::PrevPhoto);
    assert_eq!(gallery.current_photo().unwrap().id, "c");
    assert_eq!(gallery.lightbox().index(), Some(2));

    gallery.update(Message::NextPhoto);
    gallery.update(Message::NextPhoto);
    assert_eq!(gallery.current_photo().unwrap().id, "b");

    gallery.update(Message::ClosePhoto);
    assert!(gallery.current_photo().is_none());

    gallery.update(Message::NextPhoto);
    assert_eq!(gallery.lightbox(), &Lightbox::Closed);
}

#[test]
fn navigation_stays_within_filtered_subset() {
    let catalog = sample_catalog();
    let mut gallery = Gallery::new(&catalog);
    gallery.update(Message::SearchChanged("ai".into()));
    gallery.update(Message::OpenPhoto("b".into()));
    gallery.update(Message::NextPhoto);
    assert_eq!(gallery.current_photo().unwrap().id, "a");
    assert_eq!(gallery.position().unwrap().total, 2);
}

#[test]
fn filter_change_keeps_open_photo_when_still_visible() {
    let catalog = sample_catalog();
    let mut gallery = Gallery::new(&catalog);
    gallery.update(Message::OpenPhoto("b".into()));
    assert_eq!(gallery.lightbox().index(), Some(1));

    gallery.update(Message::CategorySelected("events".into()));
    assert_eq!(gallery.current_photo().unwrap().id, "b");
    assert_eq!(gallery.lightbox().index(), Some(1));

    gallery.update(Message::SearchChanged("day 2".into()));
    assert_eq!(gallery.lightbox().index(), Some(0));
}

#[test]
fn filter_change_closes_when_open_photo_leaves() {
    let catalog = sample_catalog();
    let mut gallery = Gallery::new(&catalog);
    gallery.update(Message::OpenPhoto("c".into()));
    gallery.update(Message::SelectEvent("Hackathon".into()));
    assert_eq!(gallery.lightbox(), &Lightbox::Closed);
    assert_eq!(ids(&gallery.visible()), vec!["a", "b"]);
}

#[test]
fn clear_filters_restores_everything() {
    let catalog = sample_catalog();
    let mut gallery = Gallery::new(&catalog);
    gallery.update(Message::SearchChanged("nothing matches this".into()));
    assert!(gallery.visible().is_empty());
    assert!(gallery.filter().is_active());

    gallery.update(Message::ClearFilters);
    assert_eq!(gallery.visible().len(), 3);
    assert!(!gallery.filter().is_active());
}

#[test]
fn likes_toggle_per_photo() {
    let catalog = sample_catalog();
    let mut gallery = Gallery::new(&catalog);
    gallery.update(Message::ToggleLike("a".into()));
    gallery.update(Message::ToggleLike("c".into()));
    assert!(gallery.is_liked("a"));
    assert!(!gallery.is_liked("b"));
    assert_eq!(gallery.stats().liked, 2);

    gallery.update(Message::ToggleLike("a".into()));
    assert!(!gallery.is_liked("a"));
    assert_eq!(gallery.liked().iter().collect::<Vec<_>>(), vec!["c"]);
}

#[test]
fn event_groups_ignore_filters() {
    let catalog = sample_catalog();
    let mut gallery = Gallery::new(&catalog);
    gallery.update(Message::SearchChanged("react".into()));
    assert_eq!(gallery.event_groups().len(), 2);
    assert_eq!(
        gallery.event_groups().names().collect::<Vec<_>>(),
        vec!["Hackathon", "Workshop"]
    );
}

#[test]
fn open_unknown_photo_is_ignored() {
    let catalog = sample_catalog();
    let mut gallery = Gallery::new(&catalog);
    gallery.update(Message::OpenPhoto("zzz".into()));
    assert_eq!(gallery.lightbox(), &Lightbox::Closed);
    assert!(gallery.current_photo().is_none());
    assert!(gallery.position().is_none());

    gallery.update(Message::OpenPhoto("b".into()));
    gallery.update(Message::OpenPhoto("zzz".into()));
    assert_eq!(gallery.current_photo().unwrap().id, "b");
    assert_eq!(gallery.position().unwrap().to_string(), "2 of 3");
}

#[test]
fn open_hidden_photo_has_no_position_until_navigation() {
    let catalog = sample_catalog();
    let mut gallery = Gallery::new(&catalog);
    gallery.update(Message::SearchChanged("ai".into()));
    gallery.update(Message::OpenPhoto("c".into()));

    assert_eq!(gallery.current_photo().unwrap().id, "c");
    assert_eq!(gallery.lightbox().index(), Some(0));
    assert!(gallery.position().is_none());

    gallery.update(Message::NextPhoto);
    assert_eq!(gallery.current_photo().unwrap().id, "b");
    assert_eq!(gallery.position().unwrap().to_string(), "2 of 2");
}
