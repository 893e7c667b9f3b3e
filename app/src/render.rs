use catalog::Photo;
use gallery::Gallery;

const TAG_PREVIEW: usize = 3;

pub fn found_line(n: usize) -> String {
    format!("{} photo{} found", n, if n == 1 { "" } else { "s" })
}

pub fn photo_line(gallery: &Gallery<'_>, photo: &Photo) -> String {
    let mut line = format!("{} - {}", photo.id, photo.title);
    if gallery.is_liked(&photo.id) {
        line.push_str(" (liked)");
    }
    line
}

fn tags_line(photo: &Photo) -> String {
    let (shown, more) = photo.tag_preview(TAG_PREVIEW);
    let mut s = shown.join(", ");
    if more > 0 {
        s.push_str(&format!(" +{} more", more));
    }
    s
}

/// One-line summary of the lightbox, or `closed`.
pub fn lightbox_line(gallery: &Gallery<'_>) -> String {
    let Some(photo) = gallery.current_photo() else {
        return "closed".to_string();
    };
    let label = gallery
        .category_label(&photo.category)
        .unwrap_or(photo.category.as_str());
    let mut line = String::new();
    if let Some(pos) = gallery.position() {
        if gallery.show_navigation() {
            line.push_str(&format!("[{}] ", pos));
        }
    }
    line.push_str(&format!("{} | {} | {}", photo.title, label, photo.display_date()));
    if !photo.tags.is_empty() {
        line.push_str(&format!(" | tags: {}", tags_line(photo)));
    }
    if gallery.is_liked(&photo.id) {
        line.push_str(" | liked");
    }
    line
}

pub fn status_lines(gallery: &Gallery<'_>) -> Vec<String> {
    let stats = gallery.stats();
    let filter = gallery.filter();
    vec![
        format!("Total photos: {}", stats.total_photos),
        format!("Events: {}", stats.events),
        format!("Categories: {}", stats.categories),
        format!("Visible: {}", stats.visible),
        format!("Liked: {}", stats.liked),
        format!("Search: {:?}", filter.search_term),
        format!("Category: {}", filter.category),
        format!("Event: {}", filter.event.as_deref().unwrap_or("-")),
        format!("View: {}", gallery.view_mode()),
    ]
}
