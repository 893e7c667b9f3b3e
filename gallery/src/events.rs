use catalog::Photo;
use std::collections::HashMap;

pub const EVENT_SEPARATOR: &str = " - ";

/// Event name of a title: the text before the first `" - "`, or the whole title.
pub fn event_name(title: &str) -> &str {
    match title.split_once(EVENT_SEPARATOR) {
        Some((prefix, _)) if !prefix.is_empty() => prefix,
        _ => title,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventGroup<'a> {
    pub name: &'a str,
    pub photos: Vec<&'a Photo>,
}

/// Photos grouped by event, groups in first-encountered order.
#[derive(Debug, Clone, Default)]
pub struct EventGroups<'a> {
    groups: Vec<EventGroup<'a>>,
    index: HashMap<&'a str, usize>,
}

impl<'a> EventGroups<'a> {
    pub fn get(&self, name: &str) -> Option<&EventGroup<'a>> {
        self.index.get(name).map(|&i| &self.groups[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventGroup<'a>> {
        self.groups.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.groups.iter().map(|g| g.name)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl PartialEq for EventGroups<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}

#[cfg_attr(feature = "trace-spans", tracing::instrument(skip(photos)))]
pub fn group_by_event(photos: &[Photo]) -> EventGroups<'_> {
    let mut out = EventGroups::default();
    for photo in photos {
        let name = event_name(&photo.title);
        match out.index.get(name) {
            Some(&i) => out.groups[i].photos.push(photo),
            None => {
                out.index.insert(name, out.groups.len());
                out.groups.push(EventGroup { name, photos: vec![photo] });
            }
        }
    }
    tracing::debug!(groups = out.groups.len(), photos = photos.len(), "Grouped photos by event");
    out
}
