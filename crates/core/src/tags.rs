//! Comma-joined category tag strings.
//!
//! Projects carry their categories as a single text column such as
//! `"Drone, Weddings"`. Categories are matched against individual labels,
//! never against substrings of the whole column: `"Drone Racing"` does not
//! carry the tag `"Drone"`.

/// Separator used when joining labels back into a tag string.
pub const TAG_SEPARATOR: &str = ", ";

/// Split a tag string into trimmed, non-empty labels (duplicates kept).
pub fn split_tags(tags: &str) -> impl Iterator<Item = &str> {
    tags.split(',').map(str::trim).filter(|t| !t.is_empty())
}

/// Returns `true` if `tags` contains `tag` as a whole label.
pub fn contains_tag(tags: &str, tag: &str) -> bool {
    let tag = tag.trim();
    !tag.is_empty() && split_tags(tags).any(|t| t == tag)
}

/// Normalise a tag string: trim labels, drop empties and duplicates
/// (first occurrence wins) and join with [`TAG_SEPARATOR`].
pub fn normalize_tags(tags: &str) -> String {
    join_unique(split_tags(tags))
}

/// Replace every whole-label occurrence of `old` with `new`.
///
/// Returns `None` when `old` does not occur, so callers can skip rows that
/// need no rewrite. If `new` is already present the result carries it once.
pub fn rename_tag(tags: &str, old: &str, new: &str) -> Option<String> {
    let old = old.trim();
    let new = new.trim();
    if !contains_tag(tags, old) {
        return None;
    }
    Some(join_unique(
        split_tags(tags).map(|t| if t == old { new } else { t }),
    ))
}

fn join_unique<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for label in labels {
        if !seen.contains(&label) {
            seen.push(label);
        }
    }
    seen.join(TAG_SEPARATOR)
}
