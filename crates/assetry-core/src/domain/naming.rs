//! Stateless casing helpers used when turning asset names into Swift
//! identifiers.

/// `"HomeIcon"` → `"homeIcon"`. Only the first character changes.
pub fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Type name for a container block: the whole name lowercased.
pub fn type_name(s: &str) -> String {
    s.to_lowercase()
}
