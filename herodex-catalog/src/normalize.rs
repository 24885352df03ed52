/// Canonicalizes a raw name for case- and punctuation-insensitive comparison.
///
/// Lower-cases and keeps only letters and digits: whitespace, hyphens and any
/// other punctuation are dropped. The same function runs on both the insert
/// path and the lookup path, so "Spider-Man", "SPIDERMAN" and "spider man"
/// all produce the key `spiderman`. Empty or whitespace-only input produces
/// an empty key, which the index never stores.
pub fn normalize_name(raw: &str) -> String {
    let mut key = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_alphanumeric() {
            key.extend(ch.to_lowercase());
        }
    }
    key
}
