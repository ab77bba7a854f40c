pub mod duration;

pub use duration::*;

/// Canonical text form used for matching: trimmed and lowercased. Entities
/// store normalized copies of their searched fields at construction so the
/// matcher never allocates per record per query.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[test]
fn normalize_trims_and_lowercases() {
    assert_eq!(normalize("  Berlin Street Art  "), "berlin street art");
}

#[test]
fn normalize_keeps_unicode() {
    assert_eq!(normalize("Åre By Night"), "åre by night");
}
