//! Identifier and composite-key matching used by the deletion paths.

use crate::models::{Entry, Kind};
use chrono::{DateTime, FixedOffset, TimeDelta};
use uuid::Uuid;

/// Maximum distance between a stored and a supplied timestamp for the
/// composite match (inclusive).
pub const COMPOSITE_TOLERANCE: TimeDelta = TimeDelta::seconds(2);

/// Strip braces, parentheses, hyphens and whitespace, then lower-case.
pub fn canonicalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '{' | '}' | '(' | ')' | '-') && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Standard textual renderings of an id: hyphenated, compact, braced and
/// parenthesised.
pub fn renderings(id: &Uuid) -> [String; 4] {
    let hyphenated = id.hyphenated().to_string();
    [
        hyphenated.clone(),
        id.simple().to_string(),
        id.braced().to_string(),
        format!("({hyphenated})"),
    ]
}

/// True if the already-canonicalized `wanted` text names `id` in any of its
/// renderings.
pub fn id_matches_text(id: &Uuid, wanted: &str) -> bool {
    renderings(id).iter().any(|r| canonicalize(r) == wanted)
}

pub fn within_tolerance(a: &DateTime<FixedOffset>, b: &DateTime<FixedOffset>) -> bool {
    (*a - *b).abs() <= COMPOSITE_TOLERANCE
}

/// Composite predicate: timestamp within tolerance, same kind, same note.
///
/// A missing note compares equal to the empty string; otherwise the note
/// must match byte for byte.
pub fn composite_matches(
    entry: &Entry,
    timestamp: &DateTime<FixedOffset>,
    kind: Kind,
    note: Option<&str>,
) -> bool {
    within_tolerance(&entry.timestamp, timestamp)
        && entry.kind == kind
        && entry.note_str() == note.unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_strips_separators_and_case() {
        assert_eq!(canonicalize(" {AB-cd}(ef) "), "abcdef");
    }

    #[test]
    fn every_rendering_canonicalizes_to_the_same_text() {
        let id = Uuid::new_v4();
        let want = id.simple().to_string();
        for r in renderings(&id) {
            assert_eq!(canonicalize(&r), want);
        }
    }

    #[test]
    fn id_text_matching_is_shape_tolerant() {
        let id = Uuid::new_v4();
        let upper = id.hyphenated().to_string().to_uppercase();
        assert!(id_matches_text(&id, &canonicalize(&upper)));
        assert!(id_matches_text(&id, &canonicalize(&format!("({})", id))));
        assert!(!id_matches_text(&id, &canonicalize(&Uuid::new_v4().to_string())));
    }

    #[test]
    fn tolerance_is_inclusive_at_two_seconds() {
        let a = DateTime::parse_from_rfc3339("2024-03-01T10:00:00+00:00").unwrap();
        let b = DateTime::parse_from_rfc3339("2024-03-01T10:00:02+00:00").unwrap();
        let c = DateTime::parse_from_rfc3339("2024-03-01T10:00:02.001+00:00").unwrap();
        assert!(within_tolerance(&a, &b));
        assert!(!within_tolerance(&a, &c));
    }

    #[test]
    fn sub_millisecond_overshoot_is_outside_the_window() {
        let a = DateTime::parse_from_rfc3339("2024-03-01T10:00:00+00:00").unwrap();
        let b = DateTime::parse_from_rfc3339("2024-03-01T10:00:02.0009+00:00").unwrap();
        let c = DateTime::parse_from_rfc3339("2024-03-01T09:59:57.9991+00:00").unwrap();
        assert!(!within_tolerance(&a, &b));
        assert!(!within_tolerance(&b, &a));
        assert!(!within_tolerance(&a, &c));
    }

    #[test]
    fn tolerance_compares_instants_across_offsets() {
        let a = DateTime::parse_from_rfc3339("2024-03-01T10:00:00-03:00").unwrap();
        let b = DateTime::parse_from_rfc3339("2024-03-01T13:00:01+00:00").unwrap();
        assert!(within_tolerance(&a, &b));
    }

    #[test]
    fn note_comparison_is_exact() {
        let ts = DateTime::parse_from_rfc3339("2024-03-01T10:00:00+00:00").unwrap();
        let e = Entry::new(ts, Kind::Entrada, Some("Lunch".into()));
        assert!(composite_matches(&e, &ts, Kind::Entrada, Some("Lunch")));
        assert!(!composite_matches(&e, &ts, Kind::Entrada, Some("lunch")));
        assert!(!composite_matches(&e, &ts, Kind::Entrada, Some("Lunch ")));
        assert!(!composite_matches(&e, &ts, Kind::Saida, Some("Lunch")));

        let bare = Entry::new(ts, Kind::Saida, None);
        assert!(composite_matches(&bare, &ts, Kind::Saida, None));
        assert!(composite_matches(&bare, &ts, Kind::Saida, Some("")));
    }
}
