//! Plate canonicalization.
//!
//! Plates arrive from free-text fields ("ab-12", "AB 12", "ab.12") and must
//! all resolve to the same case. The canonical form is uppercase
//! alphanumeric with everything else stripped.

/// Normalize a raw plate string to its canonical form.
///
/// Keeps only ASCII alphanumerics and uppercases them. Total over any input
/// (the empty string normalizes to the empty string) and idempotent.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn strips_separators_and_uppercases() {
        assert_eq!(normalize("ab-12"), "AB12");
        assert_eq!(normalize("AB 12"), "AB12");
        assert_eq!(normalize("a.b/1:2"), "AB12");
    }

    #[test]
    fn output_is_alphanumeric_only() {
        let out = normalize("  x!@#9 ñ-z ");
        assert!(out.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(out.chars().all(|c| !c.is_ascii_lowercase()));
    }

    #[test]
    fn idempotent() {
        for input in ["ab-12", "", "???", "TAB 123"] {
            assert_eq!(normalize(&normalize(input)), normalize(input));
        }
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("---"), "");
    }
}
