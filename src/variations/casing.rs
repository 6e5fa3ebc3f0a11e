//! Case-variant construction for local parts.

/// Builds the fixed set of case variants of a local part, in seeding order:
/// identity, lowercase, uppercase, alternating, title case.
///
/// The list may contain duplicates (e.g. identity and lowercase coincide for
/// an already-lowercase input); the caller's unique pool collapses them.
#[must_use]
pub fn case_variants(local: &str) -> Vec<String> {
    vec![
        local.to_string(),
        local.to_lowercase(),
        local.to_uppercase(),
        alternating_case(local),
        title_case(local),
    ]
}

/// Uppercases characters at even positions and lowercases the rest (0-indexed).
fn alternating_case(local: &str) -> String {
    let mut out = String::with_capacity(local.len());
    for (i, c) in local.chars().enumerate() {
        if i % 2 == 0 {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Capitalizes the first character of each dot-separated segment and
/// lowercases the remainder, preserving the dots.
fn title_case(local: &str) -> String {
    local.split('.').map(capitalize).collect::<Vec<_>>().join(".")
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_cover_all_five_casings() {
        let variants = case_variants("john.doe");
        assert_eq!(
            variants,
            vec!["john.doe", "john.doe", "JOHN.DOE", "JoHn.dOe", "John.Doe"]
        );
    }

    #[test]
    fn alternating_counts_every_character_position() {
        // The dot occupies a position even though it has no case.
        assert_eq!(alternating_case("john.doe"), "JoHn.dOe");
        assert_eq!(alternating_case("abc"), "AbC");
    }

    #[test]
    fn title_case_capitalizes_each_segment() {
        assert_eq!(title_case("john.doe"), "John.Doe");
        assert_eq!(title_case("JOHN"), "John");
    }

    #[test]
    fn title_case_keeps_empty_segments() {
        assert_eq!(title_case("a..b"), "A..B");
    }

    #[test]
    fn variants_collapse_for_caseless_input() {
        let variants = case_variants("12345");
        let unique: std::collections::HashSet<_> = variants.iter().collect();
        assert_eq!(unique.len(), 1);
    }
}
