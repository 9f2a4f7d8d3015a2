/// Canonicalizes free-form list input (ingredients, steps).
///
/// Input may be one item per line, comma separated, or a mix of both. Each item is
/// trimmed, empty items are dropped, and the result is joined with `\n`.
///
/// # Examples
/// ```
/// use cookie_bookie::normalize::normalize;
///
/// assert_eq!(normalize("flour, sugar\n\n  eggs  "), "flour\nsugar\neggs");
/// assert_eq!(normalize(" , \n"), "");
/// ```
pub fn normalize(text: &str) -> String {
    text.split(['\n', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_commas_and_newlines() {
        assert_eq!(normalize("a,b\nc"), "a\nb\nc");
    }

    #[test]
    fn handles_crlf_line_endings() {
        assert_eq!(normalize("Flour\r\nSugar\r\n"), "Flour\nSugar");
    }

    #[test]
    fn drops_blank_segments() {
        let out = normalize("\n\n  Butter ,, \n ,Eggs\n   \n");
        assert_eq!(out, "Butter\nEggs");
        assert!(out.lines().all(|l| !l.trim().is_empty()));
    }

    #[test]
    fn is_idempotent() {
        let inputs = [
            "",
            "one",
            "  a , b ,\n c\r\n\r\nd  ",
            "Scoop & bake at 175°C for 10–12 min",
            ",,,\n\n",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(normalize("   "), "");
    }
}
