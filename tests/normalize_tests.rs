use word_analyser::{normalize, split_line};

#[cfg(test)]
mod normalize_tests {
    use super::*;

    #[test]
    fn test_strips_spaces_and_lowercases() {
        assert_eq!(normalize(" U V W  "), "uvw");
        assert_eq!(normalize("a b cd e "), "abcde");
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(normalize("\"Hello,\""), "hello");
        assert_eq!(normalize("don't"), "dont");
        assert_eq!(normalize("--"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_keeps_digits() {
        assert_eq!(normalize("Route66!"), "route66");
    }

    #[test]
    fn test_keeps_unicode_letters() {
        assert_eq!(normalize("Élan,"), "élan");
        assert_eq!(normalize("Straße."), "straße");
    }

    #[test]
    fn test_output_is_lowercase_alphanumeric_and_idempotent() {
        for text in [
            " U V W  ",
            "Hello, World!",
            "ÄÖÜ-123",
            "\tTab\t",
            "x_y-z",
            "ǅ",
            "İstanbul",
        ] {
            let normalized = normalize(text);

            assert!(
                normalized.chars().all(|c| c.is_alphanumeric()),
                "{:?} produced non-alphanumeric output {:?}",
                text,
                normalized
            );
            assert_eq!(normalized, normalized.to_lowercase());
            assert_eq!(normalize(&normalized), normalized);
        }
    }

    #[test]
    fn test_lowercase_expansion_is_filtered() {
        assert_eq!(normalize("İstanbul"), "istanbul");
        assert_eq!(normalize("İSTANBUL!"), normalize("istanbul"));
    }

    #[test]
    fn test_split_line_on_single_spaces_only() {
        let fragments: Vec<&str> = split_line("one  two\tthree").collect();
        assert_eq!(fragments, vec!["one", "", "two\tthree"]);
    }
}
