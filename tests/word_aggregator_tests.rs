use std::collections::HashMap;
use std::io::Cursor;
use word_analyser::{add_word, generate_word_map, process_line, FrequencyMap, StopwordFilter};

fn as_hash_map(frequency_map: &FrequencyMap) -> HashMap<String, usize> {
    frequency_map.clone().into()
}

fn expected(entries: &[(&str, usize)]) -> HashMap<String, usize> {
    entries
        .iter()
        .map(|(word, count)| (word.to_string(), *count))
        .collect()
}

#[cfg(test)]
mod word_aggregator_tests {
    use super::*;

    #[test]
    fn test_add_word() {
        let stopwords = StopwordFilter::from_words(["i", "am", "ok"]);
        let mut frequency_map: FrequencyMap =
            vec![("hello".to_string(), 10), ("there".to_string(), 2)]
                .into_iter()
                .collect();

        add_word("", &mut frequency_map, &stopwords);
        assert_eq!(as_hash_map(&frequency_map), expected(&[("hello", 10), ("there", 2)]));

        add_word("hello", &mut frequency_map, &stopwords);
        assert_eq!(as_hash_map(&frequency_map), expected(&[("hello", 11), ("there", 2)]));

        add_word("ok", &mut frequency_map, &stopwords);
        assert_eq!(as_hash_map(&frequency_map), expected(&[("hello", 11), ("there", 2)]));

        add_word("band", &mut frequency_map, &stopwords);
        assert_eq!(
            as_hash_map(&frequency_map),
            expected(&[("hello", 11), ("there", 2), ("band", 1)])
        );
    }

    #[test]
    fn test_process_line() {
        let stopwords = StopwordFilter::from_words(["i", "am", "ok"]);
        let mut frequency_map = FrequencyMap::new();

        process_line("This works", &mut frequency_map, &StopwordFilter::empty());
        assert_eq!(as_hash_map(&frequency_map), expected(&[("this", 1), ("works", 1)]));

        process_line("and works and I am ok", &mut frequency_map, &stopwords);
        assert_eq!(
            as_hash_map(&frequency_map),
            expected(&[("this", 1), ("works", 2), ("and", 2)])
        );
    }

    #[test]
    fn test_process_line_drops_empty_fragments() {
        let mut frequency_map = FrequencyMap::new();

        process_line("  spaced   out -- !! ", &mut frequency_map, &StopwordFilter::empty());
        assert_eq!(as_hash_map(&frequency_map), expected(&[("spaced", 1), ("out", 1)]));
    }

    #[test]
    fn test_process_line_does_not_split_on_tabs() {
        let mut frequency_map = FrequencyMap::new();

        process_line("tab\tseparated words", &mut frequency_map, &StopwordFilter::empty());
        assert_eq!(
            as_hash_map(&frequency_map),
            expected(&[("tabseparated", 1), ("words", 1)])
        );
    }

    #[test]
    fn test_dotted_capital_i_counts_as_plain_i() {
        let mut frequency_map = FrequencyMap::new();

        process_line("İstanbul istanbul", &mut frequency_map, &StopwordFilter::empty());
        assert_eq!(as_hash_map(&frequency_map), expected(&[("istanbul", 2)]));
    }

    #[test]
    fn test_generate_word_map_accepts_mixed_line_endings() {
        let text = "Hello there\r\nhello, World\nworld\r\n";
        let frequency_map =
            generate_word_map(Cursor::new(text), &StopwordFilter::empty()).unwrap();

        assert_eq!(
            as_hash_map(&frequency_map),
            expected(&[("hello", 2), ("there", 1), ("world", 2)])
        );
        assert_eq!(frequency_map.total_occurrences(), 5);
    }

    #[test]
    fn test_generate_word_map_of_empty_source() {
        let frequency_map = generate_word_map(Cursor::new(""), &StopwordFilter::empty()).unwrap();

        assert!(frequency_map.is_empty());
    }

    #[test]
    fn test_frequency_map_keeps_first_seen_order() {
        let mut frequency_map = FrequencyMap::new();
        process_line("b a c a b", &mut frequency_map, &StopwordFilter::empty());

        let order: Vec<&str> = frequency_map.iter().map(|(token, _)| token).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
        assert_eq!(frequency_map.get("a"), Some(2));
        assert_eq!(frequency_map.get("z"), None);
    }

    #[test]
    fn test_frequency_map_never_stores_zero_counts() {
        let frequency_map: FrequencyMap = vec![("ghost".to_string(), 0)].into_iter().collect();

        assert!(!frequency_map.contains("ghost"));
        assert!(frequency_map.is_empty());
    }
}

#[cfg(test)]
mod stopword_filter_tests {
    use super::*;

    #[test]
    fn test_from_reader_lowercases_and_skips_blank_lines() {
        let stopwords = StopwordFilter::from_reader(Cursor::new("The\r\nOF\n\n  and \n")).unwrap();

        assert_eq!(stopwords.len(), 3);
        assert!(stopwords.contains("the"));
        assert!(stopwords.contains("of"));
        assert!(stopwords.contains("and"));
        assert!(!stopwords.contains("The"));
    }

    #[test]
    fn test_empty_filter_excludes_nothing() {
        let stopwords = StopwordFilter::empty();

        assert!(stopwords.is_empty());
        assert!(!stopwords.contains("the"));
    }
}
