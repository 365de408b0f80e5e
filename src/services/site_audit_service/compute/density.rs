/// Case-insensitive keyword presence, as a plain substring test.
pub fn contains_keyword(text: &str, keyword: &str) -> bool {
    text.to_lowercase().contains(&keyword.to_lowercase())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeywordDensity {
    pub occurrences: usize,
    pub words: usize,
    pub percentage: f64,
}

// Words are whitespace separated and trimmed of surrounding punctuation;
// a word counts when it equals the keyword ignoring case.
pub fn keyword_density(text: &str, keyword: &str) -> KeywordDensity {
    let needle = keyword.to_lowercase();
    let mut words = 0;
    let mut occurrences = 0;

    for raw in text.split_whitespace() {
        let word = raw.trim_matches(|c: char| !c.is_alphanumeric());
        if word.is_empty() {
            continue;
        }
        words += 1;
        if word.to_lowercase() == needle {
            occurrences += 1;
        }
    }

    let percentage = if words == 0 {
        0.0
    } else {
        occurrences as f64 / words as f64 * 100.0
    };
    KeywordDensity {
        occurrences,
        words,
        percentage,
    }
}
