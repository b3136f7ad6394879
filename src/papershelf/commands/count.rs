use serde::Serialize;

pub const DEFAULT_ABSTRACT_WORD_LIMIT: usize = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub words: usize,
    pub limit: usize,
    pub over_limit: bool,
}

/// Counts whitespace separated words in a draft abstract.
pub fn run(text: &str, limit: usize) -> WordCount {
    let words = text.split_whitespace().count();
    WordCount {
        words,
        limit,
        over_limit: words > limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_words() {
        let count = run("  one two\n three\tfour  ", 250);
        assert_eq!(count.words, 4);
        assert!(!count.over_limit);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(run("   ", 10).words, 0);
    }

    #[test]
    fn test_limit_is_inclusive() {
        assert!(!run("a b c", 3).over_limit);
        assert!(run("a b c d", 3).over_limit);
    }
}
