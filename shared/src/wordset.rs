//! Word-set selection rules for the lobby. A board needs 25 words, so the
//! combined selection must reach at least that before a game can be created.

use std::fmt;

pub const MIN_WORDS: usize = 25;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSetError {
    TooFew { selected: usize },
}

impl fmt::Display for WordSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordSetError::TooFew { .. } => {
                write!(f, "Selected wordsets do not include at least {} words.", MIN_WORDS)
            }
        }
    }
}

/// Free-text custom words: split on commas, trimmed, empties discarded.
pub fn parse_custom_words(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}

pub fn combine(selections: &[Vec<String>]) -> Vec<String> {
    selections.iter().flatten().cloned().collect()
}

pub fn validate_selection(words: &[String]) -> Result<(), WordSetError> {
    if words.len() < MIN_WORDS {
        Err(WordSetError::TooFew { selected: words.len() })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_words_are_trimmed_and_empties_dropped() {
        let words = parse_custom_words(" apple, banana ,, cherry ,");
        assert_eq!(words, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn empty_text_yields_no_words() {
        assert!(parse_custom_words("").is_empty());
        assert!(parse_custom_words(" , , ").is_empty());
    }

    #[test]
    fn twenty_four_words_are_rejected_twenty_five_accepted() {
        let few: Vec<String> = (0..24).map(|i| format!("w{}", i)).collect();
        assert_eq!(
            validate_selection(&few),
            Err(WordSetError::TooFew { selected: 24 })
        );
        let enough: Vec<String> = (0..25).map(|i| format!("w{}", i)).collect();
        assert_eq!(validate_selection(&enough), Ok(()));
    }

    #[test]
    fn combine_concatenates_in_order() {
        let combined = combine(&[
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string()],
        ]);
        assert_eq!(combined, vec!["a", "b", "c"]);
    }
}
