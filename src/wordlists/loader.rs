//! Word list loading utilities
//!
//! Turns raw newline-delimited text into secret word candidates, either from a
//! file or from the embedded constant.

use super::{MAX_WORD_LEN, MIN_WORD_LEN};
use crate::core::SecretWord;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Turn one raw entry into a candidate, if it qualifies
///
/// The entry is trimmed, must be 5 to 12 characters long and made only of ASCII
/// letters. Qualifying entries are uppercased.
#[must_use]
pub fn candidate(entry: &str) -> Option<SecretWord> {
    let trimmed = entry.trim();
    if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&trimmed.chars().count()) {
        return None;
    }
    SecretWord::new(trimmed).ok()
}

/// Load candidates from a file
///
/// Lines that do not qualify are skipped.
///
/// # Errors
///
/// Returns `Error::WordList` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<SecretWord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::WordList {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<SecretWord> = content.lines().filter_map(candidate).collect();
    tracing::debug!(
        path = %path.display(),
        candidates = words.len(),
        "loaded word list"
    );

    Ok(words)
}

/// Convert an embedded string slice to candidates
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["cat", "Apple", "internationalization"]);
/// assert_eq!(words.len(), 1);
/// assert_eq!(words[0].text(), "APPLE");
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<SecretWord> {
    slice.iter().filter_map(|&s| candidate(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn candidate_length_bounds() {
        assert!(candidate("tree").is_none());
        assert!(candidate("apple").is_some());
        assert!(candidate("accomplished").is_some()); // 12
        assert!(candidate("accomplishing").is_none()); // 13
    }

    #[test]
    fn candidate_is_trimmed_and_uppercased() {
        let word = candidate("  Meadow \r").unwrap();
        assert_eq!(word.text(), "MEADOW");
    }

    #[test]
    fn candidate_rejects_non_letters() {
        assert!(candidate("don't").is_none());
        assert!(candidate("twenty-one").is_none());
        assert!(candidate("route66").is_none());
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["apple", "cat", "", "Banana", "incomprehensibilities"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "APPLE");
        assert_eq!(words[1].text(), "BANANA");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_filters_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "apple\nox\n  lantern  \nelephantiasis\nwizard").unwrap();

        let words = load_from_file(file.path()).unwrap();
        let texts: Vec<&str> = words.iter().map(SecretWord::text).collect();
        assert_eq!(texts, ["APPLE", "LANTERN", "WIZARD"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_file(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(Error::WordList { .. })));
    }
}
