use std::{io::Write, path::Path};

use tempfile::NamedTempFile;

use crate::error::GenerationError;

/// Trimmed, non-blank lines of the raw word list text.
pub fn normalize_words(raw: &str) -> Vec<&str> {
    raw.lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Word list persisted for the generator. The file is removed when this
/// value is dropped.
pub struct WordListFile {
    file: NamedTempFile,
    word_count: usize,
}

impl WordListFile {
    pub fn create(raw: &str) -> Result<Self, GenerationError> {
        let words = normalize_words(raw);
        if words.is_empty() {
            return Err(GenerationError::EmptyWordList);
        }

        let mut file = tempfile::Builder::new()
            .prefix("wordsearch-words-")
            .suffix(".txt")
            .tempfile()
            .map_err(GenerationError::WordListFile)?;

        for word in &words {
            writeln!(file, "{word}").map_err(GenerationError::WordListFile)?;
        }
        file.flush().map_err(GenerationError::WordListFile)?;

        Ok(Self {
            file,
            word_count: words.len(),
        })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_blank_lines_and_whitespace() {
        assert_eq!(
            normalize_words("  cat\r\n\ndog  \n\t\nbird"),
            vec!["cat", "dog", "bird"]
        );
    }

    #[test]
    fn writes_one_word_per_line() {
        let file = WordListFile::create("cat\n dog \n\nbird").expect("word list");
        let contents = std::fs::read_to_string(file.path()).expect("read");
        assert_eq!(contents, "cat\ndog\nbird\n");
        assert_eq!(file.word_count(), 3);
    }

    #[test]
    fn removes_file_on_drop() {
        let file = WordListFile::create("cat").expect("word list");
        let path = file.path().to_path_buf();
        assert!(path.exists());
        drop(file);
        assert!(!path.exists());
    }

    #[test]
    fn rejects_blank_word_lists() {
        assert!(matches!(
            WordListFile::create(" \n\n\t"),
            Err(GenerationError::EmptyWordList)
        ));
    }
}
