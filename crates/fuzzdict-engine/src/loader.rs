// Word-list loading from `word,frequency` text sources

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Separator between the word and its frequency on one line.
pub const FIELD_SEPARATOR: char = ',';

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Error type for word-list loading failures.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line is not valid UTF-8.
    #[error("{}:{line}: invalid UTF-8", path.display())]
    InvalidUtf8 { path: PathBuf, line: usize },

    /// The source contained no words.
    #[error("{} contains no words", path.display())]
    Empty { path: PathBuf },
}

/// One parsed line of a word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub frequency: u64,
}

/// Parse one line.
///
/// Returns `None` for blank lines and blank words. The flag is `true` when
/// the frequency field was missing or malformed and defaulted to 0.
pub fn parse_line(line: &str) -> Option<(WordEntry, bool)> {
    let line = line.trim();
    let (word, frequency) = match line.split_once(FIELD_SEPARATOR) {
        Some((word, rest)) => {
            let field = rest.split(FIELD_SEPARATOR).next().unwrap_or_default();
            (word.trim(), field.trim().parse::<u64>().ok())
        }
        None => (line, None),
    };
    if word.is_empty() {
        return None;
    }
    Some((
        WordEntry {
            word: word.to_string(),
            frequency: frequency.unwrap_or(0),
        },
        frequency.is_none(),
    ))
}

/// Read a word list from `reader`; `source` names it in errors.
pub fn read_word_list<R: BufRead>(reader: R, source: &Path) -> Result<Vec<WordEntry>, LoadError> {
    let mut entries = Vec::new();
    let mut skipped = 0usize;
    let mut defaulted = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => LoadError::InvalidUtf8 {
                path: source.to_path_buf(),
                line: idx + 1,
            },
            _ => LoadError::Io {
                path: source.to_path_buf(),
                source: e,
            },
        })?;
        let line = if idx == 0 {
            line.trim_start_matches(BYTE_ORDER_MARK)
        } else {
            &line
        };

        match parse_line(line) {
            Some((entry, was_defaulted)) => {
                if was_defaulted {
                    defaulted += 1;
                }
                entries.push(entry);
            }
            None => skipped += 1,
        }
    }

    if entries.is_empty() {
        return Err(LoadError::Empty {
            path: source.to_path_buf(),
        });
    }

    tracing::debug!(
        source = %source.display(),
        words = entries.len(),
        skipped,
        defaulted,
        "loaded word list"
    );
    Ok(entries)
}

/// Open and read a word list file.
pub fn load_word_list(path: &Path) -> Result<Vec<WordEntry>, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    read_word_list(BufReader::new(file), path)
}
