// fuzzdict-cli: shared utilities for CLI tools.

use std::io::{self, BufRead};
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

use fuzzdict_core::Correction;
use fuzzdict_core::case::{CaseType, carry_leading_case, detect_case};
use fuzzdict_core::character::{CharType, get_char_type, is_word_char};
use fuzzdict_engine::{FuzzdictError, FuzzdictHandle, PatternTables};
use tracing::Level;

/// Word-list file name searched for inside dictionary directories.
pub const DICT_FILE: &str = "english_words_freqs.txt";

/// Environment variable naming a word-list file or its directory.
pub const DICT_PATH_ENV: &str = "FUZZDICT_DICT_PATH";

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "FUZZDICT_LOG";

/// Number of corrections listed for a bare word in interactive mode.
pub const INTERACTIVE_CORRECTIONS: usize = 3;

// ---------------------------------------------------------------------------
// Dictionary discovery
// ---------------------------------------------------------------------------

/// Search for the word list and create a FuzzdictHandle.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `FUZZDICT_DICT_PATH` environment variable
/// 3. `~/.fuzzdict/english_words_freqs.txt`
/// 4. `/usr/share/fuzzdict`, `/usr/local/share/fuzzdict`
/// 5. `./resources/english_words_freqs.txt`
///
/// Each entry may name the file itself or a directory containing it.
pub fn load_handle(dict_path: Option<&str>) -> Result<FuzzdictHandle, String> {
    let search_paths = build_search_paths(dict_path);

    for candidate in &search_paths {
        let Some(path) = resolve_word_list(candidate) else {
            continue;
        };
        tracing::debug!(path = %path.display(), "loading dictionary");
        return FuzzdictHandle::from_path(&path, PatternTables::english())
            .map_err(|e: FuzzdictError| e.to_string());
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        DICT_FILE,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Resolve a search-path entry to a word-list file, if it holds one.
pub fn resolve_word_list(candidate: &Path) -> Option<PathBuf> {
    if candidate.is_file() {
        return Some(candidate.to_path_buf());
    }
    let inner = candidate.join(DICT_FILE);
    inner.is_file().then_some(inner)
}

/// Build the list of locations to search for the word list.
pub fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let env_path = std::env::var(DICT_PATH_ENV).ok();
    search_paths_from(dict_path, env_path.as_deref(), home_dir())
}

fn search_paths_from(
    dict_path: Option<&str>,
    env_path: Option<&str>,
    home: Option<PathBuf>,
) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }
    if let Some(p) = env_path {
        paths.push(PathBuf::from(p));
    }
    if let Some(home) = home {
        paths.push(home.join(".fuzzdict").join(DICT_FILE));
    }
    paths.push(PathBuf::from("/usr/share/fuzzdict"));
    paths.push(PathBuf::from("/usr/local/share/fuzzdict"));
    paths.push(PathBuf::from("resources").join(DICT_FILE));

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            if i + 1 < args.len() {
                dict_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
}

/// Options shared by the batch tools, after `-d` has been removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArgs {
    /// `-n N`: result count; 0 selects the engine default.
    pub max_suggestions: Option<usize>,
    /// `-m N`: edit-distance bound, negatives clamped to 0.
    pub max_distance: Option<usize>,
    /// `--json`: machine-readable output.
    pub json: bool,
    /// `-v`: debug logging.
    pub verbose: bool,
    /// Positional words.
    pub words: Vec<String>,
}

/// Parse the options shared by the batch tools.
pub fn parse_command_args(args: &[String]) -> Result<CommandArgs, String> {
    let mut parsed = CommandArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-n" | "--max-suggestions" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("{arg} requires a value"))?;
                parsed.max_suggestions = Some(parse_count(value)?);
            }
            "-m" | "--max-distance" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("{arg} requires a value"))?;
                parsed.max_distance = Some(parse_max_distance(value)?);
            }
            "--json" => parsed.json = true,
            "-v" | "--verbose" => parsed.verbose = true,
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("unknown option: {arg}"));
            }
            _ => parsed.words.push(arg.clone()),
        }
    }

    Ok(parsed)
}

/// Parse a non-negative result count.
pub fn parse_count(value: &str) -> Result<usize, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {value}"))
}

/// Parse an edit-distance bound; negative values are clamped to 0.
pub fn parse_max_distance(value: &str) -> Result<usize, String> {
    let n: i64 = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid max distance: {value}"))?;
    if n < 0 {
        tracing::warn!(value = n, "negative max distance clamped to 0");
        return Ok(0);
    }
    usize::try_from(n).map_err(|_| format!("invalid max distance: {value}"))
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Run `f` on every positional word, or on every non-empty stdin line when
/// there are none.
pub fn for_each_input(words: &[String], mut f: impl FnMut(&str)) {
    if !words.is_empty() {
        for word in words {
            f(word.as_str());
        }
        return;
    }
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if !word.is_empty() {
            f(word);
        }
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Log level from the `FUZZDICT_LOG` value, raised to debug by `verbose`.
///
/// Unset or unparsable values fall back to warn.
pub fn log_level(env_value: Option<&str>, verbose: bool) -> Level {
    let configured = env_value
        .and_then(|v| Level::from_str(v.trim()).ok())
        .unwrap_or(Level::WARN);
    if verbose {
        configured.max(Level::DEBUG)
    } else {
        configured
    }
}

/// Install the stderr log subscriber. Later calls are no-ops.
pub fn init_logging(verbose: bool) {
    let level = log_level(std::env::var(LOG_ENV).ok().as_deref(), verbose);
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Match a correction to the casing of the word it replaces.
///
/// All-uppercase words get an all-uppercase correction; otherwise only the
/// leading capital is carried over.
pub fn match_case(original: &str, corrected: &str) -> String {
    if detect_case(original) == CaseType::AllUpper && original.chars().count() > 1 {
        corrected.to_uppercase()
    } else {
        carry_leading_case(original, corrected)
    }
}

/// JSON document listing the corrections for one word.
pub fn corrections_json(word: &str, corrections: &[Correction]) -> serde_json::Value {
    serde_json::json!({
        "word": word,
        "corrections": corrections,
    })
}

/// Comma-separated list of words.
pub fn join_words<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    words.into_iter().collect::<Vec<_>>().join(", ")
}

// ---------------------------------------------------------------------------
// Sentences
// ---------------------------------------------------------------------------

/// Byte ranges of the words in running text.
///
/// A word is a run of letters; an apostrophe (any variant) is part of the
/// word only between two letters.
pub fn word_spans(text: &str) -> Vec<Range<usize>> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let is_letter = |c: char| get_char_type(c) == CharType::Letter;
    let mut spans = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if !is_letter(chars[i].1) {
            i += 1;
            continue;
        }
        let start = chars[i].0;
        let mut j = i + 1;
        while j < chars.len() {
            let c = chars[j].1;
            if is_letter(c) {
                j += 1;
            } else if is_word_char(c) && chars.get(j + 1).is_some_and(|&(_, n)| is_letter(n)) {
                j += 2;
            } else {
                break;
            }
        }
        let end = chars.get(j).map_or(text.len(), |&(offset, _)| offset);
        spans.push(start..end);
        i = j;
    }

    spans
}

/// Check every word of `text`.
///
/// Misspelled words are replaced by `(correction)`, or by
/// `[no suggestions](word)` when nothing is close enough. Returns the
/// rewritten text and the number of misspelled words.
pub fn correct_sentence(handle: &FuzzdictHandle, text: &str) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut count = 0;
    let mut last = 0;

    for span in word_spans(text) {
        out.push_str(&text[last..span.start]);
        let word = &text[span.clone()];
        if handle.is_word(word) {
            out.push_str(word);
        } else {
            count += 1;
            match handle.correct_one(word, None) {
                Some(correction) => {
                    out.push('(');
                    out.push_str(&match_case(word, &correction.word));
                    out.push(')');
                }
                None => {
                    out.push_str("[no suggestions](");
                    out.push_str(word);
                    out.push(')');
                }
            }
        }
        last = span.end;
    }
    out.push_str(&text[last..]);

    (out, count)
}

/// Headline reported above a checked sentence.
pub fn sentence_summary(count: usize) -> String {
    match count {
        0 => "Your sentence is correct!".to_string(),
        1 => "Found 1 correction in your sentence:".to_string(),
        n => format!("Found {n} corrections in your sentence:"),
    }
}

// ---------------------------------------------------------------------------
// Interactive commands
// ---------------------------------------------------------------------------

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Check(String),
    Complete(String),
    Correct(String),
    Sentence(String),
    /// A single bare word: check it and list corrections.
    Lookup(String),
    Help,
    Clear,
    Quit,
    /// A command with the wrong number of arguments.
    Usage(&'static str),
    Unknown(String),
    Empty,
}

/// Parse a line of interactive input.
///
/// Lines starting with `:` are commands; a single bare word is a lookup and
/// several bare words are a sentence.
pub fn parse_command(input: &str) -> Command {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let Some(first) = parts.first() else {
        return Command::Empty;
    };

    let Some(name) = first.strip_prefix(':') else {
        return if parts.len() == 1 {
            Command::Lookup(parts[0].to_string())
        } else {
            Command::Sentence(parts.join(" "))
        };
    };

    match name.to_lowercase().as_str() {
        "quit" | "exit" | "q" => Command::Quit,
        "help" | "h" => Command::Help,
        "clear" | "cls" => Command::Clear,
        "check" | "ch" => single_argument(&parts, Command::Check, "usage: :check <word>"),
        "complete" | "comp" | "c" => {
            single_argument(&parts, Command::Complete, "usage: :complete <prefix>")
        }
        "correct" | "cor" => single_argument(&parts, Command::Correct, "usage: :correct <word>"),
        "sentence" | "sent" => {
            if parts.len() < 2 {
                Command::Usage("usage: :sentence <sentence>")
            } else {
                Command::Sentence(parts[1..].join(" "))
            }
        }
        other => Command::Unknown(other.to_string()),
    }
}

fn single_argument(parts: &[&str], build: fn(String) -> Command, usage: &'static str) -> Command {
    match parts {
        [_, arg] => build((*arg).to_string()),
        _ => Command::Usage(usage),
    }
}
