// fuzzdict: Interactive spelling session.
//
// Reads lines from stdin. Lines starting with `:` are commands; a single
// bare word is checked and up to three corrections are listed; several bare
// words are checked as a sentence.
//
// Usage:
//   fuzzdict [-d DICT_PATH] [OPTIONS]
//
// Options:
//   -d, --dict-path PATH   Word-list file or directory containing it
//   -v, --verbose          Debug logging on stderr
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use fuzzdict_cli::Command;
use fuzzdict_engine::FuzzdictHandle;

const PROMPT: &str = "fuzzdict > ";

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = fuzzdict_cli::parse_dict_path(&args);

    if fuzzdict_cli::wants_help(&args) {
        println!("fuzzdict: Interactive spelling session.");
        println!();
        println!("Usage: fuzzdict [-d DICT_PATH] [OPTIONS]");
        println!();
        println!("Type \":help\" at the prompt for the list of commands.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Word-list file or directory containing it");
        println!("  -v, --verbose          Debug logging on stderr");
        println!("  -h, --help             Print this help");
        return;
    }

    let options =
        fuzzdict_cli::parse_command_args(&args).unwrap_or_else(|e| fuzzdict_cli::fatal(&e));
    fuzzdict_cli::init_logging(options.verbose);

    let handle = fuzzdict_cli::load_handle(dict_path.as_deref())
        .unwrap_or_else(|e| fuzzdict_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let _ = writeln!(out, "Welcome to fuzzdict!");
    let _ = writeln!(out, "Type \":help\" for a list of commands.");
    let _ = writeln!(out);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        let _ = write!(out, "{PROMPT}");
        let _ = out.flush();

        let line = match lines.next() {
            Some(Ok(l)) => l,
            Some(Err(e)) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
            None => break,
        };

        match fuzzdict_cli::parse_command(&line) {
            Command::Empty => continue,
            Command::Quit => break,
            command => run(&handle, command, &mut out),
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "Goodbye!");
}

fn run(handle: &FuzzdictHandle, command: Command, out: &mut impl Write) {
    match command {
        Command::Check(word) => check(handle, &word, out),
        Command::Complete(prefix) => {
            let suggestions = handle.suggest(&prefix, 0);
            if suggestions.is_empty() {
                let _ = writeln!(out, "No suggestions found for prefix \"{prefix}\".");
            } else {
                let words = fuzzdict_cli::join_words(suggestions.iter().map(|s| s.word.as_str()));
                let _ = writeln!(out, "Suggestions: {words}");
            }
        }
        Command::Correct(word) => {
            let corrections = handle.correct_many(&word, 0, None);
            if corrections.is_empty() {
                let _ = writeln!(out, "No suggestions found for \"{word}\".");
            } else {
                let words = fuzzdict_cli::join_words(corrections.iter().map(|c| c.word.as_str()));
                let _ = writeln!(out, "Suggestions: {words}");
            }
        }
        Command::Sentence(text) => {
            let (corrected, count) = fuzzdict_cli::correct_sentence(handle, &text);
            let _ = writeln!(out, "{}", fuzzdict_cli::sentence_summary(count));
            if count > 0 {
                let _ = writeln!(out, "{corrected}");
            }
        }
        Command::Lookup(word) => lookup(handle, &word, out),
        Command::Help => print_help(out),
        Command::Clear => {
            let _ = write!(out, "\x1b[2J\x1b[H");
        }
        Command::Usage(usage) => {
            let _ = writeln!(out, "Error: {usage}");
        }
        Command::Unknown(name) => {
            let _ = writeln!(
                out,
                "Error: unknown command: {name}. Type \":help\" for available commands"
            );
        }
        Command::Quit | Command::Empty => {}
    }
}

fn check(handle: &FuzzdictHandle, word: &str, out: &mut impl Write) {
    if handle.is_word(word) {
        let _ = writeln!(out, "\"{word}\" is spelled correctly!");
        return;
    }
    match handle.correct_one(word, None) {
        Some(c) => {
            let suggestion = fuzzdict_cli::match_case(word, &c.word);
            let _ = writeln!(out, "\"{word}\" is incorrect. Did you mean: {suggestion}?");
        }
        None => {
            let _ = writeln!(out, "\"{word}\" is incorrect. No suggestions found.");
        }
    }
}

fn lookup(handle: &FuzzdictHandle, word: &str, out: &mut impl Write) {
    if handle.is_word(word) {
        let _ = writeln!(out, "\"{word}\" is spelled correctly!");
        return;
    }
    let corrections =
        handle.correct_many(word, fuzzdict_cli::INTERACTIVE_CORRECTIONS, None);
    if corrections.is_empty() {
        let _ = writeln!(out, "\"{word}\" is incorrect. No suggestions found.");
        return;
    }
    let suggestions: Vec<String> = corrections
        .iter()
        .map(|c| fuzzdict_cli::match_case(word, &c.word))
        .collect();
    let words = fuzzdict_cli::join_words(suggestions.iter().map(String::as_str));
    let _ = writeln!(out, "\"{word}\" is incorrect. Did you mean: {words}?");
}

fn print_help(out: &mut impl Write) {
    let _ = writeln!(out, "Available commands:");
    let _ = writeln!(out, "  :check <word>      Check if a word is spelled correctly (alias: :ch)");
    let _ = writeln!(out, "  :complete <prefix> Complete a prefix (aliases: :c, :comp)");
    let _ = writeln!(out, "  :correct <word>    List ranked corrections for a word (alias: :cor)");
    let _ = writeln!(out, "  :sentence <text>   Check and correct every word (alias: :sent)");
    let _ = writeln!(out, "  :clear             Clear the screen (alias: :cls)");
    let _ = writeln!(out, "  :help              Show this help message (alias: :h)");
    let _ = writeln!(out, "  :quit, :exit       Exit the program (alias: :q)");
    let _ = writeln!(out);
    let _ = writeln!(out, "Without a command:");
    let _ = writeln!(out, "  - a single word is checked and up to three corrections are listed");
    let _ = writeln!(out, "  - several words are checked as a sentence");
}
