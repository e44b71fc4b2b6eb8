// fuzzdict-check: Check spelling of words.
//
// Reports whether each word is known and, for unknown words, the best
// correction.
//
// Usage:
//   fuzzdict-check [-d DICT_PATH] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH   Word-list file or directory containing it
//   -v, --verbose          Debug logging on stderr
//   -h, --help             Print help

use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = fuzzdict_cli::parse_dict_path(&args);

    if fuzzdict_cli::wants_help(&args) {
        println!("fuzzdict-check: Check spelling of words.");
        println!();
        println!("Usage: fuzzdict-check [-d DICT_PATH] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, checks each word.");
        println!("Otherwise reads words from stdin (one per line).");
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
    let mut out = io::BufWriter::new(stdout.lock());

    fuzzdict_cli::for_each_input(&options.words, |word| {
        if handle.is_word(word) {
            let _ = writeln!(out, "\"{word}\" is spelled correctly.");
            return;
        }
        let _ = writeln!(out, "\"{word}\" is incorrect.");
        match handle.correct_one(word, options.max_distance) {
            Some(correction) => {
                let suggestion = fuzzdict_cli::match_case(word, &correction.word);
                let _ = writeln!(out, "Did you mean: {suggestion}?");
            }
            None => {
                let _ = writeln!(out, "No suggestions found.");
            }
        }
    });
}
