// fuzzdict-sentence: Check every word of a sentence.
//
// Misspelled words are replaced by their correction in parentheses, or by
// `[no suggestions](word)` when nothing is close enough.
//
// Usage:
//   fuzzdict-sentence [-d DICT_PATH] [OPTIONS] [TEXT...]
//
// Options:
//   -d, --dict-path PATH   Word-list file or directory containing it
//   -v, --verbose          Debug logging on stderr
//   -h, --help             Print help

use std::io::{self, Read, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = fuzzdict_cli::parse_dict_path(&args);

    if fuzzdict_cli::wants_help(&args) {
        println!("fuzzdict-sentence: Check every word of a sentence.");
        println!();
        println!("Usage: fuzzdict-sentence [-d DICT_PATH] [OPTIONS] [TEXT...]");
        println!();
        println!("If TEXT arguments are given, they are joined into one sentence.");
        println!("Otherwise the sentence is read from stdin.");
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

    let text = if options.words.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .unwrap_or_else(|e| fuzzdict_cli::fatal(&format!("failed to read stdin: {e}")));
        input.trim_end().to_string()
    } else {
        options.words.join(" ")
    };

    let (corrected, count) = fuzzdict_cli::correct_sentence(&handle, &text);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let _ = writeln!(out, "{}", fuzzdict_cli::sentence_summary(count));
    if count > 0 {
        let _ = writeln!(out, "{corrected}");
    }
}
