// fuzzdict-complete: Complete word prefixes.
//
// Prints the most frequent dictionary words starting with each prefix.
//
// Usage:
//   fuzzdict-complete [-d DICT_PATH] [OPTIONS] [PREFIX...]
//
// Options:
//   -d, --dict-path PATH     Word-list file or directory containing it
//   -n, --max-suggestions N  Maximum number of completions (default: 5)
//   --json                   Print JSON instead of text
//   -v, --verbose            Debug logging on stderr
//   -h, --help               Print help

use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = fuzzdict_cli::parse_dict_path(&args);

    if fuzzdict_cli::wants_help(&args) {
        println!("fuzzdict-complete: Complete word prefixes.");
        println!();
        println!("Usage: fuzzdict-complete [-d DICT_PATH] [OPTIONS] [PREFIX...]");
        println!();
        println!("If PREFIX arguments are given, completes each prefix.");
        println!("Otherwise reads prefixes from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH     Word-list file or directory containing it");
        println!("  -n, --max-suggestions N  Maximum number of completions (default: 5)");
        println!("  --json                   Print JSON instead of text");
        println!("  -v, --verbose            Debug logging on stderr");
        println!("  -h, --help               Print this help");
        return;
    }

    let options =
        fuzzdict_cli::parse_command_args(&args).unwrap_or_else(|e| fuzzdict_cli::fatal(&e));
    fuzzdict_cli::init_logging(options.verbose);

    let handle = fuzzdict_cli::load_handle(dict_path.as_deref())
        .unwrap_or_else(|e| fuzzdict_cli::fatal(&e));
    let limit = options.max_suggestions.unwrap_or(0);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    fuzzdict_cli::for_each_input(&options.words, |prefix| {
        let suggestions = handle.suggest(prefix, limit);
        if options.json {
            let value = serde_json::json!({ "prefix": prefix, "suggestions": suggestions });
            let _ = writeln!(out, "{value}");
            return;
        }
        if suggestions.is_empty() {
            let _ = writeln!(out, "No suggestions found for prefix \"{prefix}\".");
            return;
        }
        let _ = writeln!(out, "Suggestions for \"{prefix}\":");
        for s in &suggestions {
            let _ = writeln!(out, "- {}", s.word);
        }
    });
}
