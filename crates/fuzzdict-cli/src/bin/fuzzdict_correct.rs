// fuzzdict-correct: Rank spelling corrections.
//
// Prints the ranked corrections for each word, with their edit distance
// and confidence.
//
// Usage:
//   fuzzdict-correct [-d DICT_PATH] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH     Word-list file or directory containing it
//   -n, --max-suggestions N  Maximum number of corrections (default: 5)
//   -m, --max-distance N     Maximum edit distance (default: 2)
//   --json                   Print JSON instead of text
//   -v, --verbose            Debug logging on stderr
//   -h, --help               Print help

use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = fuzzdict_cli::parse_dict_path(&args);

    if fuzzdict_cli::wants_help(&args) {
        println!("fuzzdict-correct: Rank spelling corrections.");
        println!();
        println!("Usage: fuzzdict-correct [-d DICT_PATH] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, corrects each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH     Word-list file or directory containing it");
        println!("  -n, --max-suggestions N  Maximum number of corrections (default: 5)");
        println!("  -m, --max-distance N     Maximum edit distance (default: 2)");
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

    fuzzdict_cli::for_each_input(&options.words, |word| {
        let corrections = handle.correct_many(word, limit, options.max_distance);
        if options.json {
            let value = fuzzdict_cli::corrections_json(word, &corrections);
            let _ = writeln!(out, "{value}");
            return;
        }
        if corrections.is_empty() {
            let _ = writeln!(out, "No suggestions found for \"{word}\".");
            return;
        }
        let _ = writeln!(out, "Suggestions for \"{word}\":");
        for c in &corrections {
            let _ = writeln!(
                out,
                "- {:<20} distance {}  confidence {:.3}",
                fuzzdict_cli::match_case(word, &c.word),
                c.distance,
                c.confidence
            );
        }
    });
}
