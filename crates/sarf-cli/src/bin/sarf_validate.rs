// sarf-validate: Check words against the loaded root index.
//
// Reads words from the command line or stdin (one per line) and reports
// whether each normalizes to a known root. Output format:
//   C: word    (known root)
//   W: word    (not a known root)
//
// Usage:
//   sarf-validate [-d DATA_PATH] [WORD...]
//
// Options:
//   -d, --data-path PATH   Directory containing roots.txt / patterns.json
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args = sarf_cli::CliArgs::from_env();

    if args.help {
        println!("sarf-validate: Check words against the loaded root index.");
        println!();
        println!("Usage: sarf-validate [-d DATA_PATH] [WORD...]");
        println!();
        println!("If WORD arguments are given, checks each word.");
        println!("Otherwise reads words from stdin (one per line). Prints:");
        println!("  C: word    (known root)");
        println!("  W: word    (not a known root)");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Directory containing roots.txt / patterns.json");
        println!("  -h, --help             Print this help");
        return;
    }

    let engine = sarf_cli::load_engine(args.data_path.as_deref())
        .unwrap_or_else(|e| sarf_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let check = |word: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        if engine.validate_word(word) {
            let _ = writeln!(out, "C: {word}");
        } else {
            let _ = writeln!(out, "W: {word}");
        }
    };

    if args.rest.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            check(word, &mut out);
        }
    } else {
        for word in &args.rest {
            check(word, &mut out);
        }
    }
}
