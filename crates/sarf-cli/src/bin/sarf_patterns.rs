// sarf-patterns: List loaded morphological patterns.
//
// Usage:
//   sarf-patterns [-d DATA_PATH]
//
// Options:
//   -d, --data-path PATH   Directory containing roots.txt / patterns.json
//   -h, --help             Print help

use std::io::{self, Write};

fn main() {
    let args = sarf_cli::CliArgs::from_env();

    if args.help {
        println!("sarf-patterns: List loaded morphological patterns.");
        println!();
        println!("Usage: sarf-patterns [-d DATA_PATH]");
        println!();
        println!("Prints one pattern per line: name, template, description.");
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

    for entry in engine.patterns() {
        let _ = writeln!(out, "{}\t{}\t{}", entry.name, entry.template, entry.description);
    }
}
