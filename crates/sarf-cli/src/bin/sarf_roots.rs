// sarf-roots: List loaded roots in sorted order.
//
// Usage:
//   sarf-roots [-d DATA_PATH] [--stats]
//
// Options:
//   -d, --data-path PATH   Directory containing roots.txt / patterns.json
//   --stats                Also print engine statistics
//   -h, --help             Print help

use std::io::{self, Write};

fn main() {
    let args = sarf_cli::CliArgs::from_env();

    if args.help {
        println!("sarf-roots: List loaded roots in sorted order.");
        println!();
        println!("Usage: sarf-roots [-d DATA_PATH] [--stats]");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Directory containing roots.txt / patterns.json");
        println!("  --stats                Also print engine statistics");
        println!("  -h, --help             Print this help");
        return;
    }

    let show_stats = args.rest.iter().any(|a| a == "--stats");

    let engine = sarf_cli::load_engine(args.data_path.as_deref())
        .unwrap_or_else(|e| sarf_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for root in engine.roots() {
        let _ = writeln!(out, "{root}");
    }

    if show_stats {
        let stats = engine.stats();
        let _ = writeln!(out);
        let _ = writeln!(out, "roots: {}", stats.root_count);
        let _ = writeln!(out, "patterns: {}", stats.pattern_count);
        let _ = writeln!(out, "tree height: {}", stats.tree_height);
        let _ = writeln!(out, "load factor: {:.3}", stats.load_factor);
    }
}
