// sarf-classify: Classify triliteral roots.
//
// Reads roots from the command line or stdin (one per line) and prints
// each root's category, subtype and letter-position details.
//
// Usage:
//   sarf-classify [ROOT...]
//
// Options:
//   -h, --help   Print help

use std::io::{self, BufRead, Write};

use sarf_core::RootAnalysis;
use sarf_engine::MorphologicalEngine;

fn main() {
    let args = sarf_cli::CliArgs::from_env();

    if args.help {
        println!("sarf-classify: Classify Arabic triliteral roots.");
        println!();
        println!("Usage: sarf-classify [ROOT...]");
        println!();
        println!("If ROOT arguments are given, classifies each root.");
        println!("Otherwise reads roots from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -h, --help   Print this help");
        return;
    }

    // Classification needs no data files; an empty engine suffices.
    let engine = MorphologicalEngine::new();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let classify_one = |root: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        match engine.classify_root(root) {
            Ok(analysis) => print_analysis(&analysis, out),
            Err(e) => {
                let _ = writeln!(out, "{root}: error: {e}");
            }
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
            let root = line.trim();
            if root.is_empty() {
                continue;
            }
            classify_one(root, &mut out);
        }
    } else {
        for root in &args.rest {
            classify_one(root, &mut out);
        }
    }
}

fn print_analysis(analysis: &RootAnalysis, out: &mut io::BufWriter<io::StdoutLock<'_>>) {
    let _ = writeln!(out, "{analysis}");
    if !analysis.weak_positions.is_empty() {
        let _ = writeln!(out, "  weak letters at: {:?}", analysis.weak_positions);
    }
    if !analysis.hamza_positions.is_empty() {
        let _ = writeln!(out, "  hamza at: {:?}", analysis.hamza_positions);
    }
    if analysis.doubled {
        let _ = writeln!(out, "  doubled second and third radicals");
    }
}
