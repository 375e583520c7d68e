// sarf-generate: Derive words from a root.
//
// Applies one named pattern to a root, or every loaded pattern when no
// pattern name is given.
//
// Usage:
//   sarf-generate [-d DATA_PATH] ROOT [PATTERN]
//
// Options:
//   -d, --data-path PATH   Directory containing roots.txt / patterns.json
//   -h, --help             Print help

fn main() {
    let args = sarf_cli::CliArgs::from_env();

    if args.help || args.rest.is_empty() {
        println!("sarf-generate: Derive Arabic words from a triliteral root.");
        println!();
        println!("Usage: sarf-generate [-d DATA_PATH] ROOT [PATTERN]");
        println!();
        println!("With a PATTERN name, applies that single pattern.");
        println!("Without one, applies every loaded pattern.");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Directory containing roots.txt / patterns.json");
        println!("  -h, --help             Print this help");
        return;
    }

    let mut engine = sarf_cli::load_engine(args.data_path.as_deref())
        .unwrap_or_else(|e| sarf_cli::fatal(&e));

    let root = &args.rest[0];
    match args.rest.get(1) {
        Some(pattern) => match engine.generate_word(root, pattern) {
            Ok(generated) => println!("{}\t{}\t{}", generated.root, generated.pattern, generated.word),
            Err(e) => sarf_cli::fatal(&e.to_string()),
        },
        None => match engine.generate_all(root) {
            Ok(all) => {
                for generated in all {
                    println!("{}\t{}\t{}", generated.root, generated.pattern, generated.word);
                }
            }
            Err(e) => sarf_cli::fatal(&e.to_string()),
        },
    }
}
