// sarf-cli: shared utilities for the CLI tools.
//
// File loading lives here, at the boundary: the engine only ever sees
// already-read in-memory data.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process;

use serde::Deserialize;

use sarf_engine::MorphologicalEngine;

/// Root list file name: one candidate root per line, UTF-8 Arabic text.
const ROOTS_FILE: &str = "roots.txt";

/// Pattern catalog file name: JSON object mapping pattern names to records.
const PATTERNS_FILE: &str = "patterns.json";

/// One record in the pattern catalog file.
///
/// Unknown fields (examples, transformation rules) are ignored.
#[derive(Debug, Deserialize)]
struct PatternRecord {
    template: String,
    #[serde(default)]
    description: String,
}

/// Search for data files and build a loaded engine.
///
/// Search order:
/// 1. `data_path` argument (if provided)
/// 2. `SARF_DATA_PATH` environment variable
/// 3. `~/.sarf`
/// 4. Current working directory
///
/// The first directory containing `roots.txt` or `patterns.json` wins;
/// whichever of the two files is present is loaded.
pub fn load_engine(data_path: Option<&str>) -> Result<MorphologicalEngine, String> {
    let search_paths = build_search_paths(data_path);

    for dir in &search_paths {
        let roots_path = dir.join(ROOTS_FILE);
        let patterns_path = dir.join(PATTERNS_FILE);
        if !roots_path.is_file() && !patterns_path.is_file() {
            continue;
        }

        let mut engine = MorphologicalEngine::new();

        if roots_path.is_file() {
            let text = std::fs::read_to_string(&roots_path)
                .map_err(|e| format!("failed to read {}: {}", roots_path.display(), e))?;
            engine.load_roots(text.lines());
        }

        if patterns_path.is_file() {
            let text = std::fs::read_to_string(&patterns_path)
                .map_err(|e| format!("failed to read {}: {}", patterns_path.display(), e))?;
            // BTreeMap keeps catalog order stable across runs.
            let records: BTreeMap<String, PatternRecord> = serde_json::from_str(&text)
                .map_err(|e| format!("invalid JSON in {}: {}", patterns_path.display(), e))?;
            engine.load_patterns(
                records
                    .iter()
                    .map(|(name, r)| (name.as_str(), r.template.as_str(), r.description.as_str())),
            );
        }

        return Ok(engine);
    }

    Err(format!(
        "could not find {} or {} in any of the search paths:\n{}",
        ROOTS_FILE,
        PATTERNS_FILE,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of directories to search for data files.
fn build_search_paths(data_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = data_path {
        paths.push(PathBuf::from(p));
    }

    // 2. SARF_DATA_PATH environment variable
    if let Ok(env_path) = std::env::var("SARF_DATA_PATH") {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Home directory
    if let Ok(home) = std::env::var("HOME") {
        paths.push(PathBuf::from(home).join(".sarf"));
    }

    // 4. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Command-line options common to every sarf binary.
///
/// Only `-d` / `--data-path` and `-h` / `--help` are interpreted here;
/// everything else lands in `rest` in its original order for the binary
/// to treat as positionals or tool-specific flags.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Explicit data directory, if given.
    pub data_path: Option<String>,
    /// Whether help was requested.
    pub help: bool,
    /// Positional arguments and unrecognized flags.
    pub rest: Vec<String>,
}

impl CliArgs {
    /// Parse the process arguments (program name excluded).
    pub fn from_env() -> Self {
        Self::parse(std::env::args().skip(1))
    }

    /// Parse an argument sequence. Exits with an error message when
    /// `-d` / `--data-path` is given without a value.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Self {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => parsed.help = true,
                "-d" | "--data-path" => match args.next() {
                    Some(value) => parsed.data_path = Some(value),
                    None => fatal(&format!("{arg} requires a value")),
                },
                _ => match arg.strip_prefix("--data-path=") {
                    Some(value) => parsed.data_path = Some(value.to_string()),
                    None => parsed.rest.push(arg),
                },
            }
        }
        parsed
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(list: &[&str]) -> CliArgs {
        CliArgs::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn data_path_forms() {
        let args = parse(&["--data-path=/tmp/data", "كتب"]);
        assert_eq!(args.data_path.as_deref(), Some("/tmp/data"));
        assert_eq!(args.rest, ["كتب"]);

        let args = parse(&["-d", "/tmp/data"]);
        assert_eq!(args.data_path.as_deref(), Some("/tmp/data"));
        assert!(args.rest.is_empty());
    }

    #[test]
    fn help_detection() {
        assert!(parse(&["-h"]).help);
        assert!(parse(&["كتب", "--help"]).help);
        assert!(!parse(&["كتب"]).help);
    }

    #[test]
    fn tool_specific_flags_pass_through() {
        let args = parse(&["--stats", "-d", "/tmp/data", "فاعل"]);
        assert_eq!(args.rest, ["--stats", "فاعل"]);
        assert_eq!(args.data_path.as_deref(), Some("/tmp/data"));
        assert!(!args.help);
    }

    #[test]
    fn pattern_record_parses_with_extra_fields() {
        let json = r#"{"template": "1ا23", "description": "د", "example": "كاتب"}"#;
        let record: PatternRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.template, "1ا23");
        assert_eq!(record.description, "د");
    }
}
