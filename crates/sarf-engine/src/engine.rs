// MorphologicalEngine: top-level integration point.
//
// Owns one RootIndex and one PatternStore and provides the load, generate,
// validate and classify operations that front-ends call. The engine is an
// explicitly constructed context object: single-threaded, no globals; a
// caller that shares it across threads supplies its own exclusion.

use sarf_core::normalize::normalize;
use sarf_core::{Root, RootAnalysis, RootError};

use crate::classifier::classify;
use crate::pattern_store::{PatternEntry, PatternStore};
use crate::root_index::{RootIndex, RootInfo};
use crate::template::TemplateError;

/// Error type for word generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// The root string did not survive validation.
    #[error("invalid root: {0}")]
    InvalidRoot(#[from] RootError),

    /// No pattern with the given name is loaded.
    #[error("pattern not found: {0}")]
    PatternNotFound(String),
}

/// A successfully generated word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// The (normalized) root the word was derived from.
    pub root: Root,
    /// The pattern name that was applied.
    pub pattern: String,
    /// The generated, normalized word.
    pub word: String,
}

/// Aggregate statistics over both stores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineStats {
    pub root_count: usize,
    pub pattern_count: usize,
    pub tree_height: usize,
    pub load_factor: f64,
    /// Total derivative records across all roots.
    pub derivative_count: usize,
    /// Roots that have at least one recorded derivative.
    pub roots_with_derivatives: usize,
}

/// Arabic morphological engine: root index + pattern store + classifier.
#[derive(Debug, Default)]
pub struct MorphologicalEngine {
    roots: RootIndex,
    patterns: PatternStore,
}

impl MorphologicalEngine {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Ingestion --

    /// Load candidate roots, one per line.
    ///
    /// Each line is normalized and validated; lines that are not valid
    /// triliteral roots, and duplicates of already-loaded roots, are
    /// skipped. Returns the number of roots newly inserted, so a caller
    /// can report the discrepancy against the input line count.
    pub fn load_roots<I, S>(&mut self, lines: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut loaded = 0;
        for line in lines {
            let Ok(root) = Root::parse(line.as_ref()) else {
                continue;
            };
            if self.roots.insert(root, RootInfo::new()) {
                loaded += 1;
            }
        }
        loaded
    }

    /// Load a pattern catalog of (name, template, description) records.
    ///
    /// Entries with invalid templates are skipped; duplicate names
    /// overwrite the earlier entry. Returns the number of records
    /// accepted (including overwrites).
    pub fn load_patterns<I, N, S>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (N, S, S)>,
        N: AsRef<str>,
        S: AsRef<str>,
    {
        let mut loaded = 0;
        for (name, template, description) in entries {
            if self
                .patterns
                .put(name.as_ref(), template.as_ref(), description.as_ref())
                .is_ok()
            {
                loaded += 1;
            }
        }
        loaded
    }

    /// Add or overwrite a single pattern.
    pub fn add_pattern(
        &mut self,
        name: &str,
        template: &str,
        description: &str,
    ) -> Result<bool, TemplateError> {
        self.patterns.put(name, template, description)
    }

    // -- Queries --

    /// Generate a word by applying a named pattern to a root.
    ///
    /// The root is normalized and validated but does not have to be
    /// loaded in the index; generation works on any syntactically valid
    /// root. When the root *is* indexed, the generated word is recorded
    /// as a derivative on its node.
    pub fn generate_word(
        &mut self,
        root: &str,
        pattern_name: &str,
    ) -> Result<Generated, GenerateError> {
        let root = Root::parse(root)?;
        let entry = self
            .patterns
            .get(pattern_name)
            .ok_or_else(|| GenerateError::PatternNotFound(pattern_name.to_string()))?;
        let word = normalize(&entry.template.apply(&root));
        let pattern = entry.name.clone();
        if let Some(info) = self.roots.get_mut(&root) {
            info.add_derivative(&word, &pattern);
        }
        Ok(Generated { root, pattern, word })
    }

    /// Generate a word for every loaded pattern.
    pub fn generate_all(&mut self, root: &str) -> Result<Vec<Generated>, RootError> {
        let root = Root::parse(root)?;
        let generated: Vec<Generated> = self
            .patterns
            .iter()
            .map(|entry| Generated {
                root,
                pattern: entry.name.clone(),
                word: normalize(&entry.template.apply(&root)),
            })
            .collect();
        if let Some(info) = self.roots.get_mut(&root) {
            for g in &generated {
                info.add_derivative(&g.word, &g.pattern);
            }
        }
        Ok(generated)
    }

    /// Check whether a word matches a loaded root exactly (after
    /// normalization). A root-existence check, not a re-derivation.
    pub fn validate_word(&self, word: &str) -> bool {
        Root::parse(word)
            .map(|root| self.roots.contains(&root))
            .unwrap_or(false)
    }

    /// Classify a root's letter structure.
    pub fn classify_root(&self, root: &str) -> Result<RootAnalysis, RootError> {
        let root = Root::parse(root)?;
        Ok(classify(&root))
    }

    // -- Enumeration and maintenance --

    /// Loaded roots in ascending order.
    pub fn roots(&self) -> impl Iterator<Item = &Root> {
        self.roots.roots()
    }

    /// Metadata for one loaded root, if present.
    pub fn root_info(&self, root: &str) -> Option<&RootInfo> {
        let root = Root::parse(root).ok()?;
        self.roots.get(&root)
    }

    /// All loaded patterns.
    pub fn patterns(&self) -> impl Iterator<Item = &PatternEntry> {
        self.patterns.iter()
    }

    /// Look up one pattern by name.
    pub fn pattern(&self, name: &str) -> Option<&PatternEntry> {
        self.patterns.get(name)
    }

    /// Remove a root from the index. Returns `true` if it was present.
    pub fn remove_root(&mut self, root: &str) -> bool {
        Root::parse(root)
            .map(|root| self.roots.remove(&root))
            .unwrap_or(false)
    }

    /// Remove a pattern by name. Returns `true` if it was present.
    pub fn remove_pattern(&mut self, name: &str) -> bool {
        self.patterns.remove(name)
    }

    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Aggregate statistics for display.
    pub fn stats(&self) -> EngineStats {
        let mut derivative_count = 0;
        let mut roots_with_derivatives = 0;
        for (_, info) in self.roots.iter() {
            let count = info.derivative_count();
            if count > 0 {
                roots_with_derivatives += 1;
                derivative_count += count;
            }
        }
        EngineStats {
            root_count: self.roots.len(),
            pattern_count: self.patterns.len(),
            tree_height: self.roots.height(),
            load_factor: self.patterns.load_factor(),
            derivative_count,
            roots_with_derivatives,
        }
    }
}
