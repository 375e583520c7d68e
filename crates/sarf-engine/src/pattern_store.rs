// Resizable associative store of pattern templates
//
// A separate-chaining hash table: each bucket is a vector of entries that
// share a hash slot, appended in insertion order so lookup within a chain
// is unambiguous regardless of resize history. The table doubles its
// capacity whenever an insertion of a new key pushes the load factor above
// 0.75; overwrites and removals never trigger a resize.

use crate::template::{Template, TemplateError};

/// Initial bucket count. Doubled on every resize.
const INITIAL_CAPACITY: usize = 16;

/// Resize threshold: entries / buckets must not exceed this after any
/// insertion completes.
const MAX_LOAD_FACTOR: f64 = 0.75;

/// A named pattern stored in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternEntry {
    /// Unique pattern name (e.g. "فاعل").
    pub name: String,
    /// The validated template.
    pub template: Template,
    /// Human-readable description.
    pub description: String,
}

/// Hash table mapping pattern names to templates.
#[derive(Debug)]
pub struct PatternStore {
    buckets: Vec<Vec<PatternEntry>>,
    len: usize,
}

impl Default for PatternStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternStore {
    pub fn new() -> Self {
        PatternStore {
            buckets: vec![Vec::new(); INITIAL_CAPACITY],
            len: 0,
        }
    }

    /// Number of stored patterns.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current bucket count.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Current entries-to-buckets ratio.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Insert or overwrite a pattern.
    ///
    /// The template is validated first; an invalid template rejects the
    /// whole entry. Returns `Ok(true)` for a new key and `Ok(false)` for an
    /// overwrite of an existing name (patterns are a managed catalog, so
    /// duplicate names replace rather than fail).
    pub fn put(
        &mut self,
        name: &str,
        template: &str,
        description: &str,
    ) -> Result<bool, TemplateError> {
        let template = Template::parse(template)?;
        let slot = hash_slot(name, self.buckets.len());

        if let Some(entry) = self.buckets[slot].iter_mut().find(|e| e.name == name) {
            entry.template = template;
            entry.description = description.to_string();
            return Ok(false);
        }

        self.buckets[slot].push(PatternEntry {
            name: name.to_string(),
            template,
            description: description.to_string(),
        });
        self.len += 1;
        if self.load_factor() > MAX_LOAD_FACTOR {
            self.grow();
        }
        Ok(true)
    }

    /// Look up a pattern by name.
    pub fn get(&self, name: &str) -> Option<&PatternEntry> {
        let slot = hash_slot(name, self.buckets.len());
        self.buckets[slot].iter().find(|e| e.name == name)
    }

    /// Check whether a pattern name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove a pattern by name. Returns `true` if it was present.
    /// Removal never shrinks the table.
    pub fn remove(&mut self, name: &str) -> bool {
        let slot = hash_slot(name, self.buckets.len());
        let bucket = &mut self.buckets[slot];
        match bucket.iter().position(|e| e.name == name) {
            Some(pos) => {
                bucket.remove(pos);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /// Iterator over all entries, in bucket order then chain order.
    pub fn iter(&self) -> impl Iterator<Item = &PatternEntry> {
        self.buckets.iter().flatten()
    }

    /// Double the capacity and redistribute every entry under the new
    /// modulus. Bucket-relative insertion order is preserved because old
    /// buckets are drained in order and entries are appended.
    fn grow(&mut self) {
        let new_capacity = self.buckets.len() * 2;
        let old_buckets = std::mem::replace(&mut self.buckets, vec![Vec::new(); new_capacity]);
        for entry in old_buckets.into_iter().flatten() {
            let slot = hash_slot(&entry.name, new_capacity);
            self.buckets[slot].push(entry);
        }
    }
}

/// Polynomial rolling hash over code points (prime 31), reduced modulo the
/// bucket count. Deterministic for identical keys within a process run and
/// well distributed for short Arabic strings.
fn hash_slot(key: &str, capacity: usize) -> usize {
    let mut hash: u64 = 0;
    for c in key.chars() {
        hash = hash.wrapping_mul(31).wrapping_add(c as u64);
    }
    (hash % capacity as u64) as usize
}
