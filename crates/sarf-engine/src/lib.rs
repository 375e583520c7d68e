//! Arabic triliteral root morphology engine.
//!
//! Three tightly coupled subsystems and the handle that composes them:
//!
//! - [`root_index`] -- ordered index of roots backed by an AVL tree
//! - [`pattern_store`] -- resizable separate-chaining hash table of
//!   morphological pattern templates
//! - [`template`] -- validated templates and placeholder substitution
//! - [`classifier`] -- root letter-structure classification
//! - [`engine`] -- the [`engine::MorphologicalEngine`] front door
//!
//! All operations are synchronous and single-threaded; the engine owns its
//! stores exclusively and is passed around as an explicit context object.

pub mod classifier;
pub mod engine;
pub mod pattern_store;
pub mod root_index;
pub mod template;

pub use classifier::classify;
pub use engine::{EngineStats, Generated, GenerateError, MorphologicalEngine};
pub use pattern_store::{PatternEntry, PatternStore};
pub use root_index::{Derivative, RootIndex, RootInfo};
pub use template::{Template, TemplateError};
