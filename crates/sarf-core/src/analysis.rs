// Root classification result types

use std::fmt;

use crate::root::Root;

/// Primary morphological category of a triliteral root.
///
/// Categories are not mutually exclusive in general; the classifier picks
/// one primary category by priority (hamzated > doubled > weak > sound)
/// and reports the full position sets alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootCategory {
    /// صحيح -- no weak letters, no hamza, no doubling.
    Sound,
    /// معتل -- contains at least one weak letter.
    Weak,
    /// مهموز -- contains a hamza in any of its forms.
    Hamzated,
    /// مضعف -- second and third radicals identical.
    Doubled,
}

impl RootCategory {
    /// The traditional Arabic grammatical term.
    pub fn arabic_name(&self) -> &'static str {
        match self {
            RootCategory::Sound => "صحيح",
            RootCategory::Weak => "معتل",
            RootCategory::Hamzated => "مهموز",
            RootCategory::Doubled => "مضعف",
        }
    }
}

impl fmt::Display for RootCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.arabic_name())
    }
}

/// Fine-grained subtype within a primary category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootSubtype {
    /// صحيح سالم -- sound root with no irregularity at all.
    SoundPerfect,
    /// مهموز الفاء -- hamza as first radical.
    HamzatedInitial,
    /// مهموز العين -- hamza as second radical.
    HamzatedMedial,
    /// مهموز اللام -- hamza as third radical.
    HamzatedFinal,
    /// مهموز متعدد -- more than one hamza.
    HamzatedMultiple,
    /// مضعف -- doubled second and third radicals.
    Doubled,
    /// مثال -- weak first radical.
    Assimilated,
    /// أجوف -- weak second radical (hollow).
    Hollow,
    /// ناقص -- weak third radical (defective).
    Defective,
    /// لفيف مفروق -- weak first and third radicals.
    LafifSeparated,
    /// لفيف مقرون -- weak second and third radicals.
    LafifJoined,
    /// معتل كامل -- all three radicals weak.
    FullyWeak,
}

impl RootSubtype {
    /// The traditional Arabic grammatical term.
    pub fn arabic_name(&self) -> &'static str {
        match self {
            RootSubtype::SoundPerfect => "صحيح سالم",
            RootSubtype::HamzatedInitial => "مهموز الفاء",
            RootSubtype::HamzatedMedial => "مهموز العين",
            RootSubtype::HamzatedFinal => "مهموز اللام",
            RootSubtype::HamzatedMultiple => "مهموز متعدد",
            RootSubtype::Doubled => "مضعف",
            RootSubtype::Assimilated => "مثال",
            RootSubtype::Hollow => "أجوف",
            RootSubtype::Defective => "ناقص",
            RootSubtype::LafifSeparated => "لفيف مفروق",
            RootSubtype::LafifJoined => "لفيف مقرون",
            RootSubtype::FullyWeak => "معتل كامل",
        }
    }
}

impl fmt::Display for RootSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.arabic_name())
    }
}

/// Complete analysis of a triliteral root.
///
/// A derived, non-owning view: recomputed on every classification call,
/// never cached or mutated. Positions are 1-based (radical 1, 2, 3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootAnalysis {
    /// The analyzed root.
    pub root: Root,
    /// Primary category, chosen by priority.
    pub category: RootCategory,
    /// Fine-grained subtype, when one applies.
    pub subtype: Option<RootSubtype>,
    /// 1-based positions of weak letters.
    pub weak_positions: Vec<u8>,
    /// 1-based positions of hamza letters.
    pub hamza_positions: Vec<u8>,
    /// Whether the second and third radicals are identical.
    pub doubled: bool,
}

impl fmt::Display for RootAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.root, self.category)?;
        if let Some(subtype) = self.subtype {
            write!(f, " ({subtype})")?;
        }
        Ok(())
    }
}
