// Triliteral root classification
//
// Maps a root's letter structure to its traditional grammatical category.
// The classifier is a pure function over an already-validated root, so it
// is total: every `Root` yields an analysis.

use sarf_core::character::{is_hamza_letter, is_weak_letter};
use sarf_core::{Root, RootAnalysis, RootCategory, RootSubtype};

/// Classify a root's letter structure.
///
/// Scans the radicals for weak letters and hamza forms, checks whether the
/// second and third radicals are identical, and assigns one primary
/// category by priority: hamzated > doubled > weak > sound. The position
/// sets are always reported in full, so a caller can still detect a
/// secondary trait (e.g. a hamzated root that also contains a weak letter).
pub fn classify(root: &Root) -> RootAnalysis {
    let radicals = root.radicals();

    let weak_positions: Vec<u8> = positions_of(&radicals, is_weak_letter);
    let hamza_positions: Vec<u8> = positions_of(&radicals, is_hamza_letter);
    let doubled = radicals[1] == radicals[2];

    let (category, subtype) = if !hamza_positions.is_empty() {
        (RootCategory::Hamzated, hamza_subtype(&hamza_positions))
    } else if doubled {
        (RootCategory::Doubled, Some(RootSubtype::Doubled))
    } else if !weak_positions.is_empty() {
        (RootCategory::Weak, weak_subtype(&weak_positions))
    } else {
        (RootCategory::Sound, Some(RootSubtype::SoundPerfect))
    };

    RootAnalysis {
        root: *root,
        category,
        subtype,
        weak_positions,
        hamza_positions,
        doubled,
    }
}

fn positions_of(radicals: &[char; 3], predicate: impl Fn(char) -> bool) -> Vec<u8> {
    radicals
        .iter()
        .enumerate()
        .filter(|&(_, &c)| predicate(c))
        .map(|(i, _)| i as u8 + 1)
        .collect()
}

fn hamza_subtype(positions: &[u8]) -> Option<RootSubtype> {
    match positions {
        [1] => Some(RootSubtype::HamzatedInitial),
        [2] => Some(RootSubtype::HamzatedMedial),
        [3] => Some(RootSubtype::HamzatedFinal),
        _ => Some(RootSubtype::HamzatedMultiple),
    }
}

fn weak_subtype(positions: &[u8]) -> Option<RootSubtype> {
    match positions {
        [1] => Some(RootSubtype::Assimilated),
        [2] => Some(RootSubtype::Hollow),
        [3] => Some(RootSubtype::Defective),
        [1, 3] => Some(RootSubtype::LafifSeparated),
        [2, 3] => Some(RootSubtype::LafifJoined),
        [1, 2, 3] => Some(RootSubtype::FullyWeak),
        // Weak first and second radicals only: no traditional term.
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(s: &str) -> RootAnalysis {
        classify(&Root::parse(s).unwrap())
    }

    #[test]
    fn sound_root() {
        let analysis = analyze("كتب");
        assert_eq!(analysis.category, RootCategory::Sound);
        assert_eq!(analysis.subtype, Some(RootSubtype::SoundPerfect));
        assert!(analysis.weak_positions.is_empty());
        assert!(analysis.hamza_positions.is_empty());
        assert!(!analysis.doubled);
    }

    #[test]
    fn hamzated_final() {
        // وطئ keeps its seated hamza through normalization.
        let analysis = analyze("وطئ");
        assert_eq!(analysis.category, RootCategory::Hamzated);
        assert_eq!(analysis.subtype, Some(RootSubtype::HamzatedFinal));
        assert_eq!(analysis.hamza_positions, vec![3]);
    }

    #[test]
    fn hamzated_initial() {
        let analysis = analyze("ءكل");
        assert_eq!(analysis.category, RootCategory::Hamzated);
        assert_eq!(analysis.subtype, Some(RootSubtype::HamzatedInitial));
        assert_eq!(analysis.hamza_positions, vec![1]);
    }

    #[test]
    fn hamza_takes_priority_over_weak() {
        // Hamza at 3, weak letter at 1: primarily hamzated, but the weak
        // position set is still reported.
        let analysis = analyze("وطئ");
        assert_eq!(analysis.category, RootCategory::Hamzated);
        assert_eq!(analysis.weak_positions, vec![1]);
    }

    #[test]
    fn hamza_takes_priority_over_doubled() {
        let analysis = analyze("ءدد");
        assert_eq!(analysis.category, RootCategory::Hamzated);
        assert!(analysis.doubled);
    }

    #[test]
    fn doubled_root() {
        let analysis = analyze("مدد");
        assert_eq!(analysis.category, RootCategory::Doubled);
        assert_eq!(analysis.subtype, Some(RootSubtype::Doubled));
        assert!(analysis.doubled);
    }

    #[test]
    fn doubled_takes_priority_over_weak() {
        // Weak first radical with identical second and third radicals.
        let analysis = analyze("ودد");
        assert_eq!(analysis.category, RootCategory::Doubled);
        assert_eq!(analysis.weak_positions, vec![1]);
    }

    #[test]
    fn weak_subtypes() {
        assert_eq!(analyze("وعد").subtype, Some(RootSubtype::Assimilated));
        assert_eq!(analyze("قول").subtype, Some(RootSubtype::Hollow));
        assert_eq!(analyze("رمي").subtype, Some(RootSubtype::Defective));
        assert_eq!(analyze("وقي").subtype, Some(RootSubtype::LafifSeparated));
        assert_eq!(analyze("طوي").subtype, Some(RootSubtype::LafifJoined));
    }

    #[test]
    fn weak_positions_are_one_based() {
        let analysis = analyze("قول");
        assert_eq!(analysis.category, RootCategory::Weak);
        assert_eq!(analysis.weak_positions, vec![2]);
    }

    #[test]
    fn recomputed_not_cached() {
        let root = Root::parse("كتب").unwrap();
        assert_eq!(classify(&root), classify(&root));
    }
}
