// Stateless Arabic text normalization

use crate::character::is_diacritic;

/// Letter-variant unification table.
///
/// Maps the hamza-bearing and wasla alef forms to bare alef, alef maqsura
/// to ya, and ta marbuta to ha. The target letters are fixed points of the
/// mapping, so applying it twice is a no-op.
const UNIFY_MAP: &[(char, char)] = &[
    ('\u{0622}', '\u{0627}'), // آ -> ا
    ('\u{0623}', '\u{0627}'), // أ -> ا
    ('\u{0625}', '\u{0627}'), // إ -> ا
    ('\u{0671}', '\u{0627}'), // ٱ (alef wasla) -> ا
    ('\u{0649}', '\u{064A}'), // ى -> ي
    ('\u{0629}', '\u{0647}'), // ة -> ه
];

/// Remove all tashkeel (combining diacritic) marks, leaving base letters.
///
/// Idempotent: the output contains no diacritics to strip.
pub fn strip_diacritics(text: &str) -> String {
    text.chars().filter(|&c| !is_diacritic(c)).collect()
}

/// Unify letter variants: hamza-bearing alef forms to bare alef,
/// alef maqsura to ya, ta marbuta to ha.
///
/// Idempotent, and order-independent with [`strip_diacritics`] since the
/// two transforms target disjoint code points.
pub fn unify_letters(text: &str) -> String {
    text.chars()
        .map(|c| {
            UNIFY_MAP
                .iter()
                .find(|&&(from, _)| from == c)
                .map_or(c, |&(_, to)| to)
        })
        .collect()
}

/// Full normalization: diacritic stripping composed with letter
/// unification. Non-Arabic characters pass through unchanged.
pub fn normalize(text: &str) -> String {
    unify_letters(&strip_diacritics(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_harakat() {
        assert_eq!(strip_diacritics("كَتَبَ"), "كتب");
        assert_eq!(strip_diacritics("مُدَرِّس"), "مدرس");
    }

    #[test]
    fn strip_is_idempotent() {
        let stripped = strip_diacritics("كَتَبَ");
        assert_eq!(strip_diacritics(&stripped), stripped);
    }

    #[test]
    fn unifies_alef_variants() {
        assert_eq!(unify_letters("أكل"), "اكل");
        assert_eq!(unify_letters("إلى"), "الي");
        assert_eq!(unify_letters("آمن"), "امن");
        assert_eq!(unify_letters("ٱسم"), "اسم");
    }

    #[test]
    fn unifies_ta_marbuta_and_maqsura() {
        assert_eq!(unify_letters("مدرسة"), "مدرسه");
        assert_eq!(unify_letters("رمى"), "رمي");
    }

    #[test]
    fn seated_hamza_forms_are_preserved() {
        // ؤ and ئ carry root-relevant hamza information and must survive.
        assert_eq!(unify_letters("سؤال"), "سؤال");
        assert_eq!(unify_letters("قارئ"), "قارئ");
        assert_eq!(unify_letters("ءكل"), "ءكل");
    }

    #[test]
    fn normalize_composes_both() {
        assert_eq!(normalize("أَكَلَ"), "اكل");
        assert_eq!(normalize("مَدْرَسَة"), "مدرسه");
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in ["أَكَلَ", "مدرسةٌ", "كتب", "hello", "رَمَى"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {input}");
        }
    }

    #[test]
    fn order_independence_with_stripping() {
        for input in ["أَكَلَ", "مدرسةٌ", "رَمَى"] {
            assert_eq!(
                unify_letters(&strip_diacritics(input)),
                strip_diacritics(&unify_letters(input)),
                "input: {input}"
            );
        }
    }

    #[test]
    fn non_arabic_passes_through() {
        assert_eq!(normalize("abc 123"), "abc 123");
        assert_eq!(normalize(""), "");
    }
}
