// Arabic character classification

// ---------------------------------------------------------------------------
// Arabic letter inventory
// ---------------------------------------------------------------------------

/// Arabic letters accepted as root radicals: the 28 base letters plus the
/// standalone hamza, the hamza-carrying forms and ta marbuta.
pub const ARABIC_LETTERS: &[char] = &[
    '\u{0627}', // ا ALEF
    '\u{0628}', // ب BEH
    '\u{062A}', // ت TEH
    '\u{062B}', // ث THEH
    '\u{062C}', // ج JEEM
    '\u{062D}', // ح HAH
    '\u{062E}', // خ KHAH
    '\u{062F}', // د DAL
    '\u{0630}', // ذ THAL
    '\u{0631}', // ر REH
    '\u{0632}', // ز ZAIN
    '\u{0633}', // س SEEN
    '\u{0634}', // ش SHEEN
    '\u{0635}', // ص SAD
    '\u{0636}', // ض DAD
    '\u{0637}', // ط TAH
    '\u{0638}', // ظ ZAH
    '\u{0639}', // ع AIN
    '\u{063A}', // غ GHAIN
    '\u{0641}', // ف FEH
    '\u{0642}', // ق QAF
    '\u{0643}', // ك KAF
    '\u{0644}', // ل LAM
    '\u{0645}', // م MEEM
    '\u{0646}', // ن NOON
    '\u{0647}', // ه HEH
    '\u{0648}', // و WAW
    '\u{064A}', // ي YEH
    '\u{0621}', // ء HAMZA
    '\u{0622}', // آ ALEF WITH MADDA ABOVE
    '\u{0623}', // أ ALEF WITH HAMZA ABOVE
    '\u{0625}', // إ ALEF WITH HAMZA BELOW
    '\u{0626}', // ئ YEH WITH HAMZA ABOVE
    '\u{0624}', // ؤ WAW WITH HAMZA ABOVE
    '\u{0629}', // ة TEH MARBUTA
];

/// Weak letters (semivowels / long vowels): و ي ا plus alef maqsura ى.
///
/// These behave irregularly in derivation (hollow, defective and
/// assimilated root families).
pub const WEAK_LETTERS: &[char] = &['\u{0648}', '\u{064A}', '\u{0627}', '\u{0649}'];

/// Hamza letter and its seated orthographic variants: ء أ إ آ ؤ ئ.
pub const HAMZA_LETTERS: &[char] = &[
    '\u{0621}', // ء
    '\u{0623}', // أ
    '\u{0625}', // إ
    '\u{0622}', // آ
    '\u{0624}', // ؤ
    '\u{0626}', // ئ
];

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Check whether a character is an Arabic letter usable as a root radical.
pub fn is_arabic_letter(c: char) -> bool {
    ARABIC_LETTERS.contains(&c)
}

/// Check whether a character is a tashkeel (diacritic) mark.
///
/// Covers the harakat range U+064B..=U+0652 plus the madda and hamza
/// combining marks U+0653..=U+0655.
pub fn is_diacritic(c: char) -> bool {
    ('\u{064B}'..='\u{0655}').contains(&c)
}

/// Check whether a character is one of the weak letters.
pub fn is_weak_letter(c: char) -> bool {
    WEAK_LETTERS.contains(&c)
}

/// Check whether a character is a hamza or one of its seated variants.
pub fn is_hamza_letter(c: char) -> bool {
    HAMZA_LETTERS.contains(&c)
}
