//! Character-level Khmer to Latin transliteration.
//!
//! This is a lookup, not a romanization: every table entry maps to a fixed
//! Latin string regardless of context, several Khmer characters share the
//! same output, and there is no way back. Characters missing from the table
//! (subscripts, digits, punctuation, anything non-Khmer) are copied through.
//!
//! No Unicode normalization happens before lookup. Callers comparing text
//! from mixed sources should run [`crate::normalize_text`] first.

use fxhash::FxHashMap;
use once_cell::sync::Lazy;

/// Source units and their Latin approximations.
///
/// Every key is a single codepoint except `ុំ` (vowel sign U + nikahit),
/// which is only reachable in [`ScanMode::LongestMatch`].
static KHMER_TO_LATIN: &[(&str, &str)] = &[
    // Consonants
    ("\u{1780}", "k"),   // ក
    ("\u{1781}", "kh"),  // ខ
    ("\u{1782}", "g"),   // គ
    ("\u{1783}", "gh"),  // ឃ
    ("\u{1784}", "ng"),  // ង
    ("\u{1785}", "ch"),  // ច
    ("\u{1786}", "chh"), // ឆ
    ("\u{1787}", "j"),   // ជ
    ("\u{1788}", "jh"),  // ឈ
    ("\u{1789}", "ny"),  // ញ
    ("\u{178A}", "d"),   // ដ
    ("\u{178B}", "th"),  // ឋ
    ("\u{178C}", "dh"),  // ឌ
    ("\u{178D}", "thh"), // ឍ
    ("\u{178E}", "n"),   // ណ
    ("\u{178F}", "t"),   // ត
    ("\u{1790}", "th"),  // ថ
    ("\u{1791}", "d"),   // ទ
    ("\u{1792}", "dh"),  // ធ
    ("\u{1793}", "n"),   // ន
    ("\u{1794}", "b"),   // ប
    ("\u{1795}", "ph"),  // ផ
    ("\u{1796}", "p"),   // ព
    ("\u{1797}", "f"),   // ភ
    ("\u{1798}", "m"),   // ម
    ("\u{1799}", "y"),   // យ
    ("\u{179A}", "r"),   // រ
    ("\u{179B}", "l"),   // ល
    ("\u{179C}", "v"),   // វ
    ("\u{179F}", "s"),   // ស
    ("\u{17A0}", "h"),   // ហ
    ("\u{17A2}", "a"),   // អ
    // Independent vowels
    ("\u{17A3}", "aa"),
    ("\u{17A4}", "ae"),
    ("\u{17A5}", "i"),
    ("\u{17A6}", "ii"),
    ("\u{17A7}", "u"),
    ("\u{17A8}", "uu"),
    ("\u{17A9}", "o"),
    ("\u{17AA}", "oo"),
    ("\u{17AB}", "e"),
    ("\u{17AC}", "ee"),
    ("\u{17AD}", "ai"),
    ("\u{17AE}", "au"),
    ("\u{17AF}", "ae"),
    ("\u{17B0}", "a"),
    ("\u{17B1}", "ao"),
    ("\u{17B2}", "a"),
    ("\u{17B3}", "aa"),
    // Inherent vowels
    ("\u{17B4}", "o"),
    ("\u{17B5}", "oo"),
    // Dependent vowels
    ("\u{17B6}", "e"),
    ("\u{17B7}", "i"),
    ("\u{17B8}", "ii"),
    ("\u{17B9}", "u"),
    ("\u{17BA}", "uu"),
    ("\u{17BB}", "o"),
    ("\u{17BC}", "oo"),
    ("\u{17BD}", "u"),
    ("\u{17C1}", "e"),
    ("\u{17C2}", "ae"),
    ("\u{17C3}", "ai"),
    ("\u{17C4}", "o"),
    ("\u{17C5}", "au"),
    ("\u{17BB}\u{17C6}", "om"),
    // Signs
    ("\u{17C7}", "h"),
    ("\u{17C8}", ":"),
    ("\u{17C9}", "'"),
    ("\u{17CA}", "`"),
    ("\u{17CB}", "'"),
    ("\u{17CF}", "a"),
];

/// How source text is cut into lookup units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Try the longest table key at each position before single codepoints.
    #[default]
    LongestMatch,
    /// Look up one codepoint at a time. Multi-codepoint keys never match.
    Codepoint,
}

struct Table {
    singles: FxHashMap<char, &'static str>,
    clusters: FxHashMap<&'static str, &'static str>,
    max_cluster_chars: usize,
}

static TABLE: Lazy<Table> = Lazy::new(|| {
    let mut singles = FxHashMap::default();
    let mut clusters = FxHashMap::default();
    let mut max_cluster_chars = 0;
    for &(key, latin) in KHMER_TO_LATIN {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                singles.insert(c, latin);
            }
            _ => {
                max_cluster_chars = max_cluster_chars.max(key.chars().count());
                clusters.insert(key, latin);
            }
        }
    }
    Table { singles, clusters, max_cluster_chars }
});

impl Table {
    /// Longest cluster key that prefixes `rest`, with its byte length.
    fn match_cluster(&self, rest: &str) -> Option<(&'static str, usize)> {
        (2..=self.max_cluster_chars).rev().find_map(|chars| {
            // Byte offset just past the first `chars` chars, if there are that many.
            let end = rest
                .char_indices()
                .map(|(i, _)| i)
                .chain(std::iter::once(rest.len()))
                .nth(chars)?;
            self.clusters.get(&rest[..end]).map(|latin| (*latin, end))
        })
    }
}

/// Transliterator with an explicit scanning mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transliterator {
    mode: ScanMode,
}

impl Transliterator {
    pub fn new(mode: ScanMode) -> Self {
        Transliterator { mode }
    }

    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    pub fn transliterate(&self, text: &str) -> String {
        let table = &*TABLE;
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(c) = rest.chars().next() {
            if self.mode == ScanMode::LongestMatch {
                if let Some((latin, len)) = table.match_cluster(rest) {
                    out.push_str(latin);
                    rest = &rest[len..];
                    continue;
                }
            }
            match table.singles.get(&c) {
                Some(latin) => out.push_str(latin),
                None => out.push(c),
            }
            rest = &rest[c.len_utf8()..];
        }
        out
    }
}

/// Transliterates Khmer text to Latin letters using longest-match scanning.
///
/// ```
/// use khmer_locale::khmer_to_latin;
///
/// assert_eq!(khmer_to_latin("ខ"), "kh");
/// assert_eq!(khmer_to_latin("hello"), "hello");
/// ```
pub fn khmer_to_latin(text: &str) -> String {
    Transliterator::default().transliterate(text)
}
