/// Separator conventions used when grouping a decimal number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub code: &'static str,
    pub decimal: char,
    pub group: char,
}

pub const EN_US: NumberLocale = NumberLocale { code: "en-US", decimal: '.', group: ',' };

// First entry per language is what a bare language tag resolves to.
static LOCALES: &[NumberLocale] = &[
    EN_US,
    NumberLocale { code: "en-GB", decimal: '.', group: ',' },
    NumberLocale { code: "km-KH", decimal: ',', group: '.' },
    NumberLocale { code: "de-DE", decimal: ',', group: '.' },
    NumberLocale { code: "fr-FR", decimal: ',', group: '\u{202F}' },
];

impl NumberLocale {
    /// Finds a locale by BCP 47 style code. Matching ignores case and accepts
    /// `_` in place of `-`; an unknown region falls back to the first locale
    /// sharing the language subtag.
    pub fn lookup(code: &str) -> Option<NumberLocale> {
        let code = code.trim().replace('_', "-");
        if let Some(found) = LOCALES.iter().find(|l| l.code.eq_ignore_ascii_case(&code)) {
            return Some(*found);
        }
        let language = code.split('-').next()?;
        if language.is_empty() {
            return None;
        }
        LOCALES
            .iter()
            .find(|l| l.language().eq_ignore_ascii_case(language))
            .copied()
    }

    /// Like [`lookup`](Self::lookup) but falls back to `en-US`.
    pub fn resolve(code: &str) -> NumberLocale {
        Self::lookup(code).unwrap_or_else(|| {
            tracing::debug!(locale = code, "unknown locale, using en-US separators");
            EN_US
        })
    }

    pub fn language(&self) -> &'static str {
        self.code.split('-').next().unwrap_or(self.code)
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        EN_US
    }
}
