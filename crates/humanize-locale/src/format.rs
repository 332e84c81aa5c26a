//! Date and time format overrides
//!
//! Patterns use the single-letter mini-language of the humanize engine
//! (`d` day of month, `j` day without padding, `F` month name, `m` month
//! number, `Y` year, `H` hour, `i` minute, ...). Any ASCII letter is a field
//! placeholder, a backslash escapes the next character, everything else is
//! a literal separator. Descriptors store patterns verbatim; the tokenizer
//! here exists for consumers and tooling that need to inspect them.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Which of the four pattern slots a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    /// Long date, e.g. `d F Y`
    Date,
    /// Time of day, e.g. `H:i`
    Time,
    /// Month and day without year, e.g. `j F`
    MonthDay,
    /// Numeric date, e.g. `d.m.Y`
    ShortDate,
}

impl FormatKind {
    /// All slots in declaration order
    pub const ALL: [Self; 4] = [Self::Date, Self::Time, Self::MonthDay, Self::ShortDate];
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Date => "date",
            Self::Time => "time",
            Self::MonthDay => "month_day",
            Self::ShortDate => "short_date",
        };
        f.write_str(name)
    }
}

/// Locale-specific patterns superseding the library defaults.
///
/// `None` fields defer to [`FormatDefaults`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOverrides {
    pub date_format: Option<Cow<'static, str>>,
    pub time_format: Option<Cow<'static, str>>,
    pub month_day_format: Option<Cow<'static, str>>,
    pub short_date_format: Option<Cow<'static, str>>,
}

impl FormatOverrides {
    /// The override for `kind`, if the locale supplies one
    pub fn get(&self, kind: FormatKind) -> Option<&str> {
        self.slot(kind).as_deref()
    }

    /// Set or replace the override for `kind`
    pub fn set(&mut self, kind: FormatKind, pattern: impl Into<Cow<'static, str>>) {
        *self.slot_mut(kind) = Some(pattern.into());
    }

    /// True when no slot carries an override
    pub fn is_empty(&self) -> bool {
        FormatKind::ALL.iter().all(|kind| self.slot(*kind).is_none())
    }

    /// Fill unset slots from `defaults`
    pub fn resolve(&self, defaults: &FormatDefaults) -> ResolvedFormats {
        let pick = |kind: FormatKind| {
            self.get(kind)
                .map_or_else(|| defaults.get(kind).to_string(), ToString::to_string)
        };

        ResolvedFormats {
            date_format: pick(FormatKind::Date),
            time_format: pick(FormatKind::Time),
            month_day_format: pick(FormatKind::MonthDay),
            short_date_format: pick(FormatKind::ShortDate),
        }
    }

    fn slot(&self, kind: FormatKind) -> &Option<Cow<'static, str>> {
        match kind {
            FormatKind::Date => &self.date_format,
            FormatKind::Time => &self.time_format,
            FormatKind::MonthDay => &self.month_day_format,
            FormatKind::ShortDate => &self.short_date_format,
        }
    }

    fn slot_mut(&mut self, kind: FormatKind) -> &mut Option<Cow<'static, str>> {
        match kind {
            FormatKind::Date => &mut self.date_format,
            FormatKind::Time => &mut self.time_format,
            FormatKind::MonthDay => &mut self.month_day_format,
            FormatKind::ShortDate => &mut self.short_date_format,
        }
    }
}

/// The library's standard patterns, used for every slot a locale leaves unset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDefaults {
    pub date_format: &'static str,
    pub time_format: &'static str,
    pub month_day_format: &'static str,
    pub short_date_format: &'static str,
}

impl FormatDefaults {
    /// Default pattern for `kind`
    pub fn get(&self, kind: FormatKind) -> &'static str {
        match kind {
            FormatKind::Date => self.date_format,
            FormatKind::Time => self.time_format,
            FormatKind::MonthDay => self.month_day_format,
            FormatKind::ShortDate => self.short_date_format,
        }
    }
}

impl Default for FormatDefaults {
    fn default() -> Self {
        Self {
            date_format: "N j, Y",
            time_format: "P",
            month_day_format: "F j",
            short_date_format: "m/d/Y",
        }
    }
}

/// All four patterns after applying overrides to defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedFormats {
    pub date_format: String,
    pub time_format: String,
    pub month_day_format: String,
    pub short_date_format: String,
}

impl ResolvedFormats {
    /// Pattern for `kind`
    pub fn get(&self, kind: FormatKind) -> &str {
        match kind {
            FormatKind::Date => &self.date_format,
            FormatKind::Time => &self.time_format,
            FormatKind::MonthDay => &self.month_day_format,
            FormatKind::ShortDate => &self.short_date_format,
        }
    }
}

/// One lexical unit of a format pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternToken {
    /// Placeholder letter, e.g. `d` or `F`
    Field(char),
    /// Literal text, including escaped letters
    Literal(String),
}

/// Split `pattern` into fields and literal runs.
///
/// Adjacent literal characters are merged into one token. A trailing lone
/// backslash is kept as a literal backslash.
pub fn tokenize(pattern: &str) -> Vec<PatternToken> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            literal.push(chars.next().unwrap_or('\\'));
        } else if c.is_ascii_alphabetic() {
            if !literal.is_empty() {
                tokens.push(PatternToken::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(PatternToken::Field(c));
        } else {
            literal.push(c);
        }
    }

    if !literal.is_empty() {
        tokens.push(PatternToken::Literal(literal));
    }

    tokens
}

/// Placeholder letters of `pattern`, in order of appearance
pub fn fields(pattern: &str) -> Vec<char> {
    tokenize(pattern)
        .into_iter()
        .filter_map(|token| match token {
            PatternToken::Field(c) => Some(c),
            PatternToken::Literal(_) => None,
        })
        .collect()
}
