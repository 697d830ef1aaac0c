use std::fmt;

pub const DEFAULT_TARGET_LANGUAGE: &str = "Spanish";

/// Free-form name of the language a translation is requested in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLanguage(String);

impl TargetLanguage {
    /// Blank or missing input falls back to Spanish.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(lang) if !lang.is_empty() => Self(lang.to_string()),
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TargetLanguage {
    fn default() -> Self {
        Self(DEFAULT_TARGET_LANGUAGE.to_string())
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
