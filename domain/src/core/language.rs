//! Output language value object

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Output language for all generated text (Value Object)
///
/// Japanese and English have dedicated prompt templates; any other
/// language is passed through by name and the model is instructed to
/// answer in it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Language {
    Japanese,
    English,
    Other(String),
}

impl Language {
    /// Short language code, as carried in requests ("ja", "en", ...)
    pub fn as_str(&self) -> &str {
        match self {
            Language::Japanese => "ja",
            Language::English => "en",
            Language::Other(s) => s,
        }
    }

    pub fn is_japanese(&self) -> bool {
        matches!(self, Language::Japanese)
    }

    /// Human-readable name used when instructing the model
    pub fn display_name(&self) -> &str {
        match self {
            Language::Japanese => "Japanese",
            Language::English => "English",
            Language::Other(s) => s,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Japanese
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "ja" | "jp" | "japanese" => Language::Japanese,
            "en" | "english" => Language::English,
            _ => Language::Other(s.to_string()),
        })
    }
}

impl Serialize for Language {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}
