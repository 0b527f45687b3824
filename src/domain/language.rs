use serde::{Deserialize, Serialize};

/// Language of an audio track, subtitles or a written work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    #[default]
    CZ,
    EN,
    FR,
    JP,
    SK,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::CZ => write!(f, "CZ"),
            Language::EN => write!(f, "EN"),
            Language::FR => write!(f, "FR"),
            Language::JP => write!(f, "JP"),
            Language::SK => write!(f, "SK"),
        }
    }
}
