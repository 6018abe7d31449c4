use crate::lexicon::EmotionCategory;
use std::path::PathBuf;
use thiserror::Error;

/// Problems loading or validating an external lexicon file.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse lexicon TOML")]
    Parse(#[from] toml::de::Error),

    #[error("unknown emotion category {0:?}")]
    UnknownCategory(String),

    #[error("empty keyword list for category {0}")]
    EmptyKeywords(EmotionCategory),

    #[error("empty response list for category {0}")]
    EmptyResponses(EmotionCategory),
}
