use thiserror::Error;

use crate::variant::Variant;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown variant: {0}")]
    InvalidVariant(String),

    #[error("invalid file name {val:?}: {reason}")]
    InvalidArgument { val: String, reason: &'static str },

    #[error("invalid layout for {variant}: {reason}")]
    Layout {
        variant: Variant,
        reason:  &'static str,
    },

    #[error("failed to parse layout: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_argument(val: &str, reason: &'static str) -> Self {
        Self::InvalidArgument {
            val: val.to_string(),
            reason,
        }
    }
}
