//! Security plugin naming schemes.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Which naming/layout scheme a configuration file follows.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Legacy Shield plugin.
    Shield,
    /// X-Pack security.
    #[serde(alias = "x-pack")]
    Xpack,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Shield, Variant::Xpack];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Shield => "shield",
            Variant::Xpack => "xpack",
        }
    }

    pub(crate) fn index(self) -> usize { self as usize }
}

impl std::str::FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shield" => Ok(Variant::Shield),
            "xpack" | "x-pack" => Ok(Variant::Xpack),
            other => Err(Error::InvalidVariant(other.to_string())),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known() {
        assert_eq!("shield".parse::<Variant>().unwrap(), Variant::Shield);
        assert_eq!("xpack".parse::<Variant>().unwrap(), Variant::Xpack);
        assert_eq!("x-pack".parse::<Variant>().unwrap(), Variant::Xpack);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "bogus".parse::<Variant>().unwrap_err();
        assert!(matches!(err, Error::InvalidVariant(ref v) if v == "bogus"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Shield".parse::<Variant>().is_err());
        assert!("".parse::<Variant>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for variant in Variant::ALL {
            assert_eq!(variant.to_string().parse::<Variant>().unwrap(), variant);
        }
    }

    #[test]
    fn test_index_is_dense() {
        assert_eq!(Variant::Shield.index(), 0);
        assert_eq!(Variant::Xpack.index(), 1);
    }
}
