//! Host operating system family, as reported by the host inspection layer.
//!
//! The values follow Facter's `osfamily` fact. This crate never probes the
//! host itself; callers pass the fact in.

use serde::{Deserialize, Serialize};

/// Operating system families.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OsFamily {
    RedHat,
    Debian,
    Suse,
    Archlinux,
    Gentoo,
    OpenBSD,
    FreeBSD,
    Darwin,
    Windows,
    Other(String),
}

impl OsFamily {
    /// Parse a fact value. Unrecognized families are kept verbatim.
    pub fn parse(s: &str) -> Self {
        match s {
            "RedHat" => OsFamily::RedHat,
            "Debian" => OsFamily::Debian,
            "Suse" => OsFamily::Suse,
            "Archlinux" => OsFamily::Archlinux,
            "Gentoo" => OsFamily::Gentoo,
            "OpenBSD" => OsFamily::OpenBSD,
            "FreeBSD" => OsFamily::FreeBSD,
            "Darwin" => OsFamily::Darwin,
            "windows" => OsFamily::Windows,
            other => OsFamily::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            OsFamily::RedHat => "RedHat",
            OsFamily::Debian => "Debian",
            OsFamily::Suse => "Suse",
            OsFamily::Archlinux => "Archlinux",
            OsFamily::Gentoo => "Gentoo",
            OsFamily::OpenBSD => "OpenBSD",
            OsFamily::FreeBSD => "FreeBSD",
            OsFamily::Darwin => "Darwin",
            OsFamily::Windows => "windows",
            OsFamily::Other(s) => s,
        }
    }
}

impl From<&str> for OsFamily {
    fn from(s: &str) -> Self { OsFamily::parse(s) }
}

impl From<String> for OsFamily {
    fn from(s: String) -> Self {
        match OsFamily::parse(&s) {
            OsFamily::Other(_) => OsFamily::Other(s),
            known => known,
        }
    }
}

impl From<OsFamily> for String {
    fn from(family: OsFamily) -> Self { family.as_str().to_string() }
}

impl std::fmt::Display for OsFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_families() {
        assert_eq!(OsFamily::parse("OpenBSD"), OsFamily::OpenBSD);
        assert_eq!(OsFamily::parse("RedHat"), OsFamily::RedHat);
        assert_eq!(OsFamily::parse("windows"), OsFamily::Windows);
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(OsFamily::parse("openbsd"), OsFamily::Other("openbsd".into()));
        assert_eq!(OsFamily::parse("Linux"), OsFamily::Other("Linux".into()));
    }

    #[test]
    fn test_display_round_trips_other() {
        let family = OsFamily::from(String::from("Solaris"));
        assert_eq!(family.to_string(), "Solaris");
        assert_eq!(OsFamily::parse(family.as_str()), family);
    }
}
