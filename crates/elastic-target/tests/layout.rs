use std::path::PathBuf;

use elastic_target::{Error, LayoutTable, OsFamily, Resolver, Variant, compute};
use proptest::prelude::*;
use tempfile::tempdir;

proptest! {
    #[test]
    fn test_non_openbsd_family_uses_default_shield_base(family in "[A-Za-z0-9_-]{0,16}") {
        prop_assume!(family != "OpenBSD");
        let family = OsFamily::parse(&family);
        let path = compute(&LayoutTable::default(), Variant::Shield, "x", Some(&family)).unwrap();
        prop_assert_eq!(path, PathBuf::from("/usr/share/elasticsearch/shield/x"));
    }

    #[test]
    fn test_xpack_base_for_any_family(family in ".{0,16}", val in "[a-z][a-z0-9_.]{0,15}") {
        let family = OsFamily::parse(&family);
        let path = compute(&LayoutTable::default(), Variant::Xpack, &val, Some(&family)).unwrap();
        prop_assert_eq!(path, PathBuf::from("/etc/elasticsearch/x-pack").join(&val));
    }
}

#[test]
fn test_load_layout_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("layout.toml");
    std::fs::write(
        &path,
        r#"
[shield]
default_base = "/usr/share/elasticsearch/shield"
special_base = "/usr/local/elasticsearch/shield"
special_os_family = "OpenBSD"

[x-pack]
default_base = "/usr/local/etc/elasticsearch/x-pack"
"#,
    )
    .unwrap();

    let resolver = Resolver::with_layout(LayoutTable::load(&path).unwrap()).unwrap();
    assert_eq!(
        resolver.resolve(Variant::Xpack, "roles.yml", None).unwrap(),
        PathBuf::from("/usr/local/etc/elasticsearch/x-pack/roles.yml")
    );
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let err = LayoutTable::load(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_load_malformed_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("layout.toml");
    std::fs::write(&path, "[shield\n").unwrap();
    assert!(matches!(LayoutTable::load(&path).unwrap_err(), Error::Config(_)));
}
