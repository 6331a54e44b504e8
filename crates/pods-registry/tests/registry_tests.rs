//! Declaration merging tests

use pods_registry::{DependencyRegistry, Pod, VersionRequirement};
use pretty_assertions::assert_eq;

#[test]
fn test_redeclaration_is_last_write_wins() {
    let mut registry = DependencyRegistry::new();
    registry
        .declare(Pod::new("Firebase").with_version("3.0").with_min_target_sdk("7.0"))
        .unwrap();
    registry
        .declare(
            Pod::new("Firebase")
                .with_version("3.1+")
                .with_bitcode(false)
                .with_min_target_sdk("8.0"),
        )
        .unwrap();

    assert_eq!(registry.len(), 1);
    let pod = registry.get("Firebase").unwrap();
    assert_eq!(pod.version, VersionRequirement::Compatible("3.1".into()));
    assert!(!pod.bitcode);
    assert_eq!(pod.min_target_sdk.as_deref(), Some("8.0"));
}

#[test]
fn test_single_bitcode_opt_out_is_reported() {
    let mut registry = DependencyRegistry::new();
    registry.declare(Pod::new("WithBitcode")).unwrap();
    assert!(registry.bitcode_disabled_names().is_empty());

    registry.declare(Pod::new("NoBitcode").with_bitcode(false)).unwrap();
    registry.declare(Pod::new("AlsoNoBitcode").with_bitcode(false)).unwrap();

    assert_eq!(
        registry.bitcode_disabled_names(),
        vec!["AlsoNoBitcode", "NoBitcode"]
    );
}

#[test]
fn test_iteration_is_name_sorted() {
    let mut registry = DependencyRegistry::new();
    for name in ["C", "A", "B"] {
        registry.declare(Pod::new(name)).unwrap();
    }
    let order: Vec<&str> = registry.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(order, vec!["A", "B", "C"]);
}

#[test]
fn test_pod_deserializes_from_declaration_toml() {
    #[derive(serde::Deserialize)]
    struct File {
        pod: Vec<Pod>,
    }

    let file: File = toml::from_str(
        r#"
[[pod]]
name = "GoogleSignIn"
version = "2.4.0"
bitcode = false
min_target_sdk = "7.0"

[[pod]]
name = "Firebase/Core"
version = "3.2+"

[[pod]]
name = "Fabric"
"#,
    )
    .unwrap();

    assert_eq!(file.pod.len(), 3);
    assert_eq!(file.pod[0].version, VersionRequirement::Exact("2.4.0".into()));
    assert!(!file.pod[0].bitcode);
    assert_eq!(file.pod[1].version, VersionRequirement::Compatible("3.2".into()));
    assert!(file.pod[1].bitcode, "bitcode defaults to true");
    assert_eq!(file.pod[2].version, VersionRequirement::Latest);
    assert!(file.pod[2].min_target_sdk.is_none());
}

#[test]
fn test_pod_serializes_compactly() {
    let pod = Pod::new("Fabric");
    let rendered = toml::to_string(&pod).unwrap();
    assert_eq!(rendered, "name = \"Fabric\"\nbitcode = true\n");

    let pinned = toml::to_string(&Pod::new("Crashlytics").with_version("3.7+")).unwrap();
    assert!(pinned.contains("version = \"3.7+\""), "{pinned}");
}
