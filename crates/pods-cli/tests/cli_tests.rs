//! Integration tests for the pods CLI binary.
//!
//! These tests exercise the actual compiled binary using assert_cmd.

use assert_cmd::Command;
use pods_fs::NormalizedPath;
use pods_project::ProjectDocument;
use pods_test_utils::host::TestHost;
use predicates::prelude::*;

/// A host with a generated project and an isolated preferences file.
struct CliFixture {
    host: TestHost,
}

impl CliFixture {
    fn new() -> Self {
        let host = TestHost::new();
        let mut project = ProjectDocument::new();
        project.add_target("Unity-iPhone");
        project
            .save(&NormalizedPath::new(
                host.project_dir()
                    .join("Unity-iPhone.xcodeproj/project.json"),
            ))
            .unwrap();
        Self { host }
    }

    /// Point `pod` discovery at a directory inside the fixture.
    fn search_only(&self, bin: &str) {
        let dir = self.host.root().join(bin);
        std::fs::create_dir_all(&dir).unwrap();
        self.host.write(
            "host/.pods/config.toml",
            &format!("pod_search_paths = [{:?}]\n", dir.display().to_string()),
        );
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pods"));
        cmd.current_dir(self.host.root())
            .env("PODS_HOST", self.host.host_dir())
            .env("PODS_PREFERENCES", self.host.root().join("prefs.toml"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn test_help_output() {
    let fixture = CliFixture::new();
    fixture
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("CocoaPods"));
}

#[test]
fn test_list_without_plugins() {
    let fixture = CliFixture::new();
    fixture
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No pods declared."));
}

#[test]
fn test_list_json() {
    let fixture = CliFixture::new();
    fixture.host.write_plugin(
        "ads",
        "[[pod]]\nname = \"Ads\"\nversion = \"3.1+\"\nbitcode = false\n",
    );

    let output = fixture.cmd().args(["list", "--json"]).output().unwrap();

    assert!(output.status.success());
    let pods: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(pods[0]["name"], "Ads");
    assert_eq!(pods[0]["version"], "3.1+");
    assert_eq!(pods[0]["bitcode"], false);
}

#[test]
fn test_podfile_is_sorted() {
    let fixture = CliFixture::new();
    fixture.host.write_build_settings("ios", "9.0");
    fixture.host.write_plugin(
        "one",
        "[[pod]]\nname = \"C\"\n\n[[pod]]\nname = \"A\"\nversion = \"1.2.3\"\n",
    );
    fixture
        .host
        .write_plugin("two", "[[pod]]\nname = \"B\"\nversion = \"2.0+\"\n");

    fixture
        .cmd()
        .arg("podfile")
        .assert()
        .success()
        .stdout(predicate::str::contains("platform :ios, '9.0'"))
        .stdout(predicate::str::contains(
            "pod 'A', '1.2.3'\npod 'B', '~> 2.0'\npod 'C'\nend",
        ));
}

#[test]
fn test_check_with_yes_raises_target() {
    let fixture = CliFixture::new();
    fixture.host.write_build_settings("ios", "8.0");
    fixture.host.write_plugin(
        "maps",
        "[[pod]]\nname = \"Maps\"\nmin_target_sdk = \"10.0\"\n",
    );

    fixture
        .cmd()
        .args(["check", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("changed from 8.0 to 10.0"));

    let settings = fixture.host.read("host/.pods/build-settings.toml");
    assert!(settings.contains("target_os_version = \"10.0\""));
}

#[test]
fn test_check_without_terminal_keeps_target() {
    let fixture = CliFixture::new();
    fixture.host.write_build_settings("ios", "8.0");
    fixture.host.write_plugin(
        "maps",
        "[[pod]]\nname = \"Maps\"\nmin_target_sdk = \"10.0\"\n",
    );

    fixture
        .cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("is below 10.0 required by Maps"));

    let settings = fixture.host.read("host/.pods/build-settings.toml");
    assert!(settings.contains("target_os_version = \"8.0\""));
}

#[test]
fn test_disabled_build_skips_every_stage() {
    let fixture = CliFixture::new();
    fixture.host.write_plugin("ads", "[[pod]]\nname = \"Ads\"\n");

    fixture.cmd().arg("disable").assert().success();
    fixture
        .cmd()
        .args(["build", "build/ios"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pod integration is disabled"));

    fixture.host.assert_file_not_exists("build/ios/Podfile");
}

#[test]
fn test_build_without_cocoapods_fails_install_stage() {
    let fixture = CliFixture::new();
    fixture.search_only("empty-bin");
    fixture.host.write_plugin("ads", "[[pod]]\nname = \"Ads\"\n");

    fixture
        .cmd()
        .args(["build", "build/ios"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("FAILED"))
        .stdout(predicate::str::contains("sudo gem install cocoapods"))
        .stderr(predicate::str::contains("one or more build stages failed"));

    fixture.host.assert_file_exists("build/ios/Podfile");
}

#[cfg(unix)]
#[test]
fn test_build_json_with_fake_pod() {
    use pods_test_utils::fake_pod::FakePod;
    use pods_test_utils::staging::StagedPods;

    let fixture = CliFixture::new();
    fixture.search_only("bin");
    let staged = StagedPods::new(fixture.host.root().join("template"));
    staged.framework("Ads", "Ads");
    FakePod::new()
        .stages(staged.root())
        .write_to(&fixture.host.root().join("bin"));
    fixture.host.write_plugin("ads", "[[pod]]\nname = \"Ads\"\n");

    let output = fixture
        .cmd()
        .args(["build", "build/ios", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{output:?}");
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let stages = report["stages"].as_array().unwrap();
    assert_eq!(stages.len(), 4);
    assert!(stages.iter().all(|stage| stage["status"] == "completed"));
    fixture
        .host
        .assert_file_exists("build/ios/Frameworks/Ads.framework/Ads");
}

#[test]
fn test_completions_bash() {
    let fixture = CliFixture::new();
    fixture
        .cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pods"));
}
