//! Pipeline stage tests against temporary host and project directories.

use pods_core::{
    BuildSettings, DeclarationSession, HostSettings, Pipeline, PipelineConfig, Platform,
    ScriptedPrompt, Stage, StageStatus,
};
use pods_fs::NormalizedPath;
use pods_project::{ProjectDocument, ProjectMutator};
use pods_registry::Pod;
use pods_test_utils::host::TestHost;
use tempfile::TempDir;

const PROJECT_FILE: &str = "build/ios/Unity-iPhone.xcodeproj/project.json";

struct Fixture {
    host: TestHost,
    bin: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let host = TestHost::new();
        let mut project = ProjectDocument::new();
        project.add_target("Unity-iPhone");
        project
            .save(&NormalizedPath::new(host.root().join(PROJECT_FILE)))
            .unwrap();
        Self {
            host,
            bin: TempDir::new().unwrap(),
        }
    }

    fn pipeline(&self, pods: Vec<Pod>) -> Pipeline {
        let mut session = DeclarationSession::new();
        for pod in pods {
            session.declare(pod).unwrap();
        }
        let config = PipelineConfig {
            pod_search_paths: vec![self.bin.path().to_path_buf()],
            ..PipelineConfig::default()
        };
        Pipeline::new(
            session.finish(),
            config,
            NormalizedPath::new(self.host.project_dir()),
        )
    }

    fn project(&self) -> (ProjectDocument, String) {
        let project =
            ProjectDocument::load(&NormalizedPath::new(self.host.root().join(PROJECT_FILE)))
                .unwrap();
        let guid = project.target_guid("Unity-iPhone").unwrap();
        (project, guid)
    }
}

fn skip_reason(status: &StageStatus) -> &str {
    match status {
        StageStatus::Skipped { reason } => reason,
        other => panic!("expected a skipped stage, got {other:?}"),
    }
}

mod gating {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn disabled_preference_skips_every_stage() {
        let fixture = Fixture::new();
        let pipeline = fixture
            .pipeline(vec![Pod::new("A")])
            .with_integration_enabled(false);
        let mut settings = HostSettings::new(Platform::Ios, "8.0");
        let before = fixture.project().0;

        let report = pipeline
            .run_all(&mut settings, &mut ScriptedPrompt::accept())
            .unwrap();

        assert_eq!(report.stages.len(), 4);
        assert!(report.stages.iter().all(|stage| stage.is_skipped()));
        assert_eq!(fixture.project().0, before);
        fixture.host.assert_file_not_exists("build/ios/Podfile");
    }

    #[test]
    fn other_platform_skips() {
        let fixture = Fixture::new();
        let pipeline = fixture.pipeline(vec![Pod::new("A")]);
        let settings = HostSettings::new(Platform::Android, "8.0");

        let report = pipeline.patch_project(&settings).unwrap();

        assert!(skip_reason(&report.status).contains("android"));
    }

    #[test]
    fn empty_registry_skips() {
        let fixture = Fixture::new();
        let pipeline = fixture.pipeline(Vec::new());
        let settings = HostSettings::new(Platform::Ios, "8.0");

        let report = pipeline.generate_manifest(&settings).unwrap();

        assert_eq!(skip_reason(&report.status), "no pods declared");
    }
}

mod stages {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn patch_project_disables_bitcode_and_saves() {
        let fixture = Fixture::new();
        let pipeline = fixture.pipeline(vec![
            Pod::new("Good"),
            Pod::new("Legacy").with_bitcode(false),
        ]);
        let settings = HostSettings::new(Platform::Ios, "8.0");

        let report = pipeline.patch_project(&settings).unwrap();

        assert!(report.is_completed());
        let (project, guid) = fixture.project();
        assert_eq!(project.build_property(&guid, "ENABLE_BITCODE"), ["NO"]);
        assert_eq!(
            project.build_property(&guid, "OTHER_LDFLAGS"),
            ["$(inherited)", "-ObjC"]
        );
    }

    #[test]
    fn missing_target_is_an_error() {
        let fixture = Fixture::new();
        let mut session = DeclarationSession::new();
        session.declare(Pod::new("A")).unwrap();
        let config = PipelineConfig {
            target_name: "Other".into(),
            ..PipelineConfig::default()
        };
        let pipeline = Pipeline::new(
            session.finish(),
            config,
            NormalizedPath::new(fixture.host.project_dir()),
        );

        let err = pipeline
            .patch_project(&HostSettings::new(Platform::Ios, "8.0"))
            .unwrap_err();

        assert!(err.to_string().contains("Other"));
    }

    #[test]
    fn generate_manifest_uses_current_target_version() {
        let fixture = Fixture::new();
        let pipeline = fixture.pipeline(vec![
            Pod::new("C"),
            Pod::new("A").with_version("1.2.3"),
            Pod::new("B").with_version("2.0+"),
        ]);
        let settings = HostSettings::new(Platform::Ios, "9.0");

        pipeline.generate_manifest(&settings).unwrap();

        let podfile = fixture.host.read("build/ios/Podfile");
        assert!(podfile.contains("platform :ios, '9.0'"));
        assert!(podfile.contains("target 'Unity-iPhone' do"));
        assert!(podfile.contains("pod 'A', '1.2.3'\npod 'B', '~> 2.0'\npod 'C'\n"));
    }

    #[test]
    fn install_short_circuits_when_upgrade_declined() {
        let fixture = Fixture::new();
        let pipeline = fixture.pipeline(vec![Pod::new("A").with_min_target_sdk("9.0")]);
        let mut settings = HostSettings::new(Platform::Ios, "8.0");
        let mut prompt = ScriptedPrompt::decline();

        let report = pipeline.install_pods(&mut settings, &mut prompt).unwrap();

        assert!(skip_reason(&report.status).contains("required by A"));
        assert_eq!(settings.target_os_version(), "8.0");
        assert_eq!(prompt.asked().len(), 1);
    }

    #[test]
    fn install_short_circuits_after_accepted_upgrade() {
        let fixture = Fixture::new();
        let pipeline = fixture.pipeline(vec![Pod::new("A").with_min_target_sdk("9.0")]);
        let mut settings = HostSettings::new(Platform::Ios, "8.0");

        let report = pipeline
            .install_pods(&mut settings, &mut ScriptedPrompt::accept())
            .unwrap();

        assert!(skip_reason(&report.status).contains("Restart the build"));
        assert_eq!(settings.target_os_version(), "9.0");
    }

    #[test]
    fn missing_pod_fails_install_and_integration_skips() {
        let fixture = Fixture::new();
        let pipeline = fixture.pipeline(vec![Pod::new("A")]);
        let mut settings = HostSettings::new(Platform::Ios, "8.0");

        let report = pipeline
            .run_all(&mut settings, &mut ScriptedPrompt::accept())
            .unwrap();

        let install = report.stage(Stage::InstallPods).unwrap();
        match &install.status {
            StageStatus::Failed { message } => {
                assert!(message.contains("sudo gem install cocoapods"))
            }
            other => panic!("expected failure, got {other:?}"),
        }
        let integrate = report.stage(Stage::IntegrateArtifacts).unwrap();
        assert!(skip_reason(&integrate.status).contains("nothing staged"));
        assert!(report.stage(Stage::PatchProject).unwrap().is_completed());
        assert!(!report.success());
    }

    #[test]
    fn integrate_skips_without_staging_even_if_project_is_missing() {
        let fixture = Fixture::new();
        std::fs::remove_file(fixture.host.root().join(PROJECT_FILE)).unwrap();
        let pipeline = fixture.pipeline(vec![Pod::new("A")]);

        let report = pipeline
            .integrate(&HostSettings::new(Platform::Ios, "8.0"))
            .unwrap();

        assert!(skip_reason(&report.status).contains("nothing staged"));
    }
}

#[cfg(unix)]
mod with_fake_pod {
    use super::*;
    use pretty_assertions::assert_eq;
    use pods_installer::InstallEnv;
    use pods_test_utils::fake_pod::FakePod;
    use pods_test_utils::staging::StagedPods;

    #[test]
    fn full_run_integrates_staged_frameworks() {
        let fixture = Fixture::new();
        let template = TempDir::new().unwrap();
        let staged = StagedPods::new(template.path());
        let bundle = staged.framework("Foo", "Foo");
        staged.module_map(&bundle, "link framework \"Bar\"\nlink sqlite3\n");
        staged.resource(&bundle, "Foo.strings", "strings");
        FakePod::new()
            .stages(template.path())
            .write_to(fixture.bin.path());

        let pipeline = fixture
            .pipeline(vec![Pod::new("Foo").with_version("1.0")])
            .with_env(InstallEnv::with_lang(Some("fr_FR")));
        let mut settings = HostSettings::new(Platform::Ios, "8.0");

        let report = pipeline
            .run_all(&mut settings, &mut ScriptedPrompt::decline())
            .unwrap();

        assert!(report.stages.iter().all(|stage| stage.is_completed()), "{report:#?}");
        assert_eq!(fixture.host.read("build/ios/pod-install.lang"), "fr_FR.UTF-8");
        fixture
            .host
            .assert_file_exists("build/ios/Frameworks/Foo.framework/Foo");
        fixture.host.assert_file_exists("build/ios/Resources/Foo.strings");

        let (project, guid) = fixture.project();
        let target = project.target(&guid).unwrap();
        assert_eq!(target.frameworks[0].name, "Bar.framework");
        assert!(!target.frameworks[0].weak);
        assert_eq!(
            project.build_property(&guid, "OTHER_LDFLAGS"),
            ["$(inherited)", "-ObjC", "-lsqlite3"]
        );
        assert!(project.find_file("Frameworks/Foo.framework").is_some());
        assert!(project.find_file("Resources/Foo.strings").is_some());
    }

    #[test]
    fn failed_install_reports_tool_output() {
        let fixture = Fixture::new();
        FakePod::new()
            .install_fails(1, "Analyzing dependencies\n", "[!] Unable to find a specification\n")
            .write_to(fixture.bin.path());
        let pipeline = fixture.pipeline(vec![Pod::new("Missing")]);
        let mut settings = HostSettings::new(Platform::Ios, "8.0");

        let report = pipeline
            .run_all(&mut settings, &mut ScriptedPrompt::accept())
            .unwrap();

        match &report.stage(Stage::InstallPods).unwrap().status {
            StageStatus::Failed { message } => {
                assert!(message.contains("Analyzing dependencies"));
                assert!(message.contains("Unable to find a specification"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
        assert!(
            report
                .stage(Stage::IntegrateArtifacts)
                .unwrap()
                .is_skipped()
        );
    }

    #[test]
    fn old_cocoapods_fails_install() {
        let fixture = Fixture::new();
        FakePod::new().version("0.39.0").write_to(fixture.bin.path());
        let pipeline = fixture.pipeline(vec![Pod::new("A")]);
        let mut settings = HostSettings::new(Platform::Ios, "8.0");

        let report = pipeline
            .install_pods(&mut settings, &mut ScriptedPrompt::accept())
            .unwrap();

        match &report.status {
            StageStatus::Failed { message } => {
                assert!(message.contains("failed the version check"), "{message}");
            }
            other => panic!("expected failure, got {other:?}"),
        }
        fixture.host.assert_file_not_exists("build/ios/pod-install.lang");
    }
}
