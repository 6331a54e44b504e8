//! The two project-editing stages of the pipeline.

use std::collections::BTreeSet;

use pods_fs::{FRAMEWORK_EXTENSION, NormalizedPath, PodPath, io};
use walkdir::WalkDir;

use crate::modulemap::{self, LinkDirective};
use crate::{Error, ProjectMutator, Result};

pub const CLANG_ENABLE_MODULES: &str = "CLANG_ENABLE_MODULES";
pub const OTHER_LDFLAGS: &str = "OTHER_LDFLAGS";
pub const OTHER_CFLAGS: &str = "OTHER_CFLAGS";
pub const HEADER_SEARCH_PATHS: &str = "HEADER_SEARCH_PATHS";
pub const FRAMEWORK_SEARCH_PATHS: &str = "FRAMEWORK_SEARCH_PATHS";
pub const ENABLE_BITCODE: &str = "ENABLE_BITCODE";

pub const INHERITED: &str = "$(inherited)";
pub const PROJECT_FRAMEWORKS: &str = "$(PROJECT_DIR)/Frameworks";
pub const OBJC_FLAG: &str = "-ObjC";

/// Apply the build settings every pod-using target needs.
///
/// Appends are not de-duplicated, so running this twice repeats them.
/// Returns a line per edit for reporting.
pub fn apply_baseline_settings(
    project: &mut dyn ProjectMutator,
    target_guid: &str,
    bitcode_disabled: &[String],
) -> Result<Vec<String>> {
    let mut actions = Vec::new();

    project.set_build_property(target_guid, CLANG_ENABLE_MODULES, "YES")?;
    actions.push(format!("{CLANG_ENABLE_MODULES} = YES"));

    for key in [OTHER_LDFLAGS, OTHER_CFLAGS, HEADER_SEARCH_PATHS] {
        project.add_build_property(target_guid, key, INHERITED)?;
        actions.push(format!("{key} += {INHERITED}"));
    }

    project.set_build_property(target_guid, FRAMEWORK_SEARCH_PATHS, INHERITED)?;
    project.add_build_property(target_guid, FRAMEWORK_SEARCH_PATHS, PROJECT_FRAMEWORKS)?;
    actions.push(format!(
        "{FRAMEWORK_SEARCH_PATHS} = {INHERITED} {PROJECT_FRAMEWORKS}"
    ));

    project.add_build_property(target_guid, OTHER_LDFLAGS, OBJC_FLAG)?;
    actions.push(format!("{OTHER_LDFLAGS} += {OBJC_FLAG}"));

    if !bitcode_disabled.is_empty() {
        tracing::warn!(
            pods = %bitcode_disabled.join(", "),
            "bitcode disabled for the whole target because these pods do not support it"
        );
        project.set_build_property(target_guid, ENABLE_BITCODE, "NO")?;
        actions.push(format!(
            "{ENABLE_BITCODE} = NO (required by {})",
            bitcode_disabled.join(", ")
        ));
    }

    Ok(actions)
}

/// What [`integrate_staged_artifacts`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrationReport {
    /// Project paths of the moved framework bundles.
    pub frameworks: Vec<String>,
    /// Project paths of the integrated resources.
    pub resources: Vec<String>,
    /// Frameworks linked because a module map asked for them.
    pub linked_frameworks: Vec<String>,
    /// Linker flags added because a module map asked for them.
    pub link_flags: Vec<String>,
}

impl IntegrationReport {
    pub fn is_empty(&self) -> bool {
        self.frameworks.is_empty()
            && self.resources.is_empty()
            && self.linked_frameworks.is_empty()
            && self.link_flags.is_empty()
    }
}

#[derive(Default)]
struct PendingLinks {
    frameworks: BTreeSet<String>,
    flags: BTreeSet<String>,
}

/// Move the package manager's output into the generated project.
///
/// Returns `Ok(None)` without touching anything when `staging_dir` does
/// not exist. Otherwise every framework bundle under it is moved into
/// `Frameworks/`, every bundle resource into `Resources/`, and module map
/// link directives are applied to the target. The caller persists the
/// project afterwards.
pub fn integrate_staged_artifacts(
    project: &mut dyn ProjectMutator,
    target_guid: &str,
    project_dir: &NormalizedPath,
    staging_dir: &NormalizedPath,
) -> Result<Option<IntegrationReport>> {
    if !staging_dir.is_dir() {
        tracing::debug!(staging = %staging_dir, "no staging directory, nothing to integrate");
        return Ok(None);
    }

    let frameworks_dir = project_dir.join(PodPath::FrameworksDir.as_str());
    let resources_dir = project_dir.join(PodPath::ResourcesDir.as_str());
    io::ensure_dir(&frameworks_dir)?;
    io::ensure_dir(&resources_dir)?;

    let mut report = IntegrationReport::default();
    let mut pending = PendingLinks::default();

    for bundle in find_framework_bundles(staging_dir)? {
        let Some(bundle_name) = bundle.file_name().map(str::to_string) else {
            continue;
        };
        let destination = frameworks_dir.join(&bundle_name);

        io::move_replace(&bundle, &destination)?;
        let project_path = project_relative(&destination, project_dir);
        register(project, target_guid, &destination, &project_path)?;
        tracing::info!(framework = %bundle_name, "integrated framework");
        report.frameworks.push(project_path);

        let module_map = destination.join(PodPath::ModuleMap.as_str());
        if module_map.is_file() {
            collect_links(&io::read_text(&module_map)?, &mut pending);
        }

        let bundle_resources = destination.join(PodPath::BundleResources.as_str());
        if bundle_resources.is_dir() {
            for resource in io::list_dir(&bundle_resources)? {
                let Some(resource_name) = resource.file_name().map(str::to_string) else {
                    continue;
                };
                let target_path = resources_dir.join(&resource_name);
                if resource.is_dir() {
                    io::move_replace(&resource, &target_path)?;
                } else {
                    io::copy_overwrite(&resource, &target_path)?;
                }

                let project_path = project_relative(&target_path, project_dir);
                register(project, target_guid, &target_path, &project_path)?;
                tracing::debug!(resource = %resource_name, "integrated resource");
                report.resources.push(project_path);
            }
        }
    }

    for framework in pending.frameworks {
        project.add_framework(target_guid, &framework, false)?;
        report.linked_frameworks.push(framework);
    }
    for flag in pending.flags {
        project.add_build_property(target_guid, OTHER_LDFLAGS, &flag)?;
        report.link_flags.push(flag);
    }

    Ok(Some(report))
}

/// Framework bundles under `root`, outermost only, in path order.
fn find_framework_bundles(root: &NormalizedPath) -> Result<Vec<NormalizedPath>> {
    let mut bundles = Vec::new();
    let mut walker = WalkDir::new(root.to_native())
        .min_depth(1)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|e| Error::Scan {
            path: root.to_native(),
            message: e.to_string(),
        })?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let path = NormalizedPath::new(entry.path());
        if path.extension() == Some(FRAMEWORK_EXTENSION) {
            // nested bundles travel with their parent
            walker.skip_current_dir();
            bundles.push(path);
        }
    }

    Ok(bundles)
}

fn collect_links(content: &str, pending: &mut PendingLinks) {
    for directive in modulemap::parse(content) {
        match directive {
            LinkDirective::Framework(name) => {
                pending.frameworks.insert(name);
            }
            LinkDirective::Flag(flag) => {
                pending.flags.insert(flag);
            }
            LinkDirective::Ignored => {}
        }
    }
}

fn register(
    project: &mut dyn ProjectMutator,
    target_guid: &str,
    path: &NormalizedPath,
    project_path: &str,
) -> Result<()> {
    let file_guid = project.add_file(path.as_str(), project_path);
    project.add_file_to_build(target_guid, &file_guid)
}

fn project_relative(path: &NormalizedPath, project_dir: &NormalizedPath) -> String {
    path.relative_to(project_dir)
        .unwrap_or_else(|| path.as_str().to_string())
}
