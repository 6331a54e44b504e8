//! Scripted stand-ins for the `pod` executable.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Behaviour of a fake `pod` shell script.
///
/// On `install` the script records `$LANG` to `pod-install.lang` in its
/// working directory, prints the configured output and, when a template is
/// set, copies it to `./Pods`.
#[derive(Debug, Clone)]
pub struct FakePod {
    version_output: String,
    version_exit: i32,
    install_exit: i32,
    install_stdout: String,
    install_stderr: String,
    template: Option<PathBuf>,
}

impl Default for FakePod {
    fn default() -> Self {
        Self::new()
    }
}

impl FakePod {
    /// A well-behaved CocoaPods 1.11.3.
    pub fn new() -> Self {
        Self {
            version_output: "1.11.3".to_string(),
            version_exit: 0,
            install_exit: 0,
            install_stdout: "Pod installation complete!\n".to_string(),
            install_stderr: String::new(),
            template: None,
        }
    }

    pub fn version(mut self, output: &str) -> Self {
        self.version_output = output.to_string();
        self
    }

    pub fn version_exit(mut self, code: i32) -> Self {
        self.version_exit = code;
        self
    }

    pub fn install_fails(mut self, code: i32, stdout: &str, stderr: &str) -> Self {
        self.install_exit = code;
        self.install_stdout = stdout.to_string();
        self.install_stderr = stderr.to_string();
        self
    }

    /// Copy the contents of `template` into `./Pods` on install.
    pub fn stages(mut self, template: &Path) -> Self {
        self.template = Some(template.to_path_buf());
        self
    }

    /// Write the script as `<dir>/pod` and make it executable.
    pub fn write_to(&self, dir: &Path) -> PathBuf {
        fs::create_dir_all(dir).unwrap();
        let copy = match &self.template {
            Some(template) => format!(
                "  mkdir -p Pods && cp -R {}/. Pods/\n",
                quote(&template.display().to_string())
            ),
            None => String::new(),
        };
        let script = format!(
            "#!/bin/sh\n\
             if [ \"$1\" = \"--version\" ]; then\n\
             \x20 printf '%s\\n' {version}\n\
             \x20 exit {version_exit}\n\
             fi\n\
             if [ \"$1\" = \"install\" ]; then\n\
             \x20 printf '%s' \"$LANG\" > pod-install.lang\n\
             \x20 printf '%s' {stdout}\n\
             \x20 printf '%s' {stderr} >&2\n\
             {copy}\
             \x20 exit {install_exit}\n\
             fi\n\
             exit 64\n",
            version = quote(&self.version_output),
            version_exit = self.version_exit,
            stdout = quote(&self.install_stdout),
            stderr = quote(&self.install_stderr),
            install_exit = self.install_exit,
        );

        let path = dir.join("pod");
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }
}

/// Single-quote for `sh`.
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}
