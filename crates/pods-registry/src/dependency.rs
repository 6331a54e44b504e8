//! A single declared pod and its version requirement.

use serde::{Deserialize, Serialize};

/// How a pod's version is pinned in the generated manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum VersionRequirement {
    /// No constraint: whatever the package manager considers latest.
    #[default]
    Latest,
    /// `X+`: this version or any later one within the same major release.
    Compatible(String),
    /// Any other string: this exact version.
    Exact(String),
}

impl VersionRequirement {
    /// Interpret a declared version string.
    ///
    /// Absent, empty and `latest` (any case) are unconstrained; a trailing
    /// `+` makes the requirement compatible-with; anything else is exact.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim) else {
            return Self::Latest;
        };
        if raw.is_empty() || raw.eq_ignore_ascii_case("latest") {
            return Self::Latest;
        }
        match raw.strip_suffix('+') {
            Some(base) => Self::Compatible(base.trim_end().to_string()),
            None => Self::Exact(raw.to_string()),
        }
    }

    /// The version expression the package manager understands, if any.
    pub fn constraint(&self) -> Option<String> {
        match self {
            Self::Latest => None,
            Self::Compatible(base) => Some(format!("~> {base}")),
            Self::Exact(version) => Some(version.clone()),
        }
    }

    pub fn is_latest(&self) -> bool {
        matches!(self, Self::Latest)
    }
}

impl From<Option<String>> for VersionRequirement {
    fn from(raw: Option<String>) -> Self {
        Self::parse(raw.as_deref())
    }
}

impl From<VersionRequirement> for Option<String> {
    fn from(requirement: VersionRequirement) -> Self {
        match requirement {
            VersionRequirement::Latest => None,
            VersionRequirement::Compatible(base) => Some(format!("{base}+")),
            VersionRequirement::Exact(version) => Some(version),
        }
    }
}

impl std::fmt::Display for VersionRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Latest => f.write_str("latest"),
            Self::Compatible(base) => write!(f, "{base}+"),
            Self::Exact(version) => f.write_str(version),
        }
    }
}

fn default_bitcode() -> bool {
    true
}

/// A native dependency declared by a plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pod {
    /// Registry key and manifest name.
    pub name: String,
    #[serde(default, skip_serializing_if = "VersionRequirement::is_latest")]
    pub version: VersionRequirement,
    /// Whether the pod's binaries were built with bitcode.
    #[serde(default = "default_bitcode")]
    pub bitcode: bool,
    /// Minimum OS target in `major.minor` form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_target_sdk: Option<String>,
}

impl Pod {
    /// A pod at its latest version, built with bitcode, with no minimum target.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: VersionRequirement::Latest,
            bitcode: true,
            min_target_sdk: None,
        }
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = VersionRequirement::parse(Some(version));
        self
    }

    pub fn with_bitcode(mut self, bitcode: bool) -> Self {
        self.bitcode = bitcode;
        self
    }

    pub fn with_min_target_sdk(mut self, version: impl Into<String>) -> Self {
        self.min_target_sdk = Some(version.into());
        self
    }
}
