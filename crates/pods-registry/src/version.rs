//! Platform version encoding and the target-upgrade decision.
//!
//! A `major.minor` platform version is encoded as the integer formed by its
//! digits with the dots removed, so `7.1` becomes `71` and compares as
//! `major * 10 + minor`. This only holds for single-digit minors: `9.10`
//! encodes to `910`, which reads back as `91.0`. Callers keep to
//! single-digit minors.
//!
//! # Examples
//!
//! ```
//! use pods_registry::{DependencyRegistry, PlatformVersion, Pod, needs_upgrade};
//!
//! let mut registry = DependencyRegistry::new();
//! registry.declare(Pod::new("Firebase").with_min_target_sdk("8.0")).unwrap();
//!
//! let current: PlatformVersion = "7.1".parse().unwrap();
//! let upgrade = needs_upgrade(current, &registry).unwrap().unwrap();
//! assert_eq!(upgrade.required.to_string(), "8.0");
//! assert_eq!(upgrade.blocking, vec!["Firebase"]);
//! ```

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::registry::DependencyRegistry;

/// Comparable scalar form of a `major.minor` platform version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlatformVersion(u32);

impl PlatformVersion {
    pub const ZERO: Self = Self(0);

    /// Build from components. `minor` is expected to be a single digit.
    pub fn new(major: u32, minor: u32) -> Self {
        Self(major * 10 + minor)
    }

    /// Parse a dotted version by dropping the dots and reading the digits.
    pub fn parse(value: &str) -> Result<Self> {
        let digits: String = value.chars().filter(|c| *c != '.').collect();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidPlatformVersion {
                value: value.to_string(),
            });
        }
        digits
            .parse::<u32>()
            .map(Self)
            .map_err(|_| Error::InvalidPlatformVersion {
                value: value.to_string(),
            })
    }

    pub fn major(&self) -> u32 {
        self.0 / 10
    }

    pub fn minor(&self) -> u32 {
        self.0 % 10
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl FromStr for PlatformVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major(), self.minor())
    }
}

/// Pod names grouped by the minimum platform version they require.
///
/// Pods with no stated minimum (or `0.0`) are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionBucket {
    buckets: BTreeMap<PlatformVersion, Vec<String>>,
}

impl VersionBucket {
    /// The lowest required version and the pods requiring exactly it.
    pub fn lowest(&self) -> Option<(PlatformVersion, &[String])> {
        self.buckets
            .iter()
            .next()
            .map(|(version, names)| (*version, names.as_slice()))
    }

    pub fn get(&self, version: PlatformVersion) -> Option<&[String]> {
        self.buckets.get(&version).map(Vec::as_slice)
    }

    /// Buckets in ascending version order.
    pub fn iter(&self) -> impl Iterator<Item = (PlatformVersion, &[String])> {
        self.buckets
            .iter()
            .map(|(version, names)| (*version, names.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Group declared pods by their minimum platform version.
///
/// Fails on the first minimum that is not a valid version string.
pub fn bucket_by_min_version(registry: &DependencyRegistry) -> Result<VersionBucket> {
    let mut buckets: BTreeMap<PlatformVersion, Vec<String>> = BTreeMap::new();
    for pod in registry.iter() {
        let Some(raw) = pod.min_target_sdk.as_deref() else {
            continue;
        };
        let version = PlatformVersion::parse(raw)?;
        if version.is_zero() {
            continue;
        }
        buckets.entry(version).or_default().push(pod.name.clone());
    }
    Ok(VersionBucket { buckets })
}

/// A target version the project must be raised to, and the pods forcing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeRequirement {
    pub required: PlatformVersion,
    pub blocking: Vec<String>,
}

/// Decide whether `current` is too low for the declared pods.
///
/// Only the lowest bucket is consulted. Once `current` reaches it, higher
/// buckets are not reported even if `current` is below them; a later run
/// against the raised target picks those up.
pub fn needs_upgrade(
    current: PlatformVersion,
    registry: &DependencyRegistry,
) -> Result<Option<UpgradeRequirement>> {
    let buckets = bucket_by_min_version(registry)?;
    let Some((lowest, names)) = buckets.lowest() else {
        return Ok(None);
    };
    if current >= lowest {
        return Ok(None);
    }
    Ok(Some(UpgradeRequirement {
        required: lowest,
        blocking: names.to_vec(),
    }))
}
