//! Name-keyed store of pod declarations.

use std::collections::BTreeMap;

use crate::dependency::Pod;
use crate::error::{Error, Result};

/// De-duplicated set of declared pods.
///
/// Iteration is always in name order so that everything rendered from the
/// registry is stable no matter which plugin declared first.
#[derive(Debug, Clone, Default)]
pub struct DependencyRegistry {
    pods: BTreeMap<String, Pod>,
}

impl DependencyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the declaration for `pod.name`.
    ///
    /// Re-declaring a name is not an error: the later declaration wins and
    /// the replaced one is returned.
    pub fn declare(&mut self, pod: Pod) -> Result<Option<Pod>> {
        validate_name(&pod.name)?;
        let replaced = self.pods.insert(pod.name.clone(), pod);
        if let Some(previous) = &replaced {
            tracing::debug!(pod = %previous.name, "pod re-declared, replacing earlier entry");
        }
        Ok(replaced)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pods.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Pod> {
        self.pods.get(name)
    }

    /// Declared pods in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Pod> {
        self.pods.values()
    }

    /// Declared names in name order.
    pub fn names(&self) -> Vec<String> {
        self.pods.keys().cloned().collect()
    }

    /// Names of pods built without bitcode, in name order.
    ///
    /// A non-empty result disables bitcode for the whole project.
    pub fn bitcode_disabled_names(&self) -> Vec<String> {
        self.pods
            .values()
            .filter(|pod| !pod.bitcode)
            .map(|pod| pod.name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pods.is_empty()
    }
}

/// Names end up single-quoted in the manifest.
fn validate_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "name must not be empty"
    } else if name.chars().any(char::is_whitespace) {
        "name must not contain whitespace"
    } else if name.contains(['\'', '"']) {
        "name must not contain quotes"
    } else {
        return Ok(());
    };
    Err(Error::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}
