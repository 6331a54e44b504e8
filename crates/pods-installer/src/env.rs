//! Controlled environment for CocoaPods subprocesses.
//!
//! CocoaPods refuses to run under a non-UTF-8 locale, and editor-launched
//! processes frequently inherit none at all.

use std::collections::BTreeMap;

/// Locale used when the ambient environment has none.
pub const DEFAULT_LANGUAGE: &str = "en_US";

/// Force the UTF-8 variant of the ambient locale's language code.
///
/// `de_DE.ISO8859-1` becomes `de_DE.UTF-8`; an absent or empty locale
/// becomes `en_US.UTF-8`.
pub fn utf8_locale(ambient: Option<&str>) -> String {
    let language = ambient
        .and_then(|lang| lang.split('.').next())
        .map(str::trim)
        .filter(|lang| !lang.is_empty())
        .unwrap_or(DEFAULT_LANGUAGE);
    format!("{language}.UTF-8")
}

/// Environment variables layered over the inherited environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallEnv {
    vars: BTreeMap<String, String>,
}

impl InstallEnv {
    /// An environment with `LANG` forced to UTF-8, based on the caller's `LANG`.
    pub fn from_ambient() -> Self {
        Self::with_lang(std::env::var("LANG").ok().as_deref())
    }

    pub fn with_lang(ambient: Option<&str>) -> Self {
        let mut env = Self::default();
        env.set("LANG", utf8_locale(ambient));
        env
    }

    /// Add or replace a variable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Merge configured overrides; they win over the computed locale.
    pub fn extend<I, K, V>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in vars {
            self.set(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
