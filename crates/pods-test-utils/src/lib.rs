//! Shared test fixtures for the pods workspace.
//!
//! Dev-dependency only. Fixtures write raw files so that every crate,
//! including the lowest layers, can use them without a dependency cycle.
//!
//! # Modules
//!
//! - [`host`]: [`host::TestHost`], a host project plus a generated project directory
//! - [`staging`]: [`staging::StagedPods`], package-manager output layouts
//! - [`fake_pod`]: [`fake_pod::FakePod`], scripted stand-ins for the `pod` executable

#[cfg(unix)]
pub mod fake_pod;
pub mod host;
pub mod staging;
