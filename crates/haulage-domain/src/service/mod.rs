//! Domain services

pub mod manifest_checker;

pub use manifest_checker::{check_manifests, generate_manifest_report, ManifestCheckResult};
