//! Artifactory integration
//!
//! REST client for the npm auth and security API key endpoints.

pub mod client;

pub use client::ArtifactoryClient;
