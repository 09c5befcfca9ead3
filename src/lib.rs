pub mod artifact;
pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod metadata;
pub mod pipelines;
pub mod runner;
pub mod system;
pub mod version;
