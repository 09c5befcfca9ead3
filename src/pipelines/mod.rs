mod build;
mod check;
mod common;
mod install;
mod metadata;

pub use build::execute_build_pipeline;
pub use check::execute_check_pipeline;
pub use install::execute_install_pipeline;
pub use metadata::execute_metadata_pipeline;
