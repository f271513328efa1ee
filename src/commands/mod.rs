//! Command handlers wired from the CLI

pub mod init;
pub mod publish;
pub mod track;

pub use init::run_init;
pub use publish::{run_publish, PublishOptions};
pub use track::run_track;
