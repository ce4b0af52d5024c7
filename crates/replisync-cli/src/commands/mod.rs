pub mod common;
pub mod config;
pub mod once;
pub mod run;
pub mod status;

pub use common::SyncOptions;
pub use config::Config;
pub use once::Once;
pub use run::Run;
pub use status::Status;
