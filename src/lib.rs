pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{parse_batch_items, CliConfig, Command};
pub use config::{file::FileConfig, Settings};
pub use core::{batch::BatchRunner, client::WhatsappChecker, format::format_response};
pub use domain::model::{
    BatchStatistics, LookupOutcome, LookupRequest, LookupResponse, LookupStatus, WhatsappPresence,
};
pub use domain::ports::{ConfigProvider, NumberVerifier};
pub use utils::error::{CheckError, Result};
