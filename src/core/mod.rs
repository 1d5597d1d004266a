pub mod batch;
pub mod client;
pub mod format;

pub use crate::domain::model::{
    BatchStatistics, LookupOutcome, LookupRequest, LookupResponse, LookupStatus,
};
pub use crate::domain::ports::{ConfigProvider, NumberVerifier};
pub use crate::utils::error::Result;
