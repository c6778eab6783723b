pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::datacache::DataCacheClient;
pub use crate::adapters::report::{FileReportWriter, StdoutReportWriter};
pub use crate::config::CliConfig;
pub use crate::core::{engine::SurveyEngine, pipeline::SurveyPipeline};
pub use crate::utils::error::{Result, SurveyError};
