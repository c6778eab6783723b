use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::domain::model::LonLat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};

// Survey parameters. Not configurable: reports from different runs must
// cover the same cells.

/// Transect endpoints in (lon, lat), WGS84.
pub const TRANSECT_START: LonLat = [6.106626521825521, 49.62621432351738];
pub const TRANSECT_END: LonLat = [6.132649837657024, 49.602114098955234];

pub const TRANSECT_NAME: &str = "Transect1";

/// Survey cell side length in meters.
pub const CELL_SIDE_M: f64 = 200.0;

/// Inclusive observation date window.
pub const SEARCH_DATE_RANGE: (NaiveDate, NaiveDate) =
    (survey_date(2014, 1, 1), survey_date(2024, 12, 10));

pub const DATA_CACHE_ENDPOINT: &str = "https://serv-data.vm.mnhn.etat.lu";

const fn survey_date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid survey date"),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "transect-survey")]
#[command(about = "Species observation report for survey squares along a transect")]
pub struct CliConfig {
    /// Observation data-cache service endpoint.
    #[arg(long, default_value = DATA_CACHE_ENDPOINT)]
    pub api_endpoint: String,

    /// Write the CSV report to this file instead of stdout.
    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        if let Some(path) = &self.output_path {
            validate_path("output_path", path)?;
        }
        Ok(())
    }
}
