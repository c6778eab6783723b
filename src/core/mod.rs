pub mod engine;
pub mod geometry;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{
    Cell, CellObservations, CellStats, Observation, SurveyReport, TaxonStat, Transect,
};
pub use crate::domain::ports::{ObservationSource, Pipeline, ReportWriter};
pub use crate::utils::error::Result;
