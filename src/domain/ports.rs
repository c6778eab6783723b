use crate::domain::model::{CellObservations, LonLat, Observation, SurveyReport};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

pub trait ObservationSource: Send + Sync {
    /// Returns every observation located inside `polygon` and dated within
    /// the inclusive `date_range`, across all result pages.
    fn search_observations(
        &self,
        date_range: (NaiveDate, NaiveDate),
        polygon: &[LonLat],
    ) -> impl std::future::Future<Output = Result<Vec<Observation>>> + Send;
}

pub trait ReportWriter: Send + Sync {
    /// Writes the rendered report and returns a description of where it went.
    fn write_report(
        &self,
        content: &str,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<CellObservations>>;
    async fn transform(&self, data: Vec<CellObservations>) -> Result<SurveyReport>;
    async fn load(&self, report: SurveyReport) -> Result<String>;
}
