use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct SurveyEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SurveyEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Fetching observations...");
        let raw_data = self.pipeline.extract().await?;
        let total: usize = raw_data.iter().map(|entry| entry.observations.len()).sum();
        tracing::info!("Fetched {} observations across {} cells", total, raw_data.len());

        tracing::info!("Aggregating...");
        let report = self.pipeline.transform(raw_data).await?;

        tracing::info!("Writing report...");
        let destination = self.pipeline.load(report).await?;
        tracing::info!("Report written to {}", destination);

        Ok(destination)
    }
}
