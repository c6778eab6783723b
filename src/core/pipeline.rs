use async_trait::async_trait;

use crate::config::{CELL_SIDE_M, SEARCH_DATE_RANGE, TRANSECT_END, TRANSECT_NAME, TRANSECT_START};
use crate::core::geometry;
use crate::core::report::{aggregate_cell, render_report};
use crate::domain::model::{CellObservations, CellStats, SurveyReport, Transect};
use crate::domain::ports::{ObservationSource, Pipeline, ReportWriter};
use crate::utils::error::Result;

/// Survey pipeline over the fixed transect: extract generates the cells and
/// fetches their observations in order, transform aggregates and renders the
/// CSV text, load hands it to the report writer.
pub struct SurveyPipeline<O: ObservationSource, W: ReportWriter> {
    source: O,
    writer: W,
}

impl<O: ObservationSource, W: ReportWriter> SurveyPipeline<O, W> {
    pub fn new(source: O, writer: W) -> Self {
        Self { source, writer }
    }
}

#[async_trait]
impl<O: ObservationSource, W: ReportWriter> Pipeline for SurveyPipeline<O, W> {
    async fn extract(&self) -> Result<Vec<CellObservations>> {
        let transect = Transect::new(TRANSECT_NAME, TRANSECT_START, TRANSECT_END);
        tracing::debug!(
            "Transect azimuth {:.2}°, geodesic length {:.1} m",
            transect.azimuth(),
            transect.length_m()
        );

        let cells = geometry::generate_cells(&transect, CELL_SIDE_M);
        tracing::info!("Generated {} survey cells", cells.len());

        let mut collected = Vec::with_capacity(cells.len());
        for cell in cells {
            let observations = self
                .source
                .search_observations(SEARCH_DATE_RANGE, &cell.ring)
                .await?;
            tracing::debug!("Cell {}: {} observations", cell.name, observations.len());
            collected.push(CellObservations { cell, observations });
        }

        Ok(collected)
    }

    async fn transform(&self, data: Vec<CellObservations>) -> Result<SurveyReport> {
        let (cells, observations): (Vec<_>, Vec<_>) = data
            .into_iter()
            .map(|entry| (entry.cell, entry.observations))
            .unzip();

        let cell_stats: Vec<CellStats> = observations
            .iter()
            .map(|records| aggregate_cell(records))
            .collect();

        let csv_output = render_report(&cells, &cell_stats)?;
        Ok(SurveyReport {
            cell_stats,
            csv_output,
        })
    }

    async fn load(&self, report: SurveyReport) -> Result<String> {
        self.writer.write_report(&report.csv_output).await
    }
}
