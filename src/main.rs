use clap::Parser;
use transect_survey::domain::ports::ReportWriter;
use transect_survey::utils::{logger, validation::Validate};
use transect_survey::{
    CliConfig, DataCacheClient, FileReportWriter, StdoutReportWriter, SurveyEngine, SurveyPipeline,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting transect-survey");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let client = DataCacheClient::new(&config.api_endpoint);

    let result = match &config.output_path {
        Some(path) => run(client, FileReportWriter::new(path)).await,
        None => run(client, StdoutReportWriter).await,
    };

    match result {
        Ok(destination) => {
            tracing::info!("Survey report complete ({})", destination);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Survey run failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

async fn run<W: ReportWriter>(client: DataCacheClient, writer: W) -> transect_survey::Result<String> {
    let engine = SurveyEngine::new(SurveyPipeline::new(client, writer));
    engine.run().await
}
