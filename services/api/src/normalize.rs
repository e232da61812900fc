use crate::infra::parse_overflow;
use clap::{Args, ValueEnum};
use name_normalizer::config::AppConfig;
use name_normalizer::error::AppError;
use name_normalizer::telemetry;
use name_normalizer::workflows::names::{
    render, NamePipeline, NormalizedNames, OutputFormat, OverflowPolicy, PipelineConfig,
};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum FormatArg {
    #[default]
    Json,
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct NormalizeArgs {
    /// CSV name list to read. Reads stdin when omitted.
    #[arg(long, short)]
    pub(crate) input: Option<PathBuf>,
    /// Collapse identical records, keeping the first occurrence.
    #[arg(long)]
    pub(crate) dedupe: bool,
    /// Print single-line JSON instead of pretty-printed output.
    #[arg(long)]
    pub(crate) compact: bool,
    /// Output format for the normalized records.
    #[arg(long, value_enum, default_value_t = FormatArg::Json)]
    pub(crate) format: FormatArg,
    /// Handling for names with more than three parts (join-surname or truncate).
    #[arg(long, value_parser = parse_overflow)]
    pub(crate) overflow: Option<OverflowPolicy>,
}

impl NormalizeArgs {
    fn pipeline_config(&self, mut base: PipelineConfig) -> PipelineConfig {
        if self.dedupe {
            base.deduplicate = true;
        }
        if let Some(overflow) = self.overflow {
            base.overflow = overflow;
        }
        base
    }
}

pub(crate) fn run_normalize(args: NormalizeArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let pipeline = NamePipeline::new(args.pipeline_config(config.pipeline));

    let names = match &args.input {
        Some(path) => {
            info!(path = %path.display(), "reading name list");
            pipeline.from_path(path)?
        }
        None => {
            info!("reading name list from stdin");
            pipeline.from_reader(std::io::stdin().lock())?
        }
    };

    if !names.diagnostics.is_empty() {
        warn!(
            count = names.diagnostics.len(),
            "some rows were only partially classified"
        );
    }

    let stdout = std::io::stdout();
    write_output(stdout.lock(), &names, args.format.into(), !args.compact)
}

pub(crate) fn write_output<W: Write>(
    writer: W,
    names: &NormalizedNames,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), AppError> {
    render::write_records(writer, &names.records, format, pretty)?;
    Ok(())
}
