use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::{debug, info};
use serde::Deserialize;

use biomarker_engine::utils::logging::log_warning;
use biomarker_engine::{EngineConfig, HealthReport, PatientInput, Sex};

#[derive(Parser, Debug)]
#[command(name = "biomarker-report")]
#[command(about = "Score lab results, activity and body composition for one or more patients")]
#[command(version)]
struct Args {
    /// Patient JSON document, or a JSON array of documents
    input: PathBuf,

    /// Print the plain-text summary instead of JSON
    #[arg(short, long)]
    text: bool,

    /// Use sex-specific optimal ranges where the catalog has them
    #[arg(short, long, value_enum)]
    sex: Option<SexArg>,

    /// Score measured values only, without merging derived ones
    #[arg(long)]
    no_merge: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum SexArg {
    Male,
    Female,
}

impl From<SexArg> for Sex {
    fn from(arg: SexArg) -> Self {
        match arg {
            SexArg::Male => Self::Male,
            SexArg::Female => Self::Female,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Batch(Vec<PatientInput>),
    Single(Box<PatientInput>),
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = EngineConfig::from_env().with_merge_derived(!args.no_merge);
    if let Some(sex) = args.sex {
        config = config.with_sex(Some(sex.into()));
    }
    config.validate().context("Invalid engine configuration")?;
    debug!("{config}");

    info!("Reading patient data from: {}", args.input.display());
    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let document: Document = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    let (inputs, single) = match document {
        Document::Batch(inputs) => (inputs, false),
        Document::Single(input) => (vec![*input], true),
    };

    let reports = HealthReport::build_many(&inputs, &config)?;
    for report in &reports {
        if !report.import.unrecognized.is_empty() {
            log_warning(
                &format!("Unrecognized biomarkers: {}", report.import.unrecognized.join(", ")),
                report.patient_id.as_deref(),
            );
        }
    }

    if args.text {
        let summaries: Vec<String> = reports.iter().map(HealthReport::summary_text).collect();
        println!("{}", summaries.join("\n\n"));
    } else if single {
        println!("{}", serde_json::to_string_pretty(&reports[0])?);
    } else {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(())
}
