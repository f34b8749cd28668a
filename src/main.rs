use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::{error, info};

use sitecloner::args::{Command, OutputArgs};
use sitecloner::{
    init_default_tables, load_default_tables, utils, AnalysisRecord, Analyzer, Args,
    BusinessInput, Synthesizer,
};

fn read_content(file: Option<&Path>) -> Result<String> {
    let bytes = match file {
        Some(path) => fs::read(path).with_context(|| format!("Failed to read {:?}", path))?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };
    // Scraped pages are not always clean UTF-8.
    Ok(utils::decode_input(&bytes))
}

fn run_analyze(workers: Option<usize>, file: Option<&Path>, output: &OutputArgs) -> Result<()> {
    let content = read_content(file)?;
    let workers = workers.unwrap_or_else(utils::default_workers);
    let analyzer = Analyzer::default().with_workers(workers)?;
    let record = analyzer.analyze(&content)?;
    let json = utils::to_json(&record, output.compact)?;
    utils::emit(&json, output.output.as_deref())
}

fn run_generate(
    analysis_path: &Path,
    business: BusinessInput,
    defaults_path: Option<&Path>,
    output: &OutputArgs,
) -> Result<()> {
    let raw = fs::read_to_string(analysis_path)
        .with_context(|| format!("Failed to read analysis file {:?}", analysis_path))?;
    let analysis: AnalysisRecord = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid analysis JSON in {:?}", analysis_path))?;
    let defaults = load_default_tables(defaults_path)?;

    let config = Synthesizer::new(&defaults).synthesize(&analysis, &business)?;
    let json = utils::to_json(&config, output.compact)?;
    utils::emit(&json, output.output.as_deref())
}

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);
    utils::validate_args(&args)?;

    let start_time = Instant::now();
    let result = match args.command {
        Command::Init => init_default_tables(),
        Command::Analyze { file, output, .. } => {
            run_analyze(args.workers, file.as_deref(), &output)
        }
        Command::Generate {
            analysis,
            business,
            defaults,
            output,
        } => run_generate(&analysis, business.into(), defaults.as_deref(), &output),
    };

    match result {
        Ok(()) => {
            info!(
                action = "complete",
                component = "main",
                duration_ms = start_time.elapsed().as_millis(),
                "Finished"
            );
            Ok(())
        }
        Err(e) => {
            error!(action = "fail", component = "main", error = %e, "Command failed");
            println!("{}", utils::error_json(&format!("{:#}", e)));
            std::process::exit(1);
        }
    }
}
