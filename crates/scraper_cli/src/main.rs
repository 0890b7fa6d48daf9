//! Command-line caller for the scraping engine.
//!
//! Stands in for the dashboard: builds a job snapshot from flags, runs it
//! synchronously and prints the per-step results. Exit code 1 signals a
//! failed run.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use scraper_core::{macro_documentation, JobSnapshot, RunStatus};
use scraper_engine::{RunnerSettings, ScrapeRunner, WebDriverFactory, WebDriverSettings};

#[derive(Parser)]
#[command(name = "scrape_runner", about = "Run macro scraping jobs against a live page")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Execute a scraping job.
    Run(RunArgs),
    /// Print the macro reference.
    Docs {
        /// Emit the reference as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Target page URL.
    #[arg(long)]
    url: String,
    /// Path to a macro script file.
    #[arg(long, conflicts_with = "instructions")]
    script: Option<PathBuf>,
    /// Inline macro script (newline separated).
    #[arg(long)]
    instructions: Option<String>,
    /// Job identifier, used in logs and auto-generated filenames.
    #[arg(long)]
    job_id: Option<String>,
    /// Directory for files written by SAVE_HTML.
    #[arg(long, default_value = "downloads")]
    output_dir: PathBuf,
    /// WebDriver endpoint to connect to.
    #[arg(long, default_value = "http://localhost:9515")]
    webdriver_url: String,
    /// Run with a visible browser window.
    #[arg(long)]
    headed: bool,
    /// Print the run result as JSON instead of a step listing.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    scraper_logging::init_terminal(log::LevelFilter::Info);
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        CliCommand::Docs { json } => {
            print_docs(json)?;
            Ok(ExitCode::SUCCESS)
        }
        CliCommand::Run(args) => run_job(args),
    }
}

fn run_job(args: RunArgs) -> anyhow::Result<ExitCode> {
    let instructions = match (&args.script, args.instructions) {
        (Some(path), _) => std::fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?,
        (None, Some(inline)) => inline,
        (None, None) => String::new(),
    };
    let job = JobSnapshot::new(args.job_id, args.url, instructions);

    let factory = WebDriverFactory::new(WebDriverSettings {
        webdriver_url: args.webdriver_url,
        ..WebDriverSettings::default()
    });
    let settings = RunnerSettings {
        headless: !args.headed,
        output_dir: args.output_dir,
        ..RunnerSettings::default()
    };
    let runner = ScrapeRunner::new(Arc::new(factory), settings);
    let result = runner.run_job(&job);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for step in &result.steps {
            let marker = if step.result.is_error() { "FAIL" } else { " ok " };
            match &step.instruction {
                Some(line) => println!("[{marker}] {line}: {}", step.result.message),
                None => println!("[{marker}] {}", step.result.message),
            }
        }
        println!("{}", result.message);
    }

    Ok(match result.status {
        RunStatus::Success => ExitCode::SUCCESS,
        RunStatus::Error => ExitCode::FAILURE,
    })
}

fn print_docs(json: bool) -> anyhow::Result<()> {
    let docs = macro_documentation();
    if json {
        println!("{}", serde_json::to_string_pretty(&docs)?);
        return Ok(());
    }
    for (name, doc) in docs {
        println!("{name}");
        println!("  {}", doc.description);
        println!("  syntax:  {}", doc.syntax);
        println!("  example: {}", doc.example);
        for param in &doc.parameters {
            println!("  - {}: {}", param.name, param.description);
        }
        println!();
    }
    Ok(())
}
