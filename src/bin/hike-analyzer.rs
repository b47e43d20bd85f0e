// ABOUTME: Command-line entry point running one trail risk analysis
// ABOUTME: Validates input, runs the orchestrator, and prints a text or JSON report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

//! # Hike Analyzer CLI
//!
//! Usage:
//! ```bash
//! # Basic classification only
//! hike-analyzer --distance 12 --elevation 650 --terrain rocky --basic
//!
//! # Enhanced analysis against a local Ollama server, as JSON
//! LOCAL_LLM_BASE_URL=http://localhost:11434/v1 \
//!     hike-analyzer --distance 12 --elevation 650 --experience beginner --json
//!
//! # Ask the hiking assistant a single question
//! hike-analyzer --ask "What should I pack for a winter summit?"
//!
//! # Check that the configured language model endpoint responds
//! hike-analyzer --check
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use hike_analyzer::analysis::{
    AnalysisOrchestrator, AnalysisRun, AnalysisState, HikingAssistant, ReplyOutcome,
};
use hike_analyzer::config::AnalysisConfig;
use hike_analyzer::llm::{LlmProvider, OpenAiCompatibleProvider};
use hike_analyzer::logging::LoggingConfig;
use hike_core::models::{
    ExperienceLevel, FitnessLevel, Terrain, TrailParameters, UserProfile, WildlifeDanger,
};
use hike_intelligence::validate;
use tracing::{info, warn};

const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Parser)]
#[command(
    name = "hike-analyzer",
    about = "Assess hiking trail risk",
    long_about = "Classifies a hiking trail into a risk category and, when a language model is configured, adds personalized safety guidance."
)]
struct Cli {
    /// Trail distance in kilometers
    #[arg(long)]
    distance: Option<f64>,

    /// Total elevation gain in meters
    #[arg(long)]
    elevation: Option<f64>,

    /// Terrain type (paved, dirt, rocky, sandy)
    #[arg(long, default_value = "dirt", value_parser = parse_terrain)]
    terrain: Terrain,

    /// Wildlife danger level (low, high)
    #[arg(long, default_value = "low", value_parser = parse_wildlife)]
    wildlife: WildlifeDanger,

    /// Hiker experience level (beginner, intermediate, advanced, expert)
    #[arg(long, value_parser = parse_experience)]
    experience: Option<ExperienceLevel>,

    /// Hiker fitness level (low, moderate, good, excellent)
    #[arg(long, value_parser = parse_fitness)]
    fitness: Option<FitnessLevel>,

    /// Free-text description of previous hiking experience
    #[arg(long)]
    history: Option<String>,

    /// Skip the language model and produce the reduced analysis
    #[arg(long)]
    basic: bool,

    /// Print the analysis as JSON
    #[arg(long)]
    json: bool,

    /// Proceed even when validation reports findings
    #[arg(long)]
    force: bool,

    /// Ask the hiking assistant one question instead of analyzing a trail
    #[arg(long, value_name = "QUESTION", conflicts_with = "check")]
    ask: Option<String>,

    /// Check that the language model endpoint responds, then exit
    #[arg(long)]
    check: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Cli {
    fn trail(&self) -> TrailParameters {
        TrailParameters {
            distance_km: self.distance,
            elevation_gain_m: self.elevation,
            terrain: self.terrain,
            wildlife_danger: self.wildlife,
        }
    }

    /// Profile from the flags, or `None` when no profile flag was given
    fn profile(&self) -> Option<UserProfile> {
        if self.experience.is_none() && self.fitness.is_none() && self.history.is_none() {
            return None;
        }
        let defaults = UserProfile::default();
        let mut profile = UserProfile::new(
            self.experience.unwrap_or(defaults.experience_level),
            self.fitness.unwrap_or(defaults.fitness_level),
        );
        if let Some(history) = &self.history {
            profile = profile.with_experience_description(history.clone());
        }
        Some(profile)
    }
}

fn parse_terrain(s: &str) -> Result<Terrain, String> {
    Terrain::parse(s).ok_or_else(|| format!("unknown terrain '{s}'"))
}

fn parse_wildlife(s: &str) -> Result<WildlifeDanger, String> {
    WildlifeDanger::parse(s).ok_or_else(|| format!("unknown wildlife danger level '{s}'"))
}

fn parse_experience(s: &str) -> Result<ExperienceLevel, String> {
    ExperienceLevel::parse(s).ok_or_else(|| format!("unknown experience level '{s}'"))
}

fn parse_fitness(s: &str) -> Result<FitnessLevel, String> {
    FitnessLevel::parse(s).ok_or_else(|| format!("unknown fitness level '{s}'"))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = AnalysisConfig::from_env().context("invalid analysis configuration")?;
    let provider = if cli.basic { None } else { configured_provider() };

    if cli.check {
        return Ok(check_provider(provider.as_deref()).await);
    }
    if let Some(question) = cli.ask.as_deref() {
        let assistant = HikingAssistant::from_config(config, provider);
        return ask(&assistant, question, cli.json).await;
    }

    let trail = cli.trail();
    let findings = validate(&trail);
    if !findings.is_empty() {
        for finding in &findings {
            eprintln!("warning: {finding}");
        }
        if !cli.force {
            eprintln!("Re-run with --force to analyze anyway.");
            return Ok(ExitCode::from(EXIT_INVALID_INPUT));
        }
    }

    let orchestrator = AnalysisOrchestrator::from_config(config, provider);
    let profile = cli.profile();
    let run = orchestrator.run(&trail, profile.as_ref()).await;

    if cli.json {
        print_json(&run)?;
    } else {
        print_report(&run);
    }
    Ok(ExitCode::SUCCESS)
}

fn configured_provider() -> Option<Arc<dyn LlmProvider>> {
    match OpenAiCompatibleProvider::from_env() {
        Ok(provider) => {
            info!(
                provider = provider.name(),
                model = provider.default_model(),
                "Language model provider configured"
            );
            Some(Arc::new(provider))
        }
        Err(e) => {
            warn!(error = %e, "Language model provider could not be created");
            None
        }
    }
}

async fn check_provider(provider: Option<&dyn LlmProvider>) -> ExitCode {
    let Some(provider) = provider else {
        eprintln!("No language model provider is configured.");
        return ExitCode::FAILURE;
    };

    match provider.health_check().await {
        Ok(true) => {
            println!(
                "{} is reachable (model {}).",
                provider.display_name(),
                provider.default_model()
            );
            ExitCode::SUCCESS
        }
        Ok(false) => {
            eprintln!("{} responded but reported an error.", provider.display_name());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{} could not be reached: {e}", provider.display_name());
            ExitCode::FAILURE
        }
    }
}

async fn ask(assistant: &HikingAssistant, question: &str, json: bool) -> Result<ExitCode> {
    let reply = match assistant.respond(question).await {
        Ok(reply) => reply,
        Err(e) => {
            eprintln!("error: {e}");
            return Ok(ExitCode::from(EXIT_INVALID_INPUT));
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
    } else {
        println!("{}", reply.content);
    }

    Ok(if reply.outcome == ReplyOutcome::Failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn print_json(run: &AnalysisRun) -> Result<()> {
    let output = serde_json::json!({
        "analysis": run.analysis,
        "fallback_reason": run.fallback_reason,
        "states": run.states.iter().map(AnalysisState::as_str).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_report(run: &AnalysisRun) {
    let analysis = &run.analysis;
    let category = analysis.category();

    println!("Risk level: {category} ({})", category.color());
    println!();
    println!("{}", analysis.explanation());

    print_list("Recommendations", analysis.recommendations());
    print_list("Safety priorities", analysis.safety_priorities());
    print_list("Gear", analysis.gear_suggestions());

    if let Some(reason) = run.fallback_reason {
        println!();
        if reason.is_retryable() {
            println!("Enhanced analysis failed; run again to retry.");
        } else {
            println!("Basic analysis only.");
        }
    }
}

fn print_list(title: &str, items: &[String]) {
    println!();
    println!("{title}:");
    for (index, item) in items.iter().enumerate() {
        println!("  {}. {item}", index + 1);
    }
}
