//! Storefront CLI - generate browser-extension store listing images

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use storefront_gen::{
    catalog, providers, run_batch, BatchOptions, GeminiModel, StorefrontConfig, Target,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Generate Chrome Web Store listing images via the Gemini API", long_about = None)]
#[command(version)]
struct Cli {
    /// Model to use (defaults to the configured model, else gemini-3-pro)
    #[arg(short, long, value_enum)]
    model: Option<ModelArg>,

    /// List available models and exit
    #[arg(short, long)]
    list_models: bool,

    /// Asset to generate, or "all"
    #[arg(short, long, default_value = "all", value_parser = parse_target)]
    target: Target,

    /// List catalog entries and exit
    #[arg(long)]
    list_targets: bool,

    /// Read settings from this file instead of the global and project config
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output directory (defaults to the configured directory, else ./assets)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Image source; `mock` renders placeholders offline
    #[arg(long, value_enum, default_value = "gemini")]
    provider: ProviderArg,

    /// Do not update manifest.toml in the output directory
    #[arg(long)]
    no_manifest: bool,

    /// Exit with status 1 if any requested asset failed
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModelArg {
    #[value(name = "gemini-3-pro")]
    Gemini3Pro,
    #[value(name = "gemini-2.5-flash")]
    Gemini25Flash,
    #[value(name = "imagen-3")]
    Imagen3,
}

impl From<ModelArg> for GeminiModel {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Gemini3Pro => GeminiModel::Gemini3Pro,
            ModelArg::Gemini25Flash => GeminiModel::Gemini25Flash,
            ModelArg::Imagen3 => GeminiModel::Imagen3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ProviderArg {
    Gemini,
    Mock,
}

impl ProviderArg {
    fn as_str(&self) -> &'static str {
        match self {
            ProviderArg::Gemini => "gemini",
            ProviderArg::Mock => "mock",
        }
    }
}

fn parse_target(s: &str) -> Result<Target, String> {
    Target::parse(s).map_err(|e| e.to_string())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_models() {
    println!("Available models:");
    for model in GeminiModel::ALL {
        let default_mark = if model.is_default() { " (default)" } else { "" };
        println!("  {}: {}{}", model.short_name(), model.model_id(), default_mark);
    }
}

fn print_targets() {
    println!("Available targets:");
    for spec in catalog::all() {
        println!("  {:<20} {:<34} {}", spec.id, spec.filename, spec.title);
    }
    println!("  {:<20} every entry above", catalog::ALL_TARGET);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list_models {
        print_models();
        return Ok(());
    }
    if cli.list_targets {
        print_targets();
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => StorefrontConfig::load_from_file(path)?,
        None => StorefrontConfig::load()?,
    };
    let model = cli.model.map(GeminiModel::from).unwrap_or(config.model);
    let output_dir = cli.output_dir.unwrap_or_else(|| config.output_dir.clone());
    debug!(
        model = model.model_id(),
        provider = cli.provider.as_str(),
        output_dir = %output_dir.display(),
        api_url = %config.api_url,
        "resolved run settings"
    );

    // Fails before any network activity when the API key is missing
    let generator = providers::create_provider(cli.provider.as_str(), &config)?;

    println!("{}", "=".repeat(60));
    println!("Store listing asset generation");
    println!("Model: {}", model.model_id());
    println!("Provider: {}", generator.name());
    println!("Output: {}", output_dir.display());
    println!("{}", "=".repeat(60));

    let options = BatchOptions {
        model,
        output_dir,
        write_manifest: !cli.no_manifest,
    };
    let report = run_batch(generator.as_ref(), cli.target, &options)?;
    report.print_summary();

    if cli.strict && !report.all_succeeded() {
        std::process::exit(1);
    }

    Ok(())
}
