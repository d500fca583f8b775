//! CLI entrypoint for Character Forge
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use forge_application::{GenerateCharacterUseCase, GenerationAttempt, GenerationProgressNotifier};
use forge_domain::{OutputFormat, RandomSource};
use forge_infrastructure::{
    ConfigLoader, FileConfig, GeminiCharacterGenerator, JsonlGenerationLogger, SeededRandom,
    Severity, ThreadRandom,
};
use forge_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress, save_image};
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.log_dir.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        let config = load_config(&cli)?;
        println!("\nEffective configuration:\n{}", config.to_toml_string()?);
        return Ok(ExitCode::SUCCESS);
    }

    if cli.list {
        print!("{}", ConsoleFormatter::format_catalog());
        return Ok(ExitCode::SUCCESS);
    }

    info!("Starting Character Forge");

    let config = load_config(&cli)?;
    ConsoleFormatter::set_color(config.output.color_enabled(cli.no_color));
    let format = cli.output.or(config.output.format).unwrap_or_default();

    let (params, _) = config.generation.to_params();

    // === Dependency Injection ===
    let rng: Arc<dyn RandomSource> = match cli.seed {
        Some(seed) => {
            info!("Using seeded randomness (seed {})", seed);
            Arc::new(SeededRandom::new(seed))
        }
        None => Arc::new(ThreadRandom),
    };
    let generator = Arc::new(GeminiCharacterGenerator::from_config(&config.gemini)?);

    // Progress increments stay off the seeded source so `--seed` replays the dice
    let mut use_case = GenerateCharacterUseCase::new(generator, rng)
        .with_progress_rng(Arc::new(ThreadRandom))
        .with_params(params);

    // Plain progress lines when stderr is piped
    if !cli.quiet && format != OutputFormat::Json {
        let progress: Arc<dyn GenerationProgressNotifier> = if std::io::stderr().is_terminal() {
            Arc::new(ProgressReporter::new())
        } else {
            Arc::new(SimpleProgress::new())
        };
        use_case = use_case.with_progress(progress);
    }

    if let Some(path) = cli.event_log.as_ref().or(config.logging.event_log.as_ref()) {
        let logger = JsonlGenerationLogger::open(path)
            .with_context(|| format!("Could not open event log {}", path.display()))?;
        info!("Logging generation events to {}", logger.path().display());
        use_case = use_case.with_logger(Arc::new(logger));
    }

    // === Draft ===
    if cli.randomize {
        use_case.randomize_draft();
    }
    use_case.update_draft(|draft| *draft = cli.apply_to(std::mem::take(draft)));

    let draft = use_case.snapshot().draft;
    for issue in draft.validate() {
        if issue.is_warning() {
            eprintln!("warning: {} (using it as free text)", issue);
        } else {
            bail!("{}", issue);
        }
    }

    // === Generate ===
    let result = match use_case.generate().await {
        GenerationAttempt::Completed(result) => result,
        GenerationAttempt::Skipped => bail!("Generation did not start"),
        GenerationAttempt::Superseded => bail!("Generation was interrupted"),
    };

    println!("{}", ConsoleFormatter::render(format, &draft, &result));

    if let Some(path) = &cli.save_image
        && result.is_success()
    {
        let bytes = save_image(&result, path)
            .with_context(|| format!("Could not save portrait to {}", path.display()))?;
        eprintln!("Saved portrait to {} ({} bytes)", path.display(), bytes);
    }

    Ok(if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Load and validate configuration, printing warnings and failing on errors.
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let mut fatal = false;
    for issue in config.validate() {
        match issue.severity {
            Severity::Warning => eprintln!("warning: {}", issue.message),
            Severity::Error => {
                eprintln!("error: {}", issue.message);
                fatal = true;
            }
        }
    }
    if fatal {
        bail!("Invalid configuration");
    }

    Ok(config)
}

fn env_filter(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    }
}

/// Initialize logging based on verbosity level.
///
/// With `log_dir`, diagnostics are also written to a daily-rolling file; the
/// returned guard must stay alive so buffered lines are flushed on exit.
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(env_filter(verbose));

    let Some(dir) = log_dir else {
        tracing_subscriber::registry().with(stderr_layer).init();
        return Ok(None);
    };

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Could not create log directory {}", dir.display()))?;
    let file_appender = tracing_appender::rolling::daily(dir, "character-forge.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(env_filter(verbose.max(1)));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    info!("Writing logs to {}", dir.join("character-forge.log").display());

    Ok(Some(guard))
}
