use super::logging;
use super::print::print_result;
use super::setup::Cli;
use clap::Parser;
use sayings::api::SayingsApi;
use sayings::config::{OutputFormat, SayingsConfig};
use sayings::error::Result;
use sayings::store::memory::InMemoryStore;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, warn};

struct AppContext {
    api: SayingsApi<InMemoryStore>,
    input: PathBuf,
    output: OutputFormat,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = init_context(cli);
    handle_execute(&mut ctx)
}

fn init_context(cli: Cli) -> AppContext {
    let config = load_config();

    colored::control::set_override(
        config.color && !cli.no_color && std::io::stdout().is_terminal(),
    );

    let input = cli
        .file
        .unwrap_or_else(|| PathBuf::from(&config.input_file));
    let output = cli.output.unwrap_or(config.output);
    debug!(input = %input.display(), ?output, "context ready");

    AppContext {
        api: SayingsApi::new(InMemoryStore::new()),
        input,
        output,
    }
}

/// A config that cannot be read falls back to defaults rather than blocking the run.
fn load_config() -> SayingsConfig {
    let Some(dir) = SayingsConfig::default_dir() else {
        return SayingsConfig::default();
    };
    SayingsConfig::load(&dir).unwrap_or_else(|e| {
        warn!(dir = %dir.display(), error = %e, "ignoring unreadable config");
        SayingsConfig::default()
    })
}

fn handle_execute(ctx: &mut AppContext) -> Result<()> {
    let output = ctx.output;
    ctx.api
        .execute_file(&ctx.input, |result| print_result(&result, output))
}
