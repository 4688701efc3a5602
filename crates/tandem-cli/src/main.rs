//! tandem entry point.
//!
//! Binary name: `tandem`
//!
//! Parses CLI arguments, reads provider keys and overrides from the
//! environment, runs one refactor/review pipeline round trip, and prints
//! the raw responses followed by the verdict.

mod cli;
mod render;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tandem_core::pipeline::RefactorPipeline;
use tandem_infra::config::Settings;
use tandem_infra::llm::anthropic::AnthropicProvider;
use tandem_infra::llm::openai::OpenAiProvider;

use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,tandem_core=debug,tandem_infra=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let settings = Settings::from_env();
    let snippet = cli.resolve_snippet()?;

    let refactorer = AnthropicProvider::new(
        settings.anthropic_api_key,
        settings.pipeline.request_timeout,
    );
    let reviewer = OpenAiProvider::new(&settings.openai_api_key);
    let pipeline = RefactorPipeline::new(refactorer, reviewer, settings.pipeline);

    let report = pipeline.run(&snippet).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report.verdict)?);
    } else {
        if !cli.quiet {
            render::dump_responses(&report.responses);
        }
        render::print_verdict(&report.verdict);
    }

    Ok(())
}
