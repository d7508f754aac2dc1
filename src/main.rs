//! AI Orchestrator - route prompts to the best model for the task.

use ai_orchestrator::cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging (WARN level by default, use RUST_LOG=info for more)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Run CLI
    cli::run().await
}
