use crate::cli::Commands;
use crate::interfaces::cli::CliError;
use crate::runtime::lifetime::StartupContext;

/// Run a single CLI command against a prepared context
pub async fn run_cli(ctx: &StartupContext, cmd: Commands) -> Result<(), CliError> {
    crate::interfaces::cli::run_cli_command(ctx, cmd).await
}
