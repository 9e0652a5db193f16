use crate::demo::{run_batch_preview, run_demo, run_score_preview, BatchArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use esg_preview::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ESG Supplier Preview",
    about = "Preview supplier ESG scores and disclosure completeness from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score supplier metrics without starting the service
    Preview {
        #[command(subcommand)]
        command: PreviewCommand,
    },
    /// Register a handful of sample suppliers and print their previews
    Demo,
}

#[derive(Subcommand, Debug)]
enum PreviewCommand {
    /// Preview a single supplier from a JSON metrics file
    Score(ScoreArgs),
    /// Preview every row of a supplier CSV export
    Batch(BatchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Preview {
            command: PreviewCommand::Score(args),
        } => run_score_preview(args),
        Command::Preview {
            command: PreviewCommand::Batch(args),
        } => run_batch_preview(args),
        Command::Demo => run_demo(),
    }
}
