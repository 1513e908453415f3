use crate::console::{run_export, run_show, ExportArgs, ShowArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use waitlist_admin::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Waitlist Admin",
    about = "Serve and inspect the provider and customer waitlist dashboard",
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
    /// Inspect the generated waitlist from the terminal
    Waitlist {
        #[command(subcommand)]
        command: WaitlistCommand,
    },
}

#[derive(Subcommand, Debug)]
enum WaitlistCommand {
    /// Render one table page with the given filters, search, and sort
    Show(ShowArgs),
    /// Write every matching row as CSV to stdout
    Export(ExportArgs),
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
        Command::Waitlist {
            command: WaitlistCommand::Show(args),
        } => run_show(args),
        Command::Waitlist {
            command: WaitlistCommand::Export(args),
        } => run_export(args),
    }
}
