//! DEP CLI - Command line tool for HUC12 detail reports.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "dep-cli",
    version,
    about = "Daily Erosion Project HUC12 detail reports"
)]
struct Cli {
    #[command(subcommand)]
    command: dep_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    dep_cmd::run(cli.command, &mut stdout.lock())
}
