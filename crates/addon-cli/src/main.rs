use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(
    name = "nr-addon",
    about = "New Relic cluster add-on - render nri-bundle Helm chart requests",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        commands::Commands::Render(args) => commands::render::execute(args).await,
        commands::Commands::Validate(args) => commands::validate::execute(args).await,
        commands::Commands::Defaults(args) => commands::defaults::execute(args).await,
    }
}
