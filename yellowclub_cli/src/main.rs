mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use yellowclub_lib::{Settings, YellowClubClient};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "yellowclub")]
#[command(about = "Query the Yellow Club aviation loyalty API")]
struct Cli {
    /// Output format: table, markdown, csv, or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Tenant host (overrides YELLOWCLUB_API_HOST)
    #[arg(long, global = true)]
    host: Option<String>,

    /// API version path segment (overrides YELLOWCLUB_API_VERSION)
    #[arg(long, global = true)]
    api_version: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List or look up clients
    Clients(commands::clients::ClientsArgs),
    /// List or look up partners
    Partners(commands::clients::PartnersArgs),
    /// List or look up aircraft
    Aircraft(commands::clients::AircraftArgs),
    /// List or look up catalog services
    Services(commands::catalog::ServicesArgs),
    /// List or look up store products
    Products(commands::catalog::ProductsArgs),
    /// List or look up service orders
    Orders(commands::orders::OrdersArgs),
    /// Show the points extract
    Extract(commands::points::ExtractArgs),
    /// Show the current points balance
    Balance,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("yellowclub=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format: OutputFormat = cli.output.parse()?;

    let mut settings = Settings::from_env();
    if let Some(host) = &cli.host {
        settings = settings.with_host(host);
    }
    if let Some(version) = &cli.api_version {
        settings = settings.with_api_version(version);
    }
    let client = YellowClubClient::new(&settings);

    match &cli.command {
        Commands::Clients(args) => commands::clients::run_clients(args, &client, format).await?,
        Commands::Partners(args) => commands::clients::run_partners(args, &client, format).await?,
        Commands::Aircraft(args) => commands::clients::run_aircraft(args, &client, format).await?,
        Commands::Services(args) => commands::catalog::run_services(args, &client, format).await?,
        Commands::Products(args) => commands::catalog::run_products(args, &client, format).await?,
        Commands::Orders(args) => commands::orders::run(args, &client, format).await?,
        Commands::Extract(args) => commands::points::run_extract(args, &client, format).await?,
        Commands::Balance => commands::points::run_balance(&client, format).await?,
    }

    Ok(())
}
