use anyhow::Result;
use clap::Args;
use yellowclub_lib::{ClientQuery, YellowClubClient};

use super::PageArgs;
use crate::output::{
    print_aircraft, print_clients, print_page_info, print_partners, OutputFormat,
};

#[derive(Args)]
pub struct ClientsArgs {
    /// Get a single client by ID
    #[arg(long)]
    pub id: Option<i64>,

    /// Filter by status (e.g. active, inactive)
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by partner ID
    #[arg(long)]
    pub partner: Option<i64>,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub async fn run_clients(
    args: &ClientsArgs,
    client: &YellowClubClient,
    format: OutputFormat,
) -> Result<()> {
    let clients = client.clients();
    if let Some(id) = args.id {
        let record = clients.get(id).await?;
        return print_clients(&[record], format);
    }

    let mut query = args.paging.apply(ClientQuery::default())?;
    if let Some(status) = &args.status {
        query = query.with_status(status);
    }
    if let Some(partner) = args.partner {
        query = query.with_partner(partner);
    }

    let page = clients.list(&query).await?;
    print_page_info(&page, "clients");
    print_clients(&page.data, format)
}

#[derive(Args)]
pub struct PartnersArgs {
    /// Get a single partner by ID
    #[arg(long)]
    pub id: Option<i64>,

    /// Only partners with status=active
    #[arg(long)]
    pub active: bool,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub async fn run_partners(
    args: &PartnersArgs,
    client: &YellowClubClient,
    format: OutputFormat,
) -> Result<()> {
    let partners = client.partners();
    if let Some(id) = args.id {
        let record = partners.get(id).await?;
        return print_partners(&[record], format);
    }

    let page = if args.active {
        partners.active().await?
    } else {
        partners.list(&args.paging.params()?).await?
    };
    print_page_info(&page, "partners");
    print_partners(&page.data, format)
}

#[derive(Args)]
pub struct AircraftArgs {
    /// Get a single aircraft by ID
    #[arg(long)]
    pub id: Option<i64>,

    /// Only aircraft owned by this client ID
    #[arg(long)]
    pub client: Option<i64>,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub async fn run_aircraft(
    args: &AircraftArgs,
    client: &YellowClubClient,
    format: OutputFormat,
) -> Result<()> {
    let aircraft = client.aircraft();
    if let Some(id) = args.id {
        let record = aircraft.get(id).await?;
        return print_aircraft(&[record], format);
    }

    let page = match args.client {
        Some(client_id) => aircraft.for_client(client_id).await?,
        None => aircraft.list(&args.paging.params()?).await?,
    };
    print_page_info(&page, "aircraft");
    print_aircraft(&page.data, format)
}
