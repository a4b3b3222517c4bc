use anyhow::Result;
use clap::Args;
use yellowclub_lib::validation;
use yellowclub_lib::{ServiceOrderQuery, YellowClubClient};

use super::PageArgs;
use crate::output::{print_orders, print_page_info, OutputFormat};

#[derive(Args)]
pub struct OrdersArgs {
    /// Get a single service order by ID
    #[arg(long)]
    pub id: Option<i64>,

    /// Filter by status (e.g. open, closed)
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by client ID
    #[arg(long)]
    pub client: Option<i64>,

    /// Filter by aircraft ID
    #[arg(long)]
    pub aircraft: Option<i64>,

    /// Created on or after this date (YYYY-MM-DD)
    #[arg(long, requires = "to")]
    pub from: Option<String>,

    /// Created on or before this date (YYYY-MM-DD)
    #[arg(long, requires = "from")]
    pub to: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub async fn run(args: &OrdersArgs, client: &YellowClubClient, format: OutputFormat) -> Result<()> {
    let orders = client.service_orders();
    if let Some(id) = args.id {
        let record = orders.get(id).await?;
        return print_orders(&[record], format);
    }

    let mut query = args.paging.apply(ServiceOrderQuery::default())?;
    if let Some(status) = &args.status {
        query = query.with_status(status);
    }
    if let Some(client_id) = args.client {
        query = query.with_client(client_id);
    }
    if let Some(aircraft_id) = args.aircraft {
        query = query.with_aircraft(aircraft_id);
    }
    if let (Some(from), Some(to)) = (&args.from, &args.to) {
        let (from, to) = validation::validate_date_range(from, to)?;
        query = query.with_date_range(from, to);
    }

    let page = orders.list(&query).await?;
    print_page_info(&page, "service orders");
    print_orders(&page.data, format)
}
