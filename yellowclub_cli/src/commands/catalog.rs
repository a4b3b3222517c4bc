use anyhow::Result;
use clap::Args;
use yellowclub_lib::YellowClubClient;

use super::PageArgs;
use crate::output::{print_page_info, print_products, print_services, OutputFormat};

#[derive(Args)]
pub struct ServicesArgs {
    /// Get a single service by ID
    #[arg(long)]
    pub id: Option<i64>,

    /// Only active services
    #[arg(long)]
    pub active: bool,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub async fn run_services(
    args: &ServicesArgs,
    client: &YellowClubClient,
    format: OutputFormat,
) -> Result<()> {
    let catalog = client.services();
    if let Some(id) = args.id {
        let record = catalog.get(id).await?;
        return print_services(&[record], format);
    }

    let page = if args.active {
        catalog.active().await?
    } else {
        catalog.list(&args.paging.params()?).await?
    };
    print_page_info(&page, "services");
    print_services(&page.data, format)
}

#[derive(Args)]
pub struct ProductsArgs {
    /// Get a single product by ID
    #[arg(long)]
    pub id: Option<i64>,

    /// Show the member-facing store instead of the full catalog
    #[arg(long)]
    pub store: bool,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub async fn run_products(
    args: &ProductsArgs,
    client: &YellowClubClient,
    format: OutputFormat,
) -> Result<()> {
    let products = client.products();
    if let Some(id) = args.id {
        let record = products.get(id).await?;
        return print_products(&[record], format);
    }

    let page = if args.store {
        products.store_products().await?
    } else {
        products.list(&args.paging.params()?).await?
    };
    print_page_info(&page, "products");
    print_products(&page.data, format)
}
