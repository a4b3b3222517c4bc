use anyhow::Result;
use clap::Args;
use yellowclub_lib::validation;
use yellowclub_lib::{ExtractQuery, YellowClubClient};

use super::PageArgs;
use crate::output::{
    print_balance, print_page_info, print_summary, print_transactions, OutputFormat,
};

#[derive(Args)]
pub struct ExtractArgs {
    /// Server-side movement type filter (e.g. C, D, E)
    #[arg(long)]
    pub tipo: Option<String>,

    /// Movements on or after this date (YYYY-MM-DD)
    #[arg(long, requires = "to")]
    pub from: Option<String>,

    /// Movements on or before this date (YYYY-MM-DD)
    #[arg(long, requires = "from")]
    pub to: Option<String>,

    /// Print credit/debit totals for the page instead of the movements
    #[arg(long)]
    pub summary: bool,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub async fn run_extract(
    args: &ExtractArgs,
    client: &YellowClubClient,
    format: OutputFormat,
) -> Result<()> {
    let mut query = args.paging.apply(ExtractQuery::default())?;
    if let Some(tipo) = &args.tipo {
        query = query.with_tipo(tipo);
    }
    if let (Some(from), Some(to)) = (&args.from, &args.to) {
        let (from, to) = validation::validate_date_range(from, to)?;
        query = query.with_date_range(from, to);
    }

    let (page, summary) = client.points_extract().summarize(&query).await?;
    print_page_info(&page, "movements");
    if args.summary {
        print_summary(&summary, format)
    } else {
        print_transactions(&page.data, format)
    }
}

pub async fn run_balance(client: &YellowClubClient, format: OutputFormat) -> Result<()> {
    let balance = client.user_points().balance().await?;
    print_balance(&balance, format)
}
