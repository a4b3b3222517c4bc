use std::str::FromStr;

use anyhow::Result;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use yellowclub_lib::types::{
    Aircraft, ClientAccount, ExtractSummary, PaginatedResult, Partner, PointsBalance,
    PointsTransaction, Product, ServiceOffering, ServiceOrder,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => anyhow::bail!(
                "unknown output format '{}'. Valid values: table, json, csv, markdown",
                other
            ),
        }
    }
}

#[derive(Tabled, Serialize)]
struct ClientRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Document")]
    #[serde(rename = "Document")]
    document: String,
    #[tabled(rename = "Email")]
    #[serde(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    #[serde(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
}

#[derive(Tabled, Serialize)]
struct PartnerRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Document")]
    #[serde(rename = "Document")]
    document: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Points Rate")]
    #[serde(rename = "Points Rate")]
    points_rate: String,
}

#[derive(Tabled, Serialize)]
struct AircraftRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Registration")]
    #[serde(rename = "Registration")]
    registration: String,
    #[tabled(rename = "Model")]
    #[serde(rename = "Model")]
    model: String,
    #[tabled(rename = "Manufacturer")]
    #[serde(rename = "Manufacturer")]
    manufacturer: String,
    #[tabled(rename = "Client")]
    #[serde(rename = "Client")]
    client_id: String,
}

#[derive(Tabled, Serialize)]
struct ServiceRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
    #[tabled(rename = "Active")]
    #[serde(rename = "Active")]
    active: String,
}

#[derive(Tabled, Serialize)]
struct ProductRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Points")]
    #[serde(rename = "Points")]
    points: String,
    #[tabled(rename = "Stock")]
    #[serde(rename = "Stock")]
    stock: String,
    #[tabled(rename = "Active")]
    #[serde(rename = "Active")]
    active: String,
}

#[derive(Tabled, Serialize)]
struct OrderRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Number")]
    #[serde(rename = "Number")]
    number: String,
    #[tabled(rename = "Client")]
    #[serde(rename = "Client")]
    client_id: String,
    #[tabled(rename = "Aircraft")]
    #[serde(rename = "Aircraft")]
    aircraft_id: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Items")]
    #[serde(rename = "Items")]
    items: usize,
    #[tabled(rename = "Total")]
    #[serde(rename = "Total")]
    total: String,
}

#[derive(Tabled, Serialize)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    kind: String,
    #[tabled(rename = "Points")]
    #[serde(rename = "Points")]
    points: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
    #[tabled(rename = "Balance")]
    #[serde(rename = "Balance")]
    balance: String,
}

#[derive(Tabled, Serialize)]
struct BalanceRow {
    #[tabled(rename = "Balance")]
    #[serde(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Expiring")]
    #[serde(rename = "Expiring")]
    expiring: String,
    #[tabled(rename = "Next Expiration")]
    #[serde(rename = "Next Expiration")]
    next_expiration: String,
}

#[derive(Tabled, Serialize)]
struct SummaryRow {
    #[tabled(rename = "Credits")]
    #[serde(rename = "Credits")]
    credits: String,
    #[tabled(rename = "Debits")]
    #[serde(rename = "Debits")]
    debits: String,
    #[tabled(rename = "Expired")]
    #[serde(rename = "Expired")]
    expired: String,
    #[tabled(rename = "Reversals")]
    #[serde(rename = "Reversals")]
    reversals: String,
    #[tabled(rename = "Net")]
    #[serde(rename = "Net")]
    net: String,
}

// -- Row builders --

fn build_client_rows(clients: &[ClientAccount]) -> Vec<ClientRow> {
    clients
        .iter()
        .map(|c| ClientRow {
            id: c.id,
            name: c.name.clone(),
            document: c.document.clone().unwrap_or_default(),
            email: c.email.clone().unwrap_or_default(),
            phone: c.phone.clone().unwrap_or_default(),
            status: c.status.clone().unwrap_or_default(),
        })
        .collect()
}

fn build_partner_rows(partners: &[Partner]) -> Vec<PartnerRow> {
    partners
        .iter()
        .map(|p| PartnerRow {
            id: p.id,
            name: p.name.clone(),
            document: p.document.clone().unwrap_or_default(),
            status: p.status.clone().unwrap_or_default(),
            points_rate: p.points_rate.map(|r| format!("{}x", r)).unwrap_or_default(),
        })
        .collect()
}

fn build_aircraft_rows(aircraft: &[Aircraft]) -> Vec<AircraftRow> {
    aircraft
        .iter()
        .map(|a| AircraftRow {
            id: a.id,
            registration: a.registration.clone(),
            model: a.model.clone().unwrap_or_default(),
            manufacturer: a.manufacturer.clone().unwrap_or_default(),
            client_id: optional_id(a.client_id),
        })
        .collect()
}

fn build_service_rows(services: &[ServiceOffering]) -> Vec<ServiceRow> {
    services
        .iter()
        .map(|s| ServiceRow {
            id: s.id,
            name: s.name.clone(),
            price: s.price.map(format_brl).unwrap_or_default(),
            active: yes_no(s.active),
        })
        .collect()
}

fn build_product_rows(products: &[Product]) -> Vec<ProductRow> {
    products
        .iter()
        .map(|p| ProductRow {
            id: p.id,
            name: p.name.clone(),
            points: format_points(p.points_price),
            stock: p.stock.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string()),
            active: yes_no(p.active),
        })
        .collect()
}

fn build_order_rows(orders: &[ServiceOrder]) -> Vec<OrderRow> {
    orders
        .iter()
        .map(|o| OrderRow {
            id: o.id,
            number: o.order_number.clone().unwrap_or_default(),
            client_id: optional_id(o.client_id),
            aircraft_id: optional_id(o.aircraft_id),
            status: o.status.clone().unwrap_or_default(),
            items: o.items.len(),
            total: format_brl(o.total_or_computed()),
        })
        .collect()
}

fn build_transaction_rows(transactions: &[PointsTransaction]) -> Vec<TransactionRow> {
    transactions
        .iter()
        .map(|t| TransactionRow {
            date: t.date.clone().unwrap_or_default(),
            kind: t.transaction_type.to_string(),
            points: format_signed_points(t.signed_points()),
            description: t.description.clone().unwrap_or_default(),
            balance: t.balance_after.map(format_points).unwrap_or_default(),
        })
        .collect()
}

fn build_balance_rows(balance: &PointsBalance) -> Vec<BalanceRow> {
    vec![BalanceRow {
        balance: format_points(balance.balance),
        expiring: balance.expiring_points.map(format_points).unwrap_or_default(),
        next_expiration: balance.next_expiration.clone().unwrap_or_default(),
    }]
}

fn build_summary_rows(summary: &ExtractSummary) -> Vec<SummaryRow> {
    vec![SummaryRow {
        credits: format_points(summary.credits),
        debits: format_points(summary.debits),
        expired: format_points(summary.expired),
        reversals: format_points(summary.reversals),
        net: format_signed_points(summary.net),
    }]
}

// -- Printers --

fn print_rows<R: Tabled + Serialize>(rows: Vec<R>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => print_json(&rows),
    }
    Ok(())
}

/// JSON prints the decoded records as-is; every other format goes through
/// the row builder.
fn emit<T: Serialize + ?Sized, R: Tabled + Serialize>(
    data: &T,
    rows: impl FnOnce() -> Vec<R>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(data);
            Ok(())
        }
        other => print_rows(rows(), other),
    }
}

pub fn print_clients(clients: &[ClientAccount], format: OutputFormat) -> Result<()> {
    emit(clients, || build_client_rows(clients), format)
}

pub fn print_partners(partners: &[Partner], format: OutputFormat) -> Result<()> {
    emit(partners, || build_partner_rows(partners), format)
}

pub fn print_aircraft(aircraft: &[Aircraft], format: OutputFormat) -> Result<()> {
    emit(aircraft, || build_aircraft_rows(aircraft), format)
}

pub fn print_services(services: &[ServiceOffering], format: OutputFormat) -> Result<()> {
    emit(services, || build_service_rows(services), format)
}

pub fn print_products(products: &[Product], format: OutputFormat) -> Result<()> {
    emit(products, || build_product_rows(products), format)
}

pub fn print_orders(orders: &[ServiceOrder], format: OutputFormat) -> Result<()> {
    emit(orders, || build_order_rows(orders), format)
}

pub fn print_transactions(transactions: &[PointsTransaction], format: OutputFormat) -> Result<()> {
    emit(transactions, || build_transaction_rows(transactions), format)
}

pub fn print_balance(balance: &PointsBalance, format: OutputFormat) -> Result<()> {
    emit(balance, || build_balance_rows(balance), format)
}

pub fn print_summary(summary: &ExtractSummary, format: OutputFormat) -> Result<()> {
    emit(summary, || build_summary_rows(summary), format)
}

pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Paging footer, written to stderr so it never mixes with piped output.
pub fn print_page_info<T>(page: &PaginatedResult<T>, noun: &str) {
    eprintln!(
        "Page {}/{} ({} total {})",
        page.current_page, page.last_page, page.total, noun
    );
}

// -- Formatting --

fn optional_id(id: Option<i64>) -> String {
    id.map(|i| i.to_string()).unwrap_or_default()
}

fn yes_no(value: bool) -> String {
    let text = if value { "yes" } else { "no" };
    text.to_string()
}

/// Groups the integer part in threes with `sep`.
fn group_thousands(digits: &str, sep: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

/// `R$ 1.234,56`
fn format_brl(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}R$ {},{:02}",
        sign,
        group_thousands(&(cents / 100).to_string(), '.'),
        cents % 100
    )
}

/// Whole points with `.` grouping, e.g. `12.500`.
fn format_points(value: f64) -> String {
    let whole = value.abs().round() as u64;
    let sign = if value < 0.0 && whole > 0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(&whole.to_string(), '.'))
}

fn format_signed_points(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", format_points(value))
    } else {
        format_points(value)
    }
}
