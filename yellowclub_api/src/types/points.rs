use std::fmt;

use serde::{Deserialize, Serialize};

use super::de::{f64_lenient, opt_f64_lenient};

/// Kind of a points movement, normalized from the server's `tipo` field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionType {
    Credit,
    Debit,
    Expired,
    Reversal,
    Other(String),
}

impl TransactionType {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionType::Credit => "credit",
            TransactionType::Debit => "debit",
            TransactionType::Expired => "expired",
            TransactionType::Reversal => "reversal",
            TransactionType::Other(raw) => raw.as_str(),
        }
    }

    /// Whether the movement takes points away from the balance.
    pub fn is_outflow(&self) -> bool {
        matches!(self, TransactionType::Debit | TransactionType::Expired)
    }
}

impl From<&str> for TransactionType {
    fn from(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "c" | "credito" | "crédito" | "credit" | "entrada" | "acumulo" | "acúmulo" => {
                TransactionType::Credit
            }
            "d" | "debito" | "débito" | "debit" | "saida" | "saída" | "resgate" | "redemption" => {
                TransactionType::Debit
            }
            "e" | "expirado" | "expiracao" | "expiração" | "expired" => TransactionType::Expired,
            "r" | "estorno" | "reversal" | "refund" => TransactionType::Reversal,
            _ => TransactionType::Other(raw.trim().to_string()),
        }
    }
}

impl From<String> for TransactionType {
    fn from(raw: String) -> Self {
        TransactionType::from(raw.as_str())
    }
}

impl From<TransactionType> for String {
    fn from(kind: TransactionType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the points extract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointsTransaction {
    pub id: Option<i64>,
    #[serde(alias = "tipo")]
    pub transaction_type: TransactionType,
    /// Absolute amount as sent by the server.
    #[serde(alias = "valor", alias = "pontos", deserialize_with = "f64_lenient")]
    pub points: f64,
    #[serde(alias = "descricao")]
    pub description: Option<String>,
    #[serde(alias = "origem")]
    pub origin: Option<String>,
    #[serde(alias = "data", alias = "data_transacao")]
    pub date: Option<String>,
    #[serde(default, alias = "saldo", deserialize_with = "opt_f64_lenient")]
    pub balance_after: Option<f64>,
}

impl PointsTransaction {
    /// Amount with sign applied: negative for debits and expirations.
    pub fn signed_points(&self) -> f64 {
        match self.transaction_type {
            TransactionType::Credit | TransactionType::Reversal => self.points.abs(),
            TransactionType::Debit | TransactionType::Expired => -self.points.abs(),
            TransactionType::Other(_) => self.points,
        }
    }
}

/// Totals over a page of extract lines.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractSummary {
    pub credits: f64,
    pub debits: f64,
    pub expired: f64,
    pub reversals: f64,
    pub net: f64,
}

impl ExtractSummary {
    pub fn from_transactions(transactions: &[PointsTransaction]) -> Self {
        let mut summary = ExtractSummary::default();
        for tx in transactions {
            let amount = tx.points.abs();
            match tx.transaction_type {
                TransactionType::Credit => summary.credits += amount,
                TransactionType::Debit => summary.debits += amount,
                TransactionType::Expired => summary.expired += amount,
                TransactionType::Reversal => summary.reversals += amount,
                TransactionType::Other(_) => {}
            }
            summary.net += tx.signed_points();
        }
        summary
    }
}

/// Current points position of the logged-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointsBalance {
    #[serde(
        alias = "saldo",
        alias = "pontos",
        alias = "points",
        alias = "total_points",
        deserialize_with = "f64_lenient"
    )]
    pub balance: f64,
    #[serde(default, alias = "pontos_a_expirar", deserialize_with = "opt_f64_lenient")]
    pub expiring_points: Option<f64>,
    #[serde(alias = "data_expiracao")]
    pub next_expiration: Option<String>,
}
