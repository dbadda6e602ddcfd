use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single XP transaction as returned by the `transaction` query.
///
/// Transactions arrive ordered ascending by id, which is also creation order.
/// The chart builder relies on that ordering for its running sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// XP points (signed on the wire, positive in practice)
    pub amount: i64,

    /// Creation timestamp (RFC 3339 on the wire)
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(amount: i64, created_at: DateTime<Utc>) -> Self {
        Self { amount, created_at }
    }
}

/// Sum of all transaction amounts, as a float for display math.
pub fn total_amount(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(|t| t.amount as f64).sum()
}
