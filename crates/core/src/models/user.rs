use serde::{Deserialize, Serialize};

use super::transaction::{self, Transaction};

/// Aggregated statistics for the logged-in user.
///
/// Built once per fetch cycle by the aggregator and never persisted.
/// `xp_granted` / `xp_received` come from independent aggregate queries and
/// are not reconciled with `transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub first_name: String,
    pub last_name: String,

    /// Level for the configured event path
    pub level: i64,

    /// XP transactions, ascending by creation time
    pub transactions: Vec<Transaction>,

    /// Sum of `transactions` amounts
    pub total_xp: f64,

    /// Aggregate sum of `up` transactions (XP granted through audits)
    pub xp_granted: f64,

    /// Aggregate sum of `down` transactions (XP received from audits)
    pub xp_received: f64,
}

impl UserStats {
    /// Build a record, deriving `total_xp` from the transaction list.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        level: i64,
        transactions: Vec<Transaction>,
        xp_granted: f64,
        xp_received: f64,
    ) -> Self {
        let total_xp = transaction::total_amount(&transactions);
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            level,
            transactions,
            total_xp,
            xp_granted,
            xp_received,
        }
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Granted / received. `None` when nothing has been received.
    #[must_use]
    pub fn audit_ratio(&self) -> Option<f64> {
        if self.xp_received > 0.0 {
            Some(self.xp_granted / self.xp_received)
        } else {
            None
        }
    }
}

/// Identity returned by the session-check query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: i64,
    pub login: String,
}
