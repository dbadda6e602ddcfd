use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::errors::CoreError;
use crate::models::session::Session;
use crate::models::transaction::Transaction;
use crate::models::user::{UserIdentity, UserStats};
use crate::providers::graphql::GraphQlResponse;
use crate::providers::queries;
use crate::providers::traits::GraphQlTransport;

/// Merges the fixed set of GraphQL queries into one `UserStats` record.
///
/// Query order:
/// 1. personal info
/// 2. level for the event path
/// 3. XP transactions (ascending)
/// 4. + 5. received / granted aggregate sums, awaited together
///
/// GraphQL error lists are logged. A response without the expected data
/// stops the aggregation with `GraphQl` or `MissingField`.
pub struct AggregatorService;

impl AggregatorService {
    pub fn new() -> Self {
        Self
    }

    pub async fn fetch_user_stats(
        &self,
        transport: &dyn GraphQlTransport,
        session: &Session,
        event_path: &str,
    ) -> Result<UserStats, CoreError> {
        let info = run_query(transport, session, "user_info", &queries::user_info_query()).await?;
        let first_name: String = info.field_as("/user/0/firstName")?;
        let last_name: String = info.field_as("/user/0/lastName")?;

        let level = run_query(
            transport,
            session,
            "user_level",
            &queries::user_level_query(event_path),
        )
        .await?;
        let level: i64 = level.field_as("/user/0/events/0/level")?;

        let xp = run_query(
            transport,
            session,
            "xp_transactions",
            &queries::xp_transactions_query(event_path),
        )
        .await?;
        let transactions: Vec<Transaction> = xp.field_as("/transaction")?;

        let down_query = queries::xp_sum_query(queries::TYPE_DOWN, event_path);
        let up_query = queries::xp_sum_query(queries::TYPE_UP, event_path);
        let (down, up) = futures::join!(
            run_query(transport, session, "xp_down_sum", &down_query),
            run_query(transport, session, "xp_up_sum", &up_query),
        );
        let xp_received = read_sum(&down?)?;
        let xp_granted = read_sum(&up?)?;

        let stats = UserStats::new(
            first_name,
            last_name,
            level,
            transactions,
            xp_granted,
            xp_received,
        );

        info!(
            level = stats.level,
            transactions = stats.transactions.len(),
            total_xp = stats.total_xp,
            "user stats aggregated"
        );

        Ok(stats)
    }

    /// Check that the session's token is still accepted.
    ///
    /// `Ok(None)` means the server answered but did not return a user
    /// (typically an expired or invalid token). Transport failures are `Err`.
    pub async fn verify_session(
        &self,
        transport: &dyn GraphQlTransport,
        session: &Session,
    ) -> Result<Option<UserIdentity>, CoreError> {
        let resp = run_query(
            transport,
            session,
            "session_check",
            &queries::session_check_query(),
        )
        .await?;

        match resp.field_as::<UserIdentity>("/user/0") {
            Ok(identity) => Ok(Some(identity)),
            Err(e) => {
                warn!(error = %e, "session check returned no user");
                Ok(None)
            }
        }
    }
}

impl Default for AggregatorService {
    fn default() -> Self {
        Self::new()
    }
}

async fn run_query(
    transport: &dyn GraphQlTransport,
    session: &Session,
    label: &str,
    query: &str,
) -> Result<GraphQlResponse, CoreError> {
    debug!(query = label, transport = transport.name(), "issuing GraphQL query");

    let resp = transport.execute(session, query).await.map_err(|e| {
        error!(query = label, error = %e, "GraphQL request failed");
        e
    })?;

    if resp.has_errors() {
        error!(query = label, errors = %resp.error_summary(), "GraphQL query returned errors");
    }

    Ok(resp)
}

/// `transaction_aggregate.aggregate.sum.amount`.
/// `null` (no rows) reads as 0; an absent `amount` key is `MissingField`.
fn read_sum(resp: &GraphQlResponse) -> Result<f64, CoreError> {
    let sum = resp.field("/transaction_aggregate/aggregate/sum")?;
    match sum.get("amount") {
        Some(Value::Null) => Ok(0.0),
        Some(value) => value.as_f64().ok_or_else(|| {
            CoreError::Deserialization(format!("Aggregate sum is not a number: {value}"))
        }),
        None => Err(CoreError::missing(
            "data/transaction_aggregate/aggregate/sum/amount",
        )),
    }
}
