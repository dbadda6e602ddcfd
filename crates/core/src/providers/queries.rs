//! Fixed GraphQL query documents.
//!
//! The only variable part is the event path used by the level and
//! transaction filters.

/// Transaction type of earned project XP.
pub const TYPE_XP: &str = "xp";
/// Transaction type of XP granted to others through audits.
pub const TYPE_UP: &str = "up";
/// Transaction type of XP received from others' audits.
pub const TYPE_DOWN: &str = "down";

/// `{ user { id login } }`, used to check that a stored token still works.
pub fn session_check_query() -> String {
    "{ user { id login } }".to_string()
}

pub fn user_info_query() -> String {
    "{ user { lastName firstName } }".to_string()
}

pub fn user_level_query(event_path: &str) -> String {
    let path = quote(event_path);
    format!("{{ user {{ events(where: {{event: {{path: {{_ilike: {path}}}}}}}) {{ level }} }} }}")
}

pub fn xp_transactions_query(event_path: &str) -> String {
    let path = quote(event_path);
    let kind = quote(TYPE_XP);
    format!(
        "{{ transaction(where: {{type: {{_eq: {kind}}}, event: {{path: {{_ilike: {path}}}}}}}, \
         order_by: {{id: asc}}) {{ amount createdAt }} }}"
    )
}

/// Aggregate sum of all transactions of `kind` under `event_path`.
pub fn xp_sum_query(kind: &str, event_path: &str) -> String {
    let path = quote(event_path);
    let kind = quote(kind);
    format!(
        "{{ transaction_aggregate(where: {{type: {{_eq: {kind}}}, event: {{path: {{_ilike: {path}}}}}}}) \
         {{ aggregate {{ sum {{ amount }} }} }} }}"
    )
}

/// GraphQL string literal.
fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}
