// ═══════════════════════════════════════════════════════════════════
// Model Tests — Transaction wire shape, UserStats, Session, Settings
// ═══════════════════════════════════════════════════════════════════

use chrono::{TimeZone, Utc};

use xp_dashboard_core::models::session::Session;
use xp_dashboard_core::models::settings::DashboardSettings;
use xp_dashboard_core::models::transaction::{total_amount, Transaction};
use xp_dashboard_core::models::user::{UserIdentity, UserStats};

fn tx(amount: i64, day: u32) -> Transaction {
    Transaction::new(amount, Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap())
}

// ── Transaction ─────────────────────────────────────────────────────

mod transaction {
    use super::*;

    #[test]
    fn deserializes_api_shape() {
        let json = r#"{"amount": 5000, "createdAt": "2024-03-01T09:30:00.123456+00:00"}"#;
        let t: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(t.amount, 5000);
        assert_eq!(t.created_at.date_naive().to_string(), "2024-03-01");
    }

    #[test]
    fn deserializes_offset_timestamp_to_utc() {
        let json = r#"{"amount": 1, "createdAt": "2024-03-01T01:00:00+02:00"}"#;
        let t: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(t.created_at, Utc.with_ymd_and_hms(2024, 2, 29, 23, 0, 0).unwrap());
    }

    #[test]
    fn serializes_with_camel_case_timestamp() {
        let json = serde_json::to_value(tx(10, 1)).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn rejects_missing_timestamp() {
        let json = r#"{"amount": 5000}"#;
        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }

    #[test]
    fn total_amount_sums_signed_values() {
        let list = vec![tx(1000, 1), tx(-200, 2), tx(50, 3)];
        assert_eq!(total_amount(&list), 850.0);
        assert_eq!(total_amount(&[]), 0.0);
    }
}

// ── UserStats ───────────────────────────────────────────────────────

mod user_stats {
    use super::*;

    #[test]
    fn total_xp_derived_from_transactions() {
        let stats = UserStats::new("Ada", "Lovelace", 12, vec![tx(1000, 1), tx(2000, 2)], 0.0, 0.0);
        assert_eq!(stats.total_xp, 3000.0);
    }

    #[test]
    fn full_name() {
        let stats = UserStats::new("Ada", "Lovelace", 1, vec![], 0.0, 0.0);
        assert_eq!(stats.full_name(), "Ada Lovelace");
    }

    #[test]
    fn audit_ratio() {
        let stats = UserStats::new("a", "b", 1, vec![], 300.0, 100.0);
        assert_eq!(stats.audit_ratio(), Some(3.0));
    }

    #[test]
    fn audit_ratio_none_without_received() {
        let stats = UserStats::new("a", "b", 1, vec![], 300.0, 0.0);
        assert_eq!(stats.audit_ratio(), None);
    }

    #[test]
    fn totals_are_not_reconciled_with_transactions() {
        let stats = UserStats::new("a", "b", 1, vec![tx(10, 1)], 5_000.0, 7_000.0);
        assert_eq!(stats.total_xp, 10.0);
        assert_eq!(stats.xp_granted, 5_000.0);
        assert_eq!(stats.xp_received, 7_000.0);
    }

    #[test]
    fn user_identity_deserializes() {
        let id: UserIdentity = serde_json::from_str(r#"{"id": 42, "login": "alovelace"}"#).unwrap();
        assert_eq!(id, UserIdentity { id: 42, login: "alovelace".into() });
    }
}

// ── Session ─────────────────────────────────────────────────────────

mod session {
    use super::*;

    #[test]
    fn bearer_header_value() {
        let s = Session::new("abc.def.ghi");
        assert_eq!(s.bearer(), "Bearer abc.def.ghi");
        assert_eq!(s.token(), "abc.def.ghi");
    }

    #[test]
    fn debug_redacts_token() {
        let s = Session::new("super-secret-jwt");
        let dbg = format!("{s:?}");
        assert!(!dbg.contains("super-secret-jwt"));
        assert!(dbg.contains("redacted"));
    }
}

// ── Settings ────────────────────────────────────────────────────────

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let s = DashboardSettings::default();
        assert_eq!(
            s.graphql_endpoint,
            "https://zone01normandie.org/api/graphql-engine/v1/graphql"
        );
        assert_eq!(s.auth_endpoint, "https://zone01normandie.org/api/auth/signin");
        assert_eq!(s.event_path, "/rouen/div-01");
        assert_eq!(s.request_timeout_secs, 30);
    }

    #[test]
    fn timeout_defaults_when_absent_from_json() {
        let json = r#"{
            "graphql_endpoint": "http://localhost/graphql",
            "auth_endpoint": "http://localhost/signin",
            "event_path": "/paris/piscine"
        }"#;
        let s: DashboardSettings = serde_json::from_str(json).unwrap();
        assert_eq!(s.event_path, "/paris/piscine");
        assert_eq!(s.request_timeout_secs, 30);
    }
}
