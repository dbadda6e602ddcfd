// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use xp_dashboard_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn invalid_credentials_is_user_facing() {
        assert_eq!(
            CoreError::InvalidCredentials.to_string(),
            "Username or password incorrect"
        );
    }

    #[test]
    fn auth_failed_shows_status_code() {
        let err = CoreError::AuthFailed { status: 503 };
        assert_eq!(err.to_string(), "Error code: 503");
    }

    #[test]
    fn not_authenticated() {
        assert_eq!(
            CoreError::NotAuthenticated.to_string(),
            "Not authenticated: log in first"
        );
    }

    #[test]
    fn graphql() {
        let err = CoreError::GraphQl("field 'foo' not found".into());
        assert_eq!(err.to_string(), "GraphQL query error: field 'foo' not found");
    }

    #[test]
    fn missing_field() {
        let err = CoreError::missing("data/user/0/firstName");
        assert_eq!(
            err.to_string(),
            "Missing field in GraphQL response: data/user/0/firstName"
        );
    }

    #[test]
    fn network() {
        let err = CoreError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn token_storage() {
        let err = CoreError::TokenStorage("permission denied".into());
        assert_eq!(err.to_string(), "Token storage error: permission denied");
    }
}

// ── From conversions ────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::TokenStorage(msg) if msg.contains("nope")));
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn question_mark_propagates_io() {
        fn read_missing() -> Result<String, CoreError> {
            Ok(std::fs::read_to_string("/definitely/not/here/token")?)
        }
        assert!(matches!(read_missing(), Err(CoreError::TokenStorage(_))));
    }

    #[test]
    fn errors_are_debug() {
        let err = CoreError::AuthFailed { status: 500 };
        assert!(format!("{err:?}").contains("AuthFailed"));
    }
}
