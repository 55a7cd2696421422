use super::*;

// Env vars are process-global; every test that touches them holds this lock.
static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// # Safety
/// Caller must hold `ENV_LOCK`.
unsafe fn clear_chat_env() {
    unsafe {
        std::env::remove_var("CHAT_API_BASE_URL");
        std::env::remove_var("CHAT_API_SIGN_UP_PATH");
        std::env::remove_var("CHAT_API_LOGIN_PATH");
        std::env::remove_var("CHAT_API_LOGOUT_PATH");
        std::env::remove_var("CHAT_API_CONNECT_TIMEOUT_SECS");
        std::env::remove_var("CHAT_API_REQUEST_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_chat_env() };

    let cfg = AuthClientConfig::from_env().unwrap();
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.endpoints, Endpoints::default());
    assert_eq!(cfg.endpoints.sign_up, "/signUp");
    assert_eq!(cfg.timeouts, ClientTimeouts { connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS, request_secs: None });
    assert_eq!(cfg, AuthClientConfig::default());
}

#[test]
fn from_env_parses_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_chat_env();
        std::env::set_var("CHAT_API_BASE_URL", "https://chat.example.test/api/");
        std::env::set_var("CHAT_API_SIGN_UP_PATH", "users");
        std::env::set_var("CHAT_API_LOGIN_PATH", "/sessions");
        std::env::set_var("CHAT_API_CONNECT_TIMEOUT_SECS", "3");
        std::env::set_var("CHAT_API_REQUEST_TIMEOUT_SECS", " 42 ");
    }

    let cfg = AuthClientConfig::from_env().unwrap();
    assert_eq!(cfg.base_url, "https://chat.example.test/api");
    assert_eq!(cfg.endpoints.sign_up, "/users");
    assert_eq!(cfg.endpoints.login, "/sessions");
    assert_eq!(cfg.endpoints.logout, DEFAULT_LOGOUT_PATH);
    assert_eq!(cfg.timeouts, ClientTimeouts { connect_secs: 3, request_secs: Some(42) });

    unsafe { clear_chat_env() };
}

#[test]
fn from_env_rejects_bad_timeout() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_chat_env();
        std::env::set_var("CHAT_API_REQUEST_TIMEOUT_SECS", "soon");
    }

    let err = AuthClientConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::Parse { var: "CHAT_API_REQUEST_TIMEOUT_SECS", .. }));
    assert!(err.to_string().contains("soon"));

    unsafe { clear_chat_env() };
}

#[test]
fn with_base_url_trims_trailing_slash() {
    let cfg = AuthClientConfig::with_base_url("http://localhost:9000///");
    assert_eq!(cfg.base_url, "http://localhost:9000");
}

#[test]
fn normalize_path_adds_leading_slash() {
    assert_eq!(normalize_path("signUp"), "/signUp");
    assert_eq!(normalize_path("/signUp"), "/signUp");
}
