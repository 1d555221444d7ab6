use std::env;
use trivia_api::Config;

// Environment mutation is kept inside a single test so the parallel test
// runner cannot interleave conflicting values.

#[test]
fn test_from_env_defaults_and_port_validation() {
    unsafe {
        env::remove_var("DATABASE_URL");
        env::remove_var("PORT");
        env::remove_var("HOST");
        env::remove_var("RUST_LOG");
    }

    let config = Config::from_env().unwrap();
    assert_eq!(config.database.url, "sqlite:trivia.db?mode=rwc");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.logging.level, "info,trivia_api=debug");
    assert!(config.validate().is_ok());

    unsafe {
        env::set_var("PORT", "not-a-port");
    }
    let result = Config::from_env();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Invalid PORT value"));

    unsafe {
        env::set_var("PORT", "8080");
    }
    let config = Config::from_env().unwrap();
    assert_eq!(config.server.port, 8080);

    unsafe {
        env::remove_var("PORT");
    }
}
