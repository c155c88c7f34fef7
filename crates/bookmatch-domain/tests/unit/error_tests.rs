//! Unit tests for domain error types

use bookmatch_domain::Error;

#[test]
fn test_config_error_has_no_source() {
    let error = Error::config("remote ranking mode requires a remote recommender");
    match error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "remote ranking mode requires a remote recommender");
            assert!(source.is_none());
        }
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_vector_store_error_display() {
    let error = Error::vector_store("index shard offline");
    assert_eq!(error.to_string(), "Vector store error: index shard offline");
}

#[test]
fn test_cache_error_is_cache() {
    assert!(Error::cache("connection refused").is_cache());
    assert!(!Error::vector_store("timeout").is_cache());
}

#[test]
fn test_json_error_conversion() {
    let parse = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
    let error: Error = parse.into();
    assert!(matches!(error, Error::Json { .. }));
}

#[test]
fn test_infrastructure_error_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
    let error = Error::infrastructure_with_source("failed to read catalog", io);
    match error {
        Error::Infrastructure { message, source } => {
            assert_eq!(message, "failed to read catalog");
            assert!(source.is_some());
        }
        _ => panic!("Expected Infrastructure error"),
    }
}
