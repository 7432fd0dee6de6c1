// Search service: validation and result limits

use crate::common::{build_store, create_test_services, OS_LECTURE};
use studymate::core::StudyError;

#[test]
fn test_search_uses_default_k() {
    let services = create_test_services();
    let store = build_store(OS_LECTURE, 10, 2);

    let response = services.search.search(&store, "threads", None).unwrap();
    assert_eq!(response.count, services.config.search.default_k);
    assert_eq!(response.results.len(), response.count);
    assert_eq!(response.query, "threads");
}

#[test]
fn test_search_caps_k_at_max() {
    let services = create_test_services();
    let store = build_store(OS_LECTURE, 2, 0);
    assert!(store.chunks().len() > services.config.search.max_k);

    let response = services.search.search(&store, "threads", Some(10_000)).unwrap();
    assert_eq!(response.count, services.config.search.max_k);
}

#[test]
fn test_empty_query_is_rejected() {
    let services = create_test_services();
    let store = build_store(OS_LECTURE, 10, 2);

    for query in ["", "   ", "\n\t"] {
        let err = services.search.search(&store, query, None).unwrap_err();
        assert!(matches!(err, StudyError::InvalidQuery(_)));
        assert!(err.is_bad_request());
    }
}

#[test]
fn test_overlong_query_is_rejected() {
    let services = create_test_services();
    let store = build_store(OS_LECTURE, 10, 2);
    let query = "memory ".repeat(200);

    let err = services.search.search(&store, &query, None).unwrap_err();
    assert!(err.to_string().contains("too long"));
}
