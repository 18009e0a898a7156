use mfe_observability::test_support::{FailingLogSink, MemoryLogSink};
use mfe_observability::{
    LogContext, LogLevel, LogSink, MicrofrontendInfo, MultiplexLogSink, ObservabilityError,
    create_microfrontend_observability,
};
use serde_json::{Value, json};
use std::sync::Arc;

fn ctx(value: Value) -> Option<LogContext> {
    match value {
        Value::Object(map) => Some(map),
        _ => panic!("context must be an object"),
    }
}

#[test]
fn test_enriches_logs_with_microfrontend_metadata() {
    let sink = Arc::new(MemoryLogSink::new());
    let observability = create_microfrontend_observability(sink.clone());
    observability
        .register_microfrontend(
            MicrofrontendInfo::new("mfe_checkout", "checkout", "3.4.1")
                .with_team("team_payments")
                .with_domain("commerce"),
        )
        .unwrap();

    let logger = observability.create_logger("mfe_checkout").unwrap();
    logger
        .info("ORDER_PLACED", ctx(json!({ "orderId": "12345" })))
        .unwrap();

    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].level, LogLevel::Info);
    assert_eq!(entries[0].message, "ORDER_PLACED");
    assert_eq!(
        Value::Object(entries[0].context.clone()),
        json!({
            "orderId": "12345",
            "mfe_id": "mfe_checkout",
            "mfe_name": "checkout",
            "mfe_version": "3.4.1",
            "team": "team_payments",
            "domain": "commerce"
        })
    );
}

#[test]
fn test_unknown_microfrontend_id_fails() {
    let observability = create_microfrontend_observability(Arc::new(MemoryLogSink::new()));
    let err = observability.create_logger("missing").unwrap_err();
    assert!(err.to_string().contains("Unknown microfrontend id"));
    assert!(err.to_string().contains("missing"));
}

#[test]
fn test_reregistration_uses_latest_metadata() {
    let sink = Arc::new(MemoryLogSink::new());
    let observability = create_microfrontend_observability(sink.clone());
    observability
        .register_microfrontend(MicrofrontendInfo::new("mfe_search", "search", "1.0.0").with_team("team_a"))
        .unwrap();
    observability
        .register_microfrontend(MicrofrontendInfo::new("mfe_search", "search", "1.1.0").with_team("team_b"))
        .unwrap();

    observability
        .create_logger("mfe_search")
        .unwrap()
        .debug("QUERY", None)
        .unwrap();

    let event = sink.last().unwrap();
    assert_eq!(event.context_str("mfe_version"), Some("1.1.0"));
    assert_eq!(event.context_str("team"), Some("team_b"));
}

#[test]
fn test_registration_is_idempotent_for_identical_input() {
    let observability = create_microfrontend_observability(Arc::new(MemoryLogSink::new()));
    let info = MicrofrontendInfo::new("mfe_cart", "cart", "2.0.0");
    observability.register_microfrontend(info.clone()).unwrap();
    observability.register_microfrontend(info.clone()).unwrap();

    assert_eq!(observability.registry().len(), 1);
    assert_eq!(*observability.registry().get("mfe_cart").unwrap(), info);
}

#[test]
fn test_whitespace_id_rejected() {
    let observability = create_microfrontend_observability(Arc::new(MemoryLogSink::new()));
    let err = observability
        .register_microfrontend(MicrofrontendInfo::new(" \t ", "blank", "1.0.0"))
        .unwrap_err();
    assert!(matches!(err, ObservabilityError::Validation(_)));
    assert!(observability.registry().is_empty());
}

#[test]
fn test_facade_propagates_sink_failure() {
    let observability = create_microfrontend_observability(Arc::new(FailingLogSink::new()));
    observability
        .register_microfrontend(MicrofrontendInfo::new("mfe_cart", "cart", "2.0.0"))
        .unwrap();

    let result = observability.create_logger("mfe_cart").unwrap().error("X", None);
    assert!(result.is_err());
}

#[test]
fn test_fanout_behind_facade_delivers_to_healthy_sinks() {
    let a = Arc::new(MemoryLogSink::new());
    let b = Arc::new(MemoryLogSink::new());
    let failing = Arc::new(FailingLogSink::new());
    let sinks: Vec<Arc<dyn LogSink>> = vec![a.clone(), b.clone(), failing.clone()];
    let fanout = MultiplexLogSink::new(sinks).unwrap();

    let observability = create_microfrontend_observability(Arc::new(fanout));
    observability
        .register_microfrontend(MicrofrontendInfo::new("mfe_profile", "profile", "0.9.0"))
        .unwrap();
    let logger = observability.create_logger("mfe_profile").unwrap();

    assert!(logger.warn("AVATAR_MISSING", ctx(json!({ "userId": 7 }))).is_ok());

    assert_eq!(a.entries(), b.entries());
    assert_eq!(a.len(), 1);
    assert_eq!(a.last().unwrap().context.get("userId"), Some(&json!(7)));
    assert_eq!(failing.attempts(), 1);
    assert!(failing.delivered().is_empty());
}

#[test]
fn test_fanout_recovers_once_sink_heals() {
    let failing = Arc::new(FailingLogSink::new());
    let sinks: Vec<Arc<dyn LogSink>> = vec![failing.clone()];
    let fanout = MultiplexLogSink::new(sinks).unwrap();

    fanout.log(LogLevel::Info, "FIRST", &LogContext::new()).unwrap();
    failing.set_should_fail(false);
    fanout.log(LogLevel::Info, "SECOND", &LogContext::new()).unwrap();

    let delivered = failing.delivered();
    assert_eq!(failing.attempts(), 2);
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].message, "SECOND");
}

#[test]
fn test_empty_fanout_fails_at_construction() {
    let result = MultiplexLogSink::new(Vec::new());
    assert!(matches!(result, Err(ObservabilityError::Validation(_))));
}

#[test]
fn test_observability_is_shareable_across_threads() {
    let sink = Arc::new(MemoryLogSink::new());
    let observability = Arc::new(create_microfrontend_observability(sink.clone()));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let observability = Arc::clone(&observability);
            std::thread::spawn(move || {
                let id = format!("mfe_{i}");
                observability
                    .register_microfrontend(MicrofrontendInfo::new(id.as_str(), "worker", "1.0.0"))
                    .unwrap();
                observability
                    .create_logger(&id)
                    .unwrap()
                    .info("READY", None)
                    .unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(observability.registry().len(), 4);
    assert_eq!(sink.len(), 4);
}
