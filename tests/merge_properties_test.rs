use mfe_observability::test_support::MemoryLogSink;
use mfe_observability::{LogContext, MicrofrontendInfo, create_microfrontend_observability};
use proptest::prelude::*;
use serde_json::{Value, json};
use std::sync::Arc;

const METADATA_KEYS: [&str; 5] = ["mfe_id", "mfe_name", "mfe_version", "team", "domain"];

fn caller_context() -> impl Strategy<Value = LogContext> {
    let key = prop_oneof![
        "[a-z]{1,8}",
        Just("mfe_id".to_string()),
        Just("team".to_string()),
        Just("domain".to_string()),
    ];
    prop::collection::btree_map(key, any::<i64>(), 0..6).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(k, v)| (k, json!(v)))
            .collect::<LogContext>()
    })
}

proptest! {
    #[test]
    fn metadata_wins_and_caller_keys_survive(
        id in "[a-z_]{1,12}",
        name in "[a-z]{1,8}",
        version in "[0-9]\\.[0-9]\\.[0-9]",
        team in proptest::option::of("[a-z_]{1,10}"),
        ctx in caller_context(),
    ) {
        let sink = Arc::new(MemoryLogSink::new());
        let observability = create_microfrontend_observability(sink.clone());
        let mut info = MicrofrontendInfo::new(id.as_str(), name.as_str(), version.as_str());
        info.team = team.clone();
        observability.register_microfrontend(info).unwrap();

        observability.create_logger(&id).unwrap().info("EVENT", Some(ctx.clone())).unwrap();
        let event = sink.last().unwrap();

        prop_assert_eq!(event.context_str("mfe_id"), Some(id.as_str()));
        prop_assert_eq!(event.context_str("mfe_name"), Some(name.as_str()));
        prop_assert_eq!(event.context_str("mfe_version"), Some(version.as_str()));
        prop_assert_eq!(
            event.context.get("team"),
            Some(&team.map_or(Value::Null, Value::String))
        );
        prop_assert_eq!(event.context.get("domain"), Some(&Value::Null));

        for (key, value) in &ctx {
            if !METADATA_KEYS.contains(&key.as_str()) {
                prop_assert_eq!(event.context.get(key), Some(value));
            }
        }
        for key in METADATA_KEYS {
            prop_assert!(event.context.contains_key(key));
        }
    }
}
