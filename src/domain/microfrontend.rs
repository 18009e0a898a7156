use super::LogContext;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Top-level keys owned by the named fields; never stored in `extra`.
pub const RESERVED_KEYS: [&str; 5] = ["id", "name", "version", "team", "domain"];

/// Metadata describing a microfrontend.
///
/// `id` is the registry key. Attributes not covered by the named fields are
/// kept in `extra` and flattened when (de)serialized. Keys listed in
/// `RESERVED_KEYS` are never written from or read into `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MicrofrontendInfo {
    pub id: String,
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(
        flatten,
        serialize_with = "serialize_extra",
        deserialize_with = "deserialize_extra"
    )]
    pub extra: LogContext,
}

impl MicrofrontendInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: version.into(),
            team: None,
            domain: None,
            extra: LogContext::new(),
        }
    }

    #[must_use]
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Add an extra attribute. Reserved keys are ignored; set the named
    /// field instead.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if is_reserved(&key) {
            tracing::debug!(key = %key, "Ignoring extra attribute with reserved key");
            return self;
        }
        self.extra.insert(key, value.into());
        self
    }

    /// The five metadata keys stamped onto every event, in stamping order.
    ///
    /// `team` and `domain` are always present and carry `null` when unset.
    pub fn metadata_fields(&self) -> [(&'static str, Value); 5] {
        [
            ("mfe_id", Value::String(self.id.clone())),
            ("mfe_name", Value::String(self.name.clone())),
            ("mfe_version", Value::String(self.version.clone())),
            ("team", optional_string(self.team.as_deref())),
            ("domain", optional_string(self.domain.as_deref())),
        ]
    }
}

fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

fn serialize_extra<S>(extra: &LogContext, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(extra.iter().filter(|(k, _)| !is_reserved(k)))
}

fn deserialize_extra<'de, D>(deserializer: D) -> Result<LogContext, D::Error>
where
    D: Deserializer<'de>,
{
    let mut extra = LogContext::deserialize(deserializer)?;
    extra.retain(|k, _| !is_reserved(k));
    Ok(extra)
}

fn optional_string(value: Option<&str>) -> Value {
    value.map_or(Value::Null, |v| Value::String(v.to_string()))
}
