use crate::normalize::{format_timestamp, generate_id, is_absent};
use crate::{CoreError, Result as CoreErrorResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `type` of the greeting written to a stream when it opens
pub const CONNECTION_EVENT_TYPE: &str = "connection";
pub const CONNECTION_MESSAGE: &str = "Connected to log stream";

const FIELD_ID: &str = "id";
const FIELD_TIMESTAMP: &str = "timestamp";
const FIELD_TYPE: &str = "type";
const FIELD_MESSAGE: &str = "message";
const FIELD_DATA: &str = "data";
const FIELD_CLIENT_COUNT: &str = "clientCount";

/// One unit of callback/log data.
///
/// An event is a JSON object. The well-known fields (`message`, `level`,
/// `service`, `timestamp`, `id`, `type`) are all optional and any other
/// field is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event(Map<String, Value>);

impl Event {
    /// Build an event from any JSON value.
    ///
    /// Objects are used as-is; any other value is wrapped as `{"data": value}`.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            other => {
                let mut map = Map::new();
                map.insert(FIELD_DATA.to_string(), other);
                Self(map)
            }
        }
    }

    /// Decode a request body. Fails on anything that is not valid JSON.
    #[track_caller]
    pub fn from_slice(body: &[u8]) -> CoreErrorResult<Self> {
        let value: Value = serde_json::from_slice(body).map_err(CoreError::decode)?;
        Ok(Self::from_value(value))
    }

    /// Fill `timestamp` and `id` from the current clock when absent.
    pub fn normalize(self) -> Self {
        self.normalize_at(Utc::now())
    }

    /// Fill `timestamp` and `id` from `now` when absent.
    pub fn normalize_at(mut self, now: DateTime<Utc>) -> Self {
        if is_absent(self.0.get(FIELD_TIMESTAMP)) {
            self.0
                .insert(FIELD_TIMESTAMP.to_string(), Value::String(format_timestamp(now)));
        }
        if is_absent(self.0.get(FIELD_ID)) {
            self.0
                .insert(FIELD_ID.to_string(), Value::String(generate_id(now)));
        }
        self
    }

    /// Greeting written to a newly opened stream.
    pub fn connection(client_count: usize) -> Self {
        Self::connection_at(client_count, Utc::now())
    }

    pub fn connection_at(client_count: usize, now: DateTime<Utc>) -> Self {
        let mut map = Map::new();
        map.insert(
            FIELD_TYPE.to_string(),
            Value::String(CONNECTION_EVENT_TYPE.to_string()),
        );
        map.insert(
            FIELD_MESSAGE.to_string(),
            Value::String(CONNECTION_MESSAGE.to_string()),
        );
        map.insert(
            FIELD_TIMESTAMP.to_string(),
            Value::String(format_timestamp(now)),
        );
        map.insert(FIELD_CLIENT_COUNT.to_string(), Value::from(client_count));
        Self(map)
    }

    pub fn id(&self) -> Option<&str> {
        self.str_field(FIELD_ID)
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.str_field(FIELD_TIMESTAMP)
    }

    pub fn event_type(&self) -> Option<&str> {
        self.str_field(FIELD_TYPE)
    }

    pub fn message(&self) -> Option<&str> {
        self.str_field(FIELD_MESSAGE)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Compact JSON text of the event
    #[track_caller]
    pub fn to_json(&self) -> CoreErrorResult<String> {
        serde_json::to_string(&self.0).map_err(CoreError::encode)
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for Event {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
