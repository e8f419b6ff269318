mod channel;
mod history;
mod shutdown;

use cb_core::Event;

use bytes::Bytes;
use serde_json::{Value, json};

pub(crate) fn event(message: &str) -> Event {
    Event::from_value(json!({ "message": message }))
}

/// Decode a `data: <json>\n\n` frame back into JSON
pub(crate) fn decode_frame(frame: &Bytes) -> Value {
    let text = std::str::from_utf8(frame).unwrap();
    let json = text
        .strip_prefix("data: ")
        .and_then(|rest| rest.strip_suffix("\n\n"))
        .unwrap();
    serde_json::from_str(json).unwrap()
}
