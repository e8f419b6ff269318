use crate::Result as StreamErrorResult;

use cb_core::Event;

use bytes::Bytes;

/// Encode an event as one SSE frame: `data: <json>\n\n`.
pub fn encode_frame(event: &Event) -> StreamErrorResult<Bytes> {
    let json = event.to_json()?;
    Ok(Bytes::from(format!("data: {json}\n\n")))
}
