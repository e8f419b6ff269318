use crate::CliClientResult;

use serde_json::Value;

const FRAME_END: &[u8] = b"\n\n";
const DATA_PREFIX: &str = "data:";

/// Reassembles `data: <json>\n\n` frames from arbitrarily split chunks.
#[derive(Debug, Default)]
pub struct FrameReader {
    buffer: Vec<u8>,
}

impl FrameReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk and return every frame it completed.
    pub fn push(&mut self, chunk: &[u8]) -> CliClientResult<Vec<Value>> {
        self.buffer.extend_from_slice(chunk);

        let mut events = Vec::new();
        while let Some(end) = self
            .buffer
            .windows(FRAME_END.len())
            .position(|window| window == FRAME_END)
        {
            let frame: Vec<u8> = self.buffer.drain(..end + FRAME_END.len()).collect();
            let text = String::from_utf8_lossy(&frame[..end]);

            for line in text.lines() {
                if let Some(data) = line.strip_prefix(DATA_PREFIX) {
                    events.push(serde_json::from_str(data.trim_start())?);
                }
            }
        }

        Ok(events)
    }

    /// Bytes received that do not yet form a complete frame
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }
}
