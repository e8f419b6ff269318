pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod frame_reader;

pub use client::Client;
pub use error::{ClientError, Result as CliClientResult};
pub use frame_reader::FrameReader;
