pub mod error;
pub mod event;
pub mod normalize;
pub mod output;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use event::{CONNECTION_EVENT_TYPE, CONNECTION_MESSAGE, Event};
pub use normalize::{format_timestamp, generate_id, output_text};
pub use output::Output;

pub use error_location::ErrorLocation;
