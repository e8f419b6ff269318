pub mod channel;
pub mod channel_id;
pub mod channel_limits;
pub mod channel_registry;
pub mod error;
pub mod frame;
pub mod history_buffer;
pub mod metrics;
pub mod shutdown_coordinator;
pub mod shutdown_guard;

pub use channel::Channel;
pub use channel_id::ChannelId;
pub use channel_limits::ChannelLimits;
pub use channel_registry::ChannelRegistry;
pub use error::{Result, StreamError};
pub use frame::encode_frame;
pub use history_buffer::HistoryBuffer;
pub use metrics::Metrics;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;

#[cfg(test)]
mod tests;
