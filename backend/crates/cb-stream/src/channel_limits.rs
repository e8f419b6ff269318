/// Bounds applied by the registry to open streams
#[derive(Debug, Clone)]
pub struct ChannelLimits {
    /// Maximum concurrently open streams
    pub max_channels: usize,
}

impl ChannelLimits {
    pub fn new(max_channels: usize) -> Self {
        Self { max_channels }
    }
}

impl Default for ChannelLimits {
    fn default() -> Self {
        Self { max_channels: 1000 }
    }
}
