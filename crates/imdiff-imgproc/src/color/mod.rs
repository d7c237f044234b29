//! Color space and channel reduction operations.

mod gray;

pub use gray::gray_from_channel_mean;
