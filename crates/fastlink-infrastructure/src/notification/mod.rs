mod bark;

pub use bark::{BarkSender, DEFAULT_GROUP};
