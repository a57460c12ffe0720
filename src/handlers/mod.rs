mod link_received;

pub use link_received::{VideoPipeline, link_received};
