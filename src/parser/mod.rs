//! Response parsing
//!
//! Converts a raw model response into a uniform `Decision`. The two response
//! protocols are structurally different, so the parser is a strategy chosen
//! once at agent construction; after parsing, no caller branches on protocol.

mod native;
mod structured;

pub use native::NativeParser;
pub use structured::StructuredParser;

use crate::core::Decision;
use crate::llm::ModelResponse;

/// Sentinel prefix marking a terminal answer in the native protocol
pub const FINAL_ANSWER: &str = "ANSWER:";

/// Converts one raw model response into exactly one `Decision`
pub trait ResponseParser: Send + Sync {
    /// Parse the response
    fn parse(&self, response: &ModelResponse) -> Decision;
}
