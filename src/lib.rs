pub mod capabilities;
pub mod conversation;
pub mod core;
pub mod parser;
pub mod permissions;
pub mod prompt;

// Optional components
pub mod cli;
pub mod llm;
pub mod logging;

// The agent loop itself
pub mod agent;
