// Library exports for testing
// The binary (main.rs) imports these as well

pub mod error;
pub mod logger;
pub mod protocol;
pub mod server;
pub mod tools;

#[cfg(test)]
mod tests;

pub const SERVER_NAME: &str = "Change Analysis MCP Server";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
