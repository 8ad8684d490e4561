//! Crate error types
//!
//! Startup-level failures. Request-level errors never reach this type; the
//! static-file service answers those itself (404 and friends).

use std::fmt;

#[derive(Debug)]
pub enum ServeError {
    /// Could not bind the listening socket
    Bind(String),
    /// Could not launch the default browser
    Browser(String),
}

impl fmt::Display for ServeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServeError::Bind(msg) => write!(f, "Bind error: {}", msg),
            ServeError::Browser(msg) => write!(f, "Browser launch error: {}", msg),
        }
    }
}

impl std::error::Error for ServeError {}
