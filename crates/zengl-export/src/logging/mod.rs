//! Logging setup.
//!
//! The library only talks to the `log` facade. Binaries call
//! [`init_logging`] once to route records to `env_logger` on stderr.

mod init;

pub use init::{init_logging, LoggingConfig};
