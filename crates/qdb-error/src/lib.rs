//! `qdb-error` is the failure taxonomy shared by the qdb tracer, its controlling server
//! and the transport, router, authenticator and evaluator between them.
//!
//! Every failure is a [`QdbError`]. Its `Display` form is the message for people and
//! its `Debug` form is the diagnostic for logs, so callers can surface one and record
//! the other without mixing them up.
//!
//! [`QdbError::QuitSignal`] doubles as the runtime's native stop signal: a
//! [`qdb_runtime::Stepper`] that has never heard of this crate still stops when a hook
//! returns it.
//!
//! ## Examples
//!
//! ```rs
//! use qdb_error::{ErrorClass, QdbError};
//!
//! let err = QdbError::failed_to_connect("localhost:9000", 3);
//! assert_eq!(err.message(), "Failed to connect to localhost:9000 after 3 retries.");
//! assert_eq!(err.diagnostic(), "FailedToConnect(address='localhost:9000', retry_attempts=3)");
//! assert_eq!(err.class(), ErrorClass::Recoverable);
//!
//! let quit = QdbError::quit();
//! assert!(qdb_runtime::is_stop_signal(&quit));
//! ```
mod breakpoint;
mod diagnostic;
mod error;
mod payload;
pub mod repr;

pub use breakpoint::Breakpoint;
pub use error::{BoxError, ErrorClass, QdbError};
pub use payload::RawData;

pub type Result<T> = std::result::Result<T, QdbError>;
