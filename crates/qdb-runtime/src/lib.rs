//! `qdb-runtime` is the host side of the qdb tracer: the native signal used to stop a
//! debugging session and a small stepping loop that honours it.
//!
//! The loop knows nothing about the errors raised by the tracer's collaborators. Any
//! error whose `source()` chain contains [`StopDebugging`] ends the session cleanly,
//! everything else is handed back to the caller untouched.
//!
//! ## Examples
//!
//! ```rs
//! use qdb_runtime::{FrameEvent, RunOutcome, StepCommand, Stepper, StopDebugging, TraceHook};
//!
//! struct QuitOnFirstBreak;
//!
//! impl TraceHook for QuitOnFirstBreak {
//!     type Error = StopDebugging;
//!
//!     fn on_break(&mut self, _event: &FrameEvent) -> Result<StepCommand, Self::Error> {
//!         Err(StopDebugging)
//!     }
//! }
//!
//! let mut stepper = Stepper::new();
//! stepper.add_breakpoint(2);
//! let events = [FrameEvent::new(1, 0), FrameEvent::new(2, 0)];
//!
//! assert_eq!(stepper.run(events, &mut QuitOnFirstBreak).unwrap(), RunOutcome::Stopped);
//! ```
pub mod log;
mod signal;
mod stepper;

pub use signal::{StopDebugging, is_stop_signal};
pub use stepper::{FrameEvent, RunOutcome, StepCommand, Stepper, TraceHook};
