use std::fmt;

use qdb_runtime::{StopDebugging, is_stop_signal};
use thiserror::Error;

use crate::{breakpoint::Breakpoint, payload::RawData, repr};

/// Lower-layer fault adapted into [`QdbError::CommunicationError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

type Address = String;
type Source = String;
type Seconds = u64;

/// Every way the tracer, the server and the pieces between them can fail.
///
/// `Display` is the message meant for people; `Debug` is the diagnostic form, which
/// names the variant and echoes its payload, and is meant for logs and tests only.
#[derive(Error)]
pub enum QdbError {
    /// The session was told to stop. Its source is the runtime's own
    /// [`StopDebugging`], so loops that only know that signal stop as well.
    #[error("Quitting")]
    QuitSignal(#[source] StopDebugging),
    #[error("Failed to connect to {address} after {retry_attempts} retries.")]
    FailedToConnect {
        address: Address,
        retry_attempts: u32,
    },
    #[error("Failed to set breakpoint: {0}")]
    UnreachableBreakpoint(Breakpoint),
    #[error("Already in the top frame")]
    TopFrame,
    #[error("Could not read Breakpoint from {0}")]
    BreakpointReadError(RawData),
    #[error("Invalid data: {}", .0.repr())]
    ReceivedInvalidData(RawData),
    #[error("{0}")]
    CommunicationError(#[source] BoxError),
    #[error("{0}")]
    InvalidRoute(String),
    #[error("{0}")]
    AuthenticationError(String),
    #[error("Cannot call progn with src={} as this ends in a statement.", repr::quote(.src))]
    PrognEndsInStatement { src: Source },
    #[error("Executing '{src}' exceeded the max time of {time} second{}", plural_suffix(.time))]
    ExecutionTimeout { src: Source, time: Seconds },
}

pub(crate) fn plural_suffix(count: &Seconds) -> &'static str {
    if *count == 1 { "" } else { "s" }
}

/// How a [`QdbError`] travels up the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// Ends the session at the top of the tracer loop. Never suppressed.
    ControlSignal,
    /// Handed unchanged to the nearest caller that owns the policy.
    Recoverable,
    /// A foreign fault carried with its original cause.
    Wrapped,
}

impl QdbError {
    pub fn quit() -> Self {
        QdbError::QuitSignal(StopDebugging)
    }

    pub fn failed_to_connect(address: impl Into<Address>, retry_attempts: u32) -> Self {
        QdbError::FailedToConnect {
            address: address.into(),
            retry_attempts,
        }
    }

    pub fn unreachable_breakpoint(breakpoint: Breakpoint) -> Self {
        QdbError::UnreachableBreakpoint(breakpoint)
    }

    pub fn top_frame() -> Self {
        QdbError::TopFrame
    }

    pub fn breakpoint_read_error(data: impl Into<RawData>) -> Self {
        QdbError::BreakpointReadError(data.into())
    }

    pub fn received_invalid_data(data: impl Into<RawData>) -> Self {
        QdbError::ReceivedInvalidData(data.into())
    }

    /// Wraps a lower-layer fault. A cause that carries the native stop signal becomes
    /// [`QdbError::QuitSignal`], so the stop is never hidden behind a wrapped fault.
    pub fn communication(cause: impl Into<BoxError>) -> Self {
        let cause = cause.into();
        if is_stop_signal(&*cause) {
            return QdbError::quit();
        }
        QdbError::CommunicationError(cause)
    }

    pub fn invalid_route(route: impl Into<String>) -> Self {
        QdbError::InvalidRoute(route.into())
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        QdbError::AuthenticationError(message.into())
    }

    pub fn progn_ends_in_statement(src: impl Into<Source>) -> Self {
        QdbError::PrognEndsInStatement { src: src.into() }
    }

    pub fn execution_timeout(src: impl Into<Source>, time: Seconds) -> Self {
        QdbError::ExecutionTimeout {
            src: src.into(),
            time,
        }
    }

    /// The sentence to show a user.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// The unambiguous form for logs and tests, e.g. `TopFrame()`.
    pub fn diagnostic(&self) -> String {
        format!("{self:?}")
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            QdbError::QuitSignal(_) => "QuitSignal",
            QdbError::FailedToConnect { .. } => "FailedToConnect",
            QdbError::UnreachableBreakpoint(_) => "UnreachableBreakpoint",
            QdbError::TopFrame => "TopFrame",
            QdbError::BreakpointReadError(_) => "BreakpointReadError",
            QdbError::ReceivedInvalidData(_) => "ReceivedInvalidData",
            QdbError::CommunicationError(_) => "CommunicationError",
            QdbError::InvalidRoute(_) => "InvalidRoute",
            QdbError::AuthenticationError(_) => "AuthenticationError",
            QdbError::PrognEndsInStatement { .. } => "PrognEndsInStatement",
            QdbError::ExecutionTimeout { .. } => "ExecutionTimeout",
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            QdbError::QuitSignal(_) => ErrorClass::ControlSignal,
            QdbError::CommunicationError(_) => ErrorClass::Wrapped,
            QdbError::FailedToConnect { .. }
            | QdbError::UnreachableBreakpoint(_)
            | QdbError::TopFrame
            | QdbError::BreakpointReadError(_)
            | QdbError::ReceivedInvalidData(_)
            | QdbError::InvalidRoute(_)
            | QdbError::AuthenticationError(_)
            | QdbError::PrognEndsInStatement { .. }
            | QdbError::ExecutionTimeout { .. } => ErrorClass::Recoverable,
        }
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, QdbError::QuitSignal(_))
    }

    pub fn is_recoverable(&self) -> bool {
        self.class() == ErrorClass::Recoverable
    }
}

impl fmt::Debug for QdbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.variant_name();
        match self {
            QdbError::QuitSignal(_) | QdbError::TopFrame => write!(f, "{name}()"),
            QdbError::FailedToConnect {
                address,
                retry_attempts,
            } => write!(
                f,
                "{name}(address={}, retry_attempts={retry_attempts})",
                repr::quote(address)
            ),
            QdbError::UnreachableBreakpoint(breakpoint) => {
                write!(f, "{name}(breakpoint={})", breakpoint.repr())
            }
            QdbError::BreakpointReadError(data) | QdbError::ReceivedInvalidData(data) => {
                write!(f, "{name}(data={})", data.diagnostic_repr())
            }
            QdbError::CommunicationError(cause) => {
                write!(f, "{name}(cause={})", repr::quote(&cause.to_string()))
            }
            QdbError::InvalidRoute(route) => write!(f, "{name}(route={})", repr::quote(route)),
            QdbError::AuthenticationError(message) => {
                write!(f, "{name}(message={})", repr::quote(message))
            }
            QdbError::PrognEndsInStatement { src } => {
                write!(f, "{name}(src={})", repr::quote(src))
            }
            QdbError::ExecutionTimeout { src, time } => {
                write!(f, "{name}(src={}, time={time})", repr::quote(src))
            }
        }
    }
}

impl PartialEq for QdbError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (QdbError::QuitSignal(_), QdbError::QuitSignal(_)) => true,
            (QdbError::TopFrame, QdbError::TopFrame) => true,
            (
                QdbError::FailedToConnect {
                    address: a,
                    retry_attempts: n,
                },
                QdbError::FailedToConnect {
                    address: b,
                    retry_attempts: m,
                },
            ) => a == b && n == m,
            (QdbError::UnreachableBreakpoint(a), QdbError::UnreachableBreakpoint(b)) => a == b,
            (QdbError::BreakpointReadError(a), QdbError::BreakpointReadError(b)) => a == b,
            (QdbError::ReceivedInvalidData(a), QdbError::ReceivedInvalidData(b)) => a == b,
            // Causes are opaque; only their rendering is compared.
            (QdbError::CommunicationError(a), QdbError::CommunicationError(b)) => {
                a.to_string() == b.to_string()
            }
            (QdbError::InvalidRoute(a), QdbError::InvalidRoute(b)) => a == b,
            (QdbError::AuthenticationError(a), QdbError::AuthenticationError(b)) => a == b,
            (
                QdbError::PrognEndsInStatement { src: a },
                QdbError::PrognEndsInStatement { src: b },
            ) => a == b,
            (
                QdbError::ExecutionTimeout { src: a, time: n },
                QdbError::ExecutionTimeout { src: b, time: m },
            ) => a == b && n == m,
            _ => false,
        }
    }
}

impl From<StopDebugging> for QdbError {
    fn from(_: StopDebugging) -> Self {
        QdbError::quit()
    }
}

impl From<std::io::Error> for QdbError {
    fn from(err: std::io::Error) -> Self {
        QdbError::communication(err)
    }
}
