use miette::{Diagnostic, Severity};

use crate::{QdbError, error::plural_suffix};

impl Diagnostic for QdbError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let code = match self {
            QdbError::QuitSignal(_) => "qdb::quit_signal",
            QdbError::FailedToConnect { .. } => "qdb::failed_to_connect",
            QdbError::UnreachableBreakpoint(_) => "qdb::unreachable_breakpoint",
            QdbError::TopFrame => "qdb::top_frame",
            QdbError::BreakpointReadError(_) => "qdb::breakpoint_read_error",
            QdbError::ReceivedInvalidData(_) => "qdb::received_invalid_data",
            QdbError::CommunicationError(_) => "qdb::communication_error",
            QdbError::InvalidRoute(_) => "qdb::invalid_route",
            QdbError::AuthenticationError(_) => "qdb::authentication_error",
            QdbError::PrognEndsInStatement { .. } => "qdb::progn_ends_in_statement",
            QdbError::ExecutionTimeout { .. } => "qdb::execution_timeout",
        };

        Some(Box::new(code))
    }

    fn severity(&self) -> Option<Severity> {
        match self {
            QdbError::QuitSignal(_) => Some(Severity::Advice),
            _ => Some(Severity::Error),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let msg = match self {
            QdbError::FailedToConnect { .. } => {
                Some("Check that the server is running and reachable from the tracer.".to_string())
            }
            QdbError::UnreachableBreakpoint(_) => {
                Some("Breakpoints can only be set on executable lines.".to_string())
            }
            QdbError::TopFrame => Some("There is no caller frame to move up to.".to_string()),
            QdbError::BreakpointReadError(_) => Some(
                "A breakpoint needs a file and a line number greater than 0.".to_string(),
            ),
            QdbError::AuthenticationError(_) => {
                Some("Check the credentials the tracer was started with.".to_string())
            }
            QdbError::PrognEndsInStatement { .. } => {
                Some("End the source with an expression to get a value back.".to_string())
            }
            QdbError::ExecutionTimeout { time, .. } => Some(format!(
                "Evaluations are stopped after {time} second{}.",
                plural_suffix(time)
            )),
            _ => None,
        };

        msg.map(|m| Box::new(m) as Box<dyn std::fmt::Display>)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::Breakpoint;

    #[rstest]
    #[case::quit(QdbError::quit(), "qdb::quit_signal")]
    #[case::failed_to_connect(QdbError::failed_to_connect("h:1", 2), "qdb::failed_to_connect")]
    #[case::unreachable_breakpoint(
        QdbError::unreachable_breakpoint(Breakpoint::new("a.py", 1)),
        "qdb::unreachable_breakpoint"
    )]
    #[case::top_frame(QdbError::top_frame(), "qdb::top_frame")]
    #[case::breakpoint_read_error(QdbError::breakpoint_read_error("x"), "qdb::breakpoint_read_error")]
    #[case::received_invalid_data(
        QdbError::received_invalid_data("x"),
        "qdb::received_invalid_data"
    )]
    #[case::communication(QdbError::communication("closed"), "qdb::communication_error")]
    #[case::invalid_route(QdbError::invalid_route("x"), "qdb::invalid_route")]
    #[case::authentication(QdbError::authentication("x"), "qdb::authentication_error")]
    #[case::progn(QdbError::progn_ends_in_statement("x"), "qdb::progn_ends_in_statement")]
    #[case::timeout(QdbError::execution_timeout("x", 3), "qdb::execution_timeout")]
    fn test_code(#[case] err: QdbError, #[case] expected: &str) {
        assert_eq!(err.code().map(|c| c.to_string()), Some(expected.to_string()));
    }

    #[test]
    fn test_severity() {
        assert_eq!(QdbError::quit().severity(), Some(Severity::Advice));
        assert_eq!(QdbError::top_frame().severity(), Some(Severity::Error));
    }

    #[rstest]
    #[case::one(1, "Evaluations are stopped after 1 second.")]
    #[case::many(10, "Evaluations are stopped after 10 seconds.")]
    fn test_timeout_help(#[case] time: u64, #[case] expected: &str) {
        let err = QdbError::execution_timeout("loop()", time);

        assert_eq!(err.help().map(|h| h.to_string()), Some(expected.to_string()));
    }

    #[test]
    fn test_no_help_for_quit_or_wrapped_faults() {
        assert!(QdbError::quit().help().is_none());
        assert!(QdbError::communication("closed").help().is_none());
    }
}
