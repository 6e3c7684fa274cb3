use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{QdbError, Result, payload::RawData, repr};

/// Describes a breakpoint requested by the controlling server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Breakpoint {
    /// File the breakpoint is set in
    pub file: String,
    /// 1-based line number
    pub line: u32,
    /// Whether the breakpoint is cleared once hit
    #[serde(default)]
    pub temporary: bool,
    /// Expression that must be truthy for the breakpoint to fire
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    /// Function the breakpoint is scoped to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
}

impl Breakpoint {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
            temporary: false,
            condition: None,
            function: None,
        }
    }

    pub fn temporary(mut self) -> Self {
        self.temporary = true;
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    /// Reads a breakpoint from its JSON form.
    ///
    /// Returns [`QdbError::BreakpointReadError`] carrying `data` if it is not a valid
    /// breakpoint object or names line 0.
    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str::<Self>(data)
            .ok()
            .filter(|bp| bp.line > 0)
            .ok_or_else(|| QdbError::breakpoint_read_error(data))
    }

    /// Same as [`Breakpoint::from_json`] for undecoded input.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        serde_json::from_slice::<Self>(data)
            .ok()
            .filter(|bp| bp.line > 0)
            .ok_or_else(|| QdbError::breakpoint_read_error(RawData::from(data)))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub(crate) fn repr(&self) -> String {
        format!(
            "Breakpoint(file={}, line={}, temporary={}, condition={}, function={})",
            repr::quote(&self.file),
            self.line,
            self.temporary,
            optional(self.condition.as_deref()),
            optional(self.function.as_deref()),
        )
    }
}

fn optional(value: Option<&str>) -> String {
    value.map(repr::quote).unwrap_or_else(|| "None".to_string())
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)?;
        if let Some(condition) = &self.condition {
            write!(f, " if {condition}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_from_json() {
        let bp = Breakpoint::from_json(r#"{"file": "app.py", "line": 12, "condition": "x > 1"}"#)
            .unwrap();

        assert_eq!(bp, Breakpoint::new("app.py", 12).with_condition("x > 1"));
    }

    #[test]
    fn test_to_json_then_from_slice() {
        let bp = Breakpoint::new("app.py", 3).temporary().with_function("main");
        let json = bp.to_json().unwrap();

        assert_eq!(Breakpoint::from_slice(json.as_bytes()).unwrap(), bp);
    }

    #[rstest]
    #[case::not_json("app.py:12")]
    #[case::missing_line(r#"{"file": "app.py"}"#)]
    #[case::line_zero(r#"{"file": "app.py", "line": 0}"#)]
    #[case::negative_line(r#"{"file": "app.py", "line": -4}"#)]
    fn test_from_json_invalid(#[case] data: &str) {
        assert_eq!(
            Breakpoint::from_json(data),
            Err(QdbError::BreakpointReadError(RawData::Text(data.to_string())))
        );
    }

    #[test]
    fn test_from_slice_invalid_keeps_bytes() {
        let err = Breakpoint::from_slice(b"\xff\xfe").unwrap_err();

        assert_eq!(err.to_string(), "Could not read Breakpoint from b'\\xff\\xfe'");
    }

    #[rstest]
    #[case::plain(Breakpoint::new("app.py", 12), "app.py:12")]
    #[case::conditional(Breakpoint::new("app.py", 12).with_condition("i == 3"), "app.py:12 if i == 3")]
    fn test_display(#[case] bp: Breakpoint, #[case] expected: &str) {
        assert_eq!(bp.to_string(), expected);
    }

    #[test]
    fn test_repr() {
        assert_eq!(
            Breakpoint::new("app.py", 12).with_function("main").repr(),
            "Breakpoint(file='app.py', line=12, temporary=false, condition=None, function='main')"
        );
    }
}
