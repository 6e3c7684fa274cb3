use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::signal::is_stop_signal;

type LineNo = usize;

/// What the stepper should do after handing control back from a break.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Hash)]
pub enum StepCommand {
    /// Run until the next breakpoint.
    #[default]
    Continue,
    /// Break on the very next event, diving into calls.
    StepInto,
    /// Break on the next event in the current frame or an outer one.
    Next,
    /// Run until the current frame returns.
    FunctionExit,
    /// Stop debugging.
    Quit,
}

/// A line event reported by the traced program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameEvent {
    /// Line being executed
    pub line: LineNo,
    /// Call stack depth, 0 for the outermost frame
    pub depth: usize,
}

impl FrameEvent {
    pub fn new(line: LineNo, depth: usize) -> Self {
        Self { line, depth }
    }
}

/// How a call to [`Stepper::run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every event was consumed.
    Finished,
    /// The session was stopped by a quit command or a stop signal.
    Stopped,
}

/// Called by the stepper whenever execution breaks.
pub trait TraceHook {
    type Error: std::error::Error + 'static;

    fn on_break(&mut self, event: &FrameEvent) -> Result<StepCommand, Self::Error>;
}

/// Drives a stream of [`FrameEvent`]s, pausing on breakpoints and step commands.
#[derive(Debug)]
pub struct Stepper {
    breakpoints: BTreeSet<LineNo>,
    command: StepCommand,
    /// Frame depth the pending step command is measured against
    step_depth: Option<usize>,
    active: bool,
}

impl Default for Stepper {
    fn default() -> Self {
        Self::new()
    }
}

impl Stepper {
    pub fn new() -> Self {
        Self {
            breakpoints: BTreeSet::new(),
            command: StepCommand::Continue,
            step_depth: None,
            active: true,
        }
    }

    /// Adds a breakpoint, returning `false` if one was already set on `line`.
    pub fn add_breakpoint(&mut self, line: LineNo) -> bool {
        self.breakpoints.insert(line)
    }

    pub fn remove_breakpoint(&mut self, line: LineNo) -> bool {
        self.breakpoints.remove(&line)
    }

    pub fn clear_breakpoints(&mut self) {
        self.breakpoints.clear();
    }

    /// Breakpoint lines in ascending order.
    pub fn breakpoints(&self) -> impl Iterator<Item = LineNo> + '_ {
        self.breakpoints.iter().copied()
    }

    pub fn set_command(&mut self, command: StepCommand) {
        self.command = command;
        self.step_depth = None;
    }

    pub fn command(&self) -> StepCommand {
        self.command
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Runs until `events` is exhausted or the session is stopped.
    ///
    /// Hook errors recognised by [`is_stop_signal`] stop the session and are consumed;
    /// any other error is returned as is and leaves the stepper active.
    pub fn run<H, I>(&mut self, events: I, hook: &mut H) -> Result<RunOutcome, H::Error>
    where
        H: TraceHook,
        I: IntoIterator<Item = FrameEvent>,
    {
        for event in events {
            if !self.active {
                return Ok(RunOutcome::Stopped);
            }

            if !self.should_break(&event) {
                continue;
            }

            debug!(line = event.line, depth = event.depth, "Breaking");

            match hook.on_break(&event) {
                Ok(StepCommand::Quit) => {
                    info!(line = event.line, "Quit requested");
                    self.stop();
                    return Ok(RunOutcome::Stopped);
                }
                Ok(command) => {
                    self.command = command;
                    self.step_depth = match command {
                        StepCommand::Next | StepCommand::FunctionExit => Some(event.depth),
                        _ => None,
                    };
                }
                Err(err) if is_stop_signal(&err) => {
                    info!(line = event.line, reason = %err, "Stop signal received");
                    self.stop();
                    return Ok(RunOutcome::Stopped);
                }
                Err(err) => return Err(err),
            }
        }

        Ok(if self.active {
            RunOutcome::Finished
        } else {
            RunOutcome::Stopped
        })
    }

    fn should_break(&mut self, event: &FrameEvent) -> bool {
        if self.breakpoints.contains(&event.line) {
            return true;
        }

        match self.command {
            StepCommand::Continue | StepCommand::Quit => false,
            StepCommand::StepInto => true,
            StepCommand::Next => self.step_depth.is_none_or(|depth| event.depth <= depth),
            StepCommand::FunctionExit => match self.step_depth {
                Some(depth) => event.depth < depth,
                None => {
                    self.step_depth = Some(event.depth);
                    false
                }
            },
        }
    }

    fn stop(&mut self) {
        self.active = false;
        self.command = StepCommand::Quit;
        self.step_depth = None;
    }
}
