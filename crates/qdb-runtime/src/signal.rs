use std::error::Error;

use thiserror::Error;

/// The runtime's native request to stop debugging.
///
/// Raising it from a [`TraceHook`](crate::TraceHook), directly or as the source of
/// another error, deactivates the stepper and ends the run.
#[derive(Error, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[error("debugging stopped")]
pub struct StopDebugging;

/// Returns `true` if `err`, or any error in its `source()` chain, is [`StopDebugging`].
pub fn is_stop_signal(err: &(dyn Error + 'static)) -> bool {
    let mut current = Some(err);

    while let Some(err) = current {
        if err.is::<StopDebugging>() {
            return true;
        }
        current = err.source();
    }

    false
}
