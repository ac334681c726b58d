//! Task polling utilities
//!
//! Helpers for collecting results of tokio tasks from the UI thread without
//! blocking a frame.

use futures::FutureExt;
use tokio::task::{JoinError, JoinHandle};

/// Take the result of a finished task, if it is finished.
///
/// Returns `None` while the task is still running.
fn take_if_finished<T>(handle: &mut JoinHandle<T>) -> Option<Result<T, JoinError>> {
    if !handle.is_finished() {
        return None;
    }
    let result = handle.now_or_never();
    if result.is_none() {
        // Shouldn't happen since we checked is_finished()
        tracing::warn!("Task not ready despite is_finished()");
    }
    result
}

/// Remove every finished task from `tasks` and return their results,
/// each paired with the tag it was spawned under.
///
/// Results come back in the order the tasks were spawned; unfinished tasks
/// stay in the list.
pub fn drain_finished<K: Copy, T>(tasks: &mut Vec<(K, JoinHandle<T>)>) -> Vec<(K, Result<T, JoinError>)> {
    let mut finished = Vec::new();
    tasks.retain_mut(|(tag, handle)| match take_if_finished(handle) {
        Some(result) => {
            finished.push((*tag, result));
            false
        }
        None => true,
    });
    finished
}
