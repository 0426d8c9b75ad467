//! Scripted command executor for tests

use std::cell::RefCell;
use std::collections::VecDeque;

use super::{CommandExecutor, Invocation, ProcessResult};
use crate::error::Result;

/// Returns queued results in order and records every invocation it receives.
#[derive(Default)]
pub struct StubExecutor {
    results: RefCell<VecDeque<Result<ProcessResult>>>,
    calls: RefCell<Vec<Invocation>>,
}

impl StubExecutor {
    pub fn new(results: Vec<Result<ProcessResult>>) -> Self {
        Self {
            results: RefCell::new(results.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Stub whose every queued call exits with the given codes
    pub fn exiting(codes: &[i32]) -> Self {
        Self::new(
            codes
                .iter()
                .map(|code| {
                    Ok(ProcessResult {
                        exit_code: Some(*code),
                        ..ProcessResult::default()
                    })
                })
                .collect(),
        )
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }
}

impl CommandExecutor for StubExecutor {
    fn execute(&self, invocation: &Invocation) -> Result<ProcessResult> {
        self.calls.borrow_mut().push(invocation.clone());
        self.results
            .borrow_mut()
            .pop_front()
            .expect("unexpected command invocation")
    }
}
