//! Recording `CommandRunner` double shared by unit tests.

use crate::core::error::Result;
use crate::core::{CapturedOutput, CommandRunner, CommandSpec};
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Capture,
    Interactive,
}

type CaptureHook = Box<dyn Fn(&CommandSpec)>;

#[derive(Default)]
pub struct FakeRunner {
    calls: RefCell<Vec<(CallKind, CommandSpec)>>,
    capture_results: RefCell<VecDeque<Result<CapturedOutput>>>,
    interactive_results: RefCell<VecDeque<Result<i32>>>,
    on_capture: Option<CaptureHook>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `hook` on every captured command, before its result is returned.
    pub fn with_capture_hook(hook: impl Fn(&CommandSpec) + 'static) -> Self {
        Self {
            on_capture: Some(Box::new(hook)),
            ..Self::default()
        }
    }

    pub fn push_capture(&self, result: Result<CapturedOutput>) {
        self.capture_results.borrow_mut().push_back(result);
    }

    pub fn push_interactive(&self, result: Result<i32>) {
        self.interactive_results.borrow_mut().push_back(result);
    }

    pub fn calls(&self) -> Vec<(CallKind, CommandSpec)> {
        self.calls.borrow().clone()
    }

    pub fn calls_of(&self, kind: CallKind) -> Vec<CommandSpec> {
        self.calls
            .borrow()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, spec)| spec.clone())
            .collect()
    }
}

impl CommandRunner for FakeRunner {
    async fn capture(&self, spec: &CommandSpec) -> Result<CapturedOutput> {
        spec.validate()?;
        self.calls
            .borrow_mut()
            .push((CallKind::Capture, spec.clone()));
        if let Some(hook) = &self.on_capture {
            hook(spec);
        }
        self.capture_results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(CapturedOutput::default()))
    }

    async fn interactive(&self, spec: &CommandSpec) -> Result<i32> {
        spec.validate()?;
        self.calls
            .borrow_mut()
            .push((CallKind::Interactive, spec.clone()));
        self.interactive_results
            .borrow_mut()
            .pop_front()
            .unwrap_or(Ok(0))
    }
}
