use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use coresweep_engine::CommandExecutor;
use coresweep_types::{ExecutionError, InteractiveRule};

/// Command executor fake with canned per-command responses.
///
/// Commands without a scripted response fail with a transport error, so a
/// freshly constructed executor behaves like an unreachable device. Every
/// invocation is recorded for assertions.
#[derive(Default)]
pub struct ScriptedExecutor {
    responses: HashMap<String, Result<String, ExecutionError>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, command: impl Into<String>, output: impl Into<String>) -> Self {
        self.responses.insert(command.into(), Ok(output.into()));
        self
    }

    pub fn with_failure(mut self, command: impl Into<String>, error: ExecutionError) -> Self {
        self.responses.insert(command.into(), Err(error));
        self
    }

    /// Commands executed so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandExecutor for ScriptedExecutor {
    fn execute(
        &self,
        command: &str,
        _timeout: Duration,
        _reply_rules: &[InteractiveRule],
    ) -> Result<String, ExecutionError> {
        self.calls.lock().unwrap().push(command.to_string());
        match self.responses.get(command) {
            Some(response) => response.clone(),
            None => Err(ExecutionError::Transport {
                command: command.to_string(),
                detail: "no scripted response".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscripted_command_fails() {
        let executor = ScriptedExecutor::new();
        let result = executor.execute("dir disk0:", Duration::from_secs(1), &[]);
        assert!(matches!(result, Err(ExecutionError::Transport { .. })));
    }

    #[test]
    fn test_calls_are_recorded_in_order() {
        let executor = ScriptedExecutor::new()
            .with_output("show version", "Version 7.3.2")
            .with_output("show logging", "clean");

        executor
            .execute("show version", Duration::from_secs(1), &[])
            .unwrap();
        executor
            .execute("show logging", Duration::from_secs(1), &[])
            .unwrap();
        assert_eq!(executor.calls(), vec!["show version", "show logging"]);
    }
}
