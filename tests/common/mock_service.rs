//! Mock endpoint and generator for testing
//!
//! Records every task they receive for verification.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use student_helper::error::{HelperError, HelperResult};
use student_helper::heuristics::HeuristicGenerator;
use student_helper::services::TextService;
use student_helper::task::TextTask;

/// Mock remote service that records inputs and answers with a fixed reply
#[derive(Debug)]
pub struct MockService {
    name: String,
    reply: String,
    /// Inputs of every task this service was invoked with
    pub calls: Arc<Mutex<Vec<String>>>,
    /// Simulate failure on every call
    pub should_fail: Arc<Mutex<bool>>,
}

impl MockService {
    pub fn new(name: &str, reply: &str) -> Self {
        Self {
            name: name.to_string(),
            reply: reply.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            should_fail: Arc::new(Mutex::new(false)),
        }
    }

    pub fn failing(name: &str) -> Self {
        let mock = Self::new(name, "");
        *mock.should_fail.lock().unwrap() = true;
        mock
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl TextService for MockService {
    fn name(&self) -> &str {
        &self.name
    }

    async fn invoke(&self, task: &TextTask) -> HelperResult<String> {
        self.calls.lock().unwrap().push(task.input.clone());
        if *self.should_fail.lock().unwrap() {
            return Err(HelperError::Status {
                endpoint: self.name.clone(),
                status: 503,
            });
        }
        Ok(self.reply.clone())
    }
}

/// Local generator that counts how often it was asked
#[derive(Debug, Default)]
pub struct CountingGenerator {
    pub calls: Arc<Mutex<usize>>,
}

impl CountingGenerator {
    pub fn count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl HeuristicGenerator for CountingGenerator {
    fn generate(&self, task: &TextTask) -> String {
        *self.calls.lock().unwrap() += 1;
        format!("local answer for {}", task.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use student_helper::task::TaskKind;

    #[tokio::test]
    async fn test_mock_service_records_calls() {
        let mock = MockService::new("Mock", "ok");
        let task = TextTask::new(TaskKind::Grammar, "hello");
        assert_eq!(mock.invoke(&task).await.unwrap(), "ok");
        assert_eq!(mock.call_count(), 1);

        *mock.should_fail.lock().unwrap() = true;
        assert!(mock.invoke(&task).await.is_err());
        assert_eq!(mock.call_count(), 2);
    }
}
