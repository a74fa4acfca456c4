use crate::{LineLink, LinkConfig, LinkError, PortInfo, Result};
use std::collections::VecDeque;

enum Scripted {
    Line(String),
    Timeout,
    IoError(String),
}

/// A scripted in-process link. Records every sent line and replays the
/// enqueued replies in order; an empty script reads as a timeout.
#[derive(Default)]
pub struct MockLink {
    sent: Vec<String>,
    replies: VecDeque<Scripted>,
}

impl MockLink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue_reply(&mut self, line: &str) {
        self.replies.push_back(Scripted::Line(line.to_string()));
    }

    pub fn enqueue_timeout(&mut self) {
        self.replies.push_back(Scripted::Timeout);
    }

    pub fn enqueue_io_error(&mut self, message: &str) {
        self.replies.push_back(Scripted::IoError(message.to_string()));
    }

    /// Lines written so far, newline framing stripped.
    pub fn sent_lines(&self) -> &[String] {
        &self.sent
    }
}

impl LineLink for MockLink {
    fn open(_path: &str, _config: &LinkConfig) -> Result<Self> {
        Ok(Self::new())
    }

    fn list() -> Result<Vec<PortInfo>> {
        Ok(vec![PortInfo {
            name: "mock0".to_string(),
            description: "mock".to_string(),
        }])
    }

    fn send_line(&mut self, line: &str) -> Result<()> {
        self.sent.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self, _timeout_ms: Option<u64>) -> Result<String> {
        match self.replies.pop_front() {
            Some(Scripted::Line(line)) => Ok(line),
            Some(Scripted::Timeout) | None => Err(LinkError::Timeout),
            Some(Scripted::IoError(msg)) => Err(LinkError::Io(msg)),
        }
    }
}
