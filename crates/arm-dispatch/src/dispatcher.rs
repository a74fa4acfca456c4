//! Routing: DECLINE stops here, PICK/SORT go to the active executor

use crate::{ExecutionResult, Executor};
use command_lexicon::{Action, Command};

/// Owns the active executor and applies the one routing rule that is
/// backend-independent: DECLINE is reported locally and never reaches an
/// executor, so a refused request can never move the arm.
pub struct Dispatcher {
    executor: Box<dyn Executor>,
}

impl Dispatcher {
    pub fn new(executor: Box<dyn Executor>) -> Self {
        Self { executor }
    }

    pub fn backend(&self) -> &'static str {
        self.executor.name()
    }

    pub fn dispatch(&mut self, command: &Command) -> ExecutionResult {
        match command.action {
            Action::Decline => {
                tracing::info!(reasoning = %command.reasoning, "declining request");
                ExecutionResult::fail(format!("request declined: {}", command.reasoning))
            }
            Action::Pick | Action::Sort => {
                tracing::info!(
                    action = command.action.as_str(),
                    backend = self.executor.name(),
                    "dispatching command"
                );
                self.executor.execute(command)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LinkExecutor, SimExecutor};
    use command_lexicon::classify;
    use serial_link::{Commander, LinkConfig, MockLink};
    use std::sync::mpsc;

    #[test]
    fn decline_never_touches_the_link() {
        // A mock with an empty script: any send would read a timeout,
        // but the stronger check is on the transmit side.
        let (tx, rx) = mpsc::channel();
        struct Probe(mpsc::Sender<String>);
        impl Executor for Probe {
            fn name(&self) -> &'static str {
                "probe"
            }
            fn execute(&mut self, command: &Command) -> ExecutionResult {
                let _ = self.0.send(command.reasoning.clone());
                ExecutionResult::ok("reached")
            }
        }
        let mut dispatcher = Dispatcher::new(Box::new(Probe(tx)));
        let result = dispatcher.dispatch(&classify("dance for me"));
        assert!(!result.success);
        assert!(result.message.contains("declined"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn decline_writes_nothing_even_inside_a_link_executor() {
        // Second line of defense below the dispatcher: a DECLINE maps to
        // an empty wire sequence, so nothing hits the port.
        let link = MockLink::new();
        let config = LinkConfig {
            settle_delay_ms: 0,
            ..LinkConfig::default()
        };
        let mut exec = LinkExecutor::new(Commander::new(link, config));
        exec.execute(&classify("throw the blocks"));
        assert!(exec.commander().link().sent_lines().is_empty());
    }

    #[test]
    fn pick_routes_to_the_simulator() {
        let mut dispatcher = Dispatcher::new(Box::new(SimExecutor::new()));
        let result = dispatcher.dispatch(&classify("grab three green blocks"));
        assert!(result.success);
        assert_eq!(result.data.unwrap()["backend"], "sim");
    }

    #[test]
    fn sort_routes_to_the_simulator() {
        let mut dispatcher = Dispatcher::new(Box::new(SimExecutor::new()));
        let result = dispatcher.dispatch(&classify("organize everything by color"));
        assert!(result.success);
    }
}
