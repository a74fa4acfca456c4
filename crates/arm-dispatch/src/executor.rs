use crate::ExecutionResult;
use command_lexicon::Command;

/// An executor carries a PICK or SORT command out. The dispatcher never
/// hands one a DECLINE.
pub trait Executor {
    /// Short backend name for logs and results ("hardware", "sim").
    fn name(&self) -> &'static str;

    fn execute(&mut self, command: &Command) -> ExecutionResult;
}
