//! arm-dispatch: from classified command to execution result
//!
//! The dispatcher rejects DECLINE commands locally and routes PICK/SORT
//! to whichever executor is active (the hardware serial link or an
//! in-memory simulation), normalizing both into one result shape so the
//! upstream text/voice loop never cares whether an arm is plugged in.

mod result;
pub use result::ExecutionResult;

mod executor;
pub use executor::Executor;

mod grip;
pub use grip::{GripState, GripTracker};

mod link_exec;
pub use link_exec::LinkExecutor;

mod sim;
pub use sim::SimExecutor;

mod dispatcher;
pub use dispatcher::Dispatcher;

use command_lexicon::Action;
use serial_link::WireCommand;

/// Wire sequence for a routed action. PICK and SORT are not decomposed
/// into object-specific paths here, since those need target coordinates
/// from the vision side; this is the fixed arm-side portion.
pub(crate) fn wire_sequence(action: Action) -> &'static [WireCommand] {
    match action {
        Action::Pick => &[WireCommand::PickUp],
        Action::Sort => &[WireCommand::PickUp, WireCommand::PutDown],
        Action::Decline => &[],
    }
}
