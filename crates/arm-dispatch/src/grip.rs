//! Held-block gating for gripper commands

use serial_link::WireCommand;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GripState {
    Empty,
    Holding,
}

/// Tracks whether the gripper holds a block and gates the gripper
/// commands against that state: a pick while holding and a place while
/// empty are no-ops, never sent. Joint jogs pass through untouched.
#[derive(Debug)]
pub struct GripTracker {
    state: GripState,
}

impl GripTracker {
    pub fn new() -> Self {
        Self {
            state: GripState::Empty,
        }
    }

    pub fn state(&self) -> GripState {
        self.state
    }

    /// Check one command against the held-block state. `Ok` advances the
    /// state and means "send it"; `Err` carries the no-op reason and
    /// leaves the state unchanged.
    pub fn advance(&mut self, cmd: WireCommand) -> Result<(), &'static str> {
        match cmd {
            WireCommand::PickUp => match self.state {
                GripState::Empty => {
                    self.state = GripState::Holding;
                    Ok(())
                }
                GripState::Holding => Err("already holding a block"),
            },
            WireCommand::PutDown => match self.state {
                GripState::Holding => {
                    self.state = GripState::Empty;
                    Ok(())
                }
                GripState::Empty => Err("no block to put down"),
            },
            _ => Ok(()),
        }
    }
}

impl Default for GripTracker {
    fn default() -> Self {
        Self::new()
    }
}
