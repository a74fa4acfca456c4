//! Host-side command sender with acknowledgment policy

use crate::{codec, Ack, LineLink, LinkConfig, LinkError, Reply, Result, WireCommand};

/// Sends encoded commands over a [`LineLink`] and applies the reply
/// policy: `ERR` fails, `OK`/`READY`/anything-else succeeds, and a
/// timeout succeeds only under the lenient flag. A low-level I/O fault
/// marks the link closed; callers must reconnect before sending again.
pub struct Commander<L: LineLink> {
    link: L,
    config: LinkConfig,
    closed: bool,
}

impl<L: LineLink> Commander<L> {
    pub fn new(link: L, config: LinkConfig) -> Self {
        Self {
            link,
            config,
            closed: false,
        }
    }

    /// Open an endpoint and wait out the reset-on-connect settle delay
    /// before the first write.
    pub fn connect(path: &str, config: LinkConfig) -> Result<Self> {
        let link = L::open(path, &config)?;
        if config.settle_delay_ms > 0 {
            std::thread::sleep(std::time::Duration::from_millis(config.settle_delay_ms));
        }
        Ok(Self::new(link, config))
    }

    pub fn is_open(&self) -> bool {
        !self.closed
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    pub fn link(&self) -> &L {
        &self.link
    }

    /// Consume the device boot banner if one arrives within the timeout.
    pub fn wait_ready(&mut self, timeout_ms: u64) -> Result<()> {
        match self.link.read_line(Some(timeout_ms)) {
            Ok(line) if Reply::parse(&line) == Reply::Ready => Ok(()),
            Ok(line) => {
                tracing::warn!(%line, "expected READY banner");
                Ok(())
            }
            Err(LinkError::Timeout) => Err(LinkError::Timeout),
            Err(e) => {
                self.closed = true;
                Err(e)
            }
        }
    }

    /// Send one command and read its single-line acknowledgment.
    pub fn send(&mut self, cmd: WireCommand) -> Result<Ack> {
        if self.closed {
            return Err(LinkError::Closed);
        }
        let line = codec::encode(cmd);
        tracing::debug!(%line, "sending command");
        if let Err(e) = self.link.send_line(&line) {
            self.closed = true;
            return Err(e);
        }
        match self.link.read_line(Some(self.config.read_timeout_ms)) {
            Ok(reply_line) => match Reply::parse(&reply_line) {
                Reply::Ok | Reply::Ready => Ok(Ack::confirmed(reply_line.trim())),
                Reply::Err(reason) => Err(LinkError::Device(reason)),
                Reply::Unrecognized(other) => {
                    tracing::debug!(%other, "unrecognized reply, assuming success");
                    Ok(Ack::assumed(other))
                }
            },
            Err(LinkError::Timeout) if self.config.treat_timeout_as_success => {
                Ok(Ack::assumed("no reply within timeout"))
            }
            Err(LinkError::Timeout) => Err(LinkError::Timeout),
            Err(e) => {
                self.closed = true;
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockLink;

    fn commander(link: MockLink, lenient: bool) -> Commander<MockLink> {
        let config = LinkConfig {
            treat_timeout_as_success: lenient,
            settle_delay_ms: 0,
            ..LinkConfig::default()
        };
        Commander::new(link, config)
    }

    #[test]
    fn ok_reply_is_confirmed_success() {
        let mut link = MockLink::new();
        link.enqueue_reply("OK");
        let mut c = commander(link, true);
        let ack = c.send(WireCommand::MoveLeft).unwrap();
        assert!(!ack.assumed);
    }

    #[test]
    fn garbage_reply_is_assumed_success() {
        let mut link = MockLink::new();
        link.enqueue_reply("???noise###");
        let mut c = commander(link, true);
        let ack = c.send(WireCommand::Home).unwrap();
        assert!(ack.assumed);
    }

    #[test]
    fn err_reply_never_succeeds() {
        let mut link = MockLink::new();
        link.enqueue_reply("ERR: joint index out of range");
        let mut c = commander(link, true);
        match c.send(WireCommand::MoveUp) {
            Err(LinkError::Device(reason)) => {
                assert_eq!(reason, "joint index out of range");
            }
            other => panic!("expected device error, got {other:?}"),
        }
    }

    #[test]
    fn timeout_success_under_lenient_flag() {
        let mut link = MockLink::new();
        link.enqueue_timeout();
        let mut c = commander(link, true);
        let ack = c.send(WireCommand::Stop).unwrap();
        assert!(ack.assumed);
    }

    #[test]
    fn timeout_fails_under_strict_flag() {
        let mut link = MockLink::new();
        link.enqueue_timeout();
        let mut c = commander(link, false);
        assert!(matches!(c.send(WireCommand::Stop), Err(LinkError::Timeout)));
    }

    #[test]
    fn io_fault_closes_the_link() {
        let mut link = MockLink::new();
        link.enqueue_io_error("device unplugged");
        let mut c = commander(link, true);
        assert!(matches!(
            c.send(WireCommand::PickUp),
            Err(LinkError::Io(_))
        ));
        assert!(!c.is_open());
        // No transparent retry: further sends fail until reconnect.
        assert!(matches!(c.send(WireCommand::PickUp), Err(LinkError::Closed)));
    }

    #[test]
    fn every_outcome_is_ok_err_or_timeout() {
        // Round-trip property: the reply space collapses to exactly
        // {OK, ERR, timeout} regardless of what the device writes.
        for cmd in WireCommand::ALL {
            let mut link = MockLink::new();
            link.enqueue_reply("OK");
            link.enqueue_reply("ERR: nope");
            link.enqueue_timeout();
            let mut c = commander(link, false);
            assert!(c.send(cmd).is_ok());
            assert!(matches!(c.send(cmd), Err(LinkError::Device(_))));
            assert!(matches!(c.send(cmd), Err(LinkError::Timeout)));
        }
    }
}
