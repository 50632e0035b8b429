//! Event reducer: lifecycle events to controller state.

use crate::driver::config::LinkState;
use crate::driver::eth::W5500Eth;
use crate::hal::EthHal;
use crate::net::stack::NetStack;

use super::{ConnectivityFlag, EventQueue};

/// Ethernet lifecycle event as delivered by the platform.
///
/// Anything else the platform emits is not meaningful for link
/// supervision and should be discarded at the dispatch site, before
/// it reaches the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkEvent {
    /// Driver started.
    Started,
    /// Physical link came up.
    Connected,
    /// Interface acquired an IP address.
    GotIp,
    /// Physical link went down.
    Disconnected,
    /// Driver stopped.
    Stopped,
}

/// Reduces [`LinkEvent`]s into facade state and the connectivity flag.
///
/// `Started` assigns the configured hostname; `Connected` records link
/// up; `GotIp` marks connectivity (idempotently, so a DHCP renewal
/// delivering a second `GotIp` changes nothing); `Disconnected` and
/// `Stopped` record link down and clear connectivity.
pub struct Supervisor<'a> {
    flag: &'a ConnectivityFlag,
}

impl<'a> Supervisor<'a> {
    /// Supervisor updating the given connectivity flag.
    pub const fn new(flag: &'a ConnectivityFlag) -> Self {
        Self { flag }
    }

    /// Apply one event. Returns whether the connectivity flag changed.
    pub fn handle<H: EthHal, S: NetStack>(
        &self,
        event: LinkEvent,
        eth: &mut W5500Eth<H, S>,
    ) -> bool {
        match event {
            LinkEvent::Started => {
                // Hostname must land before the DHCP exchange; a stack
                // rejection is logged, not fatal.
                if eth.assign_hostname().is_err() {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("hostname rejected by stack");
                }
                false
            }
            LinkEvent::Connected => {
                eth.note_link(LinkState::Up);
                #[cfg(feature = "defmt")]
                defmt::info!("ethernet link up");
                false
            }
            LinkEvent::GotIp => {
                let already = self.flag.set(true);
                if !already {
                    #[cfg(feature = "defmt")]
                    defmt::info!(
                        "ethernet connected: {} {=[u8; 4]} {} {=u32} Mbps",
                        eth.mac(),
                        eth.local_ip().octets(),
                        eth.duplex(),
                        eth.link_speed().map_or(0, |s| s.mbps()),
                    );
                }
                !already
            }
            LinkEvent::Disconnected => {
                eth.note_link(LinkState::Down);
                #[cfg(feature = "defmt")]
                defmt::info!("ethernet link down");
                self.flag.set(false)
            }
            LinkEvent::Stopped => {
                eth.note_link(LinkState::Down);
                eth.note_stopped();
                #[cfg(feature = "defmt")]
                defmt::info!("ethernet stopped");
                self.flag.set(false)
            }
        }
    }

    /// Drain the queue through [`handle`](Self::handle).
    ///
    /// Returns the number of events applied.
    pub fn drain<const N: usize, H: EthHal, S: NetStack>(
        &self,
        queue: &EventQueue<N>,
        eth: &mut W5500Eth<H, S>,
    ) -> usize {
        let mut applied = 0;
        while let Some(event) = queue.pop() {
            self.handle(event, eth);
            applied += 1;
        }
        applied
    }
}
