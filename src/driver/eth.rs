//! W5500 Ethernet controller facade
//!
//! [`W5500Eth`] owns the installed driver handle and the interface
//! lifecycle state, and exposes the three things application code
//! needs: bring-up ([`begin`](W5500Eth::begin) /
//! [`teardown`](W5500Eth::teardown)), addressing mode
//! ([`config`](W5500Eth::config)), and the read-only query surface.
//!
//! Queries never fail: when the stack has no answer yet (interface not
//! started, DHCP pending, IPv6 not enabled, DNS slot unset) they return
//! a documented zero/`None` sentinel that callers must treat as
//! "unknown", not as a valid address.

use core::fmt;
use core::net::{Ipv4Addr, Ipv6Addr};

use embedded_hal::delay::DelayNs;

use super::config::{Duplex, EthConfig, LinkState, Speed, SpiHost, State};
use super::error::{ConfigError, Error, Result};
use super::{factory, spi};
use crate::hal::EthHal;
use crate::net::addr;
use crate::net::stack::{IpInfo, NetStack};

// =============================================================================
// MAC Address Display
// =============================================================================

/// Hardware address wrapper with colon-separated hex formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MacAddr(pub [u8; 6]);

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.0;
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            m[0], m[1], m[2], m[3], m[4], m[5]
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MacAddr {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=[u8; 6]:x}", self.0);
    }
}

// =============================================================================
// Facade
// =============================================================================

/// W5500 Ethernet controller: bring-up, addressing, and queries.
///
/// One instance per physical controller. The instance owns its platform
/// handles; construct it once and pass it by reference to collaborators
/// (the event supervisor reads and updates it when lifecycle events
/// arrive).
pub struct W5500Eth<H: EthHal, S: NetStack> {
    hal: H,
    stack: S,
    driver: Option<H::Driver>,
    host: SpiHost,
    hostname: &'static str,
    state: State,
    static_ip: bool,
    link: LinkState,
}

impl<H: EthHal, S: NetStack> W5500Eth<H, S> {
    /// Create a facade over the platform HAL and IP stack adapters.
    ///
    /// No hardware is touched until [`begin`](W5500Eth::begin).
    pub const fn new(hal: H, stack: S) -> Self {
        Self {
            hal,
            stack,
            driver: None,
            host: SpiHost::Spi3,
            hostname: super::config::DEFAULT_HOSTNAME,
            state: State::Uninitialized,
            static_ip: false,
            link: LinkState::Down,
        }
    }

    // =========================================================================
    // Bring-Up / Teardown
    // =========================================================================

    /// Bring up the controller: SPI device, MAC/PHY/driver, netif
    /// attach, start, settling delay.
    ///
    /// Not reentrant; a second call without an intervening
    /// [`teardown`](W5500Eth::teardown) fails with `AlreadyInitialized`.
    /// Every failure unwinds the resources acquired up to that stage,
    /// so a failed `begin` may be retried wholesale.
    ///
    /// # Errors
    ///
    /// - `ConfigError::ClockOutOfRange` before any SPI traffic when the
    ///   clock is outside 14..=20 MHz
    /// - a distinct [`SpiError`](crate::SpiError) or
    ///   [`BringUpError`](crate::BringUpError) per failing stage
    pub fn begin<D: DelayNs>(&mut self, config: &EthConfig, delay: &mut D) -> Result<()> {
        if self.state != State::Uninitialized {
            return Err(ConfigError::AlreadyInitialized.into());
        }

        // Reject an out-of-range clock before the bus sees anything.
        config.validate()?;

        let device = spi::acquire_device(&mut self.hal, config)?;

        let (mut driver, _addr) = match factory::install_driver(&mut self.hal, device, config) {
            Ok(ok) => ok,
            Err(e) => {
                self.hal.bus_free(config.host);
                return Err(e.into());
            }
        };

        if let Err(e) = self.hal.attach_netif(&mut driver) {
            self.hal.uninstall(driver);
            self.hal.bus_free(config.host);
            return Err(e.into());
        }

        self.state = State::Initialized;

        if let Err(e) = self.hal.start(&mut driver) {
            self.hal.uninstall(driver);
            self.hal.bus_free(config.host);
            self.state = State::Uninitialized;
            return Err(e.into());
        }

        self.driver = Some(driver);
        self.host = config.host;
        self.hostname = config.hostname;
        self.state = State::Running;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "W5500 up on {}, {} MHz SPI",
            self.hostname,
            config.clock_mhz
        );

        // Let the DHCP client reach a stable state before returning.
        delay.delay_ms(config.settle_delay_ms);

        Ok(())
    }

    /// Tear down everything `begin` acquired: stop the driver,
    /// uninstall it (releasing MAC, PHY and the SPI device
    /// registration), free the bus.
    ///
    /// After teardown the instance is back in `Uninitialized` and
    /// `begin` may run again.
    pub fn teardown(&mut self) {
        if let Some(mut driver) = self.driver.take() {
            if self.state == State::Running {
                let _ = self.hal.stop(&mut driver);
            }
            self.hal.uninstall(driver);
            self.hal.bus_free(self.host);
        }
        self.state = State::Uninitialized;
        self.link = LinkState::Down;
        self.static_ip = false;
    }

    // =========================================================================
    // Addressing
    // =========================================================================

    /// Select static or DHCP addressing.
    ///
    /// An unspecified `local_ip` clears any static assignment and
    /// starts the DHCP client; any other address stops DHCP and
    /// installs the static triple. Afterwards any non-zero DNS address
    /// is installed into slots 0/1 regardless of the addressing mode.
    ///
    /// A stack answering "already stopped/started" for the DHCP
    /// transition is in the target state and is not an error. On a real
    /// rejection the pre-existing network state is left unchanged.
    pub fn config(
        &mut self,
        local_ip: Ipv4Addr,
        gateway: Ipv4Addr,
        subnet: Ipv4Addr,
        dns1: Ipv4Addr,
        dns2: Ipv4Addr,
    ) -> Result<()> {
        let use_static = !local_ip.is_unspecified();
        let info = if use_static {
            IpInfo::new(local_ip, gateway, subnet)
        } else {
            IpInfo::UNSET
        };

        // DHCP must not be running while the address info changes.
        self.stack.dhcp_stop().map_err(Error::Net)?;
        self.stack.set_ip_info(&info).map_err(Error::Net)?;

        if use_static {
            self.static_ip = true;
        } else {
            self.stack.dhcp_start().map_err(Error::Net)?;
            self.static_ip = false;
        }

        if !dns1.is_unspecified() {
            self.stack.set_dns(0, dns1);
        }
        if !dns2.is_unspecified() {
            self.stack.set_dns(1, dns2);
        }

        Ok(())
    }

    // =========================================================================
    // Query Surface
    // =========================================================================

    /// Interface address, or the unspecified sentinel before one exists.
    pub fn local_ip(&self) -> Ipv4Addr {
        self.stack
            .ip_info()
            .map_or(Ipv4Addr::UNSPECIFIED, |info| info.ip)
    }

    /// Subnet mask, or the unspecified sentinel.
    pub fn subnet_mask(&self) -> Ipv4Addr {
        self.stack
            .ip_info()
            .map_or(Ipv4Addr::UNSPECIFIED, |info| info.netmask)
    }

    /// Default gateway, or the unspecified sentinel.
    pub fn gateway_ip(&self) -> Ipv4Addr {
        self.stack
            .ip_info()
            .map_or(Ipv4Addr::UNSPECIFIED, |info| info.gateway)
    }

    /// DNS server in slot 0 or 1; unspecified when the slot is unset.
    pub fn dns_ip(&self, slot: u8) -> Ipv4Addr {
        self.stack.dns(slot)
    }

    /// Directed broadcast address derived from gateway and netmask.
    pub fn broadcast_ip(&self) -> Ipv4Addr {
        self.stack.ip_info().map_or(Ipv4Addr::UNSPECIFIED, |info| {
            addr::broadcast(info.gateway, info.netmask)
        })
    }

    /// Network identifier derived from gateway and netmask.
    pub fn network_id(&self) -> Ipv4Addr {
        self.stack.ip_info().map_or(Ipv4Addr::UNSPECIFIED, |info| {
            addr::network_id(info.gateway, info.netmask)
        })
    }

    /// CIDR prefix length of the netmask; `0` when unknown.
    pub fn subnet_cidr(&self) -> u8 {
        self.stack
            .ip_info()
            .map_or(0, |info| addr::subnet_cidr(info.netmask))
    }

    /// Hostname currently assigned to the interface.
    pub fn hostname(&self) -> Option<&str> {
        self.stack.hostname()
    }

    /// Assign the interface hostname.
    pub fn set_hostname(&mut self, hostname: &str) -> Result<()> {
        self.stack.set_hostname(hostname).map_err(Error::Net)
    }

    /// Hardware address, or all zeros before bring-up.
    pub fn mac_address(&self) -> [u8; 6] {
        self.driver
            .as_ref()
            .map_or([0; 6], |driver| self.hal.mac_address(driver))
    }

    /// Hardware address as a displayable wrapper.
    pub fn mac(&self) -> MacAddr {
        MacAddr(self.mac_address())
    }

    /// Physical link state as last reported by the event stream.
    pub fn link_state(&self) -> LinkState {
        self.link
    }

    /// Whether the physical link is up.
    pub fn link_up(&self) -> bool {
        self.link == LinkState::Up
    }

    /// Negotiated link speed; `None` before bring-up.
    pub fn link_speed(&self) -> Option<Speed> {
        self.driver
            .as_ref()
            .map(|driver| self.hal.link_speed(driver))
    }

    /// Duplex mode; `None` before bring-up.
    pub fn duplex(&self) -> Option<Duplex> {
        self.driver.as_ref().map(|driver| self.hal.duplex(driver))
    }

    /// Whether the link runs full duplex.
    pub fn full_duplex(&self) -> bool {
        self.duplex() == Some(Duplex::Full)
    }

    /// Create the IPv6 link-local address for the interface.
    pub fn enable_ipv6(&mut self) -> Result<()> {
        self.stack.enable_ipv6().map_err(Error::Net)
    }

    /// IPv6 link-local address; `None` until enabled and assigned.
    pub fn local_ipv6(&self) -> Option<Ipv6Addr> {
        self.stack.ipv6_link_local()
    }

    /// Lifecycle state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Whether the driver has been started.
    pub fn is_started(&self) -> bool {
        self.state == State::Running
    }

    /// Whether a static address assignment is in use.
    pub fn static_ip_in_use(&self) -> bool {
        self.static_ip
    }

    /// Borrow the IP stack adapter.
    pub fn stack(&self) -> &S {
        &self.stack
    }

    /// Mutably borrow the IP stack adapter.
    pub fn stack_mut(&mut self) -> &mut S {
        &mut self.stack
    }

    /// Borrow the platform HAL.
    pub fn hal(&self) -> &H {
        &self.hal
    }

    // =========================================================================
    // Supervisor Hooks
    // =========================================================================

    /// Record the link state reported by a lifecycle event.
    pub(crate) fn note_link(&mut self, link: LinkState) {
        self.link = link;
    }

    /// Record that the driver stopped (the `Stopped` event action).
    ///
    /// Resources stay held; only [`teardown`](Self::teardown) releases
    /// them.
    pub(crate) fn note_stopped(&mut self) {
        if self.state == State::Running {
            self.state = State::Stopped;
        }
    }

    /// Assign the configured hostname (the `Started` event action).
    pub(crate) fn assign_hostname(&mut self) -> Result<()> {
        let hostname = self.hostname;
        self.set_hostname(hostname)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
