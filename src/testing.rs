//! In-memory HAL and stack doubles for host-side tests.
//!
//! [`MockHal`] records every platform call in order and tracks live
//! handle counts, so tests can assert both sequencing and the absence
//! of leaks on failure paths. Each `fail_*` flag makes exactly one
//! stage fail, which is how the per-stage unwinding contracts are
//! exercised.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use std::string::{String, ToString};
use std::vec::Vec;

use core::net::{Ipv4Addr, Ipv6Addr};

use embedded_hal::delay::DelayNs;

use crate::driver::config::{Duplex, Speed, SpiHost, SpiPins};
use crate::driver::error::{BringUpError, BringUpResult, NetError, NetResult, SpiError, SpiResult};
use crate::driver::spi::SpiDeviceConfig;
use crate::hal::{EthHal, MacConfig, PhyConfig, SpiHal};
use crate::net::stack::{DhcpChange, IpInfo, NetStack};

/// One recorded platform call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    InstallIsr,
    BusInit,
    AddDevice,
    BusFree,
    NewMac,
    NewPhy,
    ReleaseMac,
    ReleasePhy,
    Install,
    Uninstall,
    SetBaseMac,
    SetMacAddr,
    Attach,
    Start,
    Stop,
}

/// Recording fake of the platform SPI + Ethernet HAL.
///
/// Handles are opaque `u32` tokens. The `live_*` counters follow the
/// ownership contracts on [`EthHal`]: a token acquired and never
/// released shows up as a nonzero count at the end of a test.
pub struct MockHal {
    pub ops: Vec<Op>,
    pub isr_installs: u32,
    pub fail_bus_init: bool,
    pub fail_add_device: bool,
    pub fail_mac: bool,
    pub fail_phy: bool,
    pub fail_install: bool,
    pub fail_set_mac: bool,
    pub fail_base_mac: bool,
    pub fail_attach: bool,
    pub fail_start: bool,
    pub factory_mac: Option<[u8; 6]>,
    pub driver_mac: [u8; 6],
    pub base_mac: Option<[u8; 6]>,
    pub speed: Speed,
    pub duplex: Duplex,
    pub live_devices: u32,
    pub live_macs: u32,
    pub live_phys: u32,
    pub live_drivers: u32,
    pub next_token: u32,
}

impl MockHal {
    /// Healthy HAL: every stage succeeds, a factory MAC is available.
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            isr_installs: 0,
            fail_bus_init: false,
            fail_add_device: false,
            fail_mac: false,
            fail_phy: false,
            fail_install: false,
            fail_set_mac: false,
            fail_base_mac: false,
            fail_attach: false,
            fail_start: false,
            factory_mac: Some([0x24, 0x0B, 0x2A, 0x01, 0x02, 0x03]),
            driver_mac: [0; 6],
            base_mac: None,
            speed: Speed::Mbps100,
            duplex: Duplex::Full,
            live_devices: 0,
            live_macs: 0,
            live_phys: 0,
            live_drivers: 0,
            next_token: 1,
        }
    }

    fn token(&mut self) -> u32 {
        let t = self.next_token;
        self.next_token += 1;
        t
    }

    /// Hand out a device token directly, bypassing the SPI stages.
    pub fn make_device(&mut self) -> u32 {
        self.live_devices += 1;
        self.token()
    }
}

impl Default for MockHal {
    fn default() -> Self {
        Self::new()
    }
}

impl SpiHal for MockHal {
    type Device = u32;

    fn install_interrupt_service(&mut self) -> SpiResult<()> {
        self.ops.push(Op::InstallIsr);
        // Idempotent: repeated installation is always fine.
        self.isr_installs += 1;
        Ok(())
    }

    fn bus_initialize(&mut self, _host: SpiHost, _pins: &SpiPins) -> SpiResult<()> {
        self.ops.push(Op::BusInit);
        if self.fail_bus_init {
            return Err(SpiError::BusInitFailed);
        }
        Ok(())
    }

    fn bus_add_device(
        &mut self,
        _host: SpiHost,
        _config: &SpiDeviceConfig,
    ) -> SpiResult<Self::Device> {
        self.ops.push(Op::AddDevice);
        if self.fail_add_device {
            return Err(SpiError::DeviceAttachFailed);
        }
        self.live_devices += 1;
        Ok(self.token())
    }

    fn bus_free(&mut self, _host: SpiHost) {
        self.ops.push(Op::BusFree);
    }
}

impl EthHal for MockHal {
    type Mac = u32;
    type Phy = u32;
    type Driver = u32;

    fn new_mac(&mut self, _device: u32, _config: &MacConfig) -> BringUpResult<u32> {
        self.ops.push(Op::NewMac);
        if self.fail_mac {
            // Contract: a failed construction releases the device.
            self.live_devices -= 1;
            return Err(BringUpError::MacInitFailed);
        }
        self.live_macs += 1;
        Ok(self.token())
    }

    fn new_phy(&mut self, _config: &PhyConfig) -> BringUpResult<u32> {
        self.ops.push(Op::NewPhy);
        if self.fail_phy {
            return Err(BringUpError::PhyInitFailed);
        }
        self.live_phys += 1;
        Ok(self.token())
    }

    fn release_mac(&mut self, _mac: u32) {
        self.ops.push(Op::ReleaseMac);
        self.live_macs -= 1;
        // The MAC owns the device registration.
        self.live_devices -= 1;
    }

    fn release_phy(&mut self, _phy: u32) {
        self.ops.push(Op::ReleasePhy);
        self.live_phys -= 1;
    }

    fn install(&mut self, _mac: u32, _phy: u32) -> BringUpResult<u32> {
        self.ops.push(Op::Install);
        if self.fail_install {
            // Contract: a failed install releases both handles.
            self.live_macs -= 1;
            self.live_phys -= 1;
            self.live_devices -= 1;
            return Err(BringUpError::DriverInstallFailed);
        }
        self.live_drivers += 1;
        Ok(self.token())
    }

    fn uninstall(&mut self, _driver: u32) {
        self.ops.push(Op::Uninstall);
        self.live_drivers -= 1;
        self.live_macs -= 1;
        self.live_phys -= 1;
        self.live_devices -= 1;
    }

    fn factory_mac(&mut self) -> Option<[u8; 6]> {
        self.factory_mac
    }

    fn set_base_mac(&mut self, mac: [u8; 6]) -> BringUpResult<()> {
        self.ops.push(Op::SetBaseMac);
        if self.fail_base_mac {
            return Err(BringUpError::MacAddressRejected);
        }
        self.base_mac = Some(mac);
        Ok(())
    }

    fn set_mac_address(&mut self, _driver: &mut u32, mac: [u8; 6]) -> BringUpResult<()> {
        self.ops.push(Op::SetMacAddr);
        if self.fail_set_mac {
            return Err(BringUpError::MacAddressRejected);
        }
        self.driver_mac = mac;
        Ok(())
    }

    fn attach_netif(&mut self, _driver: &mut u32) -> BringUpResult<()> {
        self.ops.push(Op::Attach);
        if self.fail_attach {
            return Err(BringUpError::AttachFailed);
        }
        Ok(())
    }

    fn start(&mut self, _driver: &mut u32) -> BringUpResult<()> {
        self.ops.push(Op::Start);
        if self.fail_start {
            return Err(BringUpError::StartFailed);
        }
        Ok(())
    }

    fn stop(&mut self, _driver: &mut u32) -> BringUpResult<()> {
        self.ops.push(Op::Stop);
        Ok(())
    }

    fn link_speed(&self, _driver: &u32) -> Speed {
        self.speed
    }

    fn duplex(&self, _driver: &u32) -> Duplex {
        self.duplex
    }

    fn mac_address(&self, _driver: &u32) -> [u8; 6] {
        self.driver_mac
    }
}

/// In-memory IP stack double.
pub struct MockStack {
    pub info: Option<IpInfo>,
    pub dhcp_running: bool,
    pub dns: [Ipv4Addr; 2],
    pub hostname: Option<String>,
    pub ipv6: Option<Ipv6Addr>,
    pub fail_set_info: bool,
    pub fail_dhcp_start: bool,
    pub fail_dhcp_stop: bool,
    pub fail_hostname: bool,
    pub fail_ipv6: bool,
}

impl MockStack {
    /// Fresh stack: no address, DHCP stopped, everything succeeds.
    pub fn new() -> Self {
        Self {
            info: None,
            dhcp_running: false,
            dns: [Ipv4Addr::UNSPECIFIED; 2],
            hostname: None,
            ipv6: None,
            fail_set_info: false,
            fail_dhcp_start: false,
            fail_dhcp_stop: false,
            fail_hostname: false,
            fail_ipv6: false,
        }
    }
}

impl Default for MockStack {
    fn default() -> Self {
        Self::new()
    }
}

impl NetStack for MockStack {
    fn ip_info(&self) -> Option<IpInfo> {
        self.info
    }

    fn set_ip_info(&mut self, info: &IpInfo) -> NetResult<()> {
        if self.fail_set_info {
            return Err(NetError::IpInfoRejected);
        }
        self.info = if *info == IpInfo::UNSET {
            None
        } else {
            Some(*info)
        };
        Ok(())
    }

    fn dhcp_start(&mut self) -> NetResult<DhcpChange> {
        if self.fail_dhcp_start {
            return Err(NetError::DhcpStartRejected);
        }
        if self.dhcp_running {
            return Ok(DhcpChange::AlreadyInState);
        }
        self.dhcp_running = true;
        Ok(DhcpChange::Changed)
    }

    fn dhcp_stop(&mut self) -> NetResult<DhcpChange> {
        if self.fail_dhcp_stop {
            return Err(NetError::DhcpStopRejected);
        }
        if !self.dhcp_running {
            return Ok(DhcpChange::AlreadyInState);
        }
        self.dhcp_running = false;
        Ok(DhcpChange::Changed)
    }

    fn set_dns(&mut self, slot: u8, addr: Ipv4Addr) {
        if let Some(entry) = self.dns.get_mut(slot as usize) {
            *entry = addr;
        }
    }

    fn dns(&self, slot: u8) -> Ipv4Addr {
        self.dns
            .get(slot as usize)
            .copied()
            .unwrap_or(Ipv4Addr::UNSPECIFIED)
    }

    fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }

    fn set_hostname(&mut self, hostname: &str) -> NetResult<()> {
        if self.fail_hostname {
            return Err(NetError::HostnameRejected);
        }
        self.hostname = Some(hostname.to_string());
        Ok(())
    }

    fn enable_ipv6(&mut self) -> NetResult<()> {
        if self.fail_ipv6 {
            return Err(NetError::Ipv6Unavailable);
        }
        self.ipv6 = Some(Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 1));
        Ok(())
    }

    fn ipv6_link_local(&self) -> Option<Ipv6Addr> {
        self.ipv6
    }
}

/// Delay double that records requested sleep time instead of sleeping.
pub struct NoopDelay {
    pub slept_ms: u32,
}

impl NoopDelay {
    pub fn new() -> Self {
        Self { slept_ms: 0 }
    }
}

impl Default for NoopDelay {
    fn default() -> Self {
        Self::new()
    }
}

impl DelayNs for NoopDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.slept_ms += ns / 1_000_000;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.slept_ms += ms;
    }
}
