//! Link lifecycle events and connectivity tracking.
//!
//! The platform delivers Ethernet lifecycle events (started, link up,
//! address acquired, link down, stopped) on its own event task. This
//! module turns that stream into application-visible state:
//!
//! - [`EventQueue`] buffers typed [`LinkEvent`]s from the dispatch
//!   context until the application drains them
//! - [`Supervisor`] reduces drained events into controller state and
//!   the connectivity flag
//! - [`ConnectivityFlag`] answers "do we have an address?" from any
//!   context and supports blocking (and, with the `async` feature,
//!   awaitable) waits

mod queue;
mod supervisor;

pub use queue::EventQueue;
pub use supervisor::{LinkEvent, Supervisor};

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::delay::DelayNs;

#[cfg(feature = "async")]
use crate::sync::AtomicWaker;

/// Poll interval for [`ConnectivityFlag::wait_for_connect`].
pub const CONNECT_POLL_INTERVAL_MS: u32 = 100;

/// Shared "interface has an address" flag.
///
/// Set by the [`Supervisor`] when the address-acquired event arrives,
/// cleared on disconnect or stop. Safe to read from any context;
/// typically lives in a `static`.
pub struct ConnectivityFlag {
    connected: AtomicBool,
    #[cfg(feature = "async")]
    waker: AtomicWaker,
}

impl ConnectivityFlag {
    /// New flag in the disconnected state (const, suitable for statics).
    pub const fn new() -> Self {
        Self {
            connected: AtomicBool::new(false),
            #[cfg(feature = "async")]
            waker: AtomicWaker::new(),
        }
    }

    /// Whether the interface currently has an address.
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }

    /// Store the new state, returning the previous one.
    pub(crate) fn set(&self, connected: bool) -> bool {
        let previous = self.connected.swap(connected, Ordering::AcqRel);
        #[cfg(feature = "async")]
        if connected {
            self.waker.wake();
        }
        previous
    }

    /// Block until connected, polling every
    /// [`CONNECT_POLL_INTERVAL_MS`] milliseconds.
    ///
    /// Events must be drained by another context (or the supervisor
    /// driven from the event task), otherwise this never returns.
    pub fn wait_for_connect<D: DelayNs>(&self, delay: &mut D) {
        while !self.is_connected() {
            delay.delay_ms(CONNECT_POLL_INTERVAL_MS);
        }
    }

    /// Resolve once the interface has an address.
    #[cfg(feature = "async")]
    pub fn wait_connected(&self) -> WaitConnected<'_> {
        WaitConnected { flag: self }
    }
}

impl Default for ConnectivityFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Future returned by [`ConnectivityFlag::wait_connected`].
#[cfg(feature = "async")]
pub struct WaitConnected<'a> {
    flag: &'a ConnectivityFlag,
}

#[cfg(feature = "async")]
impl core::future::Future for WaitConnected<'_> {
    type Output = ();

    fn poll(
        self: core::pin::Pin<&mut Self>,
        cx: &mut core::task::Context<'_>,
    ) -> core::task::Poll<()> {
        if self.flag.is_connected() {
            return core::task::Poll::Ready(());
        }
        self.flag.waker.register(cx.waker());
        // Re-check: the event task may have set the flag between the
        // first load and waker registration.
        if self.flag.is_connected() {
            core::task::Poll::Ready(())
        } else {
            core::task::Poll::Pending
        }
    }
}
