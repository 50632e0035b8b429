//! Fixed-capacity event buffer.

use super::LinkEvent;
use crate::sync::CriticalSectionCell;

struct Ring<const N: usize> {
    buf: [Option<LinkEvent>; N],
    head: usize,
    len: usize,
    dropped: u32,
}

/// Fixed-capacity FIFO of [`LinkEvent`]s.
///
/// Pushed from the platform's event dispatch context, drained by the
/// application (usually through [`Supervisor::drain`](super::Supervisor::drain)).
/// No allocation; when full, the newest event is dropped and counted
/// rather than displacing buffered ones.
pub struct EventQueue<const N: usize> {
    inner: CriticalSectionCell<Ring<N>>,
}

impl<const N: usize> EventQueue<N> {
    /// New empty queue (const, suitable for statics).
    pub const fn new() -> Self {
        Self {
            inner: CriticalSectionCell::new(Ring {
                buf: [None; N],
                head: 0,
                len: 0,
                dropped: 0,
            }),
        }
    }

    /// Enqueue an event. Returns `false` (and counts the drop) when full.
    pub fn push(&self, event: LinkEvent) -> bool {
        self.inner.with(|ring| {
            if ring.len == N {
                ring.dropped = ring.dropped.saturating_add(1);
                return false;
            }
            let tail = (ring.head + ring.len) % N;
            ring.buf[tail] = Some(event);
            ring.len += 1;
            true
        })
    }

    /// Dequeue the oldest event.
    pub fn pop(&self) -> Option<LinkEvent> {
        self.inner.with(|ring| {
            if ring.len == 0 {
                return None;
            }
            let event = ring.buf[ring.head].take();
            ring.head = (ring.head + 1) % N;
            ring.len -= 1;
            event
        })
    }

    /// Number of buffered events.
    pub fn len(&self) -> usize {
        self.inner.with(|ring| ring.len)
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Events dropped because the queue was full.
    pub fn dropped(&self) -> u32 {
        self.inner.with(|ring| ring.dropped)
    }
}

impl<const N: usize> Default for EventQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}
