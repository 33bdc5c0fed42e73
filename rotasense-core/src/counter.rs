//! Interrupt-Shared Pulse Counter
//!
//! ## Overview
//!
//! The edge interrupt and the main loop share exactly two values: the number
//! of pulses accepted since the last window and the timestamp of the last
//! accepted edge. Both live in one `Cell` behind a
//! `critical_section::Mutex`, so:
//!
//! - `on_edge` runs from the interrupt with no blocking, allocation or I/O
//! - `drain` reads and zeroes the count in one short critical section
//! - no increment is lost or counted twice when an edge lands mid-drain
//!
//! ```text
//!  edge ISR                               main loop
//!     │                                       │
//!     ├─ cs { guard.admit(t)? count += 1 }    │
//!     │                                       ├─ cs { n = count; count = 0 }
//!     ├─ cs { ... }                           │
//!     │                                       ├─ rpm = f(n)   (outside cs)
//! ```
//!
//! This crate only uses `critical-section`; the firmware binary picks the
//! implementation. On single-core Cortex-M that is
//! `cortex-m/critical-section-single-core`, which masks interrupts. Host
//! builds enable `critical-section/std`, a global mutex.
//!
//! Timestamps must come from a non-wrapping 64-bit clock (see
//! [`MonotonicTime`](crate::time::MonotonicTime)).

use core::cell::Cell;

use critical_section::Mutex;

use crate::time::{elapsed_ms, Timestamp};

/// Refractory filter over edge timestamps
///
/// An edge is accepted when its gap to the previous accepted edge is
/// strictly greater than the refractory period. A gap exactly equal to the
/// period is rejected. The first edge is always accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceGuard {
    refractory_ms: Option<u32>,
    last_accepted: Option<Timestamp>,
}

impl DebounceGuard {
    /// Guard with the given refractory period, `None` disables filtering
    pub const fn new(refractory_ms: Option<u32>) -> Self {
        Self {
            refractory_ms,
            last_accepted: None,
        }
    }

    /// Decide on an edge and remember it when accepted
    pub fn admit(&mut self, timestamp: Timestamp) -> bool {
        let accepted = match (self.refractory_ms, self.last_accepted) {
            (Some(period), Some(last)) => elapsed_ms(last, timestamp) > period as u64,
            _ => true,
        };

        if accepted {
            self.last_accepted = Some(timestamp);
        }
        accepted
    }

    /// Timestamp of the last accepted edge
    pub fn last_accepted(&self) -> Option<Timestamp> {
        self.last_accepted
    }

    /// Configured refractory period
    pub fn refractory_ms(&self) -> Option<u32> {
        self.refractory_ms
    }
}

#[derive(Clone, Copy)]
struct EdgeState {
    pulses: u32,
    guard: DebounceGuard,
}

/// Pulse counter written by the edge interrupt and drained by the main loop
pub struct PulseCounter {
    state: Mutex<Cell<EdgeState>>,
}

impl PulseCounter {
    /// Empty counter with the given debounce period
    pub const fn new(refractory_ms: Option<u32>) -> Self {
        Self {
            state: Mutex::new(Cell::new(EdgeState {
                pulses: 0,
                guard: DebounceGuard::new(refractory_ms),
            })),
        }
    }

    /// Register a rising edge, returns whether it passed the debounce filter
    #[inline]
    pub fn on_edge(&self, timestamp: Timestamp) -> bool {
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();
            let accepted = state.guard.admit(timestamp);
            if accepted {
                state.pulses = state.pulses.wrapping_add(1);
                cell.set(state);
            }
            accepted
        })
    }

    /// Read and reset the pulse count in one critical section
    pub fn drain(&self) -> u32 {
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();
            let pulses = state.pulses;
            state.pulses = 0;
            cell.set(state);
            pulses
        })
    }

    /// Pulses accepted since the last drain, without resetting
    pub fn pending(&self) -> u32 {
        critical_section::with(|cs| self.state.borrow(cs).get().pulses)
    }

    /// Snapshot of the debounce state
    pub fn guard(&self) -> DebounceGuard {
        critical_section::with(|cs| self.state.borrow(cs).get().guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_edge_always_accepted() {
        let mut guard = DebounceGuard::new(Some(3));
        assert!(guard.admit(0));
        assert_eq!(guard.last_accepted(), Some(0));
    }

    #[test]
    fn gap_equal_to_period_is_rejected() {
        let mut guard = DebounceGuard::new(Some(3));
        assert!(guard.admit(100));
        assert!(!guard.admit(103));
        assert!(guard.admit(104));
    }

    #[test]
    fn rejected_edges_do_not_move_the_guard() {
        let mut guard = DebounceGuard::new(Some(3));
        assert!(guard.admit(10));
        assert!(!guard.admit(11));
        assert!(!guard.admit(12));
        assert!(!guard.admit(13));
        assert_eq!(guard.last_accepted(), Some(10));
        assert!(guard.admit(14));
    }

    #[test]
    fn disabled_guard_accepts_everything() {
        let mut guard = DebounceGuard::new(None);
        for _ in 0..5 {
            assert!(guard.admit(42));
        }
    }

    #[test]
    fn backwards_timestamp_is_rejected() {
        let mut guard = DebounceGuard::new(Some(3));
        assert!(guard.admit(500));
        assert!(!guard.admit(400));
    }

    #[test]
    fn counter_counts_accepted_edges() {
        let counter = PulseCounter::new(Some(3));
        assert!(counter.on_edge(0));
        assert!(!counter.on_edge(2));
        assert!(counter.on_edge(5));
        assert_eq!(counter.pending(), 2);
    }

    #[test]
    fn drain_resets_to_zero() {
        let counter = PulseCounter::new(None);
        for t in 0..10 {
            counter.on_edge(t);
        }
        assert_eq!(counter.drain(), 10);
        assert_eq!(counter.pending(), 0);
        assert_eq!(counter.drain(), 0);
    }

    #[test]
    fn drain_keeps_debounce_state() {
        let counter = PulseCounter::new(Some(3));
        assert!(counter.on_edge(10));
        counter.drain();

        // Still within the refractory period of the edge at t=10
        assert!(!counter.on_edge(12));
        assert_eq!(counter.guard().last_accepted(), Some(10));
    }

    #[test]
    fn accepts_edges_past_32_bit_millis_range() {
        let counter = PulseCounter::new(Some(3));
        let start = u32::MAX as Timestamp - 1;
        let accepted = (0..1000)
            .map(|i| start + i * 4)
            .filter(|&t| counter.on_edge(t))
            .count();
        assert_eq!(accepted, 1000);
        assert_eq!(counter.drain(), 1000);
    }

    #[test]
    fn counter_is_static_friendly() {
        static COUNTER: PulseCounter = PulseCounter::new(Some(1));
        COUNTER.on_edge(1);
        COUNTER.on_edge(3);
        assert_eq!(COUNTER.drain(), 2);
    }
}
