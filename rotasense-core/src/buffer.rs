//! Fixed-Size Moving Average over Rate Samples
//!
//! ## Overview
//!
//! A ring buffer of the last `N` RPM samples with a running sum, used to
//! smooth the per-window rate. Capacity is a const generic so the buffer lives
//! inline in the estimator with no allocation.
//!
//! ### Why a Running Sum?
//!
//! Recomputing the mean over all slots on every window is O(N). Keeping the
//! sum turns each push into:
//! - subtract the slot being overwritten (only once the buffer is full)
//! - add the new sample
//!
//! ### Averaging Before the Buffer Fills
//!
//! Until `N` samples have arrived the divisor is the number of samples held,
//! not `N`. Dividing by `N` would read as a slow ramp from zero after every
//! boot even when the shaft is already turning at a constant speed.
//!
//! ```text
//! MovingAverage<4> after pushes 10, 20, 30:
//! ┌────┬────┬────┬────┐
//! │ 10 │ 20 │ 30 │  - │   len = 3, sum = 60, average = 20
//! └────┴────┴────┴────┘
//!                  ↑ write_pos
//!
//! push(40), push(50):
//! ┌────┬────┬────┬────┐
//! │ 50 │ 20 │ 30 │ 40 │   len = 4, sum = 140, average = 35
//! └────┴────┴────┴────┘
//!        ↑ write_pos (oldest sample)
//! ```
//!
//! ### Floating-Point Drift
//!
//! Adding and subtracting `f32` values leaves rounding residue in the running
//! sum. Whenever the write position wraps back to slot 0 the sum is rebuilt
//! from the slots, so drift never outlives one pass over the buffer.
//!
//! ## Usage Example
//!
//! ```rust
//! use rotasense_core::buffer::MovingAverage;
//!
//! let mut rpm: MovingAverage<3> = MovingAverage::new();
//! assert_eq!(rpm.push(30.0), 30.0);
//! assert_eq!(rpm.push(60.0), 45.0);
//! assert_eq!(rpm.push(90.0), 60.0);
//! // 30.0 is evicted
//! assert_eq!(rpm.push(0.0), 50.0);
//! ```

/// Fixed-size moving average for `f32` samples
///
/// ## Internal Invariants
///
/// - `write_pos < N` (next write position is always valid)
/// - `len <= N`
/// - `sum` equals the sum of the `len` held samples, up to rounding since the
///   last resync
#[derive(Debug, Clone)]
pub struct MovingAverage<const N: usize> {
    data: [f32; N],
    write_pos: usize,
    len: usize,
    sum: f32,
}

impl<const N: usize> MovingAverage<N> {
    /// Creates an empty buffer
    pub const fn new() -> Self {
        Self {
            data: [0.0; N],
            write_pos: 0,
            len: 0,
            sum: 0.0,
        }
    }

    /// Adds a sample, evicting the oldest one when full, and returns the new average
    ///
    /// A zero-capacity buffer holds nothing and always averages to `0.0`.
    pub fn push(&mut self, value: f32) -> f32 {
        if N == 0 {
            return 0.0;
        }

        if self.len == N {
            self.sum -= self.data[self.write_pos];
        } else {
            self.len += 1;
        }

        self.data[self.write_pos] = value;
        self.sum += value;
        self.write_pos += 1;

        // Resync once per pass
        if self.write_pos == N {
            self.write_pos = 0;
            self.sum = self.data.iter().sum();
        }

        self.average()
    }

    /// Current average, `0.0` when empty
    pub fn average(&self) -> f32 {
        if self.len == 0 {
            return 0.0;
        }
        self.sum / self.len as f32
    }

    /// Running sum of the held samples
    pub fn sum(&self) -> f32 {
        self.sum
    }

    /// Number of held samples
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if no sample has been pushed yet
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if the next push evicts a sample
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Maximum number of samples
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Most recent sample
    pub fn last(&self) -> Option<f32> {
        if self.is_empty() {
            return None;
        }
        let idx = if self.write_pos == 0 { N - 1 } else { self.write_pos - 1 };
        Some(self.data[idx])
    }

    /// Iterate over samples from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        // When full the oldest sample sits at write_pos, otherwise at 0
        let start = if self.len == N { self.write_pos } else { 0 };
        (0..self.len).map(move |i| {
            let idx = start + i;
            self.data[if idx >= N { idx - N } else { idx }]
        })
    }

    /// Drop all samples
    pub fn clear(&mut self) {
        self.data = [0.0; N];
        self.write_pos = 0;
        self.len = 0;
        self.sum = 0.0;
    }
}

impl<const N: usize> Default for MovingAverage<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer() {
        let buffer: MovingAverage<5> = MovingAverage::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.average(), 0.0);
        assert!(buffer.last().is_none());
    }

    #[test]
    fn seven_sample_window() {
        let mut buffer = MovingAverage::<7>::new();

        for rpm in [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0] {
            buffer.push(rpm);
        }
        assert!(buffer.is_full());
        assert_eq!(buffer.average(), 40.0);

        // 10 is evicted
        assert_eq!(buffer.push(80.0), 50.0);
        assert_eq!(buffer.sum(), 350.0);
    }

    #[test]
    fn partial_fill_divides_by_count() {
        let mut buffer = MovingAverage::<7>::new();
        assert_eq!(buffer.push(30.0), 30.0);
        assert_eq!(buffer.push(60.0), 45.0);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn zero_sample_pulls_average_down() {
        let mut buffer = MovingAverage::<4>::new();
        for _ in 0..4 {
            buffer.push(100.0);
        }
        let before = buffer.average();
        let after = buffer.push(0.0);
        assert!(after < before);
        assert_eq!(after, 75.0);
    }

    #[test]
    fn circular_overwrite_order() {
        let mut buffer = MovingAverage::<3>::new();
        for i in 0..5 {
            buffer.push(i as f32);
        }

        assert_eq!(buffer.len(), 3);
        let values: Vec<f32> = buffer.iter().collect();
        assert_eq!(values, vec![2.0, 3.0, 4.0]);
        assert_eq!(buffer.last(), Some(4.0));
    }

    #[test]
    fn sum_tracks_held_samples() {
        let mut buffer = MovingAverage::<5>::new();
        for i in 0..23 {
            buffer.push(i as f32 * 0.1);
            let expected: f32 = buffer.iter().sum();
            assert!((buffer.sum() - expected).abs() < 1e-4);
        }
    }

    #[test]
    fn clear_resets_state() {
        let mut buffer = MovingAverage::<3>::new();
        buffer.push(5.0);
        buffer.push(6.0);
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.sum(), 0.0);
        assert_eq!(buffer.push(9.0), 9.0);
    }

    #[test]
    fn zero_capacity_never_averages() {
        let mut buffer = MovingAverage::<0>::new();
        assert_eq!(buffer.push(12.0), 0.0);
        assert!(buffer.is_empty());
    }
}
