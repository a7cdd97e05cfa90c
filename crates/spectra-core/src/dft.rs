//! A real-input forward DFT workspace, packed Ooura-rdft style.
//!
//! The twiddle/scratch state a general-purpose FFT library builds for a
//! given size is expensive to construct and must be reused across calls:
//! one [`DftWorkspace`] is built once per capacity and `transform` is called
//! repeatedly against it.

use crate::{CoreError, Result};
use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;
use tracing::trace;

pub struct DftWorkspace {
    capacity: usize,
    forward: Arc<dyn Fft<f64>>,
    scratch: Vec<Complex64>,
    complex_buf: Vec<Complex64>,
}

impl DftWorkspace {
    /// Initialize the twiddle state for `capacity` (a power of two, >= 2).
    /// This is a one-time setup cost; it must not be repeated per-transform.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity < 2 || !capacity.is_power_of_two() {
            return Err(CoreError::InvalidCapacity(capacity));
        }

        let mut planner = FftPlanner::new();
        let forward = planner.plan_fft_forward(capacity);
        let scratch_len = forward.get_inplace_scratch_len();
        trace!(capacity, scratch_len, "dft workspace initialized");

        Ok(DftWorkspace {
            capacity,
            forward,
            scratch: vec![Complex64::new(0.0, 0.0); scratch_len],
            complex_buf: vec![Complex64::new(0.0, 0.0); capacity],
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Forward real DFT of `windowed` (length == capacity), written into
    /// `packed` (length == capacity) using the packing
    /// `(Re0, Re_{N/2}, Re1, Im1, Re2, Im2, ...)` so that bin `k` lives at
    /// element offset `2k` for `1 <= k < N/2`, bin 0 at offset 0 and bin
    /// `N/2` at offset 1.
    pub fn transform(&mut self, windowed: &[f64], packed: &mut [f64]) -> Result<()> {
        if windowed.len() != self.capacity {
            return Err(CoreError::WindowSizeMismatch(windowed.len(), self.capacity));
        }
        if packed.len() != self.capacity {
            return Err(CoreError::WindowSizeMismatch(packed.len(), self.capacity));
        }

        for (c, &s) in self.complex_buf.iter_mut().zip(windowed) {
            *c = Complex64::new(s, 0.0);
        }

        self.forward
            .process_with_scratch(&mut self.complex_buf, &mut self.scratch);

        let half = self.capacity / 2;
        packed[0] = self.complex_buf[0].re;
        packed[1] = self.complex_buf[half].re;
        for k in 1..half {
            packed[2 * k] = self.complex_buf[k].re;
            packed[2 * k + 1] = self.complex_buf[k].im;
        }

        Ok(())
    }
}
