//! Sample-to-symbol quantization.
//!
//! Every 8-bit sample is linearly mapped from `[0, 256)` onto the nine
//! duty-cycle levels of [`SYMBOLS`] and truncated toward zero.

use crate::tables::{NUM_SAMPLE_VALUES, NUM_SYMBOLS, SYMBOLS};

// The largest sample must land on the last symbol, never one past it.
const _: () = assert!(symbol_index_of(u8::MAX) == NUM_SYMBOLS - 1);

/// Duty-cycle level for `sample`.
///
/// `floor(i * 9 / 256)` in integer arithmetic, which equals the truncated
/// `lerp(i, 0, 256, 0, 9)` for all 8-bit inputs.
const fn symbol_index_of(sample: u8) -> usize {
    (sample as usize * NUM_SYMBOLS) / NUM_SAMPLE_VALUES
}

const fn build() -> [u8; NUM_SAMPLE_VALUES] {
    let mut map = [0u8; NUM_SAMPLE_VALUES];
    let mut i = 0;
    while i < NUM_SAMPLE_VALUES {
        map[i] = SYMBOLS[symbol_index_of(i as u8)];
        i += 1;
    }
    map
}

/// Immutable lookup table from sample value to PWM symbol.
#[derive(Clone, PartialEq, Eq)]
pub struct Quantizer {
    sample_map: [u8; NUM_SAMPLE_VALUES],
}

impl Quantizer {
    pub fn new() -> Self {
        Quantizer {
            sample_map: build(),
        }
    }

    #[inline]
    pub fn lookup(&self, sample: u8) -> u8 {
        self.sample_map[usize::from(sample)]
    }

    /// Index into [`SYMBOLS`] that `sample` quantizes to.
    #[inline]
    pub fn symbol_index(&self, sample: u8) -> usize {
        symbol_index_of(sample)
    }

    pub fn sample_map(&self) -> &[u8; NUM_SAMPLE_VALUES] {
        &self.sample_map
    }
}

impl Default for Quantizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Quantizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Quantizer")
            .field("levels", &NUM_SYMBOLS)
            .finish()
    }
}

/// Nominal duty cycle of symbol `index`, from 0.1 to 0.9.
pub fn duty_cycle(index: usize) -> f32 {
    assert!(index < NUM_SYMBOLS, "symbol index out of range");
    (index + 1) as f32 / 10.0
}
