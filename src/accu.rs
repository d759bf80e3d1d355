use serde::{Deserialize, Serialize};

use crate::Word;

/// Carry-out accumulator
///
/// A register holding a value in `0..=max` that sums its input modulo
/// `max + 1` and latches whether the last update wrapped.
///
/// With fractional inputs the wrap is decided on the unrounded sum: a wrap
/// from `(max, max + 1)` leaves the register in `(-1, 0)`. The register never
/// exceeds `max`, but there is no lower wrap. A stage fed negative values
/// (the value of a fractional stage before it) keeps decreasing until
/// its feed turns positive again. Only the first stage of a cascade, fed
/// non-negative input, stays within `(-1, max]`.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Accu<T> {
    state: T,
    carry: bool,
}

impl<T: Word> Accu<T> {
    /// Create a stage with zero state and the given carry register content.
    pub fn new(carry: bool) -> Self {
        Self {
            state: T::zero(),
            carry,
        }
    }

    /// Add a new sample.
    ///
    /// `max + x` must be representable in `T`.
    ///
    /// # Arguments
    /// * `x`: Input sample, `x <= max + 1`
    /// * `max`: Largest register value
    ///
    /// # Returns
    /// The updated register value
    pub fn update(&mut self, x: T, max: T) -> T {
        let raw = self.state + x;
        self.carry = raw > max;
        self.state = if self.carry { raw - max - T::one() } else { raw };
        self.state
    }

    /// Current register value
    pub fn state(&self) -> T {
        self.state
    }

    /// Whether the update into the current state wrapped
    pub fn carry(&self) -> bool {
        self.carry
    }
}
