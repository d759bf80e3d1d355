use serde::{Deserialize, Serialize};

use crate::{Accu, Process, Word};

/// Largest supported cascade order
pub const MAX_ORDER: usize = 3;

/// Noise cancellation combiner taps
///
/// Row `i` differences the carry of stage `i` `i` times:
/// `(1 - z^-1)^i` with taps for the current and the two previous carries.
pub const COMBINER: [[i8; MAX_ORDER]; MAX_ORDER] = [[1, 0, 0], [1, -1, 0], [1, -2, 1]];

/// Invalid arguments to the modulator
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, thiserror::Error,
)]
#[non_exhaustive]
pub enum MashError {
    /// Order outside `1..=3`
    #[error("invalid argument: unsupported MASH order {0}, expected 1, 2, or 3")]
    Order(u32),
    /// Word width zero, too large, or without headroom in the sample type
    #[error("invalid argument: word width {0} not representable")]
    Width(u32),
    /// Input sample negative, NaN, or larger than the register modulus
    #[error("invalid argument: input sample {index} outside [0, 2**N]")]
    Input {
        /// Index of the first offending sample
        index: usize,
    },
}

/// Cascade order
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::FromRepr,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[repr(u8)]
pub enum Order {
    /// Single accumulator, first order noise shaping
    First = 1,
    /// MASH 1-1, second order
    #[default]
    Second = 2,
    /// MASH 1-1-1, third order
    Third = 3,
}

impl Order {
    /// Number of accumulator stages
    pub const fn stages(self) -> usize {
        self as usize
    }

    /// Initial content of the first stage's carry register
    ///
    /// The first and third order cascades start with a set carry,
    /// the second order cascade does not.
    /// This asymmetry is kept for bit-exact compatibility; the second order
    /// cascade may be missing the equivalent seed.
    pub const fn seed(self) -> bool {
        match self {
            Self::First | Self::Third => true,
            Self::Second => false,
        }
    }

    /// Combiner taps for each stage
    pub fn combiner(self) -> &'static [[i8; MAX_ORDER]] {
        &COMBINER[..self.stages()]
    }
}

impl TryFrom<u32> for Order {
    type Error = MashError;

    fn try_from(order: u32) -> Result<Self, Self::Error> {
        u8::try_from(order)
            .ok()
            .and_then(Self::from_repr)
            .ok_or(MashError::Order(order))
    }
}

/// MASH delta-sigma modulator
///
/// * MASH-(1)^K architecture with `K` in `1..=3` chosen at runtime
/// * `N` bit accumulators: `MAX = (1 << N) - 1`
/// * Each stage accumulates the updated value of the stage before it,
///   the first stage accumulates the input.
/// * Stage `i` carries are differenced `i` times (see [`COMBINER`]) and summed.
/// * The output range is `-3..=4` for third order, `-1..=2` for second order,
///   and `0..=1` for first order.
/// * Given constant input `x0`, the average output is `x0/(1 << N)`.
///
/// The output is registered: [`Process::process()`] emits the output for the
/// current register contents and then advances the cascade with the input.
///
/// ```
/// # use mash::{Mash, Order, Process};
/// let mut d = Mash::<u32>::new(Order::Second, 16).unwrap();
/// let x = 0x4321;
/// let n = 1 << 16;
/// let y = d.stream((0..n).map(|_| x)).map(|y| y as f32).sum::<f32>() / n as f32;
/// let m = x as f32 / (1 << 16) as f32;
/// assert!((y - m).abs() < 1e-4, "{y} != {m}");
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mash<T> {
    order: Order,
    max: T,
    stages: [Accu<T>; MAX_ORDER],
    history: [[bool; MAX_ORDER - 1]; MAX_ORDER],
}

impl<T: Word> Mash<T> {
    /// Create a new modulator with zero state.
    ///
    /// # Arguments
    /// * `order`: Number of cascaded stages
    /// * `width`: Accumulator word width `N` in bits
    ///
    /// # Errors
    /// [`MashError::Width`] unless `0 < width <= 64` and `2 * MAX + 1`
    /// is representable in `T`.
    pub fn new(order: Order, width: u32) -> Result<Self, MashError> {
        if !(1..=64).contains(&width) {
            return Err(MashError::Width(width));
        }
        let max = (1u128 << width) - 1;
        // Headroom for `state + input` before the wrap.
        T::from_bound(2 * max + 1).ok_or(MashError::Width(width))?;
        let max = T::from_bound(max).ok_or(MashError::Width(width))?;
        Ok(Self {
            order,
            max,
            stages: Self::initial(order),
            history: Default::default(),
        })
    }

    /// Cascade order
    pub fn order(&self) -> Order {
        self.order
    }

    /// Largest accumulator value `(1 << N) - 1`
    pub fn max(&self) -> T {
        self.max
    }

    /// Register modulus `1 << N`
    pub fn modulus(&self) -> T {
        self.max + T::one()
    }

    /// Current accumulator values, first stage first
    pub fn accumulators(&self) -> impl Iterator<Item = T> + Clone + '_ {
        self.stages().iter().map(Accu::state)
    }

    /// Current carry registers, first stage first
    pub fn carries(&self) -> impl Iterator<Item = bool> + '_ {
        self.stages().iter().map(Accu::carry)
    }

    /// Return to the initial state
    pub fn reset(&mut self) {
        self.stages = Self::initial(self.order);
        self.history = Default::default();
    }

    /// Zero registers, only the first stage's carry may be seeded.
    fn initial(order: Order) -> [Accu<T>; MAX_ORDER] {
        core::array::from_fn(|i| Accu::new(i == 0 && order.seed()))
    }

    fn stages(&self) -> &[Accu<T>] {
        &self.stages[..self.order.stages()]
    }

    /// Combine current carries with their history and shift the history.
    fn combine(&mut self) -> i8 {
        let n = self.order.stages();
        self.stages[..n]
            .iter()
            .zip(self.history.iter_mut())
            .zip(self.order.combiner())
            .map(|((s, h), c)| {
                let c0 = s.carry() as i8;
                let y = c[0] * c0 + c[1] * h[0] as i8 + c[2] * h[1] as i8;
                *h = [s.carry(), h[0]];
                y
            })
            .sum()
    }
}

impl<T: Word> Process<T, i8> for Mash<T> {
    /// Emit the current output, then ingest an input sample.
    ///
    /// # Arguments
    /// * `x`: Input sample, `0 <= x <= 1 << N`
    ///
    /// # Returns
    /// Output for the register contents before `x` is added
    fn process(&mut self, x: T) -> i8 {
        debug_assert!(x.within(self.modulus()));
        let y = self.combine();
        let max = self.max;
        let n = self.order.stages();
        self.stages[..n].iter_mut().fold(x, |x, a| a.update(x, max));
        y
    }
}
