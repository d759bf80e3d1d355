use alloc::{vec, vec::Vec};

use serde::{Deserialize, Serialize};

use crate::{Mash, MashError, Order, Process, Word, detect_period_legacy, detect_period_true};

/// Sequences of one accumulator stage
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StageTrace<T> {
    /// Accumulator value `stat_i[j]`
    pub state: Vec<T>,
    /// Carry register `over_i[j]`: whether the update into time `j` wrapped
    pub carry: Vec<bool>,
}

/// Full internal evolution of a modulator run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trace<T> {
    /// Cascade order
    pub order: Order,
    /// Per stage sequences, first stage first
    pub stages: Vec<StageTrace<T>>,
    /// Combined output
    pub div: Vec<i8>,
}

impl<T: Word> Trace<T> {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.div.len()
    }

    /// Whether the run had no samples
    pub fn is_empty(&self) -> bool {
        self.div.is_empty()
    }

    /// Indicator `Z[j]` of the summed stage state being zero
    pub fn sum_is_zero(&self) -> Vec<bool> {
        (0..self.len())
            .map(|j| zero_sum(self.stages.iter().map(|st| st.state[j])))
            .collect()
    }

    /// Period as reported by [`simulate()`], see [`detect_period_legacy()`]
    pub fn period(&self) -> i32 {
        detect_period_legacy(&self.sum_is_zero())
    }

    /// Distance between the first two zero states, see [`detect_period_true()`]
    pub fn period_true(&self) -> isize {
        detect_period_true(&self.sum_is_zero())
    }
}

/// Whether stage values sum to zero
///
/// Integer registers are non-negative and their sum need not be representable:
/// only fractional registers, which may be negative, are summed.
fn zero_sum<T: Word>(state: impl Iterator<Item = T> + Clone) -> bool {
    if state.clone().any(|a| a < T::zero()) {
        state.fold(T::zero(), |s, a| s + a).is_zero()
    } else {
        state.into_iter().all(|a| a.is_zero())
    }
}

fn setup<T: Word>(order: u32, width: u32, k: &[T]) -> Result<Mash<T>, MashError> {
    let mash = Mash::new(Order::try_from(order)?, width)?;
    let modulus = mash.modulus();
    if let Some(index) = k.iter().position(|x| !x.within(modulus)) {
        return Err(MashError::Input { index });
    }
    Ok(mash)
}

/// Simulate a MASH modulator over an input sequence
///
/// At time `j` every stage holds the sum of everything fed to it before `j`,
/// reduced modulo `1 << N`. The first stage is fed `k`, every later stage the
/// updated value of the stage before it. `k[k.len() - 1]` does not influence
/// the output.
///
/// ```
/// let k = [0u32, 3, 3, 3, 3, 3, 3, 3, 3, 3];
/// let (div, per) = mash::simulate(1, 3, &k).unwrap();
/// assert_eq!(div, [1, 0, 0, 0, 1, 0, 0, 1, 0, 1]);
/// assert_eq!(per, 0);
/// ```
///
/// # Arguments
/// * `order`: Number of cascaded stages, `1..=3`
/// * `width`: Accumulator word width `N` in bits
/// * `k`: Input samples, `0 <= k[j] <= 1 << N`
///
/// # Returns
/// The output sequence (same length as `k`) and the period as determined by
/// [`detect_period_legacy()`].
///
/// # Errors
/// [`MashError`] for an unsupported order or word width and for out of range
/// input samples.
pub fn simulate<T: Word>(order: u32, width: u32, k: &[T]) -> Result<(Vec<i8>, i32), MashError> {
    let mut mash = setup(order, width, k)?;
    // Only the first two indicator values are consumed.
    let mut zero = Vec::with_capacity(2);
    let div: Vec<i8> = k
        .iter()
        .map(|&x| {
            if zero.len() < 2 {
                zero.push(zero_sum(mash.accumulators()));
            }
            mash.process(x)
        })
        .collect();
    let per = detect_period_legacy(&zero);
    log::debug!(
        "order {order} width {width}: {} samples, period {per}",
        div.len()
    );
    Ok((div, per))
}

/// Simulate and record every stage's accumulator and carry sequences
///
/// Arguments and errors as for [`simulate()`].
pub fn trace<T: Word>(order: u32, width: u32, k: &[T]) -> Result<Trace<T>, MashError> {
    let mut mash = setup(order, width, k)?;
    let mut stages = vec![
        StageTrace {
            state: Vec::with_capacity(k.len()),
            carry: Vec::with_capacity(k.len()),
        };
        mash.order().stages()
    ];
    let mut div = Vec::with_capacity(k.len());
    for &x in k {
        for (st, (a, c)) in stages
            .iter_mut()
            .zip(mash.accumulators().zip(mash.carries()))
        {
            st.state.push(a);
            st.carry.push(c);
        }
        div.push(mash.process(x));
    }
    log::debug!("traced order {order} width {width}: {} samples", div.len());
    Ok(Trace {
        order: mash.order(),
        stages,
        div,
    })
}
