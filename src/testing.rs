//! Tools to test modulator outputs
#![allow(dead_code)]
use alloc::vec::Vec;

use num_traits::Float;

/// Maximum acceptable error between a computed and actual value given fixed and relative
/// tolerances.
pub fn max_error<T: Float>(a: T, b: T, rtol: T, atol: T) -> T {
    rtol * a.abs().max(b.abs()) + atol
}

/// Return whether two numbers are within absolute plus relative tolerance
pub fn isclose<T: Float>(a: T, b: T, rtol: T, atol: T) -> bool {
    (a - b).abs() <= max_error(a, b, rtol, atol)
}

/// Average of an output sequence
pub fn mean(y: &[i8]) -> f64 {
    y.iter().map(|&y| y as f64).sum::<f64>() / y.len() as f64
}

/// Constant input for a given fraction of full scale
///
/// # Args
/// * `fraction` - Value in `[0, 1)` the output average should approach.
/// * `width` - Accumulator word width.
/// * `len` - Number of samples.
pub fn constant(fraction: f64, width: u32, len: usize) -> Vec<f64> {
    let x = fraction * (1u64 << width) as f64;
    (0..len).map(|_| x).collect()
}
