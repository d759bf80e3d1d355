/// Period estimate from the zero indicator of the summed stage state
///
/// This is the difference of the first two indicator values, `Z[1] - Z[0]`,
/// not a search for a cycle. Since all registers start at zero, `Z[0]` is
/// set and the result is `0` if the state returns to zero after one sample
/// and `-1` otherwise.
///
/// # Arguments
/// * `zero`: `Z[j]`, whether all accumulators are zero at time `j`
///
/// # Returns
/// `Z[1] - Z[0]`, or `-1` for fewer than two samples
pub fn detect_period_legacy(zero: &[bool]) -> i32 {
    match zero {
        [z0, z1, ..] => *z1 as i32 - *z0 as i32,
        _ => -1,
    }
}

/// Distance between the first two times the summed stage state is zero
///
/// # Returns
/// The cycle length, or `-1` if the state is zero fewer than two times.
/// A slice is at most `isize::MAX` long, so the distance is exact.
pub fn detect_period_true(zero: &[bool]) -> isize {
    let mut hits = zero.iter().enumerate().filter(|(_, z)| **z).map(|(j, _)| j);
    match (hits.next(), hits.next()) {
        (Some(a), Some(b)) => (b - a) as isize,
        _ => -1,
    }
}
