use num_traits::{Num, NumCast};

/// Helper trait unifying integer and floating point accumulator samples
///
/// Integers give exact modular arithmetic. Floating point samples keep
/// fractional parts through the carry comparison: `raw > MAX` is evaluated
/// on the unrounded sum.
pub trait Word: Copy + PartialOrd + Num + NumCast + core::fmt::Debug + 'static {
    /// Convert an integer register bound, `None` if not exactly representable
    ///
    /// Floating point conversions round: the bound must survive the round trip.
    fn from_bound(value: u128) -> Option<Self> {
        <Self as NumCast>::from(value).filter(|b: &Self| b.to_u128() == Some(value))
    }

    /// Whether the sample is a valid accumulator input `0 <= self <= bound`
    ///
    /// NaN is rejected.
    fn within(self, bound: Self) -> bool {
        self >= Self::zero() && self <= bound
    }
}

impl<T: Copy + PartialOrd + Num + NumCast + core::fmt::Debug + 'static> Word for T {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bounds() {
        assert_eq!(u32::from_bound((1 << 32) - 1), Some(u32::MAX));
        assert_eq!(u32::from_bound(1 << 32), None);
        assert_eq!(i16::from_bound(1 << 15), None);
        assert_eq!(f64::from_bound(1 << 40), Some((1u64 << 40) as f64));
    }

    #[test]
    fn inexact_float_bounds() {
        assert_eq!(f32::from_bound((1 << 24) - 1), Some(16777215.0));
        assert_eq!(f32::from_bound((1 << 25) - 1), None);
        assert_eq!(f32::from_bound(1 << 25), Some(33554432.0));
        assert_eq!(f64::from_bound((1 << 53) - 1), Some(9007199254740991.0));
        assert_eq!(f64::from_bound((1 << 54) - 1), None);
    }

    #[test]
    fn within() {
        assert!(3u8.within(7));
        assert!(0i32.within(7));
        assert!(!(-1i32).within(7));
        assert!(!8u8.within(7));
        assert!(7.5f64.within(8.0));
        assert!(!f64::NAN.within(8.0));
        assert!(!(-0.25f32).within(8.0));
    }
}
