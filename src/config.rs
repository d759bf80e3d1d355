use miniconf::Tree;
use serde::{Deserialize, Serialize};

use crate::{Mash, MashError, Order, Word};

/// Modulator settings
///
/// ```
/// # use mash::{Mash, MashConfig, Order};
/// let c = MashConfig { order: Order::Third, width: 24 };
/// let d = Mash::<u32>::try_from(&c).unwrap();
/// assert_eq!(d.max(), (1 << 24) - 1);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Tree)]
pub struct MashConfig {
    /// Number of cascaded accumulator stages
    #[tree(with=miniconf::leaf)]
    pub order: Order,
    /// Accumulator word width in bits
    pub width: u32,
}

impl Default for MashConfig {
    fn default() -> Self {
        Self {
            order: Order::default(),
            width: 24,
        }
    }
}

impl<T: Word> TryFrom<&MashConfig> for Mash<T> {
    type Error = MashError;

    fn try_from(value: &MashConfig) -> Result<Self, Self::Error> {
        Self::new(value.order, value.width)
    }
}
