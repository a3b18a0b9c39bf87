//! Sign, exponent and mantissa fields of IEEE-754 binary floating point values.
//!
//! [`FloatComponents`] splits a native float into its three literal bit
//! fields and packs them back without loss. On top of the literal fields it
//! derives the logical view (bias removed, implicit bit restored) and the
//! normalized view (trailing zeros of the mantissa moved into the exponent).
//!
//! ```
//! use float_components::SingleComponents;
//!
//! let c = SingleComponents::from(-6.0f32);
//! assert!(c.is_negative());
//! assert_eq!(c.literal_exponent(), 129);
//! assert_eq!(c.normalized_logical_exponent(), 1);
//! assert_eq!(c.normalized_logical_mantissa(), 3);
//! assert_eq!(c.to_float().to_bits(), (-6.0f32).to_bits());
//! ```

mod constant;
mod constructor;
mod error;
mod format;
mod getter;
mod util;

use std::fmt;
use std::marker::PhantomData;

pub use constant::{Binary32, Binary64, FloatFormat};
#[cfg(feature = "f16")]
pub use constant::Binary16;
pub use error::{ComponentError, Result};
pub use format::FloatCategory;
pub use getter::LogicalParts;
pub use util::Bits;

/// The literal fields of one floating point value of format `T`.
///
/// Equality and hashing are structural, so `+0` and `-0` differ and every
/// NaN payload is its own value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloatComponents<T: FloatFormat> {
    sign: bool,
    exp: u16,
    sig: T::Bits,
    format: PhantomData<T>,
}

#[cfg(feature = "f16")]
pub type HalfComponents = FloatComponents<Binary16>;
pub type SingleComponents = FloatComponents<Binary32>;
pub type DoubleComponents = FloatComponents<Binary64>;

impl<T: FloatFormat> FloatComponents<T> {
    /// Packs the fields back into the native bit layout.
    pub fn to_bits(self) -> T::Bits {
        let sign = if self.sign { T::sign_bit() } else { T::Bits::ZERO };
        let exp = T::Bits::from_exponent(self.exp) << T::MANTISSA_BIT_LENGTH;

        sign | exp | self.sig
    }

    pub fn to_native(self) -> T::Native {
        T::from_bits(self.to_bits())
    }
}

#[cfg(feature = "f16")]
impl FloatComponents<Binary16> {
    pub fn to_half(self) -> half::f16 {
        self.to_native()
    }
}

impl FloatComponents<Binary32> {
    pub fn to_float(self) -> f32 {
        self.to_native()
    }
}

impl FloatComponents<Binary64> {
    pub fn to_double(self) -> f64 {
        self.to_native()
    }
}

macro_rules! native_conversions {
    ($format:ty, $native:ty) => {
        impl From<$native> for FloatComponents<$format> {
            fn from(f: $native) -> FloatComponents<$format> {
                FloatComponents::from_native(f)
            }
        }

        impl From<FloatComponents<$format>> for $native {
            fn from(c: FloatComponents<$format>) -> $native {
                c.to_native()
            }
        }
    };
}

#[cfg(feature = "f16")]
native_conversions!(Binary16, half::f16);
native_conversions!(Binary32, f32);
native_conversions!(Binary64, f64);

impl<T: FloatFormat> fmt::Debug for FloatComponents<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FloatComponents")
            .field("is_negative", &self.sign)
            .field("literal_exponent", &self.exp)
            .field("literal_mantissa", &format_args!("{:#x}", self.sig))
            .finish()
    }
}

impl<T: FloatFormat> fmt::Binary for FloatComponents<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.to_bits(), width = T::Bits::WIDTH as usize)
    }
}

#[cfg(test)]
mod test {
    use crate::{DoubleComponents, SingleComponents};

    #[test]
    fn round_trip_keeps_bits() {
        let values = [
            0.0f32,
            -0.0,
            1.0,
            -1.5,
            f32::MAX,
            f32::MIN,
            f32::MIN_POSITIVE,
            f32::from_bits(1),
            f32::from_bits(0x8000_0001),
            f32::INFINITY,
            f32::NEG_INFINITY,
            f32::NAN,
            f32::from_bits(0x7F80_0001),
            f32::from_bits(0xFFC0_1234),
        ];

        for &v in values.iter() {
            let c = SingleComponents::from(v);
            assert_eq!(c.to_float().to_bits(), v.to_bits(), "{:?}", c);
            assert_eq!(f32::from(c).to_bits(), v.to_bits());
        }
    }

    #[test]
    fn to_bits_places_fields() {
        let c = DoubleComponents::from(-2.0f64);
        assert_eq!(c.to_bits(), 0xC000_0000_0000_0000);
    }

    #[test]
    fn binary_is_zero_padded() {
        let c = SingleComponents::from(1.0f32);
        assert_eq!(format!("{:b}", c), "00111111100000000000000000000000");
    }

    #[test]
    fn debug_lists_literal_fields() {
        let c = SingleComponents::from(-1.5f32);
        assert_eq!(
            format!("{:?}", c),
            "FloatComponents { is_negative: true, literal_exponent: 127, literal_mantissa: 0x400000 }"
        );
    }
}
