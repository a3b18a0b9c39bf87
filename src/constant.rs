use std::fmt::Debug;
use std::hash::Hash;

use crate::util::Bits;

/// Bit layout of one IEEE-754 binary interchange format.
///
/// Implementors only supply the two field widths, the bias, the storage
/// integer and the native type. Everything else is derived here so the three
/// precisions cannot drift apart.
pub trait FloatFormat: Copy + Eq + Hash + Debug {
    /// The platform floating point type of this width.
    type Native: Copy;
    /// Unsigned integer with the same width as `Native`.
    type Bits: Bits;

    const EXPONENT_BIT_LENGTH: u32;
    const MANTISSA_BIT_LENGTH: u32;
    /// Literal exponent that represents `2^0`.
    const EXPONENT_BIAS: u16;

    /// Reserved literal exponent of infinities and NaNs.
    const MAX_LITERAL_EXPONENT: u16 = ((1u32 << Self::EXPONENT_BIT_LENGTH) - 1) as u16;
    const MAX_FINITE_LITERAL_EXPONENT: u16 = Self::MAX_LITERAL_EXPONENT - 1;

    /// Exponent shared by zero, subnormals and the smallest normal binade.
    const MIN_LOGICAL_EXPONENT: i32 =
        1 - Self::EXPONENT_BIAS as i32 - Self::MANTISSA_BIT_LENGTH as i32;
    const MAX_FINITE_LOGICAL_EXPONENT: i32 = Self::MAX_FINITE_LITERAL_EXPONENT as i32
        - Self::EXPONENT_BIAS as i32
        - Self::MANTISSA_BIT_LENGTH as i32;
    /// Only non-finite values carry this logical exponent.
    const MAX_LOGICAL_EXPONENT: i32 = Self::MAX_LITERAL_EXPONENT as i32
        - Self::EXPONENT_BIAS as i32
        - Self::MANTISSA_BIT_LENGTH as i32;

    fn to_bits(v: Self::Native) -> Self::Bits;
    fn from_bits(bits: Self::Bits) -> Self::Native;

    /// The implied leading one of a normal significand.
    fn implicit_mantissa_bit() -> Self::Bits {
        Self::Bits::ONE << Self::MANTISSA_BIT_LENGTH
    }

    fn max_literal_mantissa() -> Self::Bits {
        Self::implicit_mantissa_bit() - Self::Bits::ONE
    }

    fn max_logical_mantissa() -> Self::Bits {
        Self::max_literal_mantissa() | Self::implicit_mantissa_bit()
    }

    fn sign_bit() -> Self::Bits {
        Self::Bits::ONE << (Self::EXPONENT_BIT_LENGTH + Self::MANTISSA_BIT_LENGTH)
    }
}

macro_rules! float_format {
    ($(#[$attr:meta])* $name:ident, $native:ty, $bits:ty, exp: $exp:expr, sig: $sig:expr, bias: $bias:expr) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {}

        impl FloatFormat for $name {
            type Native = $native;
            type Bits = $bits;

            const EXPONENT_BIT_LENGTH: u32 = $exp;
            const MANTISSA_BIT_LENGTH: u32 = $sig;
            const EXPONENT_BIAS: u16 = $bias;

            fn to_bits(v: $native) -> $bits { v.to_bits() }
            fn from_bits(bits: $bits) -> $native { <$native>::from_bits(bits) }
        }
    };
}

#[cfg(feature = "f16")]
float_format! {
    /// IEEE-754 binary16, stored in [`half::f16`].
    Binary16, half::f16, u16, exp: 5, sig: 10, bias: 15
}

float_format! {
    /// IEEE-754 binary32 (`f32`).
    Binary32, f32, u32, exp: 8, sig: 23, bias: 127
}

float_format! {
    /// IEEE-754 binary64 (`f64`).
    Binary64, f64, u64, exp: 11, sig: 52, bias: 1023
}
