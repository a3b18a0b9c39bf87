use std::fmt::{Binary, Debug, LowerHex};
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, Not, Shl, Shr, Sub};

use either::Either;

/// Unsigned storage integer of a floating point format.
pub trait Bits:
    Copy
    + Eq
    + Ord
    + Hash
    + Debug
    + Binary
    + LowerHex
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
    + Sub<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    const WIDTH: u32;

    fn count_trailing_zeros(self) -> u32;

    /// Widens a literal exponent into the storage type.
    fn from_exponent(exp: u16) -> Self;

    /// Truncates to the low 16 bits. Only called on already-masked exponents.
    fn low_u16(self) -> u16;

    fn as_u64(self) -> u64;
}

impl Bits for u16 {
    const ZERO: u16 = 0;
    const ONE: u16 = 1;
    const WIDTH: u32 = 16;

    fn count_trailing_zeros(self) -> u32 { self.trailing_zeros() }
    fn from_exponent(exp: u16) -> u16 { exp }
    fn low_u16(self) -> u16 { self }
    fn as_u64(self) -> u64 { u64::from(self) }
}

impl Bits for u32 {
    const ZERO: u32 = 0;
    const ONE: u32 = 1;
    const WIDTH: u32 = 32;

    fn count_trailing_zeros(self) -> u32 { self.trailing_zeros() }
    fn from_exponent(exp: u16) -> u32 { u32::from(exp) }
    fn low_u16(self) -> u16 { self as u16 }
    fn as_u64(self) -> u64 { u64::from(self) }
}

impl Bits for u64 {
    const ZERO: u64 = 0;
    const ONE: u64 = 1;
    const WIDTH: u32 = 64;

    fn count_trailing_zeros(self) -> u32 { self.trailing_zeros() }
    fn from_exponent(exp: u16) -> u64 { u64::from(exp) }
    fn low_u16(self) -> u16 { self as u16 }
    fn as_u64(self) -> u64 { self }
}

/// Number of trailing zero bits of `sig`, 0 when `sig` is 0.
pub(crate) fn normalization_shift<B: Bits>(sig: B) -> u32 {
    if sig == B::ZERO {
        0
    } else {
        sig.count_trailing_zeros()
    }
}

/// Strips trailing zeros from `sig`, moving them into `exp`.
///
/// A zero significand has no trailing one to stop at, so it comes back on
/// the left as the canonical `(0, 0)` pair whatever `exp` was.
pub(crate) fn normalize<B: Bits>(exp: i32, sig: B) -> Either<(i32, B), (i32, B)> {
    if sig == B::ZERO {
        return Either::Left((0, B::ZERO));
    }

    let shamt = normalization_shift(sig);
    Either::Right((exp + shamt as i32, sig >> shamt))
}
