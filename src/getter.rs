use crate::util;
use crate::{FloatComponents, FloatFormat};

/// A value written as `sign * mantissa * 2^exponent`.
///
/// The identity only holds for finite sources; the decomposition calls
/// return it next to a flag saying whether that was the case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LogicalParts<B> {
    /// `1` or `-1`.
    pub sign: i8,
    pub exponent: i32,
    pub mantissa: B,
}

impl<T: FloatFormat> FloatComponents<T> {
    pub fn is_negative(self) -> bool {
        self.sign
    }

    /// The biased exponent field, reserved values included.
    pub fn literal_exponent(self) -> u16 {
        self.exp
    }

    /// The fraction field, without any implicit bit.
    pub fn literal_mantissa(self) -> T::Bits {
        self.sig
    }

    pub fn logical_sign(self) -> i8 {
        if self.sign {
            -1
        } else {
            1
        }
    }

    /// Zero and subnormals use the exponent of the smallest normal binade.
    pub fn logical_exponent(self) -> i32 {
        let exp = if self.exp == 0 { 1 } else { i32::from(self.exp) };
        exp - (i32::from(T::EXPONENT_BIAS) + T::MANTISSA_BIT_LENGTH as i32)
    }

    /// The fraction with the implicit bit restored, unless the literal
    /// exponent is 0.
    pub fn logical_mantissa(self) -> T::Bits {
        if self.exp == 0 {
            self.sig
        } else {
            self.sig | T::implicit_mantissa_bit()
        }
    }

    /// Trailing zero bits of the logical mantissa, 0 for a zero mantissa.
    pub fn normalization_shift(self) -> u32 {
        util::normalization_shift(self.logical_mantissa())
    }

    /// Always 0 when the logical mantissa is 0, for both zero signs.
    pub fn normalized_logical_exponent(self) -> i32 {
        self.normalized().0
    }

    /// Odd, or 0.
    pub fn normalized_logical_mantissa(self) -> T::Bits {
        self.normalized().1
    }

    /// Returns the logical parts and whether the value was finite.
    ///
    /// ```
    /// use float_components::SingleComponents;
    ///
    /// let (parts, finite) = SingleComponents::from(0.75f32).decompose();
    /// assert!(finite);
    /// assert_eq!((parts.sign, parts.exponent, parts.mantissa), (1, -24, 0x00C0_0000));
    ///
    /// let (_, finite) = SingleComponents::from(f32::NAN).decompose();
    /// assert!(!finite);
    /// ```
    pub fn decompose(self) -> (LogicalParts<T::Bits>, bool) {
        let parts = LogicalParts {
            sign: self.logical_sign(),
            exponent: self.logical_exponent(),
            mantissa: self.logical_mantissa(),
        };

        (parts, self.is_finite())
    }

    /// Like [`decompose`](Self::decompose), with trailing zeros of the
    /// mantissa folded into the exponent.
    pub fn decompose_normalized(self) -> (LogicalParts<T::Bits>, bool) {
        let (exponent, mantissa) = self.normalized();
        let parts = LogicalParts {
            sign: self.logical_sign(),
            exponent,
            mantissa,
        };

        (parts, self.is_finite())
    }

    pub fn finite_parts(self) -> Option<LogicalParts<T::Bits>> {
        match self.decompose() {
            (parts, true) => Some(parts),
            (_, false) => None,
        }
    }

    pub fn finite_normalized_parts(self) -> Option<LogicalParts<T::Bits>> {
        match self.decompose_normalized() {
            (parts, true) => Some(parts),
            (_, false) => None,
        }
    }

    fn normalized(self) -> (i32, T::Bits) {
        util::normalize(self.logical_exponent(), self.logical_mantissa()).into_inner()
    }
}
