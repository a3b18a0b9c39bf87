use std::num::FpCategory;

use crate::{Bits, FloatComponents, FloatFormat};

/// The IEEE-754 class of a value. Exactly one applies to every bit pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FloatCategory {
    Zero,
    Subnormal,
    Normal,
    Infinity,
    Nan,
}

impl From<FloatCategory> for FpCategory {
    fn from(c: FloatCategory) -> FpCategory {
        match c {
            FloatCategory::Zero => FpCategory::Zero,
            FloatCategory::Subnormal => FpCategory::Subnormal,
            FloatCategory::Normal => FpCategory::Normal,
            FloatCategory::Infinity => FpCategory::Infinite,
            FloatCategory::Nan => FpCategory::Nan,
        }
    }
}

impl<T: FloatFormat> FloatComponents<T> {
    pub fn is_zero(self) -> bool {
        self.exp == 0 && self.sig == T::Bits::ZERO
    }

    pub fn is_subnormal(self) -> bool {
        self.exp == 0 && self.sig != T::Bits::ZERO
    }

    pub fn is_normal(self) -> bool {
        self.exp != 0 && self.exp != T::MAX_LITERAL_EXPONENT
    }

    pub fn is_infinity(self) -> bool {
        self.exp == T::MAX_LITERAL_EXPONENT && self.sig == T::Bits::ZERO
    }

    pub fn is_nan(self) -> bool {
        self.exp == T::MAX_LITERAL_EXPONENT && self.sig != T::Bits::ZERO
    }

    pub fn is_finite(self) -> bool {
        self.exp != T::MAX_LITERAL_EXPONENT
    }

    /// True for every value with a clear sign bit, `+0` and NaNs included.
    pub fn is_positive(self) -> bool {
        !self.sign
    }

    pub fn category(self) -> FloatCategory {
        match (self.exp, self.sig == T::Bits::ZERO) {
            (0, true) => FloatCategory::Zero,
            (0, false) => FloatCategory::Subnormal,
            (exp, true) if exp == T::MAX_LITERAL_EXPONENT => FloatCategory::Infinity,
            (exp, false) if exp == T::MAX_LITERAL_EXPONENT => FloatCategory::Nan,
            _ => FloatCategory::Normal,
        }
    }
}
