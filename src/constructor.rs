use std::marker::PhantomData;

use log::trace;

use crate::{Bits, ComponentError, FloatComponents, FloatFormat, Result};

impl<T: FloatFormat> FloatComponents<T> {
    /// Builds components from explicit literal fields.
    ///
    /// Fails if either field does not fit its width. No other combination is
    /// rejected: reserved exponents and any NaN payload are accepted as is.
    pub fn new(sign: bool, exp: u16, sig: T::Bits) -> Result<Self> {
        if exp > T::MAX_LITERAL_EXPONENT {
            trace!("rejected literal exponent {} (max {})", exp, T::MAX_LITERAL_EXPONENT);
            return Err(ComponentError::ExponentOutOfRange {
                exponent: exp,
                max: T::MAX_LITERAL_EXPONENT,
            });
        }

        if sig > T::max_literal_mantissa() {
            trace!("rejected literal mantissa {:#x} (max {:#x})", sig, T::max_literal_mantissa());
            return Err(ComponentError::MantissaOutOfRange {
                mantissa: sig.as_u64(),
                max: T::max_literal_mantissa().as_u64(),
            });
        }

        trace!("components from fields: sign={} exp={} sig={:#x}", sign, exp, sig);
        Ok(Self::from_fields(sign, exp, sig))
    }

    /// Splits a raw bit pattern. Every pattern is valid.
    pub fn from_bits(bits: T::Bits) -> Self {
        let sign = (bits & T::sign_bit()) != T::Bits::ZERO;
        let exp = (bits >> T::MANTISSA_BIT_LENGTH).low_u16() & T::MAX_LITERAL_EXPONENT;
        let sig = bits & T::max_literal_mantissa();

        Self::from_fields(sign, exp, sig)
    }

    pub fn from_native(f: T::Native) -> Self {
        Self::from_bits(T::to_bits(f))
    }

    pub fn zero(sign: bool) -> Self {
        Self::from_fields(sign, 0, T::Bits::ZERO)
    }

    pub fn infinity(sign: bool) -> Self {
        Self::from_fields(sign, T::MAX_LITERAL_EXPONENT, T::Bits::ZERO)
    }

    /// The canonical quiet NaN: positive, only the top mantissa bit set.
    pub fn nan() -> Self {
        let quiet = T::Bits::ONE << (T::MANTISSA_BIT_LENGTH - 1);
        Self::from_fields(false, T::MAX_LITERAL_EXPONENT, quiet)
    }

    fn from_fields(sign: bool, exp: u16, sig: T::Bits) -> Self {
        FloatComponents {
            sign,
            exp,
            sig,
            format: PhantomData,
        }
    }
}
