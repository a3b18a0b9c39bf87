use thiserror::Error;

/// Rejected field values passed to [`FloatComponents::new`](crate::FloatComponents::new).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentError {
    #[error("literal exponent {exponent} exceeds the {max} maximum of this format")]
    ExponentOutOfRange { exponent: u16, max: u16 },

    #[error("literal mantissa {mantissa:#x} exceeds the {max:#x} maximum of this format")]
    MantissaOutOfRange { mantissa: u64, max: u64 },
}

pub type Result<T> = std::result::Result<T, ComponentError>;
