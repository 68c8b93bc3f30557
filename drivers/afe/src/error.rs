use core::fmt;

const EINVAL: i32 = 22;
const ENOTSUP: i32 = 95;

/// Errors returned by platform resolvers and the generic driver.
///
/// A channel without a merge unit is not an error; see
/// [`AfePlatform::found_cm`](crate::AfePlatform::found_cm).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AfeError {
    /// No entry in the platform's rate table matches this rate in Hz.
    RateNotSupported(u32),
    /// Memif index outside the platform's memif table.
    InvalidMemif(usize),
    /// Channel-merge index outside the platform's CM table.
    InvalidCm(usize),
    /// Channel count the memif cannot carry.
    InvalidChannels(u32),
    /// Sample width in bits the memif cannot carry.
    InvalidFormat(u32),
    /// Empty buffer, or a buffer that does not fit the address registers.
    InvalidBuffer,
    /// Value does not fit in the field's mask.
    FieldOverflow { reg: u32, value: u32 },
    /// The memif has no register for this field.
    NoSuchField(&'static str),
}

impl AfeError {
    /// Negative errno for callers that still speak return codes.
    pub fn errno(&self) -> i32 {
        match self {
            AfeError::NoSuchField(_) => -ENOTSUP,
            _ => -EINVAL,
        }
    }
}

impl fmt::Display for AfeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AfeError::RateNotSupported(rate) => write!(f, "sample rate {} Hz not supported", rate),
            AfeError::InvalidMemif(id) => write!(f, "no memif with index {}", id),
            AfeError::InvalidCm(id) => write!(f, "no channel-merge unit with index {}", id),
            AfeError::InvalidChannels(ch) => write!(f, "unsupported channel count {}", ch),
            AfeError::InvalidFormat(bits) => write!(f, "unsupported sample width {} bits", bits),
            AfeError::InvalidBuffer => write!(f, "buffer does not fit the memif address registers"),
            AfeError::FieldOverflow { reg, value } => {
                write!(f, "value {:#x} does not fit field in register {:#06x}", value, reg)
            }
            AfeError::NoSuchField(name) => write!(f, "memif has no {} field", name),
        }
    }
}

impl core::error::Error for AfeError {}
