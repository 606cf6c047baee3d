/// Errors that can occur when addressing dials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DialError {
    /// Dial index is out of bounds (must be < N_DIALS).
    InvalidDialIndex,
    /// No dial carries the requested name.
    UnknownDialName,
}

impl core::fmt::Display for DialError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            DialError::InvalidDialIndex => write!(f, "Invalid dial index"),
            DialError::UnknownDialName => write!(f, "Unknown dial name"),
        }
    }
}
