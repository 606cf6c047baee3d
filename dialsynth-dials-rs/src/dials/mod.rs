//! Bounded synthesizer dials addressed by an enumerated identifier.
//!
//! This module provides the [`DialBank`] data structure that holds the
//! state of every dial on screen, plus the static [`DIALS`] descriptor
//! table it is built from.
//!
//! # Architecture
//!
//! The dial set is closed and known at compile time. Each dial is
//! addressed by a [`DialId`] whose discriminant is also its slot in the
//! bank, its position on screen and its position in the selection cycle:
//!
//! ```text
//! Row 0: [frequency] [volume] [sustain] [distort]
//! Row 1: [attack]    [decay]  [hold]    [release]
//! Row 2: [reverb]    [bend]   [noise]
//! ```
//!
//! # Clamping
//!
//! Every mutation goes through [`Dial::adjust()`], which saturates the
//! result into `[min, max]`. Out-of-range deltas are absorbed silently;
//! there is no error path for numeric adjustment.
//!
//! # `no_std` Compatibility
//!
//! No heap allocation. Storage is a fixed-size array of [`N_DIALS`]
//! entries. The optional `defmt` feature enables structured logging for
//! embedded targets.

mod bank;
mod dial;
mod error;

use core::str::FromStr;

pub use bank::DialBank;
pub use dial::{Dial, DialDescriptor};
pub use error::DialError;

/// Number of dials on screen.
pub const N_DIALS: usize = 11;

/// Identifier of each dial, in screen and selection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DialId {
    Frequency,
    Volume,
    Sustain,
    Distort,
    Attack,
    Decay,
    Hold,
    Release,
    Reverb,
    Bend,
    Noise,
}

impl DialId {
    /// Every identifier, ordered by slot index.
    pub const ALL: [DialId; N_DIALS] = [
        DialId::Frequency,
        DialId::Volume,
        DialId::Sustain,
        DialId::Distort,
        DialId::Attack,
        DialId::Decay,
        DialId::Hold,
        DialId::Release,
        DialId::Reverb,
        DialId::Bend,
        DialId::Noise,
    ];

    /// Slot of this dial in [`DIALS`] and [`DialBank`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the identifier stored at `index`, or `None` if
    /// `index >= N_DIALS`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Looks a dial up by its display name (e.g. `"frequency"`).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.name() == name)
    }

    /// Static descriptor for this dial.
    pub fn descriptor(self) -> &'static DialDescriptor {
        &DIALS[self.index()]
    }

    /// Display name, as drawn under the knob.
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }
}

impl TryFrom<usize> for DialId {
    type Error = DialError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(DialError::InvalidDialIndex)
    }
}

impl FromStr for DialId {
    type Err = DialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or(DialError::UnknownDialName)
    }
}

/// Descriptor table, indexed by [`DialId::index()`].
///
/// **Invariant:** entry `i` describes `DialId::ALL[i]`, and every entry
/// satisfies `min <= default <= max` with a positive `step`.
pub static DIALS: [DialDescriptor; N_DIALS] = [
    DialDescriptor::new("frequency", "hz", 0, 8000, 440, 5),
    DialDescriptor::new("volume", "%", 0, 100, 100, 1),
    DialDescriptor::new("sustain", "%", 0, 100, 80, 1),
    DialDescriptor::new("distort", "%", 0, 100, 0, 1),
    DialDescriptor::new("attack", "ms", 0, 1000, 100, 5),
    DialDescriptor::new("decay", "ms", 0, 1000, 50, 5),
    DialDescriptor::new("hold", "ms", 0, 1000, 500, 5),
    DialDescriptor::new("release", "ms", 0, 1000, 250, 5),
    DialDescriptor::new("reverb", "ms", 0, 2000, 0, 5),
    DialDescriptor::new("bend", "hz", 0, 100, 0, 1),
    DialDescriptor::new("noise", "%", 0, 100, 0, 1),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_table_is_well_formed() {
        for desc in &DIALS {
            assert!(desc.min < desc.max, "{} has an empty range", desc.name);
            assert!(
                (desc.min..=desc.max).contains(&desc.default),
                "{} default out of range",
                desc.name
            );
            assert!(desc.step > 0, "{} has a non-positive step", desc.name);
        }
    }

    #[test]
    fn ids_match_table_order() {
        for (i, id) in DialId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
            assert_eq!(DialId::from_index(i), Some(*id));
        }
        assert_eq!(DialId::Frequency.name(), "frequency");
        assert_eq!(DialId::Noise.name(), "noise");
    }

    #[test]
    fn names_are_unique() {
        for a in DialId::ALL {
            for b in DialId::ALL {
                if a != b {
                    assert_ne!(a.name(), b.name());
                }
            }
        }
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(DialId::from_name("release"), Some(DialId::Release));
        assert_eq!(DialId::from_name("Release"), None);
        assert_eq!(DialId::from_name("cutoff"), None);

        assert_eq!("bend".parse::<DialId>(), Ok(DialId::Bend));
        assert_eq!("".parse::<DialId>(), Err(DialError::UnknownDialName));
    }

    #[test]
    fn lookup_by_index_out_of_bounds() {
        assert_eq!(DialId::from_index(N_DIALS), None);
        assert_eq!(DialId::try_from(N_DIALS), Err(DialError::InvalidDialIndex));
        assert_eq!(DialId::try_from(3), Ok(DialId::Distort));
    }
}
