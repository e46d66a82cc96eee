//! Configuration structs for attaching to the chip
//!
//! This module houses the datastructures that describe what the AD9832 is
//! programmed with when the driver attaches to it, and the register banks the
//! high-level operations refer to.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::ll;

/// Values written to the chip when the driver attaches to it
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerUpConfig {
    /// Frequency words for FREQ0 and FREQ1
    ///
    /// These are raw tuning words, not frequencies in Hz. See
    /// [`util::frequency_word`] for the conversion.
    ///
    /// [`util::frequency_word`]: ../util/fn.frequency_word.html
    pub frequencies: [u32; 2],
    /// Phase words for PHASE0 to PHASE3. Only the lower 12 bits are allowed.
    pub phases: [u16; 4],
}

impl Default for PowerUpConfig {
    fn default() -> Self {
        PowerUpConfig {
            frequencies: [10_000_000, 11_000_000],
            phases: [0; 4],
        }
    }
}

/// One of the two frequency registers
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize,
)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FrequencyBank {
    /// FREQ0
    Freq0 = 0,
    /// FREQ1
    Freq1 = 1,
}

impl FrequencyBank {
    /// All frequency banks, in register order
    pub const ALL: [FrequencyBank; 2] = [FrequencyBank::Freq0, FrequencyBank::Freq1];

    /// Address of the register holding the most significant byte
    pub fn base_address(&self) -> u8 {
        match self {
            FrequencyBank::Freq0 => ll::FREQ0_HM,
            FrequencyBank::Freq1 => ll::FREQ1_HM,
        }
    }
}

/// One of the four phase registers
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize,
)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PhaseBank {
    /// PHASE0
    Phase0 = 0,
    /// PHASE1
    Phase1 = 1,
    /// PHASE2
    Phase2 = 2,
    /// PHASE3
    Phase3 = 3,
}

impl PhaseBank {
    /// All phase banks, in register order
    pub const ALL: [PhaseBank; 4] = [
        PhaseBank::Phase0,
        PhaseBank::Phase1,
        PhaseBank::Phase2,
        PhaseBank::Phase3,
    ];

    /// Address of the register holding the upper 4 bits
    pub fn base_address(&self) -> u8 {
        match self {
            PhaseBank::Phase0 => ll::PHASE0_H,
            PhaseBank::Phase1 => ll::PHASE1_H,
            PhaseBank::Phase2 => ll::PHASE2_H,
            PhaseBank::Phase3 => ll::PHASE3_H,
        }
    }
}

/// Where the frequency and phase register selection comes from
///
/// The SELSRC bit is clear for [`SyncSource::External`] and set for
/// [`SyncSource::Internal`].
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize,
)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SyncSource {
    /// SELSRC set
    Internal = 0,
    /// SELSRC clear
    External = 1,
}

impl SyncSource {
    /// Whether this is [`SyncSource::External`]
    pub fn is_external(&self) -> bool {
        *self == SyncSource::External
    }
}

impl From<bool> for SyncSource {
    fn from(use_external: bool) -> Self {
        if use_external {
            SyncSource::External
        }
        else {
            SyncSource::Internal
        }
    }
}
