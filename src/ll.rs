//! Low-level interface to the AD9832
//!
//! This module implements the word-level protocol of the AD9832/AD9835. Users
//! of this library should typically not need to use this. Please consider
//! using the [high-level interface] instead.
//!
//! Every write to the chip is a 16-bit command word. The upper 4 bits select
//! the command, the next 4 bits the register address, and the lower 8 bits
//! carry one byte of data. The control commands only need the upper 2 or 3
//! bits to identify themselves; everything below is a flag field.
//!
//! Frequency and phase values don't fit in one word. They are split into one
//! byte per register, highest address first, and sent as one sequence with
//! chip select held between the words. The chip only transfers the value from
//! its deferred register into the target once the final word arrives.
//!
//! [high-level interface]: ../hl/index.html

use core::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::bus::Bus;

/// Position of the command code within a command word
pub const CMD_SHIFT: u16 = 12;

/// Position of the register address within a command word
pub const ADD_SHIFT: u16 = 8;

/// Number of significant bits in a phase value
pub const PHASE_BITS: u32 = 12;

/// Smallest phase value that no longer fits in a phase register
pub const PHASE_LIMIT: u16 = 1 << PHASE_BITS;

/// FREQ0 register, bits 7-0
pub const FREQ0_LL: u8 = 0x0;
/// FREQ0 register, bits 15-8
pub const FREQ0_HL: u8 = 0x1;
/// FREQ0 register, bits 23-16
pub const FREQ0_LM: u8 = 0x2;
/// FREQ0 register, bits 31-24
pub const FREQ0_HM: u8 = 0x3;
/// FREQ1 register, bits 7-0
pub const FREQ1_LL: u8 = 0x4;
/// FREQ1 register, bits 15-8
pub const FREQ1_HL: u8 = 0x5;
/// FREQ1 register, bits 23-16
pub const FREQ1_LM: u8 = 0x6;
/// FREQ1 register, bits 31-24
pub const FREQ1_HM: u8 = 0x7;
/// PHASE0 register, bits 7-0
pub const PHASE0_L: u8 = 0x8;
/// PHASE0 register, bits 11-8
pub const PHASE0_H: u8 = 0x9;
/// PHASE1 register, bits 7-0
pub const PHASE1_L: u8 = 0xA;
/// PHASE1 register, bits 11-8
pub const PHASE1_H: u8 = 0xB;
/// PHASE2 register, bits 7-0
pub const PHASE2_L: u8 = 0xC;
/// PHASE2 register, bits 11-8
pub const PHASE2_H: u8 = 0xD;
/// PHASE3 register, bits 7-0
pub const PHASE3_L: u8 = 0xE;
/// PHASE3 register, bits 11-8
pub const PHASE3_H: u8 = 0xF;

/// The command field of a command word
///
/// The 8-bit and 16-bit variants of the frequency and phase writes both
/// transfer a single byte. They differ in what the chip does with it: the
/// 8-bit variant only loads the deferred register, the 16-bit variant also
/// moves the deferred register into the destination. Sequences alternate
/// between the two and must keep doing so.
#[derive(Copy, Clone, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum CommandCode {
    /// 16-bit phase write
    Phase16 = 0x0,
    /// 8-bit phase write
    Phase8 = 0x1,
    /// 16-bit frequency write
    Frequency16 = 0x2,
    /// 8-bit frequency write
    Frequency8 = 0x3,
    /// Select the active frequency and phase registers
    BankSelect = 0x6,
    /// Select the source of the bank selection and of the update sync
    SyncSourceSelect = 0x8,
    /// Sleep, reset and clear bits
    EnableControl = 0xC,
}

/// A single 16-bit word as it is shifted into the chip
#[derive(Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandWord(u16);

impl CommandWord {
    /// The raw value of the word
    pub fn bits(&self) -> u16 {
        self.0
    }

    /// The command this word carries
    ///
    /// Returns `None`, if the word doesn't start with a known command.
    pub fn code(&self) -> Option<CommandCode> {
        let nibble = (self.0 >> CMD_SHIFT) as u8;

        // Control commands are identified by a prefix, the flags follow
        // right after it.
        let code = match nibble {
            0xc..=0xf => 0xc,
            0x8..=0xb => 0x8,
            0x6..=0x7 => 0x6,
            _ => nibble,
        };

        CommandCode::try_from(code).ok()
    }

    /// The register address field
    ///
    /// Only meaningful for frequency and phase writes.
    pub fn address(&self) -> u8 {
        ((self.0 >> ADD_SHIFT) & 0xf) as u8
    }

    /// The data byte
    pub fn data(&self) -> u8 {
        self.0 as u8
    }
}

impl From<CommandWord> for u16 {
    fn from(word: CommandWord) -> Self {
        word.0
    }
}

impl fmt::Debug for CommandWord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CommandWord(0x{:04x})", self.0)
    }
}

/// One byte of a multi-word value, addressed to a single register
pub type RegisterByte = (CommandCode, u8, u8);

/// Packs a command, a register address and a data byte into a command word
///
/// Only the lower 4 bits of `address` are used.
pub fn encode_word(code: CommandCode, address: u8, byte: u8) -> CommandWord {
    let code: u8 = code.into();
    CommandWord(
        (code as u16) << CMD_SHIFT | ((address & 0xf) as u16) << ADD_SHIFT | byte as u16,
    )
}

/// Packs a control command and its flags into a command word
///
/// Used for the control commands, which don't address a register. `bits`
/// must only use the bits below the command's prefix, as the constants in
/// [`hl`] do.
///
/// [`hl`]: ../hl/index.html
pub fn encode_control(code: CommandCode, bits: u16) -> CommandWord {
    let code: u8 = code.into();
    CommandWord((code as u16) << CMD_SHIFT | bits)
}

/// Splits a 32-bit frequency word into the writes for its four registers
///
/// `base` is the address of the most significant byte. The result starts
/// there and walks down one address per byte.
pub fn split_frequency(value: u32, base: u8) -> [RegisterByte; 4] {
    let [b3, b2, b1, b0] = value.to_be_bytes();

    [
        (CommandCode::Frequency8, base, b3),
        (CommandCode::Frequency16, base.wrapping_sub(1), b2),
        (CommandCode::Frequency8, base.wrapping_sub(2), b1),
        (CommandCode::Frequency16, base.wrapping_sub(3), b0),
    ]
}

/// Splits a 12-bit phase value into the writes for its two registers
///
/// `base` is the address of the upper register. Returns `Err(OutOfRange)` if
/// `value` does not fit in 12 bits.
pub fn split_phase(value: u16, base: u8) -> Result<[RegisterByte; 2], OutOfRange> {
    if value >= PHASE_LIMIT {
        return Err(OutOfRange);
    }

    let [high, low] = value.to_be_bytes();

    Ok([
        (CommandCode::Phase8, base, high),
        (CommandCode::Phase16, base.wrapping_sub(1), low),
    ])
}

/// Turns a list of register writes into command words
pub fn encode_all<const N: usize>(bytes: [RegisterByte; N]) -> [CommandWord; N] {
    bytes.map(|(code, address, byte)| encode_word(code, address, byte))
}

/// A value was too large for the field it was meant for
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfRange;

/// Entry point to the AD9832 driver's low-level API
///
/// Please consider using [hl::AD9832] instead.
///
/// [hl::AD9832]: ../hl/struct.AD9832.html
pub struct AD9832<B> {
    bus: B,
}

impl<B> AD9832<B> {
    /// Create a new instance of `AD9832`
    ///
    /// Requires the bus that is connected to the AD9832.
    pub fn new(bus: B) -> Self {
        AD9832 { bus }
    }

    /// Gives back the bus
    pub fn release(self) -> B {
        self.bus
    }
}

impl<B> AD9832<B>
where
    B: Bus,
{
    /// Send a sequence of command words as one exchange
    ///
    /// Chip select is held after every word except the last one, so the chip
    /// sees the whole sequence as a single update. If the exchange fails, the
    /// error is passed through and nothing is retried. A failed multi-word
    /// write leaves the target register in an unknown state.
    pub fn transmit<const N: usize>(&mut self, words: [CommandWord; N]) -> Result<(), B::Error> {
        let raw = words.map(u16::from);

        let mut hold = [true; N];
        if let Some(last) = hold.last_mut() {
            *last = false;
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("ad9832: transmit {:x}", &raw[..]);

        self.bus.exchange(&raw, &hold)
    }

    /// Write a 32-bit frequency word, starting at register `base`
    pub fn write_frequency(&mut self, base: u8, value: u32) -> Result<(), B::Error> {
        self.transmit(encode_all(split_frequency(value, base)))
    }

    /// Write a control register
    pub fn write_control(&mut self, code: CommandCode, bits: u16) -> Result<(), B::Error> {
        self.transmit([encode_control(code, bits)])
    }
}

// Can't be derived without putting requirements on `B`.
impl<B> fmt::Debug for AD9832<B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "AD9832 {{ .. }}")
    }
}
