use crate::ll::OutOfRange;

/// Puts the chip to sleep (enable control)
pub const SLEEP: u16 = 1 << 13;
/// Holds the phase accumulator in reset (enable control)
pub const RESET: u16 = 1 << 12;
/// Clears the phase accumulator (enable control)
pub const CLR: u16 = 1 << 11;

/// Selects FREQ1 instead of FREQ0 (bank select)
pub const FREQ: u16 = 1 << 11;
/// Mask of the phase register field (bank select)
pub const PHASE_MASK: u16 = phase(3);

/// Syncs the bank select pins to MCLK (sync source)
pub const SYNC: u16 = 1 << 13;
/// Takes the bank selection from the command bits instead of the pins
/// (sync source)
pub const SELSRC: u16 = 1 << 12;

/// Bank select bits for phase register `n`
pub const fn phase(n: u8) -> u16 {
    ((n & 3) as u16) << 9
}

/// The driver's copy of the chip's control registers
///
/// The control registers are write-only, so the driver has to remember what it
/// wrote to merge later changes into. Every method here changes only the bits
/// it's about and returns the complete new register value, ready to be sent
/// with [`ll::encode_control`]. Nothing is sent from here.
///
/// [`ll::encode_control`]: ../../ll/fn.encode_control.html
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlRegisters {
    /// Sleep, reset and clear bits
    pub output_control: u16,
    /// Frequency and phase register selection
    pub bank_select: u16,
    /// Bank selection source
    pub sync_source: u16,
}

impl ControlRegisters {
    /// The chip as the driver leaves it right after attaching: asleep, reset
    /// and cleared, with FREQ0 and PHASE0 selected
    pub const fn new() -> Self {
        ControlRegisters {
            output_control: SLEEP | RESET | CLR,
            bank_select: 0,
            sync_source: 0,
        }
    }

    /// Enables or disables the output
    ///
    /// Enabling clears the sleep, reset and clear bits. Disabling only sets
    /// the reset bit, which silences the output but keeps the chip awake.
    pub fn set_output_enabled(&mut self, enabled: bool) -> u16 {
        if enabled {
            self.output_control &= !(RESET | SLEEP | CLR);
        }
        else {
            self.output_control |= RESET;
        }

        self.output_control
    }

    /// Selects FREQ1 (`true`) or FREQ0 (`false`)
    pub fn select_frequency_bank(&mut self, select: bool) -> u16 {
        if select {
            self.bank_select |= FREQ;
        }
        else {
            self.bank_select &= !FREQ;
        }

        self.bank_select
    }

    /// Selects one of PHASE0 to PHASE3
    pub fn select_phase_bank(&mut self, bank: u8) -> Result<u16, OutOfRange> {
        if bank > 3 {
            return Err(OutOfRange);
        }

        self.bank_select &= !PHASE_MASK;
        self.bank_select |= phase(bank);

        Ok(self.bank_select)
    }

    /// Selects where the bank selection comes from
    ///
    /// `use_external == true` clears SELSRC. The bit is set for the other
    /// case.
    pub fn select_sync_source(&mut self, use_external: bool) -> u16 {
        if use_external {
            self.sync_source &= !SELSRC;
        }
        else {
            self.sync_source |= SELSRC;
        }

        self.sync_source
    }

    /// Syncs the bank selection pins to MCLK (`true`) or samples them
    /// directly (`false`)
    ///
    /// Leaves SELSRC as it is.
    pub fn set_mclk_sync(&mut self, sync: bool) -> u16 {
        if sync {
            self.sync_source |= SYNC;
        }
        else {
            self.sync_source &= !SYNC;
        }

        self.sync_source
    }

    /// Whether the output is running
    pub fn output_enabled(&self) -> bool {
        self.output_control & (SLEEP | RESET | CLR) == 0
    }
}

impl Default for ControlRegisters {
    fn default() -> Self {
        Self::new()
    }
}
