use crate::{
    bus::Bus,
    configs::{FrequencyBank, PhaseBank, SyncSource},
    ll::{self, CommandCode},
    ControlRegisters, Error, AD9832,
};

impl<B> AD9832<B>
where
    B: Bus,
{
    /// Sets the frequency word of FREQ0 (`bank == 0`) or FREQ1 (`bank == 1`)
    ///
    /// Fails with [`Error::OutOfRange`] for any other bank, before anything is
    /// sent.
    pub fn set_frequency(&mut self, bank: u8, value: u32) -> Result<(), Error<B::Error>> {
        let bank = FrequencyBank::try_from(bank).map_err(|_| Error::OutOfRange)?;
        self.write_frequency(bank, value)
    }

    /// Sets the 12-bit phase word of PHASE0 to PHASE3
    ///
    /// Fails with [`Error::OutOfRange`] if `bank` is larger than 3 or `value`
    /// doesn't fit in 12 bits, before anything is sent.
    pub fn set_phase(&mut self, bank: u8, value: u16) -> Result<(), Error<B::Error>> {
        let bank = PhaseBank::try_from(bank).map_err(|_| Error::OutOfRange)?;
        self.write_phase(bank, value)
    }

    /// Writes a frequency word to one of the frequency registers
    pub fn write_frequency(
        &mut self,
        bank: FrequencyBank,
        value: u32,
    ) -> Result<(), Error<B::Error>> {
        self.ll
            .write_frequency(bank.base_address(), value)
            .map_err(Error::Bus)
    }

    /// Writes a phase word to one of the phase registers
    pub fn write_phase(&mut self, bank: PhaseBank, value: u16) -> Result<(), Error<B::Error>> {
        let bytes = ll::split_phase(value, bank.base_address())?;
        self.ll
            .transmit(ll::encode_all(bytes))
            .map_err(Error::Bus)
    }

    /// Starts (`true`) or stops (`false`) the output
    ///
    /// Stopping holds the phase accumulator in reset, but doesn't put the chip
    /// to sleep.
    pub fn set_output_enabled(&mut self, enabled: bool) -> Result<(), Error<B::Error>> {
        self.update_control(CommandCode::EnableControl, |control| {
            Ok(control.set_output_enabled(enabled))
        })
    }

    /// Makes FREQ1 (`true`) or FREQ0 (`false`) drive the output
    ///
    /// Only has an effect if the bank selection is taken from the command
    /// bits. See [`AD9832::select_sync_source`].
    pub fn select_frequency_bank(&mut self, select: bool) -> Result<(), Error<B::Error>> {
        self.update_control(CommandCode::BankSelect, |control| {
            Ok(control.select_frequency_bank(select))
        })
    }

    /// Makes one of PHASE0 to PHASE3 drive the output
    ///
    /// Fails with [`Error::OutOfRange`] if `bank` is larger than 3, before
    /// anything is sent.
    pub fn select_phase_bank(&mut self, bank: u8) -> Result<(), Error<B::Error>> {
        self.update_control(CommandCode::BankSelect, |control| {
            control.select_phase_bank(bank)
        })
    }

    /// Selects where the bank selection comes from
    ///
    /// `true` leaves SELSRC clear, `false` sets it.
    pub fn select_sync_source(&mut self, use_external: bool) -> Result<(), Error<B::Error>> {
        self.update_control(CommandCode::SyncSourceSelect, |control| {
            Ok(control.select_sync_source(use_external))
        })
    }

    /// Selects where the bank selection comes from
    pub fn write_sync_source(&mut self, source: SyncSource) -> Result<(), Error<B::Error>> {
        self.select_sync_source(source.is_external())
    }

    /// Syncs the bank selection pins to MCLK
    ///
    /// Only matters if the bank selection comes from the pins.
    pub fn set_mclk_sync(&mut self, sync: bool) -> Result<(), Error<B::Error>> {
        self.update_control(CommandCode::SyncSourceSelect, |control| {
            Ok(control.set_mclk_sync(sync))
        })
    }

    /// Merges a change into a copy of the control registers, sends the result
    /// and keeps the copy if sending worked
    fn update_control<F>(&mut self, code: CommandCode, f: F) -> Result<(), Error<B::Error>>
    where
        F: FnOnce(&mut ControlRegisters) -> Result<u16, ll::OutOfRange>,
    {
        let mut staged = self.control;
        let bits = f(&mut staged)?;

        self.ll.write_control(code, bits).map_err(Error::Bus)?;
        self.control = staged;

        Ok(())
    }
}

impl<B> AD9832<B> {
    /// The control register values last written to the chip
    pub fn control_registers(&self) -> &ControlRegisters {
        &self.control
    }

    /// Provides direct access to the word-level API
    ///
    /// Be aware that by using the word-level API, you can invalidate the copy
    /// of the control registers the high-level API keeps. Don't write control
    /// registers through it, unless you know what you're doing.
    pub fn ll(&mut self) -> &mut ll::AD9832<B> {
        &mut self.ll
    }

    /// Detach from the chip and give back the bus
    ///
    /// Nothing is sent. The chip keeps running with whatever it was last
    /// programmed with.
    pub fn release(self) -> B {
        self.ll.release()
    }
}
