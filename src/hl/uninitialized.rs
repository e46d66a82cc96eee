use crate::{
    bus::Bus,
    configs::{FrequencyBank, PhaseBank, PowerUpConfig},
    ll::{self, CommandCode},
    ControlRegisters, Error, AD9832,
};

/// An AD9832 the driver hasn't attached to yet
///
/// Calling "init" will give us an actual AD9832 that can have methods called
/// on it.
pub struct UninitializedAD9832<B> {
    ll: ll::AD9832<B>,
}

impl<B> UninitializedAD9832<B>
where
    B: Bus,
{
    /// Create a new instance of `UninitializedAD9832`
    ///
    /// Requires the bus that is connected to the AD9832.
    pub fn new(bus: B) -> Self {
        UninitializedAD9832 {
            ll: ll::AD9832::new(bus),
        }
    }

    /// Get the low-level interface to the uninitialized AD9832
    pub fn ll(&mut self) -> &mut ll::AD9832<B> {
        &mut self.ll
    }

    /// Attach to the AD9832
    ///
    /// Puts the chip to sleep with its phase accumulator held in reset, then
    /// loads both frequency registers and all four phase registers from
    /// `config`. The output stays off until
    /// [`AD9832::set_output_enabled`] is called.
    ///
    /// Fails with [`Error::OutOfRange`] if a phase in `config` doesn't fit in
    /// 12 bits. The registers before it have been written by then.
    pub fn init(mut self, config: &PowerUpConfig) -> Result<AD9832<B>, Error<B::Error>> {
        let control = ControlRegisters::new();

        self.ll
            .write_control(CommandCode::EnableControl, control.output_control)
            .map_err(Error::Bus)?;

        for (bank, &value) in FrequencyBank::ALL.iter().zip(config.frequencies.iter()) {
            self.ll
                .write_frequency(bank.base_address(), value)
                .map_err(Error::Bus)?;
        }

        for (bank, &value) in PhaseBank::ALL.iter().zip(config.phases.iter()) {
            let bytes = ll::split_phase(value, bank.base_address())?;
            self.ll
                .transmit(ll::encode_all(bytes))
                .map_err(Error::Bus)?;
        }

        Ok(AD9832 {
            ll: self.ll,
            control,
        })
    }
}
