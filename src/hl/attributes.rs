use crate::{
    bus::Bus,
    configs::{FrequencyBank, PhaseBank},
    util, Error, AD9832,
};

/// A setting that can be changed from text
///
/// Each variant corresponds to one control file of the Linux AD9832 driver.
/// Hosts that expose the chip through some textual interface can hand the
/// text straight to [`AD9832::store`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Attribute {
    /// `frequencywordN`: a 32-bit frequency word
    FrequencyWord(FrequencyBank),
    /// `phasewordN`: a 12-bit phase word
    PhaseWord(PhaseBank),
    /// `out_enable`: nonzero starts the output, zero stops it
    OutputEnable,
    /// `frequency_select`: 0 or 1
    FrequencySelect,
    /// `phase_select`: 0 to 3
    PhaseSelect,
    /// `select_source`: nonzero selects the external source
    SelectSource,
}

impl<B> AD9832<B>
where
    B: Bus,
{
    /// Parses `text` and applies it to `attribute`
    ///
    /// Numbers are parsed like the Linux `kstrtou*` functions do, see
    /// [`util::parse_u32`]. Text that doesn't parse into the attribute's type
    /// fails with [`Error::InvalidInput`], values that parse but aren't allowed
    /// fail with [`Error::OutOfRange`]. In both cases nothing is sent.
    ///
    /// [`util::parse_u32`]: ../util/fn.parse_u32.html
    pub fn store(&mut self, attribute: Attribute, text: &str) -> Result<(), Error<B::Error>> {
        match attribute {
            Attribute::FrequencyWord(bank) => {
                let value = util::parse_u32(text).ok_or(Error::InvalidInput)?;
                self.write_frequency(bank, value)
            }
            Attribute::PhaseWord(bank) => {
                let value = util::parse_u16(text).ok_or(Error::InvalidInput)?;
                self.write_phase(bank, value)
            }
            Attribute::OutputEnable => {
                let value = util::parse_u8(text).ok_or(Error::InvalidInput)?;
                self.set_output_enabled(value != 0)
            }
            Attribute::FrequencySelect => {
                let value = util::parse_u8(text).ok_or(Error::InvalidInput)?;
                match value {
                    0 => self.select_frequency_bank(false),
                    1 => self.select_frequency_bank(true),
                    _ => Err(Error::OutOfRange),
                }
            }
            Attribute::PhaseSelect => {
                let value = util::parse_u8(text).ok_or(Error::InvalidInput)?;
                self.select_phase_bank(value)
            }
            Attribute::SelectSource => {
                let value = util::parse_u8(text).ok_or(Error::InvalidInput)?;
                self.select_sync_source(value != 0)
            }
        }
    }
}
