//! Connection between the driver and the physical serial link
//!
//! The driver only ever writes. All it needs from the link is the [`Bus`]
//! trait: send some words, and keep chip select asserted between the words
//! that belong together. [`SpiBus`] implements that on top of the
//! `embedded-hal` blocking SPI and output pin traits.

use core::fmt;

use embedded_hal::{blocking::spi, digital::v2::OutputPin};

/// A synchronous serial link that carries 16-bit words to the chip
pub trait Bus {
    /// The error that can occur during an exchange
    type Error;

    /// Send `words` in order, in one exchange
    ///
    /// `hold` has one flag per word. If a word's flag is set, chip select
    /// must stay asserted after that word, as the next word belongs to the
    /// same update. After a word with a clear flag, chip select is released.
    ///
    /// Blocks until all words are sent or an error occurs.
    fn exchange(&mut self, words: &[u16], hold: &[bool]) -> Result<(), Self::Error>;
}

impl<B> Bus for &mut B
where
    B: Bus + ?Sized,
{
    type Error = B::Error;

    fn exchange(&mut self, words: &[u16], hold: &[bool]) -> Result<(), Self::Error> {
        (**self).exchange(words, hold)
    }
}

/// [`Bus`] implementation for an SPI peripheral and a chip select pin
///
/// The AD9832 samples data on the falling clock edge, so the SPI peripheral
/// needs to be configured for mode 1 (CPOL = 0, CPHA = 1) or mode 2.
///
/// The chip latches a command on every 16th clock edge while FSYNC is low,
/// so it doesn't need FSYNC to go high between the words of one update. By
/// default, `SpiBus` keeps it low across held words. Some controllers (the
/// Linux `cs_change` transfer flag, for one) release it between words
/// instead. Call [`SpiBus::set_release_between_words`] to get that
/// behavior.
pub struct SpiBus<SPI, CS> {
    spi: SPI,
    chip_select: CS,
    chip_select_delay: u8,
    release_between_words: bool,
}

impl<SPI, CS> SpiBus<SPI, CS> {
    /// Create a new instance of `SpiBus`
    ///
    /// Requires the SPI peripheral and the chip select (FSYNC) pin that are
    /// connected to the AD9832.
    pub fn new(spi: SPI, chip_select: CS) -> Self {
        SpiBus {
            spi,
            chip_select,
            chip_select_delay: 0,
            release_between_words: false,
        }
    }

    /// Set the chip select delay.
    ///
    /// This is the amount of times the cs pin will be set low before any data
    /// is transfered. The AD9832 wants FSYNC low for a few nanoseconds before
    /// the first clock edge, which fast MCUs can undercut.
    pub fn set_chip_select_delay(&mut self, delay: u8) {
        self.chip_select_delay = delay;
    }

    /// Release chip select after every word, whether it's held or not
    ///
    /// Each word is then framed by its own FSYNC pulse.
    pub fn set_release_between_words(&mut self, release: bool) {
        self.release_between_words = release;
    }

    /// Gives back the SPI peripheral and the chip select pin
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.chip_select)
    }
}

impl<SPI, CS> SpiBus<SPI, CS>
where
    SPI: spi::Write<u8>,
    CS: OutputPin,
{
    fn assert_cs_low(&mut self) -> Result<(), Error<SPI, CS>> {
        for _ in 0..=self.chip_select_delay {
            self.chip_select
                .set_low()
                .map_err(|err| Error::ChipSelect(err))?;
        }

        Ok(())
    }

    fn assert_cs_high(&mut self) -> Result<(), Error<SPI, CS>> {
        self.chip_select
            .set_high()
            .map_err(|err| Error::ChipSelect(err))?;

        Ok(())
    }
}

impl<SPI, CS> Bus for SpiBus<SPI, CS>
where
    SPI: spi::Write<u8>,
    CS: OutputPin,
{
    type Error = Error<SPI, CS>;

    fn exchange(&mut self, words: &[u16], hold: &[bool]) -> Result<(), Self::Error> {
        let mut asserted = false;

        for (i, word) in words.iter().enumerate() {
            if !asserted {
                self.assert_cs_low()?;
                asserted = true;
            }

            if let Err(err) = self.spi.write(&word.to_be_bytes()) {
                // The chip would otherwise take the next exchange as the
                // continuation of this one.
                let _ = self.chip_select.set_high();
                return Err(Error::Write(err));
            }

            let held = hold.get(i).copied().unwrap_or(false);
            if self.release_between_words || !held {
                self.assert_cs_high()?;
                asserted = false;
            }
        }

        if asserted {
            self.assert_cs_high()?;
        }

        Ok(())
    }
}

// Can't be derived without putting requirements on `SPI` and `CS`.
impl<SPI, CS> fmt::Debug for SpiBus<SPI, CS> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "SpiBus {{ chip_select_delay: {}, release_between_words: {}, .. }}",
            self.chip_select_delay, self.release_between_words,
        )
    }
}

/// An SPI error that can occur when communicating with the AD9832
pub enum Error<SPI, CS>
where
    SPI: spi::Write<u8>,
    CS: OutputPin,
{
    /// SPI error occured during a write transaction
    Write(<SPI as spi::Write<u8>>::Error),

    /// Error occured while changing chip select signal
    ChipSelect(<CS as OutputPin>::Error),
}

// We can't derive this implementation, as the compiler will complain that the
// associated error type doesn't implement `Debug`.
impl<SPI, CS> fmt::Debug for Error<SPI, CS>
where
    SPI: spi::Write<u8>,
    <SPI as spi::Write<u8>>::Error: fmt::Debug,
    CS: OutputPin,
    <CS as OutputPin>::Error: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Write(error) => write!(f, "Write({:?})", error),
            Error::ChipSelect(error) => write!(f, "ChipSelect({:?})", error),
        }
    }
}
