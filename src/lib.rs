//! Driver crate for the AD9832/AD9835 direct digital synthesizer
//!
//! The AD9832 generates a sine wave from a 32-bit phase accumulator. It has
//! two frequency registers and four phase registers; control bits select
//! which of them drive the output. The chip is write-only and is programmed
//! through 16-bit command words on a 3-wire serial bus.
//!
//! The [high-level interface] is the recommended entry point. The
//! [word-level interface] exposes the command encoding for anything the
//! high-level interface doesn't cover. The bus itself is abstracted by the
//! [`Bus`] trait; [`SpiBus`] implements it for `embedded-hal` SPI
//! peripherals.
//!
//! [high-level interface]: hl/index.html
//! [word-level interface]: ll/index.html


#![no_std]

#![deny(missing_docs)]


pub mod bus;
pub mod configs;
pub mod hl;
pub mod ll;
pub mod util;


pub use bus::{Bus, SpiBus};

pub use configs::{FrequencyBank, PhaseBank, PowerUpConfig, SyncSource};

pub use hl::{
    Attribute,
    ControlRegisters,
    Error,
    UninitializedAD9832,
    AD9832,
};
