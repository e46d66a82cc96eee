//! Tests for the embedded-hal bus adapter

use std::{cell::RefCell, rc::Rc};

use ad9832::{bus, Bus, PowerUpConfig, SpiBus, UninitializedAD9832};
use embedded_hal::{blocking::spi, digital::v2::OutputPin};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    CsLow,
    CsHigh,
    Byte(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fault;

#[derive(Debug, Default)]
struct Wire {
    events: Vec<Event>,
    writes: usize,
    fail_write: Option<usize>,
}

type Shared = Rc<RefCell<Wire>>;

struct MockSpi(Shared);

impl spi::Write<u8> for MockSpi {
    type Error = Fault;

    fn write(&mut self, words: &[u8]) -> Result<(), Fault> {
        let mut wire = self.0.borrow_mut();
        wire.writes += 1;
        if Some(wire.writes) == wire.fail_write {
            return Err(Fault);
        }
        wire.events.extend(words.iter().map(|&b| Event::Byte(b)));
        Ok(())
    }
}

struct MockPin(Shared);

impl OutputPin for MockPin {
    type Error = Fault;

    fn set_low(&mut self) -> Result<(), Fault> {
        self.0.borrow_mut().events.push(Event::CsLow);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Fault> {
        self.0.borrow_mut().events.push(Event::CsHigh);
        Ok(())
    }
}

fn spi_bus() -> (SpiBus<MockSpi, MockPin>, Shared) {
    let wire = Shared::default();
    let bus = SpiBus::new(MockSpi(wire.clone()), MockPin(wire.clone()));
    (bus, wire)
}

#[test]
fn held_words_share_one_chip_select() {
    let (mut bus, wire) = spi_bus();

    bus.exchange(&[0x3312, 0x2234], &[true, false]).unwrap();

    assert_eq!(
        wire.borrow().events,
        vec![
            Event::CsLow,
            Event::Byte(0x33),
            Event::Byte(0x12),
            Event::Byte(0x22),
            Event::Byte(0x34),
            Event::CsHigh,
        ]
    );
}

#[test]
fn unheld_words_release_chip_select() {
    let (mut bus, wire) = spi_bus();

    bus.exchange(&[0xc000, 0x9000], &[false, false]).unwrap();

    assert_eq!(
        wire.borrow().events,
        vec![
            Event::CsLow,
            Event::Byte(0xc0),
            Event::Byte(0x00),
            Event::CsHigh,
            Event::CsLow,
            Event::Byte(0x90),
            Event::Byte(0x00),
            Event::CsHigh,
        ]
    );
}

#[test]
fn release_between_words_frames_every_word() {
    let (mut bus, wire) = spi_bus();
    bus.set_release_between_words(true);

    bus.exchange(&[0x3312, 0x2234], &[true, false]).unwrap();

    assert_eq!(
        wire.borrow().events,
        vec![
            Event::CsLow,
            Event::Byte(0x33),
            Event::Byte(0x12),
            Event::CsHigh,
            Event::CsLow,
            Event::Byte(0x22),
            Event::Byte(0x34),
            Event::CsHigh,
        ]
    );
}

#[test]
fn chip_select_delay_repeats_assertion() {
    let (mut bus, wire) = spi_bus();
    bus.set_chip_select_delay(2);

    bus.exchange(&[0xf800], &[false]).unwrap();

    assert_eq!(
        wire.borrow().events,
        vec![
            Event::CsLow,
            Event::CsLow,
            Event::CsLow,
            Event::Byte(0xf8),
            Event::Byte(0x00),
            Event::CsHigh,
        ]
    );
}

#[test]
fn write_failure_releases_chip_select() {
    let (mut bus, wire) = spi_bus();
    wire.borrow_mut().fail_write = Some(2);

    let result = bus.exchange(&[0x3312, 0x2234, 0x3156, 0x2078], &[true, true, true, false]);

    assert!(matches!(result, Err(bus::Error::Write(Fault))));
    assert_eq!(
        wire.borrow().events,
        vec![
            Event::CsLow,
            Event::Byte(0x33),
            Event::Byte(0x12),
            Event::CsHigh,
        ]
    );
}

#[test]
fn attach_over_spi() {
    let (bus, wire) = spi_bus();

    let ad9832 = UninitializedAD9832::new(bus)
        .init(&PowerUpConfig::default())
        .unwrap();

    {
        let wire = wire.borrow();
        let lows = wire.events.iter().filter(|e| **e == Event::CsLow).count();
        let highs = wire.events.iter().filter(|e| **e == Event::CsHigh).count();
        let bytes = wire
            .events
            .iter()
            .filter(|e| matches!(e, Event::Byte(_)))
            .count();

        // One chip select per exchange: control word, 2 frequencies, 4 phases
        assert_eq!(lows, 7);
        assert_eq!(highs, 7);
        assert_eq!(bytes, 2 * (1 + 2 * 4 + 4 * 2));
        assert_eq!(&wire.events[..3], &[Event::CsLow, Event::Byte(0xf8), Event::Byte(0x00)]);
    }

    let (_spi, _cs) = ad9832.release().release();
}
