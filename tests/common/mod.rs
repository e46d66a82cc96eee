//! Test doubles shared by the integration tests

#![allow(dead_code)]

use std::{cell::RefCell, rc::Rc};

use ad9832::{
    ll::{CommandCode, ADD_SHIFT, CMD_SHIFT},
    Bus, PowerUpConfig, UninitializedAD9832, AD9832,
};

/// Error returned by [`RecordingBus`] when a failure is injected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

#[derive(Debug, Default)]
struct Log {
    words: Vec<u16>,
    hold: Vec<bool>,
    exchanges: usize,
    fail_at: Option<usize>,
}

/// Bus that records every word it's given, together with its hold flag
///
/// Clones share the same log, so a test can keep one handle while the driver
/// owns the other. Words are "sent" one at a time. With
/// [`RecordingBus::fail_at`], the bus records the chosen word and then
/// fails, leaving the rest of the exchange unsent, like a link that breaks
/// mid-transfer.
#[derive(Debug, Clone, Default)]
pub struct RecordingBus {
    log: Rc<RefCell<Log>>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail on the `n`th word (counting from 1) sent from now on
    pub fn fail_at(&self, n: usize) {
        let mut log = self.log.borrow_mut();
        log.fail_at = Some(log.words.len() + n);
    }

    /// Forget everything recorded so far
    pub fn clear(&self) {
        *self.log.borrow_mut() = Log::default();
    }

    pub fn words(&self) -> Vec<u16> {
        self.log.borrow().words.clone()
    }

    pub fn hold(&self) -> Vec<bool> {
        self.log.borrow().hold.clone()
    }

    pub fn exchanges(&self) -> usize {
        self.log.borrow().exchanges
    }

    /// Command codes of the recorded words
    pub fn codes(&self) -> Vec<u8> {
        self.words().iter().map(|w| (w >> CMD_SHIFT) as u8).collect()
    }

    /// Register addresses of the recorded words
    pub fn addresses(&self) -> Vec<u8> {
        self.words()
            .iter()
            .map(|w| ((w >> ADD_SHIFT) & 0xf) as u8)
            .collect()
    }

    /// Data bytes of the recorded words
    pub fn data(&self) -> Vec<u8> {
        self.words().iter().map(|w| *w as u8).collect()
    }
}

impl Bus for RecordingBus {
    type Error = BusFault;

    fn exchange(&mut self, words: &[u16], hold: &[bool]) -> Result<(), BusFault> {
        assert_eq!(words.len(), hold.len());

        let mut log = self.log.borrow_mut();
        log.exchanges += 1;

        for (&word, &hold) in words.iter().zip(hold) {
            log.words.push(word);
            log.hold.push(hold);

            if Some(log.words.len()) == log.fail_at {
                log.fail_at = None;
                return Err(BusFault);
            }
        }

        Ok(())
    }
}

/// Attach to a recording bus with the default configuration and forget the
/// attach sequence
pub fn attached() -> (AD9832<RecordingBus>, RecordingBus) {
    let bus = RecordingBus::new();
    let ad9832 = UninitializedAD9832::new(bus.clone())
        .init(&PowerUpConfig::default())
        .expect("attach failed");
    bus.clear();
    (ad9832, bus)
}

pub fn code(code: CommandCode) -> u8 {
    code.into()
}
