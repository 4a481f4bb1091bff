//! Firmware library for a battery-powered charlieplexed electronic
//! die: seven LEDs on four PORTB lines, one button, an ATtiny85.
//!
//! The pure state machine lives in [`dice`] and is exercised by host
//! unit tests; [`hal`] and [`drivers`] touch the hardware and are only
//! meaningful on the AVR target. The binary owns the interrupt vectors
//! and the main loop.
#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod dice;
pub mod drivers;
pub mod hal;
