use avr_device::attiny85::PORTB;
use core::convert::Infallible;
use core::marker::PhantomData;

pub trait PinMode {}
pub struct Input;
impl PinMode for Input {}

/// Whole-port handle for the charlieplex matrix. Lighting one LED
/// switches several DDR/PORT bits in a single step, which a
/// pin-at-a-time API cannot express, so the matrix drives PORTB through
/// register-wide masks instead.
pub struct PortB {
    _private: (),
}

impl PortB {
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Replace the direction and output registers in one go.
    #[inline]
    pub fn set_tristate(&mut self, ddr_mask: u8, port_mask: u8) {
        let p = unsafe { &*PORTB::ptr() };
        p.ddrb.write(|w| unsafe { w.bits(ddr_mask) });
        p.portb.write(|w| unsafe { w.bits(port_mask) });
    }

    /// OR the given bits into the direction and output registers.
    /// Direction first, so a line never sources current before it is
    /// switched to output.
    #[inline]
    pub fn overlay(&mut self, ddr_bits: u8, port_bits: u8) {
        let p = unsafe { &*PORTB::ptr() };
        p.ddrb.modify(|r, w| unsafe { w.bits(r.bits() | ddr_bits) });
        p.portb.modify(|r, w| unsafe { w.bits(r.bits() | port_bits) });
    }
}

impl Default for PortB {
    fn default() -> Self {
        Self::new()
    }
}

/// Typed input pin on PORTB, used for the roll button.
pub struct Pin<const P: u8, MODE> {
    _mode: PhantomData<MODE>,
}

impl<const P: u8, MODE: PinMode> Default for Pin<P, MODE> {
    fn default() -> Self {
        Self { _mode: PhantomData }
    }
}

impl<const P: u8> Pin<P, Input> {
    /// Clear the DDR bit and enable the internal pull-up.
    pub fn into_input_pullup(self) -> Self {
        let p = unsafe { &*PORTB::ptr() };
        p.ddrb.modify(|r, w| unsafe { w.bits(r.bits() & !(1 << P)) });
        p.portb.modify(|r, w| unsafe { w.bits(r.bits() | (1 << P)) });
        self
    }

    #[inline]
    pub fn is_high(&self) -> bool {
        let p = unsafe { &*PORTB::ptr() };
        (p.pinb.read().bits() & (1 << P)) != 0
    }

    #[inline]
    pub fn is_low(&self) -> bool {
        !self.is_high()
    }
}

impl<const P: u8> embedded_hal::digital::v2::InputPin for Pin<P, Input> {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(Pin::is_high(self))
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(Pin::is_low(self))
    }
}
