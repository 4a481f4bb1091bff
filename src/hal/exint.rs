use avr_device::attiny85::EXINT;

// GIMSK pin-change interrupt enable
const PCIE_BIT: u8 = 0x20;

/// Pin-change interrupt configuration (the button's wake/edge source).
pub struct PinChange {
    _private: (),
}

impl PinChange {
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Enable the pin-change interrupt for a single PORTB pin.
    pub fn enable_pin(&mut self, pin: u8) {
        let p = unsafe { &*EXINT::ptr() };
        p.pcmsk.modify(|r, w| unsafe { w.bits(r.bits() | (1 << pin)) });
        p.gimsk.modify(|r, w| unsafe { w.bits(r.bits() | PCIE_BIT) });
    }

    pub fn disable_pin(&mut self, pin: u8) {
        let p = unsafe { &*EXINT::ptr() };
        p.pcmsk.modify(|r, w| unsafe { w.bits(r.bits() & !(1 << pin)) });
    }
}

impl Default for PinChange {
    fn default() -> Self {
        Self::new()
    }
}
