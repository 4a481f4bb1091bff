use avr_device::attiny85::TC0;

#[derive(Clone, Copy)]
pub enum Prescaler {
    Direct,
    Div8,
    Div64,
    Div256,
    Div1024,
}

/// Timer0 in normal mode. One overflow of the free-running 8-bit
/// counter is the system tick.
pub struct Timer0 {
    _private: (),
}

impl Timer0 {
    pub fn new() -> Self {
        let p = unsafe { &*TC0::ptr() };
        // Normal mode, counter cleared, clock stopped
        p.tccr0a.write(|w| unsafe { w.bits(0) });
        p.tccr0b.write(|w| unsafe { w.bits(0) });
        p.tcnt0.write(|w| unsafe { w.bits(0) });
        Self { _private: () }
    }

    pub fn start(&mut self, prescaler: Prescaler) {
        let p = unsafe { &*TC0::ptr() };
        p.tccr0b.modify(|_, w| match prescaler {
            Prescaler::Direct => w.cs0().direct(),
            Prescaler::Div8 => w.cs0().prescale_8(),
            Prescaler::Div64 => w.cs0().prescale_64(),
            Prescaler::Div256 => w.cs0().prescale_256(),
            Prescaler::Div1024 => w.cs0().prescale_1024(),
        });
    }

    pub fn stop(&mut self) {
        let p = unsafe { &*TC0::ptr() };
        p.tccr0b.modify(|_, w| w.cs0().no_clock());
    }

    pub fn set_counter(&mut self, value: u8) {
        let p = unsafe { &*TC0::ptr() };
        p.tcnt0.write(|w| unsafe { w.bits(value) });
    }

    pub fn get_counter(&self) -> u8 {
        let p = unsafe { &*TC0::ptr() };
        p.tcnt0.read().bits()
    }

    pub fn enable_overflow_interrupt(&mut self) {
        let p = unsafe { &*TC0::ptr() };
        p.timsk.modify(|_, w| w.toie0().set_bit());
    }

    pub fn disable_overflow_interrupt(&mut self) {
        let p = unsafe { &*TC0::ptr() };
        p.timsk.modify(|_, w| w.toie0().clear_bit());
    }
}

impl Default for Timer0 {
    fn default() -> Self {
        Self::new()
    }
}
