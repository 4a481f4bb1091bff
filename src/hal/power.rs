use avr_device::attiny85::CPU;

// MCUCR sleep control bits (SE = bit 5, SM1:0 = bits 4:3)
const SE_BIT: u8 = 0x20;
const SM_MASK: u8 = 0x18;

#[derive(Clone, Copy)]
#[repr(u8)]
pub enum SleepMode {
    Idle = 0,
    AdcNoiseReduction = 1,
    PowerDown = 2,
}

pub struct Power {
    _private: (),
}

impl Power {
    pub fn new() -> Self {
        Self { _private: () }
    }

    #[inline]
    pub fn set_sleep_mode(&mut self, mode: SleepMode) {
        let p = unsafe { &*CPU::ptr() };
        p.mcucr
            .modify(|r, w| unsafe { w.bits((r.bits() & !SM_MASK) | ((mode as u8) << 3)) });
    }

    #[inline]
    pub fn enable_sleep(&mut self) {
        let p = unsafe { &*CPU::ptr() };
        p.mcucr.modify(|r, w| unsafe { w.bits(r.bits() | SE_BIT) });
    }

    #[inline]
    pub fn disable_sleep(&mut self) {
        let p = unsafe { &*CPU::ptr() };
        p.mcucr.modify(|r, w| unsafe { w.bits(r.bits() & !SE_BIT) });
    }

    #[inline]
    pub fn sleep(&mut self) {
        unsafe { avr_device::asm::sleep() }
    }

    /// Rest until the next interrupt; the tick timer keeps running.
    pub fn enter_idle_mode(&mut self) {
        self.set_sleep_mode(SleepMode::Idle);
        self.enable_sleep();
        self.sleep();
        self.disable_sleep();
    }

    /// Deepest sleep; only a pin-change (or reset) wakes the part.
    /// Blocks until a wake-capable interrupt has run.
    pub fn enter_power_down(&mut self) {
        self.set_sleep_mode(SleepMode::PowerDown);
        self.enable_sleep();
        self.sleep();
        self.disable_sleep();
    }
}

impl Default for Power {
    fn default() -> Self {
        Self::new()
    }
}
