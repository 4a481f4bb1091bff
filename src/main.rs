#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

#[cfg(target_arch = "avr")]
mod firmware {
    use panic_halt as _;

    use avr_device::attiny85::Peripherals;
    use avr_device::interrupt::{self, Mutex};
    use core::cell::RefCell;

    use charlieplex_dice::config::BUTTON_PIN;
    use charlieplex_dice::dice::{Dice, TickAction};
    use charlieplex_dice::drivers::{BoardButton, CharlieplexDisplay};
    use charlieplex_dice::hal::{PinChange, PortB, Power, Prescaler, Timer0};

    // Die state shared by the two interrupt vectors and the main loop.
    // The idle counter is wider than the CPU registers, so every
    // access stays inside a critical section.
    static DICE: Mutex<RefCell<Dice>> = Mutex::new(RefCell::new(Dice::new()));

    #[avr_device::entry]
    fn main() -> ! {
        // Claim the peripherals once; the HAL handles below are
        // zero-size and reach the registers directly.
        let _dp = Peripherals::take().unwrap();

        let mut display = CharlieplexDisplay::new(PortB::new());
        let mut power = Power::new();

        interrupt::free(|_cs| {
            // all matrix lines high-Z, button pull-up enabled
            display.clear_all();
            BoardButton::init();

            let mut timer = Timer0::new();
            timer.enable_overflow_interrupt();
            timer.start(Prescaler::Direct);

            PinChange::new().enable_pin(BUTTON_PIN);
        });

        unsafe { avr_device::interrupt::enable() };

        loop {
            let sleep_ready = interrupt::free(|cs| DICE.borrow(cs).borrow().sleep_ready());

            if sleep_ready {
                interrupt::free(|cs| {
                    // blank the matrix and park the chase; the face
                    // pattern itself is kept for wake
                    display.clear_all();
                    DICE.borrow(cs).borrow_mut().prepare_sleep();
                });
                // blocks until a wake-capable interrupt has run. A
                // press during wake has already rolled by the time
                // this returns; a release edge drops straight back
                // to sleep on the next pass.
                power.enter_power_down();
            } else {
                // rest until the next tick
                power.enter_idle_mode();
            }
        }
    }

    // Tick: advance the scan, the entropy counter and the idle
    // counter, then refresh the matrix.
    #[avr_device::interrupt(attiny85)]
    fn TIMER0_OVF() {
        interrupt::free(|cs| {
            let action = DICE
                .borrow(cs)
                .borrow_mut()
                .tick(BoardButton::board().is_pressed());

            let mut display = CharlieplexDisplay::new(PortB::new());
            match action {
                TickAction::Light(index) => {
                    display.clear_all();
                    display.drive(index);
                }
                TickAction::Blank => display.clear_all(),
                TickAction::Skip => {}
            }
        });
    }

    // Button edge: a press rolls a new face and re-arms the chase and
    // the inactivity timeout. Also the wake source for power-down.
    #[avr_device::interrupt(attiny85)]
    fn PCINT0() {
        interrupt::free(|cs| {
            if BoardButton::board().is_pressed() {
                DICE.borrow(cs).borrow_mut().roll();
            }
        });
    }
}

// The firmware image only exists for the AVR target; host builds get a
// stub so the workspace still links under `cargo test`.
#[cfg(not(target_arch = "avr"))]
fn main() {}
