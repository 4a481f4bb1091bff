use crate::config::BUTTON_PIN;
use crate::hal::gpio::{Input, Pin};
use embedded_hal::digital::v2::InputPin;

/// The roll button as wired on this board.
pub type BoardButton = RollButton<Pin<{ BUTTON_PIN }, Input>>;

/// Active-low roll button. Each query samples the line directly; the
/// press state is never cached, so bounce simply re-triggers the
/// (idempotent) roll.
pub struct RollButton<P> {
    pin: P,
}

impl<P: InputPin> RollButton<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }
}

impl BoardButton {
    /// Configure the button line (input, internal pull-up) and hand
    /// back the handle. Done once at startup.
    pub fn init() -> Self {
        Self::new(Pin::default().into_input_pullup())
    }

    /// The button pin is a zero-size handle, so the interrupt vectors
    /// can materialize the button on demand.
    pub fn board() -> Self {
        Self::new(Pin::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::pin::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };

    #[test]
    fn pressed_when_line_low() {
        let expectations = [
            PinTransaction::get(PinState::Low),
            PinTransaction::get(PinState::High),
        ];
        let mut pin = PinMock::new(&expectations);

        let button = RollButton::new(pin.clone());
        assert!(button.is_pressed());
        assert!(!button.is_pressed());

        pin.done();
    }
}
