//! Configuration constants for the charlieplexed die firmware

/// CPU frequency in Hz (internal oscillator)
pub const CPU_FREQ_HZ: u32 = 4_800_000;

/// Timer0 free-runs with no prescaling, so one tick is one 8-bit
/// overflow: ~18.75 kHz.
pub const TICK_RATE_HZ: u32 = CPU_FREQ_HZ / 256;

/// Ticks a chase frame is held before advancing. The integer division
/// chain is deliberate; it fixes the visual cadence of the roll.
pub const FRAME_HOLD_TICKS: u16 = (CPU_FREQ_HZ / 256 / 20) as u16;

/// Ticks of inactivity (30 s) before the main loop powers the device
/// down.
pub const SLEEP_TIMEOUT_TICKS: u32 = 30 * (CPU_FREQ_HZ / 256);

/// PORTB bit of the roll button (active low, internal pull-up)
pub const BUTTON_PIN: u8 = 0;

/// Number of LEDs in the charlieplex matrix
pub const LED_COUNT: u8 = 7;

/// Number of die faces
pub const FACE_COUNT: u8 = 6;

/// Idle DDRB mask: every matrix line high-Z
pub const DDR_IDLE_MASK: u8 = 0b0000_0000;

/// Idle PORTB mask: pull-up on the button line only
pub const PORT_IDLE_MASK: u8 = 1 << BUTTON_PIN;
