use crate::config::{DDR_IDLE_MASK, LED_COUNT, PORT_IDLE_MASK};
use crate::hal::gpio::PortB;

/// DDR/PORT bits that light exactly one LED: two lines driven (one
/// high, one low), every other matrix line high-Z.
#[derive(Clone, Copy)]
struct DrivePair {
    ddr: u8,
    port: u8,
}

/// LED position table for the 7-LED matrix on PB1..PB4. The pairings
/// are fixed by the board wiring.
const LED_DRIVE: [DrivePair; LED_COUNT as usize] = [
    DrivePair { ddr: 0b0001_0100, port: 0b0000_0100 },
    DrivePair { ddr: 0b0000_1010, port: 0b0000_1000 },
    DrivePair { ddr: 0b0001_1000, port: 0b0001_0000 },
    DrivePair { ddr: 0b0000_1010, port: 0b0000_0010 },
    DrivePair { ddr: 0b0000_0110, port: 0b0000_0100 },
    DrivePair { ddr: 0b0001_1000, port: 0b0000_1000 },
    DrivePair { ddr: 0b0000_0110, port: 0b0000_0010 },
];

/// One-LED-at-a-time charlieplex display. The multiplexing tick scans
/// fast enough that the lit subset appears continuous.
pub struct CharlieplexDisplay {
    port: PortB,
}

impl CharlieplexDisplay {
    pub fn new(port: PortB) -> Self {
        Self { port }
    }

    /// Deassert every matrix line (all high-Z) and keep the button
    /// pull-up.
    #[inline]
    pub fn clear_all(&mut self) {
        self.port.set_tristate(DDR_IDLE_MASK, PORT_IDLE_MASK);
    }

    /// Assert the drive pair for one LED on top of the idle state.
    #[inline]
    pub fn drive(&mut self, index: u8) {
        let pair = LED_DRIVE[(index % LED_COUNT) as usize];
        self.port.overlay(pair.ddr, pair.port);
    }
}
