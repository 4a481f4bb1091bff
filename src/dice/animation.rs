use crate::config::FRAME_HOLD_TICKS;

/// Frames in one lap of the chase.
pub const CHASE_FRAME_COUNT: u8 = 8;

/// One lap around the matrix. The closing entry repeats the opening
/// one; it is only shown on the final lap, after the button has been
/// released. The duplicate is part of the intended cadence, keep it.
const CHASE_FRAMES: [u8; CHASE_FRAME_COUNT as usize + 1] = [
    0b0000_1000,
    0b0000_0010,
    0b0001_0000,
    0b0100_0000,
    0b0000_1000,
    0b0000_0001,
    0b0000_0100,
    0b0010_0000,
    0b0000_1000,
];

/// Chase sequencer for the roll animation. A roll starts a fresh lap;
/// holding the button wraps the lap at the last distinct frame, so the
/// chase loops for as long as the button is held.
pub struct Animation {
    frame: u8,
    hold: u16,
}

impl Animation {
    pub const fn new() -> Self {
        Self { frame: 0, hold: 0 }
    }

    /// Advance one tick. Returns the pattern to scan during this tick
    /// and whether the lap has completed.
    pub fn step(&mut self, button_held: bool) -> (u8, bool) {
        let pattern = CHASE_FRAMES[self.frame as usize];

        self.hold += 1;
        if self.hold > FRAME_HOLD_TICKS {
            self.hold = 0;
            self.frame += 1;
            if self.frame >= CHASE_FRAME_COUNT && button_held {
                self.frame = 0;
            } else if self.frame > CHASE_FRAME_COUNT {
                return (pattern, true);
            }
        }

        (pattern, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICKS_PER_FRAME: u32 = FRAME_HOLD_TICKS as u32 + 1;

    #[test]
    fn frame_is_held_for_its_full_duration() {
        let mut anim = Animation::new();
        for _ in 0..TICKS_PER_FRAME {
            let (pattern, done) = anim.step(false);
            assert_eq!(pattern, CHASE_FRAMES[0]);
            assert!(!done);
        }
        let (pattern, _) = anim.step(false);
        assert_eq!(pattern, CHASE_FRAMES[1]);
    }

    #[test]
    fn chase_visits_frames_in_order() {
        let mut anim = Animation::new();
        for n in 0..(9 * TICKS_PER_FRAME) {
            let (pattern, _) = anim.step(false);
            assert_eq!(pattern, CHASE_FRAMES[(n / TICKS_PER_FRAME) as usize]);
        }
    }

    #[test]
    fn lap_finishes_when_button_released() {
        let mut anim = Animation::new();
        let mut done_at = None;
        for n in 1..=(10 * TICKS_PER_FRAME) {
            let (_, done) = anim.step(false);
            if done {
                done_at = Some(n);
                break;
            }
        }
        assert_eq!(done_at, Some(9 * TICKS_PER_FRAME));
    }

    #[test]
    fn held_button_wraps_lap_and_skips_closing_frame() {
        let mut anim = Animation::new();
        for _ in 0..(8 * TICKS_PER_FRAME) {
            let (_, done) = anim.step(true);
            assert!(!done);
        }
        // back at the opening frame instead of the duplicate closer
        let (pattern, done) = anim.step(true);
        assert!(!done);
        assert_eq!(pattern, CHASE_FRAMES[0]);
    }

    #[test]
    fn release_after_wrapping_still_finishes() {
        let mut anim = Animation::new();
        for _ in 0..(8 * TICKS_PER_FRAME) {
            anim.step(true);
        }
        let mut finished = false;
        for _ in 0..(9 * TICKS_PER_FRAME) {
            if anim.step(false).1 {
                finished = true;
                break;
            }
        }
        assert!(finished);
    }
}
