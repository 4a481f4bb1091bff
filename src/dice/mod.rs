//! The die state machine: display scan, chase animation, free-running
//! entropy counter and inactivity tracking.
//!
//! All of this state is shared between the timer tick, the button
//! pin-change vector and the main loop, so the binary keeps a single
//! `Dice` behind `interrupt::Mutex<RefCell<..>>` and every access runs
//! in a critical section. The idle counter is wider than the CPU
//! registers; a partial update must never be observable.

pub mod animation;
pub mod patterns;

pub use animation::{Animation, CHASE_FRAME_COUNT};
pub use patterns::{ALL_LIT, FACE_PATTERNS};

use crate::config::{FACE_COUNT, LED_COUNT, SLEEP_TIMEOUT_TICKS};

/// Steady face display vs running chase. A roll always restarts the
/// chase at frame 0; finishing a lap falls back to the face pattern.
pub enum DisplayMode {
    Static,
    Animating(Animation),
}

/// What the timer vector should do to the matrix this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickAction {
    /// Assert the drive pair for this LED index.
    Light(u8),
    /// The scan position is unlit; deassert everything.
    Blank,
    /// Sleep is pending; leave the lines untouched.
    Skip,
}

pub struct Dice {
    /// Bitmask of lit LEDs for the steady display. Always a face
    /// pattern, or the all-lit power-on sentinel.
    face_leds: u8,
    /// Scan position in [0, LED_COUNT)
    scan_index: u8,
    /// Free-running counter in [0, FACE_COUNT). Advances once per tick
    /// at a fixed cadence, so the value sampled by a human-timed press
    /// is effectively uniform. Deterministic, not cryptographic.
    entropy: u8,
    /// Ticks since the last roll or power-on
    idle_ticks: u32,
    mode: DisplayMode,
}

impl Dice {
    pub const fn new() -> Self {
        Self {
            face_leds: ALL_LIT,
            scan_index: 0,
            entropy: 0,
            idle_ticks: 0,
            // power-on plays one lap of the chase, then shows all pips
            mode: DisplayMode::Animating(Animation::new()),
        }
    }

    /// One timer tick: advance the entropy counter and the scan
    /// position, pick the pattern to show, count inactivity.
    pub fn tick(&mut self, button_held: bool) -> TickAction {
        if self.idle_ticks >= SLEEP_TIMEOUT_TICKS {
            // sleep pending: freeze so the counter cannot overflow
            // before the main loop powers down
            return TickAction::Skip;
        }

        self.entropy += 1;
        if self.entropy >= FACE_COUNT {
            self.entropy = 0;
        }

        self.scan_index += 1;
        if self.scan_index >= LED_COUNT {
            self.scan_index = 0;
        }

        let (pattern, finished) = match &mut self.mode {
            DisplayMode::Static => (self.face_leds, false),
            DisplayMode::Animating(anim) => anim.step(button_held),
        };
        if finished {
            self.mode = DisplayMode::Static;
        }

        self.idle_ticks += 1;

        if pattern & (1 << self.scan_index) != 0 {
            TickAction::Light(self.scan_index)
        } else {
            TickAction::Blank
        }
    }

    /// A press: sample the entropy counter into a face, re-arm the
    /// inactivity timeout and restart the chase. Safe to re-trigger
    /// from bounce; only the sampled value changes.
    pub fn roll(&mut self) {
        self.face_leds = FACE_PATTERNS[self.entropy as usize];
        self.idle_ticks = 0;
        self.mode = DisplayMode::Animating(Animation::new());
    }

    /// True once the inactivity threshold has been reached.
    pub fn sleep_ready(&self) -> bool {
        self.idle_ticks >= SLEEP_TIMEOUT_TICKS
    }

    /// Called right before power-down. The chase stays off until the
    /// next press; the face pattern is kept so the pre-sleep display
    /// returns on wake.
    pub fn prepare_sleep(&mut self) {
        self.mode = DisplayMode::Static;
    }

    pub fn face_leds(&self) -> u8 {
        self.face_leds
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.mode, DisplayMode::Animating(_))
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FRAME_HOLD_TICKS;

    const LAP_TICKS: u32 = 9 * (FRAME_HOLD_TICKS as u32 + 1);

    fn run_ticks(dice: &mut Dice, n: u32, held: bool) {
        for _ in 0..n {
            dice.tick(held);
        }
    }

    /// Tick until the chase has fallen back to the steady display.
    fn run_out_animation(dice: &mut Dice) {
        let mut budget = 2 * LAP_TICKS;
        while dice.is_animating() {
            dice.tick(false);
            budget -= 1;
            assert!(budget > 0, "animation never finished");
        }
    }

    #[test]
    fn scan_index_advances_mod_seven() {
        let mut dice = Dice::new();
        for n in 1..100u32 {
            match dice.tick(false) {
                TickAction::Light(index) => assert_eq!(index as u32, n % 7),
                TickAction::Blank => {}
                TickAction::Skip => panic!("unexpected sleep freeze"),
            }
        }
    }

    #[test]
    fn entropy_advances_mod_six() {
        let mut dice = Dice::new();
        for n in 1..40u32 {
            dice.tick(false);
            dice.roll();
            // face k has k+1 pips, which identifies the sampled value
            assert_eq!(dice.face_leds().count_ones() as u32, (n % 6) + 1);
        }
    }

    #[test]
    fn roll_maps_entropy_through_face_table() {
        for k in 0..6usize {
            let mut dice = Dice::new();
            run_ticks(&mut dice, 6 + k as u32, false);
            dice.roll();
            assert_eq!(dice.face_leds(), FACE_PATTERNS[k]);
        }
    }

    #[test]
    fn chase_runs_one_lap_then_reverts() {
        let mut dice = Dice::new();
        run_out_animation(&mut dice);
        dice.roll();
        assert!(dice.is_animating());
        run_ticks(&mut dice, LAP_TICKS - 1, false);
        assert!(dice.is_animating());
        dice.tick(false);
        assert!(!dice.is_animating());
    }

    #[test]
    fn held_button_keeps_chase_running() {
        let mut dice = Dice::new();
        run_out_animation(&mut dice);
        dice.roll();
        run_ticks(&mut dice, 3 * LAP_TICKS, true);
        assert!(dice.is_animating());
        run_ticks(&mut dice, LAP_TICKS, false);
        assert!(!dice.is_animating());
    }

    #[test]
    fn steady_display_lights_only_face_bits() {
        let mut dice = Dice::new();
        run_ticks(&mut dice, 6, false); // entropy back at 0
        dice.roll(); // face 1: center pip only
        run_out_animation(&mut dice);
        for _ in 0..21 {
            match dice.tick(false) {
                TickAction::Light(index) => assert_eq!(index, 3),
                TickAction::Blank => {}
                TickAction::Skip => panic!("unexpected sleep freeze"),
            }
        }
    }

    #[test]
    fn sleep_ready_exactly_at_threshold() {
        let mut dice = Dice::new();
        run_ticks(&mut dice, SLEEP_TIMEOUT_TICKS - 1, false);
        assert!(!dice.sleep_ready());
        dice.tick(false);
        assert!(dice.sleep_ready());
    }

    #[test]
    fn ticks_freeze_once_threshold_reached() {
        let mut dice = Dice::new();
        run_ticks(&mut dice, SLEEP_TIMEOUT_TICKS, false);
        assert_eq!(dice.tick(false), TickAction::Skip);
        assert_eq!(dice.tick(true), TickAction::Skip);
        // the counter froze with it: still exactly at the threshold,
        // so a press re-arms cleanly
        dice.roll();
        assert!(!dice.sleep_ready());
    }

    #[test]
    fn press_resets_inactivity_timeout() {
        let mut dice = Dice::new();
        run_ticks(&mut dice, SLEEP_TIMEOUT_TICKS - 1, false);
        dice.roll();
        run_ticks(&mut dice, SLEEP_TIMEOUT_TICKS - 1, false);
        assert!(!dice.sleep_ready());
        dice.tick(false);
        assert!(dice.sleep_ready());
    }

    #[test]
    fn face_survives_sleep_and_wake() {
        let mut dice = Dice::new();
        run_ticks(&mut dice, 8, false);
        dice.roll();
        let face_before = dice.face_leds();

        run_ticks(&mut dice, SLEEP_TIMEOUT_TICKS, false);
        assert!(dice.sleep_ready());
        dice.prepare_sleep();
        assert!(!dice.is_animating());
        assert_eq!(dice.face_leds(), face_before);

        // wake press rolls a fresh face and restarts the chase
        dice.roll();
        assert!(dice.is_animating());
        assert!(!dice.sleep_ready());
    }

    #[test]
    fn power_on_timeout_scenario() {
        let mut dice = Dice::new();
        assert_eq!(dice.face_leds(), ALL_LIT);
        run_ticks(&mut dice, SLEEP_TIMEOUT_TICKS, false);
        assert!(dice.sleep_ready());
        dice.prepare_sleep();
        assert_eq!(dice.face_leds(), ALL_LIT);
        dice.roll();
        assert!(dice.is_animating());
        assert_ne!(dice.face_leds(), ALL_LIT);
    }
}
