pub mod exint;
pub mod gpio;
pub mod power;
pub mod timer;

// Re-export commonly used types
pub use exint::PinChange;
pub use gpio::{Input, Pin, PortB};
pub use power::{Power, SleepMode};
pub use timer::{Prescaler, Timer0};
