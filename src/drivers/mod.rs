pub mod button;
pub mod charlieplex;

pub use button::{BoardButton, RollButton};
pub use charlieplex::CharlieplexDisplay;
