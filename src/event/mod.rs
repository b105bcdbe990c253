//! Event-promotion features: the countdown clock and the hero slideshow.

pub mod countdown;
pub mod slideshow;

pub use countdown::Countdown;
pub use slideshow::{Slideshow, AUTO_ADVANCE_INTERVAL};
