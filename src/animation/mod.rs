pub mod clock;
pub mod controller;
pub mod driver;
pub mod easing;

pub use clock::{FrameClock, ManualFrameClock, SystemFrameClock};
pub use controller::AnimationController;
pub use driver::{DriverSpec, ProgressDriver, RepeatPolicy};
pub use easing::Easing;
