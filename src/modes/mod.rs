pub mod headless;
pub mod human;
pub mod play;

pub use headless::HeadlessMode;
pub use human::HumanMode;
pub use play::{GameLoop, Phase};
