//! ECS Components
//!
//! - actor: Health
//! - movement: Locomotion state machine, SpeedMode
//! - player: Player, HandAnchor, StartingLoadout

pub mod actor;
pub mod movement;
pub mod player;

pub use actor::*;
pub use movement::*;
pub use player::*;
