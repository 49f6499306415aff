//! Combat systems

pub mod weapon;


pub use weapon::*;
