//! # OpenLaunch session core
//!
//! Carry-distance estimation from ball speed and club, and running session
//! statistics over recorded shots.

pub mod error;
pub mod session;
pub mod shot;
pub mod simulator;

pub use error::{Result, ShotError};
pub use session::{SessionAggregator, SessionState, SessionStats};
pub use shot::{estimate_carry, ClubType, Shot, ShotReport, MPH_TO_MS};
pub use simulator::{ShotSimulator, SpeedReading};
