// ABOUTME: Core data models for workout dispatch
// ABOUTME: Re-exports WorkoutType and WorkoutPackage

/// Workout type enumeration and its code lookup table
mod workout;

/// Raw sensor package (code plus positional readings)
mod package;

pub use package::WorkoutPackage;
pub use workout::{WorkoutType, WORKOUT_CODES};
