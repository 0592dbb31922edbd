//! Reference game implementations.
//!
//! Concrete rules live outside the engine core; the games here exist to
//! exercise the full forward-model contract end to end and to show what a
//! game implementation looks like.

pub mod token_race;
