//! Shared helpers used across indicator families.

pub mod math;
