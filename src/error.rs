// src/error.rs

use std::fmt;

/// Everything that can go wrong inside the allocation/EMSR core.
///
/// All of these are deterministic input-validation failures detected at
/// the boundary of a pure function. Nothing here is transient, so there
/// is never anything to retry; callers get the error immediately and the
/// core never logs or partially recovers.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlError {
    /// Vectors of mismatched length, or length zero.
    InvalidDimensions { expected: usize, actual: usize },
    /// `seat_class` outside `[0, n)` in a booking request.
    InvalidClassIndex { seat_class: usize, classes: usize },
    /// A scalar parameter outside its legal range (alpha, sigma, fares, capacity).
    InvalidParameter(String),
    /// The normal quantile function was invoked with a probability
    /// outside the open interval (0, 1). Mathematically this is +/- infinity;
    /// we report it instead of emitting an infinite protection level.
    NumericDomain { prob: f64 },
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlError::InvalidDimensions { expected, actual } => {
                write!(f, "invalid dimensions: expected length {expected}, got {actual}")
            }
            ControlError::InvalidClassIndex { seat_class, classes } => {
                write!(f, "seat class {seat_class} out of range for {classes} classes")
            }
            ControlError::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
            ControlError::NumericDomain { prob } => {
                write!(f, "quantile probability {prob} outside the open interval (0, 1)")
            }
        }
    }
}

impl std::error::Error for ControlError {}
