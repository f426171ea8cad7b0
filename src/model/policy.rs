// src/model/policy.rs

use crate::error::ControlError;
use serde::Serialize;

/// Outcome of applying a booking request against the nested limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Decision {
    Accept,
    Reject,
}

/// Converts nested booking limits into protection levels.
///
/// `limits[k]` is the maximum number of seats still sellable to classes
/// `k..n` combined, so `limits[0]` is the total remaining capacity. The
/// returned vector has `levels[k]` = seats protected for classes `0..=k`
/// against everything below, with `levels[n-1]` equal to capacity.
///
/// Example: `[100, 73, 12, 4, 0]` -> `[27, 88, 96, 100, 100]`.
pub fn to_protection_levels(limits: &[f64]) -> Result<Vec<f64>, ControlError> {
    if limits.is_empty() {
        return Err(ControlError::InvalidDimensions { expected: 1, actual: 0 });
    }
    let capacity = limits[0];
    let mut levels: Vec<f64> = limits[1..].iter().map(|&b| capacity - b).collect();
    levels.push(capacity);
    Ok(levels)
}

/// Converts protection levels back into nested booking limits.
///
/// Exact inverse of [`to_protection_levels`]: the last protection level
/// is the total capacity, and each lower class's limit is whatever that
/// capacity leaves unprotected.
pub fn to_booking_limits(levels: &[f64]) -> Result<Vec<f64>, ControlError> {
    if levels.is_empty() {
        return Err(ControlError::InvalidDimensions { expected: 1, actual: 0 });
    }
    let capacity = levels[levels.len() - 1];
    let mut limits = Vec::with_capacity(levels.len());
    limits.push(capacity);
    for &l in &levels[..levels.len() - 1] {
        limits.push(capacity - l);
    }
    Ok(limits)
}

/// Applies one booking request against the limit vector.
///
/// The request is rejected when the class's own limit cannot cover it;
/// otherwise every class's limit shrinks by the requested amount
/// (floored at zero), because an accepted booking consumes shared
/// physical capacity regardless of which class it was sold in.
///
/// The input vector is never mutated; a fresh vector is returned along
/// with the decision. On `Reject` the returned vector equals the input.
pub fn apply_request(
    limits: &[f64],
    seat_class: usize,
    seats: u32,
) -> Result<(Vec<f64>, Decision), ControlError> {
    if seat_class >= limits.len() {
        return Err(ControlError::InvalidClassIndex {
            seat_class,
            classes: limits.len(),
        });
    }
    let requested = f64::from(seats);
    if limits[seat_class] < requested {
        return Ok((limits.to_vec(), Decision::Reject));
    }
    let updated = limits.iter().map(|&b| (b - requested).max(0.0)).collect();
    Ok((updated, Decision::Accept))
}
