// src/simulation/engine.rs

use crate::error::ControlError;
use crate::model::forecast::DemandForecast;
use crate::model::policy::{apply_request, to_booking_limits, to_protection_levels, Decision};
use crate::strategy::emsr::Heuristic;
use serde::Serialize;

// We make this Serialize so we can write it to CSV later
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRecord {
    pub step: usize,
    pub seat_class: usize,
    pub seats_requested: u32,
    pub decision: Decision,
    /// Seats still sellable overall after this request, i.e. limits[0].
    pub remaining_capacity: f64,
    /// Seats protected for the top class after this request.
    pub top_class_protection: f64,
    pub accepted_seats: u32,
}

/// Sequential booking simulation over one cabin.
///
/// The booking-limit vector is the entire state; every submitted request
/// is one transition `State x Request -> State x Decision`. There is no
/// rollback and no batching. Protection levels are re-derived from the
/// limits after each request for the history log.
#[derive(Debug)]
pub struct BookingSimulation {
    pub limits: Vec<f64>,
    pub history: Vec<HistoryRecord>,
    accepted_seats: u32,
    step: usize,
}

impl BookingSimulation {
    /// Seeds the limits from a demand forecast via the chosen EMSR
    /// heuristic.
    pub fn new(forecast: &DemandForecast, heuristic: Heuristic) -> Result<Self, ControlError> {
        let levels = heuristic.full_protection_levels(forecast)?;
        let limits = to_booking_limits(&levels)?;
        Self::from_limits(limits)
    }

    /// Starts from an externally supplied booking-limit vector.
    pub fn from_limits(limits: Vec<f64>) -> Result<Self, ControlError> {
        if limits.is_empty() {
            return Err(ControlError::InvalidDimensions { expected: 1, actual: 0 });
        }
        Ok(Self {
            limits,
            history: Vec::new(),
            accepted_seats: 0,
            step: 0,
        })
    }

    /// Applies one request, records it, and returns the decision.
    pub fn submit(&mut self, seat_class: usize, seats: u32) -> Result<Decision, ControlError> {
        let (updated, decision) = apply_request(&self.limits, seat_class, seats)?;
        self.limits = updated;
        if decision == Decision::Accept {
            self.accepted_seats += seats;
        }
        self.step += 1;

        let levels = to_protection_levels(&self.limits)?;
        self.history.push(HistoryRecord {
            step: self.step,
            seat_class,
            seats_requested: seats,
            decision,
            remaining_capacity: self.limits[0],
            top_class_protection: levels[0],
            accepted_seats: self.accepted_seats,
        });
        Ok(decision)
    }

    /// Feeds a whole request stream through [`Self::submit`].
    pub fn run(&mut self, requests: &[(usize, u32)]) -> Result<(), ControlError> {
        for &(seat_class, seats) in requests {
            self.submit(seat_class, seats)?;
        }
        Ok(())
    }

    /// Current protection levels, derived from the current limits.
    pub fn protection_levels(&self) -> Result<Vec<f64>, ControlError> {
        to_protection_levels(&self.limits)
    }

    /// Total seats sold across all accepted requests so far.
    pub fn accepted_seats(&self) -> u32 {
        self.accepted_seats
    }
}
