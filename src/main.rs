mod error;
mod io;
mod model;
mod simulation;
mod strategy;

use crate::io::reporting;
use crate::io::requests;
use crate::model::forecast::DemandForecast;
use crate::model::policy::{to_booking_limits, Decision};
use crate::simulation::engine::BookingSimulation;
use crate::strategy::emsr::Heuristic;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Single-Leg Seat Allocation Controls in Rust ===");

    // 1. DEMAND FORECAST
    // The classic four-class cabin: fares strictly decreasing from rank 0.
    let forecast = DemandForecast::new(
        vec![17.3, 45.1, 39.6, 34.0],  // mean demand per class
        vec![5.8, 15.0, 13.2, 11.3],   // demand standard deviation
        vec![1050.0, 950.0, 699.0, 520.0], // fare per class
        100.0,                         // cabin capacity
    )?;

    // 2. PROTECTION LEVELS (THE BRAINS)
    // Compare all three EMSR heuristics on the same forecast.
    let upsell_alpha = 0.05;
    println!("\n=== EMSR Protection Levels ===");
    println!("EMSR-a:      {:?}", Heuristic::EmsrA.protection_levels(&forecast)?);
    println!("EMSR-b:      {:?}", Heuristic::EmsrB.protection_levels(&forecast)?);
    println!(
        "EMSR-revise: {:?} (alpha = {upsell_alpha})",
        Heuristic::EmsrRevise(upsell_alpha).protection_levels(&forecast)?
    );

    // 3. BOOKING LIMITS
    let levels = Heuristic::EmsrB.full_protection_levels(&forecast)?;
    let limits = to_booking_limits(&levels)?;
    println!("\nEMSR-b booking limits: {limits:?}");

    // 4. RUN THE TEXTBOOK REQUEST STREAM
    // The worked dynamic-allocation example: 5 classes, limits [100, 73, 12, 4, 0].
    println!("\n=== Dynamic Allocation (textbook stream) ===");
    let mut sim = BookingSimulation::from_limits(vec![100.0, 73.0, 12.0, 4.0, 0.0])?;
    for (seat_class, seats) in requests::textbook_request_stream() {
        let decision = sim.submit(seat_class, seats)?;
        println!(
            "request: {seats} seats in class {seat_class} -> {decision:?} \
             | limits {:?} | protection {:?}",
            sim.limits,
            sim.protection_levels()?
        );
        if decision == Decision::Reject && sim.limits[0] == 0.0 {
            println!("Cabin sold out.");
            break;
        }
    }
    println!("Total seats sold: {}", sim.accepted_seats());

    // 5. RUN A RANDOM STREAM AGAINST THE EMSR-b CONTROLS
    println!("\n=== Dynamic Allocation (random stream, EMSR-b limits) ===");
    let mut sim = BookingSimulation::new(&forecast, Heuristic::EmsrB)?;
    let stream = requests::generate_random_requests(forecast.classes(), 60, 2.0, 1.0);
    sim.run(&stream)?;
    println!(
        "{} requests processed, {} seats sold, remaining capacity {:.1}",
        sim.history.len(),
        sim.accepted_seats(),
        sim.limits[0]
    );

    // 6. EXPORT RESULTS
    let output_file = "booking_history.csv";
    match reporting::write_simulation_log(output_file, &sim.history) {
        Ok(_) => println!("Success! Data written to ./{output_file}"),
        Err(e) => eprintln!("Error writing CSV: {e}"),
    }

    println!("\nSimulation Complete.");
    Ok(())
}
