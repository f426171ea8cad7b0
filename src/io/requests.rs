// src/io/requests.rs

use rand::{thread_rng, Rng};
use rand_distr::{Distribution, Normal};

/// The fixed 11-request stream used by the worked dynamic-allocation
/// example: a mix of mid and low classes arriving against limits
/// `[100, 73, 12, 4, 0]`. Handy for deterministic demos and tests.
pub fn textbook_request_stream() -> Vec<(usize, u32)> {
    let classes = [4, 1, 1, 3, 2, 2, 2, 2, 2, 1, 2];
    let seats = [2, 5, 1, 1, 3, 4, 2, 4, 1, 2, 2];
    classes.into_iter().zip(seats).collect()
}

/// Generates a random request stream: uniformly random seat class and a
/// normally distributed party size.
///
/// # Arguments
/// * `classes` - Number of fare classes (requests pick a class in `0..classes`).
/// * `count` - Length of the stream.
/// * `mean_seats` - Average party size (e.g., 2.0).
/// * `std_dev_seats` - Volatility of the party size (e.g., 1.0).
pub fn generate_random_requests(
    classes: usize,
    count: usize,
    mean_seats: f64,
    std_dev_seats: f64,
) -> Vec<(usize, u32)> {
    let mut rng = thread_rng();
    let normal = Normal::new(mean_seats, std_dev_seats).unwrap();

    let mut stream = Vec::with_capacity(count);
    for _ in 0..count {
        let seat_class = rng.gen_range(0..classes);

        // Round the sample and clamp to at least one seat; a request for
        // zero or negative seats makes no sense.
        let val: f64 = normal.sample(&mut rng);
        let seats = if val < 1.0 { 1 } else { val.round() as u32 };

        stream.push((seat_class, seats));
    }

    stream
}
