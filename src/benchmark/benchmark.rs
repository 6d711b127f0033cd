use std::time::Instant;

use crate::simulation::params::{Parameters, ROOM_SIZE};
use crate::simulation::states::{Body, NVec3, Room, Shape, System};
use crate::simulation::step::step;

/// Helper to build a manual System of `n` small spheres
/// Deterministic positions, no rand needed
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5.0,
            (i_f * 0.13).cos() * 5.0,
            (i_f * 0.07).sin() * 5.0,
        );
        let v = NVec3::new((i_f * 0.11).cos() * 0.3, 0.0, (i_f * 0.29).sin() * 0.3);

        // 0.05 half extents are valid, construction cannot fail
        if let Ok(b) = Body::new(Shape::Sphere, NVec3::repeat(0.05), x, [1.0, 1.0, 1.0]) {
            bodies.push(b.with_velocity(v));
        }
    }

    System::new(bodies, Room::from_size(ROOM_SIZE))
}

/// Average wall time of one `step` in milliseconds
fn time_steps(sys: &mut System, params: &Parameters, steps: usize) -> f64 {
    // Warm-up
    step(sys, params);

    let t0 = Instant::now();
    for _ in 0..steps {
        step(sys, params);
    }
    t0.elapsed().as_secs_f64() * 1000.0 / steps as f64
}

/// Time `step` for a few body counts; the pair pass is O(n^2)
pub fn bench_step() {
    let ns = [13, 50, 100, 200, 400, 800, 1600];
    let steps = 20;
    let params = Parameters::default();

    for n in ns {
        let mut sys = make_system(n);
        let ms = time_steps(&mut sys, &params, steps);
        let pairs = n * (n - 1) / 2;
        println!("N = {n:5}, pairs = {pairs:8}, step = {ms:10.6} ms");
    }
}

/// Same as `bench_step` over a dense range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() {
    println!("N,step_ms");

    let params = Parameters::default();

    // Steps of 100 to give smoother graph
    for n in (100..=3000).step_by(100) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 1000 { 10 } else { 2 };
        let mut sys = make_system(n);
        let ms = time_steps(&mut sys, &params, steps);
        println!("{},{:.6}", n, ms);
    }
}
