//! Drives an objective the way a search algorithm would.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use approx::assert_relative_eq;

use zeroth_objective::{Config, Dimension, Objective, Solution, Value};

/// Sphere function with a deterministic, bounded perturbation.
fn noisy_sphere() -> impl Fn(&Solution<usize>) -> Result<f64, zeroth_objective::BoxError> {
    let tick = AtomicU64::new(0);
    move |s: &Solution<usize>| {
        let n = tick.fetch_add(1, Ordering::SeqCst);
        let noise = if n % 2 == 0 { 0.1 } else { -0.1 };
        Ok(s.point().iter().map(|x| x * x).sum::<f64>() + noise)
    }
}

#[test]
fn coordinate_search_tracks_lineage_and_best() {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&lines);

    let mut objective: Objective<usize> = Objective::new(noisy_sphere())
        .with_dimension(Dimension::uniform(2, [-4.0, 4.0]).unwrap())
        .with_inherit(|parent| Some(parent.and_then(|p| p.attachment().copied()).unwrap_or(0) + 1))
        .with_config(Config::new(0.5, 5).unwrap())
        .with_logger(move |line: &str| sink.lock().unwrap().push(line.to_owned()));

    let dimension = objective.dimension().cloned().unwrap();

    let mut current = objective.construct_solution(vec![3.0, -2.0], None);
    objective.evaluate_reported(&mut current, 0).unwrap();

    let step = 1.0;
    for iteration in 1..=20 {
        let axis = iteration % dimension.size();
        let mut point = current.point().to_vec();
        point[axis] -= step * point[axis].signum();
        if !dimension.contains(&point) {
            continue;
        }

        let mut candidate = objective.construct_solution(point, Some(&current));
        objective.evaluate_reported(&mut candidate, iteration).unwrap();
        objective.resample(&mut candidate, 4).unwrap();

        if candidate.value() < current.value() {
            current = candidate;
        }
    }

    // Each accepted step is one generation deeper than its parent.
    assert!(current.attachment().copied().unwrap() >= 4);
    assert!(current.point().iter().all(|x| x.abs() < 1.0));

    // Resample averages an even number of alternating draws: the noise cancels.
    assert_relative_eq!(current.resample_value().unwrap(), 0.0, epsilon = 1e-12);

    let history = objective.history();
    let best = objective.history_best_so_far();
    assert_eq!(best.len(), history.len());
    assert!(best.windows(2).all(|w| w[1] <= w[0]));
    assert!(matches!(objective.best(), Some(Value::Scalar(v)) if v < 0.5));

    // Reports at iterations 0, 5, 10, 15, 20, two lines each.
    assert_eq!(lines.lock().unwrap().len(), 10);
}
