use std::sync::Arc;
use std::thread;

use fuzzrisk_profile::diabetes_engine;

use crate::diabetes_inputs;

const CASES: [(f64, f64, f64, f64); 4] = [
    (150.0, 27.0, 45.0, 100.0),
    (60.0, 22.0, 45.0, 100.0),
    (110.0, 22.0, 45.0, 100.0),
    (104.0, 27.0, 60.0, 50.0),
];

#[test]
fn shared_engine_serves_parallel_assessments() {
    let engine = Arc::new(diabetes_engine().unwrap());
    let expected: Vec<_> = CASES
        .iter()
        .map(|&(f, b, a, p)| engine.assess(&diabetes_inputs(f, b, a, p)).unwrap())
        .collect();

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                (0..50)
                    .map(|i| {
                        let idx = (worker + i) % CASES.len();
                        let (f, b, a, p) = CASES[idx];
                        (idx, engine.assess(&diabetes_inputs(f, b, a, p)).unwrap())
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for (idx, result) in handle.join().unwrap() {
            assert_eq!(result, expected[idx]);
        }
    }
}

#[test]
fn independently_configured_engines_do_not_interfere() {
    let mut strict = diabetes_engine().unwrap();
    strict
        .add_variable("hba1c", [("normal", [4.0, 5.0, 5.7]), ("high", [5.7, 6.5, 9.0])])
        .unwrap();
    let lenient = diabetes_engine().unwrap();

    let inputs = diabetes_inputs(150.0, 27.0, 45.0, 100.0);
    assert!(strict.assess(&inputs).is_err());
    assert!(lenient.assess(&inputs).is_ok());
}
