//! Tests for thread safety
//!
//! Formulas are immutable and reference counted with `Arc`, so the same
//! formula can be rewritten from several threads without synchronization.

use propositional_bases::{Basis, Formula};
use std::sync::Arc;
use std::thread;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_formula_is_send_and_sync() {
    assert_send_sync::<Formula>();
    assert_send_sync::<Basis>();
}

#[test]
fn test_concurrent_rewrites_of_shared_formula() {
    let formula = Arc::new(Formula::parse("(p + q) <-> ~(r -| T) & (s -& F)").unwrap());

    // One thread per basis, all reading the same formula
    let handles: Vec<_> = Basis::ALL
        .into_iter()
        .map(|basis| {
            let formula = Arc::clone(&formula);
            thread::spawn(move || {
                let result = basis.rewrite(&formula).expect("Rewrite failed");
                (basis, result)
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("Thread panicked"))
        .collect();

    assert_eq!(results.len(), Basis::ALL.len());
    for (basis, result) in results {
        assert!(basis.admits(&result));
        assert!(result.equivalent_to(&formula));
    }
}

#[test]
fn test_consistent_results_across_threads() {
    let formula = Arc::new(Formula::parse("a -> (b | ~c) + d").unwrap());
    let expected = Basis::Nand.rewrite(&formula).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let formula = Arc::clone(&formula);
            thread::spawn(move || Basis::Nand.rewrite(&formula).expect("Rewrite failed"))
        })
        .collect();

    for handle in handles {
        let result = handle.join().expect("Thread panicked");
        assert_eq!(result, expected, "Results should be identical");
    }
}

#[test]
fn test_results_can_be_sent_back_and_shared() {
    let formula = Formula::parse("p <-> q").unwrap();
    let rewritten = thread::spawn(move || Basis::ImpliesFalse.rewrite(&formula).unwrap())
        .join()
        .expect("Thread panicked");

    let shared = Arc::new(rewritten);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || shared.truth_table().values())
        })
        .collect();

    for handle in handles {
        let values = handle.join().expect("Thread panicked");
        assert_eq!(values, vec![true, false, false, true]);
    }
}
