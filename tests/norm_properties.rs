//! Property tests for the aggregation operators.
//!
//! - Dubois-Prade is symmetric and reduces to the product at `p = 1`
//! - `duality` is an involution for every operator
//! - every operator keeps results inside `[0, 1]`

use std::sync::Arc;
use std::thread;

use fuzzyops::aggregation::demorganduality::DeMorganDuality;
use fuzzyops::aggregation::duboispradeintersection::DuboisPradeIntersection;
use fuzzyops::aggregation::norm::{Norm, NormType};
use fuzzyops::aggregation::parametricfactory::ParametricFactory;
use fuzzyops::aggregation::standardnorm::StandardNorm;
use fuzzyops::fuzzyerror::FuzzyError;
use proptest::prelude::*;

const EPS: f64 = 1e-12;

fn arb_standard_norm() -> impl Strategy<Value = StandardNorm> {
    prop_oneof![
        Just(StandardNorm::Minimum),
        Just(StandardNorm::Product),
        Just(StandardNorm::Lukasiewicz),
        Just(StandardNorm::Drastic),
        Just(StandardNorm::Maximum),
        Just(StandardNorm::ProbabilisticSum),
        Just(StandardNorm::BoundedSum),
        Just(StandardNorm::DrasticSum),
    ]
}

fn arb_norm() -> impl Strategy<Value = Arc<dyn Norm>> {
    prop_oneof![
        arb_standard_norm().prop_map(|n| Arc::new(n) as Arc<dyn Norm>),
        (0.0f64..=1.0).prop_map(|p| {
            Arc::new(DuboisPradeIntersection::new(p).unwrap()) as Arc<dyn Norm>
        }),
    ]
}

proptest! {
    #[test]
    fn prop_dubois_prade_symmetric(p in 0.0f64..=1.0, a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let norm = DuboisPradeIntersection::new(p).unwrap();
        prop_assert_eq!(norm.apply(&[a, b]).unwrap(), norm.apply(&[b, a]).unwrap());
    }

    #[test]
    fn prop_dubois_prade_one_is_product(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let norm = DuboisPradeIntersection::FACTORY.create(&[1.0]).unwrap();
        prop_assert_eq!(norm.apply(&[a, b]).unwrap(), a * b);
    }

    #[test]
    fn prop_dubois_prade_bounded_by_minimum(p in 0.0f64..=1.0, a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let value = DuboisPradeIntersection::new(p).unwrap().apply(&[a, b]).unwrap();
        prop_assert!(value >= 0.0);
        prop_assert!(value <= a.min(b) + EPS);
    }

    #[test]
    fn prop_factory_rejects_outside_unit_interval(p in prop_oneof![-10.0f64..-1e-9, 1.0 + 1e-9..10.0]) {
        let result = DuboisPradeIntersection::FACTORY.create(&[p]);
        prop_assert!(matches!(result, Err(FuzzyError::InvalidParameter { .. })), "expected InvalidParameter, got {:?}", result);
    }

    #[test]
    fn prop_factory_rejects_wrong_count(params in prop::collection::vec(0.0f64..=1.0, 2..6)) {
        let result = DuboisPradeIntersection::FACTORY.create(&params);
        prop_assert!(matches!(result, Err(FuzzyError::InvalidParameter { .. })), "expected InvalidParameter, got {:?}", result);
    }

    #[test]
    fn prop_duality_involution(norm in arb_norm(), a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let twice = norm.duality().duality();
        prop_assert_eq!(twice.norm_type(), norm.norm_type());
        let lhs = twice.apply(&[a, b]).unwrap();
        let rhs = norm.apply(&[a, b]).unwrap();
        prop_assert!((lhs - rhs).abs() < EPS, "{} vs {}", lhs, rhs);
    }

    #[test]
    fn prop_duality_flips_type(norm in arb_norm()) {
        prop_assert_eq!(norm.duality().norm_type(), norm.norm_type().opposite());
    }

    #[test]
    fn prop_results_stay_in_unit_interval(norm in arb_norm(), a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        for candidate in [Arc::clone(&norm), norm.duality()] {
            let value = candidate.apply(&[a, b]).unwrap();
            prop_assert!((-EPS..=1.0 + EPS).contains(&value), "{} gave {}", candidate, value);
        }
    }

    #[test]
    fn prop_arity_enforced(norm in arb_norm(), values in prop::collection::vec(0.0f64..=1.0, 0..6)) {
        prop_assume!(values.len() != 2);
        let result = norm.duality().apply(&values);
        prop_assert!(
            matches!(result, Err(FuzzyError::InvalidArity { expected: 2, found, .. }) if found == values.len()),
            "expected InvalidArity for {} operands, got {:?}",
            values.len(),
            result
        );
    }
}

#[test]
fn dual_wrapper_of_t_norm_is_t_conorm() {
    let dual = DeMorganDuality::new(Arc::new(DuboisPradeIntersection::new(0.5).unwrap()));
    assert_eq!(dual.norm_type(), NormType::TConorm);
    assert_eq!(dual.duality().norm_type(), NormType::TNorm);
}

#[test]
fn shared_across_threads() {
    let norm: Arc<dyn Norm> = DuboisPradeIntersection::new(0.3).unwrap().duality();
    let expected = norm.apply(&[0.5, 0.8]).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let norm = Arc::clone(&norm);
            thread::spawn(move || norm.apply(&[0.5, 0.8]).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
