//! Smoke tests for the re-exported public API

use approx::assert_relative_eq;
use unidist::prelude::*;

#[test]
fn closed_form_and_engine_agree_through_the_facade() {
    let exact = Rayleigh::new(2.0).unwrap();
    let derived = GenericContinuous::from_density_of(&exact);

    assert_relative_eq!(
        derived.mean().unwrap(),
        exact.mean().unwrap(),
        epsilon = 1e-6
    );
    assert_relative_eq!(
        derived.variance().unwrap(),
        exact.variance().unwrap(),
        epsilon = 1e-6
    );
    assert_relative_eq!(
        derived.mode().unwrap(),
        exact.mode().unwrap(),
        epsilon = 1e-4
    );
}

#[test]
fn catalog_types_share_one_contract() {
    let distributions: Vec<Box<dyn ContinuousDistribution>> = vec![
        Box::new(Exponential::standard()),
        Box::new(Normal::standard()),
        Box::new(Rayleigh::new(1.0).unwrap()),
        Box::new(Levy::standard()),
        Box::new(BetaPrime::new(2.0, 3.0).unwrap()),
    ];

    for d in &distributions {
        let median = d.median().unwrap();
        assert!(d.support().contains(median));
        assert_relative_eq!(d.cdf(median).unwrap(), 0.5, epsilon = 1e-6);
    }
}
