use carddraw_engine::config::DeckConfiguration;
use carddraw_engine::engine::{ProbabilityEngine, SPECIFIC_CARDS_IN_DECK};
use carddraw_engine::errors::{ConfigurationError, EngineError};
use carddraw_engine::table::ProbabilityKind;

fn small_engine() -> ProbabilityEngine {
    ProbabilityEngine::new(DeckConfiguration::new(60, 1, 32, 1, 8).unwrap()).unwrap()
}

#[test]
fn zero_targets_below_minimum_names_the_parameter() {
    let engine = small_engine();
    let err = engine
        .probability(0, 7, 1, ProbabilityKind::Exact)
        .unwrap_err();
    assert_eq!(err.parameter, SPECIFIC_CARDS_IN_DECK);
    assert_eq!((err.min, err.max), (1, 32));
    let msg = err.to_string();
    assert!(msg.contains("specificCardsInDeck"), "{msg}");
    assert!(msg.contains("1-32"), "{msg}");
}

#[test]
fn too_many_targets_is_rejected() {
    let engine = small_engine();
    let err = engine
        .probability(33, 7, 1, ProbabilityKind::AtLeast)
        .unwrap_err();
    assert_eq!(err.parameter, "specificCardsInDeck");
    assert_eq!(err.value, 33);
}

#[test]
fn failed_query_leaves_engine_usable() {
    let engine = small_engine();
    assert!(engine.probability(4, 9, 1, ProbabilityKind::Exact).is_err());
    assert!(engine.probability(4, 7, 1, ProbabilityKind::Exact).is_ok());
}

#[test]
fn configuration_errors_surface_through_engine_error() {
    let err: EngineError = DeckConfiguration::new(10, 3, 2, 1, 1).unwrap_err().into();
    assert!(matches!(
        err,
        EngineError::Configuration(ConfigurationError::InvertedBounds { .. })
    ));
    assert!(!err.is_defect());
}
