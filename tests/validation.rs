use taylor_ode::prelude::*;

mod common;
use common::{Decay, Frozen, Sho, default_opts};

#[test]
fn bad_configuration_is_collected_up_front() {
    let opts = Options::<DefaultStepSize>::builder()
        .order(0)
        .abs_tol(-1.0)
        .max_step(0.0)
        .max_steps(0)
        .build();
    let errors = solve_ivp(&Sho, &[0.0, 1.0, 0.0], 1.0, opts).unwrap_err();

    assert_eq!(errors.len(), 4);
    assert!(matches!(errors[0], Error::OrderMustBePositive(0)));
    assert!(matches!(errors[1], Error::AbsTolMustBePositive(_)));
    assert!(matches!(errors[2], Error::MaxStepMustBePositive(_)));
    assert!(matches!(errors[3], Error::MaxStepsMustBePositive(0)));
}

#[test]
fn empty_state_is_rejected() {
    let errors = solve_ivp(&Sho, &[], 1.0, default_opts()).unwrap_err();
    assert!(matches!(errors[0], Error::EmptyState));
}

#[test]
fn arity_mismatch_aborts_the_run() {
    // Sho expects three components; hand it four.
    let errors = solve_ivp(&Sho, &[0.0, 1.0, 0.0, 0.0], 1.0, default_opts()).unwrap_err();
    assert!(matches!(errors[0], Error::DimensionMismatch(4, 3)));
}

#[test]
fn degenerate_step_without_cap_is_an_error() {
    let errors = solve_ivp(&Frozen, &[0.0, 1.0], 1.0, default_opts()).unwrap_err();
    assert!(matches!(errors[0], Error::DegenerateStepSize(_)));
}

#[test]
fn degenerate_step_with_cap_reaches_the_end() {
    let opts = Options::<DefaultStepSize>::builder()
        .order(6)
        .abs_tol(1e-12)
        .max_step(0.3)
        .build();
    let sol = solve_ivp(&Frozen, &[0.0, 1.0], 1.0, opts).unwrap();

    assert_eq!(sol.status, Status::Success);
    assert_eq!(sol.x, 1.0);
    assert_eq!(sol.y[1], 1.0);
    // 0.3 + 0.3 + 0.3 + final shortened step.
    assert_eq!(sol.nstep, 4);
}

#[test]
fn underflowed_step_estimate_aborts() {
    // Stiff decay with an extreme tolerance: abs_tol / |c_k| underflows to
    // zero, so the estimate is exactly 0.0 and the state could never advance.
    let opts = Options::<DefaultStepSize>::builder()
        .order(20)
        .abs_tol(1e-300)
        .build();
    let errors = solve_ivp(&Decay { lambda: 1e15 }, &[0.0, 2.0], 1.0, opts).unwrap_err();
    assert!(matches!(errors[0], Error::StepSizeTooSmall(h) if h == 0.0));
}

#[test]
fn overflowing_coefficients_abort_instead_of_nan() {
    // Coefficients overflow by degree 2; the run must fail rather than
    // report Success with a NaN state, with or without a step cap.
    let blowup = Decay { lambda: 1e160 };

    let capped = Options::<DefaultStepSize>::builder()
        .order(20)
        .abs_tol(1e-10)
        .max_step(0.1)
        .build();
    let errors = solve_ivp(&blowup, &[0.0, 2.0], 1.0, capped).unwrap_err();
    assert!(matches!(errors[0], Error::NonFiniteState(_)));

    let uncapped = Options::<DefaultStepSize>::builder()
        .order(20)
        .abs_tol(1e-10)
        .build();
    let errors = solve_ivp(&blowup, &[0.0, 2.0], 1.0, uncapped).unwrap_err();
    assert!(matches!(errors[0], Error::NonFiniteState(_)));
}

#[test]
fn non_finite_initial_component_is_caught() {
    let opts = Options::<DefaultStepSize>::builder()
        .order(6)
        .abs_tol(1e-12)
        .max_step(0.5)
        .build();
    // Frozen derivatives keep every coefficient finite, so only the
    // propagated state itself can reveal the NaN.
    let errors = solve_ivp(&Frozen, &[0.0, Float::NAN], 1.0, opts).unwrap_err();
    assert!(matches!(errors[0], Error::NonFiniteState(_)));
}

#[test]
fn step_narrower_than_one_ulp_aborts() {
    struct Creep;

    impl StepSize for Creep {
        fn estimate(&self, _jet: &[Series], _abs_tol: Float) -> Float {
            1e-300
        }
    }

    // Positive step, but 1.0 + 1e-300 == 1.0: time cannot move.
    let policy = Creep;
    let opts = Options::builder()
        .order(8)
        .abs_tol(1e-12)
        .step_policy(&policy)
        .build();
    let errors = solve_ivp(&Sho, &[1.0, 1.0, 0.0], 2.0, opts).unwrap_err();
    assert!(matches!(errors[0], Error::StepSizeTooSmall(_)));
}

#[test]
fn error_messages_name_the_offending_value() {
    let text = Error::DimensionMismatch(3, 1).to_string();
    assert!(text.contains('3') && text.contains('1'));

    let text = Error::OrderMustBePositive(0).to_string();
    assert!(text.contains("order"));
}
