mod common;

use bodygraph::angles::angular_difference;
use bodygraph::design::{find_design_instant, solve, DesignMethod, SolverParams};
use bodygraph::ZodiacMode;
use chrono::Duration;
use common::{birth_utc, ScriptedEphemeris, BIRTH_SUN};
use proptest::prelude::*;

#[test]
fn test_design_sun_is_88_degrees_behind() {
    let eph = ScriptedEphemeris::with_gates(&[]);
    let solution =
        find_design_instant(&eph, birth_utc(), ZodiacMode::Tropical, &SolverParams::default())
            .unwrap();

    assert!(solution.converged);
    assert!(solution.instant < birth_utc());
    let design_sun = eph.sun_at(solution.instant);
    assert!(angular_difference(design_sun, BIRTH_SUN - 88.0).abs() < 0.01);
    // about 89.3 days at mean motion
    let gap = birth_utc() - solution.instant;
    assert!(gap > Duration::days(89) && gap < Duration::days(90));
}

#[test]
fn test_custom_arc() {
    let eph = ScriptedEphemeris::with_gates(&[]);
    let params = SolverParams {
        arc_degrees: 30.0,
        ..Default::default()
    };
    let solution = find_design_instant(&eph, birth_utc(), ZodiacMode::Tropical, &params).unwrap();
    let design_sun = eph.sun_at(solution.instant);
    assert!(angular_difference(design_sun, BIRTH_SUN - 30.0).abs() < 0.01);
}

#[test]
fn test_zero_iteration_budget_returns_seed() {
    let eph = ScriptedEphemeris::with_gates(&[]);
    let params = SolverParams {
        max_iterations: 0,
        ..Default::default()
    };
    let solution = find_design_instant(&eph, birth_utc(), ZodiacMode::Tropical, &params).unwrap();
    assert_eq!(solution.iterations, 0);
    assert!(!solution.converged);
    assert_eq!(solution.instant, birth_utc() - Duration::days(88));
}

#[test]
fn test_calendar_method_ignores_sun() {
    let eph = ScriptedEphemeris::sun_only();
    let solution = solve(
        &eph,
        birth_utc(),
        ZodiacMode::Tropical,
        DesignMethod::CalendarDays,
        &SolverParams::default(),
    )
    .unwrap();
    assert_eq!(solution.instant, birth_utc() - Duration::days(88));
    assert!(eph.modes().is_empty());
}

proptest! {
    #[test]
    fn test_design_precedes_birth_for_any_sun(sun in 0.0f64..360.0) {
        let eph = ScriptedEphemeris::with_gates(&[]).with_birth_sun(sun);
        let solution =
            find_design_instant(&eph, birth_utc(), ZodiacMode::Tropical, &SolverParams::default())
                .unwrap();
        prop_assert!(solution.converged);
        prop_assert!(solution.instant < birth_utc());
        let design_sun = eph.sun_at(solution.instant);
        prop_assert!(angular_difference(design_sun, sun - 88.0).abs() < 0.01);
    }
}
