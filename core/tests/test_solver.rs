use cyclepower_core::{
    calculate_power, calculate_speed, solve_speed, EnvironmentConfig, PowerCalculator,
    RiderBikeConfig, SolverOptions, DEFAULT_ENV,
};

fn rider() -> RiderBikeConfig {
    RiderBikeConfig::new(75.0, 7.0)
}

#[test]
fn round_trip_power_speed_power() {
    let r = rider();
    let envs = [
        DEFAULT_ENV,
        EnvironmentConfig::with_gradient(0.05),
        EnvironmentConfig::with_gradient(-0.05),
        EnvironmentConfig { head_wind: 15.0, ..DEFAULT_ENV },
        EnvironmentConfig { head_wind: -10.0, ..DEFAULT_ENV },
    ];

    for env in envs {
        for target in [50.0, 100.0, 150.27, 250.0, 400.0, 800.0] {
            let v = calculate_speed(target, &r, &env);
            let leg = calculate_power(v, &r, &env).leg;
            assert!(
                (leg - target).abs() < 1e-3,
                "target={target} W -> v={v} km/h -> {leg} W ({env:?})"
            );
        }
    }
}

#[test]
fn known_speeds() {
    let calc = PowerCalculator::new(rider());
    let flat = calc.calculate_speed(150.27, None);
    assert!((flat - 30.0).abs() < 0.01, "flat={flat}");

    let up = calc.calculate_speed(284.81, Some(&EnvironmentConfig::with_gradient(0.05)));
    assert!((up - 20.0).abs() < 0.01, "up={up}");
}

#[test]
fn more_power_means_more_speed() {
    let r = rider();
    let env = EnvironmentConfig::with_gradient(0.03);
    let slow = calculate_speed(150.0, &r, &env);
    let fast = calculate_speed(300.0, &r, &env);
    assert!(fast > slow, "slow={slow} fast={fast}");
}

#[test]
fn descent_is_faster_than_climb_at_same_power() {
    let r = rider();
    let down = calculate_speed(200.0, &r, &EnvironmentConfig::with_gradient(-0.05));
    let flat = calculate_speed(200.0, &r, &DEFAULT_ENV);
    let up = calculate_speed(200.0, &r, &EnvironmentConfig::with_gradient(0.05));
    assert!(down > flat && flat > up, "down={down} flat={flat} up={up}");
}

#[test]
fn converges_within_iteration_budget() {
    let out = solve_speed(250.0, &rider(), &DEFAULT_ENV, &SolverOptions::default());
    assert!(out.converged);
    assert!(out.iterations <= 100);
    assert!(out.value.is_finite());
}

#[test]
fn negative_target_pins_to_lower_bound() {
    // leg(v) er positiv for v < 0 også, så søket drives mot -1000 km/h
    let out = solve_speed(-50.0, &rider(), &DEFAULT_ENV, &SolverOptions::default());
    assert!(!out.converged);
    assert_eq!(out.iterations, 100);
    assert!((out.value + 1000.0).abs() < 1e-6, "v={}", out.value);
}

#[test]
fn custom_bounds_are_respected() {
    let opts = SolverOptions { lower: 0.0, upper: 120.0, ..Default::default() };
    let out = solve_speed(200.0, &rider(), &DEFAULT_ENV, &opts);
    assert!(out.converged);
    let default = calculate_speed(200.0, &rider(), &DEFAULT_ENV);
    assert!((out.value - default).abs() < 1e-3);
}
