use riemann_chart::config::{CanvasConfig, ParameterLimits};
use riemann_chart::{ChartConfig, RiemannParams, RiemannState};

#[test]
fn test_empty_json_gives_defaults() {
    let config = ChartConfig::from_json("{}").unwrap();
    assert_eq!(config, ChartConfig::default());
    assert_eq!(config.canvas.graph_width(), 520.0);
    assert_eq!(config.canvas.graph_height(), 320.0);
}

#[test]
fn test_partial_json_overrides() {
    let json = r#"{
        "canvas": { "width": 800, "height": 500, "padding": 50 },
        "curve_segments": 400
    }"#;
    let config = ChartConfig::from_json(json).unwrap();
    assert_eq!(config.canvas.width, 800.0);
    assert_eq!(config.canvas.graph_height(), 400.0);
    assert_eq!(config.curve_segments, 400);
    assert_eq!(config.limits, ParameterLimits::default());
    assert_eq!(config.label_margin, 100.0);
}

#[test]
fn test_config_round_trips_through_json() {
    let config = ChartConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(ChartConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_malformed_json_is_rejected() {
    let err = ChartConfig::from_json("{ canvas: ").unwrap_err();
    assert!(format!("{:?}", err).contains("failed to parse chart configuration"));
}

#[test]
fn test_padding_must_leave_a_plot_area() {
    let json = r#"{ "canvas": { "width": 600, "height": 400, "padding": 250 } }"#;
    let err = ChartConfig::from_json(json).unwrap_err();
    let report = format!("{:?}", err);
    assert!(report.contains("invalid canvas"), "{}", report);
    assert!(report.contains("leaves no plotting area"), "{}", report);
}

#[test]
fn test_limit_validation() {
    let inverted = ParameterLimits {
        n_min: 10,
        n_max: 5,
        ..ParameterLimits::default()
    };
    assert!(inverted.validate().is_err());

    let zero = ParameterLimits {
        n_min: 0,
        ..ParameterLimits::default()
    };
    assert!(zero.validate().is_err());

    let no_step = ParameterLimits {
        width_step: 0.0,
        ..ParameterLimits::default()
    };
    assert!(no_step.validate().is_err());

    assert!(ParameterLimits::default().validate().is_ok());
}

#[test]
fn test_limit_clamping() {
    let limits = ParameterLimits::default();
    assert_eq!(limits.clamp_count(-5), 1);
    assert_eq!(limits.clamp_count(0), 1);
    assert_eq!(limits.clamp_count(50), 50);
    assert_eq!(limits.clamp_count(500), 200);

    assert_eq!(limits.clamp_width(0.2), 1.0);
    assert_eq!(limits.clamp_width(7.5), 7.5);
    assert_eq!(limits.clamp_width(99.0), 20.0);
    assert_eq!(limits.clamp_width(f64::NAN), 1.0);
}

#[test]
fn test_canvas_rejects_non_finite() {
    let canvas = CanvasConfig {
        width: f64::INFINITY,
        ..CanvasConfig::default()
    };
    assert!(canvas.validate().is_err());

    let negative = CanvasConfig {
        padding: -1.0,
        ..CanvasConfig::default()
    };
    assert!(negative.validate().is_err());
}

#[test]
fn test_zero_tick_counts_rejected() {
    let config = ChartConfig {
        y_tick_count: 0,
        ..ChartConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_state_with_inverted_limits_does_not_panic() {
    let limits = ParameterLimits {
        n_min: 50,
        n_max: 10,
        width_min: 8.0,
        width_max: 2.0,
        ..ParameterLimits::default()
    };
    assert!(limits.validate().is_err());

    let mut state = RiemannState::new(RiemannParams::default(), limits);
    assert_eq!(state.params().n(), 10);
    assert_eq!(state.params().width(), 3.0);

    state.set_count(1);
    assert_eq!(state.params().n(), 10);
    state.set_count(500);
    assert_eq!(state.params().n(), 50);
    state.set_width(100.0);
    assert_eq!(state.params().width(), 8.0);
}

#[test]
fn test_state_with_non_finite_width_limits() {
    let limits = ParameterLimits {
        width_min: f64::NAN,
        width_max: f64::INFINITY,
        ..ParameterLimits::default()
    };
    let mut state = RiemannState::new(RiemannParams::default(), limits);
    assert_eq!(state.params().width(), 3.0);

    state.set_width(50.0);
    assert_eq!(state.params().width(), 20.0);
    state.set_width(f64::NAN);
    assert_eq!(state.params().width(), 1.0);
}

#[test]
fn test_zero_count_limits_still_give_one_rectangle() {
    let limits = ParameterLimits {
        n_min: 0,
        n_max: 0,
        ..ParameterLimits::default()
    };
    let state = RiemannState::new(RiemannParams::default(), limits);
    assert_eq!(state.params().n(), 1);
}
