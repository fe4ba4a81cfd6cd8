use approx::assert_relative_eq;
use sensorfilt::filter::{AlphaBetaFilter, AlphaFilter, Filter, FilterError};

fn noise(rng: &mut fastrand::Rng, amplitude: f32) -> f32 {
    (rng.f32() - 0.5) * 2.0 * amplitude
}

#[test]
fn alpha_smooths_constant_signal() {
    sensorfilt::init_logger!();

    let mut rng = fastrand::Rng::with_seed(0x5eed);
    let mut filter = AlphaFilter::new(0.0).with_alpha(0.1);
    for _ in 0..500 {
        filter.filter(20.0 + noise(&mut rng, 1.0));
    }
    assert_relative_eq!(filter.x(), 20.0, epsilon = 0.75);
}

#[test]
fn alpha_beta_tracks_ramp() {
    sensorfilt::init_logger!();

    let slope = 3.0;
    let dt = 0.1;
    let mut filter = AlphaBetaFilter::new(0.0).with_alpha(0.5).with_dt(dt);
    for i in 1..=400 {
        let t = i as f32 * dt;
        filter.filter(slope * t).unwrap();
    }
    assert_relative_eq!(filter.rate_x(), slope, epsilon = 1e-3);
    assert_relative_eq!(filter.x(), slope * 40.0, epsilon = 1e-2);
}

#[test]
fn alpha_beta_tracks_noisy_ramp() {
    let mut rng = fastrand::Rng::with_seed(42);
    let mut filter = AlphaBetaFilter::new(0.0).with_alpha(0.2);
    for i in 1..=1000 {
        filter.filter(0.5 * i as f32 + noise(&mut rng, 2.0)).unwrap();
    }
    assert_relative_eq!(filter.rate_x(), 0.5, epsilon = 0.2);
    assert_relative_eq!(filter.x(), 500.0, epsilon = 3.0);
}

#[test]
fn zero_time_step_is_reported() {
    let mut filter = AlphaBetaFilter::new(0.0);
    filter.set_dt(0.0);
    let err = filter.filter(1.0).unwrap_err();
    assert_eq!(err, FilterError::ZeroTimeStep);
    assert!(!err.to_string().is_empty());
}

#[test]
fn invalid_gain_can_be_propagated() {
    fn configure(filter: &mut AlphaFilter, alpha: f32) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(warning) = filter.set_alpha(alpha) {
            return Err(warning.into());
        }
        Ok(())
    }

    let mut filter = AlphaFilter::default();
    assert!(configure(&mut filter, 0.5).is_ok());
    assert!(configure(&mut filter, 2.0).is_err());
    // the clamped value is still applied
    assert_eq!(filter.alpha(), 1.0);
}

#[test]
fn filters_behind_trait_objects() {
    let mut filters: Vec<Box<dyn Filter<f32, Error = FilterError>>> = vec![
        Box::new(AlphaBetaFilter::new(0.0)),
        Box::new(AlphaBetaFilter::new(0.0).with_alpha(0.5)),
    ];
    for filter in &mut filters {
        let out = filter.push(10.0).unwrap();
        assert!(out > 0.0 && out <= 10.0);
        filter.reset();
    }
}
