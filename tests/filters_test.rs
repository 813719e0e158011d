use midi_panel::filters::EmaFilter;
use midi_panel::{AnalogChannel, AnalogSpec, NoiseFilter};

#[test]
fn ema_documented_steps() {
    let mut filter = EmaFilter::new();

    let out1 = filter.apply(100.0, 0.4);
    assert!((out1 - 40.0).abs() < 1e-4, "Expected 40, got {}", out1);

    let out2 = filter.apply(100.0, 0.4);
    assert!((out2 - 64.0).abs() < 1e-4, "Expected 64, got {}", out2);
}

#[test]
fn ema_converges_monotonically_from_below() {
    let mut filter = EmaFilter::new();

    let mut previous = filter.value();
    for _ in 0..100 {
        let output = filter.apply(1023.0, 0.4);
        assert!(output >= previous, "{} fell below {}", output, previous);
        assert!(output <= 1023.0);
        previous = output;
    }

    assert!((previous - 1023.0).abs() < 0.01);
}

#[test]
fn ema_converges_monotonically_from_above() {
    let mut filter = EmaFilter::with_value(900.0);

    let mut previous = filter.value();
    for _ in 0..100 {
        let output = filter.apply(100.0, 0.25);
        assert!(output <= previous, "{} rose above {}", output, previous);
        assert!(output >= 100.0);
        previous = output;
    }

    assert!((previous - 100.0).abs() < 0.01);
}

#[test]
fn ema_filters_noise() {
    let mut filter = EmaFilter::with_value(512.0);

    // Noisy signal around 512
    let noisy_samples = [512.0, 560.0, 470.0, 530.0, 490.0, 515.0];
    let mut outputs = Vec::new();

    for &sample in &noisy_samples {
        outputs.push(filter.apply(sample, 0.2));
    }

    assert!(variance(&outputs) < variance(&noisy_samples));
}

#[test]
fn channel_without_filter_tracks_raw_samples() {
    let spec = AnalogSpec::new("raw", 0, 1)
        .bit_shift(0)
        .filter(NoiseFilter::None);
    let mut channel = AnalogChannel::new(spec).expect("Valid spec");

    assert_eq!(channel.update(300_u16), Some(300));
    assert_eq!(channel.update(300_u16), None);
    assert_eq!(channel.update(12_u16), Some(12));
}

#[test]
fn invalid_alpha_rejected() {
    assert!(NoiseFilter::ExponentialMovingAverage { alpha: 0.0 }.validate().is_err());
    assert!(NoiseFilter::ExponentialMovingAverage { alpha: 1.01 }.validate().is_err());
    assert!(NoiseFilter::ExponentialMovingAverage { alpha: 1.0 }.validate().is_ok());
    assert!(NoiseFilter::None.validate().is_ok());

    let spec = AnalogSpec::new("bad", 0, 1)
        .filter(NoiseFilter::ExponentialMovingAverage { alpha: -0.5 });
    assert!(AnalogChannel::new(spec).is_err());
}

fn variance(data: &[f32]) -> f32 {
    let mean: f32 = data.iter().sum::<f32>() / data.len() as f32;
    data.iter().map(|x| (x - mean).powi(2)).sum::<f32>() / data.len() as f32
}
