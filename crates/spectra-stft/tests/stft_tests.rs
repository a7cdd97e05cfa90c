use spectra_stft::Stft;
use std::f64::consts::PI;

fn sine_bytes_s16le(freq: f64, fs: f64, n: usize) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(n * 2);
    for i in 0..n {
        let t = i as f64 / fs;
        let sample = (2.0 * PI * freq * t).sin();
        let v = (sample * 32767.0).round() as i16;
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    bytes
}

fn impulse_bytes_s16le(n: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; n * 2];
    let last = (n - 1) * 2;
    bytes[last..last + 2].copy_from_slice(&32767i16.to_le_bytes());
    bytes
}

#[test]
fn impulse_with_rectangular_window_has_near_constant_magnitude() {
    let n = 256;
    let mut stft = Stft::new("s16le", n).unwrap();
    stft.set_window("RECTANGULAR").unwrap();
    stft.set_width(64).unwrap();

    stft.shift_in(&impulse_bytes_s16le(n), n).unwrap();
    stft.transform().unwrap();

    let mut power = vec![0.0; 64];
    stft.calc_power(&mut power).unwrap();

    let max = power.iter().cloned().fold(f64::MIN, f64::max);
    let min = power.iter().cloned().fold(f64::MAX, f64::min);
    assert!(max - min < 3.0, "impulse response not flat: {} dB spread", max - min);
}

#[test]
fn pure_tone_peaks_near_expected_band() {
    let n = 1024;
    let fs = 44100.0;
    let tone = 1000.0;
    let width = 512;

    let mut stft = Stft::new("s16le", n).unwrap();
    stft.set_window("HANN").unwrap();
    stft.set_width(width).unwrap();
    stft.set_scale_mode("LOG").unwrap();
    stft.set_frequency(fs, 100.0, 16000.0).unwrap();

    stft.shift_in(&sine_bytes_s16le(tone, fs, n), n).unwrap();
    stft.transform().unwrap();

    let mut power = vec![0.0; width];
    stft.calc_power(&mut power).unwrap();

    let peak = power
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
        .map(|(i, _)| i)
        .unwrap();

    let expected = (0..width)
        .map(|i| {
            let ft = 100.0 * (16000.0f64 / 100.0).powf(i as f64 / width as f64);
            (i, (ft - tone).abs())
        })
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap())
        .map(|(i, _)| i)
        .unwrap();

    assert!(
        (peak as i64 - expected as i64).abs() <= 2,
        "peak band {} not within 2 of expected {}",
        peak,
        expected
    );
}

#[test]
fn silence_amplitude_is_negative_infinity() {
    let n = 512;
    let mut stft = Stft::new("s16le", n).unwrap();
    stft.shift_in(&vec![0u8; n * 2], n).unwrap();
    stft.transform().unwrap();

    let mut amp = vec![0.0; stft.width()];
    stft.calc_amplitude(&mut amp).unwrap();
    assert!(amp.iter().all(|v| v.is_infinite() && v.is_sign_negative()));
}

#[test]
fn bandmap_covers_every_configuration() {
    let n = 2048;
    let mut stft = Stft::new("s16le", n).unwrap();
    for mode in ["LINEAR", "LOG"] {
        stft.set_scale_mode(mode).unwrap();
        for width in [8usize, 64, 256, 512] {
            stft.set_width(width).unwrap();
            let total: usize = stft.bands().iter().map(|b| b.span).sum();
            assert!(total >= width);
            assert!(stft.bands().iter().all(|b| b.span >= 1));
        }
    }
}

#[test]
fn set_width_failure_leaves_previous_bandmap_intact() {
    let n = 1024;
    let mut stft = Stft::new("s16le", n).unwrap();
    stft.set_width(300).unwrap();
    let before: Vec<_> = stft.bands().to_vec();

    let err = stft.set_width(1000).unwrap_err();
    assert!(matches!(err, spectra_stft::StftError::InvalidWidth { .. }));
    assert_eq!(stft.bands(), before.as_slice());
    assert_eq!(stft.width(), 300);
}

#[test]
fn shift_in_rejects_count_above_capacity() {
    let mut stft = Stft::new("s16le", 256).unwrap();
    let err = stft.shift_in(&vec![0u8; 1024], 512).unwrap_err();
    assert!(matches!(err, spectra_stft::StftError::InvalidLength { .. }));
}

#[test]
fn reset_zeroes_buffer_and_used_count() {
    let n = 128;
    let mut stft = Stft::new("s16le", n).unwrap();
    stft.shift_in(&sine_bytes_s16le(440.0, 44100.0, n), n).unwrap();
    assert_eq!(stft.used(), n);

    stft.reset();
    assert_eq!(stft.used(), 0);
    assert!(stft.is_running());
}

#[test]
fn end_to_end_scenario_hann_log_1khz_peak() {
    let n = 1024;
    let fs = 44100.0;
    let width = 512;

    let mut stft = Stft::new("s16le", n).unwrap();
    stft.set_window("HANN").unwrap();
    stft.set_width(width).unwrap();
    stft.set_scale_mode("LOG").unwrap();
    stft.set_frequency(fs, 100.0, 16000.0).unwrap();

    stft.shift_in(&sine_bytes_s16le(1000.0, fs, n), n).unwrap();
    stft.transform().unwrap();

    let mut power = vec![0.0; width];
    stft.calc_power(&mut power).unwrap();

    let (peak_idx, peak_val) = power
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
        .unwrap();
    let median = {
        let mut sorted = power.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        sorted[sorted.len() / 2]
    };
    assert!(peak_val - median > 10.0, "expected a clear spectral peak");
    assert!(peak_idx > 0 && peak_idx < width - 1);
}

#[test]
fn calc_absolute_is_non_negative() {
    let n = 256;
    let mut stft = Stft::new("s16le", n).unwrap();
    stft.shift_in(&sine_bytes_s16le(2000.0, 44100.0, n), n).unwrap();
    stft.transform().unwrap();

    let mut out = vec![0.0; stft.width()];
    stft.calc_absolute(&mut out).unwrap();
    assert!(out.iter().all(|&v| v >= 0.0));
}

#[test]
fn invalid_frequency_params_are_rejected() {
    let mut stft = Stft::new("s16le", 1024).unwrap();
    assert!(stft.set_frequency(44100.0, 20000.0, 100.0).is_err());
    assert!(stft.set_frequency(44100.0, 100.0, 30000.0).is_err());
}

#[test]
fn unknown_window_and_scale_mode_are_rejected() {
    let mut stft = Stft::new("s16le", 256).unwrap();
    assert!(stft.set_window("SAWTOOTH").is_err());
    assert!(stft.set_scale_mode("MEL").is_err());
}
