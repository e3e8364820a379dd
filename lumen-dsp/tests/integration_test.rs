use approx::assert_relative_eq;
use lumen_dsp::{process_frame, BIN_COUNT, FIRST_BIN, FRAME_LEN};
use rand::Rng;

pub mod common;
use common::*;

#[test]
fn test_bin_centered_sine_peaks_at_its_bin() {
    // 12 * 44100 / 512 ≈ 1033.6 Hz lands exactly on bin 12.
    let frame = sine_frame(12.0 * BIN_HZ, 8_000.0);
    let magnitudes = process_frame(&frame);
    assert_eq!(dominant_bin(&magnitudes), 12);
}

#[test]
fn test_off_bin_sine_peaks_at_neighbor() {
    // 1 kHz falls between bins 11 and 12.
    let frame = sine_frame(1_000.0, 8_000.0);
    let magnitudes = process_frame(&frame);
    let peak = dominant_bin(&magnitudes);
    assert!(peak == 11 || peak == 12, "peak bin was {}", peak);
}

#[test]
fn test_peak_magnitude_tracks_amplitude() {
    let quiet = process_frame(&sine_frame(12.0 * BIN_HZ, 2_000.0));
    let loud = process_frame(&sine_frame(12.0 * BIN_HZ, 4_000.0));
    assert_relative_eq!(loud[12], 2.0 * quiet[12], max_relative = 0.1);
}

#[test]
fn test_window_concentrates_energy() {
    let frame = sine_frame(12.0 * BIN_HZ, 8_000.0);
    let magnitudes = process_frame(&frame);
    let peak = magnitudes[12];
    assert!(peak > 0.0);

    // Outside the main lobe everything stays far below the peak.
    for bin in FIRST_BIN..BIN_COUNT {
        if bin.abs_diff(12) > 4 {
            assert!(
                magnitudes[bin] < 0.02 * peak,
                "bin {} leaked {} against peak {}",
                bin,
                magnitudes[bin],
                peak
            );
        }
    }
}

#[test]
fn test_noise_frame_yields_finite_spectrum() {
    let mut rng = rand::rng();
    let mut frame = [0.0; FRAME_LEN];
    for sample in frame.iter_mut() {
        *sample = rng.random_range(-30_000.0..30_000.0);
    }

    let magnitudes = process_frame(&frame);
    assert!(magnitudes.iter().all(|m| m.is_finite() && *m >= 0.0));
}
