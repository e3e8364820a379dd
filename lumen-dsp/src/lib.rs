#![no_std]

use microfft::{complex::cfft_512, Complex32};
use micromath::F32Ext;

/// Samples per analysis frame (~11.6 ms of mono audio at 44.1 kHz).
pub const FRAME_LEN: usize = 512;

/// Usable half of the magnitude spectrum.
pub const BIN_COUNT: usize = FRAME_LEN / 2;

/// First spectrum bin carrying signal; bins 0 and 1 are DC/near-DC noise.
pub const FIRST_BIN: usize = 2;

/// Apply a Hamming window to a frame in place.
pub fn apply_hamming_window(samples: &mut [f32; FRAME_LEN]) {
    let denom = (FRAME_LEN - 1) as f32;
    for (i, sample) in samples.iter_mut().enumerate() {
        let phase = 2.0 * core::f32::consts::PI * i as f32 / denom;
        *sample *= 0.54 - 0.46 * phase.cos();
    }
}

/// Compute the forward FFT of a windowed frame; the imaginary input is zero.
pub fn compute_fft(samples: &[f32; FRAME_LEN]) -> [Complex32; FRAME_LEN] {
    let mut buffer = [Complex32 { re: 0.0, im: 0.0 }; FRAME_LEN];
    for (slot, &sample) in buffer.iter_mut().zip(samples.iter()) {
        slot.re = sample;
    }
    cfft_512(&mut buffer);
    buffer
}

/// Compute per-bin magnitudes over the usable half of the spectrum.
pub fn compute_magnitudes(spectrum: &[Complex32; FRAME_LEN]) -> [f32; BIN_COUNT] {
    let mut magnitudes = [0.0; BIN_COUNT];
    for (magnitude, bin) in magnitudes.iter_mut().zip(spectrum.iter()) {
        *magnitude = (bin.re * bin.re + bin.im * bin.im).sqrt();
    }
    magnitudes
}

/// Process a frame of mono samples and return the magnitude spectrum.
///
/// Samples stay in raw 16-bit scale; the downstream noise floor and
/// amplitude constants are calibrated against unnormalized magnitudes.
pub fn process_frame(samples: &[f32; FRAME_LEN]) -> [f32; BIN_COUNT] {
    // Step 1: window the frame to limit spectral leakage
    let mut windowed = *samples;
    apply_hamming_window(&mut windowed);

    // Step 2: forward transform
    let spectrum = compute_fft(&windowed);

    // Step 3: magnitude spectrum
    compute_magnitudes(&spectrum)
}
