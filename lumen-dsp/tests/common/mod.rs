use lumen_dsp::FRAME_LEN;
use wavegen::{sine, wf};

pub const SAMPLE_RATE: f32 = 44_100.0;

/// Width of one FFT bin in Hz.
pub const BIN_HZ: f32 = SAMPLE_RATE / FRAME_LEN as f32;

/// Synthesize one analysis frame of a pure sine at raw 16-bit scale.
pub fn sine_frame(frequency: f32, amplitude: f32) -> [f32; FRAME_LEN] {
    let waveform = wf!(f32, SAMPLE_RATE, sine!(frequency: frequency, amplitude: amplitude));
    let mut frame = [0.0; FRAME_LEN];
    for (slot, sample) in frame.iter_mut().zip(waveform.iter()) {
        *slot = sample;
    }
    frame
}

/// Index of the bin with the largest magnitude in the usable range.
pub fn dominant_bin(magnitudes: &[f32]) -> usize {
    let mut best = lumen_dsp::FIRST_BIN;
    for bin in lumen_dsp::FIRST_BIN..magnitudes.len() {
        if magnitudes[bin] > magnitudes[best] {
            best = bin;
        }
    }
    best
}
