use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel};

use crate::config::{FRAME_CHANNEL_CAPACITY, FRAME_LEN, STEREO_SAMPLE_BYTES};

/// Mono samples for one spectral analysis pass.
pub type AnalysisFrame = [f32; FRAME_LEN];

/// Hand-off between the delivery context and the analysis worker.
///
/// Capacity 1: the producer never buffers more than one pending frame, and
/// neither side ever blocks on the other.
pub type FrameSlot = Channel<CriticalSectionRawMutex, AnalysisFrame, FRAME_CHANNEL_CAPACITY>;

/// Playback side of the transport; receives every delivered byte block.
pub trait AudioSink {
    fn submit(&mut self, data: &[u8]);
}

/// Decode the first [`FRAME_LEN`] interleaved little-endian stereo pairs
/// into a mono frame as `(left + right) / 2`.
pub fn decode_frame(data: &[u8]) -> AnalysisFrame {
    let mut frame = [0.0; FRAME_LEN];
    for (slot, pair) in frame.iter_mut().zip(data.chunks_exact(STEREO_SAMPLE_BYTES)) {
        let left = i16::from_le_bytes([pair[0], pair[1]]);
        let right = i16::from_le_bytes([pair[2], pair[3]]);
        *slot = (left as f32 + right as f32) / 2.0;
    }
    frame
}

/// Entry point for the transport's data callback.
///
/// Runs on the delivery context and must stay bounded: when the slot is
/// occupied the incoming block is not analyzed at all — freshness over
/// completeness. The raw bytes are forwarded to the sink unconditionally;
/// visualization never delays playback.
pub fn ingest(slot: &FrameSlot, sink: &mut impl AudioSink, stop: &AtomicBool, data: &[u8]) {
    if !stop.load(Ordering::Relaxed)
        && data.len() >= FRAME_LEN * STEREO_SAMPLE_BYTES
        && !slot.is_full()
    {
        // Cannot fail: this context is the only producer.
        let _ = slot.try_send(decode_frame(data));
    }
    sink.submit(data);
}
