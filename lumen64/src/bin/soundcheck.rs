//! Host check for the full pipeline: synthesizes a stereo tone, feeds it
//! through ingestion exactly as a transport callback would, and lets the
//! worker render to a console panel instead of real hardware.

use std::f32::consts::PI;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use anyhow::Result;
use lumen64::config::{DEVICE_NAME, FRAME_LEN, SAMPLE_RATE_HZ};
use lumen64::{ingest, Analyzer, AudioSink, FrameSlot};
use lumen_viz::{Frame, LedPanel, MATRIX_HEIGHT, NUM_BANDS};

static SLOT: FrameSlot = FrameSlot::new();
static STOP: AtomicBool = AtomicBool::new(false);

/// Stand-in for the playback path; only counts what it was forwarded.
struct ByteCountSink {
    bytes: usize,
}

impl AudioSink for ByteCountSink {
    fn submit(&mut self, data: &[u8]) {
        self.bytes += data.len();
    }
}

/// Prints the bar heights instead of driving LEDs.
struct ConsolePanel {
    level: u8,
    flushes: u32,
}

impl ConsolePanel {
    fn heights(frame: &Frame) -> [usize; NUM_BANDS] {
        let mut heights = [0; NUM_BANDS];
        for (band, height) in heights.iter_mut().enumerate() {
            let y = MATRIX_HEIGHT - 1 - band;
            *height = (0..8).filter(|&x| frame.is_lit(x, y)).count();
        }
        heights
    }
}

impl LedPanel for ConsolePanel {
    type Error = core::convert::Infallible;

    fn set_brightness(&mut self, level: u8) {
        self.level = level;
    }

    fn flush(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        self.flushes += 1;
        if self.flushes % 16 == 0 {
            println!(
                "bands {:?} @ brightness {}",
                Self::heights(frame),
                self.level
            );
        }
        Ok(())
    }
}

/// One transport block: 512 stereo pairs of a bin-centered ~1 kHz sine.
fn tone_block() -> Vec<u8> {
    let frequency = 12.0 * SAMPLE_RATE_HZ as f32 / FRAME_LEN as f32;
    let mut block = Vec::with_capacity(FRAME_LEN * 4);
    for n in 0..FRAME_LEN {
        let phase = 2.0 * PI * frequency * n as f32 / SAMPLE_RATE_HZ as f32;
        let sample = (phase.sin() * 8_000.0) as i16;
        let bytes = sample.to_le_bytes();
        block.extend_from_slice(&bytes);
        block.extend_from_slice(&bytes);
    }
    block
}

fn main() -> Result<()> {
    println!("{DEVICE_NAME} soundcheck: ~1 kHz tone for two seconds");

    let worker = std::thread::spawn(|| {
        let mut analyzer = Analyzer::new();
        let mut panel = ConsolePanel {
            level: 0,
            flushes: 0,
        };
        let start = Instant::now();
        analyzer.run(&SLOT, &mut panel, &STOP, move || {
            start.elapsed().as_millis() as u64
        });
        panel
    });

    let block = tone_block();
    let mut sink = ByteCountSink { bytes: 0 };
    for _ in 0..172 {
        ingest(&SLOT, &mut sink, &STOP, &block);
        std::thread::sleep(Duration::from_millis(12));
    }

    STOP.store(true, Ordering::Relaxed);
    let panel = worker.join().expect("analysis worker panicked");
    println!(
        "forwarded {} bytes to the sink, {} matrix flushes",
        sink.bytes, panel.flushes
    );
    Ok(())
}
