use core::sync::atomic::{AtomicBool, Ordering};

use lumen_dsp::process_frame;
use lumen_viz::{render_bars, BandMapper, Frame, LedPanel, NUM_BANDS};

use crate::config::{AMPLITUDE, FPS_WINDOW_MS, NOISE_FLOOR, PANEL_BRIGHTNESS};
use crate::ingest::{AnalysisFrame, FrameSlot};

/// Render-rate diagnostic over rolling one-second windows. Logging only,
/// no functional effect.
pub struct FpsCounter {
    frames: u32,
    window_start_ms: u64,
}

impl FpsCounter {
    pub const fn new() -> Self {
        Self {
            frames: 0,
            window_start_ms: 0,
        }
    }

    /// Count one pass; reports the rate at each window edge.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        self.frames += 1;
        let elapsed = now_ms.saturating_sub(self.window_start_ms);
        if elapsed < FPS_WINDOW_MS {
            return None;
        }
        let fps = self.frames as f32 * 1_000.0 / elapsed as f32;
        self.frames = 0;
        self.window_start_ms = now_ms;
        Some(fps)
    }
}

/// The spectrum worker: analysis, band mapping and rendering state for the
/// streaming path. Ingestion never touches any of this.
pub struct Analyzer {
    mapper: BandMapper,
    frame: Frame,
    fps: FpsCounter,
}

impl Analyzer {
    pub const fn new() -> Self {
        Self {
            mapper: BandMapper::new(AMPLITUDE, NOISE_FLOOR),
            frame: Frame::new(),
            fps: FpsCounter::new(),
        }
    }

    /// One full pass: magnitude spectrum, band peaks, bar heights, then a
    /// matrix flush at the fixed spectrum brightness.
    pub fn process_pass<P: LedPanel>(
        &mut self,
        samples: &AnalysisFrame,
        panel: &mut P,
    ) -> Result<(), P::Error> {
        let magnitudes = process_frame(samples);
        let peaks = self.mapper.map_frame(&magnitudes);

        let mut heights = [0u32; NUM_BANDS];
        for (height, &peak) in heights.iter_mut().zip(peaks.iter()) {
            *height = self.mapper.bar_height(peak);
        }

        render_bars(&heights, &mut self.frame);
        panel.set_brightness(PANEL_BRIGHTNESS);
        panel.flush(&self.frame)
    }

    /// Consume frames until the stop flag is raised.
    ///
    /// Busy-polls the slot so the producer is never blocked and at most one
    /// frame is pending. A failed flush drops that pass; nothing propagates.
    /// Run this on a dedicated execution unit (a pinned core or isolated
    /// high-priority task) so analysis latency stays independent of
    /// unrelated work.
    pub fn run<P: LedPanel>(
        &mut self,
        slot: &FrameSlot,
        panel: &mut P,
        stop: &AtomicBool,
        mut now_ms: impl FnMut() -> u64,
    ) {
        while !stop.load(Ordering::Relaxed) {
            let Ok(samples) = slot.try_receive() else {
                core::hint::spin_loop();
                continue;
            };

            if self.process_pass(&samples, panel).is_err() {
                #[cfg(feature = "logging")]
                defmt::error!("matrix flush failed, pass dropped");
            }

            if let Some(_fps) = self.fps.tick(now_ms()) {
                #[cfg(feature = "logging")]
                defmt::info!("fps: {}", _fps);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_counter_reports_at_window_edges() {
        let mut fps = FpsCounter::new();
        for t in (0..1_000).step_by(100) {
            assert_eq!(fps.tick(t), None, "t {}", t);
        }
        let rate = fps.tick(1_000).expect("window edge");
        assert!((rate - 11.0).abs() < 0.01);
        assert_eq!(fps.tick(1_100), None);
    }
}
