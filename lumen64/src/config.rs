// --- Audio ---
pub const SAMPLE_RATE_HZ: u32 = 44_100;
pub const FRAME_LEN: usize = lumen_dsp::FRAME_LEN; // 512-sample analysis frames
pub const STEREO_SAMPLE_BYTES: usize = 4; // 2 bytes/channel, 2 channels

// --- Analysis ---
pub const AMPLITUDE: f32 = 200.0; // clamp ceiling and bar-height scale
pub const NOISE_FLOOR: f32 = 2_000.0; // bins at or below are dropped

// --- Display ---
pub const PANEL_BRIGHTNESS: u8 = 100; // fixed level during spectrum rendering

// --- Transport ---
pub const DEVICE_NAME: &str = "Lumen64"; // advertised to pairing devices

// --- Channel Config ---
pub const FRAME_CHANNEL_CAPACITY: usize = 1; // at most one frame in flight

// --- Diagnostics ---
pub const FPS_WINDOW_MS: u64 = 1_000; // rolling window for the FPS log
