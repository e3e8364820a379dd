#![no_std]

pub mod analyzer;
pub mod config;
pub mod idle;
pub mod ingest;

pub use analyzer::{Analyzer, FpsCounter};
pub use idle::{boot_animation, icon_for, IdleDisplay, LinkState, OneShotPlayer};
pub use ingest::{decode_frame, ingest, AnalysisFrame, AudioSink, FrameSlot};
