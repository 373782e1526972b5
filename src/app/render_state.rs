use crate::app::mode::Stage;
use crate::boot::BootLine;
use crate::cards::images::Mime;
use crate::engine::reveal::{Accent, Frame};
use std::ops::Range;

/// One card position as the UI draws it.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotView {
    pub position: &'static str,
    pub desc: &'static str,
    pub card: &'static str,
    pub archetype: &'static str,
    /// Mime and encoded size when an image is cached.
    pub image: Option<(Mime, usize)>,
}

/// The analysis log as currently visible.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputView {
    pub text: String,
    pub accent: Accent,
    pub active: Range<usize>,
}

impl OutputView {
    pub fn settled(text: &str) -> Self {
        Self {
            text: text.to_string(),
            accent: Accent::Settled,
            active: 0..0,
        }
    }

    pub fn from_frame(frame: &Frame) -> Self {
        Self {
            text: frame.text.clone(),
            accent: frame.accent,
            active: frame.active.clone(),
        }
    }
}

/// Render state for UI components
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub stage: Stage,
    pub boot_lines: Vec<BootLine>,
    pub signal: u8,
    pub signal_locked: bool,
    pub placeholder: String,
    pub slots: Vec<SlotView>,
    pub output: Option<OutputView>,
    pub degraded: bool,
    pub status: Option<String>,
}

impl RenderState {
    pub fn empty(stage: Stage) -> Self {
        Self {
            stage,
            boot_lines: vec![],
            signal: 0,
            signal_locked: false,
            placeholder: String::new(),
            slots: vec![],
            output: None,
            degraded: false,
            status: None,
        }
    }
}
