//! Glitch Oracle: a terminal tarot reader that reveals its readings through
//! a glitching typewriter animation.

pub mod app;
pub mod boot;
pub mod cards;
pub mod config;
pub mod engine;
pub mod export;
pub mod narrative;
pub mod ui;
