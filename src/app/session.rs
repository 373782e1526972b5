use super::mode::Stage;
use crate::boot::{boot_script, BootLine};
use crate::cards::images::ImageCache;
use crate::cards::{random_card, Card, Spread};
use crate::engine::config::BootConfig;
use crate::narrative::Interpretation;
use rand::Rng;
use std::path::PathBuf;

pub const SIGNAL_MAX: u8 = 100;
pub const SIGNAL_STEP: u8 = 5;

/// Everything that belongs to one run of the oracle. A reboot replaces it
/// wholesale.
#[derive(Debug)]
pub struct Session {
    pub stage: Stage,
    pub boot_complete: bool,
    pub boot_lines: Vec<BootLine>,
    /// How many boot lines have been shown so far.
    pub boot_shown: usize,
    pub query: String,
    pub signal: u8,
    pub spread: Option<Spread>,
    pub interpretation: Option<Interpretation>,
    /// The current reading has been animated once.
    pub streamed: bool,
    /// Card named in the query prompt.
    pub placeholder_card: &'static Card,
    pub images: ImageCache,
    pub status: Option<String>,
}

impl Session {
    pub fn new<R>(rng: &mut R, assets_dir: impl Into<PathBuf>, boot: &BootConfig) -> Self
    where
        R: Rng + ?Sized,
    {
        let (stage, boot_lines) = if boot.enabled {
            (Stage::Boot, boot_script(rng, boot))
        } else {
            (Stage::Input, Vec::new())
        };
        let assets_dir = assets_dir.into();
        // without a boot sequence there is no preload line, so load eagerly
        let images = if boot.enabled {
            ImageCache::lazy(assets_dir)
        } else {
            ImageCache::preload(assets_dir)
        };

        Self {
            stage,
            boot_complete: !boot.enabled,
            boot_lines,
            boot_shown: 0,
            query: String::new(),
            signal: 0,
            spread: None,
            interpretation: None,
            streamed: false,
            placeholder_card: random_card(rng),
            images,
            status: None,
        }
    }

    /// Fresh session on the same asset directory.
    pub fn reset<R>(&mut self, rng: &mut R, boot: &BootConfig)
    where
        R: Rng + ?Sized,
    {
        let dir = self.images.dir().map(PathBuf::from).unwrap_or_default();
        *self = Session::new(rng, dir, boot);
    }

    pub fn visible_boot_lines(&self) -> &[BootLine] {
        &self.boot_lines[..self.boot_shown.min(self.boot_lines.len())]
    }

    pub fn adjust_signal(&mut self, steps: i32) {
        let next = i32::from(self.signal) + steps * i32::from(SIGNAL_STEP);
        self.signal = next.clamp(0, i32::from(SIGNAL_MAX)) as u8;
    }

    pub fn signal_locked(&self) -> bool {
        self.signal >= SIGNAL_MAX
    }

    pub fn query_placeholder(&self) -> String {
        format!("The silent whisper of the {}", self.placeholder_card.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session(boot: &BootConfig) -> Session {
        let mut rng = StdRng::seed_from_u64(11);
        Session::new(&mut rng, "/nonexistent/cards", boot)
    }

    #[test]
    fn test_new_session_starts_in_boot() {
        let session = session(&BootConfig::default());
        assert_eq!(session.stage, Stage::Boot);
        assert!(!session.boot_complete);
        assert!(!session.boot_lines.is_empty());
        assert!(session.visible_boot_lines().is_empty());
        assert_eq!(session.signal, 0);
        assert!(session.spread.is_none());
        assert!(!session.streamed);
    }

    #[test]
    fn test_disabled_boot_goes_straight_to_input() {
        let boot = BootConfig {
            enabled: false,
            ..BootConfig::default()
        };
        let session = session(&boot);
        assert_eq!(session.stage, Stage::Input);
        assert!(session.boot_complete);
        assert!(session.boot_lines.is_empty());
    }

    #[test]
    fn test_signal_steps_and_bounds() {
        let mut session = session(&BootConfig::default());
        session.adjust_signal(1);
        assert_eq!(session.signal, 5);
        session.adjust_signal(-3);
        assert_eq!(session.signal, 0);
        session.adjust_signal(19);
        assert!(!session.signal_locked());
        session.adjust_signal(50);
        assert_eq!(session.signal, SIGNAL_MAX);
        assert!(session.signal_locked());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut session = Session::new(&mut rng, "/nonexistent/cards", &BootConfig::default());
        session.query = "what now".to_string();
        session.signal = 100;
        session.boot_shown = 3;
        session.streamed = true;
        session.status = Some("SAVED".to_string());

        session.reset(&mut rng, &BootConfig::default());
        assert_eq!(session.stage, Stage::Boot);
        assert!(session.query.is_empty());
        assert_eq!(session.signal, 0);
        assert_eq!(session.boot_shown, 0);
        assert!(!session.streamed);
        assert!(session.status.is_none());
        assert_eq!(
            session.images.dir(),
            Some(std::path::Path::new("/nonexistent/cards"))
        );
    }

    #[test]
    fn test_query_placeholder_names_card() {
        let session = session(&BootConfig::default());
        assert!(session
            .query_placeholder()
            .ends_with(session.placeholder_card.name));
    }
}
