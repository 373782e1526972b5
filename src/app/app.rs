use super::event::AppEvent;
use super::mode::Stage;
use super::render_state::{OutputView, RenderState, SlotView};
use super::session::Session;
use crate::boot::BootLine;
use crate::cards::draw_spread;
use crate::cards::images::ImageCache;
use crate::config::AppConfig;
use crate::engine::config::GlitchConfig;
use crate::engine::reveal::{reveal, Frame, RevealFrames};
use crate::engine::vocabulary::VocabularyTable;
use crate::export::{self, DEFAULT_HTML_FILE, DEFAULT_LOG_FILE};
use crate::narrative::{build_generator, generate_interpretation, NarrativeGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

pub const HELP_TEXT: &str = "ENTER transmit · ←/→ calibrate signal · :save [path] · :html [path] · :reboot · :q";

pub struct App {
    config: AppConfig,
    glitch: GlitchConfig,
    vocabulary: VocabularyTable,
    generator: Box<dyn NarrativeGenerator>,
    rng: StdRng,
    session: Session,
}

impl App {
    /// Picks the narrative generator from the config.
    pub fn new(config: AppConfig, seed: Option<u64>) -> Self {
        let generator = build_generator(&config.narrative);
        Self::with_generator(config, generator, seed)
    }

    pub fn with_generator(
        config: AppConfig,
        generator: Box<dyn NarrativeGenerator>,
        seed: Option<u64>,
    ) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let vocabulary = VocabularyTable::builtin().with_overrides(config.vocabulary.clone());
        let glitch = config.glitch.clone().sanitized();
        let session = Session::new(&mut rng, config.assets.cards_dir.clone(), &config.boot);
        tracing::info!(
            generator = generator.name(),
            vocabulary = vocabulary.len(),
            stage = session.stage.label(),
            "oracle initialized"
        );

        Self {
            config,
            glitch,
            vocabulary,
            generator,
            rng,
            session,
        }
    }

    pub fn stage(&self) -> Stage {
        self.session.stage
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }

    /// Shows the next boot line, preloading images when it asks for it.
    /// Returns `None` once the script is exhausted.
    pub fn advance_boot(&mut self) -> Option<BootLine> {
        if self.session.stage != Stage::Boot {
            return None;
        }
        let line = self.session.boot_lines.get(self.session.boot_shown)?.clone();
        self.session.boot_shown += 1;
        if line.preload {
            self.preload_images();
        }
        Some(line)
    }

    /// Skips whatever is left of the boot log and enters the input stage.
    pub fn finish_boot(&mut self) {
        if self.session.stage != Stage::Boot {
            return;
        }
        let preloaded = self.session.visible_boot_lines().iter().any(|l| l.preload);
        if !preloaded {
            self.preload_images();
        }
        self.session.boot_shown = self.session.boot_lines.len();
        self.session.boot_complete = true;
        self.session.stage = Stage::Input;
        tracing::info!("boot complete");
    }

    fn preload_images(&mut self) {
        if let Some(dir) = self.session.images.dir().map(PathBuf::from) {
            self.session.images = ImageCache::preload(dir);
        }
    }

    /// Draws a spread and generates its reading. Refused until the signal is
    /// locked; the refusal is reported through the status line.
    pub fn transmit(&mut self, query: &str) -> bool {
        if self.session.stage != Stage::Input {
            return false;
        }
        if !self.session.signal_locked() {
            self.session.status = Some(format!(
                "SIGNAL STRENGTH: {}%. CALIBRATE TO 100% BEFORE TRANSMITTING.",
                self.session.signal
            ));
            return false;
        }

        let spread = match draw_spread(&mut self.rng) {
            Ok(spread) => spread,
            Err(err) => {
                tracing::error!(%err, "spread rejected");
                self.session.status = Some(format!("DRAW FAILED: {}", err));
                return false;
            }
        };
        tracing::info!(cards = ?spread.names(), "transmitting");
        let interpretation = generate_interpretation(self.generator.as_ref(), spread, query);

        let session = &mut self.session;
        for card in spread.cards() {
            if session.images.load(card.name).is_none() {
                tracing::debug!(card = card.name, "no image for drawn card");
            }
        }
        session.status = interpretation
            .is_degraded()
            .then(|| "SIGNAL DEGRADED. LOCAL BUFFER ENGAGED.".to_string());
        session.query = query.trim().to_string();
        session.spread = Some(spread);
        session.interpretation = Some(interpretation);
        session.streamed = false;
        session.placeholder_card = crate::cards::random_card(&mut self.rng);
        session.stage = Stage::Reading;
        true
    }

    /// Fresh frames for the current reading; each call rolls new glitches.
    pub fn reveal_frames(&mut self) -> Option<RevealFrames> {
        let interpretation = self.session.interpretation.as_ref()?;
        Some(reveal(
            &interpretation.text,
            &self.vocabulary,
            &self.glitch,
            &self.config.reveal,
            &mut self.rng,
        ))
    }

    pub fn mark_streamed(&mut self) {
        self.session.streamed = true;
    }

    pub fn reboot(&mut self) {
        tracing::info!("reboot requested");
        self.session.reset(&mut self.rng, &self.config.boot);
    }

    pub fn save_log(&mut self, path: Option<PathBuf>) {
        let Some(interpretation) = self.session.interpretation.as_ref() else {
            self.session.status = Some("NOTHING TO SAVE. NO READING IN BUFFER.".to_string());
            return;
        };
        let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
        self.session.status = Some(match export::save_log(&path, interpretation) {
            Ok(()) => format!("LOG WRITTEN: {}", path.display()),
            Err(err) => {
                tracing::warn!(%err, "saving log failed");
                format!("WRITE FAILED: {}", err)
            }
        });
    }

    pub fn save_html(&mut self, path: Option<PathBuf>) {
        let (Some(spread), Some(interpretation)) =
            (self.session.spread.as_ref(), self.session.interpretation.as_ref())
        else {
            self.session.status = Some("NOTHING TO SAVE. NO READING IN BUFFER.".to_string());
            return;
        };
        let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_HTML_FILE));
        let result = export::save_html(&path, spread, interpretation, &self.session.images);
        self.session.status = Some(match result {
            Ok(()) => format!("PAGE WRITTEN: {}", path.display()),
            Err(err) => {
                tracing::warn!(%err, "saving page failed");
                format!("WRITE FAILED: {}", err)
            }
        });
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => {
                self.session.stage = Stage::Quit;
            }
            AppEvent::Help => {
                self.session.status = Some(HELP_TEXT.to_string());
            }
            AppEvent::Transmit(query) => {
                self.transmit(&query);
            }
            AppEvent::AdjustSignal(steps) => {
                if self.session.stage == Stage::Input {
                    self.session.adjust_signal(steps);
                }
            }
            AppEvent::SaveLog(path) => self.save_log(path),
            AppEvent::SaveHtml(path) => self.save_html(path),
            AppEvent::Reboot => self.reboot(),
            AppEvent::InvalidCommand(input) => {
                self.session.status = Some(format!("UNKNOWN COMMAND: {}", input));
            }
            AppEvent::None => {}
        }
    }

    /// Snapshot for drawing. `frame` is the reveal frame in flight, if any.
    pub fn render_state(&self, frame: Option<&Frame>) -> RenderState {
        let session = &self.session;
        let mut state = RenderState::empty(session.stage);
        state.boot_lines = session.visible_boot_lines().to_vec();
        state.signal = session.signal;
        state.signal_locked = session.signal_locked();
        state.placeholder = session.query_placeholder();
        state.status = session.status.clone();

        if let Some(spread) = session.spread.as_ref() {
            state.slots = spread
                .slots()
                .map(|(position, card)| SlotView {
                    position: position.name,
                    desc: position.desc,
                    card: card.name,
                    archetype: card.archetype,
                    image: session
                        .images
                        .get(card.name)
                        .map(|image| (image.mime, image.encoded_len())),
                })
                .collect();
        }

        if let Some(interpretation) = session.interpretation.as_ref() {
            state.degraded = interpretation.is_degraded();
            state.output = match frame {
                Some(frame) => Some(OutputView::from_frame(frame)),
                None if session.streamed => Some(OutputView::settled(&interpretation.text)),
                None => None,
            };
        }
        state
    }
}
