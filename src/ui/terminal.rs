use crate::app::{App, AppEvent, RenderState, Stage};
use crate::cards::POSITIONS;
use crate::engine::playback::{play, Pace, Pacer};
use crate::engine::reveal::Frame;
use crate::ui::command::{command_to_app_event, parse_command};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::view::{
    render_awaiting_slot, render_boot_log, render_card_slot, render_header, render_input_panel,
    render_output, render_status_line,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame as TuiFrame, Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

const INPUT_POLL: Duration = Duration::from_millis(250);
const SLOT_HEIGHT: u16 = 9;

const BOOT_HINT: &str = "[ ENTER ORACLE ] press ENTER · any key skips the log";
const INPUT_HINT: &str = "ENTER transmit · ←/→ calibrate · :h help · :q quit";
const READING_HINT: &str = "[s] DOWNLOAD_LOG.TXT · [h] save page · [r] SYSTEM_REBOOT · [q] quit";
const STREAM_HINT: &str = "any key completes the transmission";

/// Waits out frame delays while watching the keyboard; a key press interrupts.
pub struct TuiPacer;

impl Pacer for TuiPacer {
    fn wait(&mut self, delay: Duration) -> io::Result<Pace> {
        let deadline = Instant::now() + delay;
        loop {
            let now = Instant::now();
            if now >= deadline {
                return Ok(Pace::Continue);
            }
            if event::poll(deadline - now)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        return Ok(Pace::Interrupted);
                    }
                }
            }
        }
    }
}

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    input: String,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            input: String::new(),
            _guard: guard,
        })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        loop {
            match app.stage() {
                Stage::Quit => return Ok(()),
                Stage::Boot => self.run_boot(app)?,
                Stage::Input => self.handle_input(app)?,
                Stage::Reading if !app.session().streamed => self.stream_reading(app)?,
                Stage::Reading => self.handle_reading_keys(app)?,
            }
        }
    }

    fn run_boot(&mut self, app: &mut App) -> io::Result<()> {
        let mut pacer = TuiPacer;
        let mut skipped = false;
        while let Some(line) = app.advance_boot() {
            self.render_frame(app, None, None)?;
            if pacer.wait(line.delay)? == Pace::Interrupted {
                skipped = true;
                break;
            }
        }

        if !skipped {
            self.render_frame(app, None, Some(BOOT_HINT))?;
            loop {
                if let Some(key) = read_key(INPUT_POLL)? {
                    if is_quit(&key) {
                        app.handle_event(AppEvent::Quit);
                        return Ok(());
                    }
                    if key.code == KeyCode::Enter {
                        break;
                    }
                }
            }
        }
        app.finish_boot();
        self.input.clear();
        Ok(())
    }

    fn handle_input(&mut self, app: &mut App) -> io::Result<()> {
        self.render_frame(app, None, None)?;
        let Some(key) = read_key(INPUT_POLL)? else {
            return Ok(());
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            app.handle_event(AppEvent::Quit);
            return Ok(());
        }

        match key.code {
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Esc => self.input.clear(),
            KeyCode::Left => app.handle_event(AppEvent::AdjustSignal(-1)),
            KeyCode::Right => app.handle_event(AppEvent::AdjustSignal(1)),
            KeyCode::Down | KeyCode::PageDown => app.handle_event(AppEvent::AdjustSignal(-4)),
            KeyCode::Up | KeyCode::PageUp => app.handle_event(AppEvent::AdjustSignal(4)),
            KeyCode::Enter => {
                let event = command_to_app_event(parse_command(&self.input));
                if matches!(event, AppEvent::Transmit(_)) && app.session().signal_locked() {
                    self.render_frame(app, None, Some("TRANSMITTING TO ASTRAL PLANE..."))?;
                }
                let keep = matches!(event, AppEvent::Transmit(_)) && !app.session().signal_locked();
                app.handle_event(event);
                if !keep {
                    self.input.clear();
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn stream_reading(&mut self, app: &mut App) -> io::Result<()> {
        let Some(frames) = app.reveal_frames() else {
            app.mark_streamed();
            return Ok(());
        };
        let mut pacer = TuiPacer;
        let outcome = play(frames, &mut pacer, |frame| {
            self.render_frame(app, Some(frame), Some(STREAM_HINT))
        })?;
        tracing::debug!(frames = outcome.frames(), cancelled = outcome.was_cancelled(), "reveal finished");
        app.mark_streamed();
        Ok(())
    }

    fn handle_reading_keys(&mut self, app: &mut App) -> io::Result<()> {
        self.render_frame(app, None, None)?;
        let Some(key) = read_key(INPUT_POLL)? else {
            return Ok(());
        };
        if is_quit(&key) {
            app.handle_event(AppEvent::Quit);
            return Ok(());
        }
        let event = match key.code {
            KeyCode::Char('s') => AppEvent::SaveLog(None),
            KeyCode::Char('h') => AppEvent::SaveHtml(None),
            KeyCode::Char('r') => AppEvent::Reboot,
            _ => AppEvent::None,
        };
        app.handle_event(event);
        Ok(())
    }

    pub fn render_frame(
        &mut self,
        app: &App,
        frame: Option<&Frame>,
        hint: Option<&str>,
    ) -> io::Result<()> {
        let state = app.render_state(frame);
        let input = self.input.as_str();

        self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Min(3),
                    Constraint::Length(1),
                ])
                .split(f.area());

            f.render_widget(render_header(), chunks[0]);

            let default_hint = match state.stage {
                Stage::Boot => "",
                Stage::Input => INPUT_HINT,
                Stage::Reading | Stage::Quit => READING_HINT,
            };
            match state.stage {
                Stage::Boot => f.render_widget(render_boot_log(&state.boot_lines), chunks[1]),
                Stage::Input => draw_input(f, chunks[1], input, &state),
                Stage::Reading | Stage::Quit => draw_reading(f, chunks[1], &state),
            }

            let status = hint.or(state.status.as_deref());
            f.render_widget(render_status_line(status, default_hint), chunks[2]);
        })?;

        Ok(())
    }
}

fn split_body(area: Rect) -> (Vec<Rect>, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(SLOT_HEIGHT), Constraint::Min(3)])
        .split(area);
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[0]);
    (slots.to_vec(), rows[1])
}

fn draw_input(f: &mut TuiFrame, area: Rect, input: &str, state: &RenderState) {
    let (slots, rest) = split_body(area);
    for (position, slot_area) in POSITIONS.iter().zip(slots) {
        f.render_widget(render_awaiting_slot(position.name), slot_area);
    }
    f.render_widget(render_input_panel(input, state), rest);
}

fn draw_reading(f: &mut TuiFrame, area: Rect, state: &RenderState) {
    let (slots, rest) = split_body(area);
    for (slot, slot_area) in state.slots.iter().zip(slots) {
        f.render_widget(render_card_slot(slot), slot_area);
    }
    if let Some(output) = state.output.as_ref() {
        f.render_widget(render_output(output, state.degraded), rest);
    }
}

fn read_key(timeout: Duration) -> io::Result<Option<KeyEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('q')
        || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
}
