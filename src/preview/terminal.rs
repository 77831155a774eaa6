//! Interactive terminal preview using ratatui
//!
//! This module provides the PreviewHost, the development stand-in for the
//! platform widget host. It owns the terminal lifecycle (raw mode,
//! alternate screen), polls for key input, draws the tier previews from
//! their descriptions, and re-reads the store file on the refresh cadence
//! so edits made by other processes show up the way a real widget would
//! pick them up.

use crate::error::{GlanceError, Result};
use crate::format::CurrencyFormat;
use crate::preview::theme::WidgetTheme;
use crate::preview::widgets;
use crate::refresh::RefreshContract;
use crate::render::{render_widget, WidgetDescription};
use crate::schema::Tier;
use crate::store::JsonFileStore;
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Paragraph,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant, SystemTime};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// How often the event loop wakes up to poll input and redraw.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// What a key press asks the preview to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewAction {
    /// Leave the preview
    Quit,
    /// Re-read the store file immediately
    Reload,
    /// Show one tier, or all three when `None`
    Focus(Option<Tier>),
}

/// Terminal preview host.
///
/// Rendering goes through the same pipeline the widgets use; this type
/// only adds the terminal around it.
pub struct PreviewHost {
    terminal: Option<CrosstermTerminal>,
    theme: WidgetTheme,
    contract: RefreshContract,
    currency: CurrencyFormat,
    focus: Option<Tier>,
}

impl PreviewHost {
    /// Create a preview host with the default theme.
    pub fn new(contract: RefreshContract) -> Self {
        Self {
            terminal: None,
            theme: WidgetTheme::default(),
            contract,
            currency: CurrencyFormat::krw(),
            focus: None,
        }
    }

    /// Replace the color theme.
    pub fn with_theme(mut self, theme: WidgetTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Convert a key event into a preview action.
    fn key_to_action(key: KeyCode, modifiers: KeyModifiers) -> Option<PreviewAction> {
        match (key, modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE)
            | (KeyCode::Esc, _)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(PreviewAction::Quit),
            (KeyCode::Char('r'), KeyModifiers::NONE) => Some(PreviewAction::Reload),
            (KeyCode::Char('1'), KeyModifiers::NONE) => {
                Some(PreviewAction::Focus(Some(Tier::Small)))
            }
            (KeyCode::Char('2'), KeyModifiers::NONE) => {
                Some(PreviewAction::Focus(Some(Tier::Medium)))
            }
            (KeyCode::Char('3'), KeyModifiers::NONE) => {
                Some(PreviewAction::Focus(Some(Tier::Large)))
            }
            (KeyCode::Char('a'), KeyModifiers::NONE) => Some(PreviewAction::Focus(None)),
            _ => None,
        }
    }

    /// Run the preview loop until the user quits.
    ///
    /// The store is re-read once per effective refresh interval; a failed
    /// re-read keeps showing the last snapshot, exactly as a widget keeps
    /// its last description when nothing fresh arrives.
    pub fn run(&mut self, store: &JsonFileStore) -> Result<()> {
        self.initialize()?;
        let mut last_reload = Instant::now();

        loop {
            if last_reload.elapsed() >= self.contract.effective_interval() {
                self.reload(store);
                last_reload = Instant::now();
            }

            self.draw(store)?;

            match self.poll_action(POLL_INTERVAL)? {
                Some(PreviewAction::Quit) => break,
                Some(PreviewAction::Reload) => {
                    self.reload(store);
                    last_reload = Instant::now();
                }
                Some(PreviewAction::Focus(focus)) => self.focus = focus,
                None => {}
            }
        }

        self.cleanup()
    }

    fn reload(&self, store: &JsonFileStore) {
        if let Err(err) = store.reload() {
            log::debug!("store reload failed, keeping last snapshot: {err}");
        }
    }

    fn draw(&mut self, store: &JsonFileStore) -> Result<()> {
        let descriptions: Vec<WidgetDescription> = match self.focus {
            Some(tier) => vec![render_widget(store, tier, &self.currency)],
            None => Tier::ALL
                .iter()
                .map(|&tier| render_widget(store, tier, &self.currency))
                .collect(),
        };
        let status = self.status_line(store);
        let theme = &self.theme;

        if let Some(ref mut terminal) = self.terminal {
            terminal
                .draw(|frame| {
                    let size = frame.size();
                    let chunks = Layout::default()
                        .direction(Direction::Vertical)
                        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
                        .split(size);

                    widgets::draw_descriptions(frame, chunks[0], &descriptions, theme);

                    let status_style = Style::default().bg(theme.status_bg).fg(theme.status_fg);
                    frame.render_widget(
                        Paragraph::new(status.as_str()).style(status_style),
                        chunks[1],
                    );
                })
                .map_err(|err| GlanceError::preview("Failed to draw preview frame", err))?;
        }
        Ok(())
    }

    fn status_line(&self, store: &JsonFileStore) -> String {
        let freshness = match store.modified() {
            Ok(modified) => {
                let now = SystemTime::now();
                let age = now.duration_since(modified).unwrap_or(Duration::ZERO);
                if self.contract.is_stale(modified, now) {
                    format!("stale, {}s old", age.as_secs())
                } else {
                    format!("{}s old", age.as_secs())
                }
            }
            Err(_) => "never written".to_string(),
        };
        format!(
            " {} | {} | q quit  r reload  1/2/3 tier  a all",
            store.path().display(),
            freshness
        )
    }

    fn poll_action(&mut self, timeout: Duration) -> Result<Option<PreviewAction>> {
        let ready = event::poll(timeout)
            .map_err(|err| GlanceError::preview("Failed to poll input", err))?;
        if ready {
            let event = event::read()
                .map_err(|err| GlanceError::preview("Failed to read input event", err))?;
            if let Event::Key(key_event) = event {
                return Ok(Self::key_to_action(key_event.code, key_event.modifiers));
            }
        }
        Ok(None)
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode().map_err(|err| GlanceError::preview("Failed to enter raw mode", err))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|err| GlanceError::preview("Failed to enter alternate screen", err))?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)
            .map_err(|err| GlanceError::preview("Failed to initialize terminal", err))?;
        self.terminal = Some(terminal);

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            disable_raw_mode()
                .map_err(|err| GlanceError::preview("Failed to leave raw mode", err))?;
            execute!(io::stdout(), LeaveAlternateScreen)
                .map_err(|err| GlanceError::preview("Failed to restore screen", err))?;
            self.terminal = None;
        }
        Ok(())
    }
}

impl Drop for PreviewHost {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
