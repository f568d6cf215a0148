use crate::access::{self, Access};
use crate::config::Config;
use crate::input::{handle_key, Action};
use crate::models::snapshot::StorageSnapshot;
use crate::probe;
use crate::ui::theme::{Theme, ThemeVariant};
use crate::ui::{help, screen};
use anyhow::Result;
use crossterm::event::{self, Event};
use std::path::PathBuf;
use std::time::Duration;

const POLL_TIMEOUT: Duration = Duration::from_millis(150);

/// What the screen currently has for the measured volume.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeState {
    /// No reading yet — access not granted, or nothing measured so far.
    Computing,
    Ready(StorageSnapshot),
    /// The last refresh failed (unmounted path, I/O error).
    Unavailable,
}

pub struct App {
    pub config: Config,

    pub theme:         Theme,
    pub theme_variant: ThemeVariant,

    pub mount:        PathBuf,
    pub access:       Access,
    pub probe_state:  ProbeState,
    pub last_refresh: Option<String>,

    pub show_help:   bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(mount: PathBuf, initial_theme: ThemeVariant, config: Config) -> Self {
        let mut app = Self {
            config,
            theme:         Theme::for_variant(initial_theme),
            theme_variant: initial_theme,
            access:        access::request(&mount),
            mount,
            probe_state:   ProbeState::Computing,
            last_refresh:  None,
            show_help:     false,
            should_quit:   false,
        };
        app.refresh();
        app
    }

    // ── Main event loop ───────────────────────────────────────────────

    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut ratatui::Terminal<B>,
    ) -> Result<()> {
        loop {
            let show_help  = self.show_help;
            let theme_snap = self.theme.clone();

            terminal.draw(|f| {
                screen::render(f, self);
                if show_help {
                    help::render(f, &theme_snap);
                }
            })?;

            if event::poll(POLL_TIMEOUT)? {
                match event::read()? {
                    Event::Key(key) => {
                        let action = handle_key(key);
                        self.handle_action(action);
                    }
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }

            if self.should_quit { break; }
        }
        Ok(())
    }

    // ── Refresh ───────────────────────────────────────────────────────

    /// Take a fresh reading. If access was denied earlier, ask again first:
    /// a retry after the path appears (or permissions change) picks it up.
    pub fn refresh(&mut self) {
        if matches!(self.access, Access::Unauthorized) {
            self.access = access::request(&self.mount);
        }

        match &self.access {
            Access::Authorized(grant) => match probe::read_snapshot(grant) {
                Ok(snap) => {
                    self.probe_state  = ProbeState::Ready(snap);
                    self.last_refresh =
                        Some(chrono::Local::now().format("%H:%M:%S").to_string());
                }
                Err(_) => {
                    self.probe_state = ProbeState::Unavailable;
                }
            },
            // Still no access: leave the placeholder up until a later retry.
            Access::Unauthorized => {}
        }
    }

    // ── Input dispatch ────────────────────────────────────────────────

    fn handle_action(&mut self, action: Action) {
        if self.show_help {
            match action {
                Action::Quit => self.should_quit = true,
                Action::ShowHelp | Action::Back => { self.show_help = false; }
                _ => {}
            }
            return;
        }

        match action {
            Action::Quit => self.should_quit = true,

            Action::Refresh => self.refresh(),

            Action::CycleTheme => {
                self.theme_variant = self.theme_variant.next();
                self.theme = Theme::for_variant(self.theme_variant);
            }

            Action::ShowHelp => { self.show_help = true; }

            Action::Back | Action::None => {}
        }
    }
}
