use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use nori_config::Config;
use nori_core::{AnimationKind, Theme};
use nori_stage::{ANIMATION_BOX, Controller, FLIP_CARD, SPINNER};
use ratatui::DefaultTerminal;

mod render;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    let terminal = ratatui::init();
    let result = App::new(config).and_then(|app| app.run(terminal));
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Surface state, scheduler, and clock.
    controller: Controller,
    /// Builtin theme cursor for the cycle key.
    theme: Theme,
    /// Whether the flip card is in its raised hover state.
    card_raised: bool,
    /// Event-poll timeout.
    tick_rate: Duration,
    /// Wall-clock origin the controller clock follows.
    started: Instant,
}

impl App {
    /// Construct a new instance of [`App`] from the loaded config.
    pub fn new(config: Config) -> color_eyre::Result<Self> {
        let mut controller = Controller::new();
        controller.set_theme(&config.theme)?;
        if config.start_spinner {
            controller.toggle_spinner(SPINNER)?;
        }
        Ok(Self {
            running: false,
            controller,
            theme: Theme::from_name(&config.theme).unwrap_or_default(),
            card_raised: false,
            tick_rate: Duration::from_millis(config.tick_rate_ms),
            started: Instant::now(),
        })
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            let elapsed_ms = self.started.elapsed().as_millis() as u64;
            self.controller.advance_to(elapsed_ms)?;
            terminal.draw(|frame| render::render(frame, &self.controller, elapsed_ms))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with timeout so deferred animation commands keep firing.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key)?,
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) -> color_eyre::Result<()> {
        match (key.modifiers, key.code) {
            (_, KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            // Esc closes the modal when one is up, otherwise quits
            (_, KeyCode::Esc) => {
                if self.controller.modal_shown() {
                    self.controller.hide_modal()?;
                } else {
                    self.quit();
                }
            }
            (_, KeyCode::Char('b')) => self.trigger(AnimationKind::Bounce)?,
            (_, KeyCode::Char('s')) => self.trigger(AnimationKind::Spin)?,
            (_, KeyCode::Char('k')) => self.trigger(AnimationKind::Shake)?,
            (_, KeyCode::Char('g')) => self.trigger(AnimationKind::Glow)?,
            (_, KeyCode::Char('f')) => {
                self.controller.flip_card(FLIP_CARD)?;
            }
            (_, KeyCode::Char('m')) => self.controller.show_modal()?,
            (_, KeyCode::Char('l')) => {
                self.controller.toggle_spinner(SPINNER)?;
            }
            (_, KeyCode::Char('t')) => self.cycle_theme()?,
            // The double-click gesture of the original demo
            (_, KeyCode::Char('x')) => {
                self.controller.perform_complex_animation()?;
                self.controller.randomize_box_color(ANIMATION_BOX);
            }
            (_, KeyCode::Char('c')) => self.toggle_card_hover(),
            _ => {}
        }
        Ok(())
    }

    /// Trigger one of the known animations on the demo box.
    fn trigger(&mut self, kind: AnimationKind) -> color_eyre::Result<()> {
        self.controller.trigger_animation(ANIMATION_BOX, kind.tag())?;
        Ok(())
    }

    /// Cycle through the builtin themes.
    fn cycle_theme(&mut self) -> color_eyre::Result<()> {
        self.theme = self.theme.next();
        self.controller.set_theme(self.theme.name())?;
        Ok(())
    }

    /// The hover-enter/leave effect of the original demo, as a toggle.
    fn toggle_card_hover(&mut self) {
        self.card_raised = !self.card_raised;
        let transform = if self.card_raised {
            "scale(1.02) translateY(-5px)"
        } else {
            "scale(1) translateY(0)"
        };
        self.controller
            .create_dynamic_style(FLIP_CARD, "transform", transform, 300);
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
