//! Main TUI application.

use std::io;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::loader::{FetchScheduler, LoadEvent};
use crate::model::Category;
use crate::provider::ProductProvider;
use crate::store::ProductStore;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

/// Main TUI application.
pub struct App {
    provider: Arc<dyn ProductProvider>,
    store: ProductStore,
    state: AppState,
    scheduler: Option<FetchScheduler>,
    generation: u64,
    should_quit: bool,
}

impl App {
    /// Creates a new App with the given provider.
    pub fn new(provider: Arc<dyn ProductProvider>, page_size: usize, initial_tab: Category) -> Self {
        let source_label = provider.describe();
        Self {
            provider,
            store: ProductStore::new(),
            state: AppState::new(initial_tab, page_size, source_label),
            scheduler: None,
            generation: 0,
            should_quit: false,
        }
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(tick_rate);
        let result = self.event_loop(&mut terminal, &events);

        self.shutdown();
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &EventHandler,
    ) -> io::Result<()> {
        self.load(events.sender())?;

        loop {
            terminal.draw(|frame| render(frame, &mut self.state, &self.store))?;

            match events.next() {
                Ok(event) => self.handle_event(event, &events.sender())?,
                Err(_) => self.should_quit = true,
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Starts a new fetch round. Results of earlier rounds are ignored from
    /// now on.
    pub fn load(&mut self, tx: Sender<Event>) -> io::Result<()> {
        if let Some(mut old) = self.scheduler.take() {
            old.detach();
        }
        self.generation += 1;
        let scheduler = FetchScheduler::attach(
            Arc::clone(&self.provider),
            self.generation,
            move |event| tx.send(Event::Loaded(event)).is_ok(),
        )?;
        self.scheduler = Some(scheduler);
        Ok(())
    }

    /// Applies one event to the application state.
    pub fn handle_event(&mut self, event: Event, tx: &Sender<Event>) -> io::Result<()> {
        match event {
            Event::Tick | Event::Resize(_) => {}
            Event::Key(key) => match handle_key(&mut self.state, key) {
                KeyAction::Quit => self.should_quit = true,
                KeyAction::Reload => self.reload(tx.clone())?,
                KeyAction::None => {}
            },
            Event::Loaded(load) => self.apply_load(load),
        }
        Ok(())
    }

    /// Drops all product lists and fetches every category again. View
    /// state (page, sort, filter) is kept.
    fn reload(&mut self, tx: Sender<Event>) -> io::Result<()> {
        info!(generation = self.generation + 1, "reloading all categories");
        self.store.reset();
        self.state.status_message = Some("Reloading…".to_string());
        self.load(tx)
    }

    fn apply_load(&mut self, load: LoadEvent) {
        if load.generation != self.generation {
            debug!(
                stale = load.generation,
                current = self.generation,
                category = %load.category,
                "ignoring stale fetch result"
            );
            return;
        }
        if let Ok(items) = &load.result {
            info!(category = %load.category, items = items.len(), "category loaded");
        }
        self.store.apply(load.category, load.result);
        if self.store.settled_count() == Category::ALL.len() {
            self.state.status_message = None;
        }
    }

    fn shutdown(&mut self) {
        if let Some(mut scheduler) = self.scheduler.take() {
            info!(generation = scheduler.generation(), "shutting down, detaching fetches");
            scheduler.detach();
        }
    }

    pub fn store(&self) -> &ProductStore {
        &self.store
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
