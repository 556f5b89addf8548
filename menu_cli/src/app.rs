use std::io::{BufRead, Write};

use clap::ValueEnum;
use menu_core::{CourseFilter, MenuItemForm, MenuItemId, MenuStore};
use tracing::debug;

use crate::{
    command::{Command, Field, HELP},
    ui,
};

/// The three tabs of the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Screen {
    /// Summary and listing of every dish
    Home,
    /// Add form plus a delete action per dish
    Menu,
    /// Listing restricted to one course
    Filter,
}

/// A message shown above the current screen until the next command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

/// Application state
pub struct App {
    pub screen: Screen,
    pub should_quit: bool,
    /// Prefix printed in front of prices.
    pub currency: String,

    store: MenuStore,

    // Menu screen state
    pub form: MenuItemForm,

    // Filter screen state
    pub filter: CourseFilter,

    pub notice: Option<Notice>,
}

impl App {
    pub fn new(store: MenuStore, currency: impl Into<String>, screen: Screen) -> Self {
        Self {
            screen,
            should_quit: false,
            currency: currency.into(),
            store,
            form: MenuItemForm::default(),
            filter: CourseFilter::All,
            notice: None,
        }
    }

    pub fn store(&self) -> &MenuStore {
        &self.store
    }

    /// Parses and runs one line of input.
    pub fn handle_line(&mut self, line: &str) {
        self.notice = None;
        match Command::parse(line) {
            Ok(command) => self.handle(command),
            Err(err) => self.notice = Some(Notice::Error(err.to_string())),
        }
    }

    pub fn handle(&mut self, command: Command) {
        debug!(?command, screen = ?self.screen, "handling command");
        match command {
            Command::Nothing => {}
            Command::Go(screen) => self.screen = screen,
            Command::Filter(selector) => {
                self.screen = Screen::Filter;
                if let Some(selector) = selector {
                    match selector.parse() {
                        Ok(filter) => self.filter = filter,
                        Err(err) => self.notice = Some(Notice::Error(err.to_string())),
                    }
                }
            }
            Command::Set(field, value) => {
                self.screen = Screen::Menu;
                let slot = match field {
                    Field::Name => &mut self.form.name,
                    Field::Description => &mut self.form.description,
                    Field::Course => &mut self.form.course,
                    Field::Price => &mut self.form.price,
                };
                *slot = value;
            }
            Command::Save => self.save(),
            Command::Delete(id) => self.delete(MenuItemId(id)),
            Command::Export => match self.store.to_payload().to_json() {
                Ok(json) => self.notice = Some(Notice::Info(json)),
                Err(err) => self.notice = Some(Notice::Error(err.to_string())),
            },
            Command::Help => self.notice = Some(Notice::Info(HELP.to_string())),
            Command::Quit => self.should_quit = true,
        }
    }

    /// Submits the add form. On success the form is cleared and the Home
    /// screen shown; on failure the form keeps its values and the reason is
    /// shown in place.
    fn save(&mut self) {
        match self.store.add(&self.form) {
            Ok(id) => {
                let name = self.form.name.trim().to_string();
                self.form.clear();
                self.screen = Screen::Home;
                self.notice = Some(Notice::Info(format!("Saved {name} as #{id}.")));
            }
            Err(err) => {
                self.screen = Screen::Menu;
                self.notice = Some(Notice::Error(err.to_string()));
            }
        }
    }

    fn delete(&mut self, id: MenuItemId) {
        match self.store.remove(&id) {
            Some(item) => {
                self.screen = Screen::Home;
                self.notice = Some(Notice::Info(format!("Deleted {}.", item.name.trim())));
            }
            None => self.notice = Some(Notice::Info(format!("No dish #{id}; nothing deleted."))),
        }
    }

    /// Draws the current screen.
    pub fn render(&self) -> String {
        ui::render(self)
    }
}

/// Runs the app until the input ends or the user quits, drawing the screen
/// after every command.
pub fn run<R: BufRead, W: Write>(app: &mut App, input: R, mut output: W) -> anyhow::Result<()> {
    write!(output, "{}", app.render())?;
    output.flush()?;
    for line in input.lines() {
        let line = line?;
        app.handle_line(&line);
        if app.should_quit {
            break;
        }
        write!(output, "{}", app.render())?;
        output.flush()?;
    }
    Ok(())
}
