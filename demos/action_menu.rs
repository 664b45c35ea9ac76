//! # Action Menu Example
//!
//! Demonstrates the [`Menu`] widget:
//! - Opening with Enter/Space or a trigger click
//! - Arrow-key navigation that skips disabled entries and wraps
//! - Commit via Enter or item click, dismissal via Esc or outside click
//! - Routing: keys go to the menu while it is open, to the app otherwise
//!
//! Run with: `cargo run --example action_menu`

use awning::crossterm::event::KeyCode;
use awning::ratatui::layout::{Constraint, Layout, Rect};
use awning::ratatui::style::{Color, Style};
use awning::ratatui::text::Span;
use awning::ratatui::widgets::{Block, Borders, Paragraph};
use awning::ratatui::Frame;
use awning::widgets::entry::{Entry, EntryList, Item};
use awning::widgets::menu::{self, Menu};
use awning::{Command, Component, Model, TerminalEvent};

struct MenuApp {
    menu: Menu,
    last_action: Option<String>,
}

#[derive(Debug)]
enum Msg {
    Menu(menu::Message),
    Quit,
}

fn document_actions() -> EntryList {
    EntryList::new(vec![
        Entry::Item(Item::new("edit", "Edit").icon("✎")),
        Entry::item("duplicate", "Duplicate"),
        Entry::item("rename", "Rename"),
        Entry::separator(),
        Entry::Item(Item::new("archive", "Archive").disabled(true)),
        Entry::Item(Item::new("delete", "Delete").disabled(true)),
    ])
    .expect("static entries are well-formed")
}

impl Model for MenuApp {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let mut menu = Menu::new("☰ Document", document_actions())
            .with_min_width(16)
            .with_block(Block::default().borders(Borders::ALL));
        menu.focus();
        (
            MenuApp {
                menu,
                last_action: None,
            },
            Command::none(),
        )
    }

    fn on_event(&self, event: TerminalEvent) -> Option<Msg> {
        match event {
            TerminalEvent::Key(key) => {
                // While the popup is open the menu owns the keyboard;
                // otherwise app-level bindings apply first.
                if !self.menu.is_open() && key.code == KeyCode::Char('q') {
                    return Some(Msg::Quit);
                }
                Some(Msg::Menu(menu::Message::KeyPress(key)))
            }
            TerminalEvent::Mouse(mouse) => Some(Msg::Menu(menu::Message::Mouse(mouse))),
            _ => None,
        }
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Menu(menu::Message::Activated(id)) => {
                self.last_action = Some(id);
                Command::none()
            }
            Msg::Menu(m) => self.menu.update(m).map(Msg::Menu),
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [trigger_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let trigger = Rect {
            width: trigger_area.width.min(12),
            ..trigger_area
        };
        self.menu.view(frame, trigger);

        let status = match &self.last_action {
            Some(id) => format!("Last action: {id}"),
            None => "No action yet".to_string(),
        };
        let status_inner = Rect {
            y: status_area.y + 2,
            height: 1,
            ..status_area
        };
        frame.render_widget(Paragraph::new(status), status_inner);

        frame.render_widget(
            Paragraph::new(Span::styled(
                "enter/space/click: open · ↑↓: navigate · esc/outside click: dismiss · q: quit",
                Style::default().fg(Color::DarkGray),
            )),
            help_area,
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), awning::ProgramError> {
    awning::run::<MenuApp>(()).await?;
    Ok(())
}
