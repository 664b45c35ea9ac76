//! # Select Form Example
//!
//! Demonstrates component composition with two [`Select`] widgets:
//! - Wrapping child component messages in a parent message enum
//! - Using `Command::map` to lift child commands into the parent space
//! - Tab to move focus between fields (blurring closes an open popup)
//! - Each select keeps its committed value across open/close cycles
//!
//! Run with: `cargo run --example select_form`

use awning::crossterm::event::KeyCode;
use awning::ratatui::layout::{Constraint, Layout, Rect};
use awning::ratatui::style::{Color, Modifier, Style};
use awning::ratatui::text::Span;
use awning::ratatui::widgets::Paragraph;
use awning::ratatui::Frame;
use awning::widgets::entry::{Entry, EntryList, Item};
use awning::widgets::select::{self, Select};
use awning::{Command, Component, Model, TerminalEvent};

struct FormApp {
    size: Select,
    crust: Select,
    focused_field: usize,
}

#[derive(Debug)]
enum Msg {
    Size(select::Message),
    Crust(select::Message),
    FocusNext,
    Quit,
}

impl FormApp {
    fn focus_field(&mut self, index: usize) -> Command<Msg> {
        self.focused_field = index;
        let blur = match index {
            0 => {
                self.size.focus();
                self.crust.blur().map(Msg::Crust)
            }
            _ => {
                self.crust.focus();
                self.size.blur().map(Msg::Size)
            }
        };
        blur
    }
}

impl Model for FormApp {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let sizes = EntryList::new(vec![
            Entry::item("s", "Small"),
            Entry::Item(Item::new("m", "Medium").current(true)),
            Entry::item("l", "Large"),
            Entry::Item(Item::new("xl", "Family").disabled(true)),
        ])
        .expect("static entries are well-formed");
        let crusts = EntryList::new(vec![
            Entry::item("thin", "Thin"),
            Entry::item("classic", "Classic"),
            Entry::item("deep", "Deep dish"),
        ])
        .expect("static entries are well-formed");

        let mut size = Select::new(sizes).with_placeholder("Choose a size");
        size.focus();
        let crust = Select::new(crusts).with_placeholder("Choose a crust");

        (
            FormApp {
                size,
                crust,
                focused_field: 0,
            },
            Command::none(),
        )
    }

    fn on_event(&self, event: TerminalEvent) -> Option<Msg> {
        match event {
            TerminalEvent::Key(key) => {
                let popup_open = self.size.is_open() || self.crust.is_open();
                if !popup_open {
                    match key.code {
                        KeyCode::Char('q') => return Some(Msg::Quit),
                        KeyCode::Tab => return Some(Msg::FocusNext),
                        _ => {}
                    }
                }
                if self.focused_field == 0 {
                    Some(Msg::Size(select::Message::KeyPress(key)))
                } else {
                    Some(Msg::Crust(select::Message::KeyPress(key)))
                }
            }
            // Pointer events go to both: hit classification decides which
            // widget (if either) reacts
            TerminalEvent::Mouse(mouse) => Some(Msg::Size(select::Message::Mouse(mouse))),
            _ => None,
        }
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Size(select::Message::Mouse(mouse)) => Command::batch(vec![
                self.size
                    .update(select::Message::Mouse(mouse))
                    .map(Msg::Size),
                self.crust
                    .update(select::Message::Mouse(mouse))
                    .map(Msg::Crust),
            ]),
            // A popup opened by a pointer click steals field focus, so the
            // keyboard follows the pointer
            Msg::Size(select::Message::OpenChanged(true)) if self.focused_field != 0 => {
                self.focus_field(0)
            }
            Msg::Crust(select::Message::OpenChanged(true)) if self.focused_field != 1 => {
                self.focus_field(1)
            }
            Msg::Size(m) => self.size.update(m).map(Msg::Size),
            Msg::Crust(m) => self.crust.update(m).map(Msg::Crust),
            Msg::FocusNext => {
                let next = (self.focused_field + 1) % 2;
                self.focus_field(next)
            }
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [title_area, size_area, crust_area, summary_area, help_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            Paragraph::new(Span::styled(
                "Order a pizza",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            title_area,
        );

        render_field(frame, size_area, "Size:", &self.size, self.focused_field == 0);
        render_field(frame, crust_area, "Crust:", &self.crust, self.focused_field == 1);

        let summary = match (self.size.committed_label(), self.crust.committed_label()) {
            (Some(size), Some(crust)) => format!("{size}, {crust} crust"),
            _ => "Order incomplete".to_string(),
        };
        let summary_line = Rect {
            y: summary_area.y + summary_area.height.saturating_sub(1),
            height: 1,
            ..summary_area
        };
        frame.render_widget(Paragraph::new(summary), summary_line);

        frame.render_widget(
            Paragraph::new(Span::styled(
                "tab: switch field · enter/space: open · ↑↓: navigate · q: quit",
                Style::default().fg(Color::DarkGray),
            )),
            help_area,
        );
    }
}

fn render_field(frame: &mut Frame, area: Rect, label: &str, select: &Select, focused: bool) {
    let label_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let [label_area, field_area] =
        Layout::horizontal([Constraint::Length(8), Constraint::Fill(1)]).areas(area);
    let label_line = Rect { height: 1, ..label_area };
    frame.render_widget(Paragraph::new(Span::styled(label, label_style)), label_line);

    let field_line = Rect {
        height: 1,
        width: field_area.width.min(20),
        ..field_area
    };
    select.view(frame, field_line);
}

#[tokio::main]
async fn main() -> Result<(), awning::ProgramError> {
    awning::run::<FormApp>(()).await?;
    Ok(())
}
