//! **awning** -- anchored popup menus and selection widgets for [`ratatui`].
//!
//! This is the umbrella crate that re-exports everything you need from a
//! single dependency:
//!
//! ```toml
//! [dependencies]
//! awning = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`awning_core`] are available at the crate root
//!   ([`Model`], [`Component`], [`Command`], [`TerminalEvent`], [`Program`],
//!   [`run`], [`run_with`], etc.).
//! * The [`widgets`] module re-exports everything from [`awning_widgets`]
//!   (the menu and select widgets and their building blocks).
//! * [`ratatui`], [`crossterm`], and [`tokio`] are re-exported so downstream
//!   crates do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use awning::widgets::entry::{Entry, EntryList};
//! use awning::widgets::menu::{self, Menu};
//! use awning::{Command, Component, Model, TerminalEvent};
//! use ratatui::Frame;
//!
//! struct App {
//!     menu: Menu,
//! }
//!
//! enum Msg {
//!     Menu(menu::Message),
//! }
//!
//! impl Model for App {
//!     type Message = Msg;
//!     type Flags = ();
//!
//!     fn init(_: ()) -> (Self, Command<Msg>) {
//!         let entries = EntryList::new(vec![
//!             Entry::item("open", "Open"),
//!             Entry::item("save", "Save"),
//!         ])
//!         .expect("static entries");
//!         let mut menu = Menu::new("File", entries);
//!         menu.focus();
//!         (App { menu }, Command::none())
//!     }
//!     fn on_event(&self, event: TerminalEvent) -> Option<Msg> {
//!         match event {
//!             TerminalEvent::Key(k) => Some(Msg::Menu(menu::Message::KeyPress(k))),
//!             TerminalEvent::Mouse(m) => Some(Msg::Menu(menu::Message::Mouse(m))),
//!             _ => None,
//!         }
//!     }
//!     fn update(&mut self, msg: Msg) -> Command<Msg> {
//!         match msg {
//!             Msg::Menu(m) => self.menu.update(m).map(Msg::Menu),
//!         }
//!     }
//!     fn view(&self, frame: &mut Frame) {
//!         self.menu.view(frame, frame.area());
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     awning::run::<App>(()).await.unwrap();
//! }
//! ```

pub use awning_core::*;
pub mod widgets {
    pub use awning_widgets::*;
}

// Re-export dependencies for use in examples and downstream crates
pub use crossterm;
pub use ratatui;
pub use tokio;

#[cfg(test)]
mod tests {
    use crate::testing::TestProgram;
    use crate::widgets::entry::{Entry, EntryList};
    use crate::widgets::select::{self, Select};
    use crate::{Command, Component, Model, TerminalEvent};
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use ratatui::layout::Rect;
    use ratatui::Frame;

    /// Minimal host app: one select, with the widget's emitted messages
    /// recorded so tests can observe the external contract.
    struct App {
        select: Select,
        selections: Vec<String>,
        open_changes: Vec<bool>,
    }

    enum Msg {
        Select(select::Message),
    }

    impl Model for App {
        type Message = Msg;
        type Flags = ();

        fn init(_: ()) -> (Self, Command<Msg>) {
            let entries = EntryList::new(vec![
                Entry::item("option1", "Option 1"),
                Entry::item("option2", "Option 2"),
                Entry::item("option3", "Option 3"),
            ])
            .unwrap();
            let mut select = Select::new(entries).with_committed("option2");
            select.focus();
            (
                App {
                    select,
                    selections: Vec::new(),
                    open_changes: Vec::new(),
                },
                Command::none(),
            )
        }

        fn on_event(&self, event: TerminalEvent) -> Option<Msg> {
            match event {
                TerminalEvent::Key(key) => Some(Msg::Select(select::Message::KeyPress(key))),
                TerminalEvent::Mouse(mouse) => Some(Msg::Select(select::Message::Mouse(mouse))),
                _ => None,
            }
        }

        fn update(&mut self, msg: Msg) -> Command<Msg> {
            match msg {
                Msg::Select(select::Message::Selected(id)) => {
                    self.selections.push(id);
                    Command::none()
                }
                Msg::Select(select::Message::OpenChanged(open)) => {
                    self.open_changes.push(open);
                    Command::none()
                }
                Msg::Select(m) => self.select.update(m).map(Msg::Select),
            }
        }

        fn view(&self, frame: &mut Frame) {
            let trigger = Rect {
                width: frame.area().width.min(16),
                height: 1,
                ..frame.area()
            };
            self.select.view(frame, trigger);
        }
    }

    fn key(code: KeyCode) -> TerminalEvent {
        TerminalEvent::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn select_commit_flow_end_to_end() {
        let mut prog = TestProgram::<App>::new(());

        prog.event(key(KeyCode::Enter));
        prog.drain_messages();
        assert!(prog.model().select.is_open());
        // Reopening a select focuses the committed entry
        assert_eq!(prog.model().select.focused_index(), Some(1));
        assert_eq!(prog.model().open_changes, vec![true]);

        prog.event(key(KeyCode::Up));
        prog.event(key(KeyCode::Enter));
        prog.drain_messages();

        assert_eq!(prog.model().selections, vec!["option1".to_string()]);
        assert_eq!(prog.model().select.committed(), Some("option1"));
        assert_eq!(prog.model().open_changes, vec![true, false]);
        assert!(!prog.model().select.is_open());

        let out = prog.render_string(30, 6);
        assert!(out.contains("Option 1 ▸"));
    }

    #[test]
    fn dismissal_emits_no_selection() {
        let mut prog = TestProgram::<App>::new(());

        prog.event(key(KeyCode::Enter));
        prog.event(key(KeyCode::Down));
        prog.event(key(KeyCode::Esc));
        prog.drain_messages();

        assert!(prog.model().selections.is_empty());
        assert_eq!(prog.model().select.committed(), Some("option2"));
        assert_eq!(prog.model().open_changes, vec![true, false]);
    }

    #[test]
    fn keys_while_closed_do_not_leak_into_the_popup() {
        let mut prog = TestProgram::<App>::new(());

        prog.event(key(KeyCode::Down));
        prog.event(key(KeyCode::Up));
        prog.drain_messages();

        assert!(!prog.model().select.is_open());
        assert!(prog.model().open_changes.is_empty());
        assert!(prog.model().selections.is_empty());
    }
}
