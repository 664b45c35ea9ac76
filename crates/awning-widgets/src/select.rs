//! Single-select widget: a one-line trigger showing the committed value,
//! with a popup listbox for changing it.
//!
//! The committed value is the only state that survives close: reopening the
//! popup focuses the committed entry so arrow keys move relative to it, and
//! the popup marks it with a check. Committing emits
//! [`Message::Selected`] exactly once and closes.

use crate::entry::EntryList;
use crate::placement::Placement;
use crate::popup::{Outcome, PopupCore, PopupStyle};
use awning_core::command::Command;
use awning_core::component::Component;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

/// Messages for the select component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press event forwarded to the select.
    KeyPress(KeyEvent),
    /// A mouse event forwarded to the select.
    Mouse(MouseEvent),
    /// Request to open the popup.
    Open,
    /// Request to close the popup without committing.
    Close,
    /// Emitted when an option is committed, carrying its id.
    Selected(String),
    /// Emitted on every open/close transition.
    OpenChanged(bool),
}

/// Visual style configuration for the [`Select`] trigger line.
#[derive(Debug, Clone)]
pub struct SelectStyle {
    /// Committed value text on the trigger.
    pub value: Style,
    /// Placeholder text shown when nothing is committed.
    pub placeholder: Style,
    /// The open/closed chevron.
    pub chevron: Style,
}

impl Default for SelectStyle {
    fn default() -> Self {
        Self {
            value: Style::default(),
            placeholder: Style::default().fg(Color::DarkGray),
            chevron: Style::default().fg(Color::DarkGray),
        }
    }
}

/// A single-select widget that presents its options in a popup listbox and
/// tracks the committed choice across open/close cycles.
///
/// # Example
///
/// ```ignore
/// use awning_widgets::entry::{Entry, EntryList};
/// use awning_widgets::select::Select;
///
/// let entries = EntryList::new(vec![
///     Entry::item("small", "Small"),
///     Entry::item("medium", "Medium"),
///     Entry::item("large", "Large"),
/// ])?;
/// let select = Select::new(entries).with_committed("medium");
/// ```
pub struct Select {
    popup: PopupCore,
    committed: Option<String>,
    placeholder: String,
    focus: bool,
    disabled: bool,
    style: SelectStyle,
}

impl Select {
    /// Create a select over the given entries.
    ///
    /// An entry marked [`current`](crate::entry::Item::current) seeds the
    /// committed value.
    pub fn new(entries: EntryList) -> Self {
        let committed = entries.current_item().map(|item| item.id.clone());
        let mut popup = PopupCore::new(entries);
        popup.set_current(committed.clone());
        Self {
            popup,
            committed,
            placeholder: "Select...".to_string(),
            focus: false,
            disabled: false,
            style: SelectStyle::default(),
        }
    }

    /// Set the committed value by id. Unknown ids leave the select
    /// uncommitted.
    pub fn with_committed(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.committed = self
            .popup
            .entries()
            .entries()
            .iter()
            .any(|e| matches!(e, crate::entry::Entry::Item(item) if item.id == id))
            .then_some(id);
        self.popup.set_current(self.committed.clone());
        self
    }

    /// Set the placeholder text shown when nothing is committed.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the popup placement relative to the trigger.
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.popup = self.popup.with_placement(placement);
        self
    }

    /// Set the maximum number of visible popup rows before scrolling.
    pub fn with_max_visible(mut self, max: usize) -> Self {
        self.popup = self.popup.with_max_visible(max);
        self
    }

    /// Set the block (border/title container) for the popup overlay.
    pub fn with_block(mut self, block: Block<'static>) -> Self {
        self.popup = self.popup.with_block(block);
        self
    }

    /// Set the popup style configuration.
    pub fn with_popup_style(mut self, style: PopupStyle) -> Self {
        self.popup = self.popup.with_style(style);
        self
    }

    /// Set the trigger style configuration.
    pub fn with_style(mut self, style: SelectStyle) -> Self {
        self.style = style;
        self
    }

    /// Disable or enable the whole widget.
    ///
    /// Returns the close command (if disabling closed an open popup) so the
    /// parent still observes the transition.
    pub fn set_disabled(&mut self, disabled: bool) -> Command<Message> {
        self.disabled = disabled;
        if disabled {
            self.dismiss()
        } else {
            Command::none()
        }
    }

    /// Give this select keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove keyboard focus and close the popup if open.
    ///
    /// Returns the close command so the parent still observes the
    /// transition.
    pub fn blur(&mut self) -> Command<Message> {
        self.focus = false;
        self.dismiss()
    }

    /// Whether the popup is currently open.
    pub fn is_open(&self) -> bool {
        self.popup.is_open()
    }

    /// The focused navigable index, if open and focused.
    pub fn focused_index(&self) -> Option<usize> {
        self.popup.focused_index()
    }

    /// The committed value's id, if any.
    pub fn committed(&self) -> Option<&str> {
        self.committed.as_deref()
    }

    /// The committed value's label, if any.
    pub fn committed_label(&self) -> Option<&str> {
        let id = self.committed.as_deref()?;
        self.popup
            .entries()
            .entries()
            .iter()
            .find_map(|e| match e {
                crate::entry::Entry::Item(item) if item.id == id => Some(item.label.as_str()),
                _ => None,
            })
    }

    /// The entry list.
    pub fn entries(&self) -> &EntryList {
        self.popup.entries()
    }

    /// Replace the entry list, closing the popup first. The committed value
    /// is kept only if the new list still contains its id. Returns the close
    /// command so the parent still observes the transition.
    pub fn set_entries(&mut self, entries: EntryList) -> Command<Message> {
        let cmd = self.dismiss();
        self.popup.set_entries(entries);
        if let Some(id) = self.committed.clone() {
            let still_there = self
                .popup
                .entries()
                .entries()
                .iter()
                .any(|e| matches!(e, crate::entry::Entry::Item(item) if item.id == id));
            if !still_there {
                self.committed = None;
            }
        }
        self.popup.set_current(self.committed.clone());
        cmd
    }

    /// Open with focus on the committed entry, when it is focusable.
    fn activate(&mut self) -> Command<Message> {
        if self.disabled || self.popup.is_open() {
            return Command::none();
        }
        let initial = self
            .committed
            .as_deref()
            .and_then(|id| self.popup.entries().navigable_index_of(id));
        self.popup.open(initial);
        Command::message(Message::OpenChanged(true))
    }

    fn dismiss(&mut self) -> Command<Message> {
        if !self.popup.is_open() {
            return Command::none();
        }
        self.popup.close();
        Command::message(Message::OpenChanged(false))
    }

    fn on_outcome(&mut self, outcome: Outcome) -> Command<Message> {
        match outcome {
            Outcome::Committed(id) => {
                self.committed = Some(id.clone());
                self.popup.set_current(Some(id.clone()));
                Command::batch(vec![
                    Command::message(Message::Selected(id)),
                    Command::message(Message::OpenChanged(false)),
                ])
            }
            Outcome::Dismissed => Command::message(Message::OpenChanged(false)),
            Outcome::TriggerActivated => {
                if self.popup.is_open() {
                    self.dismiss()
                } else {
                    self.activate()
                }
            }
            Outcome::Handled | Outcome::Ignored => Command::none(),
        }
    }
}

impl Component for Select {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) if self.focus => {
                if self.popup.is_open() {
                    let outcome = self.popup.handle_key(key);
                    self.on_outcome(outcome)
                } else {
                    match key.code {
                        KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
                        _ => Command::none(),
                    }
                }
            }
            Message::Mouse(mouse) => {
                let outcome = self.popup.handle_mouse(mouse);
                self.on_outcome(outcome)
            }
            Message::Open => self.activate(),
            Message::Close => self.dismiss(),
            // Emitted variants and unfocused key presses are no-ops here
            _ => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let value = match self.committed_label() {
            Some(label) => Span::styled(label.to_string(), self.style.value),
            None => Span::styled(self.placeholder.clone(), self.style.placeholder),
        };
        let chevron = if self.popup.is_open() { " ▾" } else { " ▸" };
        let line = Line::from(vec![value, Span::styled(chevron, self.style.chevron)]);
        frame.render_widget(Paragraph::new(line), area);

        self.popup.render_popup(frame, area);
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Entry;
    use crossterm::event::{
        KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEventKind,
    };
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn options() -> EntryList {
        EntryList::new(vec![
            Entry::item("option1", "Option 1"),
            Entry::item("option2", "Option 2"),
            Entry::item("option3", "Option 3"),
        ])
        .unwrap()
    }

    fn select_with(committed: &str) -> Select {
        let mut select = Select::new(options()).with_committed(committed);
        select.focus();
        select
    }

    fn draw(select: &Select) -> String {
        let backend = TestBackend::new(30, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| select.view(frame, Rect::new(0, 0, 14, 1)))
            .unwrap();
        let buf = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..10 {
            for x in 0..30 {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn starts_uncommitted_without_current() {
        let select = Select::new(options());
        assert_eq!(select.committed(), None);
        assert_eq!(select.committed_label(), None);
    }

    #[test]
    fn current_entry_seeds_committed() {
        let entries = EntryList::new(vec![
            Entry::item("a", "A"),
            Entry::Item(crate::entry::Item::new("b", "B").current(true)),
        ])
        .unwrap();
        let select = Select::new(entries);
        assert_eq!(select.committed(), Some("b"));
    }

    #[test]
    fn with_committed_unknown_id_is_ignored() {
        let select = Select::new(options()).with_committed("nope");
        assert_eq!(select.committed(), None);
    }

    #[test]
    fn reopen_focuses_committed() {
        let mut select = select_with("option2");
        select.update(Message::KeyPress(key(KeyCode::Enter)));
        assert!(select.is_open());
        assert_eq!(select.focused_index(), Some(1));
    }

    #[test]
    fn scenario_up_enter_commits_previous_option() {
        let mut select = select_with("option2");
        select.update(Message::KeyPress(key(KeyCode::Enter)));
        select.update(Message::KeyPress(key(KeyCode::Up)));
        let msgs = select
            .update(Message::KeyPress(key(KeyCode::Enter)))
            .into_messages();
        assert!(matches!(&msgs[0], Message::Selected(id) if id == "option1"));
        assert!(matches!(msgs[1], Message::OpenChanged(false)));
        assert!(!select.is_open());
        assert_eq!(select.committed(), Some("option1"));
    }

    #[test]
    fn committed_survives_dismissal() {
        let mut select = select_with("option2");
        select.update(Message::KeyPress(key(KeyCode::Enter)));
        select.update(Message::KeyPress(key(KeyCode::Down)));
        select.update(Message::KeyPress(key(KeyCode::Esc)));
        assert_eq!(select.committed(), Some("option2"));
        // Reopen still focuses the committed entry, not the last cursor
        select.update(Message::KeyPress(key(KeyCode::Enter)));
        assert_eq!(select.focused_index(), Some(1));
    }

    #[test]
    fn commit_updates_reopen_focus() {
        let mut select = select_with("option2");
        select.update(Message::KeyPress(key(KeyCode::Enter)));
        select.update(Message::KeyPress(key(KeyCode::Down)));
        select.update(Message::KeyPress(key(KeyCode::Enter)));
        assert_eq!(select.committed(), Some("option3"));
        select.update(Message::KeyPress(key(KeyCode::Enter)));
        assert_eq!(select.focused_index(), Some(2));
    }

    #[test]
    fn empty_list_opens_and_escapes_cleanly() {
        let mut select = Select::new(EntryList::empty());
        select.focus();
        select.update(Message::KeyPress(key(KeyCode::Enter)));
        assert!(select.is_open());
        let cmd = select.update(Message::KeyPress(key(KeyCode::Down)));
        assert!(cmd.is_none());
        assert_eq!(select.focused_index(), None);
        select.update(Message::KeyPress(key(KeyCode::Esc)));
        assert!(!select.is_open());
    }

    #[test]
    fn trigger_shows_placeholder_then_value() {
        let mut select = Select::new(options()).with_placeholder("Pick one");
        select.focus();
        assert!(draw(&select).contains("Pick one ▸"));

        select.update(Message::KeyPress(key(KeyCode::Enter)));
        select.update(Message::KeyPress(key(KeyCode::Down)));
        select.update(Message::KeyPress(key(KeyCode::Enter)));
        assert!(draw(&select).contains("Option 1 ▸"));
    }

    #[test]
    fn open_popup_marks_committed_option() {
        let mut select = select_with("option2");
        select.update(Message::KeyPress(key(KeyCode::Enter)));
        let out = draw(&select);
        assert!(out.contains("▸ Option 2 ✓"));
    }

    #[test]
    fn click_commits_option() {
        let mut select = select_with("option2");
        select.update(Message::KeyPress(key(KeyCode::Enter)));
        draw(&select);
        // Rows start under the trigger: y=1 is Option 1
        let msgs = select.update(Message::Mouse(click(3, 1))).into_messages();
        assert!(matches!(&msgs[0], Message::Selected(id) if id == "option1"));
        assert_eq!(select.committed(), Some("option1"));
        assert!(!select.is_open());
    }

    #[test]
    fn outside_click_keeps_committed() {
        let mut select = select_with("option2");
        select.update(Message::KeyPress(key(KeyCode::Enter)));
        draw(&select);
        let msgs = select.update(Message::Mouse(click(25, 9))).into_messages();
        assert_eq!(msgs.len(), 1);
        assert!(matches!(msgs[0], Message::OpenChanged(false)));
        assert_eq!(select.committed(), Some("option2"));
    }

    #[test]
    fn set_entries_drops_stale_committed() {
        let mut select = select_with("option2");
        select.set_entries(EntryList::new(vec![Entry::item("x", "X")]).unwrap());
        assert_eq!(select.committed(), None);

        let mut select = select_with("option2");
        select.set_entries(
            EntryList::new(vec![Entry::item("option2", "Option 2")]).unwrap(),
        );
        assert_eq!(select.committed(), Some("option2"));
    }
}
