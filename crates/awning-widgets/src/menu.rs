//! Action menu: a trigger button that opens a popup of commands.
//!
//! Committing an entry reports its id to the parent via
//! [`Message::Activated`]; the parent dispatches on the id the way the
//! entry's bound action would run. The menu keeps no selection across
//! sessions — every open starts unfocused.

use crate::entry::EntryList;
use crate::placement::Placement;
use crate::popup::{Outcome, PopupCore, PopupStyle};
use awning_core::command::Command;
use awning_core::component::Component;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

/// Messages for the menu component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press event forwarded to the menu.
    KeyPress(KeyEvent),
    /// A mouse event forwarded to the menu.
    Mouse(MouseEvent),
    /// Request to open the menu.
    Open,
    /// Request to close the menu without committing.
    Close,
    /// Emitted when an enabled entry is activated, carrying its id.
    Activated(String),
    /// Emitted on every open/close transition.
    OpenChanged(bool),
}

/// Visual style configuration for the [`Menu`] trigger.
#[derive(Debug, Clone)]
pub struct MenuStyle {
    /// Trigger label when the menu is closed and unfocused.
    pub trigger: Style,
    /// Trigger label while the component has keyboard focus.
    pub trigger_focused: Style,
    /// Trigger label while the menu is open.
    pub trigger_open: Style,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            trigger: Style::default(),
            trigger_focused: Style::default().fg(Color::Cyan),
            trigger_open: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// An action-menu widget: an always-visible trigger plus a popup list of
/// commands rendered while open.
///
/// # Example
///
/// ```ignore
/// use awning_widgets::entry::{Entry, EntryList, Item};
/// use awning_widgets::menu::Menu;
///
/// let entries = EntryList::new(vec![
///     Entry::item("edit", "Edit"),
///     Entry::item("duplicate", "Duplicate"),
///     Entry::separator(),
///     Entry::Item(Item::new("delete", "Delete").disabled(true)),
/// ])?;
/// let menu = Menu::new("Actions", entries);
/// ```
pub struct Menu {
    trigger_label: String,
    popup: PopupCore,
    focus: bool,
    disabled: bool,
    style: MenuStyle,
}

impl Menu {
    /// Create a menu with the given trigger label and entries.
    pub fn new(trigger_label: impl Into<String>, entries: EntryList) -> Self {
        Self {
            trigger_label: trigger_label.into(),
            popup: PopupCore::new(entries),
            focus: false,
            disabled: false,
            style: MenuStyle::default(),
        }
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

    /// Set a minimum popup width.
    pub fn with_min_width(mut self, width: u16) -> Self {
        self.popup = self.popup.with_min_width(width);
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
    pub fn with_style(mut self, style: MenuStyle) -> Self {
        self.style = style;
        self
    }

    /// Disable or enable the whole widget. A disabled menu ignores
    /// activation.
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

    /// Give this menu keyboard focus.
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

    /// The entry list.
    pub fn entries(&self) -> &EntryList {
        self.popup.entries()
    }

    /// Replace the entry list, closing the popup first so an open session
    /// never observes a mutated list. Returns the close command so the
    /// parent still observes the transition.
    pub fn set_entries(&mut self, entries: EntryList) -> Command<Message> {
        let cmd = self.dismiss();
        self.popup.set_entries(entries);
        cmd
    }

    /// Open unfocused (the menu variant never restores focus).
    fn activate(&mut self) -> Command<Message> {
        if self.disabled || self.popup.is_open() {
            return Command::none();
        }
        self.popup.open(None);
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
            Outcome::Committed(id) => Command::batch(vec![
                Command::message(Message::Activated(id)),
                Command::message(Message::OpenChanged(false)),
            ]),
            Outcome::Dismissed => Command::message(Message::OpenChanged(false)),
            Outcome::TriggerActivated => {
                // Trigger press toggles: dismiss when open, open when closed
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

impl Component for Menu {
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
        let style = if self.popup.is_open() {
            self.style.trigger_open
        } else if self.focus {
            self.style.trigger_focused
        } else {
            self.style.trigger
        };
        let trigger = Paragraph::new(Span::styled(self.trigger_label.as_str(), style));
        frame.render_widget(trigger, area);

        self.popup.render_popup(frame, area);
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Entry, Item};
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

    fn menu() -> Menu {
        let entries = EntryList::new(vec![
            Entry::item("edit", "Edit"),
            Entry::item("duplicate", "Duplicate"),
            Entry::Item(Item::new("archive", "Archive").disabled(true)),
            Entry::separator(),
            Entry::Item(Item::new("delete", "Delete").disabled(true)),
        ])
        .unwrap();
        let mut menu = Menu::new("Actions", entries);
        menu.focus();
        menu
    }

    fn draw(menu: &Menu) {
        let backend = TestBackend::new(30, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| menu.view(frame, Rect::new(0, 0, 14, 1)))
            .unwrap();
    }

    #[test]
    fn enter_opens_unfocused() {
        let mut menu = menu();
        let cmd = menu.update(Message::KeyPress(key(KeyCode::Enter)));
        assert!(menu.is_open());
        assert_eq!(menu.focused_index(), None);
        assert!(matches!(
            cmd.into_message(),
            Some(Message::OpenChanged(true))
        ));
    }

    #[test]
    fn scenario_down_down_enter_activates_duplicate() {
        let mut menu = menu();
        menu.update(Message::KeyPress(key(KeyCode::Enter)));
        menu.update(Message::KeyPress(key(KeyCode::Down)));
        menu.update(Message::KeyPress(key(KeyCode::Down)));
        let msgs = menu
            .update(Message::KeyPress(key(KeyCode::Enter)))
            .into_messages();
        assert!(matches!(&msgs[0], Message::Activated(id) if id == "duplicate"));
        assert!(matches!(msgs[1], Message::OpenChanged(false)));
        assert_eq!(msgs.len(), 2);
        assert!(!menu.is_open());
    }

    #[test]
    fn reopen_starts_unfocused() {
        let mut menu = menu();
        menu.update(Message::KeyPress(key(KeyCode::Enter)));
        menu.update(Message::KeyPress(key(KeyCode::Down)));
        menu.update(Message::KeyPress(key(KeyCode::Esc)));
        menu.update(Message::KeyPress(key(KeyCode::Enter)));
        assert!(menu.is_open());
        assert_eq!(menu.focused_index(), None);
    }

    #[test]
    fn esc_emits_open_changed_only() {
        let mut menu = menu();
        menu.update(Message::KeyPress(key(KeyCode::Enter)));
        let msgs = menu
            .update(Message::KeyPress(key(KeyCode::Esc)))
            .into_messages();
        assert_eq!(msgs.len(), 1);
        assert!(matches!(msgs[0], Message::OpenChanged(false)));
    }

    #[test]
    fn keys_while_closed_change_nothing() {
        let mut menu = menu();
        let cmd = menu.update(Message::KeyPress(key(KeyCode::Down)));
        assert!(cmd.is_none());
        assert!(!menu.is_open());
        assert_eq!(menu.focused_index(), None);
    }

    #[test]
    fn keys_without_component_focus_are_ignored() {
        let entries = EntryList::new(vec![Entry::item("a", "A")]).unwrap();
        let mut menu = Menu::new("Actions", entries);
        let cmd = menu.update(Message::KeyPress(key(KeyCode::Enter)));
        assert!(cmd.is_none());
        assert!(!menu.is_open());
    }

    #[test]
    fn disabled_menu_does_not_open() {
        let mut menu = menu();
        menu.set_disabled(true);
        let cmd = menu.update(Message::KeyPress(key(KeyCode::Enter)));
        assert!(cmd.is_none());
        assert!(!menu.is_open());
    }

    #[test]
    fn trigger_click_toggles() {
        let mut menu = menu();
        draw(&menu);
        let cmd = menu.update(Message::Mouse(click(3, 0)));
        assert!(menu.is_open());
        assert!(matches!(
            cmd.into_message(),
            Some(Message::OpenChanged(true))
        ));

        draw(&menu);
        let cmd = menu.update(Message::Mouse(click(3, 0)));
        assert!(!menu.is_open());
        assert!(matches!(
            cmd.into_message(),
            Some(Message::OpenChanged(false))
        ));
    }

    #[test]
    fn outside_click_dismisses_without_commit() {
        let mut menu = menu();
        menu.update(Message::KeyPress(key(KeyCode::Enter)));
        draw(&menu);
        let msgs = menu.update(Message::Mouse(click(25, 9))).into_messages();
        assert_eq!(msgs.len(), 1);
        assert!(matches!(msgs[0], Message::OpenChanged(false)));
        assert!(!menu.is_open());
    }

    #[test]
    fn click_on_disabled_entry_keeps_menu_open() {
        let mut menu = menu();
        menu.update(Message::KeyPress(key(KeyCode::Enter)));
        draw(&menu);
        // Row 3 is Archive (disabled): no activation, no dismissal
        let cmd = menu.update(Message::Mouse(click(3, 3)));
        assert!(cmd.is_none());
        assert!(menu.is_open());
    }

    #[test]
    fn click_activates_entry_exactly_once() {
        let mut menu = menu();
        menu.update(Message::KeyPress(key(KeyCode::Enter)));
        draw(&menu);
        let msgs = menu.update(Message::Mouse(click(3, 1))).into_messages();
        let activations = msgs
            .iter()
            .filter(|m| matches!(m, Message::Activated(_)))
            .count();
        assert_eq!(activations, 1);
        assert!(matches!(&msgs[0], Message::Activated(id) if id == "edit"));
    }

    #[test]
    fn blur_closes_and_reports() {
        let mut menu = menu();
        menu.update(Message::KeyPress(key(KeyCode::Enter)));
        let cmd = menu.blur();
        assert!(!menu.is_open());
        assert!(!menu.focused());
        assert!(matches!(
            cmd.into_message(),
            Some(Message::OpenChanged(false))
        ));
    }
}
