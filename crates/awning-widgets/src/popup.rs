//! Shared popup engine behind [`Menu`](crate::menu::Menu) and
//! [`Select`](crate::select::Select).
//!
//! The action-menu and single-select widgets are the same state machine with
//! different commit behavior, so the open/close lifecycle, keyboard
//! traversal, outside-click dismissal, and overlay rendering live here once.
//! The engine owns an *open session* — focus state plus the render-recorded
//! popup bounds — created on the open transition and dropped on every close
//! path, so listeners-in-spirit (which events the engine reacts to) are
//! released unconditionally.
//!
//! The engine is renderer-passive: it mutates state in `handle_key`/
//! `handle_mouse` and reports what happened as an [`Outcome`]; the owning
//! widget translates outcomes into messages for its parent.

use crate::entry::{Entry, EntryList};
use crate::nav::NavState;
use crate::outside::{Hit, PopupBounds};
use crate::placement::Placement;
use crate::textutil;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use std::cell::Cell;

/// Result of feeding one input event to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Not consumed: the popup is closed, the key is not bound, or the mouse
    /// event is not a left-button press. Unbound keys are reported here
    /// rather than swallowed so the host can route them elsewhere.
    Ignored,
    /// Consumed. Focus may have moved, but the popup stays open.
    Handled,
    /// Pointer-down on the trigger. The owning widget decides what
    /// activation means (toggle, plus mode-specific initial focus).
    TriggerActivated,
    /// An enabled item was committed. The popup has already closed.
    Committed(String),
    /// The popup closed without committing (Esc or outside pointer-down).
    Dismissed,
}

/// Style configuration for the popup overlay.
#[derive(Debug, Clone)]
pub struct PopupStyle {
    /// Style for enabled, unfocused items.
    pub item: Style,
    /// Style for the keyboard-focused item.
    pub focused_item: Style,
    /// Style for disabled items.
    pub disabled_item: Style,
    /// Style for separator rules.
    pub separator: Style,
    /// Symbol displayed in front of the focused item.
    pub highlight_symbol: String,
    /// Mark appended to the current selection (select mode).
    pub current_mark: String,
}

impl Default for PopupStyle {
    fn default() -> Self {
        Self {
            item: Style::default(),
            focused_item: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            disabled_item: Style::default().fg(Color::DarkGray),
            separator: Style::default().fg(Color::DarkGray),
            highlight_symbol: "▸ ".to_string(),
            current_mark: "✓".to_string(),
        }
    }
}

/// State that exists only while the popup is open.
///
/// Dropping the session is the close operation: focus is forgotten and,
/// together with [`PopupBounds::clear_popup`], the engine stops reacting to
/// popup-area and dismissal events.
#[derive(Debug)]
struct Session {
    nav: NavState,
}

/// The popup list state machine.
///
/// Holds the entry list, the open session (if any), and the geometry
/// recorded by the last render. See the module docs for the division of
/// labor between the engine and the widgets that own it.
pub struct PopupCore {
    entries: EntryList,
    placement: Placement,
    max_visible: usize,
    min_width: u16,
    block: Option<Block<'static>>,
    style: PopupStyle,
    current_id: Option<String>,
    session: Option<Session>,
    bounds: PopupBounds,
    // Render-time geometry: first visible raw row, and the row area inside
    // any border. Written during view, read when mapping clicks to rows.
    scroll: Cell<usize>,
    inner: Cell<Rect>,
}

impl PopupCore {
    /// Create an engine over the given entries, closed.
    pub fn new(entries: EntryList) -> Self {
        Self {
            entries,
            placement: Placement::default(),
            max_visible: 8,
            min_width: 0,
            block: None,
            style: PopupStyle::default(),
            current_id: None,
            session: None,
            bounds: PopupBounds::new(),
            scroll: Cell::new(0),
            inner: Cell::new(Rect::default()),
        }
    }

    /// Set the placement corner relative to the trigger.
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the maximum number of visible rows before scrolling.
    pub fn with_max_visible(mut self, max: usize) -> Self {
        self.max_visible = max.max(1);
        self
    }

    /// Set a minimum overlay width (the overlay is otherwise as wide as the
    /// trigger).
    pub fn with_min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    /// Set the block (border/title container) for the overlay.
    pub fn with_block(mut self, block: Block<'static>) -> Self {
        self.block = Some(block);
        self
    }

    /// Set the style configuration.
    pub fn with_style(mut self, style: PopupStyle) -> Self {
        self.style = style;
        self
    }

    /// The entry list.
    pub fn entries(&self) -> &EntryList {
        &self.entries
    }

    /// Replace the entry list. Closes the popup first so a live session
    /// never observes a mutated list.
    pub fn set_entries(&mut self, entries: EntryList) {
        self.close();
        self.entries = entries;
    }

    /// Id of the current selection shown with the current mark, if any.
    pub fn current_id(&self) -> Option<&str> {
        self.current_id.as_deref()
    }

    /// Set (or clear) the current selection mark.
    pub fn set_current(&mut self, id: Option<String>) {
        self.current_id = id;
    }

    /// Whether the popup is open.
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// The focused navigable index, if open and focused.
    pub fn focused_index(&self) -> Option<usize> {
        self.session.as_ref().and_then(|s| s.nav.cursor())
    }

    /// Open the popup with an optional initial focus (navigable index).
    ///
    /// No-op if already open. An empty or all-disabled list opens with
    /// nothing focused and can only be dismissed.
    pub fn open(&mut self, initial_focus: Option<usize>) {
        if self.session.is_some() {
            return;
        }
        let mut nav = NavState::new(self.entries.navigable_count());
        if let Some(index) = initial_focus {
            nav.select(index);
        }
        self.scroll.set(0);
        self.session = Some(Session { nav });
    }

    /// Close the popup, dropping the session and its recorded bounds.
    ///
    /// Every transition out of the open state funnels through here, so the
    /// release is unconditional.
    pub fn close(&mut self) {
        self.session = None;
        self.bounds.clear_popup();
        self.scroll.set(0);
    }

    /// Feed a key press. Only an open popup reacts; a closed engine returns
    /// [`Outcome::Ignored`] so trigger-activation keys stay the widget's
    /// concern.
    pub fn handle_key(&mut self, key: KeyEvent) -> Outcome {
        let Some(session) = self.session.as_mut() else {
            return Outcome::Ignored;
        };
        match key.code {
            KeyCode::Down => {
                session.nav.next();
                Outcome::Handled
            }
            KeyCode::Up => {
                session.nav.prev();
                Outcome::Handled
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                // Nothing focused: a no-op that keeps the popup open
                let Some(index) = session.nav.cursor() else {
                    return Outcome::Handled;
                };
                match self.entries.item_at(index) {
                    Ok(item) => {
                        let id = item.id.clone();
                        self.close();
                        Outcome::Committed(id)
                    }
                    // Cursor is always within the navigable count
                    Err(_) => Outcome::Handled,
                }
            }
            KeyCode::Esc => {
                self.close();
                Outcome::Dismissed
            }
            _ => Outcome::Ignored,
        }
    }

    /// Feed a mouse event. Only left-button presses are interpreted.
    ///
    /// A press on the trigger is reported as [`Outcome::TriggerActivated`]
    /// whether open or closed. A press inside the popup commits the clicked
    /// enabled item (disabled items, separators, and border cells are
    /// no-ops). A press outside both dismisses an open popup and is ignored
    /// by a closed one — late events cannot act on a widget that already
    /// closed.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Outcome {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Outcome::Ignored;
        }
        match self.bounds.hit(mouse.column, mouse.row) {
            Hit::Trigger => Outcome::TriggerActivated,
            Hit::Popup => {
                let clicked = match self.clicked_entry(mouse.column, mouse.row) {
                    Some(Entry::Item(item)) if !item.disabled => Some(item.id.clone()),
                    _ => None,
                };
                match clicked {
                    Some(id) => {
                        self.close();
                        Outcome::Committed(id)
                    }
                    None => Outcome::Handled,
                }
            }
            Hit::Outside => {
                if self.is_open() {
                    self.close();
                    Outcome::Dismissed
                } else {
                    Outcome::Ignored
                }
            }
        }
    }

    /// Map a pointer position inside the popup to the entry on that row.
    fn clicked_entry(&self, column: u16, row: u16) -> Option<&Entry> {
        let inner = self.inner.get();
        if !inner.contains(Position::new(column, row)) {
            return None;
        }
        let raw = self.scroll.get() + (row - inner.y) as usize;
        self.entries.entries().get(raw)
    }

    /// Render the popup overlay anchored to `anchor` (the trigger area).
    ///
    /// Always records the trigger bounds; draws and records the overlay only
    /// while open. The overlay is cleared behind, bordered if a block is
    /// set, and scrolled so the focused row stays visible.
    pub fn render_popup(&self, frame: &mut Frame, anchor: Rect) {
        self.bounds.record_trigger(anchor);
        let Some(session) = self.session.as_ref() else {
            return;
        };

        let rows = self.entries.len().min(self.max_visible) as u16;
        let height = if self.block.is_some() { rows + 2 } else { rows };
        let width = anchor.width.max(self.min_width);
        let popup = self.placement.resolve(anchor, width, height);

        if popup.height == 0 || popup.width < 4 {
            return;
        }

        frame.render_widget(Clear, popup);
        self.bounds.record_popup(popup);

        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(popup);
            frame.render_widget(block.clone(), popup);
            inner
        } else {
            popup
        };
        self.inner.set(inner);

        let visible = inner.height as usize;
        if visible == 0 {
            return;
        }

        let focused_raw = session
            .nav
            .cursor()
            .and_then(|c| self.entries.raw_index_of(c).ok());

        // Scroll the focused row into the window
        let mut offset = self.scroll.get();
        if let Some(raw) = focused_raw {
            if raw < offset {
                offset = raw;
            } else if raw >= offset + visible {
                offset = raw + 1 - visible;
            }
        }
        offset = offset.min(self.entries.len().saturating_sub(visible));
        self.scroll.set(offset);

        let symbol_width = textutil::display_width(&self.style.highlight_symbol);
        for (i, entry) in self
            .entries
            .entries()
            .iter()
            .skip(offset)
            .take(visible)
            .enumerate()
        {
            let row_area = Rect {
                y: inner.y + i as u16,
                height: 1,
                ..inner
            };

            match entry {
                Entry::Separator => {
                    let rule = "─".repeat(inner.width as usize);
                    frame.render_widget(
                        Paragraph::new(Span::styled(rule, self.style.separator)),
                        row_area,
                    );
                }
                Entry::Item(item) => {
                    let raw = offset + i;
                    let is_focused = focused_raw == Some(raw);
                    let style = if item.disabled {
                        self.style.disabled_item
                    } else if is_focused {
                        self.style.focused_item
                    } else {
                        self.style.item
                    };

                    let mut text = if is_focused {
                        self.style.highlight_symbol.clone()
                    } else {
                        " ".repeat(symbol_width)
                    };
                    if let Some(ref icon) = item.icon {
                        text.push_str(icon);
                        text.push(' ');
                    }
                    text.push_str(&item.label);
                    if self.current_id.as_deref() == Some(item.id.as_str()) {
                        text.push(' ');
                        text.push_str(&self.style.current_mark);
                    }

                    let display = textutil::truncate(&text, inner.width as usize, "…");
                    frame.render_widget(Paragraph::new(Span::styled(display, style)), row_area);
                }
            }
        }
    }
}
