//! Pure rendering: map App state to ratatui widgets.
//!
//! `render` draws the whole page and hands back the tab buttons it laid
//! out. Those `Rc`s are the frame's elements; the event loop keeps them
//! alive until the next draw and the widget's focus table only borrows them
//! weakly.

use std::rc::Rc;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::focus::TabButton;
use crate::types::TabSet;

use super::state::{App, Focus};
use super::theme;

/// Columns between adjacent tab buttons.
const BUTTON_GAP: u16 = 1;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the page to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) -> Vec<Rc<TabButton>> {
    let chunks = page_layout(frame.area());

    frame.render_widget(render_title(app), chunks[0]);
    let buttons = render_tab_strip(app, frame, chunks[1]);
    render_panel(app, frame, chunks[2]);
    frame.render_widget(render_help(app.focus), chunks[3]);

    buttons
}

/// Title, tab strip, panel, help line.
fn page_layout(area: Rect) -> Rc<[Rect]> {
    Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Length(3), // tab strip
        Constraint::Min(0),    // panel
        Constraint::Length(1), // help
    ])
    .split(area)
}

/// The buttons `render` would produce for a frame of `area`, without drawing.
///
/// Headless callers use this to get live elements for the focus table.
pub fn tab_buttons(tabs: &TabSet, area: Rect) -> Vec<Rc<TabButton>> {
    let strip = page_layout(area)[1];
    let inner = Block::default().borders(Borders::ALL).inner(strip);
    layout_buttons(tabs, inner)
        .into_iter()
        .enumerate()
        .map(|(i, rect)| Rc::new(TabButton::new(i, rect)))
        .collect()
}

// ============================================================================
// TAB STRIP
// ============================================================================

fn button_text(label: &str) -> String {
    format!(" {label} ")
}

/// Lay the buttons out left to right on the first row of `area`.
///
/// A button that does not fit is truncated to the remaining width; buttons
/// starting past the right edge are not laid out at all.
pub fn layout_buttons(tabs: &TabSet, area: Rect) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(tabs.len());
    if area.height == 0 {
        return rects;
    }

    let right = area.right();
    let mut x = area.x;
    for tab in tabs {
        if x >= right {
            break;
        }
        let wanted = u16::try_from(Span::raw(button_text(&tab.label)).width()).unwrap_or(u16::MAX);
        let width = wanted.min(right - x);
        rects.push(Rect::new(x, area.y, width, 1));
        x = x.saturating_add(width).saturating_add(BUTTON_GAP);
    }
    rects
}

fn button_style(selected: bool, focused: bool) -> Style {
    let base = if selected {
        theme::STYLE_TAB_SELECTED
    } else {
        theme::STYLE_TAB
    };
    if focused {
        base.patch(theme::STYLE_FOCUS_RING)
    } else {
        base
    }
}

fn render_tab_strip(app: &App, frame: &mut Frame, area: Rect) -> Vec<Rc<TabButton>> {
    let tabs = app.widget.tabs();
    let strip_focused = app.focus.tab_index().is_some();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(format!(" {} ", tabs.label())))
        .border_style(if strip_focused {
            theme::STYLE_BORDER_FOCUSED
        } else {
            theme::STYLE_BORDER
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    layout_buttons(tabs, inner)
        .into_iter()
        .zip(tabs.iter())
        .enumerate()
        .map(|(i, (rect, tab))| {
            let style = button_style(app.widget.is_active(i), app.focus == Focus::Tab(i));
            let button = Paragraph::new(Span::styled(button_text(&tab.label), style));
            frame.render_widget(button, rect);
            Rc::new(TabButton::new(i, rect))
        })
        .collect()
}

// ============================================================================
// PANEL
// ============================================================================

fn render_panel(app: &App, frame: &mut Frame, area: Rect) {
    let tab = app.widget.active_tab();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(format!(" {} ", tab.label)))
        .border_style(if app.focus == Focus::Panel {
            theme::STYLE_BORDER_FOCUSED
        } else {
            theme::STYLE_BORDER
        });

    let content = Paragraph::new(Line::from(Span::styled(
        tab.content.as_str(),
        theme::STYLE_CONTENT,
    )))
    .block(block)
    .wrap(Wrap { trim: false });

    frame.render_widget(content, area);
}

// ============================================================================
// CHROME
// ============================================================================

fn render_title(app: &App) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled("tabstrip", theme::STYLE_TITLE),
        Span::styled(format!("  {}", app.widget.tabs().label()), theme::STYLE_HELP),
    ]))
}

/// Help line showing the keys that do something for the focused element.
fn render_help(focus: Focus) -> Paragraph<'static> {
    let help_text = match focus {
        Focus::Tab(_) => "[←/→] switch  [Home/End] first/last  [Tab] panel  [q] quit",
        Focus::Panel => "[Tab] leave  [Shift+Tab] tabs  [q] quit",
        Focus::Outside => "[Tab] tabs  [click] select  [q] quit",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// TESTS
// ============================================================================
