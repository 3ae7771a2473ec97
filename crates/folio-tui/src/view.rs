//! Top-level view composition.
//!
//! The screen is a fixed chrome: title row, tab bar, bordered panel, and an
//! optional footer. [`chrome`] computes the regions once; rendering and mouse
//! hit-testing both resolve against it so clicks land on what is drawn.

use folio_core::FocusZone;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::theme::{IconMode, Theme};
use crate::widgets::{hints_for_zone, FooterHints, PanelWidget, TabBar};

/// Screen regions, shared by rendering and mouse hit-testing.
#[derive(Debug, Clone, Copy)]
pub struct Chrome {
    pub title: Rect,
    pub tabs: Rect,
    pub panel: Rect,
    /// Inner text area of the panel, inside the border and padding.
    pub content: Rect,
    pub footer: Option<Rect>,
}

/// Split the terminal area into the fixed chrome regions.
pub fn chrome(area: Rect, show_hints: bool) -> Chrome {
    let constraints = if show_hints {
        vec![
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ]
    } else {
        vec![
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
        ]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let panel = chunks[2];
    let content = Rect {
        x: panel.x.saturating_add(2),
        y: panel.y.saturating_add(1),
        width: panel.width.saturating_sub(4),
        height: panel.height.saturating_sub(2),
    };

    Chrome {
        title: chunks[0],
        tabs: chunks[1],
        panel,
        content,
        footer: if show_hints { Some(chunks[3]) } else { None },
    }
}

/// Render the whole screen.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let buf = frame.buffer_mut();

    buf.set_style(area, Style::default().bg(app.theme.base).fg(app.theme.text));

    let regions = chrome(area, app.config.show_hints);

    render_title(app, regions.title, buf);

    TabBar::new(app.page.strip(), &app.theme)
        .focused(app.page.focus_zone() == FocusZone::Strip)
        .render(regions.tabs, buf);

    render_panel(app, regions.panel, regions.content, buf);

    if let Some(footer_area) = regions.footer {
        let hints = hints_for_zone(app.page.focus_zone());
        let position = app
            .page
            .strip()
            .active_button()
            .map(|i| (i + 1, app.page.strip().len()));
        FooterHints::new(&hints, &app.theme, app.page.focus_zone())
            .position(position)
            .render(footer_area, buf);
    }

    if app.show_help {
        render_help_overlay(&app.theme, area, buf);
    }
}

fn render_title(app: &App, area: Rect, buf: &mut Buffer) {
    if area.height < 1 {
        return;
    }

    let mut spans = vec![Span::styled(
        format!(" {}", app.page.document().title),
        Style::default()
            .fg(app.theme.text)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(message) = &app.notification {
        let text = format!("{message} ");
        let used = spans[0].content.width();
        let padding = usize::from(area.width).saturating_sub(used + text.width());
        if padding > 0 {
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(text, Style::default().fg(app.theme.info)));
        }
    }

    let line = Line::from(spans);
    buf.set_line(area.x, area.y, &line, area.width);
}

fn render_panel(app: &App, panel_area: Rect, content: Rect, buf: &mut Buffer) {
    let focused = app.page.focus_zone() == FocusZone::Panel;
    let border_set = if focused {
        app.borders.focused()
    } else {
        app.borders.normal()
    };
    let border_style = if focused {
        Style::default().fg(app.theme.border_focused)
    } else {
        Style::default().fg(app.theme.border)
    };

    let ctx = app.page.active_context();
    let title = match &ctx {
        Some(ctx) => panel_title(app, ctx.index),
        None => active_button_label(app).map_or_else(String::new, |label| format!(" {label} ")),
    };

    Block::default()
        .borders(Borders::ALL)
        .border_set(border_set)
        .border_style(border_style)
        .title(title)
        .title_style(Style::default().fg(app.theme.subtext))
        .render(panel_area, buf);

    // A button whose target panel does not exist leaves the page blank.
    if let Some(ctx) = ctx {
        PanelWidget::new(&ctx, &app.theme, &app.icons)
            .focused(focused)
            .render(content, buf);
    }
}

fn panel_title(app: &App, panel_index: usize) -> String {
    let panel = &app.page.document().panels[panel_index];
    let label = active_button_label(app).unwrap_or_else(|| panel.id.clone());
    let Some(date) = panel.date else {
        return format!(" {label} ");
    };
    let dot = match app.icons.mode() {
        IconMode::Unicode => "·",
        IconMode::Ascii => "-",
    };
    format!(" {label} {dot} {} ", date.format("%a %d %b %Y"))
}

fn active_button_label(app: &App) -> Option<String> {
    let strip = app.page.strip();
    let index = strip.active_button()?;
    strip.buttons().get(index).map(|b| b.label.clone())
}

/// Render the help overlay.
pub fn render_help_overlay(theme: &Theme, area: Rect, buf: &mut Buffer) {
    let help_text = r"
  Navigation
    Tab / Shift+Tab    Switch between tabs and panel
    h/l or Left/Right  Previous/next day (tabs)
    j/k or Up/Down     Move through panel rows
    Alt+1/2/3          Jump straight to a day
    Enter or Space     Open a section or copy a link
    g/G, PgUp/PgDn     Top/bottom, page moves

  Document
    e / c              Expand/collapse every section
    p                  Save a printable copy
    q                  Quit
    ?                  Toggle this help

  [Press any key to close]
";

    // Calculate overlay size
    let width = 58.min(area.width.saturating_sub(4));
    let height = 18.min(area.height.saturating_sub(2));
    let overlay_area = centered_fixed(width, height, area);

    // Clear the area
    Clear.render(overlay_area, buf);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.surface).fg(theme.text));

    Paragraph::new(help_text).block(block).render(overlay_area, buf);
}

/// Create a centered rect with fixed dimensions.
fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chrome_regions_stack() {
        let regions = chrome(Rect::new(0, 0, 80, 24), true);
        assert_eq!(regions.title, Rect::new(0, 0, 80, 1));
        assert_eq!(regions.tabs, Rect::new(0, 1, 80, 1));
        assert_eq!(regions.panel, Rect::new(0, 2, 80, 21));
        assert_eq!(regions.footer, Some(Rect::new(0, 23, 80, 1)));
        // Content sits inside the border with one column of padding.
        assert_eq!(regions.content, Rect::new(2, 3, 76, 19));
    }

    #[test]
    fn test_chrome_without_footer_gives_rows_to_panel() {
        let regions = chrome(Rect::new(0, 0, 80, 24), false);
        assert_eq!(regions.panel, Rect::new(0, 2, 80, 22));
        assert_eq!(regions.footer, None);
        assert_eq!(regions.content.height, 20);
    }

    #[test]
    fn test_chrome_survives_tiny_terminal() {
        let regions = chrome(Rect::new(0, 0, 3, 2), true);
        assert_eq!(regions.content.width, 0);
    }

    #[test]
    fn test_centered_fixed_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_fixed(60, 20, area);
        assert!(rect.width <= 40);
        assert!(rect.height <= 10);
    }
}
