use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation},
};
use threadview::render::{self, Fragment};

pub fn ui(f: &mut ratatui::Frame, app: &App) {
    render_chat(f, app);
}

fn render_chat(f: &mut ratatui::Frame, app: &App) {
    let mut constraints = vec![
        Constraint::Length(3), // Thread name bar
        Constraint::Min(0),    // Entries
        Constraint::Length(3), // Input
    ];

    // Add space for status message if present
    if app.status_message.is_some() {
        constraints.insert(1, Constraint::Length(2)); // Status message
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    // Thread name bar (the thread's name label; empty after a clear)
    let thread_name = app
        .view
        .thread(&app.active)
        .map(|t| t.name().to_string())
        .unwrap_or_default();

    let name_text = if app.order.len() > 1 {
        let pos = app
            .order
            .iter()
            .position(|id| *id == app.active)
            .map(|p| p + 1)
            .unwrap_or(0);
        format!("{thread_name} | thread {pos}/{} (Tab to switch)", app.order.len())
    } else {
        thread_name
    };

    let name_bar = Paragraph::new(name_text)
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Chat")
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(name_bar, chunks[0]);

    let mut entries_chunk_index = 1;

    // Status message (if present)
    if let Some(status_msg) = &app.status_message {
        let status = Paragraph::new(status_msg.as_str())
            .style(Style::default().fg(Color::Cyan))
            .alignment(ratatui::layout::Alignment::Center)
            .block(Block::default().borders(Borders::NONE));
        f.render_widget(status, chunks[1]);
        entries_chunk_index = 2;
    }

    // Entries area
    let entries = app
        .view
        .thread(&app.active)
        .map(|t| t.entries())
        .unwrap_or(&[]);

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let spans: Vec<Span> = render::entry_line(entry, app.mode)
                .into_iter()
                .map(to_span)
                .collect();
            ListItem::new(Line::from(spans))
        })
        .collect();

    let entries_list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(
                "Messages ({}) - Ctrl+L to clear, Esc to quit",
                entries.len()
            ))
            .style(Style::default().fg(Color::White)),
    );

    f.render_widget(entries_list, chunks[entries_chunk_index]);

    // Render scrollbar
    let scrollbar = Scrollbar::default()
        .orientation(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None);
    let scrollbar_area = chunks[entries_chunk_index].inner(Margin {
        horizontal: 0,
        vertical: 1,
    });
    f.render_stateful_widget(scrollbar, scrollbar_area, &mut app.scroll_state.clone());

    // Input area
    let input_chunk_index = if app.status_message.is_some() { 3 } else { 2 };
    let input = Paragraph::new(app.input.text())
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Type your message (Enter to send)"),
        );
    f.render_widget(input, chunks[input_chunk_index]);

    // Set cursor position
    f.set_cursor_position((
        chunks[input_chunk_index].x + app.input.cursor() as u16 + 1,
        chunks[input_chunk_index].y + 1,
    ));
}

/// Maps a styled fragment onto a terminal span.
fn to_span(fragment: Fragment) -> Span<'static> {
    let mut style = Style::default();
    if fragment.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if fragment.italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if fragment.code {
        style = style.fg(Color::Cyan);
    }
    Span::styled(fragment.text, style)
}
