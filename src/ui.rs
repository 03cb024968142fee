use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
};

use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::models::FocusArea;
use crate::network::ERROR_PREFIX;
use crate::theme::Theme;
use crate::utils::{extract_video_id, wrapped_line_count};

const HEADER_HEIGHT: u16 = 1;
const INPUT_HEIGHT: u16 = 3;
const CONTROLS_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;

/// Width and height of each output region for a terminal of the given size.
pub fn output_pane_size(term_width: u16, term_height: u16) -> (u16, u16) {
    let rest = term_height.saturating_sub(HEADER_HEIGHT + INPUT_HEIGHT + CONTROLS_HEIGHT + FOOTER_HEIGHT);
    (term_width, rest / 2)
}

/// Renders the whole form.
pub fn render(f: &mut Frame, app: &App, endpoint: &str, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(CONTROLS_HEIGHT),
            Constraint::Min(4),      // summary
            Constraint::Min(4),      // q&a
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(f.area());

    let header = Paragraph::new(Line::from(vec![
        Span::styled("YouTube Summarizer & Q&A", theme.header),
        Span::styled(format!("  → {}", endpoint), Style::default().fg(theme.text_secondary)),
    ]));
    f.render_widget(header, chunks[0]);

    render_url_input(f, app, theme, chunks[1]);
    render_controls(f, app, theme, chunks[2]);

    let summary_style = if app.summary.starts_with(ERROR_PREFIX) {
        theme.error_text
    } else {
        Style::default().fg(theme.text)
    };
    render_output(f, "Summary", &app.summary, app.summary_scroll, summary_style, app.focus == FocusArea::Summary, theme, chunks[3]);
    render_output(f, "Q&A", &app.answer, app.answer_scroll, Style::default().fg(theme.text), app.focus == FocusArea::Answer, theme, chunks[4]);

    render_footer(f, app, theme, chunks[5]);
}

fn render_url_input(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let focused = app.focus == FocusArea::Url;
    let mut title = vec![Span::raw("YouTube URL")];
    if let Some(id) = extract_video_id(&app.source_url) {
        title.push(Span::raw(" · video "));
        title.push(Span::styled(id.to_string(), theme.video_id));
    }
    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(theme.border(focused));

    let content = if app.source_url.is_empty() && !focused {
        Line::from(Span::styled("Enter YouTube URL", theme.placeholder))
    } else {
        let cursor = if focused { "▏" } else { "" };
        Line::from(vec![
            Span::styled(app.source_url.clone(), Style::default().fg(theme.text)),
            Span::raw(cursor),
        ])
    };
    let para = Paragraph::new(content)
        .block(block)
        .scroll((0, url_scroll_offset(&app.source_url, area.width)));
    f.render_widget(para, area);
}

/// Columns to scroll so the end of a long URL and the cursor stay visible.
fn url_scroll_offset(url: &str, area_width: u16) -> u16 {
    // two border columns and one for the cursor
    let inner_width = area_width.saturating_sub(3) as usize;
    let overflow = url.width().saturating_sub(inner_width);
    overflow.min(u16::MAX as usize) as u16
}

fn render_controls(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(40),
            Constraint::Percentage(35),
        ])
        .split(area);

    let selector = |title: &'static str, value: &str, focused: bool| {
        Paragraph::new(Line::from(vec![
            Span::raw("◂ "),
            Span::styled(value.to_string(), theme.selector_value),
            Span::raw(" ▸"),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().title(title).borders(Borders::ALL).border_style(theme.border(focused)))
    };
    f.render_widget(selector("Language", app.language.label(), app.focus == FocusArea::Language), columns[0]);
    f.render_widget(selector("Summary Type", app.summary_style.label(), app.focus == FocusArea::Style), columns[1]);

    let button_style = if app.is_in_flight() { theme.button_busy } else { theme.button_idle };
    let button = Paragraph::new(Span::styled(format!(" {} ", app.submit_label()), button_style))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(theme.border(app.focus == FocusArea::Submit)));
    f.render_widget(button, columns[2]);
}

#[allow(clippy::too_many_arguments)]
fn render_output(
    f: &mut Frame,
    title: &str,
    text: &str,
    scroll: u16,
    style: Style,
    focused: bool,
    theme: &Theme,
    area: Rect,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(1)].as_ref())
        .split(area);

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(theme.border(focused));
    let para = Paragraph::new(text.to_string())
        .block(block)
        .style(style)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(para, layout[0]);

    let lines = wrapped_line_count(text, layout[0].width.saturating_sub(2));
    if lines > layout[0].height.saturating_sub(2) {
        let mut sb = ScrollbarState::default()
            .position(scroll as usize)
            .content_length(lines as usize);
        f.render_stateful_widget(Scrollbar::default().orientation(ScrollbarOrientation::VerticalRight), layout[1], &mut sb);
    }
}

fn render_footer(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let mut spans = vec![Span::styled(
        "Tab/Shift+Tab Focus | ←/→ Change option | Enter Submit | ↑/↓ Scroll | c Copy output | Ctrl+U Clear URL | Esc Quit",
        theme.footer,
    )];
    if let Some(status) = &app.status {
        spans.push(Span::styled(format!("  {}", status), theme.status));
    } else if let Some(done) = app.last_completed {
        spans.push(Span::styled(format!("  Last result {}", done.format("%H:%M:%S")), theme.status));
    }
    let footer = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OutputLanguage, SummaryOutput, SummaryStyle};
    use ratatui::backend::TestBackend;

    fn screen(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render(f, app, "http://localhost:8000/ingest-youtube", &Theme::default()))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn idle_form_shows_defaults() {
        let app = App::new(OutputLanguage::English, SummaryStyle::StudyGuide);
        let text = screen(&app);
        assert!(text.contains("YouTube Summarizer & Q&A"));
        assert!(text.contains("English"));
        assert!(text.contains("Study Guide"));
        assert!(text.contains("Summarize & Q&A"));
    }

    #[test]
    fn busy_form_shows_progress_label() {
        let mut app = App::new(OutputLanguage::Hindi, SummaryStyle::MediumArticlesAiMl);
        app.begin_submit();
        let text = screen(&app);
        assert!(text.contains("Summarizing..."));
        assert!(text.contains("Hindi"));
        assert!(text.contains("Medium Articles AI/ML"));
    }

    #[test]
    fn results_and_video_id_are_rendered() {
        let mut app = App::new(OutputLanguage::English, SummaryStyle::StudyGuide);
        app.source_url = "https://youtu.be/dQw4w9WgXcQ".into();
        app.begin_submit();
        app.finish_submit(SummaryOutput {
            summary: "Key points".into(),
            answer: "Forty two".into(),
        });
        let text = screen(&app);
        assert!(text.contains("dQw4w9WgXcQ"));
        assert!(text.contains("Key points"));
        assert!(text.contains("Forty two"));
    }

    #[test]
    fn error_summary_is_drawn_in_the_error_style() {
        let mut app = App::new(OutputLanguage::English, SummaryStyle::StudyGuide);
        app.begin_submit();
        app.finish_submit(SummaryOutput {
            summary: format!("{}Status: 500, Data: \"boom\"", ERROR_PREFIX),
            answer: String::new(),
        });

        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|f| render(f, &app, "http://localhost:8000/ingest-youtube", &theme))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let width = buffer.area.width as usize;
        let (row, col) = buffer
            .content
            .chunks(width)
            .enumerate()
            .find_map(|(y, cells)| {
                let line: String = cells.iter().map(|c| c.symbol()).collect();
                line.find("Error fetching summary")
                    .map(|byte| (y, line[..byte].chars().count()))
            })
            .expect("error text is on screen");
        let cell = &buffer.content[row * width + col];
        assert_eq!(cell.fg, theme.error_text.fg.unwrap());
    }

    #[test]
    fn long_url_scrolls_by_display_width() {
        assert_eq!(url_scroll_offset("https://youtu.be/abc", 40), 0);
        // 23 columns of text in a 20-column box leaves 17 visible
        assert_eq!(url_scroll_offset("abcdefghijklmnopqrstuvw", 20), 6);
        // each of these takes two columns
        assert_eq!(url_scroll_offset("日本語日本語日本語日本語", 20), 7);
    }

    #[test]
    fn output_panes_split_remaining_height() {
        assert_eq!(output_pane_size(80, 30), (80, 10));
        assert_eq!(output_pane_size(80, 5), (80, 0));
    }
}
