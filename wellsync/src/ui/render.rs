//! Render orchestration for the WellSync TUI

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};
use wellsync_core::{MoodCategory, QUIZ_QUESTIONS};

use crate::app::{App, InputMode, Page};
use crate::ui::layout::{centered_rect_fixed, split_content, AppLayout};
use crate::ui::widgets::{
    ChatWidget, HotkeyBarWidget, InputWidget, NavbarWidget, StatusBarWidget,
};

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = AppLayout::calculate(area);

    render_title_bar(frame, app, layout.title_area);
    frame.render_widget(NavbarWidget::new(app.page, &app.theme), layout.navbar_area);

    let content = layout.content_area;
    match app.page {
        Page::Home => render_home(frame, app, content),
        Page::Chat => frame.render_widget(
            ChatWidget::new(app.companion.messages(), &app.theme)
                .typing(app.companion_typing(), app.animation_frame),
            content,
        ),
        Page::Analyzer => render_analyzer(frame, app, content),
        Page::Quiz => render_quiz(frame, app, content),
        Page::Scheduler => render_scheduler(frame, app, content),
        Page::Reflection => render_reflection(frame, app, content),
        Page::Insights => render_insights(frame, app, content),
    }

    frame.render_widget(
        StatusBarWidget::new(app.input_mode, &app.theme)
            .message(app.status_message())
            .error(app.error()),
        layout.status_bar,
    );
    frame.render_widget(
        HotkeyBarWidget::new(app.page, app.input_mode),
        layout.hotkey_bar,
    );
    render_input(frame, app, layout.input_area);

    if app.show_help {
        render_help_overlay(frame, app, area);
    }
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(" WellSync ", app.theme.heading_style())];
    if let Some(analysis) = app.session.log().latest_analysis() {
        spans.push(Span::raw("| today: "));
        spans.push(Span::styled(
            analysis.mood.label(),
            app.theme.mood_style(analysis.mood),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn panel<'a>(title: &'a str, app: &App) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(false))
}

fn heading<'a>(text: &'a str, app: &App) -> Line<'a> {
    Line::from(Span::styled(text, app.theme.heading_style()))
}

fn bullets<'a>(items: &'a [String], style: Style) -> impl Iterator<Item = Line<'a>> {
    items
        .iter()
        .map(move |item| Line::from(Span::styled(format!("  - {item}"), style)))
}

fn score_gauge<'a>(title: &'a str, percent: u32, app: &App) -> Gauge<'a> {
    Gauge::default()
        .block(panel(title, app))
        .gauge_style(Style::default().fg(app.theme.score_color(percent)))
        .percent(percent.min(100) as u16)
}

fn render_home(frame: &mut Frame, app: &App, area: Rect) {
    let log = app.session.log();
    let done = |finished: bool| if finished { "[x]" } else { "[ ]" };

    let lines = vec![
        Line::from(Span::styled(
            "Welcome to WellSync",
            app.theme.heading_style().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(""),
        Line::from("Your daily wellness companion. Check in through the pages above:"),
        Line::from(""),
        Line::from("  Chat        Talk things through with your companion"),
        Line::from("  Analyzer    Describe your day and see your mood"),
        Line::from("  Quiz        Five quick lifestyle questions"),
        Line::from("  Scheduler   A routine built around your mood and score"),
        Line::from("  Reflection  Compare your morning and evening"),
        Line::from("  Insights    Your day at a glance"),
        Line::from(""),
        heading("Today", app),
        Line::from(format!(
            "  {} Mood analysis",
            done(log.latest_analysis().is_some())
        )),
        Line::from(format!("  {} Lifestyle quiz", done(log.latest_quiz().is_some()))),
        Line::from(format!(
            "  {} Evening reflection",
            done(log.latest_reflection().is_some())
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(panel(" Home ", app))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_analyzer(frame: &mut Frame, app: &App, area: Rect) {
    let (main, side) = split_content(area, 60);

    let intro = Paragraph::new(vec![
        heading("How was your day?", app),
        Line::from(""),
        Line::from("Press i and describe how you feel. Mention sleep, work, family or"),
        Line::from("anything else on your mind, then press Enter."),
    ])
    .block(panel(" Mood Analyzer ", app))
    .wrap(Wrap { trim: false });
    frame.render_widget(intro, main);

    let Some(result) = &app.analysis else {
        frame.render_widget(
            Paragraph::new("No entry analyzed yet.")
                .style(app.theme.system_style())
                .block(panel(" Result ", app)),
            side,
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(side);

    let confidence = (result.confidence * 100.0).round() as u32;
    frame.render_widget(
        score_gauge(" Confidence ", confidence, app).label(format!("{confidence}%")),
        chunks[0],
    );

    let mut lines = vec![
        Line::from(Span::styled(result.mood.label(), app.theme.mood_style(result.mood))),
        Line::from(""),
        heading("Key stress factors", app),
    ];
    lines.extend(bullets(&result.stress_factors, app.theme.text_style()));
    lines.push(Line::from(""));
    lines.push(heading("Suggestion", app));
    lines.push(Line::from(result.suggestion.as_str()));

    frame.render_widget(
        Paragraph::new(lines)
            .block(panel(" Result ", app))
            .wrap(Wrap { trim: false }),
        chunks[1],
    );
}

fn render_quiz(frame: &mut Frame, app: &App, area: Rect) {
    let (main, side) = split_content(area, 60);

    let items: Vec<ListItem> = QUIZ_QUESTIONS
        .iter()
        .zip(&app.quiz_answers)
        .enumerate()
        .map(|(i, (question, answer))| {
            let style = if i == app.quiz_index {
                app.theme.selected_style()
            } else {
                app.theme.text_style()
            };
            let answer = if answer.is_empty() {
                Span::styled(question.placeholder, app.theme.system_style())
            } else {
                Span::styled(answer.as_str(), app.theme.user_style())
            };
            ListItem::new(vec![
                Line::from(Span::styled(
                    format!("{}. {}", question.id, question.question),
                    style,
                )),
                Line::from(vec![Span::raw("   "), answer]),
            ])
        })
        .collect();
    frame.render_widget(List::new(items).block(panel(" Lifestyle Quiz ", app)), main);

    let Some(result) = &app.quiz_result else {
        frame.render_widget(
            Paragraph::new("Answer all five questions to see your wellness score.")
                .style(app.theme.system_style())
                .wrap(Wrap { trim: false })
                .block(panel(" Score ", app)),
            side,
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(side);
    frame.render_widget(
        score_gauge(" Wellness Score ", result.wellness_score, app)
            .label(format!("{}/100", result.wellness_score)),
        chunks[0],
    );

    let mut lines = vec![heading("Recommendations", app)];
    if result.recommendations.is_empty() {
        lines.push(Line::from("  Keep up your healthy habits!"));
    }
    lines.extend(bullets(&result.recommendations, app.theme.text_style()));
    frame.render_widget(
        Paragraph::new(lines)
            .block(panel(" Recommendations ", app))
            .wrap(Wrap { trim: false }),
        chunks[1],
    );
}

fn render_scheduler(frame: &mut Frame, app: &App, area: Rect) {
    let Some(schedule) = &app.schedule else {
        frame.render_widget(
            Paragraph::new("Analyze an entry and take the quiz, then press r.")
                .style(app.theme.system_style())
                .block(panel(" Daily Schedule ", app)),
            area,
        );
        return;
    };

    let (main, side) = split_content(area, 65);

    let items: Vec<ListItem> = schedule
        .routine
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let mark = if app.progress.is_completed(i) { "[x]" } else { "[ ]" };
            let mut style = if app.progress.is_completed(i) {
                app.theme.system_style()
            } else {
                app.theme.text_style()
            };
            if i == app.schedule_cursor {
                style = app.theme.selected_style();
            }
            ListItem::new(Line::from(Span::styled(format!("{mark} {item}"), style)))
        })
        .collect();
    frame.render_widget(List::new(items).block(panel(" Daily Schedule ", app)), main);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(side);
    let percent = app.progress.completion_percentage();
    frame.render_widget(
        score_gauge(" Progress ", percent, app).label(format!(
            "{}/{} done",
            app.progress.completed_count(),
            app.progress.total()
        )),
        chunks[0],
    );

    let lines = vec![
        Line::from(schedule.message.as_str()),
        Line::from(""),
        Line::from(vec![
            Span::raw("Focus: "),
            Span::styled(
                schedule.mood_focus.label(),
                app.theme.mood_style(schedule.mood_focus),
            ),
        ]),
        Line::from(format!("Wellness score: {}", schedule.wellness_score)),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .block(panel(" Today ", app))
            .wrap(Wrap { trim: false }),
        chunks[1],
    );
}

fn render_reflection(frame: &mut Frame, app: &App, area: Rect) {
    let (main, side) = split_content(area, 40);

    let items: Vec<ListItem> = MoodCategory::ALL
        .iter()
        .enumerate()
        .map(|(i, mood)| {
            let chosen = if app.morning_mood == Some(*mood) { "*" } else { " " };
            let style = if i == app.mood_cursor {
                app.theme.selected_style()
            } else {
                app.theme.mood_style(*mood)
            };
            ListItem::new(Line::from(Span::styled(
                format!("{chosen} {}", mood.label()),
                style,
            )))
        })
        .collect();
    frame.render_widget(
        List::new(items).block(panel(" This morning I felt ", app)),
        main,
    );

    let Some(result) = &app.reflection else {
        frame.render_widget(
            Paragraph::new("Pick your morning mood, then press i and describe your evening.")
                .style(app.theme.system_style())
                .wrap(Wrap { trim: false })
                .block(panel(" Reflection ", app)),
            side,
        );
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(result.morning_mood.label(), app.theme.mood_style(result.morning_mood)),
            Span::raw("  ->  "),
            Span::styled(result.evening_mood.label(), app.theme.mood_style(result.evening_mood)),
        ]),
        Line::from(vec![
            Span::raw("Trend: "),
            Span::styled(
                format!("{} ({:+})", result.trend, result.mood_change),
                app.theme.trend_style(result.trend),
            ),
        ]),
        Line::from(""),
        heading("Insights", app),
    ];
    lines.extend(bullets(&result.insights, app.theme.text_style()));
    lines.push(Line::from(""));
    lines.push(heading("Suggestion", app));
    lines.push(Line::from(result.suggestion.as_str()));

    frame.render_widget(
        Paragraph::new(lines)
            .block(panel(" Reflection ", app))
            .wrap(Wrap { trim: false }),
        side,
    );
}

fn render_insights(frame: &mut Frame, app: &App, area: Rect) {
    let Some(report) = &app.insights else {
        frame.render_widget(
            Paragraph::new("Complete the analyzer, quiz and reflection, then press r.")
                .style(app.theme.system_style())
                .block(panel(" Insights ", app)),
            area,
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6)])
        .split(area);
    frame.render_widget(
        score_gauge(" Wellness Score ", report.wellness_score, app)
            .label(format!("{}/100", report.wellness_score)),
        chunks[0],
    );

    let mut lines = vec![
        Line::from(vec![
            Span::raw(report.message.as_str()),
            Span::raw("  "),
            Span::styled(report.mood_trend.as_str(), app.theme.trend_style(report.mood_trend)),
        ]),
        Line::from(""),
        heading("Before / after", app),
    ];
    for point in &report.trend_data {
        lines.push(Line::from(format!(
            "  {:<6} {:>3} -> {:>3}  {}",
            point.metric,
            point.before,
            point.after,
            "#".repeat((point.after / 5).min(20) as usize)
        )));
    }
    lines.push(Line::from(""));
    lines.push(heading("Recommendations", app));
    lines.extend(bullets(&report.recommendations, app.theme.text_style()));

    frame.render_widget(
        Paragraph::new(lines)
            .block(panel(" Insights ", app))
            .wrap(Wrap { trim: false }),
        chunks[1],
    );
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let is_command = matches!(app.input_mode, InputMode::Command);
    let is_active = app.input_mode != InputMode::Normal;

    let (title, placeholder) = match app.page {
        Page::Chat if app.companion_typing() => (" Message ", "Waiting for a reply..."),
        Page::Chat => (" Message ", "Share what's on your mind..."),
        Page::Analyzer => (" Diary entry ", "Today I felt..."),
        Page::Quiz => (
            " Answer ",
            QUIZ_QUESTIONS[app.quiz_index.min(QUIZ_QUESTIONS.len() - 1)].placeholder,
        ),
        Page::Reflection => (" Evening entry ", "How did your day go?"),
        _ => ("", "Press : for commands, ? for help"),
    };

    let input_widget = InputWidget::new(app.input_buffer(), &app.theme)
        .cursor_position(app.cursor_position())
        .title(if is_command { " Command " } else { title })
        .active(is_active)
        .command_mode(is_command)
        .placeholder(placeholder);

    frame.render_widget(input_widget, area);
}

fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect_fixed(56, 22, area);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let underline = Style::default().add_modifier(Modifier::UNDERLINED);
    let help_text = vec![
        Line::from(Span::styled(
            " WellSync - Help ",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Input Modes:", underline)),
        Line::from("  i/a     Type on Chat, Analyzer, Quiz, Reflection"),
        Line::from("  :       Enter COMMAND mode"),
        Line::from("  Esc     Return to NORMAL mode"),
        Line::from(""),
        Line::from(Span::styled("Navigation (NORMAL mode):", underline)),
        Line::from("  1-7            Jump to a page"),
        Line::from("  Tab/l, S-Tab/h Next/previous page"),
        Line::from("  j/k or Up/Down Move selection"),
        Line::from("  Space/Enter    Tick routine item, pick mood"),
        Line::from("  r              Refresh schedule or insights"),
        Line::from("  q              Quit"),
        Line::from(""),
        Line::from(Span::styled("Commands:", underline)),
        Line::from("  :q          Quit"),
        Line::from("  :<page>     Open a page (e.g. :quiz)"),
        Line::from("  :submit     Submit the quiz"),
        Line::from("  :clear      Clear the analyzer"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or q to close",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true));

    frame.render_widget(
        Paragraph::new(help_text)
            .block(block)
            .wrap(Wrap { trim: false }),
        popup_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use tokio::sync::mpsc;

    fn draw_page(page: Page) -> String {
        let (request_tx, _request_rx) = mpsc::channel(4);
        let (_response_tx, response_rx) = mpsc::channel(4);
        let mut app = App::new(request_tx, response_rx);
        app.analyze("so stressed about my job").unwrap();
        app.quiz_answers = ["7", "2", "no", "6", "9"].map(String::from).to_vec();
        app.submit_quiz().unwrap();
        app.go_to(page);

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_every_page_renders() {
        for page in Page::ALL {
            let screen = draw_page(page);
            assert!(screen.contains("WellSync"), "page {page:?}");
        }
    }

    #[test]
    fn test_analyzer_shows_result() {
        let screen = draw_page(Page::Analyzer);
        assert!(screen.contains("Stressed & Anxious"));
        assert!(screen.contains("Work-related pressure"));
    }

    #[test]
    fn test_scheduler_shows_routine() {
        let screen = draw_page(Page::Scheduler);
        assert!(!screen.contains("take the quiz, then press r"));
        assert!(screen.contains("[ ]"));
        assert!(screen.contains("Daily Schedule"));
    }
}
