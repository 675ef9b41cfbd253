/*
[INPUT]:  FormApp state and log buffer snapshot
[OUTPUT]: Form, result, log and hotkey panels rendered into a Ratatui frame
[POS]:    TUI rendering
[UPDATE]: When changing layout, palette, or panel contents
*/

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use binance_futures_adapter::Network;
use binance_futures_bot::logging::lock_buffer;

use super::app::{FieldId, FormApp, ResultView};

pub(super) fn draw(frame: &mut ratatui::Frame, app: &FormApp) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(12), Constraint::Length(4)])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(layout[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[1]);

    draw_form(frame, columns[0], app);
    draw_result(frame, right[0], app);
    draw_logs(frame, right[1], app);
    draw_footer(frame, layout[1], app);
}

fn border_style() -> Style {
    Style::default().fg(Color::Magenta)
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(title)
}

fn draw_form(frame: &mut ratatui::Frame, area: Rect, app: &FormApp) {
    let focused = app.focused();
    let lines: Vec<Line> = app
        .visible_fields()
        .into_iter()
        .map(|field| {
            let highlight = if field == focused {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            if field == FieldId::PlaceOrder {
                return place_order_line(app, highlight);
            }
            Line::from(vec![
                Span::styled(
                    format!("{:<12}", field.label()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(field_value(app, field), highlight),
            ])
        })
        .collect();

    let title = match app.network {
        Network::Testnet => "Order (testnet)",
        Network::Mainnet => "Order (MAINNET)",
    };
    frame.render_widget(Paragraph::new(lines).block(panel(title)), area);
}

fn field_value(app: &FormApp, field: FieldId) -> String {
    match field {
        FieldId::ApiKey | FieldId::ApiSecret => mask(app.text(field)),
        FieldId::Network => checkbox(app.network.is_testnet()),
        FieldId::Side => format!("< {} >", app.order.side),
        FieldId::Kind => format!("< {} >", app.order.kind),
        _ => app.text(field).to_string(),
    }
}

fn mask(value: &str) -> String {
    "*".repeat(value.chars().count())
}

fn checkbox(checked: bool) -> String {
    let mark = if checked { "x" } else { " " };
    format!("[{mark}]")
}

fn place_order_line(app: &FormApp, highlight: Style) -> Line<'static> {
    let missing = app.missing_fields();
    if missing.is_empty() {
        return Line::from(Span::styled(
            "[ Place Order ]",
            highlight.fg(Color::LightGreen).add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(vec![
        Span::styled("[ Place Order ]", highlight.fg(Color::DarkGray)),
        Span::styled(
            format!(" missing: {}", missing.join(", ")),
            Style::default().fg(Color::Yellow),
        ),
    ])
}

fn draw_result(frame: &mut ratatui::Frame, area: Rect, app: &FormApp) {
    let text = match &app.result {
        None => Text::from(Span::styled(
            "No order placed yet",
            Style::default().fg(Color::DarkGray),
        )),
        Some(ResultView::Success { summary, body }) => {
            let mut lines = vec![Line::from(Span::styled(
                summary.clone(),
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ))];
            lines.extend(body.lines().map(|line| Line::from(line.to_string())));
            Text::from(lines)
        }
        Some(ResultView::Error(message)) => Text::from(Span::styled(
            message.clone(),
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )),
    };
    let widget = Paragraph::new(text)
        .block(panel("Result"))
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}

fn draw_logs(frame: &mut ratatui::Frame, area: Rect, app: &FormApp) {
    let lines = lock_buffer(&app.log_buffer).snapshot();
    let available = area.height.saturating_sub(2) as usize;
    let start = lines.len().saturating_sub(available);

    let text: Vec<Line> = lines[start..]
        .iter()
        .map(|line| Line::from(Span::raw(line.clone())))
        .collect();
    frame.render_widget(Paragraph::new(text).block(panel("Logs")), area);
}

fn draw_footer(frame: &mut ratatui::Frame, area: Rect, app: &FormApp) {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let hotkeys = Line::from(vec![
        Span::styled("[Tab/Up/Down]", key_style),
        Span::raw(" Move  "),
        Span::styled("[Left/Right/Space]", key_style),
        Span::raw(" Change  "),
        Span::styled("[Enter]", key_style),
        Span::raw(" Next/Place  "),
        Span::styled("[Esc]", key_style),
        Span::raw(" Quit"),
    ]);
    let status = Line::from(format!("Status: {}", app.status));

    let widget = Paragraph::new(Text::from(vec![hotkeys, status]))
        .block(panel("Hotkeys"))
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}
