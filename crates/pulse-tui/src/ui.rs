//! UI rendering for the Aqua Pulse TUI

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Row, Sparkline, Table, Tabs, Wrap},
};

use pulse_theme::{Classify, ColorToken, Trend};

use crate::app::{App, TAB_TITLES};
use crate::data;

/// Main UI rendering function
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);
    draw_main(frame, app, chunks[1]);
    draw_footer(frame, app, chunks[2]);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let tabs = Tabs::new(TAB_TITLES.to_vec())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" 💧 AQUA PULSE ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        )
        .select(app.selected_tab)
        .style(Style::default().fg(dimmed(Color::White, app)))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    frame.render_widget(tabs, area);
}

fn draw_main(frame: &mut Frame, app: &App, area: Rect) {
    match app.selected_tab {
        0 => draw_overview(frame, app, area),
        1 => draw_stations(frame, app, area),
        2 => draw_alerts(frame, app, area),
        3 => draw_analysis(frame, app, area),
        4 => draw_conserve(frame, app, area),
        5 => draw_profile(frame, app, area),
        _ => {}
    }
}

fn draw_overview(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(chunks[0]);

    draw_tank(frame, app, left_chunks[0]);
    draw_stat_cards(frame, app, left_chunks[1]);
    draw_activity(frame, app, chunks[1]);
}

fn draw_tank(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let ratio = app.ornaments.tank_ratio().clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Groundwater Level ")
                .title_style(Style::default().fg(Color::Cyan)),
        )
        .gauge_style(Style::default().fg(token_color(ColorToken::Current)))
        .ratio(ratio)
        .label(format!(
            "{:.0}% (target {:.0}%)",
            ratio * 100.0,
            app.ornaments.tank_target_pct()
        ));
    frame.render_widget(gauge, chunks[0]);

    // The wave line drifts with the ping-pong channel.
    let shift = app.ornaments.wave_shift();
    let pad = usize::try_from((shift + 20.0).round() as i64).unwrap_or(0);
    let wave = format!("{}≈≈≈≈≈≈≈≈≈≈", " ".repeat(pad));
    let wave_line = Paragraph::new(Line::from(Span::styled(
        wave,
        Style::default().fg(token_color(ColorToken::Current)),
    )));
    frame.render_widget(wave_line, chunks[1]);
}

fn draw_stat_cards(frame: &mut Frame, app: &App, area: Rect) {
    let r = &app.readings;
    let lines = vec![
        stat_line("Depth", format!("{:.1} m", r.depth_m), None),
        stat_line(
            "Available",
            format!("{:.1} ML", r.available_ml),
            Some(r.available_change_pct),
        ),
        stat_line(
            "Recharge",
            format!("{:.0} L/min", r.recharge_lpm),
            Some(r.recharge_change_pct),
        ),
        stat_line(
            "Quality",
            format!("{:.1} / 10", r.quality_index),
            Some(r.quality_change),
        ),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Key Readings ")
            .title_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(paragraph, area);
}

fn stat_line(label: &str, value: String, change: Option<f64>) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!("  {label:10} "), Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{value:14}"), Style::default().fg(Color::White)),
    ];

    if let Some(pct) = change {
        let trend = if pct >= 0.0 { Trend::Up } else { Trend::Down };
        let c = trend.classify();
        spans.push(Span::styled(
            format!("{} {pct:+.1}%", c.icon.glyph()),
            Style::default().fg(token_color(c.color)),
        ));
    }

    Line::from(spans)
}

fn draw_activity(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .activity
        .iter()
        .skip(app.activity_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|item| {
            let time = chrono::DateTime::from_timestamp_millis(item.timestamp)
                .map(|dt| dt.format("%H:%M:%S").to_string())
                .unwrap_or_else(|| "??:??:??".to_string());

            let c = item.kind.classify();
            ListItem::new(Line::from(vec![
                Span::styled(format!("{time} "), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("{} ", c.icon.glyph()),
                    Style::default().fg(token_color(c.color)),
                ),
                Span::styled(item.message.clone(), Style::default().fg(dimmed(Color::White, app))),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Recent Activity ")
            .title_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(list, area);
}

fn draw_stations(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = if app.selected_station.is_empty() {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(100)])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area)
    };

    let header = Row::new(vec!["", "Station", "Level", "Status", "Coordinates"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    // The cursored marker swells with the pulse channel.
    let marker = if app.ornaments.marker_scale() > 1.15 { "◉" } else { "○" };

    let rows: Vec<Row> = app
        .stations
        .iter()
        .enumerate()
        .map(|(i, station)| {
            let c = station.health.classify();
            let pin = if i == app.station_cursor { marker } else { " " };
            Row::new(vec![
                pin.to_string(),
                station.name.clone(),
                format!("{:.1} m", station.level_m),
                format!("{} {}", c.icon.glyph(), station.health),
                format!("{:.4}, {:.4}", station.latitude, station.longitude),
            ])
            .style(Style::default().fg(token_color(c.color)))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Length(16),
            Constraint::Length(8),
            Constraint::Length(14),
            Constraint::Length(20),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" 📍 DWLR Network {} ", sweep_frame(app.ornaments.sweep_angle())))
            .title_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(table, chunks[0]);

    let selected = app
        .selected_station
        .get()
        .and_then(|id| app.stations.iter().find(|s| s.id == *id));
    if let Some(station) = selected {
        let c = station.health.classify();
        let rings = ripple_rings(app.ornaments.ripple_scale(), app.ornaments.ripple_alpha());
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {rings}"),
                Style::default().fg(token_color(c.color)),
            )),
            Line::from(""),
            Line::from(format!("  Level:     {:.1} m", station.level_m)),
            Line::from(vec![
                Span::raw("  Status:    "),
                Span::styled(
                    format!("{} {}", c.icon.glyph(), station.health),
                    Style::default().fg(token_color(c.color)),
                ),
            ]),
            Line::from(format!("  Latitude:  {:.4}", station.latitude)),
            Line::from(format!("  Longitude: {:.4}", station.longitude)),
            Line::from(""),
            Line::from(Span::styled(
                "  [Esc] close",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let detail = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", station.name))
                .title_style(Style::default().fg(token_color(c.color))),
        );
        frame.render_widget(detail, chunks[1]);
    }
}

fn draw_alerts(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let items: Vec<ListItem> = app
        .alerts
        .iter()
        .enumerate()
        .map(|(i, alert)| {
            let c = alert.severity.classify();
            let mut style = Style::default().fg(token_color(c.color));
            if !alert.outcome.is_open() {
                style = Style::default().fg(Color::DarkGray);
            }
            if i == app.alert_cursor {
                style = style.add_modifier(Modifier::BOLD);
            }
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", c.icon.glyph()), style),
                Span::styled(alert.title.clone(), style),
                Span::styled(
                    format!("  [{}]", alert.outcome),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let droplet = droplet_glyph(app.ornaments.droplet_alpha());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" 🔔 Alerts {droplet} "))
            .title_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(list, chunks[0]);

    let selected = app
        .selected_alert
        .get()
        .and_then(|id| app.alerts.iter().find(|a| a.id == *id));
    if let Some(alert) = selected {
        let c = alert.severity.classify();

        // Mid-flip the card shows its edge, not its face.
        let lines = if app.ornaments.flip_angle() > 45.0 {
            vec![Line::from(""), Line::from("       ▕▏")]
        } else {
            let time = chrono::DateTime::from_timestamp_millis(alert.timestamp)
                .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "unknown".to_string());
            vec![
                Line::from(""),
                Line::from(vec![
                    Span::raw("  Severity: "),
                    Span::styled(
                        format!("{} {}", c.icon.glyph(), alert.severity),
                        Style::default().fg(token_color(c.color)),
                    ),
                ]),
                Line::from(format!("  Location: {}", alert.location)),
                Line::from(format!("  Raised:   {time}")),
                Line::from(format!("  Outcome:  {}", alert.outcome)),
                Line::from(""),
                Line::from(format!("  {}", alert.message)),
                Line::from(""),
                Line::from(Span::styled(
                    "  [r] resolve  [d] dismiss  [Esc] close",
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        };

        let detail = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", alert.title))
                .title_style(Style::default().fg(token_color(c.color))),
        );
        frame.render_widget(detail, chunks[1]);
    }
}

fn draw_analysis(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(5),
        ])
        .split(area);

    // Period selector
    let mut spans = vec![Span::raw("  ")];
    for period in pulse_theme::Period::ALL {
        let style = if period == app.period {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("[{period}] "), style));
    }
    let selector = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Usage Trends ([p] cycle period) ")
            .title_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(selector, chunks[0]);

    let (current, previous) = data::trend_series(app.period);
    let chart_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    // Bars grow in with the one-shot reveal channel.
    let progress = app.ornaments.chart_progress();
    let scale = app.ornaments.chart_scale();
    draw_trend_chart(frame, " Current Period ", current, progress, scale, Color::Cyan, chart_chunks[0]);
    draw_trend_chart(frame, " Previous Period ", previous, progress, scale, Color::DarkGray, chart_chunks[1]);

    // Forecast card pulses gently while rainfall is expected.
    let forecast_style = if app.ornaments.forecast_scale() > 1.05 {
        Style::default().fg(token_color(ColorToken::Current)).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(token_color(ColorToken::Current))
    };
    let forecast = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "  🌧 Forecast: above-average recharge expected over the next 2 weeks",
            forecast_style,
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Forecast ")
            .title_style(Style::default().fg(Color::Blue)),
    );
    frame.render_widget(forecast, chunks[2]);
}

fn draw_trend_chart(
    frame: &mut Frame,
    title: &str,
    series: &[u64],
    progress: f64,
    scale: f64,
    color: Color,
    area: Rect,
) {
    let reveal = ((series.len() as f64) * progress).ceil() as usize;
    let shown: Vec<u64> = series[..reveal.min(series.len())]
        .iter()
        .map(|&v| (v as f64 * scale) as u64)
        .collect();

    let sparkline = Sparkline::default()
        .data(shown.iter().copied())
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title_style(Style::default().fg(color)),
        );
    frame.render_widget(sparkline, area);
}

fn draw_conserve(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let items: Vec<ListItem> = app
        .tips
        .iter()
        .enumerate()
        .map(|(i, tip)| {
            let c = tip.impact.classify();
            let mut style = Style::default().fg(dimmed(Color::White, app));
            if i == app.tip_cursor {
                style = style.add_modifier(Modifier::BOLD);
            }
            let expanded = app.selected_tip.is_selected(&tip.id);
            let mut lines = vec![Line::from(vec![
                Span::styled(format!(" {} ", tip.icon), style),
                Span::styled(tip.title.clone(), style),
                Span::styled(
                    format!("  {} {}", c.icon.glyph(), tip.impact),
                    Style::default().fg(token_color(c.color)),
                ),
            ])];
            if expanded {
                lines.push(Line::from(Span::styled(
                    format!("   {}", tip.description),
                    Style::default().fg(Color::DarkGray),
                )));
                lines.push(Line::from(Span::styled(
                    format!("   Saves: {}", tip.savings),
                    Style::default().fg(token_color(ColorToken::Flourish)),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" 💡 Conservation Tips ")
            .title_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(list, chunks[0]);

    draw_achievements(frame, app, chunks[1]);
}

fn draw_achievements(frame: &mut Frame, app: &App, area: Rect) {
    let mut constraints = vec![Constraint::Length(3)];
    constraints.extend(std::iter::repeat_n(Constraint::Length(3), app.achievements.len()));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    // Sparkle drifts upward as its alpha fades.
    let sparkle = if app.ornaments.particle_alpha() > 0.5 { "✦" } else { "·" };
    let points = Paragraph::new(Line::from(Span::styled(
        format!("  {} {} points", sparkle, app.user_points),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" 🏆 Achievements ")
            .title_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(points, chunks[0]);

    for (i, achievement) in app.achievements.iter().enumerate() {
        let c = achievement.tier.classify();
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} {} ", c.icon.glyph(), achievement.tier.title())),
            )
            .gauge_style(Style::default().fg(token_color(c.color)))
            .ratio(f64::from(achievement.progress_pct.min(100)) / 100.0)
            .label(format!("{}%", achievement.progress_pct));
        frame.render_widget(gauge, chunks[i + 1]);
    }
}

fn draw_profile(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Avatar breathes with its pulse channel.
    let breathing = app.ornaments.avatar_scale() > 1.025;
    let role_c = app.role.classify();
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "     ( 👤 )",
            Style::default().add_modifier(if breathing { Modifier::BOLD } else { Modifier::empty() }),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Viewing as ([r] to change):",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    for role in pulse_theme::UserRole::ALL {
        let c = role.classify();
        let style = if role == app.role {
            Style::default().fg(token_color(role_c.color)).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(Span::styled(
            format!("    {} {}", c.icon.glyph(), role),
            style,
        )));
    }

    let identity = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Profile ")
            .title_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(identity, chunks[0]);

    let on = |flag: bool| if flag { "on " } else { "off" };
    let settings = Paragraph::new(vec![
        Line::from(""),
        Line::from(format!("  [m] Dark mode      {}", on(app.dark_mode))),
        Line::from(format!("  [n] Notifications  {}", on(app.notifications))),
        Line::from(""),
        Line::from("  [e] Export data"),
        Line::from("  [s] Share progress"),
        Line::from(""),
        Line::from(Span::styled(
            "  Data: DWLR telemetry (demo feed)",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Settings ")
            .title_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(settings, chunks[1]);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let last_update = app
        .last_update
        .and_then(chrono::DateTime::from_timestamp_millis)
        .map(|dt| dt.format("Last update: %H:%M:%S").to_string())
        .unwrap_or_else(|| "No updates".to_string());

    let help = match app.selected_tab {
        2 => "  [Tab] View  [↑↓] Move  [Enter] Open  [r/d] Resolve/Dismiss  [q] Quit  ",
        3 => "  [Tab] View  [p] Period  [q] Quit  ",
        5 => "  [Tab] View  [r] Role  [m/n] Toggles  [e/s] Export/Share  [q] Quit  ",
        _ => "  [Tab] View  [↑↓] Move  [Enter] Select  [1-6] Jump  [q] Quit  ",
    };

    let footer = Paragraph::new(Line::from(vec![
        Span::raw("  "),
        Span::styled(last_update, Style::default().fg(Color::DarkGray)),
        Span::raw("  │  "),
        Span::styled(help, Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

/// Maps a theme token to a terminal color.
fn token_color(token: ColorToken) -> Color {
    let (r, g, b) = token.rgb();
    Color::Rgb(r, g, b)
}

/// Applies the dark-mode fade to a base color.
fn dimmed(color: Color, app: &App) -> Color {
    if app.dark_mode && color == Color::White {
        let v = (255.0 * app.ornaments.mode_dim()) as u8;
        return Color::Rgb(v, v, v);
    }
    color
}

/// Picks a spinner frame from the slow sweep angle.
fn sweep_frame(angle: f64) -> &'static str {
    const FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];
    let idx = ((angle / 90.0) as usize) % FRAMES.len();
    FRAMES[idx]
}

/// Renders expanding ripple rings around a selected station marker.
fn ripple_rings(scale: f64, alpha: f64) -> String {
    let rings = (scale as usize).clamp(1, 3);
    let ring = if alpha > 0.4 { "◎" } else { "○" };
    format!("{}📍", ring.repeat(rings))
}

/// Fades the droplet ornament out as it falls.
fn droplet_glyph(alpha: f64) -> &'static str {
    if alpha > 0.5 { "💧" } else { "·" }
}
