use crate::app::{App, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use torus_life::patterns::{self, PatternId};

const SIDEBAR_WIDTH: u16 = 28;

/// Max scroll for help content (generous to account for text wrapping on small screens)
pub const HELP_CONTENT_LINES: u16 = 40;

// UI color scheme
const BORDER_COLOR: Color = Color::Cyan;
const HIGHLIGHT_COLOR: Color = Color::Yellow;
const TEXT_COLOR: Color = Color::White;
const DIM_TEXT_COLOR: Color = Color::Gray;
const LIVE_COLOR: Color = Color::Green;
const DEAD_COLOR: Color = Color::DarkGray;

/// Each cell is drawn two columns wide so the board looks square
const LIVE_CELL: &str = "██";
const DEAD_CELL: &str = "· ";

/// Creates a standard styled block with rounded borders
fn styled_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_COLOR))
        .title(title)
}

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(area);

    render_sidebar(frame, layout[0], app);
    render_board(frame, layout[1], app);

    if app.show_help {
        render_help_overlay(frame, area, app);
    }
}

fn render_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Status
            Constraint::Length(6), // Parameters
            Constraint::Min(8),    // Controls
        ])
        .split(area);

    render_status_box(frame, sections[0], app);
    render_params_box(frame, sections[1], app);
    render_controls_box(frame, sections[2]);
}

fn render_status_box(frame: &mut Frame, area: Rect, app: &App) {
    let block = styled_block(" Game of Life ");
    let stats = app.simulation.stats();

    let (status_text, status_color) = if stats.auto_ticking {
        ("RUNNING", LIVE_COLOR)
    } else if stats.live_cell_count == 0 {
        ("EMPTY", DIM_TEXT_COLOR)
    } else {
        ("PAUSED", HIGHLIGHT_COLOR)
    };

    let mut content = vec![
        Line::from(Span::styled(
            format!("Generation: {}", stats.generation_count),
            Style::default().fg(TEXT_COLOR),
        )),
        Line::from(Span::styled(
            format!("Live cells: {}", stats.live_cell_count),
            Style::default().fg(TEXT_COLOR),
        )),
        Line::from(Span::styled(
            format!("Interval: {} ms", stats.tick_interval_ms),
            Style::default().fg(DIM_TEXT_COLOR),
        )),
        Line::from(Span::styled(status_text, Style::default().fg(status_color))),
    ];

    if let Some(message) = &app.message {
        content.push(Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(content).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_params_box(frame: &mut Frame, area: Rect, app: &App) {
    let block = styled_block(" Parameters ");
    let sim = &app.simulation;

    let make_line = |label: &str, value: String, focused: bool| {
        let prefix = if focused { "> " } else { "  " };
        let style = if focused {
            Style::default().fg(HIGHLIGHT_COLOR)
        } else {
            Style::default().fg(TEXT_COLOR)
        };
        Line::from(Span::styled(format!("{}{}: {}", prefix, label, value), style))
    };

    let content = vec![
        make_line(
            "Size",
            format!(
                "{} ({}-{})",
                sim.grid_size(),
                sim.min_grid_size(),
                sim.max_grid_size()
            ),
            app.focus == Focus::GridSize,
        ),
        make_line(
            "Pattern",
            sim.selected_pattern().label().to_string(),
            app.focus == Focus::Pattern,
        ),
        make_line(
            "Speed",
            format!("{}", sim.tick_speed()),
            app.focus == Focus::Speed,
        ),
        make_line(
            "Random",
            if sim.random_life_active() { "on" } else { "off" }.to_string(),
            app.focus == Focus::RandomLife,
        ),
    ];

    let paragraph = Paragraph::new(content).block(block);
    frame.render_widget(paragraph, area);
}

fn render_controls_box(frame: &mut Frame, area: Rect) {
    let key_style = Style::default().fg(HIGHLIGHT_COLOR);
    let desc_style = Style::default().fg(DIM_TEXT_COLOR);

    let make_control = |key: &str, desc: &str| -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{:>5}", key), key_style),
            Span::styled(format!(" {}", desc), desc_style),
        ])
    };

    let content = vec![
        make_control("Space", "start/stop"),
        make_control("N", "step"),
        make_control("Enter", "toggle cell"),
        make_control("R/E", "reset/empty"),
        make_control("1-8", "load pattern"),
        make_control("[/]", "grid size"),
        make_control("+/-", "speed"),
        make_control("L", "random life"),
        make_control("X", "randomize"),
        make_control("Tab", "focus"),
        make_control("H", "help"),
        make_control("Q", "quit"),
    ];

    let paragraph = Paragraph::new(content).block(styled_block(" Controls "));
    frame.render_widget(paragraph, area);
}

fn render_board(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!(
        " {}x{} ",
        app.simulation.grid_size(),
        app.simulation.grid_size()
    );
    let block = styled_block(&title);
    let show_cursor = app.focus == Focus::Board;

    let lines: Vec<Line> = app
        .simulation
        .current_generation()
        .rows()
        .enumerate()
        .map(|(row, cells)| {
            let spans: Vec<Span> = cells
                .iter()
                .enumerate()
                .map(|(col, alive)| {
                    let (text, color) = if *alive {
                        (LIVE_CELL, LIVE_COLOR)
                    } else {
                        (DEAD_CELL, DEAD_COLOR)
                    };
                    let mut style = Style::default().fg(color);
                    if show_cursor && app.cursor == (row, col) {
                        style = style.bg(HIGHLIGHT_COLOR).add_modifier(Modifier::BOLD);
                    }
                    Span::styled(text, style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// "1=Glider, 2=Small Exploder, ..." for every pattern bound to a digit key
pub fn pattern_key_legend() -> String {
    patterns::available()
        .into_iter()
        .enumerate()
        .filter(|(_, (id, _))| *id != PatternId::Empty)
        .map(|(digit, (_, label))| format!("{}={}", digit, label))
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_help_overlay(frame: &mut Frame, area: Rect, app: &App) {
    let board_width = area.width.saturating_sub(SIDEBAR_WIDTH);
    let help_width = 56.min(board_width.saturating_sub(4));
    let help_height = area.height.saturating_sub(4).min(30);
    let x = SIDEBAR_WIDTH + (board_width.saturating_sub(help_width)) / 2;
    let y = (area.height.saturating_sub(help_height)) / 2;

    let help_area = Rect {
        x: area.x + x,
        y: area.y + y,
        width: help_width,
        height: help_height,
    };

    frame.render_widget(Clear, help_area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled("CONWAY'S GAME OF LIFE", Style::default().fg(BORDER_COLOR))),
        Line::from(""),
        Line::from("A live cell with 2 or 3 live neighbors survives. A dead cell with exactly 3 comes alive. The board wraps at every edge."),
        Line::from(""),
        Line::from(Span::styled("PATTERNS (1-8):", Style::default().fg(HIGHLIGHT_COLOR))),
        Line::from(pattern_key_legend()),
        Line::from("P cycles the selected pattern, R loads it, E clears the board."),
        Line::from(""),
        Line::from(Span::styled("AUTO-TICK:", Style::default().fg(HIGHLIGHT_COLOR))),
        Line::from("Space starts or stops the timer. It stops by itself once the board is empty. +/- change speed while running."),
        Line::from(""),
        Line::from(Span::styled("RANDOM LIFE:", Style::default().fg(HIGHLIGHT_COLOR))),
        Line::from("L adds one random live cell after every tick."),
        Line::from(""),
        Line::from(Span::styled("EDITING:", Style::default().fg(HIGHLIGHT_COLOR))),
        Line::from("Arrows move the cursor, Enter toggles a cell. [ and ] shrink and grow the board from the bottom-right."),
        Line::from(""),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(HIGHLIGHT_COLOR))
        .title(" Help (J/K scroll, H to close) ");

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: true })
        .scroll((app.help_scroll, 0));

    frame.render_widget(paragraph, help_area);
}
