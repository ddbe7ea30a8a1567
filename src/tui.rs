//! TUI (Terminal User Interface) module for Hangman Arcade
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! The UI follows these state transitions:
//! - `Menu` → `Playing` → `RoundOver` → back to `Menu`
//! - ESC in `Menu` ends the session, ESC in `Playing` ends the round

use crate::game_state::{GameInterface, GameKind, MenuAction, RoundSummary, TurnAction};
use crate::hangman::{GameSnapshot, GuessOutcome, HintOutcome, PLACEHOLDER, RoundStatus};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const HINT_KEY: char = '?';
const QUIT_KEY: char = 'q';

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const SELECTED_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

const GALLOWS: [[&str; 5]; 7] = [
    ["  +---+", "      |", "      |", "      |", "========="],
    ["  +---+", "  O   |", "      |", "      |", "========="],
    ["  +---+", "  O   |", "  |   |", "      |", "========="],
    ["  +---+", "  O   |", " /|   |", "      |", "========="],
    ["  +---+", "  O   |", " /|\\  |", "      |", "========="],
    ["  +---+", "  O   |", " /|\\  |", " /    |", "========="],
    ["  +---+", "  O   |", " /|\\  |", " / \\  |", "========="],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    Menu { selected: usize },
    Playing,
    /// Round finished - summary stored in interface.summary
    RoundOver,
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    state: TuiState,
    games: &'a [GameKind],
    snapshot: Option<&'a GameSnapshot>,
    summary: Option<&'a RoundSummary>,
    live_score: u32,
    total_score: u32,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Letters that were guessed but do not appear in the pattern.
fn misses(snapshot: &GameSnapshot) -> usize {
    snapshot
        .guessed_letters
        .iter()
        .filter(|letter| !snapshot.pattern.contains(**letter))
        .count()
}

fn gallows_stage(snapshot: &GameSnapshot) -> usize {
    misses(snapshot).min(GALLOWS.len() - 1)
}

fn spaced_pattern(pattern: &str) -> String {
    pattern
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

fn has_modifier_keys(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Result of a key press in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuKey {
    Act(MenuAction),
    /// Highlight moved (or stayed) on this row.
    Move(usize),
}

fn menu_key_for_event(key: &KeyEvent, selected: usize, games: &[GameKind]) -> MenuKey {
    match key.code {
        KeyCode::Esc | KeyCode::Char(QUIT_KEY) => MenuKey::Act(MenuAction::Quit),
        KeyCode::Enter => games
            .get(selected)
            .map_or(MenuKey::Move(selected), |kind| MenuKey::Act(MenuAction::Play(*kind))),
        KeyCode::Up => MenuKey::Move(selected.saturating_sub(1)),
        KeyCode::Down => MenuKey::Move((selected + 1).min(games.len().saturating_sub(1))),
        KeyCode::Char(c) if c.is_ascii_digit() => c
            .to_string()
            .parse::<GameKind>()
            .map_or(MenuKey::Move(selected), |kind| MenuKey::Act(MenuAction::Play(kind))),
        _ => MenuKey::Move(selected),
    }
}

fn turn_action_for_key(key: &KeyEvent) -> Option<TurnAction> {
    if has_modifier_keys(key) {
        return None;
    }
    match key.code {
        KeyCode::Esc => Some(TurnAction::Quit),
        KeyCode::Char(HINT_KEY) => Some(TurnAction::Hint),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(TurnAction::Guess(c.to_ascii_uppercase())),
        _ => None,
    }
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    state: TuiState,
    games: Vec<GameKind>,
    snapshot: Option<GameSnapshot>,
    summary: Option<RoundSummary>,
    live_score: u32,
    total_score: u32,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            state: TuiState::Menu { selected: 0 },
            games: GameKind::ALL.to_vec(),
            snapshot: None,
            summary: None,
            live_score: 0,
            total_score: 0,
            message: "Welcome to the Hangman Arcade!".to_string(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    /// Draw the current UI state to the terminal.
    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            state: self.state,
            games: &self.games,
            snapshot: self.snapshot.as_ref(),
            summary: self.summary.as_ref(),
            live_score: self.live_score,
            total_score: self.total_score,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    /// Render the complete UI layout using the provided context.
    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Length(10), // Board
                Constraint::Min(7),     // Info panel
                Constraint::Length(3),  // Status line
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        match ctx.state {
            TuiState::Menu { selected } => Self::render_menu(f, chunks[1], ctx.games, selected),
            TuiState::Playing | TuiState::RoundOver => Self::render_board(f, chunks[1], ctx),
        }
        Self::render_info(f, chunks[2], ctx);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("HANGMAN ARCADE")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_menu(f: &mut Frame, area: Rect, games: &[GameKind], selected: usize) {
        let mut lines = vec![Line::from(Span::styled(
            "You may choose from the following games:",
            INFO_STYLE,
        ))];
        for (i, game) in games.iter().enumerate() {
            let text = format!("  {}. {}  ", i + 1, game);
            let style = if i == selected {
                SELECTED_STYLE
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(text, style)));
        }

        let paragraph = Paragraph::new(lines).block(Block::default().title("Games").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_board(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = Block::default().title("Word").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let Some(snapshot) = ctx.snapshot else {
            return;
        };

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(12), Constraint::Min(10)])
            .split(inner);

        let gallows: Vec<Line> = GALLOWS[gallows_stage(snapshot)]
            .iter()
            .map(|row| Line::from(*row))
            .collect();
        f.render_widget(Paragraph::new(gallows), columns[0]);

        let word_style = match ctx.summary.map(|s| s.status) {
            Some(RoundStatus::Won) => SUCCESS_STYLE,
            Some(_) => ERROR_STYLE,
            None => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        };
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(spaced_pattern(&snapshot.pattern), word_style)),
        ];
        if let Some(summary) = ctx.summary
            && snapshot.pattern.contains(PLACEHOLDER)
        {
            lines.push(Line::from(""));
            lines.push(Line::from(format!("The word was {}", summary.secret_word)));
        }
        f.render_widget(Paragraph::new(lines), columns[1]);
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        if let Some(snapshot) = ctx.snapshot
            && !matches!(ctx.state, TuiState::Menu { .. })
        {
            let letters: Vec<String> = snapshot.guessed_letters.iter().map(char::to_string).collect();
            lines.push(Line::from(vec![
                Span::styled("Guessed letters: ", INFO_STYLE),
                Span::raw(letters.join(" ")),
            ]));
            lines.push(Line::from(format!(
                "Remaining guesses: {}   Hints: {}   Score: {}",
                snapshot.remaining_guesses, snapshot.hints_remaining, ctx.live_score
            )));
        }

        lines.push(Line::from(vec![Span::styled(
            format!("Total score: {}", ctx.total_score),
            HEADER_STYLE,
        )]));
        lines.push(Line::from(""));

        if !ctx.message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.message, MESSAGE_STYLE)]));
        }

        if !ctx.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::Menu { .. } => "UP/DOWN: Select | ENTER or number: Play | ESC/Q: Quit",
            TuiState::Playing => "Type a letter to guess | ?: Hint | ESC: Leave round",
            TuiState::RoundOver => "Press any key to return to the menu",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    /// Block until the next key press, skipping every other terminal event.
    fn next_key(&mut self) -> Result<KeyEvent, io::Error> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    debug_log!("next_key() - Key event received: {:?}", key.code);
                    return Ok(key);
                }
                Event::Resize(_, _) => self.draw_or_log(),
                other => {
                    debug_log!("next_key() - Ignoring event: {:?}", other);
                }
            }
        }
    }

    fn read_menu_key(&mut self) -> Result<MenuAction, io::Error> {
        loop {
            self.draw()?;
            let key = self.next_key()?;
            let TuiState::Menu { selected } = self.state else {
                return Ok(MenuAction::Quit);
            };
            match menu_key_for_event(&key, selected, &self.games) {
                MenuKey::Act(action) => return Ok(action),
                MenuKey::Move(selected) => self.state = TuiState::Menu { selected },
            }
        }
    }

    fn read_turn_key(&mut self, hints_available: bool) -> Result<Option<TurnAction>, io::Error> {
        self.draw()?;
        let key = self.next_key()?;
        self.error_message.clear();

        let action = turn_action_for_key(&key);
        match action {
            Some(TurnAction::Hint) if !hints_available => {
                debug_log!("read_turn_key() - Hint requested with none left");
            }
            None => {
                if let KeyCode::Char(c) = key.code {
                    self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
                }
            }
            _ => {}
        }
        Ok(action)
    }
}

impl GameInterface for TuiInterface {
    fn display_menu(&mut self, games: &[GameKind], total_score: u32) {
        self.games = games.to_vec();
        self.total_score = total_score;
        self.state = TuiState::Menu { selected: 0 };
        self.snapshot = None;
        self.summary = None;
        self.status = "Choose a game".to_string();
        self.draw_or_log();
    }

    fn read_menu_choice(&mut self) -> Option<MenuAction> {
        match self.read_menu_key() {
            Ok(action) => {
                info_log!("read_menu_choice() - Action received: {:?}", action);
                Some(action)
            }
            Err(_e) => {
                info_log!("read_menu_choice() - Error handling input, returning Quit");
                Some(MenuAction::Quit)
            }
        }
    }

    fn display_state(&mut self, snapshot: &GameSnapshot, live_score: u32) {
        self.state = TuiState::Playing;
        self.snapshot = Some(snapshot.clone());
        self.live_score = live_score;
        self.status = "Guess a letter".to_string();
        self.draw_or_log();
    }

    fn read_turn_action(&mut self, hints_available: bool) -> Option<TurnAction> {
        match self.read_turn_key(hints_available) {
            Ok(action) => action,
            Err(_e) => {
                info_log!("read_turn_action() - Error handling input, returning Quit");
                Some(TurnAction::Quit)
            }
        }
    }

    fn display_guess_outcome(&mut self, letter: char, outcome: GuessOutcome) {
        self.message = match outcome {
            GuessOutcome::AlreadyGuessed => format!("{letter} has already been guessed"),
            GuessOutcome::Present => format!("{letter} was present!"),
            GuessOutcome::Absent => format!("{letter} was not present!"),
        };
        self.draw_or_log();
    }

    fn display_hint(&mut self, outcome: HintOutcome) {
        self.message = match outcome {
            HintOutcome::Revealed {
                letter,
                hints_remaining,
            } => format!("Hint: the word contains {letter} ({hints_remaining} hints left)"),
            HintOutcome::NoHintsLeft => "No more hints!".to_string(),
            HintOutcome::NothingToReveal => "Nothing left to reveal!".to_string(),
        };
        self.draw_or_log();
    }

    fn display_round_over(&mut self, summary: &RoundSummary) {
        self.state = TuiState::RoundOver;
        self.total_score += summary.score;
        self.summary = Some(summary.clone());
        self.message = match summary.status {
            RoundStatus::Won => format!("You won! {} points banked.", summary.score),
            _ => "Thanks for playing".to_string(),
        };
        self.status = format!("Round over - the word was {}", summary.secret_word);
        if self.draw().is_ok() {
            let _ = self.next_key();
        }
    }

    fn display_message(&mut self, message: &str) {
        self.message = message.to_string();
        self.draw_or_log();
    }

    fn display_goodbye(&mut self, total_score: u32) {
        self.total_score = total_score;
        self.message = format!("Thank you for playing! Final Score: {total_score}");
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
