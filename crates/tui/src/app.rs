use std::{io, thread, time::Duration};

use anyhow::{Context, Result};
use chrono::Local;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::{error, info};

use ludoteca_core::{
    catalog::{CatalogStore, SaveOutcome, Violation},
    config::AppConfig,
    export::ExportManager,
    models::{Game, GameDraft, Genre, Platform, SCORES},
};

use crate::chart::PlatformChart;

const TICK_RATE: Duration = Duration::from_millis(250);
const MAX_TITLE_LEN: usize = 64;
const MAX_ID_LEN: usize = 9;
const MAX_YEAR_LEN: usize = 4;

#[derive(Debug, Clone)]
pub struct Theme {
    pub primary_fg: Color,
    pub accent: Color,
    pub muted: Color,
    pub selection_bg: Color,
    pub warning: Color,
    pub danger: Color,
    pub on_accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_fg: Color::White,
            accent: Color::Cyan,
            muted: Color::DarkGray,
            selection_bg: Color::DarkGray,
            warning: Color::Yellow,
            danger: Color::Red,
            on_accent: Color::Black,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Browse,
    Search,
    Form,
    ConfirmDelete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    Id,
    Title,
    Genre,
    Platform,
    Score,
    ReleaseYear,
}

impl FormField {
    const ALL: [FormField; 6] = [
        FormField::Id,
        FormField::Title,
        FormField::Genre,
        FormField::Platform,
        FormField::Score,
        FormField::ReleaseYear,
    ];

    fn label(&self) -> &'static str {
        match self {
            FormField::Id => "ID",
            FormField::Title => "Título",
            FormField::Genre => "Género",
            FormField::Platform => "Plataforma",
            FormField::Score => "Puntuación",
            FormField::ReleaseYear => "Año",
        }
    }

    fn is_cycled(&self) -> bool {
        matches!(
            self,
            FormField::Genre | FormField::Platform | FormField::Score
        )
    }
}

/// Editable view over the store draft: text buffers for the typed fields,
/// cycled selections for the enumerated ones.
struct FormState {
    field: FormField,
    id_input: String,
    title_input: String,
    genre: Option<Genre>,
    platform: Option<Platform>,
    score: Option<u8>,
    year_input: String,
}

impl FormState {
    fn from_draft(draft: &GameDraft) -> Self {
        Self {
            field: FormField::Id,
            id_input: draft.id.map(|id| id.to_string()).unwrap_or_default(),
            title_input: draft.title.clone(),
            genre: draft.genre,
            platform: draft.platform,
            score: draft.score,
            year_input: draft
                .release_year
                .map(|year| year.to_string())
                .unwrap_or_default(),
        }
    }

    fn next_field(&mut self) {
        let idx = FormField::ALL
            .iter()
            .position(|field| *field == self.field)
            .unwrap_or(0);
        self.field = FormField::ALL[(idx + 1) % FormField::ALL.len()];
    }

    fn prev_field(&mut self) {
        let idx = FormField::ALL
            .iter()
            .position(|field| *field == self.field)
            .unwrap_or(0);
        self.field = FormField::ALL[(idx + FormField::ALL.len() - 1) % FormField::ALL.len()];
    }

    fn insert(&mut self, ch: char) {
        match self.field {
            FormField::Id => {
                if ch.is_ascii_digit() && self.id_input.len() < MAX_ID_LEN {
                    self.id_input.push(ch);
                }
            }
            FormField::ReleaseYear => {
                if ch.is_ascii_digit() && self.year_input.len() < MAX_YEAR_LEN {
                    self.year_input.push(ch);
                }
            }
            FormField::Title => {
                if !ch.is_control() && self.title_input.chars().count() < MAX_TITLE_LEN {
                    self.title_input.push(ch);
                }
            }
            _ => {}
        }
    }

    fn backspace(&mut self) {
        match self.field {
            FormField::Id => {
                self.id_input.pop();
            }
            FormField::ReleaseYear => {
                self.year_input.pop();
            }
            FormField::Title => {
                self.title_input.pop();
            }
            _ => {}
        }
    }

    fn cycle(&mut self, delta: isize) {
        match self.field {
            FormField::Genre => self.genre = cycle_option(self.genre, &Genre::ALL, delta),
            FormField::Platform => {
                self.platform = cycle_option(self.platform, &Platform::ALL, delta)
            }
            FormField::Score => self.score = cycle_option(self.score, &SCORES, delta),
            _ => {}
        }
    }

    fn to_draft(&self) -> GameDraft {
        GameDraft {
            id: self.id_input.trim().parse().ok(),
            title: self.title_input.clone(),
            genre: self.genre,
            platform: self.platform,
            score: self.score,
            release_year: self.year_input.trim().parse().ok(),
        }
    }
}

fn cycle_option<T: Copy + PartialEq>(current: Option<T>, all: &[T], delta: isize) -> Option<T> {
    if all.is_empty() {
        return None;
    }
    let next = match current.and_then(|value| all.iter().position(|item| *item == value)) {
        Some(idx) => {
            let len = all.len() as isize;
            (((idx as isize + delta) % len + len) % len) as usize
        }
        None if delta >= 0 => 0,
        None => all.len() - 1,
    };
    Some(all[next])
}

enum AppEvent {
    Input(Event),
    Tick,
}

struct UiState {
    filtered: Vec<Game>,
    cursor: usize,
    offset: usize,
    list_height: usize,
    status: String,
    mode: Mode,
    should_quit: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            filtered: Vec::new(),
            cursor: 0,
            offset: 0,
            list_height: 1,
            status: "Listo".to_string(),
            mode: Mode::Browse,
            should_quit: false,
        }
    }
}

impl UiState {
    fn set_filtered(&mut self, games: Vec<Game>) {
        self.filtered = games;
        self.clamp_cursor();
        self.ensure_cursor_visible();
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.filtered.is_empty() {
            return;
        }
        let len = self.filtered.len() as isize;
        let mut idx = self.cursor as isize + delta;
        if idx < 0 {
            idx = 0;
        } else if idx >= len {
            idx = len - 1;
        }
        self.cursor = idx as usize;
        self.ensure_cursor_visible();
    }

    fn move_to(&mut self, index: usize) {
        if self.filtered.is_empty() {
            return;
        }
        self.cursor = index.min(self.filtered.len() - 1);
        self.ensure_cursor_visible();
    }

    fn move_to_end(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.cursor = self.filtered.len() - 1;
        self.ensure_cursor_visible();
    }

    fn page_down(&mut self) {
        if self.filtered.is_empty() || self.list_height == 0 {
            return;
        }
        let delta = self.list_height.min(self.filtered.len());
        self.move_cursor(delta as isize);
    }

    fn page_up(&mut self) {
        if self.filtered.is_empty() || self.list_height == 0 {
            return;
        }
        let delta = self.list_height.min(self.filtered.len());
        self.move_cursor(-(delta as isize));
    }

    fn visible_games(&self, height: usize) -> &[Game] {
        if self.filtered.is_empty() {
            return &[];
        }
        let end = (self.offset + height).min(self.filtered.len());
        &self.filtered[self.offset..end]
    }

    fn current_game(&self) -> Option<&Game> {
        self.filtered.get(self.cursor)
    }

    fn set_status(&mut self, message: String) {
        self.status = message;
    }

    fn clamp_cursor(&mut self) {
        if self.filtered.is_empty() {
            self.cursor = 0;
            self.offset = 0;
        } else if self.cursor >= self.filtered.len() {
            self.cursor = self.filtered.len() - 1;
        }
    }

    fn ensure_cursor_visible(&mut self) {
        if self.filtered.is_empty() || self.list_height == 0 {
            self.offset = 0;
            return;
        }
        let height = self.list_height;
        let max_offset = self.filtered.len().saturating_sub(height);

        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + height {
            self.offset = self.cursor + 1 - height;
        }

        if self.offset > max_offset {
            self.offset = max_offset;
        }
    }
}

/// High-level application state for the catalog TUI.
pub struct LudotecaApp {
    store: CatalogStore,
    exporter: ExportManager,
    config: AppConfig,
    state: UiState,
    form: FormState,
    chart: PlatformChart,
    theme: Theme,
}

impl LudotecaApp {
    pub fn new(store: CatalogStore, exporter: ExportManager, config: AppConfig) -> Self {
        let form = FormState::from_draft(store.draft());
        Self {
            store,
            exporter,
            config,
            state: UiState::default(),
            form,
            chart: PlatformChart::new(),
            theme: Theme::default(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        self.refresh_views();
        self.state
            .set_status(format!("Cargados {} juegos", self.state.filtered.len()));

        let mut stdout = io::stdout();
        enable_raw_mode().context("failed to enter raw mode")?;
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        let (event_tx, mut event_rx) = mpsc::channel::<AppEvent>(128);
        spawn_input_thread(event_tx);

        loop {
            terminal.draw(|frame| self.draw(frame))?;
            if self.state.should_quit {
                break;
            }

            let maybe_event = event_rx.recv().await;
            if !self.process_app_event(maybe_event) {
                break;
            }

            if self.state.should_quit {
                break;
            }
        }

        restore_terminal(&mut terminal)?;
        Ok(())
    }

    /// Recompute the derived views after a store change: the filtered list
    /// snapshot for rendering and the chart dataset. Runs on the same loop
    /// iteration as the mutation, before the next input is accepted.
    fn refresh_views(&mut self) {
        let filtered: Vec<Game> = self
            .store
            .filtered_games()
            .into_iter()
            .cloned()
            .collect();
        self.state.set_filtered(filtered);
        self.chart.sync(&self.store);
    }

    fn process_app_event(&mut self, maybe_event: Option<AppEvent>) -> bool {
        match maybe_event {
            Some(AppEvent::Input(event)) => {
                if let Err(err) = self.handle_input(event) {
                    self.state.set_status(format!("Error: {err}"));
                }
                true
            }
            Some(AppEvent::Tick) => {
                self.handle_tick();
                true
            }
            None => false,
        }
    }

    fn handle_tick(&mut self) {
        if self.state.mode == Mode::Search {
            self.state
                .set_status(format!("Buscar: {}", self.store.search_term()));
        }
    }

    fn handle_input(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            match self.state.mode {
                Mode::Browse => self.handle_browse_key(key)?,
                Mode::Search => self.handle_search_key(key),
                Mode::Form => self.handle_form_key(key),
                Mode::ConfirmDelete => self.handle_confirm_key(key),
            }
        }
        Ok(())
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') if key.modifiers.is_empty() => self.state.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.state.move_cursor(1),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_cursor(-1),
            KeyCode::Char('g') if key.modifiers.is_empty() => self.state.move_to(0),
            KeyCode::Char('G') => self.state.move_to_end(),
            KeyCode::Home => self.state.move_to(0),
            KeyCode::End => self.state.move_to_end(),
            KeyCode::PageDown => self.state.page_down(),
            KeyCode::PageUp => self.state.page_up(),
            KeyCode::Char('/') => {
                self.state.mode = Mode::Search;
                self.state
                    .set_status(format!("Buscar: {}", self.store.search_term()));
            }
            KeyCode::Char('n') if key.modifiers.is_empty() => {
                self.store.clear_draft();
                self.form = FormState::from_draft(self.store.draft());
                self.state.mode = Mode::Form;
                self.state.set_status("Nuevo juego".to_string());
            }
            KeyCode::Enter => {
                if let Some(game) = self.state.current_game().cloned() {
                    self.store.select_record(&game);
                    self.form = FormState::from_draft(self.store.draft());
                    self.state.mode = Mode::Form;
                    self.state.set_status(format!("Editando {}", game.title));
                } else {
                    self.state
                        .set_status("No hay juegos para editar".to_string());
                }
            }
            KeyCode::Char('d') if key.modifiers.is_empty() => {
                if let Some(game) = self.state.current_game().cloned() {
                    self.store.select_record(&game);
                    self.state.mode = Mode::ConfirmDelete;
                } else {
                    self.state.set_status(Violation::NoSelection.to_string());
                }
            }
            KeyCode::Char('x') if key.modifiers.is_empty() => self.export_snapshot(),
            _ => {}
        }
        Ok(())
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.state.mode = Mode::Browse;
                self.state.set_status("Búsqueda cancelada".to_string());
            }
            KeyCode::Enter => {
                self.state.mode = Mode::Browse;
                self.state
                    .set_status(format!("Filtro aplicado: {}", self.store.search_term()));
            }
            KeyCode::Backspace => {
                let mut term = self.store.search_term().to_string();
                term.pop();
                self.store.set_search_term(term);
                self.refresh_views();
                self.state
                    .set_status(format!("Buscar: {}", self.store.search_term()));
            }
            KeyCode::Char(c) => {
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                    let mut term = self.store.search_term().to_string();
                    term.push(c);
                    self.store.set_search_term(term);
                    self.refresh_views();
                    self.state
                        .set_status(format!("Buscar: {}", self.store.search_term()));
                }
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.store.clear_draft();
                self.state.mode = Mode::Browse;
                self.state.set_status("Formulario limpiado".to_string());
                return;
            }
            KeyCode::Char('d') if key.modifiers == KeyModifiers::CONTROL => {
                if self.store.selected_id().is_some() {
                    self.state.mode = Mode::ConfirmDelete;
                } else {
                    self.state.set_status(Violation::NoSelection.to_string());
                }
                return;
            }
            KeyCode::Enter => {
                self.save_draft();
                return;
            }
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Left => self.form.cycle(-1),
            KeyCode::Right => self.form.cycle(1),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(c) => {
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                    self.form.insert(c);
                }
            }
            _ => {}
        }
        // Keep the store draft authoritative while the user types.
        *self.store.draft_mut() = self.form.to_draft();
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('y') | KeyCode::Char('Y')
            | KeyCode::Enter => {
                match self.store.delete() {
                    Ok(Some(id)) => {
                        self.refresh_views();
                        self.state.set_status(format!("Juego eliminado (ID {id})"));
                    }
                    Ok(None) => {
                        self.refresh_views();
                        self.state.set_status("El juego ya no existe".to_string());
                    }
                    Err(violation) => self.state.set_status(violation.to_string()),
                }
                self.state.mode = Mode::Browse;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.state.mode = Mode::Browse;
                self.state.set_status("Eliminación cancelada".to_string());
            }
            _ => {}
        }
    }

    fn save_draft(&mut self) {
        *self.store.draft_mut() = self.form.to_draft();
        match self.store.save() {
            Ok(outcome) => {
                self.refresh_views();
                self.state.mode = Mode::Browse;
                let message = match outcome {
                    SaveOutcome::Created(id) => format!("Juego creado (ID {id})"),
                    SaveOutcome::Updated(id) => format!("Juego actualizado (ID {id})"),
                };
                self.state.set_status(message);
            }
            // The attempted save aborts; the form keeps its contents.
            Err(violation) => self.state.set_status(violation.to_string()),
        }
    }

    fn export_snapshot(&mut self) {
        match self.exporter.export(self.store.games()) {
            Ok(path) => {
                info!(path = %path.display(), "Export requested from UI");
                self.state.set_status(format!(
                    "Exportado {} ({})",
                    path.display(),
                    Local::now().format("%H:%M:%S")
                ));
            }
            Err(err) => {
                error!(?err, "Export failed");
                self.state.set_status(format!("Error al exportar: {err}"));
            }
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let size = frame.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(4)])
            .split(size);
        let body_chunk = chunks[0];
        let status_chunk = chunks[1];

        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(body_chunk);

        self.render_game_list(frame, body_chunks[0]);

        if self.config.show_chart {
            let right_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(body_chunks[1]);
            self.render_right_panel(frame, right_chunks[0]);
            self.chart.render(&self.theme, frame, right_chunks[1]);
        } else {
            self.render_right_panel(frame, body_chunks[1]);
        }

        self.render_status(frame, status_chunk);

        if self.state.mode == Mode::ConfirmDelete {
            self.render_confirm_modal(frame);
        }
    }

    fn render_right_panel(&self, frame: &mut Frame, area: Rect) {
        if self.state.mode == Mode::Form {
            self.render_form(frame, area);
        } else {
            self.render_game_details(frame, area);
        }
    }

    fn render_game_list(&mut self, frame: &mut Frame, area: Rect) {
        self.state.list_height = area.height.saturating_sub(2) as usize;
        self.state.clamp_cursor();
        self.state.ensure_cursor_visible();

        let mut list_state = ListState::default();
        let height = self.state.list_height;
        let games = self.state.visible_games(height);
        if !games.is_empty() {
            let selected = self
                .state
                .cursor
                .saturating_sub(self.state.offset)
                .min(games.len().saturating_sub(1));
            list_state.select(Some(selected));
        }
        let items: Vec<ListItem> = games
            .iter()
            .enumerate()
            .map(|(idx, game)| {
                let global_index = self.state.offset + idx;
                let marker = if self.state.cursor == global_index {
                    Span::styled(
                        "▶ ",
                        Style::default()
                            .fg(self.theme.accent)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::raw("  ")
                };
                let title = Span::styled(
                    game.title.clone(),
                    Style::default()
                        .fg(self.theme.primary_fg)
                        .add_modifier(Modifier::BOLD),
                );
                let platform = Span::styled(
                    format!(" · {}", game.platform),
                    Style::default().fg(self.theme.muted),
                );
                ListItem::new(Line::from(vec![marker, title, platform]))
            })
            .collect();

        let title = format!(
            "Juegos ({}/{})",
            self.state.filtered.len(),
            self.store.games().len()
        );
        let block = Block::default().borders(Borders::ALL).title(title);
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(self.theme.selection_bg));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_game_details(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Detalles");
        if let Some(game) = self.state.current_game() {
            let lines = vec![
                Line::from(Span::styled(
                    game.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(format!("ID: {}", game.id)),
                Line::from(format!("Género: {}", game.genre)),
                Line::from(format!("Plataforma: {}", game.platform)),
                Line::from(format!("Puntuación: {}/10", game.score)),
                Line::from(format!("Año: {}", game.release_year)),
            ];
            let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
            frame.render_widget(paragraph, area);
        } else {
            let message = if self.store.games().is_empty() {
                "Catálogo vacío"
            } else {
                "Ningún juego coincide con el filtro"
            };
            let paragraph = Paragraph::new(message).block(block);
            frame.render_widget(paragraph, area);
        }
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let title = if self.store.is_editing() {
            "Editar juego"
        } else {
            "Nuevo juego"
        };
        let mut lines = Vec::new();
        for field in FormField::ALL {
            let active = field == self.form.field;
            let marker = if active {
                Span::styled(
                    "▶ ",
                    Style::default()
                        .fg(self.theme.accent)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw("  ")
            };
            let label = Span::styled(
                format!("{:<12}", format!("{}:", field.label())),
                Style::default().fg(self.theme.primary_fg),
            );
            let value = self.form_value_span(field, active);
            lines.push(Line::from(vec![marker, label, value]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Tab campo · ←/→ valor · Enter guardar · Esc limpiar · Ctrl+D eliminar",
            Style::default().fg(self.theme.muted),
        )));

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn form_value_span(&self, field: FormField, active: bool) -> Span<'_> {
        let text = match field {
            FormField::Id => {
                if self.form.id_input.is_empty() {
                    "(automático)".to_string()
                } else {
                    self.form.id_input.clone()
                }
            }
            FormField::Title => self.form.title_input.clone(),
            FormField::Genre => option_label(self.form.genre.map(|genre| genre.label())),
            FormField::Platform => {
                option_label(self.form.platform.map(|platform| platform.label()))
            }
            FormField::Score => self
                .form
                .score
                .map(|score| score.to_string())
                .unwrap_or_else(|| "—".to_string()),
            FormField::ReleaseYear => self.form.year_input.clone(),
        };
        let text = if active && field.is_cycled() {
            format!("◀ {text} ▶")
        } else {
            text
        };
        if active {
            Span::styled(text, Style::default().fg(self.theme.accent))
        } else {
            Span::raw(text)
        }
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Estado");
        let primary = if self.state.mode == Mode::Search {
            format!("Buscar: {}", self.store.search_term())
        } else {
            self.state.status.clone()
        };
        let term = self.store.search_term();
        let filter_label = if term.trim().is_empty() { "—" } else { term };
        let secondary = format!(
            "{} juegos · filtro: {} · / buscar · n nuevo · Enter editar · d eliminar · x exportar · q salir",
            self.store.games().len(),
            filter_label
        );
        let paragraph = Paragraph::new(vec![Line::from(primary), Line::from(secondary)])
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_confirm_modal(&self, frame: &mut Frame) {
        let frame_area = frame.size();
        let width = 52_u16.min(frame_area.width.saturating_sub(4)).max(24);
        let height = 7_u16.min(frame_area.height.saturating_sub(2)).max(5);
        let area = centered_rect(width, height, frame_area);

        frame.render_widget(Clear, area);

        let title = self
            .store
            .selected_id()
            .and_then(|id| self.store.games().iter().find(|game| game.id == id))
            .map(|game| game.title.clone())
            .unwrap_or_else(|| "este juego".to_string());

        let lines = vec![
            Line::from("¿Estás seguro de que deseas eliminar este juego?"),
            Line::from(Span::styled(
                title,
                Style::default()
                    .fg(self.theme.danger)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("S", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" confirmar  "),
                Span::styled("N", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" cancelar"),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Eliminar juego")
                    .border_style(Style::default().fg(self.theme.warning)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

fn option_label(value: Option<&'static str>) -> String {
    value.unwrap_or("—").to_string()
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor()?;
    Ok(())
}

fn spawn_input_thread(sender: mpsc::Sender<AppEvent>) {
    thread::spawn(move || loop {
        match event::poll(TICK_RATE) {
            Ok(true) => match event::read() {
                Ok(evt) => {
                    if sender.blocking_send(AppEvent::Input(evt)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            },
            Ok(false) => {
                if sender.blocking_send(AppEvent::Tick).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });
}
