// src/main.rs
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use imgnav::explorer::SortKey;
use imgnav::integrations::{ChannelNotifier, ChannelViewer, ViewerRequest};
use imgnav::{Collaborators, ExplorerConfig, NavigationController};
use ratatui::{prelude::*, widgets::*};
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Browse,
    Search,
    Path,
}

struct App {
    nav: NavigationController,
    mode: Mode,
    list_state: ListState,
    status: Option<String>,
    messages: Receiver<String>,
    viewer: Receiver<ViewerRequest>,
}

impl App {
    fn drain_channels(&mut self) {
        while let Ok(message) = self.messages.try_recv() {
            self.status = Some(message);
        }
        while let Ok(request) = self.viewer.try_recv() {
            let current = request.current
                .as_deref()
                .and_then(|p| p.file_name())
                .map(|n| format!(" at {}", n.to_string_lossy()))
                .unwrap_or_default();
            self.status = Some(format!("viewer: {} paths{}", request.paths.len(), current));
        }
    }

    /// Returns false when the user asked to quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self.mode {
            Mode::Browse => return self.handle_browse_key(key),
            Mode::Search => match key.code {
                KeyCode::Enter => {
                    self.nav.search();
                    self.mode = Mode::Browse;
                }
                KeyCode::Esc => self.mode = Mode::Browse,
                KeyCode::Backspace => {
                    let mut input = self.nav.query_input().to_string();
                    input.pop();
                    self.nav.set_query_input(input);
                }
                KeyCode::Char(c) => {
                    let input = format!("{}{}", self.nav.query_input(), c);
                    self.nav.set_query_input(input);
                }
                _ => {}
            },
            Mode::Path => match key.code {
                KeyCode::Enter => {
                    self.mode = Mode::Browse;
                    self.nav.submit_directory_input();
                }
                KeyCode::Esc => {
                    let current = self.nav.directory().display().to_string();
                    self.nav.set_directory_input(current);
                    self.mode = Mode::Browse;
                }
                KeyCode::Backspace => {
                    let mut input = self.nav.directory_input().to_string();
                    input.pop();
                    self.nav.set_directory_input(input);
                }
                KeyCode::Char(c) => {
                    let input = format!("{}{}", self.nav.directory_input(), c);
                    self.nav.set_directory_input(input);
                }
                _ => {}
            },
        }
        true
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> bool {
        self.status = None;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Up | KeyCode::Char('k') => self.nav.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.nav.select_next(),
            KeyCode::Home | KeyCode::Char('g') => self.nav.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.nav.select_last(),
            KeyCode::Enter => self.nav.activate_selected(),
            KeyCode::Char('l') => self.nav.change_selected_directory(),
            KeyCode::Backspace | KeyCode::Char('u') => self.nav.change_parent_directory(),
            KeyCode::Left | KeyCode::Char('b') => self.nav.back_directory(0),
            KeyCode::Right | KeyCode::Char('f') => self.nav.forward_directory(0),
            KeyCode::Char('~') => self.nav.change_home_directory(),
            KeyCode::Char('1') => self.nav.change_sort_key(SortKey::Name),
            KeyCode::Char('2') => self.nav.change_sort_key(SortKey::Size),
            KeyCode::Char('3') => self.nav.change_sort_key(SortKey::Mtime),
            KeyCode::Char('o') => self.nav.open_current_directory(),
            KeyCode::Char('r') => self.nav.reload(),
            KeyCode::Char('/') => self.mode = Mode::Search,
            KeyCode::Char(':') => self.mode = Mode::Path,
            _ => {}
        }
        true
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1), Constraint::Length(3)])
        .split(f.size());

    let nav = &app.nav;
    let arrows = format!(
        "{}{}",
        if nav.can_go_back() { "<" } else { " " },
        if nav.can_go_forward() { ">" } else { " " }
    );
    let path_style = if app.mode == Mode::Path {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let header = Paragraph::new(nav.directory_input().to_string())
        .style(path_style)
        .block(Block::default().borders(Borders::ALL).title(format!("imgnav {}", arrows)));
    f.render_widget(header, chunks[0]);

    let option = nav.sort_option();
    let items: Vec<ListItem> = nav.filtered_items()
        .iter()
        .map(|e| {
            if e.is_dir {
                ListItem::new(format!("{}/", e.name)).style(Style::default().fg(Color::Blue))
            } else {
                ListItem::new(e.name.clone())
            }
        })
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(format!(
            "sort: {} {}",
            option.key.label(),
            if option.descending { "desc" } else { "asc" }
        )))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    app.list_state.select(nav.selected_index());
    f.render_stateful_widget(list, chunks[1], &mut app.list_state);

    let footer = match (app.mode, &app.status) {
        (Mode::Search, _) => format!("/{}", nav.query_input()),
        (_, Some(status)) => status.clone(),
        _ if !nav.query().is_empty() => format!("filter: {}", nav.query()),
        _ => String::from("q quit  / search  : path  1-3 sort  b/f back/forward  u parent  o open"),
    };
    let footer = Paragraph::new(footer).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, chunks[2]);
}

fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    // The terminal belongs to the UI, so logs go to a file when possible.
    let log_file = dirs::cache_dir()
        .map(|d| d.join("imgnav"))
        .and_then(|d| std::fs::create_dir_all(&d).ok().map(|_| d.join("imgnav.log")))
        .and_then(|p| std::fs::OpenOptions::new().create(true).append(true).open(p).ok());
    if let Some(file) = log_file {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = ExplorerConfig::load_default()?;
    let arg = std::env::args().nth(1).map(PathBuf::from);
    let directory = config.initial_directory(arg).ok_or("no directory to open")?;
    let directory = std::fs::canonicalize(&directory).unwrap_or(directory);

    let (viewer, viewer_rx) = ChannelViewer::new();
    let (notifier, messages) = ChannelNotifier::new();
    let services = Collaborators::system(&config, Box::new(viewer), Box::new(notifier));
    let mut nav = NavigationController::new(directory, services);
    nav.init_directory();

    let mut app = App {
        nav,
        mode: Mode::Browse,
        list_state: ListState::default(),
        status: None,
        messages,
        viewer: viewer_rx,
    };

    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;
    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(std::io::stdout(), LeaveAlternateScreen)?;
    app.nav.shutdown();
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.nav.process_watch_events();
        app.drain_channels();
        if app.nav.take_focus_request() {
            app.mode = Mode::Browse;
            *app.list_state.offset_mut() = app.nav.scroll_top();
        }

        terminal.draw(|f| ui(f, app))?;
        app.nav.set_scroll_top(app.list_state.offset());

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && !app.handle_key(key) {
                    break;
                }
            }
        }
    }
    Ok(())
}
