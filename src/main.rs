use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

use crmfind::context::SessionContext;
use crmfind::error::CrmfindError;
use crmfind::{App, EntityKind, OutputMode, SearchCriteria, config};

/// Scoped search panels for leads, tasks and accounts
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Build scoped CRM/project search criteria from a basic or advanced search panel"
)]
struct Args {
    /// Entity to search: lead, task or account
    entity: EntityKind,

    /// Act as this user (overrides [session] username)
    #[arg(long)]
    user: Option<String>,

    /// Account or project id to scope the search to, depending on the entity
    #[arg(long)]
    scope: Option<i64>,

    /// Pre-fill the name field of the basic search
    #[arg(long)]
    text: Option<String>,

    /// Check "my items" in the basic search
    #[arg(long)]
    mine: bool,

    /// Run the saved filter with this name
    #[arg(long)]
    filter: Option<String>,

    /// Start in the advanced search layout
    #[arg(long)]
    advanced: bool,

    /// Submit once, print the criteria as JSON and exit without a UI
    #[arg(long)]
    print: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/crmfind-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let args = Args::parse();

    let mut context = SessionContext::from_config(&config_result.config);
    if let Some(user) = &args.user {
        context.set_username(user);
    }
    if let Some(scope) = args.scope {
        context.set_scope(args.entity.scope_kind(), scope);
    }

    // Under --print a config that failed to load is fatal
    if args.print
        && let Some(warning) = config_result.warning.clone()
    {
        return Err(CrmfindError::InvalidConfig(warning).into());
    }

    let mut app = App::new(args.entity, context, &config_result.config);
    if args.advanced {
        app.panel.select_advanced_layout();
    }
    let ignored = ignored_basic_flags(&args, app.panel.layout().is_advanced());
    if let Some(text) = &args.text {
        app.panel.set_text_field(text);
    }
    if args.mine {
        app.panel.set_my_items(true);
    }

    if args.print {
        if let Some(flags) = &ignored {
            eprintln!("Warning: {} ignored by the advanced search", flags);
        }
        let criteria = run_once(&mut app, args.filter.as_deref())?;
        println!("{}", criteria.to_json()?);
        return Ok(());
    }

    // Resolve the filter before touching the terminal so errors print cleanly
    if let Some(name) = &args.filter {
        app.panel.select_saved_filter(name)?;
        app.poll_panel_events();
    }

    let warning = match (config_result.warning, ignored) {
        (Some(warning), _) => Some(warning),
        (None, Some(flags)) => Some(format!("{} ignored by the advanced search", flags)),
        (None, None) => None,
    };

    let terminal = init_terminal()?;
    let result = run(terminal, app, warning);

    restore_terminal()?;
    let app = result?;

    // Output after terminal restore to prevent corruption
    handle_output(&app)?;

    #[cfg(debug_assertions)]
    log::debug!("=== CRMFIND DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::io::Write;

    // Logging is best effort; a read-only /tmp must not stop the app
    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/crmfind-debug.log")
    else {
        return;
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== CRMFIND DEBUG SESSION STARTED ===");
}

/// Submit (or run the named saved filter) once and return what was sent
fn run_once(app: &mut App, filter: Option<&str>) -> Result<SearchCriteria, CrmfindError> {
    match filter {
        Some(name) => app.panel.select_saved_filter(name)?,
        None => app.panel.submit_search()?,
    }
    app.poll_panel_events();

    app.last_criteria()
        .cloned()
        .ok_or(CrmfindError::NothingSubmitted(app.panel.entity()))
}

/// Basic-only flags that the advanced layout drops, e.g. `--text, --mine`
fn ignored_basic_flags(args: &Args, advanced: bool) -> Option<String> {
    if !advanced {
        return None;
    }
    let flags: Vec<&str> = [
        args.text.is_some().then_some("--text"),
        args.mine.then_some("--mine"),
    ]
    .into_iter()
    .flatten()
    .collect();
    (!flags.is_empty()).then(|| flags.join(", "))
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, config_warning: Option<String>) -> Result<App> {
    if let Some(warning) = config_warning {
        app.notification.show_warning(&warning);
    }

    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}

/// Handle output after terminal is restored
fn handle_output(app: &App) -> Result<()> {
    match app.output_mode() {
        Some(OutputMode::Criteria) => match app.last_criteria() {
            Some(criteria) => println!("{}", criteria.to_json()?),
            None => eprintln!("No search was submitted"),
        },
        None => {
            // Exited with Esc or Ctrl+C
        }
    }

    Ok(())
}
