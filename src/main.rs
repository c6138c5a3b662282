// algotrace: step-by-step sorting and searching traces in the terminal

use std::io;

use clap::{ArgAction, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::Level;

use algotrace::catalog::{Algorithm, Family};
use algotrace::config::{generate_array, parse_array, pick_target, ArrayConfig, Speed};
use algotrace::errors::{Error, InputError};
use algotrace::ui::{App, Session};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Animate sorting and searching algorithms step by step",
    after_help = "Algorithms: bubble, quick, merge, insertion, linear, binary, jump"
)]
struct Args {
    /// Algorithm to trace (e.g. `bubble`, `quick-sort`, `binary-search`)
    #[arg(default_value = "bubble")]
    algorithm: Algorithm,

    /// Input array, comma or space separated (random when omitted)
    #[arg(long, allow_hyphen_values = true)]
    array: Option<String>,

    /// Size of the generated array
    #[arg(long)]
    size: Option<usize>,

    /// Smallest generated value
    #[arg(long, allow_hyphen_values = true)]
    min: Option<i64>,

    /// Largest generated value
    #[arg(long, allow_hyphen_values = true)]
    max: Option<i64>,

    /// Value to search for (searching algorithms only; picked from the array when omitted)
    #[arg(long, allow_hyphen_values = true)]
    target: Option<i64>,

    /// Auto-play speed
    #[arg(long, value_enum, default_value_t = Speed::Medium)]
    speed: Speed,

    /// Seed for array generation and target picking
    #[arg(long)]
    seed: Option<u64>,

    /// Print the trace as JSON instead of opening the player
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Resolve command-line arguments into the player's starting session
fn build_session(args: &Args) -> Result<Session, InputError> {
    let family = args.algorithm.family();

    if family == Family::Sorting && args.target.is_some() {
        return Err(InputError::UnexpectedTarget {
            algorithm: args.algorithm.info().name,
        });
    }

    let defaults = ArrayConfig::for_family(family);
    let array_config = ArrayConfig {
        size: args.size.unwrap_or(defaults.size),
        min: args.min.unwrap_or(defaults.min),
        max: args.max.unwrap_or(defaults.max),
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let input = match &args.array {
        Some(text) => parse_array(text)?,
        None => generate_array(&array_config, &mut rng)?,
    };
    let target = match args.target {
        Some(target) => target,
        None => pick_target(&input, &mut rng),
    };

    Ok(Session {
        algorithm: args.algorithm,
        input,
        target,
        array_config,
        speed: args.speed,
        rng,
    })
}

fn run(args: Args) -> Result<(), Error> {
    let session = build_session(&args)?;
    tracing::info!(
        algorithm = %session.algorithm,
        input = ?session.input,
        target = session.target,
        speed = %session.speed,
        "session configured"
    );

    if args.json {
        let run = session.algorithm.run(&session.input, session.target);
        println!("{}", run.to_json()?);
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(Error::from)
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
