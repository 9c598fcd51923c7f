//! pathviz: watch A*, Dijkstra, BFS and DFS explore a grid in the terminal.
//!
//! Usage:
//!   pathviz                          # interactive, grid sized to the terminal
//!   pathviz --layout maze --algorithm dfs
//!   pathviz --headless --size 40x20 --layout walls --seed 3
//!
//! Keys: enter run, space pause/resume, s skip to end, x reset playback,
//! c clear walls, w random walls, m maze, a next algorithm, d diagonal,
//! +/- speed, q or esc quit. Left mouse draws walls, right mouse erases.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use crossterm::terminal;

use pathviz::{Algorithm, GridSize, Result, Visualizer, VisualizerConfig, callbacks};
use pathviz_crossterm::{CELL_WIDTH, Input, Key, TerminalView};

/// Grid used in headless mode when no size is given, in pixels.
const HEADLESS_SURFACE: (u32, u32) = (800, 600);

/// Poll timeout while frames are being played.
const PLAYING_POLL: Duration = Duration::from_millis(1);
/// Poll timeout while idle.
const IDLE_POLL: Duration = Duration::from_millis(50);

/// Terminal pathfinding visualizer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Search algorithm: astar, dijkstra, bfs or dfs
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Allow diagonal moves
    #[arg(short, long)]
    diagonal: bool,

    /// Playback rate in frames per second
    #[arg(long)]
    speed: Option<f64>,

    /// Wall probability for the random layout
    #[arg(long)]
    density: Option<f64>,

    /// Seed for wall and maze generation
    #[arg(long)]
    seed: Option<u64>,

    /// Initial layout
    #[arg(long, value_enum, default_value_t = Layout::Empty)]
    layout: Layout,

    /// Grid size as COLSxROWS (default: fit the terminal)
    #[arg(long)]
    size: Option<GridSize>,

    /// Run once, print the result and exit
    #[arg(long)]
    headless: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Layout {
    Empty,
    Walls,
    Maze,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("pathviz: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = build_config(&args)?;
    if args.headless {
        let size = args.size.unwrap_or_else(|| {
            let (cols, rows) = config.grid_dims(HEADLESS_SURFACE.0, HEADLESS_SURFACE.1);
            GridSize { cols, rows }
        });
        return run_headless(config, size, args.layout);
    }

    let size = match args.size {
        Some(size) => size,
        None => {
            let (w, h) = terminal::size()?;
            GridSize {
                cols: i32::from(w / CELL_WIDTH).max(1),
                rows: i32::from(h.saturating_sub(2)).max(1),
            }
        }
    };
    run_interactive(config, size, args.layout)
}

/// File settings first, then command-line overrides.
fn build_config(args: &Args) -> Result<VisualizerConfig> {
    let mut config = match &args.config {
        Some(path) => VisualizerConfig::load(path)?,
        None => VisualizerConfig::default(),
    };
    if let Some(algorithm) = args.algorithm {
        config.algorithm = algorithm;
    }
    if args.diagonal {
        config.allow_diagonal = true;
    }
    if let Some(speed) = args.speed {
        config.animation_speed = speed;
    }
    if let Some(density) = args.density {
        config.wall_density = density;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;
    Ok(config)
}

fn apply_layout(vis: &mut Visualizer, layout: Layout) {
    match layout {
        Layout::Empty => {}
        Layout::Walls => {
            vis.generate_random_walls();
        }
        Layout::Maze => {
            vis.generate_maze();
        }
    }
}

fn status_line(vis: &Visualizer, note: &str) -> String {
    let cfg = vis.config();
    let stats = vis.stats();
    format!(
        "{} | diagonal {} | {:.0} fps | visited {} | path {} | {:.2}s | {note}",
        cfg.algorithm.label(),
        if cfg.allow_diagonal { "on" } else { "off" },
        vis.player().speed(),
        stats.visited_count,
        stats.path_length,
        stats.duration.as_secs_f64(),
    )
}

// ---------------------------------------------------------------------------
// Headless
// ---------------------------------------------------------------------------

fn run_headless(config: VisualizerConfig, size: GridSize, layout: Layout) -> Result<()> {
    let mut vis = Visualizer::new(config, size.cols, size.rows);
    apply_layout(&mut vis, layout);
    let stats = vis.run_algorithm();
    vis.skip_to_end(callbacks(|_| {}, || {}));

    print!("{}", vis.grid());
    let note = if stats.path_length == 0 {
        "unreachable"
    } else {
        "done"
    };
    println!("{}", status_line(&vis, note));
    Ok(())
}

// ---------------------------------------------------------------------------
// Interactive
// ---------------------------------------------------------------------------

fn run_interactive(config: VisualizerConfig, size: GridSize, layout: Layout) -> Result<()> {
    let mut vis = Visualizer::new(config, size.cols, size.rows);
    apply_layout(&mut vis, layout);

    let mut view = TerminalView::new();
    view.init()?;
    let result = event_loop(&mut vis, &mut view);
    view.close();
    result
}

fn event_loop(vis: &mut Visualizer, view: &mut TerminalView) -> Result<()> {
    let mut note = String::from("enter: run | q: quit");
    let mut stdout = io::stdout();

    loop {
        if vis.is_playing() {
            vis.tick(Instant::now(), &mut *view);
        }
        if view.take_completed() {
            note = if vis.stats().path_length == 0 {
                "no path".into()
            } else {
                "done".into()
            };
        }
        view.flush(&mut stdout, vis.grid(), &status_line(vis, &note))?;

        let timeout = if vis.is_playing() {
            PLAYING_POLL
        } else {
            IDLE_POLL
        };
        let Some(input) = view.poll_input(timeout)? else {
            continue;
        };

        match input {
            Input::Key(Key::Char('q') | Key::Escape) => return Ok(()),
            Input::Key(Key::Enter) => {
                vis.run_algorithm();
                view.mark_all();
                vis.play(Instant::now(), &mut *view);
                note = "playing".into();
            }
            Input::Key(Key::Char(' ')) => {
                if vis.is_playing() {
                    vis.pause();
                    note = "paused".into();
                } else {
                    vis.play(Instant::now(), &mut *view);
                    note = "playing".into();
                }
            }
            Input::Key(Key::Char('s')) => vis.skip_to_end(&mut *view),
            Input::Key(Key::Char('x')) => {
                vis.reset();
                view.mark_all();
                note = "reset".into();
            }
            Input::Key(Key::Char('c')) => {
                vis.clear_grid();
                view.mark_all();
            }
            Input::Key(Key::Char('w')) => {
                let n = vis.generate_random_walls();
                view.mark_all();
                note = format!("{n} walls");
            }
            Input::Key(Key::Char('m')) => {
                vis.generate_maze();
                view.mark_all();
                note = "maze".into();
            }
            Input::Key(Key::Char('a')) => {
                let next = vis.config().algorithm.next();
                vis.set_algorithm(next);
            }
            Input::Key(Key::Char('d')) => {
                let allow = !vis.config().allow_diagonal;
                vis.set_allow_diagonal(allow);
            }
            Input::Key(Key::Char('+')) => vis.set_speed(vis.player().speed() * 2.0),
            Input::Key(Key::Char('-')) => vis.set_speed(vis.player().speed() / 2.0),
            Input::Paint(p) => {
                if vis.set_wall(p, true) {
                    view.mark(p);
                }
            }
            Input::Erase(p) => {
                if vis.set_wall(p, false) {
                    view.mark(p);
                }
            }
            Input::Resize { width, height } => {
                let cols = i32::from(width / CELL_WIDTH).max(1);
                let rows = i32::from(height.saturating_sub(2)).max(1);
                vis.init_grid(cols, rows);
                view.mark_all();
            }
            Input::Key(_) => {}
        }
    }
}
