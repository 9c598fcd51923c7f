//! The controller: one grid, one map generator and one frame player driven
//! from a single host loop.

use std::time::Instant;

use pathviz_anim::{FrameSink, PlayState, PlaybackStats, Player, Tick};
use pathviz_core::{Grid, NodeState, Point};
use pathviz_mapgen::MapGen;
use pathviz_paths::{Algorithm, AnimationFrame, FrameKind};
use rand::Rng;
use rand::rngs::StdRng;

use crate::config::VisualizerConfig;

/// Applies dispatched frames to the grid's presentation state before handing
/// them to the host sink.
struct GridSink<'a, S> {
    grid: &'a mut Grid,
    inner: S,
}

impl<S: FrameSink> FrameSink for GridSink<'_, S> {
    fn on_frame(&mut self, frame: AnimationFrame) {
        let state = match frame.kind {
            FrameKind::Visit => NodeState::Visited,
            FrameKind::Path => NodeState::Path,
        };
        self.grid.mark(frame.pos, state);
        log::trace!("{:?} {}", frame.kind, frame.pos);
        self.inner.on_frame(frame);
    }

    fn on_complete(&mut self) {
        self.inner.on_complete();
    }
}

/// Pathfinding visualizer state.
pub struct Visualizer<R: Rng = StdRng> {
    grid: Grid,
    mapgen: MapGen<R>,
    player: Player,
    config: VisualizerConfig,
}

impl Visualizer<StdRng> {
    /// A visualizer with a `cols × rows` grid. Generation is seeded from
    /// `config.seed` when present.
    pub fn new(config: VisualizerConfig, cols: i32, rows: i32) -> Self {
        let mapgen = match config.seed {
            Some(seed) => MapGen::seeded(seed),
            None => MapGen::from_entropy(),
        };
        Self::with_mapgen(config, cols, rows, mapgen)
    }
}

impl<R: Rng> Visualizer<R> {
    /// A visualizer drawing randomness from `rng`.
    pub fn with_rng(config: VisualizerConfig, cols: i32, rows: i32, rng: R) -> Self {
        Self::with_mapgen(config, cols, rows, MapGen::new(rng))
    }

    fn with_mapgen(config: VisualizerConfig, cols: i32, rows: i32, mapgen: MapGen<R>) -> Self {
        let mut player = Player::new();
        player.set_speed(config.animation_speed);
        Self {
            grid: Grid::new(cols, rows),
            mapgen,
            player,
            config,
        }
    }

    // -----------------------------------------------------------------------
    // Grid
    // -----------------------------------------------------------------------

    /// Replace the grid with a fresh `cols × rows` one and drop loaded frames.
    pub fn init_grid(&mut self, cols: i32, rows: i32) {
        self.grid = Grid::new(cols, rows);
        self.player.load(Vec::new());
    }

    /// Clear search state on every node and rewind playback.
    pub fn reset_grid_state(&mut self) {
        self.player.reset();
        self.grid.reset_state();
    }

    /// Remove every wall and drop loaded frames.
    pub fn clear_grid(&mut self) {
        self.player.load(Vec::new());
        self.grid.clear_walls();
    }

    /// Scatter walls at the configured density. Returns the walls placed.
    pub fn generate_random_walls(&mut self) -> usize {
        self.player.load(Vec::new());
        self.mapgen.random_walls(&mut self.grid, self.config.wall_density)
    }

    /// Replace the layout with a recursive-division maze. Returns the wall
    /// count.
    pub fn generate_maze(&mut self) -> usize {
        self.player.load(Vec::new());
        self.mapgen.maze(&mut self.grid)
    }

    /// Place or remove a wall by hand. Ignored while playing.
    pub fn set_wall(&mut self, p: Point, wall: bool) -> bool {
        if self.player.is_playing() {
            return false;
        }
        self.grid.set_wall(p, wall)
    }

    /// Move the start marker. Ignored while playing.
    pub fn set_start(&mut self, p: Point) -> bool {
        !self.player.is_playing() && self.grid.set_start(p)
    }

    /// Move the end marker. Ignored while playing.
    pub fn set_end(&mut self, p: Point) -> bool {
        !self.player.is_playing() && self.grid.set_end(p)
    }

    // -----------------------------------------------------------------------
    // Search and playback
    // -----------------------------------------------------------------------

    /// Run the configured search and load its frames for playback.
    pub fn run_algorithm(&mut self) -> PlaybackStats {
        let frames = self
            .config
            .algorithm
            .run(&mut self.grid, self.config.allow_diagonal);
        self.player.load(frames);
        self.player.stats()
    }

    /// Start or resume playback at `now`.
    pub fn play<S: FrameSink>(&mut self, now: Instant, sink: S) -> Tick {
        let sink = GridSink {
            grid: &mut self.grid,
            inner: sink,
        };
        self.player.play(now, sink)
    }

    /// Advance playback to `now`.
    pub fn tick<S: FrameSink>(&mut self, now: Instant, sink: S) -> Tick {
        let sink = GridSink {
            grid: &mut self.grid,
            inner: sink,
        };
        self.player.tick(now, sink)
    }

    pub fn pause(&mut self) {
        self.player.pause();
    }

    /// Rewind playback and clear what it drew.
    pub fn reset(&mut self) {
        self.reset_grid_state();
    }

    /// Deliver every remaining frame at once.
    pub fn skip_to_end<S: FrameSink>(&mut self, sink: S) {
        let sink = GridSink {
            grid: &mut self.grid,
            inner: sink,
        };
        self.player.skip_to_end(sink);
    }

    /// Change the playback rate, in frames per second.
    pub fn set_speed(&mut self, fps: f64) {
        self.player.set_speed(fps);
        self.config.animation_speed = self.player.speed();
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.config.algorithm = algorithm;
    }

    pub fn set_allow_diagonal(&mut self, allow: bool) {
        self.config.allow_diagonal = allow;
    }

    pub fn set_wall_density(&mut self, density: f64) {
        self.config.wall_density = density.clamp(0.0, 1.0);
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    pub fn stats(&self) -> PlaybackStats {
        self.player.stats()
    }

    pub fn state(&self) -> PlayState {
        self.player.state()
    }

    pub fn is_playing(&self) -> bool {
        self.player.is_playing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_anim::callbacks;
    use pathviz_core::NodeType;
    use std::time::Duration;

    fn seeded(cols: i32, rows: i32) -> Visualizer {
        let config = VisualizerConfig {
            seed: Some(11),
            ..Default::default()
        };
        Visualizer::new(config, cols, rows)
    }

    fn ignore() -> impl FrameSink {
        callbacks(|_| {}, || {})
    }

    #[test]
    fn run_loads_frames_and_stats() {
        let mut v = seeded(10, 10);
        let stats = v.run_algorithm();
        // Markers sit at (3, 3) and (6, 6).
        assert_eq!(stats.path_length, 7);
        assert!(stats.visited_count > 0);
        assert_eq!(v.player().len(), stats.visited_count + stats.path_length);
        assert_eq!(v.state(), PlayState::Idle);
    }

    #[test]
    fn skipping_paints_the_grid() {
        let mut v = seeded(10, 10);
        let stats = v.run_algorithm();
        let mut delivered = Vec::new();
        let mut done = 0;
        v.skip_to_end(callbacks(|f| delivered.push(f), || done += 1));
        assert_eq!(done, 1);
        assert_eq!(delivered.len(), stats.visited_count + stats.path_length);
        assert_eq!(v.grid().count_state(NodeState::Path), stats.path_length);
        for f in delivered.iter().filter(|f| f.is_path()) {
            assert_eq!(v.grid().state(f.pos), Some(NodeState::Path));
        }
    }

    #[test]
    fn ticks_paint_one_cell_at_a_time() {
        let mut v = seeded(8, 8);
        v.set_speed(100.0);
        v.run_algorithm();
        let t0 = Instant::now();
        assert_eq!(v.play(t0, ignore()), Tick::Continue);
        v.tick(t0 + Duration::from_millis(10), ignore());
        let painted = v.grid().count_state(NodeState::Visited);
        assert_eq!(painted, 1);
        v.pause();
        assert_eq!(v.state(), PlayState::Paused);
        assert_eq!(v.tick(t0 + Duration::from_millis(50), ignore()), Tick::Stop);
        assert_eq!(v.grid().count_state(NodeState::Visited), 1);
    }

    #[test]
    fn reset_rewinds_and_wipes_drawing() {
        let mut v = seeded(8, 8);
        v.run_algorithm();
        v.skip_to_end(ignore());
        v.reset();
        assert_eq!(v.player().cursor(), 0);
        assert_eq!(v.stats(), PlaybackStats::default());
        assert_eq!(v.grid().count_state(NodeState::Visited), 0);
        assert_eq!(v.grid().count_state(NodeState::Path), 0);
        assert!(!v.player().is_empty());
    }

    #[test]
    fn generation_drops_loaded_frames() {
        let mut v = seeded(20, 20);
        v.run_algorithm();
        assert!(v.generate_maze() > 0);
        assert!(v.player().is_empty());

        v.run_algorithm();
        v.set_wall_density(0.4);
        v.generate_random_walls();
        assert!(v.player().is_empty());
        assert_eq!(v.grid().count(NodeType::Start), 1);
        assert_eq!(v.grid().count(NodeType::End), 1);

        v.clear_grid();
        assert_eq!(v.grid().count(NodeType::Wall), 0);
    }

    #[test]
    fn same_seed_same_maze() {
        let mut a = seeded(21, 15);
        let mut b = seeded(21, 15);
        a.generate_maze();
        b.generate_maze();
        assert_eq!(a.grid().to_string(), b.grid().to_string());
    }

    #[test]
    fn editing_is_locked_while_playing() {
        let mut v = seeded(10, 10);
        v.run_algorithm();
        v.play(Instant::now(), ignore());
        assert!(!v.set_wall(Point::new(1, 1), true));
        v.pause();
        assert!(v.set_wall(Point::new(1, 1), true));
        assert!(v.set_start(Point::new(0, 0)));
        assert_eq!(v.grid().start(), Some(Point::new(0, 0)));
    }

    #[test]
    fn settings_apply_to_next_run() {
        let mut v = seeded(9, 9);
        v.set_algorithm(Algorithm::Bfs);
        v.set_allow_diagonal(true);
        let stats = v.run_algorithm();
        // Markers sit at (2, 2) and (6, 6).
        assert_eq!(stats.path_length, 5);
        assert_eq!(v.config().algorithm, Algorithm::Bfs);

        v.set_speed(5000.0);
        assert_eq!(v.config().animation_speed, 1000.0);
    }

    #[test]
    fn init_grid_resizes() {
        let mut v = seeded(10, 10);
        v.run_algorithm();
        v.init_grid(30, 12);
        assert_eq!((v.grid().cols(), v.grid().rows()), (30, 12));
        assert!(v.player().is_empty());
    }
}
