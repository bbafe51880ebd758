//! Headless runner
//!
//! Drives [`Pendulum`] without a browser: a seeded random chain, a fixed
//! 60 Hz frame cadence and recording surfaces in place of canvases.

use std::path::PathBuf;

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::app::Pendulum;
use crate::polar_to_cartesian;
use crate::renderer::{DrawOp, RecordingSurface};
use crate::settings::Settings;
use crate::sim::{Command, SimState, apply_command};

/// Viewport the headless runner pretends to have
pub const VIEWPORT: (f64, f64) = (1280.0, 720.0);
/// Frame spacing (ms)
pub const FRAME_MS: f64 = 1000.0 / 60.0;

/// Segment length range for random chains (pixels)
const MIN_SEGMENT: f64 = 20.0;
const MAX_SEGMENT: f64 = 120.0;

/// Command-line options
#[derive(Debug, Clone, PartialEq)]
pub struct RunArgs {
    pub settings: Option<PathBuf>,
    pub seed: u64,
    pub points: usize,
    pub frames: u32,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            settings: None,
            seed: 1,
            points: 3,
            frames: 600,
        }
    }
}

impl RunArgs {
    /// Parse `[settings.json] [--seed N] [--points N] [--frames N]`
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, String> {
        let mut out = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let mut value = |name: &str| {
                args.next()
                    .ok_or_else(|| format!("{} needs a value", name))
            };
            match arg.as_str() {
                "--seed" => out.seed = parse_num(&value("--seed")?, "--seed")?,
                "--points" => out.points = parse_num(&value("--points")?, "--points")?,
                "--frames" => out.frames = parse_num(&value("--frames")?, "--frames")?,
                flag if flag.starts_with("--") => return Err(format!("unknown option {}", flag)),
                path => {
                    if out.settings.is_some() {
                        return Err(format!("unexpected argument {}", path));
                    }
                    out.settings = Some(PathBuf::from(path));
                }
            }
        }
        Ok(out)
    }
}

fn parse_num<T: std::str::FromStr>(text: &str, name: &str) -> Result<T, String> {
    text.parse()
        .map_err(|_| format!("{} expects a number, got {:?}", name, text))
}

/// Random chain of `count` joints hanging off `center`
pub fn random_chain(seed: u64, center: DVec2, count: usize) -> Vec<DVec2> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut prev = center;
    (0..count)
        .map(|_| {
            let length = rng.random_range(MIN_SEGMENT..MAX_SEGMENT);
            let theta = rng.random_range(0.0..std::f64::consts::TAU);
            prev += polar_to_cartesian(length, theta);
            prev
        })
        .collect()
}

/// Outcome of a headless run
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub frames: u32,
    /// Lines stroked on the trace surface
    pub trace_segments: usize,
    /// Total length of the trace (pixels)
    pub trace_length: f64,
    pub state: SimState,
}

/// Build a random chain, start it and run `args.frames` frames
pub fn run(args: &RunArgs, settings: Settings) -> RunSummary {
    let mut pendulum = Pendulum::new(VIEWPORT.0, VIEWPORT.1, settings);
    for p in random_chain(args.seed, pendulum.state.center, args.points) {
        pendulum.pointer_down(p.x, p.y);
    }
    apply_command(&mut pendulum.state, Command::ToggleRun);

    let mut primary = RecordingSurface::new();
    let mut trace = RecordingSurface::new();
    for frame in 0..args.frames {
        pendulum.frame(frame as f64 * FRAME_MS, &mut primary, &mut trace);
        // Only the trace is summarised; keep the pendulum history bounded
        primary.take_ops();
    }

    let trace_length: f64 = trace
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Line { from, to } => Some(from.distance(*to)),
            _ => None,
        })
        .sum();

    log::info!(
        "Ran {} frames: {} trace segments, tick {:.3}",
        args.frames,
        trace.line_count(),
        pendulum.state.clock.tick
    );

    RunSummary {
        seed: args.seed,
        frames: args.frames,
        trace_segments: trace.line_count(),
        trace_length,
        state: pendulum.state,
    }
}
