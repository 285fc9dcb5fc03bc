//! Shared utilities for CLI commands.

use gametree::generator::{generate_seeded, GenerateConfig, GenerateError};
use gametree::search::{drive, AlphaBetaSearch, MinimaxSearch, SearchOutcome};
use gametree::tree::{NodeType, Tree};
use log::info;
use rand::Rng;
use structopt::StructOpt;

use crate::cli::renderer::TextRenderer;

/// Shape and value parameters shared by every command that builds a tree.
#[derive(StructOpt)]
pub struct TreeArgs {
    #[structopt(long, default_value = "1")]
    pub min_children: usize,
    #[structopt(long, default_value = "3")]
    pub max_children: usize,
    #[structopt(short, long, default_value = "3")]
    pub depth: usize,
    #[structopt(long, default_value = "0", allow_hyphen_values = true)]
    pub min_val: i32,
    #[structopt(long, default_value = "20", allow_hyphen_values = true)]
    pub max_val: i32,
    #[structopt(long = "root", default_value = "max", help = "Node type of the root: max or min")]
    pub root_type: NodeType,
    #[structopt(short, long, help = "Seed for the tree generator (default: random)")]
    pub seed: Option<u64>,
}

impl TreeArgs {
    pub fn config(&self) -> GenerateConfig {
        GenerateConfig::default()
            .with_children(self.min_children, self.max_children)
            .with_depth(self.depth)
            .with_values(self.min_val, self.max_val)
            .with_root_type(self.root_type)
    }

    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::thread_rng().gen())
    }
}

/// Step pacing for the narrated commands.
#[derive(StructOpt)]
pub struct PlaybackArgs {
    #[structopt(
        long = "delay",
        default_value = "1000",
        help = "Delay between steps at speed 0, in milliseconds"
    )]
    pub delay_ms: u64,
    #[structopt(
        long,
        default_value = "1",
        help = "Playback speed from 0 (slowest) to 1 (fastest)"
    )]
    pub speed: f32,
}

pub(crate) fn build_tree(args: &TreeArgs) -> Result<(Tree, u64), GenerateError> {
    let seed = args.seed();
    let tree = generate_seeded(&args.config(), seed)?;
    info!("Generated tree from seed {}", seed);
    Ok((tree, seed))
}

#[derive(Clone, Copy, Debug)]
pub(crate) enum Strategy {
    Minimax,
    AlphaBeta,
}

/// Builds a tree, prints it, and narrates a search over it step by step.
pub(crate) fn run_narrated(tree_args: &TreeArgs, playback: &PlaybackArgs, strategy: Strategy) {
    let (mut tree, seed) = match build_tree(tree_args) {
        Ok(built) => built,
        Err(e) => exit_with_error(e),
    };
    println!("seed: {}", seed);
    println!("{}", tree);

    let mut renderer = TextRenderer::new(playback.delay_ms, playback.speed);
    let result = match strategy {
        Strategy::Minimax => {
            MinimaxSearch::new(&mut tree).and_then(|search| drive(search, &mut renderer))
        }
        Strategy::AlphaBeta => {
            AlphaBetaSearch::new(&mut tree).and_then(|search| drive(search, &mut renderer))
        }
    };
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => exit_with_error(e),
    };

    println!();
    println!("{}", tree);
    print_outcome(&outcome);
}

pub(crate) fn print_outcome(outcome: &SearchOutcome) {
    println!(
        "* Root value: {}\n* Best move: {}\n* Nodes visited: {}\n* Nodes pruned: {}\n* Steps: {}",
        outcome.root_value,
        outcome.best_child,
        outcome.stats.nodes_visited(),
        outcome.stats.nodes_pruned,
        outcome.stats.steps
    );
}

pub(crate) fn exit_with_error<E: std::fmt::Display>(error: E) -> ! {
    eprintln!("error: {}", error);
    std::process::exit(1);
}
