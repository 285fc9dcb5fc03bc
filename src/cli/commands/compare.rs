//! Compare command - run minimax and alpha-beta over the same trees.

use std::time::{Duration, Instant};

use gametree::generator::generate_seeded;
use gametree::search::{
    drive, AlphaBetaSearch, MinimaxSearch, SearchError, SearchObserver, SearchOutcome,
};
use gametree::tree::{NodeId, Tree};
use rustc_hash::FxHashSet;
use structopt::StructOpt;

use super::util::{exit_with_error, TreeArgs};
use super::Command;

#[derive(StructOpt)]
pub struct CompareArgs {
    #[structopt(flatten)]
    pub tree: TreeArgs,
    #[structopt(
        short = "n",
        long,
        default_value = "10",
        help = "Number of trees, generated from consecutive seeds"
    )]
    pub trees: u64,
}

/// Collects the distinct nodes a search looked at.
#[derive(Default)]
struct VisitTracker {
    visited: FxHashSet<NodeId>,
    pruned: usize,
}

impl SearchObserver for VisitTracker {
    fn on_descend(&mut self, _tree: &Tree, node: NodeId) {
        self.visited.insert(node);
    }

    fn on_value_assigned(&mut self, _tree: &Tree, node: NodeId, _value: i32) {
        self.visited.insert(node);
    }

    fn on_pruned(&mut self, tree: &Tree, node: NodeId) {
        self.pruned += 1 + tree.descendant_count(node);
    }
}

impl Command for CompareArgs {
    fn execute(self) {
        let config = self.tree.config();
        let first_seed = self.tree.seed();

        let mut total_nodes = 0;
        let mut total_minimax = 0;
        let mut total_alpha_beta = 0;
        let mut total_pruned = 0;
        let mut minimax_duration = Duration::from_secs(0);
        let mut alpha_beta_duration = Duration::from_secs(0);

        for seed in first_seed..first_seed.saturating_add(self.trees) {
            let mut tree = match generate_seeded(&config, seed) {
                Ok(tree) => tree,
                Err(e) => exit_with_error(e),
            };

            let mut minimax = VisitTracker::default();
            let started = Instant::now();
            let full = run(MinimaxSearch::new(&mut tree).and_then(|s| drive(s, &mut minimax)));
            minimax_duration += started.elapsed();

            tree.reset_search();

            let mut alpha_beta = VisitTracker::default();
            let started = Instant::now();
            let pruned =
                run(AlphaBetaSearch::new(&mut tree).and_then(|s| drive(s, &mut alpha_beta)));
            alpha_beta_duration += started.elapsed();

            let agree =
                full.root_value == pruned.root_value && full.best_child == pruned.best_child;
            println!(
                "seed: {}, nodes: {}, root value: {}, best move: {}, minimax visited: {}, alpha-beta visited: {}, pruned: {}{}",
                seed,
                tree.node_count(),
                pruned.root_value,
                pruned.best_child,
                minimax.visited.len(),
                alpha_beta.visited.len(),
                alpha_beta.pruned,
                if agree { "" } else { " (MISMATCH)" }
            );

            total_nodes += tree.node_count();
            total_minimax += minimax.visited.len();
            total_alpha_beta += alpha_beta.visited.len();
            total_pruned += alpha_beta.pruned;
        }

        println!(
            "total nodes: {}, minimax visited: {} in {:?}, alpha-beta visited: {} in {:?}, pruned: {} ({:.1}%)",
            total_nodes,
            total_minimax,
            minimax_duration,
            total_alpha_beta,
            alpha_beta_duration,
            total_pruned,
            percentage(total_pruned, total_nodes)
        );
    }
}

fn run(result: Result<SearchOutcome, SearchError>) -> SearchOutcome {
    match result {
        Ok(outcome) => outcome,
        Err(e) => exit_with_error(e),
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        100.0 * part as f64 / whole as f64
    }
}
