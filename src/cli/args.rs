//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    alpha_beta::AlphaBetaArgs, compare::CompareArgs, generate::GenerateArgs,
    minimax::MinimaxArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "gametree",
    about = "Generate random game trees and watch minimax and alpha-beta pruning evaluate them"
)]
pub enum GameTree {
    #[structopt(
        name = "generate",
        about = "Generate a random tree and print its outline and layout. The shape is controlled with `--min-children`, `--max-children` and `--depth`, leaf values with `--min-val` and `--max-val`. Pass `--seed` to reproduce a tree."
    )]
    Generate(GenerateArgs),
    #[structopt(
        name = "minimax",
        about = "Evaluate a generated tree with full-width minimax, narrating every step. `--speed` (0 to 1) shortens the `--delay` between steps."
    )]
    Minimax(MinimaxArgs),
    #[structopt(
        name = "alpha-beta",
        about = "Evaluate a generated tree with alpha-beta pruning, narrating every step including window updates and pruned branches."
    )]
    AlphaBeta(AlphaBetaArgs),
    #[structopt(
        name = "compare",
        about = "Run minimax and alpha-beta on the same trees for `--trees` consecutive seeds (default: 10), and report root values, visited nodes and pruned nodes."
    )]
    Compare(CompareArgs),
}

impl crate::cli::commands::Command for GameTree {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Generate(cmd),
            Minimax(cmd),
            AlphaBeta(cmd),
            Compare(cmd),
        }
    }
}
