//! Alpha-beta command - narrate an evaluation with alpha-beta pruning.

use structopt::StructOpt;

use super::util::{run_narrated, PlaybackArgs, Strategy, TreeArgs};
use super::Command;

#[derive(StructOpt)]
pub struct AlphaBetaArgs {
    #[structopt(flatten)]
    pub tree: TreeArgs,
    #[structopt(flatten)]
    pub playback: PlaybackArgs,
}

impl Command for AlphaBetaArgs {
    fn execute(self) {
        run_narrated(&self.tree, &self.playback, Strategy::AlphaBeta);
    }
}
