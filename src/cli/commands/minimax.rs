//! Minimax command - narrate a full-width minimax evaluation.

use structopt::StructOpt;

use super::util::{run_narrated, PlaybackArgs, Strategy, TreeArgs};
use super::Command;

#[derive(StructOpt)]
pub struct MinimaxArgs {
    #[structopt(flatten)]
    pub tree: TreeArgs,
    #[structopt(flatten)]
    pub playback: PlaybackArgs,
}

impl Command for MinimaxArgs {
    fn execute(self) {
        run_narrated(&self.tree, &self.playback, Strategy::Minimax);
    }
}
