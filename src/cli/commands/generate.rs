//! Generate command - build a random tree and print its outline and layout.

use gametree::layout::{apply_layout, LayoutConfig};
use structopt::StructOpt;

use super::util::{build_tree, exit_with_error, TreeArgs};
use super::Command;

#[derive(StructOpt)]
pub struct GenerateArgs {
    #[structopt(flatten)]
    pub tree: TreeArgs,
    #[structopt(long, help = "Skip the node positions")]
    pub no_layout: bool,
}

impl Command for GenerateArgs {
    fn execute(self) {
        let (mut tree, seed) = match build_tree(&self.tree) {
            Ok(built) => built,
            Err(e) => exit_with_error(e),
        };

        println!(
            "seed: {}, nodes: {}, depth: {}, values: {}",
            seed,
            tree.node_count(),
            tree.depth(),
            tree.value_range()
        );
        println!("{}", tree);

        if self.no_layout {
            return;
        }

        let config = LayoutConfig::for_tree(&tree);
        apply_layout(&mut tree, &config);
        for node in tree.nodes() {
            if let Some(position) = node.position() {
                println!("{}: ({:.3}, {:.2})", node.id(), position.x, position.y);
            }
        }
    }
}
