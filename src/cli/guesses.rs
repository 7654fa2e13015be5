use crate::*;
use clap::Args;

#[derive(Args, Debug)]
pub struct GuessArgs {
    /// Start from this state, as JSON; the root by default
    #[arg(long)]
    pub node: Option<String>,
    /// List the successors of the state
    #[arg(long)]
    pub childs: bool,
    /// Score the state from its immediate successors, which must be scored
    #[arg(long)]
    pub score: bool,
    /// Score the state and everything below it
    #[arg(long)]
    pub solve: bool,
    /// Count the states reachable from the state
    #[arg(long)]
    pub count: bool,
    #[arg(short, long)]
    pub verbose: bool,
}

impl GuessArgs {
    pub fn run(self) -> anyhow::Result<()> {
        let node = match self.node.as_deref() {
            Some(json) => serde_json::from_str::<Guess>(json)?,
            None => Guess::Root,
        };
        let mut dag = Dag::new(Guessing, node, self.verbose)?;
        if self.count {
            println!("states: {}", dag.len());
        }
        if self.childs {
            for (joint, child) in dag.successors(&node)? {
                println!("{:?} -> {}", joint, child);
            }
        }
        if self.score {
            if dag.set_scores(&node)? {
                self.show(&dag, &node);
            } else {
                println!("{} waits on unscored successors", node);
            }
        }
        if self.solve {
            dag.set_subscores(&node)?;
            self.show(&dag, &node);
        }
        Ok(())
    }

    fn show(&self, dag: &Dag<Guessing>, node: &Guess) {
        if let Some(scored) = dag.node(node) {
            println!("{} scores {:?}", node, scored.scores().unwrap_or_default());
            if let Some(probs) = scored.probs() {
                println!("{} plays {}", node, probs);
            }
        }
    }
}
