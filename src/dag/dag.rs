use crate::*;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use std::collections::HashMap;
use std::collections::HashSet;

/// Backward induction driver over the reachable states of a [`Sequential`]
/// domain.
///
/// States live in a petgraph arena addressed through a key index. Each edge
/// carries the joint action indices that lead from parent to child. Scoring
/// is memoized per state and never overwrites a score.
pub struct Dag<S: Sequential> {
    domain: S,
    graph: DiGraph<Node<S::Key>, Vec<usize>>,
    index: HashMap<S::Key, NodeIndex>,
    root: S::Key,
    verbose: bool,
}

impl<S: Sequential> Dag<S> {
    /// Spawns the root and expands everything reachable from it.
    pub fn new(domain: S, root: S::Key, verbose: bool) -> anyhow::Result<Self> {
        let mut dag = Self {
            domain,
            graph: DiGraph::new(),
            index: HashMap::new(),
            root: root.clone(),
            verbose,
        };
        dag.insert(root.clone());
        let n = dag.generate_subgraph(&root)?;
        dag.log(format_args!("generated {} nodes below {:?}", n, root));
        Ok(dag)
    }

    /// Expands every state reachable from `key` depth-first.
    ///
    /// Already expanded states are left alone; reaching a known state only
    /// records the new parent edge. Returns the number of states created.
    pub fn generate_subgraph(&mut self, key: &S::Key) -> anyhow::Result<usize> {
        let before = self.graph.node_count();
        let mut stack = vec![self.find(key)?];
        while let Some(parent) = stack.pop() {
            if self.expanded(parent) || self.graph[parent].is_terminal() {
                continue;
            }
            let node = &self.graph[parent];
            let actions = self.domain.actions(node);
            let successors = Indices::from(actions.iter().map(Vec::len).collect::<Vec<_>>())
                .map(|picks| {
                    let joint = picks
                        .iter()
                        .enumerate()
                        .map(|(p, i)| actions[p][*i].clone())
                        .collect::<Vec<_>>();
                    let child = self.domain.child(node, &joint);
                    (picks, child)
                })
                .collect::<Vec<_>>();
            let from = node.key().clone();
            for (picks, key) in successors {
                let child = match self.index.get(&key) {
                    Some(child) => *child,
                    None => {
                        log::trace!("new node {:?}", key);
                        let child = self.insert(key);
                        stack.push(child);
                        child
                    }
                };
                self.graph[child].adopt(from.clone());
                self.graph.add_edge(parent, child, picks);
            }
        }
        Ok(self.graph.node_count() - before)
    }

    /// Scores a state from its children's scores.
    ///
    /// Returns `Ok(false)` while any child is unscored. A state with a single
    /// distinct successor inherits its scores. Otherwise the children's
    /// scores form a payoff tensor over the joint actions, and every
    /// equilibrium of that game must agree on expected payoffs.
    pub fn set_scores(&mut self, key: &S::Key) -> anyhow::Result<bool> {
        let index = self.find(key)?;
        if self.graph[index].scores().is_some() {
            return Ok(true);
        }
        let edges = self
            .graph
            .edges(index)
            .map(|e| (e.weight().clone(), e.target()))
            .collect::<HashMap<Vec<usize>, NodeIndex>>();
        anyhow::ensure!(
            !edges.is_empty(),
            "non-terminal node {:?} has no successors",
            key
        );
        if edges.values().any(|c| self.graph[*c].scores().is_none()) {
            return Ok(false);
        }
        let children = edges.values().copied().collect::<HashSet<_>>();
        if let [only] = children.into_iter().collect::<Vec<_>>().as_slice() {
            let scores = self.graph[*only].scores().unwrap_or_default().to_vec();
            self.log(format_args!("{:?} inherits {:?}", key, scores));
            self.graph[index].score(scores, None)?;
            return Ok(true);
        }
        let game = Game::from(self.induced(index, &edges)?);
        let equilibria = game.find_all_equilibria().collect::<Vec<_>>();
        let Some(first) = equilibria.first() else {
            anyhow::bail!("no equilibrium in the subgame at {:?}", key);
        };
        let scores = first.payoffs(&game);
        for other in equilibria.iter().skip(1) {
            let diverged = other.payoffs(&game);
            anyhow::ensure!(
                scores
                    .iter()
                    .zip(diverged.iter())
                    .all(|(a, b)| game.tolerance().eq(*a, *b)),
                "equilibria at {:?} disagree on payoffs: {} pays {:?} but {} pays {:?}",
                key,
                first,
                scores,
                other,
                diverged
            );
        }
        let probs = first.concrete(game.shape());
        self.log(format_args!("{:?} scores {:?} playing {}", key, scores, probs));
        self.graph[index].score(scores, Some(probs))?;
        Ok(true)
    }

    /// Scores every unscored descendant of `key` bottom-up, then `key`.
    pub fn set_subscores(&mut self, key: &S::Key) -> anyhow::Result<()> {
        let mut visiting = HashSet::new();
        let mut stack = vec![(self.find(key)?, false)];
        while let Some((index, expanded)) = stack.pop() {
            if self.graph[index].scores().is_some() {
                continue;
            }
            if expanded {
                let key = self.graph[index].key().clone();
                anyhow::ensure!(
                    self.set_scores(&key)?,
                    "children of {:?} remain unscored",
                    key
                );
                visiting.remove(&index);
            } else {
                visiting.insert(index);
                stack.push((index, true));
                for child in self.graph.neighbors(index) {
                    if self.graph[child].scores().is_some() {
                        continue;
                    }
                    anyhow::ensure!(
                        !visiting.contains(&child),
                        "cycle through {:?}",
                        self.graph[child].key()
                    );
                    stack.push((child, false));
                }
            }
        }
        Ok(())
    }
}

impl<S: Sequential> Dag<S> {
    pub fn root(&self) -> &S::Key {
        &self.root
    }
    pub fn domain(&self) -> &S {
        &self.domain
    }
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
    pub fn node(&self, key: &S::Key) -> Option<&Node<S::Key>> {
        self.index.get(key).map(|i| &self.graph[*i])
    }
    pub fn nodes(&self) -> impl Iterator<Item = &Node<S::Key>> {
        self.graph.node_weights()
    }
    pub fn status(&self, key: &S::Key) -> Status {
        match self.node(key) {
            None => Status::Unvisited,
            Some(node) if node.scores().is_some() => Status::Scored,
            Some(_) => Status::Generated,
        }
    }
    /// Children of `key` with the joint action indices leading to each,
    /// ordered by joint action.
    pub fn successors(&self, key: &S::Key) -> anyhow::Result<Vec<(Vec<usize>, S::Key)>> {
        let index = self.find(key)?;
        let mut successors = self
            .graph
            .edges(index)
            .map(|e| (e.weight().clone(), self.graph[e.target()].key().clone()))
            .collect::<Vec<_>>();
        successors.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(successors)
    }
}

impl<S: Sequential> Dag<S> {
    fn find(&self, key: &S::Key) -> anyhow::Result<NodeIndex> {
        self.index
            .get(key)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("unknown node {:?}", key))
    }
    fn insert(&mut self, key: S::Key) -> NodeIndex {
        let index = self.graph.add_node(self.domain.spawn(&key));
        self.index.insert(key, index);
        index
    }
    fn expanded(&self, index: NodeIndex) -> bool {
        self.graph.edges(index).next().is_some()
    }
    /// Payoff tensor of the one-shot game at `index`.
    fn induced(&self, index: NodeIndex, edges: &HashMap<Vec<usize>, NodeIndex>) -> anyhow::Result<Payoffs> {
        let dims = self
            .domain
            .actions(&self.graph[index])
            .iter()
            .map(Vec::len)
            .collect::<Vec<_>>();
        let mut data = Vec::with_capacity(dims.iter().product::<usize>() * dims.len());
        for joint in Indices::from(dims.clone()) {
            let child = edges.get(&joint).ok_or_else(|| {
                anyhow::anyhow!(
                    "{:?} has no successor for joint action {:?}",
                    self.graph[index].key(),
                    joint
                )
            })?;
            let scores = self.graph[*child].scores().unwrap_or_default();
            anyhow::ensure!(
                scores.len() == dims.len(),
                "{:?} scores {} players but the game has {}",
                self.graph[*child].key(),
                scores.len(),
                dims.len()
            );
            data.extend_from_slice(scores);
        }
        Payoffs::new(dims, data)
    }
    fn log(&self, message: std::fmt::Arguments) {
        if self.verbose {
            log::info!("{}", message)
        } else {
            log::debug!("{}", message)
        }
    }
}
