/// Progress of a state through generation and scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Unvisited,
    Generated,
    Scored,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Unvisited => write!(f, "unvisited"),
            Status::Generated => write!(f, "generated"),
            Status::Scored => write!(f, "scored"),
        }
    }
}
