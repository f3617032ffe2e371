/// Actions an observer can take during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the teacher early and return the best sample found so far.
    StopEarly,
}
