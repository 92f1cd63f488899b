/// The externally observable lifecycle of a driven action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    /// Not bound to a target.
    Idle,
    /// Bound and advancing.
    Running,
    /// Completion observed; awaiting `stop`.
    Done,
}
