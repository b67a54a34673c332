//! Status codes for the integration loop.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The time component reached `t_max`.
    Success,
    /// The configured step cap was hit before reaching `t_max`; the returned
    /// state is wherever the integration stopped.
    MaxStepsReached,
}
