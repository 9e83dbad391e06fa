/// Progress of the bootstrap sequence.
///
/// Stages are strictly ordered; each one requires the objects produced by the
/// previous one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Stage {
    Start,
    AdapterAcquired,
    DeviceAcquired,
    CanvasFound,
    ContextAcquired,
    Configured,
    ShaderCompiled,
    PipelineBuilt,
    PassDescribed,
    Rendered,
}

impl Stage {
    /// Logs the transition and returns the new stage.
    pub(crate) fn enter(self, next: Stage) -> Stage {
        debug_assert!(next > self, "stage went backwards: {self:?} -> {next:?}");
        log::debug!("bootstrap: {self:?} -> {next:?}");
        next
    }
}
