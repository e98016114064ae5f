/// Source of sample timestamps, in seconds.
///
/// Every tick of the sampler takes exactly one reading of its clock, and that value becomes
/// the shared timestamp of all sensor readings fused in the tick.
pub trait Clock: Send + Sync {
    /// Returns the current time in seconds.
    fn now_secs(&self) -> f64;
}
