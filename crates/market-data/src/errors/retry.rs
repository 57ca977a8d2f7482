/// Classification for retry policy.
///
/// Used by the registry to decide whether another provider should be asked
/// after a failure.
///
/// | Class | Try Next Provider? |
/// |-------|-------------------|
/// | `Never` | No |
/// | `WithBackoff` | Yes |
/// | `NextProvider` | Yes |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// The request itself is wrong (unknown symbol, bad data). Asking another
    /// provider won't help.
    Never,

    /// Transient failure such as rate limiting (429) or a timeout. The
    /// provider should be left alone for a while; the next one is asked.
    WithBackoff,

    /// This provider can't serve the request but another one might.
    NextProvider,
}

impl RetryClass {
    pub fn tries_next_provider(self) -> bool {
        !matches!(self, RetryClass::Never)
    }
}
