//! Optional instrumentation for the pipeline stages.
//!
//! With the `tracing` feature, `stage_span!` opens an info span and
//! `stage_event!` records an info event tagged with the stage name. Without
//! the feature both expand to no-ops; event field expressions are still
//! evaluated so call sites compile without unused-variable warnings.

#[cfg(feature = "tracing")]
macro_rules! stage_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::info_span!($name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! stage_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::DisabledSpan
    };
}

#[cfg(feature = "tracing")]
macro_rules! stage_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info!(stage = $name, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! stage_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
}

pub(crate) use stage_event;
pub(crate) use stage_span;

/// Span stand-in used when the `tracing` feature is off.
#[cfg(not(feature = "tracing"))]
pub struct DisabledSpan;

#[cfg(not(feature = "tracing"))]
impl DisabledSpan {
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
