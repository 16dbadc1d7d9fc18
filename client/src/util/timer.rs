//! One-shot timers for the hydrated build.
//!
//! TRADE-OFFS
//! ==========
//! Timers are browser-only; during SSR a scheduled callback is dropped
//! without running, which keeps server rendering deterministic. Callbacks
//! that touch signals should use `try_update` so a timer outliving its
//! component is a no-op.

/// Run `f` once after `delay_ms` milliseconds.
pub fn after(delay_ms: u32, f: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(delay_ms, f).forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay_ms, f);
    }
}
