//! Termination signals turned into a flag, so a session still runs its
//! teardown when the process is asked to stop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::warn;

#[derive(Debug, Clone, Default)]
pub struct Interrupt(Arc<AtomicBool>);

impl Interrupt {
    pub fn new() -> Self {
        Interrupt::default()
    }

    /// Route SIGINT, SIGTERM and SIGHUP to a new flag instead of the default
    /// action.
    pub fn install() -> Self {
        let interrupt = Interrupt::new();
        let flag = interrupt.clone();
        if let Err(e) = ctrlc::set_handler(move || flag.trigger()) {
            warn!("could not set termination handler: {}", e);
        }
        interrupt
    }

    pub fn trigger(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
