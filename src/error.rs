use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// No attached device matched the vendor/model allow-list.
    #[error("could not find any LG monitors")]
    NoMonitors,

    #[error("unable to get USB device list: {0}")]
    Enumerate(#[source] rusb::Error),

    #[error("failed to open monitor: {0}")]
    Open(#[source] rusb::Error),

    #[error("failed to claim interface {interface}: {source:?} ({source})")]
    Claim {
        interface: u8,
        #[source]
        source: rusb::Error,
    },

    #[error("{request} transfer failed: {source}")]
    Transfer {
        request: &'static str,
        #[source]
        source: rusb::Error,
    },

    /// The device moved fewer bytes than a full brightness report.
    #[error("short brightness report: expected {expected} bytes, got {actual}")]
    ShortReport { expected: usize, actual: usize },

    #[error("monitor interface is not claimed")]
    NotClaimed,

    /// A termination signal arrived before the adjustment was written.
    #[error("interrupted")]
    Interrupted,

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
