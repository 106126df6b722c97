use derive_more::{Display, Error};

/// A specialized [`Result`](core::result::Result) for this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors surfaced by rainbow panel devices.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The LED writer behind a panel rejected a frame.
    #[display("LED panel write failed")]
    PanelWrite,

    /// A frame was written before [`Panel::begin`](crate::panel::Panel::begin) was called.
    #[display("LED panel used before begin()")]
    PanelNotStarted,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, fmt: defmt::Formatter<'_>) {
        match self {
            Self::PanelWrite => defmt::write!(fmt, "PanelWrite"),
            Self::PanelNotStarted => defmt::write!(fmt, "PanelNotStarted"),
        }
    }
}
