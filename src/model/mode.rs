use std::{
    error::Error as StdError,
    fmt::{Display, Formatter, Result as FmtResult},
};

use rosu_map::section::general::GameMode;

/// Error when requesting a difficulty calculation for a [`GameMode`] that is
/// not implemented.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnsupportedMode {
    pub mode: GameMode,
}

impl UnsupportedMode {
    pub const fn new(mode: GameMode) -> Self {
        Self { mode }
    }
}

impl StdError for UnsupportedMode {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        None
    }
}

impl Display for UnsupportedMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "cannot calculate difficulty for mode {:?}", self.mode)
    }
}
