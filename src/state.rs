/// Whether the chip was found and whether its time can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidityState {
    /// No chip answered during initialization (default until then).
    #[default]
    NotFound,
    /// The chip answers but its oscillator was stopped, so the time was lost.
    Invalid,
    /// Chip present and time trustworthy.
    Ok,
}

impl ValidityState {
    /// Classify the probe register of a chip that answered.
    pub(crate) fn from_probe(probe: u8) -> Self {
        if probe & crate::BitFlags::OSC_STOP != 0 {
            ValidityState::Invalid
        } else {
            ValidityState::Ok
        }
    }

    /// Word used in the initialization log line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidityState::NotFound => "not found",
            ValidityState::Invalid => "invalid",
            ValidityState::Ok => "ok",
        }
    }
}
