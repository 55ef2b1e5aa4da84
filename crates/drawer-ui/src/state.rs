use std::fmt;

/// The two committed resting states of the drawer.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DrawerState {
    /// Resting at the down position.
    #[default]
    Collapsed = 0,
    /// Resting at the up position.
    Expanded = 1,
}

impl DrawerState {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn opposite(self) -> Self {
        match self {
            DrawerState::Collapsed => DrawerState::Expanded,
            DrawerState::Expanded => DrawerState::Collapsed,
        }
    }
}

impl From<DrawerState> for u8 {
    fn from(state: DrawerState) -> u8 {
        state.as_u8()
    }
}

impl TryFrom<u8> for DrawerState {
    type Error = InvalidDrawerState;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DrawerState::Collapsed),
            1 => Ok(DrawerState::Expanded),
            other => Err(InvalidDrawerState(other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidDrawerState(pub u8);

impl fmt::Display for InvalidDrawerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid drawer state {}; expected 0 or 1", self.0)
    }
}

impl std::error::Error for InvalidDrawerState {}

/// What a gesture release decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Committed to the collapsed state.
    Collapsed,
    /// Committed to the expanded state.
    Expanded,
    /// Settled back to the resting position it started from.
    Reset,
}

impl ReleaseOutcome {
    /// The state committed by this release, if any.
    pub fn committed_state(self) -> Option<DrawerState> {
        match self {
            ReleaseOutcome::Collapsed => Some(DrawerState::Collapsed),
            ReleaseOutcome::Expanded => Some(DrawerState::Expanded),
            ReleaseOutcome::Reset => None,
        }
    }
}
