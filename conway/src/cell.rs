// cell.rs - The two states a cell can be in

/// State of a single cell.
///
/// Discriminants match the one-byte-per-cell buffer layout used by
/// [`crate::kernel`], so `state as u8` is always 0 or 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CellState {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    pub fn toggled(self) -> CellState {
        match self {
            CellState::Alive => CellState::Dead,
            CellState::Dead => CellState::Alive,
        }
    }

    /// Any nonzero byte is alive.
    pub fn from_byte(byte: u8) -> CellState {
        if byte != 0 { CellState::Alive } else { CellState::Dead }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive { CellState::Alive } else { CellState::Dead }
    }
}

impl From<CellState> for u8 {
    fn from(state: CellState) -> u8 {
        state as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_a_cell_flips_its_state() {
        assert_eq!(CellState::Dead.toggled(), CellState::Alive);
        assert_eq!(CellState::Alive.toggled(), CellState::Dead);
    }

    #[test]
    fn any_nonzero_byte_is_alive() {
        assert_eq!(CellState::from_byte(0), CellState::Dead);
        assert_eq!(CellState::from_byte(1), CellState::Alive);
        assert_eq!(CellState::from_byte(255), CellState::Alive);
        assert_eq!(u8::from(CellState::Alive), 1);
        assert_eq!(u8::from(CellState::Dead), 0);
    }
}
