use crate::Board;

/// Draws the board with one character per cell: `x` for walls, the ids of the
/// players on occupied cells, and `.` for free cells.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, cell) in self.cells().enumerate() {
            if idx > 0 && idx % self.width() as usize == 0 {
                writeln!(f)?;
            }
            if cell.is_wall() {
                write!(f, "x")?;
            } else if cell.occupants().is_empty() {
                write!(f, ".")?;
            } else {
                for id in cell.occupants() {
                    write!(f, "{}", id)?;
                }
            }
        }
        Ok(())
    }
}
