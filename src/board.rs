//! Tic-tac-toe board state, one `BitBoard` per mark.

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Mark, Move};
use crate::config::{BOARD_SIZE, NUM_CELLS};
use core::fmt;
use core::str::FromStr;

/// Bitboard type used for the per-mark cell sets.
pub type BB = BitBoard<u16, BOARD_SIZE>;

/// Cell contents in row-major order, `None` for an empty cell.
pub type Rows = [[Option<Mark>; BOARD_SIZE]; BOARD_SIZE];

/// Immutable 3×3 board. Playing a move yields a new `Board`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    x: BB,
    o: BB,
}

impl Board {
    /// The empty starting board.
    pub fn new() -> Self {
        Board {
            x: BB::new(),
            o: BB::new(),
        }
    }

    /// Build a board from explicit rows, rejecting mark counts that cannot
    /// occur when X moves first.
    pub fn from_rows(rows: Rows) -> Result<Self, BoardError> {
        let mut x = BB::new();
        let mut o = BB::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    Some(Mark::X) => x.set(r, c)?,
                    Some(Mark::O) => o.set(r, c)?,
                    None => {}
                }
            }
        }
        Self::from_masks(x, o)
    }

    /// Build a board from the two mark sets, validating them.
    pub fn from_masks(x: BB, o: BB) -> Result<Self, BoardError> {
        if !(x & o).is_empty() {
            return Err(BoardError::Overlap);
        }
        let (nx, no) = (x.count_ones(), o.count_ones());
        if nx < no || nx > no + 1 {
            return Err(BoardError::MarkImbalance { x: nx, o: no });
        }
        Ok(Board { x, o })
    }

    /// Contents of the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<Option<Mark>, BoardError> {
        if self.x.get(row, col)? {
            Ok(Some(Mark::X))
        } else if self.o.get(row, col)? {
            Ok(Some(Mark::O))
        } else {
            Ok(None)
        }
    }

    /// Cells held by `mark`.
    pub fn marks(&self, mark: Mark) -> BB {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// Number of cells held by `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.marks(mark).count_ones()
    }

    /// Cells that are still empty.
    pub fn empty_cells(&self) -> BB {
        !(self.x | self.o)
    }

    pub fn is_full(&self) -> bool {
        (self.x | self.o).is_full()
    }

    /// Copy of the board contents as rows.
    pub fn rows(&self) -> Rows {
        let mut rows = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (r, c) in self.x.iter_set_bits() {
            rows[r][c] = Some(Mark::X);
        }
        for (r, c) in self.o.iter_set_bits() {
            rows[r][c] = Some(Mark::O);
        }
        rows
    }

    /// New board with `mark` added at `mv`. Occupancy is the caller's
    /// concern; only the coordinate is checked.
    pub(crate) fn place(self, mv: Move, mark: Mark) -> Result<Self, BoardError> {
        let mut next = self;
        match mark {
            Mark::X => next.x = next.x.with(mv.row, mv.col)?,
            Mark::O => next.o = next.o.with(mv.row, mv.col)?,
        }
        Ok(next)
    }
}

/// Parses nine cells in row-major order. `X`/`x` and `O`/`o`/`0` are marks,
/// `.`, `-` and `_` are empty; whitespace, `/`, `|` and `,` separate rows.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; NUM_CELLS];
        let mut len = 0;
        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' | '0' => Some(Mark::O),
                '.' | '-' | '_' => None,
                '/' | '|' | ',' => continue,
                c if c.is_whitespace() => continue,
                c => return Err(BoardError::InvalidCell(c)),
            };
            if len < NUM_CELLS {
                cells[len] = cell;
            }
            len += 1;
        }
        if len != NUM_CELLS {
            return Err(BoardError::InvalidLength(len));
        }
        let rows = core::array::from_fn(|r| core::array::from_fn(|c| cells[r * BOARD_SIZE + c]));
        Board::from_rows(rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let ch = cell.map_or('.', Mark::to_char);
                if c + 1 < BOARD_SIZE {
                    write!(f, "{} ", ch)?;
                } else {
                    write!(f, "{}", ch)?;
                }
            }
            if r + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();
        write!(f, "Board(")?;
        for (r, row) in rows.iter().enumerate() {
            if r > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell.map_or('.', Mark::to_char))?;
            }
        }
        write!(f, ")")
    }
}
