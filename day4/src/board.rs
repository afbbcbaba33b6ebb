use std::collections::HashSet;

use common::{Error, Result, Table};

pub type Id = usize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub value: u32,
    pub marked: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardState {
    NoWin,
    Win,
}

/// A square grid of distinct numbers. Holds no cells until it has been loaded.
#[derive(Clone, Debug)]
pub struct Board {
    id: Id,
    size: usize,
    cells: Option<Table<Cell>>,
}

impl Board {
    pub fn new(id: Id, size: usize) -> Self {
        Self {
            id,
            size,
            cells: None,
        }
    }

    pub fn parse(id: Id, size: usize, data: &str) -> Result<Self> {
        let mut board = Self::new(id, size);
        board.load(data)?;
        Ok(board)
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_loaded(&self) -> bool {
        self.cells.is_some()
    }

    /// Reads `size` rows of `size` whitespace-separated numbers. Blank lines are skipped.
    pub fn load(&mut self, data: &str) -> Result<()> {
        self.cells = None;

        let rows: Vec<Vec<Cell>> = data
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| self.parse_row(line))
            .collect::<Result<_>>()?;

        if rows.len() != self.size {
            return Err(Error::malformed(format!(
                "board {} has {} rows, expected {}",
                self.id,
                rows.len(),
                self.size
            )));
        }

        let mut seen = HashSet::new();
        if let Some(cell) = rows.iter().flatten().find(|cell| !seen.insert(cell.value)) {
            return Err(Error::malformed(format!(
                "board {} contains {} more than once",
                self.id, cell.value
            )));
        }

        self.cells = Some(Table::from_rows(rows)?);
        Ok(())
    }

    fn parse_row(&self, line: &str) -> Result<Vec<Cell>> {
        let row = line
            .split_ascii_whitespace()
            .map(|token| {
                token
                    .parse()
                    .map(|value| Cell {
                        value,
                        marked: false,
                    })
                    .map_err(|_| {
                        Error::malformed(format!("board {} has invalid number '{}'", self.id, token))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        if row.len() != self.size {
            return Err(Error::malformed(format!(
                "board {} has a row with {} columns, expected {}",
                self.id,
                row.len(),
                self.size
            )));
        }

        Ok(row)
    }

    /// Marks the cell holding `number`. Numbers not on the board are ignored.
    pub fn mark(&mut self, number: u32) -> BoardState {
        if let Some(cell) = self
            .cells
            .iter_mut()
            .flat_map(|cells| cells.iter_mut())
            .find(|cell| cell.value == number)
        {
            cell.marked = true;
        }

        self.state()
    }

    pub fn state(&self) -> BoardState {
        let cells = match &self.cells {
            Some(cells) => cells,
            None => return BoardState::NoWin,
        };

        let full_row = cells.rows().any(|row| row.iter().all(|cell| cell.marked));
        let full_column = cells
            .columns()
            .any(|mut column| column.all(|cell| cell.marked));

        if full_row || full_column {
            BoardState::Win
        } else {
            BoardState::NoWin
        }
    }

    pub fn unmarked_sum(&self) -> u64 {
        self.cells
            .iter()
            .flat_map(|cells| cells.iter())
            .filter(|cell| !cell.marked)
            .map(|cell| u64::from(cell.value))
            .sum()
    }

    /// Clears every mark so the board can be played again.
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut().flat_map(|cells| cells.iter_mut()) {
            cell.marked = false;
        }
    }

    /// Cells in column-major order: down the first column, then down the next.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells
            .iter()
            .flat_map(|cells| cells.columns().flatten())
    }
}
