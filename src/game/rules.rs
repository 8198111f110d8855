//! Win and draw detection for square grids.
//!
//! Lines are always scanned in the same order: rows top to bottom, columns left to right,
//! then the main diagonal and the anti-diagonal. When several lines are complete at once
//! (impossible in regular play) the first one in that order wins.

use std::fmt::{Display, Formatter};

use generic_array::typenum::Unsigned;
use generic_array::ArrayLength;
use smallvec::SmallVec;

use super::{BoardCell, Grid, GridIndex, WithGridIndex};

/// A row, column or diagonal of a square grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Col(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row(row) => write!(f, "row {}", row),
            Line::Col(col) => write!(f, "column {}", col),
            Line::MainDiagonal => f.write_str("main diagonal"),
            Line::AntiDiagonal => f.write_str("anti-diagonal"),
        }
    }
}

impl Line {
    /// All lines of an `n`×`n` grid in scan order.
    pub fn all(n: usize) -> impl Iterator<Item = Line> {
        (0..n)
            .map(Line::Row)
            .chain((0..n).map(Line::Col))
            .chain([Line::MainDiagonal, Line::AntiDiagonal])
    }

    /// Cells of the line together with their indices.
    pub fn cells<'a, T, N: ArrayLength>(
        &self,
        grid: &'a Grid<T, N, N>,
    ) -> SmallVec<[(GridIndex, &'a T); 3]> {
        let last = N::to_usize().saturating_sub(1);
        match *self {
            Line::Row(row) => grid.right_iter((row, 0).into()).indexed().collect(),
            Line::Col(col) => grid.bottom_iter((0, col).into()).indexed().collect(),
            Line::MainDiagonal => grid.bottom_right_iter((0, 0).into()).indexed().collect(),
            Line::AntiDiagonal => grid.bottom_left_iter((0, last).into()).indexed().collect(),
        }
    }

    /// Returns the mark filling the whole line, if any.
    pub fn owner<T, N>(&self, grid: &Grid<BoardCell<T>, N, N>) -> Option<T>
    where
        T: Copy + PartialEq,
        N: ArrayLength,
    {
        let cells = self.cells(grid);
        let (_, first) = cells.first()?;
        let mark = first.0?;
        cells
            .iter()
            .all(|(_, cell)| cell.0 == Some(mark))
            .then_some(mark)
    }
}

/// Returns the first complete line and its mark.
pub fn winning_line<T, N>(grid: &Grid<BoardCell<T>, N, N>) -> Option<(Line, T)>
where
    T: Copy + PartialEq,
    N: ArrayLength,
{
    Line::all(N::to_usize()).find_map(|line| line.owner(grid).map(|mark| (line, mark)))
}

pub fn winner<T, N>(grid: &Grid<BoardCell<T>, N, N>) -> Option<T>
where
    T: Copy + PartialEq,
    N: ArrayLength,
{
    winning_line(grid).map(|(_, mark)| mark)
}

/// The grid is full and nobody owns a line.
pub fn is_draw<T, N>(grid: &Grid<BoardCell<T>, N, N>) -> bool
where
    T: Copy + PartialEq,
    N: ArrayLength,
{
    winner(grid).is_none() && grid.is_full()
}
