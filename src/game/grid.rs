use generic_array::typenum::Unsigned;
use generic_array::{ArrayLength, GenericArray};
use std::fmt::{Display, Formatter};
use std::ops::{Deref, Index, IndexMut};

use super::{BoardCell, GameError, GameResult};

/// Index struct to access elements in the [`Grid`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridIndex {
    row: usize,
    col: usize,
}

impl From<(usize, usize)> for GridIndex {
    fn from(value: (usize, usize)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl Display for GridIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl GridIndex {
    /// Constructs a new [`GridIndex`].
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns value of `self.col`
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns value of `self.row`
    pub fn row(&self) -> usize {
        self.row
    }
}

/// Two-dimensional fixed-length array that stores values and allows to mutate them.
/// Length of array is defined by generic parameters `R` and `C`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T, R: ArrayLength, C: ArrayLength> {
    contents: GenericArray<GenericArray<T, C>, R>,
}

impl<T: Default, R: ArrayLength, C: ArrayLength> Default for Grid<T, R, C> {
    fn default() -> Self {
        Self {
            contents: Default::default(),
        }
    }
}

impl<T, R: ArrayLength, C: ArrayLength> Deref for Grid<T, R, C> {
    type Target = [GenericArray<T, C>];

    fn deref(&self) -> &Self::Target {
        self.contents.as_slice()
    }
}

/// Renders the grid row by row with `|` between cells and a `---+---` line between rows.
/// Every value is expected to render three characters wide.
impl<T: Display, R: ArrayLength, C: ArrayLength> Display for Grid<T, R, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let separator = vec!["---"; C::to_usize()].join("+");
        for (i, row) in self.contents.iter().enumerate() {
            if i > 0 {
                writeln!(f, "{}", separator)?;
            }
            let line: Vec<String> = row.iter().map(|val| val.to_string()).collect();
            writeln!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}

impl<T, R: ArrayLength, C: ArrayLength> Index<GridIndex> for Grid<T, R, C> {
    type Output = T;

    fn index(&self, index: GridIndex) -> &Self::Output {
        &self.contents[index.row()][index.col()]
    }
}

impl<T, R: ArrayLength, C: ArrayLength> IndexMut<GridIndex> for Grid<T, R, C> {
    fn index_mut(&mut self, index: GridIndex) -> &mut Self::Output {
        &mut self.contents[index.row()][index.col()]
    }
}

impl<T, R: ArrayLength, C: ArrayLength> Grid<T, R, C> {
    pub fn rows() -> usize {
        R::to_usize()
    }

    pub fn cols() -> usize {
        C::to_usize()
    }

    /// Returns `true` if `index` points inside the grid.
    pub fn contains(&self, index: GridIndex) -> bool {
        index.row() < Self::rows() && index.col() < Self::cols()
    }

    /// Returns the element at `index` or [`None`] if `index` is out of range.
    pub fn get(&self, index: GridIndex) -> Option<&T> {
        if self.contains(index) {
            Some(&self[index])
        } else {
            None
        }
    }

    /// Returns an iterator to indexed grid elements row by row
    pub fn all_indexed(&self) -> impl Iterator<Item = (GridIndex, &T)> + '_ {
        (0..Self::rows()).flat_map(move |row| self.right_iter((row, 0).into()).indexed())
    }

    /// Returns an iterator with rightwards direction that starts with a `pos`.
    pub fn right_iter(&self, pos: GridIndex) -> RightGridIterator<'_, T, R, C> {
        RightGridIterator {
            current: pos,
            grid: self,
        }
    }

    /// Returns an iterator with downwards direction that starts with a `pos`.
    pub fn bottom_iter(&self, pos: GridIndex) -> BottomGridIterator<'_, T, R, C> {
        BottomGridIterator {
            current: pos,
            grid: self,
        }
    }

    /// Returns a diagonal iterator with bottom-right direction that starts with a `pos`.
    pub fn bottom_right_iter(&self, pos: GridIndex) -> BottomRightGridIterator<'_, T, R, C> {
        BottomRightGridIterator {
            current: pos,
            grid: self,
        }
    }

    /// Returns a diagonal iterator with bottom-left direction that starts with a `pos`.
    pub fn bottom_left_iter(&self, pos: GridIndex) -> BottomLeftGridIterator<'_, T, R, C> {
        BottomLeftGridIterator {
            current: Some(pos),
            grid: self,
        }
    }
}

impl<T, R: ArrayLength, C: ArrayLength> Grid<BoardCell<T>, R, C> {
    /// Puts `value` into an empty cell.
    /// Fails without touching the grid if `index` is out of range or the cell is occupied.
    pub fn place(&mut self, index: GridIndex, value: T) -> GameResult<()> {
        if !self.contains(index) {
            let max = Self::rows().max(Self::cols()).saturating_sub(1);
            return Err(GameError::out_of_range(index.row(), index.col(), max));
        }
        let cell = &mut self[index];
        if cell.is_some() {
            return Err(GameError::cell_is_occupied(index.row(), index.col()));
        }
        *cell = BoardCell::from(value);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.iter().flatten().all(|cell| cell.is_some())
    }

    pub fn occupied_count(&self) -> usize {
        self.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Indices of all empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = GridIndex> + '_ {
        self.all_indexed()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
    }
}

/// An iterator with rightwards direction.
/// On each step it's incrementing `col` by 1 in the underlying [`GridIndex`].
/// Stops when underlying [`GridIndex`] goes out of [`Grid`] scope.
pub struct RightGridIterator<'a, T, R: ArrayLength, C: ArrayLength> {
    current: GridIndex, // no need for an Option as we're only incrementing
    grid: &'a Grid<T, R, C>,
}

impl<'a, T, R: ArrayLength, C: ArrayLength> Iterator for RightGridIterator<'a, T, R, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.grid.get(self.current)?;
        self.current = GridIndex::new(self.current.row, self.current.col + 1);
        Some(item)
    }
}

/// An iterator with downwards direction.
/// On each step it's incrementing `row` by 1 in the underlying [`GridIndex`].
pub struct BottomGridIterator<'a, T, R: ArrayLength, C: ArrayLength> {
    current: GridIndex,
    grid: &'a Grid<T, R, C>,
}

impl<'a, T, R: ArrayLength, C: ArrayLength> Iterator for BottomGridIterator<'a, T, R, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.grid.get(self.current)?;
        self.current = GridIndex::new(self.current.row + 1, self.current.col);
        Some(item)
    }
}

/// A diagonal iterator with bottom-right direction.
/// On each step it's incrementing `col` and `row` by 1 in the underlying [`GridIndex`].
pub struct BottomRightGridIterator<'a, T, R: ArrayLength, C: ArrayLength> {
    current: GridIndex,
    grid: &'a Grid<T, R, C>,
}

impl<'a, T, R: ArrayLength, C: ArrayLength> Iterator for BottomRightGridIterator<'a, T, R, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.grid.get(self.current)?;
        self.current = GridIndex::new(self.current.row + 1, self.current.col + 1);
        Some(item)
    }
}

/// A diagonal iterator with bottom-left direction.
/// On each step it's incrementing `row` and decrementing `col` by 1 in the underlying [`GridIndex`].
/// Stops after column 0 has been visited.
pub struct BottomLeftGridIterator<'a, T, R: ArrayLength, C: ArrayLength> {
    current: Option<GridIndex>,
    grid: &'a Grid<T, R, C>,
}

impl<'a, T, R: ArrayLength, C: ArrayLength> Iterator for BottomLeftGridIterator<'a, T, R, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        let item = self.grid.get(current)?;
        self.current = current
            .col
            .checked_sub(1)
            .map(|col| GridIndex::new(current.row + 1, col));
        Some(item)
    }
}

/// Needed to create iterator adapter which gives the current iteration [`GridIndex`]
/// as well as the next value.
pub trait WithGridIndex {
    /// Returns current [`GridIndex`] if there is one, otherwise [`None`].
    fn get_index(&self) -> Option<GridIndex>;

    /// Returns an iterator which gives the current iteration [`GridIndex`]
    /// as well as the next value.
    fn indexed(self) -> IndexedGridIterator<Self>
    where
        Self: Sized,
    {
        IndexedGridIterator { it: self }
    }
}

impl<T, R: ArrayLength, C: ArrayLength> WithGridIndex for RightGridIterator<'_, T, R, C> {
    fn get_index(&self) -> Option<GridIndex> {
        Some(self.current)
    }
}

impl<T, R: ArrayLength, C: ArrayLength> WithGridIndex for BottomGridIterator<'_, T, R, C> {
    fn get_index(&self) -> Option<GridIndex> {
        Some(self.current)
    }
}

impl<T, R: ArrayLength, C: ArrayLength> WithGridIndex for BottomRightGridIterator<'_, T, R, C> {
    fn get_index(&self) -> Option<GridIndex> {
        Some(self.current)
    }
}

impl<T, R: ArrayLength, C: ArrayLength> WithGridIndex for BottomLeftGridIterator<'_, T, R, C> {
    fn get_index(&self) -> Option<GridIndex> {
        self.current
    }
}

/// An iterator that yields the current [`GridIndex`] and the element during iteration.
pub struct IndexedGridIterator<It> {
    it: It,
}

impl<It> Iterator for IndexedGridIterator<It>
where
    It: Iterator + WithGridIndex,
{
    type Item = (GridIndex, It::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.it.get_index()?;
        let item = self.it.next()?;
        Some((index, item))
    }
}
