use disjoint_set::DisjointSet;
use error::{Error, Result};
use std::mem;

const VIRTUAL_TOP: usize = 0;

// Per-site storage tops out at one (row, col) pair; past this many elements
// a Vec of them can't be allocated at all.
const MAX_ELEMENTS: usize = isize::max_value() as usize / mem::size_of::<(isize, isize)>();

// up, down, left, right
const NEIGHBORS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// An n-by-n grid of sites, each blocked or open. Rows and columns are
/// 1-indexed.
///
/// Two union-find structures are kept. `percolation_set` has both a virtual
/// top and a virtual bottom node and answers `percolates`. `full_set` has
/// only the virtual top; without the bottom node a site in the last row
/// can't look full just because some other bottom site is connected to the
/// top (backwash).
#[derive(Debug, Clone)]
pub struct Percolation {
    n: usize,
    open_sites: Vec<Vec<bool>>,
    num_open_sites: usize,
    percolation_set: DisjointSet,
    full_set: DisjointSet,
    virtual_bottom: usize,
}

impl Percolation {
    /// Creates an n-by-n grid with every site blocked.
    pub fn new(n: isize) -> Result<Percolation> {
        let num_sites = site_count(n)?;
        let n = n as usize;
        debug!("new {}x{} percolation grid", n, n);
        Ok(Percolation {
            n,
            open_sites: vec![vec![false; n]; n],
            num_open_sites: 0,
            percolation_set: DisjointSet::make_singletons(num_sites + 2),
            full_set: DisjointSet::make_singletons(num_sites + 1),
            virtual_bottom: num_sites + 1,
        })
    }

    pub fn size(&self) -> usize {
        self.n
    }

    /// Opens the site (row, col) if it is not open already.
    pub fn open(&mut self, row: isize, col: isize) -> Result<()> {
        let index = self.site_index(row, col)?;
        if self.open_sites[row as usize - 1][col as usize - 1] {
            return Ok(());
        }
        let percolated = self.percolates();

        self.open_sites[row as usize - 1][col as usize - 1] = true;
        self.num_open_sites += 1;
        debug!("open ({}, {}), {} open sites", row, col, self.num_open_sites);

        if row == 1 {
            self.percolation_set.unite(VIRTUAL_TOP, index)?;
            self.full_set.unite(VIRTUAL_TOP, index)?;
        }
        if row as usize == self.n {
            self.percolation_set.unite(self.virtual_bottom, index)?;
        }
        for &(dr, dc) in NEIGHBORS.iter() {
            let (r, c) = (row + dr, col + dc);
            if self.in_bounds(r) && self.in_bounds(c) && self.open_sites[r as usize - 1][c as usize - 1] {
                let neighbor = self.site_index(r, c)?;
                self.percolation_set.unite(neighbor, index)?;
                self.full_set.unite(neighbor, index)?;
            }
        }

        if !percolated && self.percolates() {
            info!("{}x{} grid percolates after {} open sites",
                self.n, self.n, self.num_open_sites);
        }
        Ok(())
    }

    pub fn is_open(&self, row: isize, col: isize) -> Result<bool> {
        self.check_row_col(row, col)?;
        Ok(self.open_sites[row as usize - 1][col as usize - 1])
    }

    /// Whether (row, col) is connected to the top row through open sites.
    pub fn is_full(&self, row: isize, col: isize) -> Result<bool> {
        let index = self.site_index(row, col)?;
        self.full_set.connected(VIRTUAL_TOP, index)
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.num_open_sites
    }

    pub fn percolates(&self) -> bool {
        // both virtual nodes are in range for every grid size
        self.percolation_set.connected(VIRTUAL_TOP, self.virtual_bottom).unwrap_or(false)
    }

    // Numbered from the upper left corner, left to right across each row,
    // starting at 1. 0 and n*n + 1 belong to the virtual nodes.
    fn site_index(&self, row: isize, col: isize) -> Result<usize> {
        self.check_row_col(row, col)?;
        Ok(col as usize + self.n * (row as usize - 1))
    }

    fn check_row_col(&self, row: isize, col: isize) -> Result<()> {
        if !self.in_bounds(row) {
            return Err(Error::RowOutOfBounds { row, n: self.n });
        }
        if !self.in_bounds(col) {
            return Err(Error::ColumnOutOfBounds { col, n: self.n });
        }
        Ok(())
    }

    fn in_bounds(&self, row_or_col: isize) -> bool {
        row_or_col > 0 && row_or_col as usize <= self.n
    }
}

/// Number of sites in an n-by-n grid. Fails when n is not positive or when
/// the grid, plus its two virtual nodes, is too large to allocate.
pub(crate) fn site_count(n: isize) -> Result<usize> {
    if n <= 0 {
        return Err(Error::InvalidGridSize(n));
    }
    let side = n as usize;
    side.checked_mul(side)
        .and_then(|sites| sites.checked_add(2))
        .filter(|&len| len <= MAX_ELEMENTS)
        .map(|len| len - 2)
        .ok_or(Error::InvalidGridSize(n))
}
