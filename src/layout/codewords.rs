use super::function_mask::FunctionMask;

/// Numeric tag of the terminator cells
pub const TERMINATOR_TAG: u32 = 2;
/// Number given to the first codeword in scan order
pub const FIRST_CODEWORD: u32 = 3;
/// Modules per codeword
const BITS_PER_CODEWORD: usize = 8;

/// Ownership of one module in the byte grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteCell {
    /// Function pattern, format area, or outside the symbol
    Reserved,
    /// Data module not yet reached by the scan
    Available,
    /// Bottom-right 2x2 terminator block
    Terminator,
    /// Data module owned by the codeword with this number
    Codeword(u32),
}

impl ByteCell {
    /// Numeric tag as used for the diagram's color coding; `None` for reserved cells
    pub fn tag(&self) -> Option<u32> {
        match self {
            ByteCell::Reserved => None,
            ByteCell::Available => Some(1),
            ByteCell::Terminator => Some(TERMINATOR_TAG),
            ByteCell::Codeword(n) => Some(*n),
        }
    }
}

/// Byte-ownership grid: which codeword each module belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteGrid {
    size: usize,
    cells: Vec<ByteCell>,
}

impl ByteGrid {
    /// Reserve every function module and leave the rest available
    pub fn from_function_mask(func: &FunctionMask) -> Self {
        let size = func.size();
        let mut cells = Vec::with_capacity(size * size);
        for y in 0..size {
            for x in 0..size {
                cells.push(if func.is_function(x, y) {
                    ByteCell::Reserved
                } else {
                    ByteCell::Available
                });
            }
        }
        Self { size, cells }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at (x, y); anything outside the grid reads as reserved
    pub fn get(&self, x: isize, y: isize) -> ByteCell {
        if x < 0 || y < 0 || x as usize >= self.size || y as usize >= self.size {
            return ByteCell::Reserved;
        }
        self.cells[y as usize * self.size + x as usize]
    }

    fn set(&mut self, x: usize, y: usize, cell: ByteCell) {
        self.cells[y * self.size + x] = cell;
    }

    /// Tag the bottom-right 2x2 block as terminator
    pub fn mark_terminator(&mut self) {
        let size = self.size;
        for y in size - 2..size {
            for x in size - 2..size {
                self.set(x, y, ByteCell::Terminator);
            }
        }
    }

    /// Number every available module in zig-zag scan order.
    ///
    /// Column pairs are walked right to left; the pair offset jumps by one
    /// when it reaches the vertical timing column. Bit 1 of the pair offset
    /// picks the direction (set = downward). Returns the number of modules
    /// assigned.
    pub fn assign_codewords(&mut self) -> usize {
        let size = self.size;
        let mut number = FIRST_CODEWORD;
        let mut bit_count = 0;
        let mut assigned = 0;

        let mut i = 0;
        while i <= size {
            if i == size - 7 {
                i += 1;
            }
            for j in 0..size {
                for k in 1..=2 {
                    let Some(x) = size.checked_sub(i + k) else {
                        continue;
                    };
                    let y = if i & 2 != 0 { j } else { size - j - 1 };
                    if self.cells[y * size + x] != ByteCell::Available {
                        continue;
                    }
                    self.set(x, y, ByteCell::Codeword(number));
                    assigned += 1;
                    bit_count += 1;
                    if bit_count >= BITS_PER_CODEWORD {
                        number += 1;
                        bit_count = 0;
                    }
                }
            }
            i += 2;
        }

        assigned
    }

    /// Number of modules currently owned by `cell`
    pub fn count(&self, cell: ByteCell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Highest codeword number assigned so far
    pub fn last_codeword(&self) -> Option<u32> {
        self.cells
            .iter()
            .filter_map(|c| match c {
                ByteCell::Codeword(n) => Some(*n),
                _ => None,
            })
            .max()
    }

    /// Text dump, one row per line: `..` reserved, `TT` terminator, two hex digits per codeword
    pub fn dump(&self) -> String {
        let mut out = String::with_capacity(self.size * (self.size * 3 + 1));
        for y in 0..self.size {
            for x in 0..self.size {
                if x > 0 {
                    out.push(' ');
                }
                match self.cells[y * self.size + x] {
                    ByteCell::Reserved => out.push_str(".."),
                    ByteCell::Available => out.push_str("??"),
                    ByteCell::Terminator => out.push_str("TT"),
                    ByteCell::Codeword(n) => out.push_str(&format!("{:02x}", n % 256)),
                }
            }
            out.push('\n');
        }
        out
    }
}
