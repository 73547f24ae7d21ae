/// Width of a single cell inside a packed `u32` word.
///
/// Each width fixes the four addressing parameters used by [`BitTable::unpack`]:
/// how many low index bits select the cell within a word, and how far a cell
/// index must be shifted to become a bit offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitWidth {
    Four,
    Eight,
    Sixteen,
}

impl UnitWidth {
    /// Returns `(index_shift, shift_mask, bit_shift, unit_mask)`.
    pub const fn params(self) -> (u32, u32, u32, u32) {
        match self {
            UnitWidth::Four => (3, 7, 2, 0xF),
            UnitWidth::Eight => (2, 3, 3, 0xFF),
            UnitWidth::Sixteen => (1, 1, 4, 0xFFFF),
        }
    }

    pub const fn cells_per_word(self) -> usize {
        match self {
            UnitWidth::Four => 8,
            UnitWidth::Eight => 4,
            UnitWidth::Sixteen => 2,
        }
    }
}

pub const fn pack16(a: u32, b: u32) -> u32 {
    (b << 16) | a
}

pub const fn pack8(a: u32, b: u32, c: u32, d: u32) -> u32 {
    pack16((b << 8) | a, (d << 8) | c)
}

/// Packs eight 4-bit cells, lowest index in the lowest nibble.
#[allow(clippy::too_many_arguments)]
pub const fn pack4(a: u32, b: u32, c: u32, d: u32, e: u32, f: u32, g: u32, h: u32) -> u32 {
    pack8((b << 4) | a, (d << 4) | c, (f << 4) | e, (h << 4) | g)
}

/// A read-only view over a bit-packed lookup table.
///
/// ## Mechanical Sympathy
/// Class tables for a full byte range fit in 128 bytes at 4-bit width, so
/// every model consulted in the per-byte hot loop stays resident in L1.
#[derive(Debug, Clone, Copy)]
pub struct BitTable<'a> {
    index_shift: u32,
    shift_mask: u32,
    bit_shift: u32,
    unit_mask: u32,
    data: &'a [u32],
}

impl<'a> BitTable<'a> {
    pub const fn new(width: UnitWidth, data: &'a [u32]) -> Self {
        let (index_shift, shift_mask, bit_shift, unit_mask) = width.params();
        Self {
            index_shift,
            shift_mask,
            bit_shift,
            unit_mask,
            data,
        }
    }

    /// Builds a table from explicit addressing parameters, for tables produced
    /// by external packers that do not use one of the canonical widths.
    pub const fn from_raw_parts(
        index_shift: u32,
        shift_mask: u32,
        bit_shift: u32,
        unit_mask: u32,
        data: &'a [u32],
    ) -> Self {
        Self {
            index_shift,
            shift_mask,
            bit_shift,
            unit_mask,
            data,
        }
    }

    /// Returns the cell at logical index `i`.
    ///
    /// # Panics
    /// Panics if `i` addresses a word past the end of the backing slice.
    #[inline(always)]
    pub fn unpack(&self, i: usize) -> u32 {
        let word = self.data[i >> self.index_shift];
        let shift = ((i as u32) & self.shift_mask) << self.bit_shift;
        (word >> shift) & self.unit_mask
    }

    /// Number of addressable cells.
    pub fn len(&self) -> usize {
        self.data.len() << self.index_shift
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn words(&self) -> &'a [u32] {
        self.data
    }
}

#[cfg(kani)]
mod proofs {
    use super::*;

    #[kani::proof]
    fn prove_unpack_stays_in_bounds() {
        let words: [u32; 4] = kani::any();
        let table = BitTable::new(UnitWidth::Four, &words);
        let i: usize = kani::any();
        kani::assume(i < table.len());

        // Every in-range index resolves to a word inside the slice and a
        // value no wider than the unit mask.
        let v = table.unpack(i);
        assert!(v <= 0xF);
    }
}
