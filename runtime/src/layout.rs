//! Block layout of the host runtime's heap values.
//!
//! Every offset, header bit and size assumption the crate makes lives here.
//! A value is a word pointing at the first field of a block; the block's
//! header is the word immediately before it:
//!
//! ```text
//!      +--------+-------+-----+
//!      | wosize | color | tag |
//!      +--------+-------+-----+
//! bits  63    10 9     8 7   0
//! ```
//!
//! Doubles are stored raw inside a block. On 32-bit targets a double spans two
//! words and is only guaranteed word alignment, so every access goes through
//! unaligned reads and writes.

use core::mem::size_of;

/// A host value: either an immediate integer (low bit set) or a pointer to
/// the first field of a block.
pub type Value = usize;

/// Block header word.
pub type Header = usize;

/// Size and index type used by the host.
pub type Size = usize;

#[macro_export]
macro_rules! layout_version {
    () => {
        "ocaml-4.14/5.x;header=wosize:color:tag;reserved-bits=0"
    };
}

/// Host releases whose block layout this module matches.
pub const LAYOUT_VERSION: &str = layout_version!();

/// The host stores float arrays unboxed, as raw doubles in one block.
pub const FLAT_FLOAT_ARRAY: bool = true;

pub const TAG_BITS: u32 = 8;
pub const COLOR_BITS: u32 = 2;
pub const WOSIZE_SHIFT: u32 = TAG_BITS + COLOR_BITS;

const TAG_MASK: Header = (1 << TAG_BITS) - 1;
const COLOR_MASK: Header = ((1 << COLOR_BITS) - 1) << TAG_BITS;

/// Largest size a header can describe.
pub const MAX_WOSIZE: Size = (1 << (usize::BITS - WOSIZE_SHIFT)) - 1;

/// Number of words a double occupies inside a block.
pub const DOUBLE_WOSIZE: Size = size_of::<f64>() / size_of::<Value>();

#[inline]
pub const fn make_header(wosize: Size, color: u8, tag: u8) -> Header {
    (wosize << WOSIZE_SHIFT) | (((color as Header) << TAG_BITS) & COLOR_MASK) | tag as Header
}

/// Reads the header of a block.
///
/// # Safety
///
/// `v` must point at the first field of a live block.
#[inline]
pub unsafe fn hd_val(v: Value) -> Header {
    (v as *const Header).sub(1).read()
}

/// # Safety
///
/// Same contract as [`hd_val`].
#[inline]
pub unsafe fn tag_val(v: Value) -> u8 {
    (hd_val(v) & TAG_MASK) as u8
}

/// # Safety
///
/// Same contract as [`hd_val`].
#[inline]
pub unsafe fn wosize_val(v: Value) -> Size {
    hd_val(v) >> WOSIZE_SHIFT
}

/// # Safety
///
/// Same contract as [`hd_val`].
#[inline]
pub unsafe fn color_val(v: Value) -> u8 {
    ((hd_val(v) & COLOR_MASK) >> TAG_BITS) as u8
}

#[inline]
pub const fn is_block(v: Value) -> bool {
    v & 1 == 0
}

#[inline]
pub const fn is_long(v: Value) -> bool {
    v & 1 != 0
}

#[inline]
pub const fn val_int(i: isize) -> Value {
    ((i as usize) << 1) + 1
}

#[inline]
pub const fn int_val(v: Value) -> isize {
    (v as isize) >> 1
}

/// Pointer to the `index`-th word field of a block.
///
/// # Safety
///
/// No bounds checking or validation is done.
#[inline]
pub unsafe fn field(v: Value, index: Size) -> *mut Value {
    (v as *mut Value).add(index)
}

/// Pointer to the `index`-th double slot of a flat double block.
///
/// # Safety
///
/// No bounds checking or validation is done.
#[inline]
pub unsafe fn double_slot(v: Value, index: Size) -> *mut f64 {
    (v as *mut f64).add(index)
}

/// # Safety
///
/// `slot` must be valid for an 8-byte read.
#[inline]
pub unsafe fn read_double(slot: *const f64) -> f64 {
    slot.read_unaligned()
}

/// # Safety
///
/// `slot` must be valid for an 8-byte write.
#[inline]
pub unsafe fn write_double(slot: *mut f64, d: f64) {
    slot.write_unaligned(d)
}

/// Number of double slots a flat double block with `wosize` words holds.
#[inline]
pub const fn double_slots(wosize: Size) -> Size {
    wosize / DOUBLE_WOSIZE
}
