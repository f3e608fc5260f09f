use crate::error::Error;
use crate::error::Result;
use crate::layout::double_slots;
use crate::layout::is_block;
use crate::layout::wosize_val;
use crate::layout::Size;
use crate::layout::Value;
use crate::types::float::double_field;
use crate::types::float::store_double_field;
use crate::types::BlockTag;
use crate::types::Tag;

const _: () = assert!(
    crate::layout::FLAT_FLOAT_ARRAY,
    "double arrays are read as flat blocks of raw doubles"
);

/// A value verified to be a flat double array, with its length cached.
///
/// Not `Clone`: writes go through `&mut self`, so one view per block keeps
/// them exclusive on the Rust side.
#[derive(Debug, PartialEq, Eq)]
pub struct DoubleArray {
    value: Value,
    len: Size,
}

impl DoubleArray {
    /// Checks that `v` is a flat double array.
    ///
    /// The empty atom (tag 0, no fields) is accepted as an empty array.
    ///
    /// # Safety
    ///
    /// If `v` is a block it must be live, and it must stay live for as long as
    /// the returned view is used.
    pub unsafe fn from_value(v: Value) -> Result<Self> {
        if !is_block(v) {
            tracing::debug!(value = v, "rejected immediate as double array");
            return Err(Error::Immediate);
        }
        let tag = BlockTag::of(v);
        let wosize = wosize_val(v);
        match tag {
            BlockTag::Reserved(Tag::DoubleArray) => Ok(DoubleArray {
                value: v,
                len: double_slots(wosize),
            }),
            BlockTag::Structured(0) if wosize == 0 => Ok(DoubleArray { value: v, len: 0 }),
            _ => {
                tracing::debug!(%tag, wosize, "rejected block as double array");
                Err(Error::NotDoubleArray { tag })
            }
        }
    }

    pub fn value(&self) -> Value {
        self.value
    }

    pub fn len(&self) -> Size {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn check(&self, index: Size) -> Result<()> {
        if index >= self.len {
            tracing::debug!(index, len = self.len, "double array index out of bounds");
            return Err(Error::OutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    pub fn get(&self, index: Size) -> Result<f64> {
        self.check(index)?;
        Ok(unsafe { self.get_unchecked(index) })
    }

    pub fn set(&mut self, index: Size, d: f64) -> Result<()> {
        self.check(index)?;
        unsafe { self.set_unchecked(index, d) };
        Ok(())
    }

    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked(&self, index: Size) -> f64 {
        double_field(self.value, index)
    }

    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    pub unsafe fn set_unchecked(&mut self, index: Size, d: f64) {
        store_double_field(self.value, index, d)
    }

    /// Overwrites every slot from `items`, which must have the same length.
    pub fn fill_from(&mut self, items: &[f64]) -> Result<()> {
        if items.len() != self.len {
            return Err(Error::LengthMismatch {
                expected: self.len,
                found: items.len(),
            });
        }
        for (i, d) in items.iter().enumerate() {
            unsafe { self.set_unchecked(i, *d) };
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(move |i| unsafe { self.get_unchecked(i) })
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }
}
