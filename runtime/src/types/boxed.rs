use crate::error::Error;
use crate::error::Result;
use crate::layout::is_block;
use crate::layout::wosize_val;
use crate::layout::Value;
use crate::layout::DOUBLE_WOSIZE;
use crate::types::float::double_val;
use crate::types::float::store_double_val;
use crate::types::BlockTag;
use crate::types::Tag;

/// A value verified to be a boxed double.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxedDouble(Value);

impl BoxedDouble {
    /// Checks that `v` is a boxed double.
    ///
    /// # Safety
    ///
    /// If `v` is a block it must be live, and it must stay live for as long as
    /// the returned view is used.
    pub unsafe fn from_value(v: Value) -> Result<Self> {
        if !is_block(v) {
            tracing::debug!(value = v, "rejected immediate as boxed double");
            return Err(Error::Immediate);
        }
        let tag = BlockTag::of(v);
        let wosize = wosize_val(v);
        if tag != BlockTag::Reserved(Tag::Double) || wosize != DOUBLE_WOSIZE {
            tracing::debug!(%tag, wosize, "rejected block as boxed double");
            return Err(Error::NotDouble { tag, wosize });
        }
        Ok(BoxedDouble(v))
    }

    pub fn value(self) -> Value {
        self.0
    }

    pub fn get(self) -> f64 {
        unsafe { double_val(self.0) }
    }

    pub fn set(self, d: f64) {
        unsafe { store_double_val(self.0, d) }
    }
}
