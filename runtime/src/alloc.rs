use core::mem::size_of;
use core::ptr::NonNull;

use libc::c_void;
use libc::calloc;
use libc::free;

use crate::error::Error;
use crate::error::Result;
use crate::layout::double_slot;
use crate::layout::make_header;
use crate::layout::write_double;
use crate::layout::Header;
use crate::layout::Size;
use crate::layout::Value;
use crate::layout::DOUBLE_WOSIZE;
use crate::layout::MAX_WOSIZE;
use crate::types::BlockTag;
use crate::types::Tag;

/// A block laid out exactly like a host heap block, owned by native code.
///
/// The memory is outside the host heap: the collector never sees it, and it
/// is released when the `OwnedBlock` is dropped.
#[derive(Debug)]
pub struct OwnedBlock {
    header: NonNull<Header>,
}

// The block is plain memory with a single owner.
unsafe impl Send for OwnedBlock {}

impl OwnedBlock {
    /// Allocates a zero-filled block with the given size and tag.
    pub fn with_header(wosize: Size, tag: u8) -> Result<Self> {
        if wosize > MAX_WOSIZE {
            return Err(Error::TooLarge {
                requested: wosize,
                max: MAX_WOSIZE,
            });
        }
        let bytes = (wosize + 1) * size_of::<Value>();

        let mem = unsafe { calloc(1, bytes) } as *mut Header;
        let header = NonNull::new(mem).ok_or(Error::AllocFailed { bytes })?;
        unsafe { header.as_ptr().write(make_header(wosize, 0, tag)) };
        tracing::trace!(wosize, tag, bytes, "allocated native block");
        Ok(OwnedBlock { header })
    }

    /// A boxed double holding `d`.
    pub fn double(d: f64) -> Result<Self> {
        let block = Self::with_header(DOUBLE_WOSIZE, Tag::Double.into())?;
        unsafe { write_double(double_slot(block.value(), 0), d) };
        Ok(block)
    }

    /// A zero-filled flat double array of `len` slots.
    ///
    /// An empty array is the zero-sized atom with tag 0, as the host
    /// represents `[||]`.
    pub fn double_array(len: Size) -> Result<Self> {
        if len == 0 {
            return Self::with_header(0, 0);
        }
        let max = MAX_WOSIZE / DOUBLE_WOSIZE;
        if len > max {
            return Err(Error::TooLarge { requested: len, max });
        }
        Self::with_header(len * DOUBLE_WOSIZE, Tag::DoubleArray.into())
    }

    pub fn double_array_from(items: &[f64]) -> Result<Self> {
        let block = Self::double_array(items.len())?;
        for (i, d) in items.iter().enumerate() {
            unsafe { write_double(double_slot(block.value(), i), *d) };
        }
        Ok(block)
    }

    /// The host-shaped handle: a pointer to the first field.
    pub fn value(&self) -> Value {
        unsafe { self.header.as_ptr().add(1) as Value }
    }

    pub fn header(&self) -> Header {
        unsafe { self.header.as_ptr().read() }
    }

    pub fn wosize(&self) -> Size {
        unsafe { crate::layout::wosize_val(self.value()) }
    }

    pub fn tag(&self) -> BlockTag {
        unsafe { BlockTag::of(self.value()) }
    }
}

impl Drop for OwnedBlock {
    fn drop(&mut self) {
        unsafe { free(self.header.as_ptr() as *mut c_void) }
    }
}
