use core::fmt;

use num_enum::IntoPrimitive;
use num_enum::TryFromPrimitive;
use strum::Display;
use strum::IntoStaticStr;

use crate::layout::Value;

/// Tags the host reserves at the top of the tag byte.
///
/// Anything below [`Tag::Lazy`] tags an ordinary structured block.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive, Display, IntoStaticStr,
)]
#[repr(u8)]
pub enum Tag {
    Lazy = 246,
    Closure = 247,
    Object = 248,
    Infix = 249,
    Forward = 250,
    Abstract = 251,
    String = 252,
    Double = 253,
    DoubleArray = 254,
    Custom = 255,
}

impl Tag {
    /// First tag whose fields are not scanned by the collector.
    pub const NO_SCAN: u8 = Tag::Abstract as u8;

    pub fn is_no_scan(raw: u8) -> bool {
        raw >= Self::NO_SCAN
    }
}

/// Tag byte of an arbitrary block, as read from its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockTag {
    Structured(u8),
    Reserved(Tag),
}

impl BlockTag {
    pub fn raw(self) -> u8 {
        match self {
            BlockTag::Structured(t) => t,
            BlockTag::Reserved(t) => t.into(),
        }
    }

    /// Reads the tag of a block.
    ///
    /// # Safety
    ///
    /// `v` must point at the first field of a live block.
    pub unsafe fn of(v: Value) -> BlockTag {
        BlockTag::from(crate::layout::tag_val(v))
    }
}

impl From<u8> for BlockTag {
    fn from(raw: u8) -> Self {
        match Tag::try_from(raw) {
            Ok(tag) => BlockTag::Reserved(tag),
            Err(_) => BlockTag::Structured(raw),
        }
    }
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockTag::Structured(t) => write!(f, "Structured({t})"),
            BlockTag::Reserved(t) => write!(f, "{t}"),
        }
    }
}
