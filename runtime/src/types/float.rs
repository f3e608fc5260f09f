//! Exported boxed-double accessors.
//!
//! Each function is a direct read or write of the host's in-memory layout.
//! Nothing is validated unless the `checked-ffi` feature is enabled, in which
//! case a broken caller contract aborts the process instead of corrupting it.
//!
//! Doubles are copied as raw 64-bit patterns, so `-0.0` and NaN payloads
//! survive a store and a read wherever `f64` moves are bit-exact (every
//! target without x87-only float registers).

use crate::layout::double_slot;
use crate::layout::read_double;
use crate::layout::write_double;
use crate::layout::Size;
use crate::layout::Value;

#[cfg(feature = "checked-ffi")]
mod guard {
    use crate::layout::double_slots;
    use crate::layout::is_block;
    use crate::layout::tag_val;
    use crate::layout::wosize_val;
    use crate::layout::Size;
    use crate::layout::Value;
    use crate::layout::DOUBLE_WOSIZE;
    use crate::panic::panic;
    use crate::types::Tag;

    pub(super) unsafe fn boxed_double(v: Value) {
        if !is_block(v) || tag_val(v) != u8::from(Tag::Double) || wosize_val(v) != DOUBLE_WOSIZE {
            panic(const_cstr!("value is not a boxed double").as_ptr());
        }
    }

    pub(super) unsafe fn double_array_slot(v: Value, index: Size) {
        if !is_block(v) || tag_val(v) != u8::from(Tag::DoubleArray) {
            panic(const_cstr!("value is not a double array").as_ptr());
        }
        if index >= double_slots(wosize_val(v)) {
            panic(const_cstr!("double array index out of bounds").as_ptr());
        }
    }
}

/// Reads the double held by a boxed double.
///
/// # Safety
///
/// `v` must be a live boxed double.
#[export_name = "caml_sys_double_val"]
pub unsafe extern "C" fn double_val(v: Value) -> f64 {
    #[cfg(feature = "checked-ffi")]
    guard::boxed_double(v);
    read_double(double_slot(v, 0))
}

/// Overwrites the double held by a boxed double, in place.
///
/// # Safety
///
/// `v` must be a live boxed double the caller may mutate.
#[export_name = "caml_sys_store_double_val"]
pub unsafe extern "C" fn store_double_val(v: Value, d: f64) {
    #[cfg(feature = "checked-ffi")]
    guard::boxed_double(v);
    write_double(double_slot(v, 0), d)
}

/// Reads slot `index` of a flat double array.
///
/// # Safety
///
/// `v` must be a live double array and `index` within its length.
#[export_name = "caml_sys_double_field"]
pub unsafe extern "C" fn double_field(v: Value, index: Size) -> f64 {
    #[cfg(feature = "checked-ffi")]
    guard::double_array_slot(v, index);
    read_double(double_slot(v, index))
}

/// Overwrites slot `index` of a flat double array, in place.
///
/// # Safety
///
/// `v` must be a live double array the caller may mutate and `index` within
/// its length.
#[export_name = "caml_sys_store_double_field"]
pub unsafe extern "C" fn store_double_field(v: Value, index: Size, d: f64) {
    #[cfg(feature = "checked-ffi")]
    guard::double_array_slot(v, index);
    write_double(double_slot(v, index), d)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::alloc::OwnedBlock;

    #[test]
    fn scalar_store_then_read() {
        let b = OwnedBlock::double(0.0).unwrap();
        unsafe {
            store_double_val(b.value(), PI);
            assert_eq!(double_val(b.value()).to_bits(), PI.to_bits());
        }
    }

    #[test]
    fn three_slot_array() {
        let b = OwnedBlock::double_array(3).unwrap();
        let v = b.value();
        unsafe {
            store_double_field(v, 0, 1.5);
            store_double_field(v, 1, -2.25);
            store_double_field(v, 2, 0.0);
            assert_eq!(double_field(v, 0), 1.5);
            assert_eq!(double_field(v, 1), -2.25);
            assert_eq!(double_field(v, 2), 0.0);
        }
    }

    #[test]
    fn signed_zero_survives() {
        let b = OwnedBlock::double(1.0).unwrap();
        unsafe {
            store_double_val(b.value(), -0.0);
            let d = double_val(b.value());
            assert_eq!(d, 0.0);
            assert!(d.is_sign_negative());
        }
    }

    #[test]
    fn nan_stays_nan() {
        let b = OwnedBlock::double_array(1).unwrap();
        unsafe {
            store_double_field(b.value(), 0, f64::NAN);
            assert!(double_field(b.value(), 0).is_nan());
        }
    }

    #[test]
    fn header_is_untouched_by_writes() {
        let b = OwnedBlock::double(0.0).unwrap();
        let before = b.header();
        unsafe { store_double_val(b.value(), f64::from_bits(u64::MAX)) };
        assert_eq!(b.header(), before);
    }
}
