use libc::abort;
use libc::c_char;
use libc::fflush;
use libc::printf;

/// Reports a broken caller contract and aborts the process.
///
/// Unwinding across the C boundary is not an option, so this never returns.
///
/// # Safety
///
/// `msg` must be a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn __mlfloat_runtime_panic(msg: *const c_char) -> ! {
    let fmt = const_cstr!("mlfloat runtime contract violation: %s\n");
    printf(fmt.as_ptr(), msg);
    fflush(core::ptr::null_mut());
    abort()
}

/// # Safety
///
/// Never returns; see [`__mlfloat_runtime_panic`].
#[cfg_attr(not(feature = "checked-ffi"), allow(dead_code))]
pub(crate) unsafe fn panic(msg: *const c_char) -> ! {
    __mlfloat_runtime_panic(msg)
}
