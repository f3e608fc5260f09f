//! Names under which the accessors are exported, and the layout contract
//! they were built against.

use libc::c_char;
use paste::paste;

use crate::aux::ConstCStr;

#[macro_export]
macro_rules! runtime_function_name_string {
    ($fn_name:ident) => {
        concat!("caml_sys_", stringify!($fn_name))
    };
}

macro_rules! runtime_symbols {
    ($($fn_name:ident),+ $(,)?) => {
        paste! {
            $(
                pub const [<$fn_name:upper>]: &str = runtime_function_name_string!($fn_name);
            )+
        }

        /// Every accessor symbol this library exports.
        pub const EXPORTED: &[&str] = &[$(runtime_function_name_string!($fn_name)),+];
    };
}

runtime_symbols!(double_val, store_double_val, double_field, store_double_field);

/// [`LAYOUT_VERSION`](crate::layout::LAYOUT_VERSION) as a C string.
pub const LAYOUT_VERSION_CSTR: ConstCStr = const_cstr!(layout_version!());

/// Lets a host check at load time which block layout this library assumes.
#[export_name = "caml_sys_layout_version"]
pub extern "C" fn layout_version() -> *const c_char {
    LAYOUT_VERSION_CSTR.as_ptr()
}
