use libc::c_char;

/// A `'static` string literal carrying its own NUL terminator.
#[derive(Copy, Clone, Debug)]
pub struct ConstCStr {
    pub data: &'static str,
}

impl ConstCStr {
    pub fn as_ptr(&self) -> *const c_char {
        self.data.as_bytes().as_ptr() as *const c_char
    }
}

#[macro_export]
macro_rules! const_cstr {
    ($strval:expr) => {
        $crate::aux::ConstCStr {
            data: concat!($strval, "\0"),
        }
    };
}
