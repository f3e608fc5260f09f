#![cfg(all(feature = "checked-ffi", unix))]

use std::env;
use std::os::unix::process::ExitStatusExt;
use std::process::Command;

use mlfloat_runtime::layout::val_int;
use mlfloat_runtime::layout::Value;
use mlfloat_runtime::OwnedBlock;
use pretty_assertions::assert_eq;

extern "C" {
    fn caml_sys_double_val(v: Value) -> f64;
    fn caml_sys_store_double_val(v: Value, d: f64);
    fn caml_sys_double_field(v: Value, index: usize) -> f64;
}

const CASE_VAR: &str = "MLFLOAT_ABORT_CASE";

/// Runs `body` in a fresh copy of this test binary and expects the guard to
/// abort it with `message` on stdout.
fn expect_abort(case: &str, message: &str, body: impl FnOnce()) {
    if env::var(CASE_VAR).as_deref() == Ok(case) {
        body();
        // Reaching here means the guard let the call through.
        std::process::exit(0);
    }

    let output = Command::new(env::current_exe().unwrap())
        .args([case, "--exact", "--test-threads=1", "--nocapture"])
        .env(CASE_VAR, case)
        .output()
        .unwrap();

    assert_eq!(output.status.signal(), Some(libc::SIGABRT), "{case}: {output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(&format!("mlfloat runtime contract violation: {message}")),
        "{case}: {stdout}"
    );
}

#[test]
fn double_field_past_the_end_aborts() {
    expect_abort(
        "double_field_past_the_end_aborts",
        "double array index out of bounds",
        || {
            let b = OwnedBlock::double_array(2).unwrap();
            unsafe { caml_sys_double_field(b.value(), 2) };
        },
    );
}

#[test]
fn double_val_on_double_array_aborts() {
    expect_abort(
        "double_val_on_double_array_aborts",
        "value is not a boxed double",
        || {
            let b = OwnedBlock::double_array(1).unwrap();
            unsafe { caml_sys_double_val(b.value()) };
        },
    );
}

#[test]
fn store_on_immediate_aborts() {
    expect_abort(
        "store_on_immediate_aborts",
        "value is not a boxed double",
        || unsafe { caml_sys_store_double_val(val_int(0), 1.0) },
    );
}

#[test]
fn double_field_on_immediate_aborts() {
    expect_abort(
        "double_field_on_immediate_aborts",
        "value is not a double array",
        || unsafe {
            caml_sys_double_field(val_int(0), 0);
        },
    );
}

#[test]
fn valid_calls_pass_the_guard() {
    let b = OwnedBlock::double(0.5).unwrap();
    let a = OwnedBlock::double_array_from(&[1.0, 2.0]).unwrap();
    unsafe {
        caml_sys_store_double_val(b.value(), -4.0);
        assert_eq!(caml_sys_double_val(b.value()), -4.0);
        assert_eq!(caml_sys_double_field(a.value(), 1), 2.0);
    }
}
