//! Fuzz target for triangle construction.
//!
//! Tests that Triangle::try_new never panics and that every accepted
//! triangle has a non-negative area that is not NaN.

#![no_main]

use libfuzzer_sys::fuzz_target;
use podium_lab::Triangle;

fuzz_target!(|sides: (f64, f64, f64)| {
    let (a, b, c) = sides;
    if let Ok(t) = Triangle::try_new(a, b, c) {
        let area = t.area();
        assert!(!area.is_nan() && area >= 0.0, "bad area {area} for {t}");
        let _ = t.kind();
    }
});
