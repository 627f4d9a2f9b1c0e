//! Build script for the rotary counter demo firmware
//!
//! Adds the cortex-m-rt and defmt linker scripts to the demo binary only,
//! so host builds of the library and its tests are unaffected.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    if std::env::var_os("CARGO_FEATURE_EMBEDDED").is_some() {
        println!("cargo:rustc-link-arg-bins=--nmagic");
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }
}
