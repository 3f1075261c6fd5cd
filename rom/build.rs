/*++

Licensed under the Apache-2.0 license.

File Name:

    build.rs

Abstract:

    Build script for the Lumen boot ROM.

--*/

fn main() {
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    // Firmware builds only; host builds (feature "std") link normally.
    if env::var_os("CARGO_FEATURE_STD").is_none() {
        let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
        fs::write(out_dir.join("rom.ld"), include_bytes!("src/rom.ld")).unwrap();

        println!("cargo:rustc-link-search={}", out_dir.display());
        println!("cargo:rustc-link-arg=-Trom.ld");
    }
    println!("cargo:rerun-if-changed=src/rom.ld");
    println!("cargo:rerun-if-changed=src/start.S");
    println!("cargo:rerun-if-changed=build.rs");
}
