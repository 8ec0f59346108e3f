// File: crates/chart-core/build.rs
// Summary: Build script to link Windows system libraries that Skia's font manager and ICU need.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
