//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `placemark_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Tiny probe validating core crate wiring independently from the
    // Flutter/FFI runtime setup.
    println!("placemark_core ping={}", placemark_core::ping());
    println!("placemark_core version={}", placemark_core::core_version());
}
