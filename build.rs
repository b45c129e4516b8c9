fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // ESP-IDF link arguments and sysenv are only needed for the firmware
    // image; host builds (tests, simulation) have no embuild.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
