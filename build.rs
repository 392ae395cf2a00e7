fn main() {
    // Host builds have no ESP-IDF environment to propagate.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
