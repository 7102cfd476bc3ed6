//! Trunk entry point. The binary only does something when compiled for the
//! browser with the `csr` feature; native builds exist for `cargo test`.

fn main() {
    #[cfg(feature = "csr")]
    valhalla_console::mount();
}
