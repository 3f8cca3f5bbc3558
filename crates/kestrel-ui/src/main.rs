#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Kestrel demo site wasm entry point and native stub fallback.

#[cfg(target_arch = "wasm32")]
fn main() {
    kestrel_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::{self, Write};

    let mut stderr = io::stderr().lock();
    stderr.write_all(
        b"The kestrel-ui demo is intended for wasm32; build with `trunk serve` or `cargo build --target wasm32-unknown-unknown`.\n",
    )?;
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_main_writes_hint() -> std::io::Result<()> {
        main()
    }
}
