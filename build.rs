// Build script that mirrors the static site into `dist/` for deployment.
// The wasm bundle itself is produced by `cargo run` (see src/main.rs), which
// writes into static/pkg before this copy picks it up.
use std::{fs, path::Path};

use fs_extra::dir::{copy, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        fs::remove_dir_all(out_dir).ok();
    }
    fs::create_dir_all(out_dir).ok();

    let static_dir = Path::new("static");
    if static_dir.exists() {
        let options = CopyOptions::new().content_only(true).overwrite(true);
        if let Err(err) = copy(static_dir, out_dir, &options) {
            println!("cargo:warning=copying static/ failed: {err}");
        }
    }
}
