// Assembles the deployable site: mirrors static/ (HTML, CSS and the
// wasm-pack output under static/pkg) into dist/.
use fs_extra::dir::CopyOptions;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=static");

    let out = Path::new("dist");
    if out.exists() {
        fs::remove_dir_all(out).ok();
    }
    fs::create_dir_all(out).ok();

    let src = Path::new("static");
    if src.exists() {
        let mut opts = CopyOptions::new();
        opts.content_only = true;
        opts.overwrite = true;
        fs_extra::dir::copy(src, out, &opts).ok();
    }
}
