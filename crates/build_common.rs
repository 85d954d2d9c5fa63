// Shared build script utility for README-to-rustdoc transformation.
// Include this in build.rs files with: include!("../build_common.rs");
//
// Required imports in the including file:
//   use std::env;
//   use std::fs;
//   use std::path::Path;

/// Prepare a crate's README.md for use as rustdoc front-page content.
///
/// Links of the form `](src/foo.rs)` are rewritten to `](foo)` so that
/// rustdoc resolves them as module links rather than dead file paths.
/// Always writes `README_GENERATED.md` to `OUT_DIR` (empty when the crate
/// has no README) so `include_str!` in lib.rs never fails.
fn process_readme_for_rustdoc(crate_dir: &str) {
    println!("cargo:rerun-if-changed=README.md");

    let readme_path = Path::new(crate_dir).join("README.md");
    let content = fs::read_to_string(&readme_path).unwrap_or_default();

    let rustdoc_content = content.replace("](src/", "](").replace(".rs)", ")");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("README_GENERATED.md");
    fs::write(dest_path, rustdoc_content).unwrap();
}
