//! Build script for storefront crate.
//!
//! Copies `static/css/main.css` to `static/css/derived/main.<hash>.css` so
//! the stylesheet URL changes whenever its content does.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

/// Number of hex characters of the SHA-256 digest used in the file name.
const HASH_LEN: usize = 8;

fn main() {
    hash_css();
}

/// Hash main.css and copy it to the derived directory.
///
/// Sets `CSS_HASH` for `env!("CSS_HASH")`; empty when the stylesheet is
/// missing, in which case templates fall back to the unhashed file.
fn hash_css() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let css_path = Path::new(&manifest_dir).join("static/css/main.css");

    println!("cargo:rerun-if-changed={}", css_path.display());

    let content = match fs::read(&css_path) {
        Ok(content) => content,
        Err(e) => {
            println!("cargo:warning=Could not read main.css: {e}");
            println!("cargo:rustc-env=CSS_HASH=");
            return;
        }
    };

    let digest = format!("{:x}", Sha256::digest(&content));
    let short_hash: String = digest.chars().take(HASH_LEN).collect();

    let derived_dir = Path::new(&manifest_dir).join("static/css/derived");
    let derived_path = derived_dir.join(format!("main.{short_hash}.css"));
    let copied = fs::create_dir_all(&derived_dir).and_then(|()| fs::copy(&css_path, &derived_path));

    match copied {
        Ok(_) => println!("cargo:rustc-env=CSS_HASH={short_hash}"),
        Err(e) => {
            // Read-only source trees (e.g. vendored builds) serve main.css directly
            println!("cargo:warning=Could not write hashed CSS: {e}");
            println!("cargo:rustc-env=CSS_HASH=");
        }
    }
}
