use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

extern crate grass;

const STYLE_FILE: &str = "public/style.scss";

#[cfg(debug_assertions)]
fn styles() -> String {
    let format = grass::Options::default().style(grass::OutputStyle::Expanded);
    grass::from_path(STYLE_FILE, &format).unwrap()
}

#[cfg(not(debug_assertions))]
fn styles() -> String {
    grass::include!("public/style.scss").to_string()
}

fn main() {
    println!("cargo:rerun-if-changed={STYLE_FILE}");
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("style.css");
    let mut f = File::create(dest_path).unwrap();
    f.write_all(styles().as_bytes()).unwrap();
}
