use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

// Embeds every `data/*.json` file into the binary as a (file name, contents)
// table, so the app runs without a data directory next to it.
fn main() {
    println!("cargo:rerun-if-changed=data/");

    let out_dir = env::var("OUT_DIR").unwrap();
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("bundled_resources.rs");
    let mut f = fs::File::create(&dest_path).unwrap();

    let data_dir = Path::new(&manifest_dir).join("data");
    if !data_dir.exists() {
        writeln!(f, "const BUNDLED_RESOURCES: &[(&str, &str)] = &[];").unwrap();
        return;
    }

    let mut entries: Vec<_> = fs::read_dir(&data_dir)
        .unwrap()
        .map(|res| res.unwrap().path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "json"))
        .collect();

    entries.sort();

    writeln!(f, "const BUNDLED_RESOURCES: &[(&str, &str)] = &[").unwrap();
    for path in &entries {
        let file_name = path.file_name().unwrap().to_string_lossy();
        println!("cargo:rerun-if-changed={}", path.display());
        writeln!(
            f,
            "    ({:?}, include_str!({:?})),",
            file_name,
            path.to_string_lossy()
        )
        .unwrap();
    }
    writeln!(f, "];").unwrap();
}
