use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=config.toml");

    // Drop a copy of config.toml next to the binary so a distributed
    // build carries its settings. The app falls back to built-in
    // defaults, so a missing file just skips the copy.
    let config_path = Path::new("config.toml");
    if !config_path.exists() {
        return;
    }

    let out_dir = match env::var("OUT_DIR") {
        Ok(dir) => dir,
        Err(_) => return,
    };

    // OUT_DIR sits three levels under the profile directory
    if let Some(target_dir) = Path::new(&out_dir).ancestors().nth(3) {
        let _ = fs::copy(config_path, target_dir.join("config.toml"));
    }
}
