//! Embeds a startup config so builds without a filesystem (wasm) still get
//! the project's settings. `LIFTWARP_EMBED_GAME_CONFIG_PATH` picks another file.

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=LIFTWARP_EMBED_GAME_CONFIG_PATH");

    let source = match env::var("LIFTWARP_EMBED_GAME_CONFIG_PATH") {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => {
            let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
            PathBuf::from(manifest_dir).join("game.json")
        }
    };
    println!("cargo:rerun-if-changed={}", source.display());

    let config = match fs::read_to_string(&source) {
        Ok(text) => text,
        Err(e) => {
            println!(
                "cargo:warning=no game config at {} ({e}); embedding defaults",
                source.display()
            );
            "{}".to_string()
        }
    };

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
    fs::write(out_dir.join("liftwarp_embedded_game_config.json"), config)
        .expect("failed to write embedded game config");
}
