//! Host-side helper: `cargo run` builds the WASM package, writes the theme
//! descriptor next to the page and serves `static/` locally.

use std::process::{Command, Stdio};
use std::{fs, thread, time::Duration};

use helix_wasm::theme::ThemeDescriptor;

const PORT: &str = "8000";

fn main() {
    // 1. Compile wasm via wasm-pack into static/pkg
    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).");
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH. Skipping wasm build; the site may serve stale artifacts.");
        }
    }

    // 2. Emit the theme descriptor for the stylesheet build
    match ThemeDescriptor::default().to_json_pretty() {
        Ok(json) => {
            if let Err(e) = fs::write("static/theme.json", json) {
                eprintln!("could not write static/theme.json: {e}");
            }
        }
        Err(e) => eprintln!("could not serialise theme: {e}"),
    }

    // 3. Serve static/
    println!("Launching local server at http://127.0.0.1:{PORT} …");
    let server = Command::new("python3")
        .args(["-m", "http.server", PORT, "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
    if let Err(e) = server {
        eprintln!("failed to start http server: {e}");
        std::process::exit(1);
    }

    // Keep process alive
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}
