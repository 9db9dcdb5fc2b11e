//! Host-side helper: `cargo run` builds the wasm bundle into `static/pkg` and
//! serves `static/` locally for previewing the site.
//!
//! `FOLIO_PORT` overrides the default port (8000).

use std::process::{Command, ExitCode, Stdio};
use std::{env, thread, time::Duration};

const DEFAULT_PORT: &str = "8000";

fn main() -> ExitCode {
    // Only meaningful on non-wasm targets.
    if env::var("TARGET").unwrap_or_default() == "wasm32-unknown-unknown" {
        return ExitCode::SUCCESS;
    }

    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).");
            return ExitCode::FAILURE;
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH. Serving whatever is already in static/pkg.");
        }
    }

    let port = env::var("FOLIO_PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
    println!("Serving http://127.0.0.1:{port}/index.html and /cv.html …");
    let server = Command::new("python3")
        .args(["-m", "http.server", &port, "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .spawn();
    let mut server = match server {
        Ok(child) => child,
        Err(err) => {
            eprintln!("could not start http server: {err}");
            return ExitCode::FAILURE;
        }
    };

    // Keep process alive while the server runs.
    loop {
        match server.try_wait() {
            Ok(Some(status)) => {
                eprintln!("http server exited: {status}");
                return ExitCode::FAILURE;
            }
            Ok(None) => thread::sleep(Duration::from_secs(5)),
            Err(err) => {
                eprintln!("lost track of http server: {err}");
                return ExitCode::FAILURE;
            }
        }
    }
}
