use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();

    // Scaffold the asset layout; the renderer and HUD fall back gracefully
    // when the placeholders are not replaced with real files.
    let assets_dir = Path::new(&manifest_dir).join("assets");
    create_placeholder(&assets_dir.join("vehicles"), "car.png", b"PLACEHOLDER IMAGE");
    create_placeholder(&assets_dir.join("fonts"), "font.ttf", b"PLACEHOLDER FONT");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=assets/");

    link_sdl2_libraries();
}

fn create_placeholder(dir: &Path, name: &str, contents: &[u8]) {
    if !dir.exists() {
        fs::create_dir_all(dir).unwrap();
    }
    let file_path = dir.join(name);
    if !file_path.exists() {
        println!("Creating placeholder {}...", name);
        let mut file = fs::File::create(&file_path).unwrap();
        file.write_all(contents).unwrap();
    }
}

fn link_sdl2_libraries() {
    #[cfg(target_os = "macos")]
    {
        // Locate SDL2 libraries via homebrew when available.
        if std::process::Command::new("brew").arg("--version").output().is_ok() {
            for package in ["sdl2", "sdl2_image", "sdl2_ttf"] {
                match homebrew_prefix(package) {
                    Some(prefix) => println!("cargo:rustc-link-search={}/lib", prefix),
                    None => println!(
                        "{} not found via homebrew, install it with 'brew install {}'",
                        package, package
                    ),
                }
            }
            println!("cargo:rustc-link-lib=SDL2");
            println!("cargo:rustc-link-lib=SDL2_image");
            println!("cargo:rustc-link-lib=SDL2_ttf");
        } else {
            println!("Homebrew not found. Install SDL2 libraries manually.");
        }
    }

    #[cfg(target_os = "linux")]
    {
        println!("On Linux, install SDL2 with your package manager,");
        println!("e.g. sudo apt-get install libsdl2-dev libsdl2-image-dev libsdl2-ttf-dev");
    }

    #[cfg(target_os = "windows")]
    {
        println!("On Windows, make sure the SDL2 libraries are in your PATH.");
    }
}

#[cfg(target_os = "macos")]
fn homebrew_prefix(package: &str) -> Option<String> {
    let output = std::process::Command::new("brew")
        .args(["--prefix", package])
        .output()
        .ok()?;
    if output.status.success() {
        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        None
    }
}
