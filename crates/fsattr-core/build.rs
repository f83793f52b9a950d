//! Build script for fsattr-core
//!
//! This script checks system requirements before compilation:
//! - Minimum Rust version (let-else and `Option::is_some_and` need Rust 1.70.0+)
//! - macOS version, when building on macOS
//!
//! ## Requirements
//!
//! - **Rust**: 1.70.0 or newer
//! - **macOS**: 10.10+ (Yosemite) for `getattrlistbulk`; 10.13+ (High Sierra)
//!   for the extended common attributes (`FSOPT_ATTR_CMN_EXTENDED`)
//! - **Other platforms**: no requirements, only the portable codec is built

fn main()
{
    println!("cargo:rerun-if-changed=build.rs");

    // Check minimum Rust version
    match (rustc_version::version(), rustc_version::Version::parse("1.70.0")) {
        (Ok(rustc_version), Ok(min_rust_version)) => {
            if rustc_version < min_rust_version {
                panic!("fsattr-core requires Rust {} or newer, found {}", min_rust_version, rustc_version);
            }
        }
        _ => {
            // If we can't get version (e.g., in some build environments), just warn
            println!("cargo:warning=could not verify Rust version");
        }
    }

    // Platform-specific checks
    #[cfg(target_os = "macos")]
    check_macos_requirements();
}

#[cfg(target_os = "macos")]
fn check_macos_requirements()
{
    // getattrlistbulk() was introduced in macOS 10.10 (Yosemite)
    let min_macos_version = (10, 10, 0);
    // ATTR_CMNEXT_* and FSOPT_ATTR_CMN_EXTENDED arrived in macOS 10.13 (High Sierra)
    let extended_macos_version = (10, 13, 0);

    if let Some(version) = get_macos_version() {
        if version < min_macos_version {
            panic!(
                "fsattr-core requires macOS {}.{}.{} or newer, found {}.{}.{}",
                min_macos_version.0, min_macos_version.1, min_macos_version.2, version.0, version.1, version.2
            );
        }
        if version < extended_macos_version {
            println!(
                "cargo:warning=macOS {}.{}.{} does not support extended common attributes; requests for them will fail with EINVAL",
                version.0, version.1, version.2
            );
        }
    } else {
        // If we can't detect macOS version, warn but don't fail
        // (might be cross-compiling)
        println!("cargo:warning=could not detect macOS version");
    }
}

#[cfg(target_os = "macos")]
fn get_macos_version() -> Option<(u32, u32, u32)>
{
    // Best-effort: may not work in all build environments
    use std::process::Command;

    let output = Command::new("sw_vers").arg("-productVersion").output().ok()?;

    let version_str = String::from_utf8(output.stdout).ok()?;
    let version_str = version_str.trim();

    // Parse version string (e.g., "14.2.1" or "11.0")
    let parts: Vec<&str> = version_str.split('.').collect();
    if parts.len() < 2 {
        return None;
    }

    let major = parts[0].parse::<u32>().ok()?;
    let minor = parts[1].parse::<u32>().ok()?;
    let patch = parts.get(2).and_then(|s| s.parse::<u32>().ok()).unwrap_or(0);

    Some((major, minor, patch))
}
