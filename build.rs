use std::process::Command;

fn main() {
    let version = Command::new("git")
        .args(["describe", "--tags", "--always"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .map(|out| {
            let raw = String::from_utf8_lossy(&out.stdout).trim().to_string();
            raw.strip_prefix('v').unwrap_or(&raw).to_string()
        })
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").into());

    println!("cargo:rustc-env=GIT_VERSION={version}");
}
