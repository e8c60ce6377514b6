fn main() {
    // Env vars win (set by CI builds); fall back to querying the local tools.
    emit("GIT_SHA", &["git", "rev-parse", "--short", "HEAD"]);
    emit("BUILD_DATE", &["date", "+%Y-%m-%d"]);
}

fn emit(var: &str, fallback_cmd: &[&str]) {
    let value = std::env::var(var).unwrap_or_else(|_| {
        std::process::Command::new(fallback_cmd[0])
            .args(&fallback_cmd[1..])
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "unknown".to_string())
    });

    println!("cargo:rustc-env={}={}", var, value);
}
