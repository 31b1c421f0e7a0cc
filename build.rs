use std::env;
use std::fs;
use std::path::Path;

/// Claves que `AppConfig::from_env` lee con `option_env!`
const CONFIG_KEYS: &[&str] = &[
    "API_BASE",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "LOGIN_PATH",
    "DASHBOARD_PATH",
    "DEFAULT_LOAN_DAYS",
    "ALERT_DISMISS_MS",
    "LOGOUT_TIMEOUT_MS",
];

fn main() {
    // Variables del entorno del build tienen prioridad sobre .env
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:rerun-if-changed=build.rs");
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=No se pudo leer .env, usando valores por defecto");
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim().trim_matches('"');
            if !CONFIG_KEYS.contains(&key) {
                println!("cargo:warning=Clave desconocida en .env: {}", key);
                continue;
            }
            if env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value);
            }
        }
    }
    println!("cargo:rerun-if-changed=build.rs");
}
