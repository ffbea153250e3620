use roshambo_cli::commands::{PlayOptions, handle_play_command};
use roshambo_cli::run;
use serde_json::Value;
use serial_test::serial;
use std::io::Write;

const VARS: &[&str] = &[
    "ROSHAMBO_CONFIG",
    "ROSHAMBO_BEST_OF",
    "ROSHAMBO_SEED",
    "ROSHAMBO_ANIMATION",
    "ROSHAMBO_SPINS",
    "ROSHAMBO_ASCII",
];

/// Clears every config variable, applies `pairs`, and restores the previous
/// values on drop.
struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn apply(pairs: &[(&str, &str)]) -> Self {
        let restores = VARS
            .iter()
            .map(|key| (key.to_string(), std::env::var(key).ok()))
            .collect();
        for key in VARS {
            unsafe {
                std::env::remove_var(key);
            }
        }
        for (key, value) in pairs {
            unsafe {
                std::env::set_var(key, value);
            }
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            match previous {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}

fn cfg_json() -> (i32, Option<Value>, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["roshambo", "cfg"], &mut out, &mut err);
    let json = serde_json::from_slice(&out).ok();
    (code, json, String::from_utf8_lossy(&err).to_string())
}

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
#[serial]
fn defaults_when_nothing_is_set() {
    let _env = EnvGuard::apply(&[]);
    let (code, json, _) = cfg_json();
    assert_eq!(code, 0);
    let json = json.expect("cfg output should be JSON");

    assert_eq!(json["best_of"]["value"].as_u64(), Some(3));
    assert_eq!(json["best_of"]["source"].as_str(), Some("default"));
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["animation"]["value"].as_bool(), Some(true));
    assert_eq!(json["spins"]["value"].as_u64(), Some(9));
    assert_eq!(json["ascii"]["value"].as_bool(), Some(false));
}

#[test]
#[serial]
fn file_values_are_reported_with_file_source() {
    let file = config_file("best_of = 5\nseed = 456\nanimation = false\n");
    let path = file.path().to_string_lossy().to_string();
    let _env = EnvGuard::apply(&[("ROSHAMBO_CONFIG", &path)]);

    let (code, json, _) = cfg_json();
    assert_eq!(code, 0);
    let json = json.unwrap();
    assert_eq!(json["best_of"]["value"].as_u64(), Some(5));
    assert_eq!(json["best_of"]["source"].as_str(), Some("file"));
    assert_eq!(json["seed"]["value"].as_u64(), Some(456));
    assert_eq!(json["animation"]["value"].as_bool(), Some(false));
    assert_eq!(json["spins"]["source"].as_str(), Some("default"));
}

#[test]
#[serial]
fn env_overrides_file() {
    let file = config_file("best_of = 5\nseed = 456\n");
    let path = file.path().to_string_lossy().to_string();
    let _env = EnvGuard::apply(&[
        ("ROSHAMBO_CONFIG", &path),
        ("ROSHAMBO_BEST_OF", "7"),
        ("ROSHAMBO_ASCII", "yes"),
    ]);

    let (code, json, _) = cfg_json();
    assert_eq!(code, 0);
    let json = json.unwrap();
    assert_eq!(json["best_of"]["value"].as_u64(), Some(7));
    assert_eq!(json["best_of"]["source"].as_str(), Some("env"));
    assert_eq!(json["seed"]["source"].as_str(), Some("file"));
    assert_eq!(json["ascii"]["value"].as_bool(), Some(true));
    assert_eq!(json["ascii"]["source"].as_str(), Some("env"));
}

#[test]
#[serial]
fn even_best_of_in_env_is_rejected() {
    let _env = EnvGuard::apply(&[("ROSHAMBO_BEST_OF", "4")]);
    let (code, json, stderr) = cfg_json();
    assert_eq!(code, 2);
    assert!(json.is_none());
    assert!(stderr.contains("best_of"));
}

#[test]
#[serial]
fn unparsable_bool_is_rejected() {
    let _env = EnvGuard::apply(&[("ROSHAMBO_ANIMATION", "sometimes")]);
    let (code, _, stderr) = cfg_json();
    assert_eq!(code, 2);
    assert!(stderr.contains("ROSHAMBO_ANIMATION"));
}

#[test]
#[serial]
fn unknown_file_key_is_rejected() {
    let file = config_file("best_of = 3\nlevel = 2\n");
    let path = file.path().to_string_lossy().to_string();
    let _env = EnvGuard::apply(&[("ROSHAMBO_CONFIG", &path)]);
    let (code, _, stderr) = cfg_json();
    assert_eq!(code, 2);
    assert!(stderr.contains("Configuration error"));
}

#[test]
#[serial]
fn missing_config_file_is_an_error() {
    let _env = EnvGuard::apply(&[("ROSHAMBO_CONFIG", "/nonexistent/roshambo.toml")]);
    let (code, _, stderr) = cfg_json();
    assert_eq!(code, 2);
    assert!(stderr.contains("cannot read config file"));
}

#[test]
#[serial]
fn invalid_config_stops_play_before_reading_input() {
    let _env = EnvGuard::apply(&[("ROSHAMBO_SPINS", "51")]);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["roshambo", "play", "--no-animation"], &mut out, &mut err);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(String::from_utf8_lossy(&err).contains("spins must be <= 50"));
}

#[test]
#[serial]
fn cli_flag_beats_env_for_play() {
    let _env = EnvGuard::apply(&[("ROSHAMBO_BEST_OF", "5")]);
    let mut out = Vec::new();
    let mut err = Vec::new();
    // an even flag value must fail even though the env value is valid
    let code = run(["roshambo", "play", "--best-of", "6"], &mut out, &mut err);
    assert_eq!(code, 2);
    assert!(String::from_utf8_lossy(&err).contains("got 6"));
}

fn play_with_flag(best_of: Option<i64>) -> (Result<(), roshambo_cli::CliError>, String) {
    let cfg = roshambo_cli::config::load().expect("best_of is left to the engine");
    let opts = PlayOptions::from(&cfg).with_overrides(best_of, Some(3), true, None, true);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = std::io::Cursor::new("");
    let result = handle_play_command(opts, &mut out, &mut err, &mut stdin);
    (result, String::from_utf8_lossy(&out).to_string())
}

#[test]
#[serial]
fn best_of_flag_replaces_invalid_env_value() {
    let _env = EnvGuard::apply(&[("ROSHAMBO_BEST_OF", "4")]);
    let (result, out) = play_with_flag(Some(5));
    assert!(result.is_ok(), "unexpected error: {:?}", result);
    assert!(out.starts_with("play: best_of=5 seed=3\n"));
}

#[test]
#[serial]
fn invalid_env_best_of_without_flag_fails_in_engine() {
    let _env = EnvGuard::apply(&[("ROSHAMBO_BEST_OF", "4")]);
    let (result, out) = play_with_flag(None);
    match result {
        Err(roshambo_cli::CliError::InvalidInput(msg)) => {
            assert_eq!(msg, "Number must be positive and odd, got 4")
        }
        other => panic!("expected InvalidInput, got {:?}", other),
    }
    assert!(out.is_empty());
}
