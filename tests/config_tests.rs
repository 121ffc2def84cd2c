use localpass::config::config::{Config, ConfigError};
use localpass::vault::store::SerialMode;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn isolate(dir: &Path) {
    env::set_var("HOME", dir);
    env::set_var("LOCALPASS_CONFIG_DIR", dir.join("cfg"));
    env::set_var("LOCALPASS_DATA_DIR", dir.join("data"));
    for var in [
        "LOCALPASS_SEED_PATH",
        "LOCALPASS_SERIAL_MODE",
        "LOCALPASS_MASK_LIMIT",
        "LOCALPASS_LOG",
        "LOCALPASS_LOG_FILE",
    ] {
        env::remove_var(var);
    }
}

fn write_config_file(dir: &Path, content: &str) {
    let cfg_dir = dir.join("cfg").join("localpass");
    fs::create_dir_all(&cfg_dir).expect("create config dir");
    fs::write(cfg_dir.join("config.toml"), content).expect("write config file");
}

#[test]
#[serial]
fn defaults_without_file_or_env() {
    let td = tempdir().unwrap();
    isolate(td.path());
    let cfg = Config::create(None).unwrap();
    assert_eq!(cfg.serial_mode, SerialMode::Monotonic);
    assert_eq!(cfg.mask_limit, 12);
    assert_eq!(cfg.log_level, "warn");
    assert!(cfg.log_file.is_none());
    assert_eq!(
        cfg.seed_path,
        td.path().join("data").join("localpass").join("data.json")
    );
}

#[test]
#[serial]
fn seed_path_precedence_cli_over_env_over_file() {
    let td = tempdir().unwrap();
    isolate(td.path());
    write_config_file(td.path(), "seed_path = \"/tmp/file_seed.json\"\n");
    assert_eq!(
        Config::create(None).unwrap().seed_path,
        PathBuf::from("/tmp/file_seed.json")
    );

    env::set_var("LOCALPASS_SEED_PATH", "/tmp/env_seed.json");
    assert_eq!(
        Config::create(None).unwrap().seed_path,
        PathBuf::from("/tmp/env_seed.json")
    );

    let cli = PathBuf::from("/tmp/cli_seed.json");
    assert_eq!(Config::create(Some(cli.clone())).unwrap().seed_path, cli);
}

#[test]
#[serial]
fn serial_mode_and_mask_limit_from_file_then_env() {
    let td = tempdir().unwrap();
    isolate(td.path());
    write_config_file(td.path(), "serial_mode = \"length\"\nmask_limit = 8\n");
    let cfg = Config::create(None).unwrap();
    assert_eq!(cfg.serial_mode, SerialMode::Length);
    assert_eq!(cfg.mask_limit, 8);

    env::set_var("LOCALPASS_SERIAL_MODE", "monotonic");
    env::set_var("LOCALPASS_MASK_LIMIT", "4");
    let cfg = Config::create(None).unwrap();
    assert_eq!(cfg.serial_mode, SerialMode::Monotonic);
    assert_eq!(cfg.mask_limit, 4);
}

#[test]
#[serial]
fn invalid_env_values_are_errors() {
    let td = tempdir().unwrap();
    isolate(td.path());
    env::set_var("LOCALPASS_SERIAL_MODE", "random");
    assert!(matches!(
        Config::create(None),
        Err(ConfigError::UnknownSerialMode(_))
    ));

    env::remove_var("LOCALPASS_SERIAL_MODE");
    env::set_var("LOCALPASS_MASK_LIMIT", "0");
    assert!(matches!(
        Config::create(None),
        Err(ConfigError::InvalidMaskLimit(_))
    ));
}

#[test]
#[serial]
fn unparseable_config_file_falls_back_to_defaults() {
    let td = tempdir().unwrap();
    isolate(td.path());
    write_config_file(td.path(), "serial_mode = [not toml");
    let cfg = Config::create(None).unwrap();
    assert_eq!(cfg.serial_mode, SerialMode::Monotonic);
}

#[derive(Clone, Default)]
struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
#[serial]
fn bad_value_in_config_file_warns_and_uses_defaults() {
    let td = tempdir().unwrap();
    isolate(td.path());
    write_config_file(td.path(), "serial_mode = \"bogus\"\nmask_limit = 5\n");

    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let cfg = tracing::subscriber::with_default(subscriber, || Config::create(None)).unwrap();

    assert_eq!(cfg.serial_mode, SerialMode::Monotonic);
    assert_eq!(cfg.mask_limit, 12);
    let log = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(log.contains("ignoring unparseable config file"), "log was: {log}");
    assert!(log.contains("config.toml"));
}
