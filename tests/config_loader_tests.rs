//! Tests for layered configuration loading.

use anyhow::Result;
use sandwich_orders::config::ConfigLoader;
use std::{
    env, fs,
    sync::{Mutex, MutexGuard, OnceLock},
};
use tempfile::TempDir;

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn env_guard() -> MutexGuard<'static, ()> {
    env_lock()
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
}

fn clear_env() {
    unsafe {
        env::remove_var("SANDWICH_PROFILE");
        env::remove_var("SANDWICH_API_BIND_ADDR");
        env::remove_var("SANDWICH_LOG_LEVEL");
        env::remove_var("SANDWICH_DATABASE_URL");
        env::remove_var("PORT");
    }
}

#[test]
fn loads_defaults_from_empty_directory() -> Result<()> {
    let _guard = env_guard();
    clear_env();

    let dir = TempDir::new()?;
    let loader = ConfigLoader::with_base_dir(dir.path().to_path_buf());

    let config = loader.load()?;

    assert_eq!(config.bind_addr()?.port(), 3000);
    assert_eq!(config.database_url, "sqlite://sandwich_orders.db?mode=rwc");
    assert_eq!(config.log_level, "info");
    Ok(())
}

#[test]
fn env_file_overrides_defaults() -> Result<()> {
    let _guard = env_guard();
    clear_env();

    let dir = TempDir::new()?;
    fs::write(
        dir.path().join(".env"),
        "SANDWICH_API_BIND_ADDR=127.0.0.1:4100\nSANDWICH_DATABASE_URL=sqlite::memory:\n",
    )?;
    let loader = ConfigLoader::with_base_dir(dir.path().to_path_buf());

    let config = loader.load()?;

    assert_eq!(config.api_bind_addr, "127.0.0.1:4100");
    assert_eq!(config.database_url, "sqlite::memory:");
    Ok(())
}

#[test]
fn local_env_file_wins_over_base() -> Result<()> {
    let _guard = env_guard();
    clear_env();

    let dir = TempDir::new()?;
    fs::write(dir.path().join(".env"), "SANDWICH_LOG_LEVEL=warn\n")?;
    fs::write(dir.path().join(".env.local"), "SANDWICH_LOG_LEVEL=debug\n")?;
    let loader = ConfigLoader::with_base_dir(dir.path().to_path_buf());

    let config = loader.load()?;

    assert_eq!(config.log_level, "debug");
    Ok(())
}

#[test]
fn invalid_bind_addr_is_rejected() -> Result<()> {
    let _guard = env_guard();
    clear_env();

    let dir = TempDir::new()?;
    fs::write(dir.path().join(".env"), "SANDWICH_API_BIND_ADDR=not-an-addr\n")?;
    let loader = ConfigLoader::with_base_dir(dir.path().to_path_buf());

    assert!(loader.load().is_err());
    Ok(())
}

#[test]
fn unprefixed_variables_are_ignored() -> Result<()> {
    let _guard = env_guard();
    clear_env();

    let dir = TempDir::new()?;
    fs::write(
        dir.path().join(".env"),
        "LOG_LEVEL=trace\nSANDWICH_LOG_LEVEL=warn\n",
    )?;
    let loader = ConfigLoader::with_base_dir(dir.path().to_path_buf());

    let config = loader.load()?;

    assert_eq!(config.log_level, "warn");
    Ok(())
}

#[test]
fn port_variable_overrides_default_bind_port() -> Result<()> {
    let _guard = env_guard();
    clear_env();

    unsafe {
        env::set_var("PORT", "4444");
    }

    let dir = TempDir::new()?;
    let loader = ConfigLoader::with_base_dir(dir.path().to_path_buf());

    let config = loader.load()?;

    assert_eq!(config.api_bind_addr, "0.0.0.0:4444");
    assert_eq!(config.bind_addr()?.port(), 4444);

    clear_env();
    Ok(())
}

#[test]
fn port_variable_keeps_configured_host() -> Result<()> {
    let _guard = env_guard();
    clear_env();

    unsafe {
        env::set_var("PORT", "5555");
    }

    let dir = TempDir::new()?;
    fs::write(
        dir.path().join(".env"),
        "SANDWICH_API_BIND_ADDR=127.0.0.1:4100\n",
    )?;
    let loader = ConfigLoader::with_base_dir(dir.path().to_path_buf());

    let config = loader.load()?;

    assert_eq!(config.api_bind_addr, "127.0.0.1:5555");

    clear_env();
    Ok(())
}

#[test]
fn non_numeric_port_is_rejected() -> Result<()> {
    let _guard = env_guard();
    clear_env();

    unsafe {
        env::set_var("PORT", "not-a-port");
    }

    let dir = TempDir::new()?;
    let loader = ConfigLoader::with_base_dir(dir.path().to_path_buf());

    let err = loader.load().expect_err("non-numeric PORT must fail");
    assert!(format!("{}", err).contains("invalid PORT value"));

    clear_env();
    Ok(())
}
