//! Configuration loading tests

use std::io::Write;

use serial_test::serial;
use xfchat_lists::egui_app::config::MESSAGE_REQUESTS_ENV;
use xfchat_lists::egui_app::{Config, Theme};
use xfchat_lists::shared::config::{ConfigError, ThemeVariant};
use crate::{assert_err, assert_ok};

#[test]
#[serial]
fn test_full_config_file() {
    std::env::remove_var(MESSAGE_REQUESTS_ENV);
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
message_requests_banner = true
verified_user_ids = ["team-1"]
theme = "light"
friend_avatar_size = 32.0
chat_avatar_size = 52.0
"#
    )
    .unwrap();

    let config = assert_ok!(Config::load_from(file.path()));
    let lists = config.lists();
    assert!(lists.message_requests_banner);
    assert_eq!(lists.theme, ThemeVariant::Light);
    assert_eq!(lists.friend_avatar_size, 32.0);
    assert_eq!(lists.chat_avatar_size, 52.0);
    assert_eq!(config.theme(), Theme::light());
    assert!(config.badges().is_verified("team-1"));
}

#[test]
#[serial]
fn test_env_override_beats_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "message_requests_banner = true").unwrap();

    std::env::set_var(MESSAGE_REQUESTS_ENV, "0");
    let result = Config::load_from(file.path());
    std::env::remove_var(MESSAGE_REQUESTS_ENV);

    let config = assert_ok!(result);
    assert!(!config.lists().message_requests_banner);
}

#[test]
#[serial]
fn test_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "message_requests_banner = \"maybe\"").unwrap();
    assert_err!(Config::load_from(file.path()), ConfigError::Parse(_));
}
