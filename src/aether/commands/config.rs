use crate::commands::{CmdMessage, CmdResult};
use crate::config::AetherConfig;
use crate::error::{AetherError, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or changes the config file.
///
/// Changes take effect from the next session; the running store keeps the
/// settings it was opened with.
pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = AetherConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = AetherConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(format!("{} = {}", key, val))),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = AetherConfig::load(dir)?;
            match config.set(&key, &value) {
                Ok(()) => {}
                Err(AetherError::Config(e)) => {
                    let mut res = CmdResult::default();
                    res.add_message(CmdMessage::error(e));
                    return Ok(res);
                }
                Err(e) => return Err(e),
            }
            config.save(dir)?;

            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn set_persists_and_show_reads_back() {
        let dir = tempfile::tempdir().unwrap();

        let result = run(
            dir.path(),
            ConfigAction::Set("dedup-links".into(), "true".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "dedup-links set to true");

        let shown = run(dir.path(), ConfigAction::ShowKey("dedup-links".into())).unwrap();
        assert_eq!(shown.messages[0].content, "dedup-links = true");

        let all = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert!(all.config.unwrap().dedup_links);
    }

    #[test]
    fn unknown_key_is_reported_not_raised() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::Set("theme".into(), "zen".into())).unwrap();
        assert!(result.has_level(MessageLevel::Error));
        assert!(!dir.path().join("config.json").exists());
    }
}
