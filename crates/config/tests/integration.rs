//! Integration tests for config

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;
    use zprune_config::*;
    use zprune_types::{PruneMode, Region};

    // Mutex to ensure env var tests don't run concurrently
    static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        std::env::remove_var("ZPRUNE_SAVE_ROOT");
        std::env::remove_var("ZPRUNE_SKIP_MISSING");
        std::env::remove_var("ZPRUNE_MODE");
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[paths]
save_root = "Saves/Sandbox/Riverside"

[scan]
skip_missing = true
mode = "execute"

[regions.cell]
x = {{ start = 5400, end = 6000 }}
y = {{ start = 5100, end = 5700 }}

[regions.chunk]
x = {{ start = 18, end = 20 }}
y = {{ start = 17, end = 19 }}

[categories]
map = "cell"
chunkdata = "chunk"
zpop = "chunk"
        "#
        )
        .unwrap();

        let config = Config::load_from_file(temp_file.path()).unwrap();
        assert_eq!(config.paths.save_root, PathBuf::from("Saves/Sandbox/Riverside"));
        assert!(config.scan.skip_missing);
        assert_eq!(config.scan.mode, PruneMode::Execute);
        assert_eq!(config.regions["cell"], Region::new(5400..6000, 5100..5700));

        let targets = config.target_directories().unwrap();
        assert_eq!(targets[2], PathBuf::from("Saves/Sandbox/Riverside_player"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[scan]\nskip_missing = true").unwrap();

        let config = Config::load_from_file(temp_file.path()).unwrap();
        assert!(config.scan.skip_missing);
        assert_eq!(config.scan.mode, PruneMode::DryRun);
        assert_eq!(config.categories.len(), 3);
        assert_eq!(config.category_regions().unwrap().len(), 3);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = Config::load_from_file(std::path::Path::new("/nonexistent/zprune.toml"))
            .unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[scan\nmode = ").unwrap();
        let err = Config::load_from_file(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("parse error"));
    }

    #[test]
    fn test_invalid_mode_in_file() {
        let result = Config::from_toml("[scan]\nmode = \"delete-everything\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_env() {
        let _guard = ENV_TEST_MUTEX.lock().unwrap();
        clear_env();

        std::env::set_var("ZPRUNE_SAVE_ROOT", "Saves/Multiplayer/Other");
        std::env::set_var("ZPRUNE_SKIP_MISSING", "yes");
        std::env::set_var("ZPRUNE_MODE", "execute");

        let mut config = Config::default();
        config.merge_env().unwrap();

        assert_eq!(config.paths.save_root, PathBuf::from("Saves/Multiplayer/Other"));
        assert!(config.scan.skip_missing);
        assert_eq!(config.scan.mode, PruneMode::Execute);

        clear_env();
    }

    #[test]
    fn test_invalid_env_value() {
        let _guard = ENV_TEST_MUTEX.lock().unwrap();
        clear_env();

        std::env::set_var("ZPRUNE_SKIP_MISSING", "maybe");

        let mut config = Config::default();
        let result = config.merge_env();
        assert!(result.is_err());

        clear_env();
    }
}
