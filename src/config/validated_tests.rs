//! Tests for configuration merging and validation.

use std::path::PathBuf;

use super::*;

fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["envedit"];
    argv.extend_from_slice(args);
    Cli::parse_from_iter(argv)
}

fn write_config(dir: &tempfile::TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("envedit.toml");
    std::fs::write(&path, body).unwrap();
    path
}

mod defaults_only {
    use super::*;

    #[test]
    fn built_in_defaults_apply() {
        let config = ValidatedConfig::load(&cli(&[])).unwrap();

        assert_eq!(config.env_file, PathBuf::from(defaults::ENV_FILE));
        assert_eq!(config.template_file, PathBuf::from(defaults::TEMPLATE_FILE));
        assert_eq!(config.ssl_dir, PathBuf::from(defaults::SSL_DIR));
        assert_eq!(config.ui_dir, PathBuf::from(defaults::UI_DIR));
        assert_eq!(config.listen, Listen::Tcp(defaults::LISTEN.to_string()));
        assert!(config.restart_command.is_empty());
        assert_eq!(config.tls_key, defaults::TLS_KEY);
        assert!(!config.verbose);
    }
}

mod precedence {
    use super::*;

    #[test]
    fn cli_beats_toml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, "[paths]\nenv_file = \"/from/toml/.env\"\n");

        let config = ValidatedConfig::load(&cli(&[
            "--config",
            path.to_str().unwrap(),
            "--env-file",
            "/from/cli/.env",
        ]))
        .unwrap();

        assert_eq!(config.env_file, PathBuf::from("/from/cli/.env"));
    }

    #[test]
    fn toml_beats_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "[paths]\nenv_file = \"/from/toml/.env\"\n[ssl]\ntls_key = \"VW_TLS\"\n",
        );

        let config =
            ValidatedConfig::load(&cli(&["--config", path.to_str().unwrap()])).unwrap();

        assert_eq!(config.env_file, PathBuf::from("/from/toml/.env"));
        assert_eq!(config.tls_key, "VW_TLS");
        // Untouched options keep their defaults.
        assert_eq!(config.ssl_dir, PathBuf::from(defaults::SSL_DIR));
    }

    #[test]
    fn cli_restart_command_replaces_toml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, "[restart]\ncommand = [\"/toml/ctl\", \"restart\"]\n");

        let config = ValidatedConfig::load(&cli(&[
            "--config",
            path.to_str().unwrap(),
            "--restart-command",
            "/cli/ctl",
        ]))
        .unwrap();

        assert_eq!(config.restart_command, vec!["/cli/ctl"]);
    }
}

mod listener {
    use super::*;

    #[test]
    fn cli_listen_sets_tcp() {
        let config = ValidatedConfig::load(&cli(&["--listen", "0.0.0.0:9000"])).unwrap();
        assert_eq!(config.listen, Listen::Tcp("0.0.0.0:9000".to_string()));
    }

    #[cfg(unix)]
    #[test]
    fn cli_socket_sets_unix() {
        let config = ValidatedConfig::load(&cli(&["--socket", "/run/envedit.sock"])).unwrap();
        assert_eq!(config.listen, Listen::Unix(PathBuf::from("/run/envedit.sock")));
    }

    #[cfg(unix)]
    #[test]
    fn cli_listen_overrides_toml_socket() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, "[server]\nsocket = \"/run/toml.sock\"\n");

        let config = ValidatedConfig::load(&cli(&[
            "--config",
            path.to_str().unwrap(),
            "--listen",
            "127.0.0.1:1234",
        ]))
        .unwrap();

        assert_eq!(config.listen, Listen::Tcp("127.0.0.1:1234".to_string()));
    }

    #[test]
    fn toml_listen_and_socket_conflict() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "[server]\nlisten = \"127.0.0.1:1\"\nsocket = \"/run/s\"\n",
        );

        let err = ValidatedConfig::load(&cli(&["--config", path.to_str().unwrap()])).unwrap_err();
        assert!(matches!(err, ConfigError::ConflictingListeners));
    }
}

mod validation {
    use super::*;

    #[test]
    fn lowercase_tls_key_is_rejected() {
        let err = ValidatedConfig::load(&cli(&["--tls-key", "rocket_tls"])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTlsKey { name } if name == "rocket_tls"));
    }

    #[test]
    fn uppercase_tls_key_is_accepted() {
        let config = ValidatedConfig::load(&cli(&["--tls-key", "MY_TLS_2"])).unwrap();
        assert_eq!(config.tls_key, "MY_TLS_2");
    }

    #[test]
    fn unknown_toml_key_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, "[paths]\nenv = \"typo\"\n");

        let err = ValidatedConfig::load(&cli(&["--config", path.to_str().unwrap()])).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn empty_restart_program_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, "[restart]\ncommand = [\"\"]\n");

        let err = ValidatedConfig::load(&cli(&["--config", path.to_str().unwrap()])).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyRestartProgram));
    }

    #[test]
    fn blank_restart_program_is_rejected() {
        let err =
            ValidatedConfig::load(&cli(&["--restart-command", "   "])).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyRestartProgram));
    }

    #[test]
    fn restart_program_with_empty_argument_is_accepted() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir, "[restart]\ncommand = [\"/scripts/ctl\", \"\"]\n");

        let config = ValidatedConfig::load(&cli(&["--config", path.to_str().unwrap()])).unwrap();
        assert_eq!(config.restart_command, vec!["/scripts/ctl", ""]);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let err = ValidatedConfig::load(&cli(&["--config", "/nonexistent/envedit.toml"]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }
}

mod init_template {
    use super::*;

    #[test]
    fn generated_template_is_valid_toml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("generated.toml");
        write_default_config(&path).unwrap();

        // Everything in the template is commented out, so it must parse as
        // an all-default configuration.
        let parsed = TomlConfig::load(&path).unwrap();
        assert!(parsed.paths.env_file.is_none());
        assert!(parsed.restart.command.is_empty());
    }
}
