//! Probe configuration
//!
//! Supports multiple profiles (debug, release) with different settings.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Deserializer, Serialize, de};

/// Environment variable selecting the profile when `--profile` is absent
pub const PROFILE_ENV_VAR: &str = "CHECK_NFS_PROFILE";

/// Prefix for configuration overrides from the environment
pub const ENV_PREFIX: &str = "CHECK_NFS";

/// Profile used when neither the CLI nor the environment chooses one
pub const DEFAULT_PROFILE: &str = "release";

const DEFAULT_COMMAND: [&str; 3] = ["nfsstat", "-c", "-l"];
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Probe configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// The active profile (debug, release, etc.)
    pub profile: String,
    /// Diagnostic command, program first
    ///
    /// Accepts a list or a shell-quoted command line such as `nfsstat -c -l`.
    #[serde(deserialize_with = "deserialize_command")]
    pub command: Vec<String>,
    /// Seconds the command may run before it is killed
    pub timeout_secs: u64,
    /// Whether a non-zero command exit is still parsed
    pub allow_fail: bool,
}

impl ProbeConfig {
    /// Loads configuration based on the specified profile
    ///
    /// Sources are layered in the following order:
    /// 1. Built-in defaults (`nfsstat -c -l`, 10s timeout)
    /// 2. config/{profile}.toml (profile-specific overrides)
    /// 3. Environment variables with prefix CHECK_NFS (e.g., CHECK_NFS__TIMEOUT_SECS=5)
    ///
    /// Config files are searched for in:
    /// 1. Next to the executable (target/debug/config or target/release/config)
    /// 2. In the current directory (./config)
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        let config_dir = Self::find_config_dir();
        Self::load_from_dir(config_dir.as_deref(), profile)
    }

    /// Loads configuration with profile files taken from `config_dir`
    pub fn load_from_dir(config_dir: Option<&Path>, profile: &str) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("command", DEFAULT_COMMAND.to_vec())?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .set_default("allow_fail", false)?;

        if let Some(dir) = config_dir {
            let profile_path = dir.join(profile);
            builder = builder.add_source(File::from(profile_path.as_path()).required(false));
        }

        // Use __ as separator for nested fields; the command arrives as one string
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.set_override("profile", profile)?.build()?;
        let probe: Self = config.try_deserialize()?;

        if probe.command.is_empty() {
            return Err(ConfigError::Message(format!(
                "profile '{}' configures an empty command",
                profile
            )));
        }

        Ok(probe)
    }

    /// Finds the config directory by searching in multiple locations
    fn find_config_dir() -> Option<PathBuf> {
        if let Ok(exe_path) = std::env::current_exe()
            && let Some(exe_dir) = exe_path.parent()
        {
            let config_dir = exe_dir.join("config");
            if config_dir.exists() {
                return Some(config_dir);
            }
        }

        let cwd_config = PathBuf::from("config");
        if cwd_config.exists() {
            return Some(cwd_config);
        }

        None
    }

    /// Applies a CLI timeout override
    pub fn with_timeout_secs(mut self, timeout_secs: Option<u64>) -> Self {
        if let Some(secs) = timeout_secs {
            self.timeout_secs = secs;
        }
        self
    }

    /// Timeout budget for the diagnostic command
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Reads a command as a list or as a shell-quoted line
///
/// `try_parsing` turns single words like `false` or `1` into scalars, so
/// those are read back as one-word commands.
fn deserialize_command<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct CommandVisitor;

    impl<'de> de::Visitor<'de> for CommandVisitor {
        type Value = Vec<String>;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("a command line string or a list of arguments")
        }

        fn visit_str<E: de::Error>(self, line: &str) -> Result<Self::Value, E> {
            shlex::split(line)
                .ok_or_else(|| E::custom(format!("unbalanced quoting in command '{}'", line)))
        }

        fn visit_bool<E: de::Error>(self, word: bool) -> Result<Self::Value, E> {
            Ok(vec![word.to_string()])
        }

        fn visit_i64<E: de::Error>(self, word: i64) -> Result<Self::Value, E> {
            Ok(vec![word.to_string()])
        }

        fn visit_u64<E: de::Error>(self, word: u64) -> Result<Self::Value, E> {
            Ok(vec![word.to_string()])
        }

        fn visit_f64<E: de::Error>(self, word: f64) -> Result<Self::Value, E> {
            Ok(vec![word.to_string()])
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut args = Vec::new();
            while let Some(arg) = seq.next_element::<String>()? {
                args.push(arg);
            }
            Ok(args)
        }
    }

    deserializer.deserialize_any(CommandVisitor)
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            profile: DEFAULT_PROFILE.to_string(),
            command: DEFAULT_COMMAND.iter().map(|s| s.to_string()).collect(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            allow_fail: false,
        }
    }
}
