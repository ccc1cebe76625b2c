//! Command-line flags

use clap::Parser;

use crate::config::{DEFAULT_PROFILE, PROFILE_ENV_VAR, ProbeConfig};
use crate::error::Result;

/// check_nfs_client: Nagios plugin reporting NFS client counters from `nfsstat -c -l`
#[derive(Parser, Debug, Default)]
#[command(name = "check_nfs_client")]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Log debug output
    #[arg(long)]
    pub debug: bool,

    /// Show build time and version number
    #[arg(long)]
    pub version: bool,

    /// Seconds nfsstat may run before it is killed (overrides the profile)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Configuration profile [default: $CHECK_NFS_PROFILE or release]
    #[arg(long, value_name = "NAME")]
    pub profile: Option<String>,
}

impl Cli {
    /// Profile chosen by flag, then environment, then default
    pub fn profile_name(&self) -> String {
        self.profile
            .clone()
            .or_else(|| std::env::var(PROFILE_ENV_VAR).ok())
            .unwrap_or_else(|| DEFAULT_PROFILE.to_string())
    }

    /// Loads the profile and applies flag overrides
    pub fn load_config(&self) -> Result<ProbeConfig> {
        let config = ProbeConfig::load(&self.profile_name())?;
        Ok(config.with_timeout_secs(self.timeout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "check_nfs_client",
            "--debug",
            "--timeout",
            "5",
            "--profile",
            "debug",
        ])
        .unwrap();

        assert!(cli.debug);
        assert!(!cli.version);
        assert_eq!(cli.timeout, Some(5));
        assert_eq!(cli.profile_name(), "debug");
    }

    #[test]
    fn version_flag_is_ours() {
        let cli = Cli::try_parse_from(["check_nfs_client", "--version"]).unwrap();
        assert!(cli.version);
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["check_nfs_client", "--warning", "3"]).is_err());
    }
}
