use crate::error::Error;
use crate::mobileconfig::ProfileText;
use serde::Deserialize;
use serde_with::{serde_as, DurationSeconds};
use std::fs::File;
use std::io::BufReader;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

pub type Shared = Arc<Config>;

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub api_bind_addr: SocketAddr,
    #[serde_as(as = "DurationSeconds<u64>")]
    pub api_timeout: Duration,
    #[serde(default)]
    pub profile: ProfileText,
}

impl Config {
    /// Load a [`Config`] from the JSON file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IO`] if the path can't be opened, or [`Error::InvalidJSON`] if its
    /// content isn't a valid configuration.
    pub fn try_from_file(p: impl AsRef<Path>) -> Result<Self, Error> {
        let f = File::open(p)?;
        let reader = BufReader::new(f);
        let conf: Config = serde_json::from_reader(reader)?;
        Ok(conf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn profile_text_defaults_when_absent() {
        let conf: Config =
            serde_json::from_str(r#"{"api_bind_addr":"127.0.0.1:8080","api_timeout":5}"#)
                .unwrap();
        assert_eq!(conf.api_timeout, Duration::from_secs(5));
        assert_eq!(conf.profile, ProfileText::default());
    }

    #[test]
    fn partial_profile_text_keeps_other_defaults() {
        let conf: Config = serde_json::from_str(
            r#"{
                "api_bind_addr": "[::1]:8443",
                "api_timeout": 10,
                "profile": { "display_name": "Home DNS" }
            }"#,
        )
        .unwrap();
        assert_eq!(conf.profile.display_name, "Home DNS");
        assert_eq!(
            conf.profile.description,
            ProfileText::default().description
        );
    }

    #[test]
    fn try_from_file_reads_json() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(
            f,
            r#"{{"api_bind_addr":"0.0.0.0:80","api_timeout":1,"profile":{{"description":"d"}}}}"#
        )
        .unwrap();
        let conf = Config::try_from_file(f.path()).unwrap();
        assert_eq!(conf.api_bind_addr, "0.0.0.0:80".parse::<SocketAddr>().unwrap());
        assert_eq!(conf.profile.description, "d");
    }

    #[test]
    fn try_from_file_errors() {
        let missing = Config::try_from_file("/nonexistent/dnsprofile.json");
        assert!(matches!(missing, Err(Error::IO(_))));

        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "{{ not json").unwrap();
        let invalid = Config::try_from_file(f.path());
        assert!(matches!(invalid, Err(Error::InvalidJSON(_))));
    }
}
