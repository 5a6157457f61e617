use std::io::ErrorKind;
use std::path::PathBuf;
use std::{env, fs, io};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Paths {
    pub posts_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct Defaults {
    pub page_size: u32,
    #[serde(default)]
    pub include_drafts: bool,
}

#[derive(Debug, Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Copy, Clone)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub paths: Paths,
    pub defaults: Defaults,
    pub log: Option<Log>,
}

fn parse_path(path: PathBuf) -> PathBuf {
    if path.starts_with("${exe_dir}") {
        let cur_exe = env::current_exe().unwrap();
        let exe_dir = cur_exe.parent().unwrap().to_str().unwrap();
        let str_path = path.to_str().unwrap();
        PathBuf::from(str_path.replace("${exe_dir}", exe_dir))
    } else {
        path
    }
}

pub fn read_config(cfg_path: &PathBuf) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.to_str().unwrap(), e))),
    };

    let mut cfg: Config = match toml::from_str::<Config>(cfg_content.as_str()) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    if cfg.defaults.page_size == 0 {
        return Err(io::Error::new(
            ErrorKind::InvalidData, "Error parsing configuration file: page_size must be at least 1".to_string()));
    }

    cfg.paths = Paths {
        posts_dir: parse_path(cfg.paths.posts_dir),
    };

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_str = r##"
[paths]
posts_dir = "posts"

[defaults]
page_size = 10

[log]
level = "Info"
log_to_console = true
"##;
        let cfg: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.paths.posts_dir, PathBuf::from("posts"));
        assert_eq!(cfg.defaults.page_size, 10);
        assert!(!cfg.defaults.include_drafts);
        assert!(cfg.log.is_some());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let toml_str = r##"
[paths]
posts_dir = "posts"

[defaults]
page_size = 0
"##;
        let dir = tempfile::tempdir().unwrap();
        let cfg_path = dir.path().join("galley.toml");
        fs::write(&cfg_path, toml_str).unwrap();

        let err = read_config(&cfg_path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert!(err.to_string().contains("page_size"));
    }
}
