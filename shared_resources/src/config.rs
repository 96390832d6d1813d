use std::fs;
use std::env;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};

use super::call::Floor;
use super::error::ConfigError;

pub const DEFAULT_MAX_CAPACITY: usize = 8;

const CONFIG_FILE: &str = "config.json";
const FALLBACK_CONFIG_FILE: &str = "_config.json";

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ServerSection {
    pub url: String,
    pub user_key: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        ServerSection {
            url: String::from("http://localhost:8000"),
            user_key: String::from("tester"),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SessionSection {
    pub problem: u8,
    pub elevator_count: u8,
}

impl Default for SessionSection {
    fn default() -> Self {
        SessionSection {
            problem: 1,
            elevator_count: 2,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ElevatorSection {
    pub max_capacity: usize,
    pub max_height: Option<Floor>,
}

impl Default for ElevatorSection {
    fn default() -> Self {
        ElevatorSection {
            max_capacity: DEFAULT_MAX_CAPACITY,
            max_height: None,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ConfigFile {
    pub server: ServerSection,
    pub session: SessionSection,
    pub elevator: ElevatorSection,
    pub debug: bool,
}

/// Building parameters consumed by the decision engine. Fixed for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchConfig {
    pub max_height: Floor,
    pub max_capacity: usize,
}

impl DispatchConfig {
    pub fn new(max_height: Floor, max_capacity: usize) -> Result<Self, ConfigError> {
        if max_height == 0 {
            return Err(ConfigError::NoFloors);
        }
        if max_capacity == 0 {
            return Err(ConfigError::NoCapacity);
        }
        Ok(DispatchConfig {
            max_height: max_height,
            max_capacity: max_capacity,
        })
    }

    pub fn for_problem(problem: u8) -> Result<Self, ConfigError> {
        let max_height = match problem {
            0 => 5,
            1 | 2 => 25,
            other => return Err(ConfigError::UnknownProblem(other)),
        };
        DispatchConfig::new(max_height, DEFAULT_MAX_CAPACITY)
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub url: String,
    pub user_key: String,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub problem: u8,
    pub elevator_count: u8,
}

#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub dispatch: DispatchConfig,
    pub debug: bool,
}

impl DispatcherConfig {
    pub fn get() -> Result<Self, ConfigError> {
        let config_file = read_config_file(Path::new(CONFIG_FILE), Path::new(FALLBACK_CONFIG_FILE))?;
        DispatcherConfig::from_parts(config_file, env::args().collect())
    }

    pub fn from_parts(mut config_file: ConfigFile, args: Vec<String>) -> Result<Self, ConfigError> {
        parse_env_args(&mut config_file, &args);

        let preset = DispatchConfig::for_problem(config_file.session.problem)?;
        let dispatch = DispatchConfig::new(
            config_file.elevator.max_height.unwrap_or(preset.max_height),
            config_file.elevator.max_capacity,
        )?;

        Ok(DispatcherConfig {
            server: ServerConfig {
                url: config_file.server.url,
                user_key: config_file.server.user_key,
            },
            session: SessionConfig {
                problem: config_file.session.problem,
                elevator_count: config_file.session.elevator_count,
            },
            dispatch: dispatch,
            debug: config_file.debug,
        })
    }
}

fn read_config_file(file_path: &Path, fallback_file_path: &Path) -> Result<ConfigFile, ConfigError> {
    for path in [file_path, fallback_file_path] {
        match fs::read_to_string(path) {
            Ok(content) => {
                return serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                    path: PathBuf::from(path),
                    source: source,
                });
            }
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(source) => {
                return Err(ConfigError::Read {
                    path: PathBuf::from(path),
                    source: source,
                });
            }
        }
    }
    info!("No configuration file provided, using default settings...");
    Ok(ConfigFile::default())
}

fn parse_env_args(config_file: &mut ConfigFile, args: &[String]) {
    for arg_pair in args.rchunks_exact(2) {
        match arg_pair[0].as_str() {
            "--problem" => match arg_pair[1].parse::<u8>() {
                Ok(num) => config_file.session.problem = num,
                Err(_) => warn!("problem {} is not a number, skipping...", arg_pair[1]),
            },
            "--elevators" => match arg_pair[1].parse::<u8>() {
                Ok(num) => config_file.session.elevator_count = num,
                Err(_) => warn!("elevators {} is not a number, skipping...", arg_pair[1]),
            },
            "--url" => config_file.server.url = arg_pair[1].clone(),
            "--user" => config_file.server.user_key = arg_pair[1].clone(),
            _ => warn!("illegal argument {}, skipping...", arg_pair[0]),
        }
    }
}
