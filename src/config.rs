use std::env;
use std::str::FromStr;

use crate::logging::LogConfig;
use crate::selection::SelectionConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub enable_file_logs: bool,
    pub log_dir: String,
    /// 固定随机种子；缺省时调用方应使用非确定性随机源
    pub rng_seed: Option<u64>,
    pub selection: SelectionConfig,
}

impl Config {
    /// 先加载 `.env`（若存在），再读取环境变量
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    pub fn from_env() -> Self {
        let defaults = SelectionConfig::default();
        Self {
            log_level: env_or("RUST_LOG", "info"),
            enable_file_logs: env_or_bool("ENABLE_FILE_LOGS", false),
            log_dir: env_or("LOG_DIR", "./logs"),
            rng_seed: env_opt_parse("SELECTION_SEED"),
            selection: SelectionConfig {
                target_count: env_or_parse("SELECTION_TARGET_COUNT", defaults.target_count),
                max_questions_per_passage: env_or_parse(
                    "SELECTION_MAX_PER_PASSAGE",
                    defaults.max_questions_per_passage,
                ),
                min_unique_passage_percent: env_or_parse(
                    "SELECTION_MIN_UNIQUE_PERCENT",
                    defaults.min_unique_passage_percent,
                ),
                enforce_genre_balance: env_or_bool(
                    "SELECTION_GENRE_BALANCE",
                    defaults.enforce_genre_balance,
                ),
                difficulty_distribution: None,
            }
            .validated(),
        }
    }

    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            log_level: self.log_level.clone(),
            enable_file_logs: self.enable_file_logs,
            log_dir: self.log_dir.clone(),
        }
    }
}

pub fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn env_or_parse<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    match env::var(key) {
        Ok(raw) => match raw.trim().parse::<T>() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(
                    key,
                    value = %raw,
                    "Failed to parse env var, using default"
                );
                default
            }
        },
        Err(_) => default,
    }
}

fn env_opt_parse<T: FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Failed to parse env var, ignoring");
            None
        }
    }
}

pub fn env_or_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}
