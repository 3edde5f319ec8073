use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 보고서 소수점 자릿수 상한.
pub const MAX_DECIMALS: usize = 6;

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// "auto", "uk", "en"
    pub language: String,
    /// 외부 언어팩 디렉터리(`<code>.toml`)
    pub language_pack_dir: Option<String>,
    /// 결과 보고서 소수점 자릿수
    pub decimals: usize,
    /// GUI 창 투명도(0.3~1.0)
    pub window_alpha: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            decimals: 2,
            window_alpha: 1.0,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성해 저장한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), "config loaded");
        Ok(cfg.sanitized())
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        info!(path = %path.display(), "default config created");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 TOML로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 범위를 벗어난 값을 허용 범위로 맞춘다.
    pub fn sanitized(mut self) -> Self {
        self.decimals = self.decimals.min(MAX_DECIMALS);
        self.window_alpha = if self.window_alpha.is_finite() {
            self.window_alpha.clamp(0.3, 1.0)
        } else {
            1.0
        };
        self
    }
}
