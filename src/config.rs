//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::SoundexError;
use crate::export::{OutputFormat, DEFAULT_EXPORT_FILE};

/// Soundex 도구 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SoundexConfig {
    /// 내보내기 파일 경로
    #[serde(default = "default_export_path")]
    pub export_path: String,
    /// 기본 출력 형식
    #[serde(default)]
    pub format: OutputFormat,
    /// encode 출력에 결정 기록 포함 여부
    #[serde(default)]
    pub show_steps: bool,
}

fn default_export_path() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

impl Default for SoundexConfig {
    fn default() -> Self {
        Self {
            export_path: default_export_path(),
            format: OutputFormat::default(),
            show_steps: false,
        }
    }
}

/// 설정 파일 경로: ~/.config/soundex/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("soundex").join("config.json")
}

/// 기본 경로에서 설정 로드
pub fn load_config() -> SoundexConfig {
    load_config_from(&config_path())
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_from(path: &Path) -> SoundexConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용: {} ({})", path.display(), e);
            SoundexConfig::default()
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => SoundexConfig::default(),
        Err(e) => {
            log::warn!("설정 파일 읽기 실패, 기본값 사용: {} ({})", path.display(), e);
            SoundexConfig::default()
        }
    }
}

/// 기본 경로에 설정 저장
pub fn save_config(config: &SoundexConfig) -> Result<(), SoundexError> {
    save_config_to(&config_path(), config)
}

/// 설정 파일 저장
pub fn save_config_to(path: &Path, config: &SoundexConfig) -> Result<(), SoundexError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
