//! 그룹화 결과 출력/내보내기 (텍스트, JSON)

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::encoder::EncodingResult;
use crate::error::SoundexError;
use crate::grouping::NameGroup;

/// 기본 내보내기 파일 이름
pub const DEFAULT_EXPORT_FILE: &str = "soundex-results.txt";

/// 출력 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 사람이 읽는 텍스트
    #[default]
    Text,
    /// JSON
    Json,
}

/// 그룹 목록을 텍스트로 변환
///
/// ```text
/// Soundex Code: R163
/// Names (2): Robert, Rupert
///
/// Soundex Code: S530
/// Names (2): Smith, Smythe
/// ```
pub fn groups_to_text(groups: &[NameGroup]) -> String {
    groups
        .iter()
        .map(|g| {
            format!(
                "Soundex Code: {}\nNames ({}): {}\n",
                g.code,
                g.len(),
                g.names.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// 그룹 목록을 지정 형식 문자열로 변환
pub fn render_groups(groups: &[NameGroup], format: OutputFormat) -> Result<String, SoundexError> {
    match format {
        OutputFormat::Text => Ok(groups_to_text(groups)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(groups)?),
    }
}

/// 인코딩 결과 하나를 지정 형식 문자열로 변환
/// 텍스트 형식에서 show_steps가 켜져 있으면 결정 기록을 들여써서 추가
pub fn render_encoding(
    result: &EncodingResult,
    format: OutputFormat,
    show_steps: bool,
) -> Result<String, SoundexError> {
    match format {
        OutputFormat::Text => {
            let code = if result.is_valid() {
                result.code.as_str()
            } else {
                "(none)"
            };
            let mut out = format!("{}: {}\n", result.original, code);
            if show_steps {
                for line in result.step_lines() {
                    out.push_str("  ");
                    out.push_str(&line);
                    out.push('\n');
                }
            }
            Ok(out)
        }
        OutputFormat::Json => {
            if show_steps {
                Ok(serde_json::to_string_pretty(result)?)
            } else {
                let value = serde_json::json!({
                    "original": result.original,
                    "code": result.code,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
        }
    }
}

/// 경로를 지정하지 않은 내보내기의 파일 경로
/// JSON 형식이면 .txt 확장자를 .json으로 바꿈
pub fn default_export_path(configured: &str, format: OutputFormat) -> PathBuf {
    let path = PathBuf::from(configured);
    match format {
        OutputFormat::Json if path.extension().is_some_and(|ext| ext == "txt") => {
            path.with_extension("json")
        }
        _ => path,
    }
}

/// 그룹 목록을 파일로 내보내기 (상위 디렉토리 자동 생성)
pub fn write_export(
    path: &Path,
    groups: &[NameGroup],
    format: OutputFormat,
) -> Result<(), SoundexError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let content = render_groups(groups, format)?;
    fs::write(path, content)?;
    log::info!("결과 내보내기 완료: {} ({}개 그룹)", path.display(), groups.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::encoder::encode;
    use crate::grouping::group;

    #[test]
    fn test_text_export_format() {
        let groups = group(&["Robert", "Rupert", "Smith", "Smythe"]);
        assert_eq!(
            groups_to_text(&groups),
            "Soundex Code: R163\nNames (2): Robert, Rupert\n\nSoundex Code: S530\nNames (2): Smith, Smythe\n"
        );
    }

    #[test]
    fn test_text_export_empty() {
        assert_eq!(groups_to_text(&[]), "");
    }

    #[test]
    fn test_json_export() {
        let groups = group(&["Lee", "Leigh"]);
        let json = render_groups(&groups, OutputFormat::Json).unwrap();
        let parsed: Vec<NameGroup> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, groups);
    }

    #[test]
    fn test_render_encoding_text() {
        let out = render_encoding(&encode("Robert"), OutputFormat::Text, false).unwrap();
        assert_eq!(out, "Robert: R163\n");

        let out = render_encoding(&encode("123"), OutputFormat::Text, false).unwrap();
        assert_eq!(out, "123: (none)\n");

        let out = render_encoding(&encode("Lee"), OutputFormat::Text, true).unwrap();
        assert!(out.starts_with("Lee: L000\n  Original name: Lee\n"));
        assert!(out.ends_with("  Final Soundex code: L000\n"));
    }

    #[test]
    fn test_render_encoding_json() {
        let out = render_encoding(&encode("Smith"), OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["code"], "S530");
        assert!(value.get("steps").is_none());

        let out = render_encoding(&encode("Smith"), OutputFormat::Json, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["steps"][0], "Original name: Smith");
    }

    #[test]
    fn test_default_export_path() {
        assert_eq!(
            default_export_path(DEFAULT_EXPORT_FILE, OutputFormat::Text),
            PathBuf::from("soundex-results.txt")
        );
        assert_eq!(
            default_export_path(DEFAULT_EXPORT_FILE, OutputFormat::Json),
            PathBuf::from("soundex-results.json")
        );
        // 사용자가 지정한 다른 확장자는 유지
        assert_eq!(
            default_export_path("out/groups.data", OutputFormat::Json),
            PathBuf::from("out/groups.data")
        );
    }

    #[test]
    fn test_format_serde() {
        assert_eq!(serde_json::to_string(&OutputFormat::Json).unwrap(), "\"json\"");
        let parsed: OutputFormat = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(parsed, OutputFormat::Text);
    }
}
