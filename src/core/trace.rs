//! 인코딩 과정 기록 (UI/디버깅 표시용)

use std::fmt;

use serde::{Serialize, Serializer};

/// 인코딩 중 내려진 결정 하나
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// 알파벳이 하나도 없는 입력
    InvalidInput,
    /// 원본 입력
    Original(String),
    /// 대문자화 + A~Z 외 문자 제거 결과
    Cleaned(String),
    /// 그대로 유지되는 첫 글자
    FirstLetter(char),
    /// 첫 글자의 분류 숫자
    FirstLetterClass(char),
    /// 모음/무시 문자 (중복 추적 초기화)
    Ignored(char),
    /// 직전과 같은 분류라 생략됨
    Duplicate { letter: char, digit: char },
    /// 코드에 숫자 추가
    Appended {
        letter: char,
        digit: char,
        code: String,
    },
    /// 첫 글자 이후 모든 문자의 분류 숫자
    Mappings(Vec<(char, char)>),
    /// 4자리로 0 채움
    Padded { before: String, after: String },
    /// 4자리로 절단
    Truncated { before: String, after: String },
    /// 이미 4자리
    AlreadyFull(String),
    /// 최종 코드
    Final(String),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::InvalidInput => write!(f, "Invalid input: no alphabetic characters"),
            Step::Original(name) => write!(f, "Original name: {}", name),
            Step::Cleaned(cleaned) => write!(f, "Cleaned and uppercase: {}", cleaned),
            Step::FirstLetter(c) => write!(f, "First letter retained: {}", c),
            Step::FirstLetterClass(d) => write!(f, "First letter code mapping: {}", d),
            Step::Ignored(c) => write!(f, "{} is a vowel/ignored letter, skipped", c),
            Step::Duplicate { letter, digit } => {
                write!(f, "{} produces duplicate code {}, skipped", letter, digit)
            }
            Step::Appended { letter, digit, code } => {
                write!(f, "{} added as {}, current code: {}", letter, digit, code)
            }
            Step::Mappings(pairs) => {
                write!(f, "Character mappings: ")?;
                for (i, (c, d)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} → {}", c, d)?;
                }
                Ok(())
            }
            Step::Padded { before, after } => {
                write!(f, "Padded with zeros: {} → {}", before, after)
            }
            Step::Truncated { before, after } => {
                write!(f, "Truncated to 4 characters: {} → {}", before, after)
            }
            Step::AlreadyFull(code) => write!(f, "Already 4 characters: {}", code),
            Step::Final(code) => write!(f, "Final Soundex code: {}", code),
        }
    }
}

// JSON 출력에서는 표시 문자열 그대로 사용
impl Serialize for Step {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lines() {
        assert_eq!(
            Step::InvalidInput.to_string(),
            "Invalid input: no alphabetic characters"
        );
        assert_eq!(Step::FirstLetter('R').to_string(), "First letter retained: R");
        assert_eq!(
            Step::Duplicate {
                letter: 'F',
                digit: '1'
            }
            .to_string(),
            "F produces duplicate code 1, skipped"
        );
        assert_eq!(
            Step::Appended {
                letter: 'B',
                digit: '1',
                code: "R1".into()
            }
            .to_string(),
            "B added as 1, current code: R1"
        );
    }

    #[test]
    fn test_mappings_line() {
        let step = Step::Mappings(vec![('E', '0'), ('E', '0')]);
        assert_eq!(step.to_string(), "Character mappings: E → 0, E → 0");
        assert_eq!(Step::Mappings(vec![]).to_string(), "Character mappings: ");
    }

    #[test]
    fn test_length_lines() {
        let padded = Step::Padded {
            before: "L".into(),
            after: "L000".into(),
        };
        assert_eq!(padded.to_string(), "Padded with zeros: L → L000");

        let truncated = Step::Truncated {
            before: "J5252".into(),
            after: "J525".into(),
        };
        assert_eq!(truncated.to_string(), "Truncated to 4 characters: J5252 → J525");
    }

    #[test]
    fn test_serialize_as_string() {
        let json = serde_json::to_string(&Step::Final("R163".into())).unwrap();
        assert_eq!(json, "\"Final Soundex code: R163\"");
    }
}
