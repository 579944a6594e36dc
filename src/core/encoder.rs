//! 이름 -> Soundex 코드 통합 인코더

use serde::Serialize;

use crate::core::soundex_fsm::SoundexFsm;
use crate::core::trace::Step;

/// 인코딩 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodingResult {
    /// 입력 문자열 그대로
    pub original: String,
    /// 4자리 코드 (알파벳이 없는 입력이면 빈 문자열)
    pub code: String,
    /// 결정 기록 (표시 전용)
    pub steps: Vec<Step>,
}

impl EncodingResult {
    /// 코드가 생성되었는지 확인
    pub fn is_valid(&self) -> bool {
        !self.code.is_empty()
    }

    /// 결정 기록을 표시 문자열로 반환
    pub fn step_lines(&self) -> Vec<String> {
        self.steps.iter().map(|s| s.to_string()).collect()
    }
}

/// 대문자화 후 A~Z 이외 문자 제거
pub fn clean(name: &str) -> String {
    name.to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase())
        .collect()
}

/// 이름 하나를 Soundex 코드로 인코딩
/// 어떤 입력이든 결과를 반환하며, 알파벳이 없으면 빈 코드
pub fn encode(name: &str) -> EncodingResult {
    let cleaned = clean(name);

    if cleaned.is_empty() {
        log::trace!("알파벳 없는 입력: {:?}", name);
        return EncodingResult {
            original: name.to_string(),
            code: String::new(),
            steps: vec![Step::InvalidInput],
        };
    }

    let mut fsm = SoundexFsm::new();
    for c in cleaned.chars() {
        fsm.feed(c);
    }
    let (code, fsm_steps) = fsm.finish();

    let mut steps = Vec::with_capacity(fsm_steps.len() + 2);
    steps.push(Step::Original(name.to_string()));
    steps.push(Step::Cleaned(cleaned));
    steps.extend(fsm_steps);

    log::trace!("{:?} -> {}", name, code);

    EncodingResult {
        original: name.to_string(),
        code,
        steps,
    }
}

/// `encode`의 별칭
pub fn generate_soundex(name: &str) -> EncodingResult {
    encode(name)
}

/// 두 이름이 같은 (비어 있지 않은) 코드를 갖는지 확인
pub fn are_similar(name1: &str, name2: &str) -> bool {
    let code1 = encode(name1).code;
    let code2 = encode(name2).code;
    !code1.is_empty() && code1 == code2
}
