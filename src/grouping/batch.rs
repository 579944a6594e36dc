//! 코드별 이름 그룹화
//!
//! 이름마다 인코더를 호출하고 같은 코드끼리 모은 뒤,
//! 그룹 크기 내림차순으로 정렬합니다 (동률은 처음 등장한 순서 유지).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::encoder::encode;

/// 같은 Soundex 코드를 갖는 이름 묶음
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameGroup {
    /// 공통 4자리 코드
    pub code: String,
    /// 입력 순서대로의 원본 이름 (중복 제거 없음)
    pub names: Vec<String>,
}

impl NameGroup {
    /// 그룹 크기
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// 빈 그룹인지 확인 (그룹화 결과에는 나오지 않음)
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// 그룹화 결과 + 제외된 이름
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    /// 크기 내림차순 그룹
    pub groups: Vec<NameGroup>,
    /// 알파벳이 없어 코드가 비어 제외된 이름 (입력 순서)
    pub rejected: Vec<String>,
}

/// 이름 목록을 그룹화하고 제외된 이름도 함께 반환
pub fn partition<S: AsRef<str>>(names: &[S]) -> BatchOutcome {
    let mut groups: Vec<NameGroup> = Vec::new();
    // 코드 -> groups 인덱스 (처음 등장한 순서 보존)
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut rejected = Vec::new();

    for name in names {
        let name = name.as_ref();
        let result = encode(name);

        if !result.is_valid() {
            log::debug!("코드 없음, 그룹에서 제외: {:?}", name);
            rejected.push(name.to_string());
            continue;
        }

        match index.get(&result.code) {
            Some(&i) => groups[i].names.push(name.to_string()),
            None => {
                index.insert(result.code.clone(), groups.len());
                groups.push(NameGroup {
                    code: result.code,
                    names: vec![name.to_string()],
                });
            }
        }
    }

    // sort_by는 안정 정렬 -> 동률은 등장 순서 유지
    groups.sort_by(|a, b| b.len().cmp(&a.len()));

    log::debug!(
        "{}개 이름 -> {}개 그룹 ({}개 제외)",
        names.len(),
        groups.len(),
        rejected.len()
    );

    BatchOutcome { groups, rejected }
}

/// 이름 목록을 코드별로 그룹화
/// 코드가 빈 이름은 어떤 그룹에도 포함되지 않음
pub fn group<S: AsRef<str>>(names: &[S]) -> Vec<NameGroup> {
    partition(names).groups
}
