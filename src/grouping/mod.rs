//! 이름 일괄 그룹화
//!
//! 여러 이름을 Soundex 코드로 묶어 발음이 비슷한 이름을 찾습니다.
//!
//! # 사용 예시
//!
//! ```
//! use soundex::grouping::group;
//!
//! let groups = group(&["Robert", "Rupert", "Smith", "Smythe"]);
//! assert_eq!(groups[0].code, "R163");
//! assert_eq!(groups[0].names, vec!["Robert", "Rupert"]);
//! assert_eq!(groups[1].code, "S530");
//! ```
//!
//! 알파벳이 없는 이름은 코드가 비어 결과에서 빠집니다.
//! 빠진 이름이 필요하면 [`partition`]을 사용합니다.

mod batch;

pub use batch::{group, partition, BatchOutcome, NameGroup};

/// 예제 이름 목록
pub const SAMPLE_NAMES: [&str; 16] = [
    "Robert",
    "Rupert",
    "Rubin",
    "Smith",
    "Smythe",
    "Schmidt",
    "Johnson",
    "Jonson",
    "Catherine",
    "Katherine",
    "Ashcraft",
    "Ashcroft",
    "Peterson",
    "Petersen",
    "Lee",
    "Leigh",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_batch() {
        let groups = group(&SAMPLE_NAMES);
        let codes: Vec<&str> = groups.iter().map(|g| g.code.as_str()).collect();
        assert_eq!(
            codes,
            vec!["S530", "R163", "J525", "A226", "P362", "R150", "C365", "K365", "L000", "L200"]
        );
        assert_eq!(groups[0].names, vec!["Smith", "Smythe", "Schmidt"]);

        let total: usize = groups.iter().map(|g| g.len()).sum();
        assert_eq!(total, SAMPLE_NAMES.len());
    }
}
