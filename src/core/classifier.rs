//! 영문 자모 -> Soundex 음운 분류 매핑

use serde::Serialize;

/// 음운 분류 (Soundex 숫자 0~6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneticClass {
    /// 모음 및 무시 문자 (A, E, I, O, U, H, W, Y, 그 외 전부)
    Ignored,
    /// 순음 (B, F, P, V)
    Labial,
    /// 치찰음/연구개음 (C, G, J, K, Q, S, X, Z)
    Guttural,
    /// 치음 (D, T)
    Dental,
    /// 유음 (L)
    Liquid,
    /// 비음 (M, N)
    Nasal,
    /// 전동음 (R)
    Rhotic,
}

impl PhoneticClass {
    /// Soundex 코드에 쓰이는 숫자 문자
    pub fn digit(&self) -> char {
        match self {
            PhoneticClass::Ignored => '0',
            PhoneticClass::Labial => '1',
            PhoneticClass::Guttural => '2',
            PhoneticClass::Dental => '3',
            PhoneticClass::Liquid => '4',
            PhoneticClass::Nasal => '5',
            PhoneticClass::Rhotic => '6',
        }
    }

    /// 무시 문자인지 확인
    pub fn is_ignored(&self) -> bool {
        matches!(self, PhoneticClass::Ignored)
    }

    /// 참조표 설명
    pub fn description(&self) -> &'static str {
        match self {
            PhoneticClass::Ignored => "Vowels and ignored letters",
            PhoneticClass::Labial => "Labial consonants",
            PhoneticClass::Guttural => "Sibilants and velars",
            PhoneticClass::Dental => "Dental consonants",
            PhoneticClass::Liquid => "Liquid consonant",
            PhoneticClass::Nasal => "Nasal consonants",
            PhoneticClass::Rhotic => "Rhotic consonant",
        }
    }
}

use PhoneticClass::{Dental as D, Guttural as G, Ignored as I, Labial as B, Liquid as L};
use PhoneticClass::{Nasal as N, Rhotic as R};

/// A~Z 순서의 분류표
const CLASS_TABLE: [PhoneticClass; 26] = [
    I, B, G, D, I, B, G, I, I, G, G, L, N, // A B C D E F G H I J K L M
    N, I, B, G, R, G, D, I, B, I, G, I, G, // N O P Q R S T U V W X Y Z
];

/// 문자 하나를 음운 분류로 변환 (대소문자 무시)
/// A~Z 이외의 문자(숫자, 특수문자, 비ASCII)는 Ignored
pub fn classify(c: char) -> PhoneticClass {
    let upper = c.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        CLASS_TABLE[(upper as u8 - b'A') as usize]
    } else {
        PhoneticClass::Ignored
    }
}

/// 참조표 한 행
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassRow {
    /// 분류 숫자
    pub code: char,
    /// 해당 문자 목록
    pub letters: &'static str,
    /// 설명
    pub description: &'static str,
}

impl ClassRow {
    const fn new(code: char, letters: &'static str, description: &'static str) -> Self {
        Self {
            code,
            letters,
            description,
        }
    }
}

static SOUNDEX_TABLE: [ClassRow; 7] = [
    ClassRow::new('1', "B, F, P, V", "Labial consonants"),
    ClassRow::new('2', "C, G, J, K, Q, S, X, Z", "Sibilants and velars"),
    ClassRow::new('3', "D, T", "Dental consonants"),
    ClassRow::new('4', "L", "Liquid consonant"),
    ClassRow::new('5', "M, N", "Nasal consonants"),
    ClassRow::new('6', "R", "Rhotic consonant"),
    ClassRow::new('0', "A, E, I, O, U, H, W, Y", "Vowels and ignored letters"),
];

/// Soundex 참조표 (표시용 정적 데이터)
pub fn soundex_table() -> &'static [ClassRow] {
    &SOUNDEX_TABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consonant_groups() {
        for c in ['B', 'F', 'P', 'V'] {
            assert_eq!(classify(c), PhoneticClass::Labial);
        }
        for c in ['C', 'G', 'J', 'K', 'Q', 'S', 'X', 'Z'] {
            assert_eq!(classify(c), PhoneticClass::Guttural);
        }
        assert_eq!(classify('D'), PhoneticClass::Dental);
        assert_eq!(classify('T'), PhoneticClass::Dental);
        assert_eq!(classify('L'), PhoneticClass::Liquid);
        assert_eq!(classify('M'), PhoneticClass::Nasal);
        assert_eq!(classify('N'), PhoneticClass::Nasal);
        assert_eq!(classify('R'), PhoneticClass::Rhotic);
    }

    #[test]
    fn test_ignored_letters() {
        for c in ['A', 'E', 'I', 'O', 'U', 'H', 'W', 'Y'] {
            assert!(classify(c).is_ignored(), "{} should be ignored", c);
        }
    }

    #[test]
    fn test_case_insensitive() {
        for c in 'a'..='z' {
            assert_eq!(classify(c), classify(c.to_ascii_uppercase()));
        }
    }

    #[test]
    fn test_non_letters_default_to_ignored() {
        for c in ['1', ' ', '\'', '-', 'é', 'ß', '한'] {
            assert_eq!(classify(c), PhoneticClass::Ignored);
        }
    }

    #[test]
    fn test_digits() {
        assert_eq!(classify('b').digit(), '1');
        assert_eq!(classify('s').digit(), '2');
        assert_eq!(classify('t').digit(), '3');
        assert_eq!(classify('l').digit(), '4');
        assert_eq!(classify('n').digit(), '5');
        assert_eq!(classify('r').digit(), '6');
        assert_eq!(classify('a').digit(), '0');
    }

    #[test]
    fn test_table_matches_classifier() {
        let table = soundex_table();
        assert_eq!(table.len(), 7);

        for row in table {
            for letter in row.letters.split(", ") {
                let c = letter.chars().next().unwrap();
                let class = classify(c);
                assert_eq!(class.digit(), row.code, "{} in row {}", c, row.code);
                assert_eq!(class.description(), row.description);
            }
        }

        // 26개 문자가 모두 한 번씩 등장
        let total: usize = table.iter().map(|r| r.letters.split(", ").count()).sum();
        assert_eq!(total, 26);
    }
}
