//! Soundex 중복 억제 유한 상태 기계 (FSM)

use std::cmp::Ordering;

use crate::core::classifier::{classify, PhoneticClass};
use crate::core::trace::Step;

/// Soundex 코드 길이 (첫 글자 + 숫자 3개)
pub const CODE_LENGTH: usize = 4;

/// FSM 상태 (직전 문자의 분류)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// 아무것도 없음
    Start,
    /// 직전 분류가 1~6
    Coded(PhoneticClass),
    /// 직전 문자가 모음/무시 문자 (중복 추적 초기화됨)
    Ignored,
}

impl State {
    fn after(class: PhoneticClass) -> Self {
        if class.is_ignored() {
            State::Ignored
        } else {
            State::Coded(class)
        }
    }
}

/// Soundex 인코딩 FSM
///
/// 소문자는 대문자로 바꾸고 A~Z 이외 문자는 무시한다. 첫 글자는 그대로 유지하고
/// 그 분류로 상태를 시작하므로, 첫 글자와 같은 분류의 바로 다음 자음은 생략된다.
#[derive(Debug)]
pub struct SoundexFsm {
    state: State,
    /// 조합 중인 코드 (길이 정규화 전)
    code: String,
    /// 결정 기록
    steps: Vec<Step>,
    /// 첫 글자 이후 문자별 분류 숫자
    mappings: Vec<(char, char)>,
}

impl SoundexFsm {
    /// 새 FSM 생성
    pub fn new() -> Self {
        Self {
            state: State::Start,
            code: String::with_capacity(CODE_LENGTH),
            steps: Vec::new(),
            mappings: Vec::new(),
        }
    }

    /// 문자 하나를 입력하여 상태 전이
    /// A~Z 이외 문자는 상태를 바꾸지 않고 버림
    pub fn feed(&mut self, letter: char) {
        let letter = letter.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return;
        }
        let class = classify(letter);
        match self.state {
            State::Start => {
                // 첫 글자는 분류와 무관하게 문자 그대로 유지
                self.code.push(letter);
                self.steps.push(Step::FirstLetter(letter));
                self.steps.push(Step::FirstLetterClass(class.digit()));
                self.state = State::after(class);
            }
            State::Coded(_) | State::Ignored => {
                self.mappings.push((letter, class.digit()));
                self.feed_follower(letter, class);
            }
        }
    }

    /// 첫 글자 이후 문자 처리
    fn feed_follower(&mut self, letter: char, class: PhoneticClass) {
        if class.is_ignored() {
            self.steps.push(Step::Ignored(letter));
            self.state = State::Ignored;
            return;
        }

        if self.state == State::Coded(class) {
            // 같은 분류 연속 -> 생략, 상태 유지
            self.steps.push(Step::Duplicate {
                letter,
                digit: class.digit(),
            });
            return;
        }

        self.code.push(class.digit());
        self.steps.push(Step::Appended {
            letter,
            digit: class.digit(),
            code: self.code.clone(),
        });
        self.state = State::Coded(class);
    }

    /// FSM 종료: 4자리로 정규화한 코드와 결정 기록 반환
    /// 아무 문자도 입력되지 않았으면 빈 코드
    pub fn finish(mut self) -> (String, Vec<Step>) {
        if self.state == State::Start {
            return (String::new(), vec![Step::InvalidInput]);
        }

        self.steps.push(Step::Mappings(self.mappings));

        let before = self.code;
        let code = match before.len().cmp(&CODE_LENGTH) {
            Ordering::Less => {
                let mut padded = before.clone();
                while padded.len() < CODE_LENGTH {
                    padded.push('0');
                }
                self.steps.push(Step::Padded {
                    before,
                    after: padded.clone(),
                });
                padded
            }
            Ordering::Greater => {
                // 코드는 ASCII만 포함
                let truncated = before[..CODE_LENGTH].to_string();
                self.steps.push(Step::Truncated {
                    before,
                    after: truncated.clone(),
                });
                truncated
            }
            Ordering::Equal => {
                self.steps.push(Step::AlreadyFull(before.clone()));
                before
            }
        };

        self.steps.push(Step::Final(code.clone()));
        (code, self.steps)
    }
}

impl Default for SoundexFsm {
    fn default() -> Self {
        Self::new()
    }
}
