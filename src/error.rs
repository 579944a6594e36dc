//! 입출력 에러 (인코딩/그룹화 자체는 실패하지 않음)

/// 설정, 내보내기, 이름 파일 읽기 에러
#[derive(Debug)]
pub enum SoundexError {
    /// 파일 읽기/쓰기 실패
    Io(std::io::Error),
    /// JSON 직렬화/파싱 실패
    Json(serde_json::Error),
    /// 잘못된 입력
    Input(String),
}

impl std::fmt::Display for SoundexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoundexError::Io(e) => write!(f, "파일 입출력 오류: {}", e),
            SoundexError::Json(e) => write!(f, "JSON 처리 오류: {}", e),
            SoundexError::Input(s) => write!(f, "입력 오류: {}", s),
        }
    }
}

impl std::error::Error for SoundexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SoundexError::Io(e) => Some(e),
            SoundexError::Json(e) => Some(e),
            SoundexError::Input(_) => None,
        }
    }
}

impl From<std::io::Error> for SoundexError {
    fn from(e: std::io::Error) -> Self {
        SoundexError::Io(e)
    }
}

impl From<serde_json::Error> for SoundexError {
    fn from(e: serde_json::Error) -> Self {
        SoundexError::Json(e)
    }
}
