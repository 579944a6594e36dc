//! soundex 명령줄 인자 파싱

use std::io::BufRead;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::SoundexError;
use crate::export::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "soundex")]
#[command(version)]
#[command(about = "Soundex phonetic encoder and name grouper", long_about = None)]
pub struct Cli {
    /// 설정 파일 경로 (기본: ~/.config/soundex/config.json)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// 출력 형식 (설정 파일보다 우선)
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// debug 로그 출력 (RUST_LOG가 우선)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 이름을 Soundex 코드로 인코딩
    Encode {
        /// 인코딩할 이름
        #[arg(required = true)]
        names: Vec<String>,

        /// 인코딩 결정 과정 표시
        #[arg(long)]
        steps: bool,
    },

    /// 같은 Soundex 코드끼리 이름 그룹화 (입력이 없으면 stdin에서 읽음)
    Group {
        /// 그룹화할 이름
        names: Vec<String>,

        /// 한 줄에 이름 하나씩 적힌 파일에서 읽기
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// 내장 예제 이름 포함
        #[arg(long)]
        sample: bool,

        /// 그룹 결과를 파일로 내보내기 (경로 생략 시 설정값, JSON이면 .json 확장자)
        #[arg(long, value_name = "PATH", num_args = 0..=1)]
        export: Option<Option<PathBuf>>,
    },

    /// 두 이름의 Soundex 코드가 같은지 확인
    Similar {
        /// 첫 번째 이름
        first: String,
        /// 두 번째 이름
        second: String,
    },

    /// 문자-숫자 참조표 출력
    Table,

    /// 기본 설정 파일 생성 (--config 경로 또는 기본 경로)
    InitConfig {
        /// 기존 파일 덮어쓰기
        #[arg(long)]
        force: bool,
    },
}

/// 한 줄에 이름 하나씩 읽기 (앞뒤 공백 제거, 빈 줄 생략)
pub fn read_names<R: BufRead>(reader: R) -> Result<Vec<String>, SoundexError> {
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            names.push(trimmed.to_string());
        }
    }
    Ok(names)
}
