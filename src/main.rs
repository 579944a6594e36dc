//! Soundex - 이름 음성 코드 생성 및 그룹화 도구

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use soundex::cli::{read_names, Cli, Command};
use soundex::config::{
    config_path, load_config, load_config_from, save_config, save_config_to, SoundexConfig,
};
use soundex::core::classifier::soundex_table;
use soundex::export::{
    default_export_path, render_encoding, render_groups, write_export, OutputFormat,
};
use soundex::{are_similar, encode, partition, SoundexError, SAMPLE_NAMES};

fn main() {
    let cli = Cli::parse();

    // 로깅 초기화 (기본 warn, -v 이면 debug)
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // 설정 로드
    let config = match &cli.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };

    if let Err(e) = run(&cli, &config) {
        eprintln!("오류: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &SoundexConfig) -> Result<(), SoundexError> {
    let format = cli.format.unwrap_or(config.format);

    match &cli.command {
        Command::Encode { names, steps } => {
            let show_steps = *steps || config.show_steps;
            for name in names {
                let result = encode(name);
                print!("{}", render_encoding(&result, format, show_steps)?);
                if format == OutputFormat::Json {
                    println!();
                }
            }
        }
        Command::Group {
            names,
            file,
            sample,
            export,
        } => {
            let input = collect_names(names, file.as_ref(), *sample)?;
            let outcome = partition(&input);

            if !outcome.rejected.is_empty() {
                log::warn!("알파벳이 없는 이름 {}개 제외됨", outcome.rejected.len());
                eprintln!(
                    "경고: 코드가 없어 제외된 이름: {}",
                    outcome
                        .rejected
                        .iter()
                        .map(|n| format!("{:?}", n))
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }

            let rendered = render_groups(&outcome.groups, format)?;
            if !rendered.is_empty() {
                println!("{}", rendered.trim_end());
            }

            if let Some(target) = export {
                let path = target
                    .clone()
                    .unwrap_or_else(|| default_export_path(&config.export_path, format));
                write_export(&path, &outcome.groups, format)?;
                eprintln!("내보내기 완료: {}", path.display());
            }
        }
        Command::Similar { first, second } => {
            let similar = are_similar(first, second);
            match format {
                OutputFormat::Text => println!("{}", similar),
                OutputFormat::Json => {
                    let value = serde_json::json!({
                        "first": encode(first).code,
                        "second": encode(second).code,
                        "similar": similar,
                    });
                    println!("{}", serde_json::to_string_pretty(&value)?);
                }
            }
        }
        Command::Table => match format {
            OutputFormat::Text => {
                for row in soundex_table() {
                    println!("{}  {:<24}{}", row.code, row.letters, row.description);
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(soundex_table())?);
            }
        },
        Command::InitConfig { force } => {
            let path = cli.config.clone().unwrap_or_else(config_path);
            if path.exists() && !*force {
                return Err(SoundexError::Input(format!(
                    "설정 파일이 이미 존재합니다: {} (--force로 덮어쓰기)",
                    path.display()
                )));
            }
            match &cli.config {
                Some(custom) => save_config_to(custom, &SoundexConfig::default())?,
                None => save_config(&SoundexConfig::default())?,
            }
            println!("{}", path.display());
        }
    }

    Ok(())
}

/// 예제, 파일, 인자 순서로 이름 수집 (모두 없으면 stdin)
fn collect_names(
    names: &[String],
    file: Option<&PathBuf>,
    sample: bool,
) -> Result<Vec<String>, SoundexError> {
    let mut input = Vec::new();

    if sample {
        input.extend(SAMPLE_NAMES.iter().map(|n| n.to_string()));
    }
    if let Some(path) = file {
        input.extend(read_names(BufReader::new(File::open(path)?))?);
    }
    input.extend(names.iter().map(|n| n.trim().to_string()).filter(|n| !n.is_empty()));

    if !sample && file.is_none() && names.is_empty() {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            return Err(SoundexError::Input(
                "이름을 인자, --file, --sample 또는 stdin으로 입력하세요".into(),
            ));
        }
        input.extend(read_names(stdin.lock())?);
    }

    Ok(input)
}
