//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::processor::RunOptions;

/// conv-to-utf8 CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "conv-to-utf8",
    author = "YourName <your@email.com>",
    version,
    disable_version_flag = true,
    about = "CONVERT TO UTF-8 - 파일 인코딩을 감지하여 UTF-8로 변환하는 CLI 도구",
    long_about = r#"
CONVERT TO UTF-8
================

주어진 파일들의 문자 인코딩을 감지하여 UTF-8로 변환하고
파일을 그 자리에서 덮어씁니다.

  • 이미 UTF-8인 파일은 BOM 상태만 맞춤
  • 감지할 수 없는 파일은 건너뜀
  • 한 파일의 실패가 나머지 처리를 막지 않음

예제:
  conv-to-utf8 a.txt b.cpp
  conv-to-utf8 --with-bom src/*.h
  conv-to-utf8 --dry-run --verbose legacy.txt
"#
)]
pub struct Args {
    /// 변환할 파일 경로
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// UTF-8 BOM 포함 출력 (기본값: BOM 없음)
    #[arg(short = 'b', long)]
    pub with_bom: bool,

    /// 파일을 쓰지 않고 처리 결과만 표시
    #[arg(long)]
    pub dry_run: bool,

    /// 감지된 인코딩과 신뢰도 표시
    #[arg(long)]
    pub verbose: bool,

    /// 실패 로그 파일 경로
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// 버전 출력 후 종료
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: (),
}

impl Args {
    /// 실행 옵션 생성
    pub fn run_options(&self) -> RunOptions {
        RunOptions::new()
            .with_bom(self.with_bom)
            .with_dry_run(self.dry_run)
    }
}
