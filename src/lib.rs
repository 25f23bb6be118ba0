//! conv-to-utf8 - CONVERT TO UTF-8
//!
//! 주어진 파일들의 문자 인코딩을 감지하여 UTF-8로 변환하는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 🔍 **인코딩 감지**: chardetng 기반 감지 (BOM, ASCII 우선 처리)
//! - 🔄 **UTF-8 변환**: encoding_rs로 디코딩 후 UTF-8로 덮어쓰기
//! - 🔧 **BOM 관리**: UTF-8 파일의 BOM 추가/제거
//! - 🧪 **드라이런 모드**: 실제 쓰기 없이 처리 결과 미리 확인
//! - 📊 **처리 통계**: 변환/BOM 수정/건너뜀/실패 수 집계
//!
//! # 예제
//!
//! ```bash
//! # BOM 없는 UTF-8로 변환
//! conv-to-utf8 a.txt b.cpp
//!
//! # BOM 포함 UTF-8로 변환
//! conv-to-utf8 --with-bom a.txt
//! ```

pub mod cli;
pub mod detect;
pub mod error;
pub mod processor;
pub mod stats;

// Re-exports for convenient access
pub use cli::Args;
pub use detect::{ChardetDetector, Detection, Detector};
pub use error::{ConvertError, Result};
pub use processor::{
    decide, process_file, process_files, transcode, Action, FileResult, Outcome, RunOptions,
    UTF8_BOM,
};
pub use stats::RunStatistics;
