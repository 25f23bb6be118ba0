//! 에러 타입 정의 모듈
//!
//! 파일 단위 처리 중 발생할 수 있는 에러 타입을 정의합니다.
//! 어떤 에러도 배치 전체를 중단시키지 않으며, 파일별 결과로만 기록됩니다.

use std::path::PathBuf;
use thiserror::Error;

/// 파일 변환 중 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum ConvertError {
    /// 파일 열기(읽기) 실패
    #[error("파일을 열 수 없습니다 ({file}): {reason}")]
    OpenFailure { file: PathBuf, reason: String },

    /// 인코딩 감지 실패
    #[error("인코딩을 감지할 수 없습니다: {file}")]
    DetectionAbsent { file: PathBuf },

    /// 디코딩/인코딩 실패
    #[error("{encoding} → UTF-8 변환 실패 ({file}): {reason}")]
    TranscodeFailure {
        file: PathBuf,
        encoding: String,
        reason: String,
    },

    /// 파일 쓰기 실패
    #[error("파일 쓰기 실패 ({file}): {reason}")]
    WriteFailure { file: PathBuf, reason: String },
}

impl ConvertError {
    /// 에러가 발생한 파일 경로
    pub fn file(&self) -> &PathBuf {
        match self {
            ConvertError::OpenFailure { file, .. }
            | ConvertError::DetectionAbsent { file }
            | ConvertError::TranscodeFailure { file, .. }
            | ConvertError::WriteFailure { file, .. } => file,
        }
    }
}

/// conv-to-utf8 결과 타입 별칭
pub type Result<T> = std::result::Result<T, ConvertError>;
