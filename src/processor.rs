//! 파일 변환 처리 모듈
//!
//! 개별 파일의 읽기, 인코딩 감지, 처리 방식 결정, UTF-8 변환 및 덮어쓰기를 담당합니다.

use encoding_rs::{Encoding, UTF_8};
use std::fs;
use std::path::{Path, PathBuf};

use crate::detect::{Detection, Detector};
use crate::error::{ConvertError, Result};
use crate::stats::RunStatistics;

/// UTF-8 BOM (`EF BB BF`)
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// 바이트가 UTF-8 BOM으로 시작하는지 확인
pub fn has_utf8_bom(bytes: &[u8]) -> bool {
    bytes.starts_with(&UTF8_BOM)
}

/// 파일 처리 결과 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 다른 인코딩에서 UTF-8로 변환됨
    Converted,
    /// UTF-8 BOM 추가 또는 제거됨
    BomFixed,
    /// 변경 없음
    Skipped,
    /// 실패
    Failed,
}

/// 파일 처리 결과
#[derive(Debug)]
pub struct FileResult {
    /// 처리된 파일 경로
    pub path: PathBuf,
    /// 처리 결과 종류
    pub outcome: Outcome,
    /// 사람이 읽을 수 있는 메시지
    pub message: String,
    /// 감지된 인코딩 레이블
    pub encoding: Option<String>,
    /// 감지 신뢰도
    pub confidence: f32,
    /// 실패 또는 감지 불가 사유
    pub error: Option<ConvertError>,
}

impl FileResult {
    fn new(path: &Path, outcome: Outcome, message: String, detection: Option<&Detection>) -> Self {
        Self {
            path: path.to_path_buf(),
            outcome,
            message,
            encoding: detection.and_then(|d| d.label.clone()),
            confidence: detection.map(|d| d.confidence).unwrap_or(0.0),
            error: None,
        }
    }

    /// 실패 결과 생성
    pub fn failure(error: ConvertError, detection: Option<&Detection>) -> Self {
        let path = error.file().clone();
        let mut result = Self::new(&path, Outcome::Failed, error.to_string(), detection);
        result.error = Some(error);
        result
    }

    /// 성공 여부 (실패가 아닌 모든 결과)
    pub fn is_ok(&self) -> bool {
        self.outcome != Outcome::Failed
    }
}

/// 실행 옵션
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// 출력에 UTF-8 BOM 포함 여부
    pub add_bom: bool,
    /// 파일을 쓰지 않고 결과만 보고
    pub dry_run: bool,
}

impl RunOptions {
    /// 기본 옵션 생성 (BOM 없음)
    pub fn new() -> Self {
        Self::default()
    }

    /// BOM 포함 설정
    pub fn with_bom(mut self, add_bom: bool) -> Self {
        self.add_bom = add_bom;
        self
    }

    /// 드라이런 설정
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// 감지 결과와 BOM 상태로 결정된 처리 방식
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// 인코딩 감지 불가
    SkipUndetected,
    /// 이미 원하는 형식
    SkipAlreadyCorrect,
    /// UTF-8에 BOM 추가
    AddBom,
    /// UTF-8에서 BOM 제거
    StripBom,
    /// 감지된 인코딩에서 UTF-8로 변환
    Transcode { label: String },
}

/// 처리 방식 결정
///
/// # Arguments
/// * `detection` - 인코딩 감지 결과
/// * `has_bom` - 현재 파일이 UTF-8 BOM으로 시작하는지 여부
/// * `add_bom` - BOM 포함 출력 요청 여부
pub fn decide(detection: &Detection, has_bom: bool, add_bom: bool) -> Action {
    match detection.label.as_deref() {
        None => Action::SkipUndetected,
        Some(_) if detection.is_utf8() => match (has_bom, add_bom) {
            (true, true) | (false, false) => Action::SkipAlreadyCorrect,
            (false, true) => Action::AddBom,
            (true, false) => Action::StripBom,
        },
        Some(label) => Action::Transcode {
            label: label.to_string(),
        },
    }
}

/// 선행 BOM 제거 (UTF-8 BOM 또는 감지된 인코딩 자신의 BOM)
fn strip_leading_bom<'a>(bytes: &'a [u8], encoding: &'static Encoding) -> &'a [u8] {
    match Encoding::for_bom(bytes) {
        Some((bom_encoding, len)) if bom_encoding == encoding || bom_encoding == UTF_8 => {
            &bytes[len..]
        }
        _ => bytes,
    }
}

/// 감지된 인코딩의 바이트를 UTF-8 바이트로 변환
///
/// # Arguments
/// * `path` - 에러 보고용 파일 경로
/// * `bytes` - 원본 바이트
/// * `label` - 원본 인코딩 레이블
/// * `add_bom` - 결과 앞에 UTF-8 BOM 추가 여부
///
/// # Returns
/// 변환된 UTF-8 바이트 또는 `TranscodeFailure`
pub fn transcode(path: &Path, bytes: &[u8], label: &str, add_bom: bool) -> Result<Vec<u8>> {
    let encoding = Encoding::for_label(label.as_bytes()).ok_or_else(|| {
        ConvertError::TranscodeFailure {
            file: path.to_path_buf(),
            encoding: label.to_string(),
            reason: "알 수 없는 인코딩".to_string(),
        }
    })?;

    let body = strip_leading_bom(bytes, encoding);
    let decoded = encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or_else(|| ConvertError::TranscodeFailure {
            file: path.to_path_buf(),
            encoding: label.to_string(),
            reason: "잘못된 바이트 시퀀스".to_string(),
        })?;

    let mut output = Vec::with_capacity(decoded.len() + UTF8_BOM.len());
    if add_bom {
        output.extend_from_slice(&UTF8_BOM);
    }
    output.extend_from_slice(decoded.as_bytes());
    Ok(output)
}

/// 파일 덮어쓰기 (드라이런이면 생략)
fn write_output(path: &Path, bytes: &[u8], options: &RunOptions) -> Result<()> {
    if options.dry_run {
        return Ok(());
    }
    fs::write(path, bytes).map_err(|e| ConvertError::WriteFailure {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn bom_suffix(add_bom: bool) -> &'static str {
    if add_bom {
        "BOM 포함"
    } else {
        "BOM 없음"
    }
}

/// 단일 파일 처리
///
/// 어떤 경우에도 패닉이나 에러 전파 없이 `FileResult`를 반환합니다.
///
/// # Arguments
/// * `path` - 처리할 파일 경로
/// * `options` - 실행 옵션
/// * `detector` - 인코딩 감지기
pub fn process_file<D: Detector + ?Sized>(
    path: &Path,
    options: &RunOptions,
    detector: &D,
) -> FileResult {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            return FileResult::failure(
                ConvertError::OpenFailure {
                    file: path.to_path_buf(),
                    reason: e.to_string(),
                },
                None,
            )
        }
    };

    let detection = detector.detect(&bytes);
    let has_bom = has_utf8_bom(&bytes);

    match apply_action(path, &bytes, &detection, has_bom, options) {
        Ok(result) => result,
        Err(e) => FileResult::failure(e, Some(&detection)),
    }
}

/// 결정된 처리 방식 실행
fn apply_action(
    path: &Path,
    bytes: &[u8],
    detection: &Detection,
    has_bom: bool,
    options: &RunOptions,
) -> Result<FileResult> {
    let result = match decide(detection, has_bom, options.add_bom) {
        Action::SkipUndetected => {
            let error = ConvertError::DetectionAbsent {
                file: path.to_path_buf(),
            };
            let mut result = FileResult::new(
                path,
                Outcome::Skipped,
                "인코딩을 감지할 수 없어 건너뜀".to_string(),
                Some(detection),
            );
            result.error = Some(error);
            result
        }
        Action::SkipAlreadyCorrect => FileResult::new(
            path,
            Outcome::Skipped,
            format!("이미 UTF-8 ({}), 건너뜀", bom_suffix(has_bom)),
            Some(detection),
        ),
        Action::AddBom => {
            let mut output = Vec::with_capacity(bytes.len() + UTF8_BOM.len());
            output.extend_from_slice(&UTF8_BOM);
            output.extend_from_slice(bytes);
            write_output(path, &output, options)?;
            FileResult::new(
                path,
                Outcome::BomFixed,
                "UTF-8 BOM 추가 완료".to_string(),
                Some(detection),
            )
        }
        Action::StripBom => {
            write_output(path, &bytes[UTF8_BOM.len()..], options)?;
            FileResult::new(
                path,
                Outcome::BomFixed,
                "UTF-8 BOM 제거 완료".to_string(),
                Some(detection),
            )
        }
        Action::Transcode { label } => {
            let output = transcode(path, bytes, &label, options.add_bom)?;
            write_output(path, &output, options)?;
            FileResult::new(
                path,
                Outcome::Converted,
                format!(
                    "{} → UTF-8 ({}) 변환 완료",
                    label,
                    bom_suffix(options.add_bom)
                ),
                Some(detection),
            )
        }
    };

    Ok(result)
}

/// 여러 파일을 주어진 순서대로 처리
///
/// 한 파일의 실패는 이후 파일 처리에 영향을 주지 않습니다.
///
/// # Arguments
/// * `paths` - 처리할 파일 경로 목록
/// * `options` - 실행 옵션
/// * `detector` - 인코딩 감지기
/// * `on_result` - 파일 하나가 끝날 때마다 호출되는 콜백
///
/// # Returns
/// 누적된 실행 통계
pub fn process_files<P, D, F>(
    paths: &[P],
    options: &RunOptions,
    detector: &D,
    mut on_result: F,
) -> RunStatistics
where
    P: AsRef<Path>,
    D: Detector + ?Sized,
    F: FnMut(&FileResult),
{
    let mut stats = RunStatistics::new();

    for path in paths {
        let result = process_file(path.as_ref(), options, detector);
        stats.record(result.outcome);
        on_result(&result);
    }

    stats
}
