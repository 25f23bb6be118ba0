//! 인코딩 감지 모듈
//!
//! 원시 바이트를 받아 가장 그럴듯한 인코딩 레이블과 신뢰도를 돌려줍니다.
//! 감지 알고리즘 자체는 chardetng에 맡기고, 여기서는 BOM, 바이너리(NUL 포함),
//! ASCII 같은 확실한 경우만 먼저 걸러냅니다.

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};

/// 감지 결과
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// 인코딩 레이블 (감지 실패 시 None)
    pub label: Option<String>,
    /// 신뢰도 (0.0 ~ 1.0)
    pub confidence: f32,
}

impl Detection {
    /// 감지 성공 결과 생성
    pub fn found(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: Some(label.into()),
            confidence,
        }
    }

    /// 감지 실패 결과 생성
    pub fn absent() -> Self {
        Self {
            label: None,
            confidence: 0.0,
        }
    }

    /// 감지된 레이블이 UTF-8인지 확인 (대소문자 무시)
    pub fn is_utf8(&self) -> bool {
        self.label
            .as_deref()
            .map(|l| l.eq_ignore_ascii_case("utf-8"))
            .unwrap_or(false)
    }
}

/// 바이트 내용으로부터 인코딩을 추정하는 감지기
pub trait Detector {
    fn detect(&self, bytes: &[u8]) -> Detection;
}

/// chardetng 기반 기본 감지기
#[derive(Debug, Clone, Copy, Default)]
pub struct ChardetDetector;

impl ChardetDetector {
    const LIKELY: f32 = 0.75;
    const UNLIKELY: f32 = 0.25;
}

impl Detector for ChardetDetector {
    fn detect(&self, bytes: &[u8]) -> Detection {
        if bytes.is_empty() {
            return Detection::absent();
        }

        // UTF-8 BOM은 본문까지 유효한 UTF-8일 때만 신뢰
        let body = match Encoding::for_bom(bytes) {
            Some((encoding, len)) if encoding == UTF_8 => {
                if std::str::from_utf8(&bytes[len..]).is_ok() {
                    return Detection::found(UTF_8.name(), 1.0);
                }
                &bytes[len..]
            }
            Some((encoding, _)) => return Detection::found(encoding.name(), 1.0),
            None => bytes,
        };

        // BOM 없는 NUL 바이트는 텍스트가 아닌 것으로 간주
        if body.contains(&0) {
            return Detection::absent();
        }

        // ASCII는 UTF-8의 부분집합
        if body.is_ascii() {
            return Detection::found(UTF_8.name(), 1.0);
        }

        let mut detector = EncodingDetector::new();
        detector.feed(body, true);
        let (encoding, likely) = detector.guess_assess(None, true);
        let confidence = if likely { Self::LIKELY } else { Self::UNLIKELY };

        Detection::found(encoding.name(), confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_absent() {
        let detection = ChardetDetector.detect(b"");
        assert_eq!(detection, Detection::absent());
        assert!(!detection.is_utf8());
    }

    #[test]
    fn test_ascii_is_utf8() {
        let detection = ChardetDetector.detect(b"fn main() {}\n");
        assert!(detection.is_utf8());
        assert_eq!(detection.confidence, 1.0);
    }

    #[test]
    fn test_utf8_bom_is_utf8() {
        let detection = ChardetDetector.detect(b"\xEF\xBB\xBFhello");
        assert!(detection.is_utf8());
    }

    #[test]
    fn test_utf8_bom_with_gbk_body_is_not_utf8() {
        let (encoded, _, _) = encoding_rs::GBK.encode("中文编码转换测试，这是一个简体中文的句子。");
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(&encoded);

        let detection = ChardetDetector.detect(&bytes);
        assert!(detection.label.is_some());
        assert!(!detection.is_utf8());
    }

    #[test]
    fn test_nul_bytes_are_absent() {
        let detection = ChardetDetector.detect(&[0x7F, b'E', b'L', b'F', 0x02, 0x01, 0x00, 0x00]);
        assert_eq!(detection, Detection::absent());
    }

    #[test]
    fn test_utf16_bom() {
        let detection = ChardetDetector.detect(&[0xFF, 0xFE, b'a', 0x00]);
        assert_eq!(detection.label.as_deref(), Some("UTF-16LE"));
    }

    #[test]
    fn test_non_ascii_utf8() {
        let detection = ChardetDetector.detect("안녕하세요, 세계!".as_bytes());
        assert!(detection.is_utf8());
    }

    #[test]
    fn test_is_utf8_case_insensitive() {
        assert!(Detection::found("utf-8", 1.0).is_utf8());
        assert!(Detection::found("UTF-8", 1.0).is_utf8());
        assert!(!Detection::found("UTF-16LE", 1.0).is_utf8());
    }
}
