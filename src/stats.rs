//! 통계 및 유틸리티 모듈
//!
//! 처리 통계 수집 및 포맷팅을 담당합니다.

use colored::Colorize;
use std::fmt;
use std::time::{Duration, Instant};

use crate::processor::Outcome;

/// 실행 통계 구조체
#[derive(Debug, Clone)]
pub struct RunStatistics {
    converted: usize,
    bom_fixed: usize,
    skipped: usize,
    failed: usize,
    /// 처리 시작 시간
    start_time: Instant,
}

impl Default for RunStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl RunStatistics {
    /// 새 통계 인스턴스 생성
    pub fn new() -> Self {
        Self {
            converted: 0,
            bom_fixed: 0,
            skipped: 0,
            failed: 0,
            start_time: Instant::now(),
        }
    }

    /// 처리 결과 하나를 누적
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Converted => self.converted += 1,
            Outcome::BomFixed => self.bom_fixed += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Failed => self.failed += 1,
        }
    }

    pub fn converted(&self) -> usize {
        self.converted
    }

    pub fn bom_fixed(&self) -> usize {
        self.bom_fixed
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    /// 처리된 전체 파일 수
    pub fn total(&self) -> usize {
        self.converted + self.bom_fixed + self.skipped + self.failed
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// 처리 통계 요약 출력
    pub fn print_summary(&self) {
        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " 📊 처리 통계".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!("  {} 전체 파일:    {}", "📁".bright_cyan(), self.total());
        println!(
            "  {} 변환:         {}",
            "🔄".bright_green(),
            self.converted.to_string().green()
        );
        println!(
            "  {} BOM 수정:     {}",
            "🔧".bright_yellow(),
            self.bom_fixed.to_string().yellow()
        );
        println!(
            "  {} 건너뜀:       {}",
            "⏭️".bright_white(),
            self.skipped.to_string().dimmed()
        );

        if self.failed > 0 {
            println!(
                "  {} 실패:         {}",
                "❌".bright_red(),
                self.failed.to_string().red()
            );
        } else {
            println!("  {} 실패:         {}", "✅".bright_green(), "0".green());
        }

        println!(
            "  {} 처리 시간:    {:.2}초",
            "⏱️".bright_cyan(),
            self.elapsed().as_secs_f64()
        );

        println!("{}", "═".repeat(50).bright_blue());
        println!("{}", self);
    }
}

impl fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "모든 작업 완료. 변환: {}, BOM 수정: {}, 건너뜀: {}, 실패: {}",
            self.converted, self.bom_fixed, self.skipped, self.failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_counters() {
        let mut stats = RunStatistics::new();

        stats.record(Outcome::Converted);
        stats.record(Outcome::Converted);
        stats.record(Outcome::BomFixed);
        stats.record(Outcome::Skipped);
        stats.record(Outcome::Failed);

        assert_eq!(stats.converted(), 2);
        assert_eq!(stats.bom_fixed(), 1);
        assert_eq!(stats.skipped(), 1);
        assert_eq!(stats.failed(), 1);
        assert_eq!(stats.total(), 5);
    }

    #[test]
    fn test_summary_line() {
        let mut stats = RunStatistics::new();
        stats.record(Outcome::Skipped);

        assert_eq!(
            stats.to_string(),
            "모든 작업 완료. 변환: 0, BOM 수정: 0, 건너뜀: 1, 실패: 0"
        );
    }
}
