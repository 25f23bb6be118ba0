//! conv-to-utf8 - CONVERT TO UTF-8
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use conv_to_utf8::{
    cli::Args,
    detect::ChardetDetector,
    processor::{process_files, FileResult, Outcome},
    stats::RunStatistics,
};

fn main() -> Result<()> {
    let args = Args::parse();

    // 헤더 출력
    print_header(&args);

    let options = args.run_options();
    let pb = create_progress_bar(args.files.len());
    let mut failures: Vec<(PathBuf, String)> = Vec::new();

    let stats = process_files(&args.files, &options, &ChardetDetector, |result| {
        pb.inc(1);
        pb.println(format_result_line(result, args.verbose));

        if result.outcome == Outcome::Failed {
            failures.push((result.path.clone(), result.message.clone()));
        }
    });

    pb.finish_and_clear();

    // 로그 파일 작성
    if let Some(ref log_path) = args.log {
        write_error_log(log_path, &stats, &failures)?;
    }

    // 통계 출력
    stats.print_summary();

    Ok(())
}

/// 헤더 출력
fn print_header(args: &Args) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!("{}", " 🔄 CONVERT TO UTF-8".bright_white().bold());
    println!("{}", "═".repeat(50).bright_blue());
    println!(
        "  {} 대상 파일 수: {}",
        "📋".bright_white(),
        args.files.len().to_string().bright_green()
    );
    println!(
        "  {} 출력 형식: UTF-8 ({})",
        "⚙️".bright_yellow(),
        if args.with_bom { "BOM 포함" } else { "BOM 없음" }
    );

    if args.dry_run {
        println!(
            "  {} {}",
            "⚠️".bright_yellow(),
            "드라이런 모드 (파일 쓰기 없음)".yellow()
        );
    }

    println!("{}", "═".repeat(50).bright_blue());
}

/// 파일 하나의 처리 결과 줄 생성
fn format_result_line(result: &FileResult, verbose: bool) -> String {
    let tag = match result.outcome {
        Outcome::Converted => "[변환]".green().bold(),
        Outcome::BomFixed => "[BOM]".yellow().bold(),
        Outcome::Skipped => "[건너뜀]".dimmed(),
        Outcome::Failed => "[실패]".red().bold(),
    };

    let mut line = format!("  {} {}: {}", tag, result.path.display(), result.message);

    if verbose {
        if let Some(ref encoding) = result.encoding {
            let detail = format!("(감지: {}, 신뢰도 {:.2})", encoding, result.confidence);
            line.push(' ');
            line.push_str(&detail.dimmed().to_string());
        }
    }

    line
}

/// 진행률 바 생성
fn create_progress_bar(total: usize) -> ProgressBar {
    if total == 0 {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");
    pb.set_style(style);
    pb
}

/// 에러 로그 파일 작성
fn write_error_log(
    log_path: &Path,
    stats: &RunStatistics,
    errors: &[(PathBuf, String)],
) -> Result<()> {
    let mut log_file = File::create(log_path)
        .with_context(|| format!("로그 파일을 만들 수 없습니다: {:?}", log_path))?;

    writeln!(log_file, "conv-to-utf8 에러 로그")?;
    writeln!(log_file, "처리 파일 수: {}", stats.total())?;
    writeln!(log_file, "총 에러 수: {}", errors.len())?;
    writeln!(log_file, "{}", stats)?;
    writeln!(log_file, "{}", "=".repeat(50))?;

    for (path, error) in errors {
        writeln!(log_file, "\n파일: {:?}", path)?;
        writeln!(log_file, "에러: {}", error)?;
    }

    println!("\n{} 에러 로그 저장: {:?}", "📝".bright_cyan(), log_path);

    Ok(())
}
