// ==========================================
// 정산용 입출고 내역 자동 분류기 - CLI 진입점
// ==========================================
// 사용 예:
//   meo-settlement --market 마켓상품명.xlsx --cleaned \
//       --output 최종분류결과.csv 출고내역.xlsx 입고내역.xlsx
// ==========================================

use anyhow::{bail, Context};
use clap::Parser;
use meo_settlement::engine::summarize;
use meo_settlement::{exporter, logging, BatchPipeline, MarketList};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "meo-settlement", version, about = meo_settlement::APP_NAME)]
struct Args {
    /// 마켓 상품명 파일 (.xlsx/.xls/.csv, 첫 번째 컬럼 사용)
    #[arg(long)]
    market: PathBuf,

    /// 출고/입고 내역 파일들 (.xlsx/.xls/.csv)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// 최종 분류 결과 파일 경로
    #[arg(long, default_value = "최종분류결과.csv")]
    output: PathBuf,

    /// 마켓 출고건 상품명 정리를 완료했음을 확인
    ///
    /// 이 플래그 없이는 분류를 실행하지 않는다.
    #[arg(long)]
    cleaned: bool,

    /// 실행 리포트(JSON)를 기록할 경로
    #[arg(long)]
    summary_json: Option<PathBuf>,
}

/// 실행 리포트 (JSON 출력용)
#[derive(Debug, Serialize)]
struct RunReport {
    batch_id: String,
    outbound_rows: usize,
    inbound_rows: usize,
    outbound_summary: BTreeMap<String, usize>,
    inbound_summary: BTreeMap<String, usize>,
    errors: Vec<meo_settlement::FileError>,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let args = Args::parse();

    tracing::info!("{} v{}", meo_settlement::APP_NAME, meo_settlement::VERSION);

    // 정리 확인 게이트: 확인 전에는 코어를 실행하지 않는다
    if !args.cleaned {
        bail!("마켓 출고건을 정리한 뒤 --cleaned 플래그와 함께 다시 실행해주세요");
    }

    let market = MarketList::load(&args.market)
        .with_context(|| format!("마켓 상품명 파일 로드 실패: {}", args.market.display()))?;

    let report = BatchPipeline::new()
        .process_files(&args.inputs, &market)
        .context("배치 분류 실패")?;

    // 파일별 에러 표시
    if !report.errors.is_empty() {
        println!("일부 파일 처리 시 오류 발생:");
        for err in &report.errors {
            println!("- [{}] {}: {}", err.kind, err.file, err.message);
        }
    }

    let outbound_summary = summarize(&report.outbound);
    let inbound_summary = summarize(&report.inbound);

    print_summary("[출고 파일 요약]", report.outbound.len(), &outbound_summary);
    print_summary("[입고 파일 요약]", report.inbound.len(), &inbound_summary);

    exporter::write_final_table(&args.output, &report.final_table)
        .with_context(|| format!("결과 파일 쓰기 실패: {}", args.output.display()))?;
    println!("분류 완료: {} ({}건)", args.output.display(), report.final_table.len());

    if let Some(json_path) = &args.summary_json {
        let run_report = RunReport {
            batch_id: report.batch_id.clone(),
            outbound_rows: report.outbound.len(),
            inbound_rows: report.inbound.len(),
            outbound_summary,
            inbound_summary,
            errors: report.errors.clone(),
        };
        let json = serde_json::to_string_pretty(&run_report)?;
        std::fs::write(json_path, json)
            .with_context(|| format!("리포트 쓰기 실패: {}", json_path.display()))?;
    }

    Ok(())
}

fn print_summary(title: &str, total: usize, summary: &BTreeMap<String, usize>) {
    println!("{}", title);
    if total == 0 {
        println!("- 데이터가 없습니다");
        return;
    }
    println!("- 총 건수: {}", total);
    for (label, count) in summary {
        println!("- {}: {}건", label, count);
    }
}
