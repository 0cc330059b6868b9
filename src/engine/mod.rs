// ==========================================
// 정산용 입출고 분류기 - 엔진층
// ==========================================
// 책임: 분류 규칙, 배치 파이프라인, 요약 집계
// ==========================================

pub mod classifier;
pub mod pipeline;
pub mod summary;

// 핵심 타입 재노출
pub use classifier::{classify, Outcome, Rule, RULES};
pub use pipeline::{BatchPipeline, BatchReport, FileError, FileResult};
pub use summary::summarize;
