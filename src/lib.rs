// ==========================================
// 정산용 입출고 내역 자동 분류기 - 핵심 라이브러리
// ==========================================
// 입력: 출고/입고 스프레드시트 + 마켓 상품명 목록
// 출력: 분류제안이 붙은 통일 스키마 테이블 + 분류별 요약
// ==========================================

// ==========================================
// 모듈 선언
// ==========================================

// 도메인층 - 스키마/타입/레코드
pub mod domain;

// 가져오기층 - 외부 스프레드시트
pub mod importer;

// 엔진층 - 분류 규칙/파이프라인/요약
pub mod engine;

// 내보내기 - 결과 파일 기록
pub mod exporter;

// 로그 시스템
pub mod logging;

// ==========================================
// 핵심 타입 재노출
// ==========================================

pub use domain::{ClassifiedRecord, Label, NormalizedRecord, RecordKind, StatusCode};
pub use engine::{classify, summarize, BatchPipeline, BatchReport, FileError, Outcome};
pub use importer::{ImportError, ImportResult, MarketList, ParsedFile, UniversalFileParser};

// ==========================================
// 상수 정의
// ==========================================

// 시스템 버전
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 시스템 이름
pub const APP_NAME: &str = "정산용 입출고 내역 자동 분류기";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
