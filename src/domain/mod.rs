// ==========================================
// 정산용 입출고 분류기 - 도메인 모델층
// ==========================================
// 책임: 스키마/타입/레코드 정의
// 금지: 파일 접근 로직, 분류 엔진 로직
// ==========================================

pub mod record;
pub mod schema;
pub mod types;

// 핵심 타입 재노출
pub use record::{output_headers, ClassifiedRecord, NormalizedRecord};
pub use types::{Label, RecordKind, StatusCode};
