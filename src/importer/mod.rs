// ==========================================
// 정산용 입출고 분류기 - 가져오기층
// ==========================================
// 책임: 외부 스프레드시트 → 내부 레코드
// 지원: Excel, CSV
// ==========================================

pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod market_list;

// 핵심 타입 재노출
pub use data_cleaner::DataCleaner;
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, ExcelParser, ParsedFile, UniversalFileParser};
pub use market_list::MarketList;
