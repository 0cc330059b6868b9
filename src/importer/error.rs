// ==========================================
// 정산용 입출고 분류기 - 가져오기 에러 타입
// ==========================================
// 도구: thiserror 파생 매크로
// 정책: 파일 단위 에러는 수집 후 건너뛰고, 배치 전체가 비었을
//       때(NoValidData)만 치명적이다.
// ==========================================

use thiserror::Error;

/// 가져오기/배치 에러 타입
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 파일 에러 =====
    #[error("파일이 존재하지 않습니다: {0}")]
    FileNotFound(String),

    #[error("지원하지 않는 파일 형식: {0} (지원: .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("파일 읽기 실패: {0}")]
    FileReadError(String),

    #[error("Excel 파싱 실패: {0}")]
    ExcelParseError(String),

    #[error("CSV 파싱 실패: {0}")]
    CsvParseError(String),

    #[error("데이터 행이 없습니다: {0}")]
    EmptySheet(String),

    // ===== 파일 판별 에러 =====
    #[error("처리 대상 아님: {file} (입출고용 키 컬럼 '출고일'/'입고일' 없음)")]
    UnrecognizedFile { file: String },

    // ===== 참조 데이터 에러 =====
    #[error("마켓 상품명 파일을 읽는 중 오류: {0}")]
    MarketListError(String),

    // ===== 배치 에러 =====
    #[error("업로드된 파일 중 유효한 출고/입고 데이터가 없습니다")]
    NoValidData,

    // ===== 출력 에러 =====
    #[error("결과 파일 쓰기 실패: {0}")]
    ExportError(String),

    // ===== 범용 에러 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

impl ImportError {
    /// 화면 표시용 에러 종류 이름
    pub fn kind_name(&self) -> &'static str {
        match self {
            ImportError::FileNotFound(_) => "FILE_NOT_FOUND",
            ImportError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            ImportError::FileReadError(_) => "FILE_READ_ERROR",
            ImportError::ExcelParseError(_) => "EXCEL_PARSE_ERROR",
            ImportError::CsvParseError(_) => "CSV_PARSE_ERROR",
            ImportError::EmptySheet(_) => "EMPTY_SHEET",
            ImportError::UnrecognizedFile { .. } => "UNRECOGNIZED_FILE",
            ImportError::MarketListError(_) => "MARKET_LIST_ERROR",
            ImportError::NoValidData => "NO_VALID_DATA",
            ImportError::ExportError(_) => "EXPORT_ERROR",
            ImportError::Other(_) => "INTERNAL_ERROR",
        }
    }
}

/// Result 타입 별칭
pub type ImportResult<T> = Result<T, ImportError>;
