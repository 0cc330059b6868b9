// ==========================================
// 정산용 입출고 분류기 - 배치 파이프라인
// ==========================================
// 흐름: 파싱 → 종류 판별 → 구분 필터 → 사영 → (입고) 정규화 →
//       타입드 매핑 → 분류 → 제외행 드롭 → 누적 → 결합
// 정책: 파일 단위 에러 격리. 한 파일이 깨져도 배치는 계속된다.
//       파일 순서와 행 순서는 그대로 보존된다.
// ==========================================

use crate::domain::record::ClassifiedRecord;
use crate::domain::schema;
use crate::domain::types::{RecordKind, StatusCode};
use crate::engine::classifier::{self, Outcome};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::{ParsedFile, UniversalFileParser};
use crate::importer::market_list::MarketList;
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};
use uuid::Uuid;

/// 파일 하나의 처리 실패 내역 (화면 표시용)
#[derive(Debug, Clone, Serialize)]
pub struct FileError {
    pub file: String,
    pub kind: String,
    pub message: String,
}

impl FileError {
    fn from_import_error(file: &str, err: &ImportError) -> Self {
        FileError {
            file: file.to_string(),
            kind: err.kind_name().to_string(),
            message: err.to_string(),
        }
    }
}

/// 파일 하나의 처리 결과
#[derive(Debug, Clone)]
pub struct FileResult {
    pub file: String,
    pub kind: RecordKind,
    pub rows: Vec<ClassifiedRecord>,
}

/// 배치 전체의 처리 결과
///
/// final_table 은 출고 누적분 뒤에 입고 누적분을 그대로 이어
/// 붙인 것이다 (outbound ++ inbound, 순서 보존).
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub batch_id: String,
    pub outbound: Vec<ClassifiedRecord>,
    pub inbound: Vec<ClassifiedRecord>,
    pub final_table: Vec<ClassifiedRecord>,
    pub errors: Vec<FileError>,
}

// ==========================================
// BatchPipeline - 배치 파이프라인 드라이버
// ==========================================
pub struct BatchPipeline {
    mapper: FieldMapper,
}

impl Default for BatchPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchPipeline {
    pub fn new() -> Self {
        Self {
            mapper: FieldMapper::new(),
        }
    }

    /// 파일 경로 목록을 처리한다
    ///
    /// 파일별 파싱/판별 에러는 수집하고 건너뛴다. 모든 파일 처리
    /// 후 출고/입고 누적분이 둘 다 비어 있으면 NoValidData.
    pub fn process_files<P: AsRef<Path>>(
        &self,
        paths: &[P],
        market: &MarketList,
    ) -> ImportResult<BatchReport> {
        let batch_id = Uuid::new_v4().to_string();
        info!(batch_id = %batch_id, files = paths.len(), "배치 분류 시작");

        let mut outbound: Vec<ClassifiedRecord> = Vec::new();
        let mut inbound: Vec<ClassifiedRecord> = Vec::new();
        let mut errors: Vec<FileError> = Vec::new();

        for path in paths {
            let path = path.as_ref();
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());

            let parsed = match UniversalFileParser.parse(path) {
                Ok(parsed) => parsed,
                Err(err) => {
                    warn!(file = %file_name, error = %err, "파일 읽기 실패, 건너뜀");
                    errors.push(FileError::from_import_error(&file_name, &err));
                    continue;
                }
            };

            match self.process_file(&parsed, market) {
                Ok(result) => {
                    info!(
                        file = %result.file,
                        kind = %result.kind,
                        rows = result.rows.len(),
                        "파일 처리 완료"
                    );
                    match result.kind {
                        RecordKind::Outbound => outbound.extend(result.rows),
                        RecordKind::Inbound => inbound.extend(result.rows),
                        RecordKind::Unrecognized => {}
                    }
                }
                Err(err) => {
                    warn!(file = %file_name, error = %err, "처리 대상 아님, 건너뜀");
                    errors.push(FileError::from_import_error(&file_name, &err));
                }
            }
        }

        if outbound.is_empty() && inbound.is_empty() {
            return Err(ImportError::NoValidData);
        }

        let mut final_table = Vec::with_capacity(outbound.len() + inbound.len());
        final_table.extend(outbound.iter().cloned());
        final_table.extend(inbound.iter().cloned());

        info!(
            batch_id = %batch_id,
            outbound = outbound.len(),
            inbound = inbound.len(),
            errors = errors.len(),
            "배치 분류 완료"
        );

        Ok(BatchReport {
            batch_id,
            outbound,
            inbound,
            final_table,
            errors,
        })
    }

    /// 파싱된 파일 하나를 처리한다
    ///
    /// 종류 판별 → 구분 필터 → 사영 → (입고) 정규화 → 매핑 →
    /// 분류. Excluded 행은 결과에서 제외된다.
    pub fn process_file(
        &self,
        parsed: &ParsedFile,
        market: &MarketList,
    ) -> ImportResult<FileResult> {
        let kind = schema::detect_kind(&parsed.headers);
        if kind == RecordKind::Unrecognized {
            return Err(ImportError::UnrecognizedFile {
                file: parsed.name.clone(),
            });
        }

        let group = schema::column_group(kind);
        let mut rows = Vec::new();

        for raw_row in &parsed.rows {
            let status = StatusCode::parse(
                raw_row
                    .get(schema::STATUS_COLUMN)
                    .map(|s| s.as_str())
                    .unwrap_or(""),
            );
            let in_scope = match kind {
                RecordKind::Outbound => status.in_outbound_scope(),
                RecordKind::Inbound => status.in_inbound_scope(),
                RecordKind::Unrecognized => false,
            };
            if !in_scope {
                continue;
            }

            let projected = schema::project(raw_row, group);
            let unified = match kind {
                RecordKind::Inbound => schema::normalize_inbound(&projected),
                _ => projected,
            };

            let record = self.mapper.map_row(&unified);
            match classifier::classify(&record, market) {
                Outcome::Label(label) => rows.push(ClassifiedRecord {
                    suggestion: label.to_string(),
                    confirmed: String::new(),
                    record,
                }),
                Outcome::Excluded => continue,
            }
        }

        Ok(FileResult {
            file: parsed.name.clone(),
            kind,
            rows,
        })
    }
}
