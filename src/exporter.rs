// ==========================================
// 정산용 입출고 분류기 - 결과 내보내기
// ==========================================
// 최종 테이블을 CSV 로 기록한다 (UTF-8 BOM, Excel 호환).
// 컬럼 순서: 분류제안, 분류확정 + 출고 컬럼 그룹
// ==========================================

use crate::domain::record::{output_headers, ClassifiedRecord};
use crate::importer::error::{ImportError, ImportResult};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// UTF-8 BOM. Excel 이 한글 CSV 를 올바른 인코딩으로 열게 한다.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// 최종 분류 테이블을 CSV 파일로 기록한다
pub fn write_final_table<P: AsRef<Path>>(
    path: P,
    table: &[ClassifiedRecord],
) -> ImportResult<()> {
    let path = path.as_ref();
    let mut file =
        File::create(path).map_err(|e| ImportError::ExportError(e.to_string()))?;
    file.write_all(UTF8_BOM)
        .map_err(|e| ImportError::ExportError(e.to_string()))?;

    let mut writer = csv::Writer::from_writer(file);
    writer
        .write_record(output_headers())
        .map_err(|e| ImportError::ExportError(e.to_string()))?;
    for row in table {
        writer
            .write_record(row.to_row())
            .map_err(|e| ImportError::ExportError(e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| ImportError::ExportError(e.to_string()))?;

    info!(path = %path.display(), rows = table.len(), "최종 분류 결과 기록 완료");
    Ok(())
}
