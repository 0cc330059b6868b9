// ==========================================
// 정산용 입출고 분류기 - 파일 파서
// ==========================================
// 지원: Excel (.xlsx/.xls) / CSV (.csv)
// 첫 번째 시트, 첫 행을 헤더로 사용. 헤더는 트림한다.
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// 한 파일의 파싱 결과
///
/// 헤더는 원본 순서를 보존한다 (파일 종류 판별에 필요).
/// 행은 헤더 → 셀 값 매핑이며 셀 값은 전부 문자열로 읽는다.
#[derive(Debug, Clone)]
pub struct ParsedFile {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<HashMap<String, String>>,
}

impl ParsedFile {
    fn from_rows(name: &str, headers: Vec<String>, raw_rows: Vec<Vec<String>>) -> Self {
        let mut rows = Vec::with_capacity(raw_rows.len());
        for cells in raw_rows {
            let mut row_map = HashMap::new();
            for (col_idx, value) in cells.into_iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value);
                }
            }
            // 완전히 빈 행은 건너뛴다
            if row_map.values().all(|v| v.trim().is_empty()) {
                continue;
            }
            rows.push(row_map);
        }
        ParsedFile {
            name: name.to_string(),
            headers,
            rows,
        }
    }
}

// ==========================================
// CSV 파서
// ==========================================
pub struct CsvParser;

impl CsvParser {
    pub fn parse(&self, file_path: &Path) -> ImportResult<ParsedFile> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 행 길이 불일치 허용
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        let mut raw_rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            raw_rows.push(record.iter().map(|v| v.to_string()).collect());
        }

        Ok(ParsedFile::from_rows(
            &file_name_of(file_path),
            headers,
            raw_rows,
        ))
    }
}

// ==========================================
// Excel 파서
// ==========================================
pub struct ExcelParser;

impl ExcelParser {
    pub fn parse(&self, file_path: &Path) -> ImportResult<ParsedFile> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let mut workbook = open_workbook_auto(file_path)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("워크시트가 없습니다".to_string()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let mut rows = range.rows();
        let header_row = rows
            .next()
            .ok_or_else(|| ImportError::EmptySheet(file_path.display().to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let raw_rows: Vec<Vec<String>> = rows
            .map(|cells| cells.iter().map(|c| c.to_string()).collect())
            .collect();

        Ok(ParsedFile::from_rows(
            &file_name_of(file_path),
            headers,
            raw_rows,
        ))
    }
}

// ==========================================
// 범용 파서 (확장자로 자동 선택)
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<ParsedFile> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse(path),
            "xlsx" | "xls" => ExcelParser.parse(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
