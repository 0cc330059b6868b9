// ==========================================
// 정산용 입출고 분류기 - 컬럼 스키마 정의
// ==========================================
// 출고/입고 컬럼 그룹, 파일 종류 판별, 입고 → 출고 스키마 통일
// ==========================================

use crate::domain::types::RecordKind;
use std::collections::HashMap;

/// 출고 내역 컬럼 그룹 (통일 스키마의 기준)
pub const COLUMN_GROUP_OUT: [&str; 15] = [
    "출고일",
    "구분",
    "출고방법",
    "판매처",
    "상품명",
    "가용출고수량",
    "비고",
    "상품코드",
    "수령자",
    "주문서코드",
    "판매처상품명",
    "판매처옵션명",
    "주문수량",
    "주문번호",
    "품목별주문번호",
];

/// 입고 내역 컬럼 그룹
pub const COLUMN_GROUP_IN: [&str; 15] = [
    "입고일",
    "구분",
    "옵션명",
    "공급처",
    "상품명",
    "가용입고수량",
    "비고",
    "상품코드",
    "옵션코드",
    "공급처코드",
    "입고단가",
    "박스수량",
    "보관장소",
    "바코드번호",
    "제조일",
];

/// 입고 → 출고 컬럼명 재매핑 테이블
pub const RENAME_IN_TO_OUT: [(&str, &str); 4] = [
    ("입고일", "출고일"),
    ("공급처", "판매처"),
    ("가용입고수량", "가용출고수량"),
    ("옵션명", "판매처옵션명"),
];

/// 출고 파일 판별 키 컬럼
pub const OUTBOUND_KEY_COLUMN: &str = "출고일";
/// 입고 파일 판별 키 컬럼
pub const INBOUND_KEY_COLUMN: &str = "입고일";

/// 구분(상태코드) 컬럼
pub const STATUS_COLUMN: &str = "구분";
/// 분류제안 컬럼
pub const SUGGESTION_COLUMN: &str = "분류제안";
/// 분류확정 컬럼 (수동 확정용, 코어는 빈 값만 기록)
pub const CONFIRMED_COLUMN: &str = "분류확정";

/// 최종 출력 컬럼 순서: 분류제안, 분류확정 + 출고 컬럼 그룹
pub fn final_columns() -> Vec<&'static str> {
    let mut cols = vec![SUGGESTION_COLUMN, CONFIRMED_COLUMN];
    cols.extend(COLUMN_GROUP_OUT);
    cols
}

/// 파일 종류 판별 (단일 판별 함수)
///
/// 헤더에 '출고일' 이 있으면 출고, '입고일' 이 있으면 입고,
/// 둘 다 없으면 처리 대상이 아니다. 둘 다 있는 비정상 파일은
/// 출고로 본다 (키 컬럼 우선순위: 출고일 > 입고일).
pub fn detect_kind(headers: &[String]) -> RecordKind {
    let has = |key: &str| headers.iter().any(|h| h.trim() == key);
    if has(OUTBOUND_KEY_COLUMN) {
        RecordKind::Outbound
    } else if has(INBOUND_KEY_COLUMN) {
        RecordKind::Inbound
    } else {
        RecordKind::Unrecognized
    }
}

/// 파일 종류에 대응하는 원본 컬럼 그룹
pub fn column_group(kind: RecordKind) -> &'static [&'static str] {
    match kind {
        RecordKind::Outbound => &COLUMN_GROUP_OUT,
        RecordKind::Inbound => &COLUMN_GROUP_IN,
        RecordKind::Unrecognized => &[],
    }
}

/// 행을 컬럼 그룹 위로 사영한다
///
/// 그룹에 속한 컬럼만 남기고, 원본에 없는 컬럼은 빈 문자열로
/// 채운다. 그룹 밖 컬럼은 버려진다.
pub fn project(row: &HashMap<String, String>, group: &[&str]) -> HashMap<String, String> {
    group
        .iter()
        .map(|&col| {
            let value = row.get(col).cloned().unwrap_or_default();
            (col.to_string(), value)
        })
        .collect()
}

/// 입고 행을 출고 스키마로 통일한다 (스키마 정규화)
///
/// 재매핑 테이블을 적용한 뒤, 출고 컬럼 그룹에서 빠진 컬럼을
/// 빈 문자열로 채운다. 구조 변환만 하며 실패하지 않는다.
/// 이미 통일된 행에 다시 적용해도 컬럼 집합은 변하지 않는다.
pub fn normalize_inbound(row: &HashMap<String, String>) -> HashMap<String, String> {
    let mut normalized: HashMap<String, String> = HashMap::new();

    for (key, value) in row {
        let renamed = RENAME_IN_TO_OUT
            .iter()
            .find(|(from, _)| from == key)
            .map(|(_, to)| *to)
            .unwrap_or(key.as_str());
        normalized.insert(renamed.to_string(), value.clone());
    }

    for col in COLUMN_GROUP_OUT {
        normalized.entry(col.to_string()).or_default();
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(cols: &[&str]) -> Vec<String> {
        cols.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_detect_kind_outbound() {
        let h = headers(&["출고일", "구분", "비고"]);
        assert_eq!(detect_kind(&h), RecordKind::Outbound);
    }

    #[test]
    fn test_detect_kind_inbound() {
        let h = headers(&["입고일", "구분", "비고"]);
        assert_eq!(detect_kind(&h), RecordKind::Inbound);
    }

    #[test]
    fn test_detect_kind_unrecognized() {
        let h = headers(&["날짜", "구분", "비고"]);
        assert_eq!(detect_kind(&h), RecordKind::Unrecognized);
    }

    #[test]
    fn test_detect_kind_trims_header() {
        let h = headers(&[" 출고일 ", "구분"]);
        assert_eq!(detect_kind(&h), RecordKind::Outbound);
    }

    #[test]
    fn test_project_backfills_missing() {
        let mut row = HashMap::new();
        row.insert("출고일".to_string(), "2025-06-01".to_string());
        row.insert("엉뚱한컬럼".to_string(), "x".to_string());

        let projected = project(&row, &COLUMN_GROUP_OUT);

        assert_eq!(projected.len(), COLUMN_GROUP_OUT.len());
        assert_eq!(projected.get("출고일"), Some(&"2025-06-01".to_string()));
        assert_eq!(projected.get("비고"), Some(&String::new()));
        assert!(!projected.contains_key("엉뚱한컬럼"));
    }

    #[test]
    fn test_normalize_inbound_renames_and_backfills() {
        let mut row = HashMap::new();
        row.insert("입고일".to_string(), "2025-06-02".to_string());
        row.insert("공급처".to_string(), "공급사A".to_string());
        row.insert("가용입고수량".to_string(), "3".to_string());
        row.insert("옵션명".to_string(), "옵션1".to_string());

        let normalized = normalize_inbound(&row);

        assert_eq!(normalized.get("출고일"), Some(&"2025-06-02".to_string()));
        assert_eq!(normalized.get("판매처"), Some(&"공급사A".to_string()));
        assert_eq!(normalized.get("가용출고수량"), Some(&"3".to_string()));
        assert_eq!(normalized.get("판매처옵션명"), Some(&"옵션1".to_string()));
        // 출고 전용 컬럼은 빈 문자열로 채워진다
        assert_eq!(normalized.get("수령자"), Some(&String::new()));
        assert_eq!(normalized.get("주문번호"), Some(&String::new()));
        assert!(!normalized.contains_key("입고일"));
    }

    #[test]
    fn test_normalize_inbound_idempotent() {
        let mut row = HashMap::new();
        row.insert("입고일".to_string(), "2025-06-02".to_string());
        row.insert("비고".to_string(), "세트 구성".to_string());

        let once = normalize_inbound(&row);
        let twice = normalize_inbound(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_final_columns_order() {
        let cols = final_columns();
        assert_eq!(cols[0], "분류제안");
        assert_eq!(cols[1], "분류확정");
        assert_eq!(cols[2], "출고일");
        assert_eq!(cols.len(), 17);
    }
}
