// ==========================================
// 정산용 입출고 분류기 - 분류 요약 집계
// ==========================================
// 분류제안별 건수 집계. 빈 테이블은 빈 맵 (에러 아님).
// ==========================================

use crate::domain::record::ClassifiedRecord;
use std::collections::BTreeMap;

/// 분류제안 → 건수
///
/// BTreeMap 으로 라벨 정렬 순서를 고정해 표시/테스트를
/// 결정적으로 만든다.
pub fn summarize(table: &[ClassifiedRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for row in table {
        *counts.entry(row.suggestion.clone()).or_insert(0) += 1;
    }
    counts
}
