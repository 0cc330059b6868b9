// ==========================================
// 정산용 입출고 분류기 - 필드 매퍼
// ==========================================
// 책임: 통일(출고형) 행 매핑 → 타입드 레코드
// 전제: 입고 행은 스키마 정규화(normalize_inbound)를 거친 뒤 들어온다
// ==========================================

use crate::domain::record::NormalizedRecord;
use crate::domain::types::StatusCode;
use crate::importer::data_cleaner::DataCleaner;
use std::collections::HashMap;
use tracing::debug;

pub struct FieldMapper {
    cleaner: DataCleaner,
}

impl Default for FieldMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldMapper {
    pub fn new() -> Self {
        Self {
            cleaner: DataCleaner,
        }
    }

    /// 출고형 스키마의 행을 타입드 레코드로 만든다
    ///
    /// 없는 필드는 빈 문자열로 기본 처리한다. 기본 처리된 필드는
    /// debug 로그에 남겨 누락 컬럼 버그가 빈 값 업무 데이터로
    /// 묻히지 않게 한다. 실패하지 않는다.
    pub fn map_row(&self, row: &HashMap<String, String>) -> NormalizedRecord {
        NormalizedRecord {
            shipment_date: self
                .cleaner
                .format_date(&self.get(row, "출고일"), "출고일"),
            status: StatusCode::parse(&self.get(row, "구분")),
            shipment_method: self.get(row, "출고방법"),
            channel: self.get(row, "판매처"),
            product_name: self.get(row, "상품명"),
            available_qty: self.get(row, "가용출고수량"),
            remarks: self.get(row, "비고"),
            product_code: self.get(row, "상품코드"),
            recipient: self.get(row, "수령자"),
            order_doc_code: self.get(row, "주문서코드"),
            channel_product_name: self.get(row, "판매처상품명"),
            channel_option_name: self.get(row, "판매처옵션명"),
            order_qty: self.get(row, "주문수량"),
            order_number: self.get(row, "주문번호"),
            line_order_number: self.get(row, "품목별주문번호"),
        }
    }

    fn get(&self, row: &HashMap<String, String>, key: &str) -> String {
        match row.get(key) {
            Some(v) => v.clone(),
            None => {
                debug!(field = %key, "필드 누락, 빈 값으로 기본 처리");
                String::new()
            }
        }
    }
}
