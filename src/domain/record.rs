// ==========================================
// 정산용 입출고 분류기 - 레코드 타입
// ==========================================
// 통일(출고형) 스키마의 타입드 레코드와 분류 결과 레코드
// ==========================================
// 원칙: 원본에 없는 필드는 빈 문자열 기본값. 기본값 사용은
// 필드 매퍼에서 debug 로그로 남기고, 에러로 다루지 않는다.
// ==========================================

use crate::domain::schema;
use crate::domain::types::StatusCode;
use serde::{Deserialize, Serialize};

/// 통일 스키마(출고형)로 사영된 한 행
///
/// 수량/단가류도 문자열로 보존한다. 코어는 값을 계산하지 않고
/// 분류 후 그대로 내보내기 때문이다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub shipment_date: String,       // 출고일 (YYYY-MM-DD 또는 빈 값)
    pub status: StatusCode,          // 구분
    pub shipment_method: String,     // 출고방법
    pub channel: String,             // 판매처
    pub product_name: String,        // 상품명
    pub available_qty: String,       // 가용출고수량
    pub remarks: String,             // 비고
    pub product_code: String,        // 상품코드
    pub recipient: String,           // 수령자
    pub order_doc_code: String,      // 주문서코드
    pub channel_product_name: String, // 판매처상품명
    pub channel_option_name: String, // 판매처옵션명
    pub order_qty: String,           // 주문수량
    pub order_number: String,        // 주문번호
    pub line_order_number: String,   // 품목별주문번호
}

impl NormalizedRecord {
    /// 출고 컬럼 그룹 순서대로 값을 나열한다
    pub fn to_values(&self) -> Vec<String> {
        vec![
            self.shipment_date.clone(),
            self.status.to_string(),
            self.shipment_method.clone(),
            self.channel.clone(),
            self.product_name.clone(),
            self.available_qty.clone(),
            self.remarks.clone(),
            self.product_code.clone(),
            self.recipient.clone(),
            self.order_doc_code.clone(),
            self.channel_product_name.clone(),
            self.channel_option_name.clone(),
            self.order_qty.clone(),
            self.order_number.clone(),
            self.line_order_number.clone(),
        ]
    }
}

/// 분류가 끝난 한 행
///
/// suggestion 은 분류 엔진이 채우고, confirmed 는 다운스트림의
/// 수동 확정용으로 항상 빈 값으로 초기화된다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    pub suggestion: String, // 분류제안
    pub confirmed: String,  // 분류확정 (코어는 기록하지 않음)
    pub record: NormalizedRecord,
}

impl ClassifiedRecord {
    /// 최종 출력 컬럼 순서(분류제안, 분류확정, 출고 컬럼 그룹)의 한 행
    pub fn to_row(&self) -> Vec<String> {
        let mut row = vec![self.suggestion.clone(), self.confirmed.clone()];
        row.extend(self.record.to_values());
        row
    }
}

/// 최종 출력 헤더 행
pub fn output_headers() -> Vec<String> {
    schema::final_columns()
        .into_iter()
        .map(|c| c.to_string())
        .collect()
}
