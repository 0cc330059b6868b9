// ==========================================
// 정산용 입출고 분류기 - 도메인 타입 정의
// ==========================================
// 구분(상태코드) / 파일 종류 / 분류 라벨
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 파일 종류 (Record Kind)
// ==========================================
// 키 컬럼 존재 여부로 판별: 출고일 → 출고, 입고일 → 입고
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    Outbound,     // 출고 내역
    Inbound,      // 입고 내역
    Unrecognized, // 키 컬럼 없음 (처리 대상 아님)
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Outbound => write!(f, "출고"),
            RecordKind::Inbound => write!(f, "입고"),
            RecordKind::Unrecognized => write!(f, "미인식"),
        }
    }
}

// ==========================================
// 구분 코드 (Status Code)
// ==========================================
// 원본 '구분' 컬럼의 값. 알려진 5종 외에는 Other 로 원문을 보존하고
// 분류 단계에서 그대로 통과(pass-through)시킨다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCode {
    NormalOut,     // 정상출고
    AdjustMinus,   // (-)조정
    AdjustPlus,    // (+)조정
    NormalIn,      // 정상입고
    ReturnIn,      // 반품입고
    Other(String), // 그 외 코드 (원문 보존)
}

impl StatusCode {
    /// 원본 셀 값(트림 후)으로부터 구분 코드를 만든다
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "정상출고" => StatusCode::NormalOut,
            "(-)조정" => StatusCode::AdjustMinus,
            "(+)조정" => StatusCode::AdjustPlus,
            "정상입고" => StatusCode::NormalIn,
            "반품입고" => StatusCode::ReturnIn,
            other => StatusCode::Other(other.to_string()),
        }
    }

    /// 출고 파일에서 정산 대상이 되는 구분 집합
    pub fn in_outbound_scope(&self) -> bool {
        matches!(self, StatusCode::NormalOut | StatusCode::AdjustMinus)
    }

    /// 입고 파일에서 정산 대상이 되는 구분 집합
    pub fn in_inbound_scope(&self) -> bool {
        matches!(
            self,
            StatusCode::ReturnIn | StatusCode::NormalIn | StatusCode::AdjustPlus
        )
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusCode::NormalOut => write!(f, "정상출고"),
            StatusCode::AdjustMinus => write!(f, "(-)조정"),
            StatusCode::AdjustPlus => write!(f, "(+)조정"),
            StatusCode::NormalIn => write!(f, "정상입고"),
            StatusCode::ReturnIn => write!(f, "반품입고"),
            StatusCode::Other(s) => write!(f, "{}", s),
        }
    }
}

// ==========================================
// 분류 라벨 (Classification Label)
// ==========================================
// '분류제안' 컬럼에 기록되는 값. Passthrough 는 알려지지 않은
// 구분 코드를 원문 그대로 라벨로 쓰는 경우.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Rocket,             // 로켓
    OliveYoung,         // 올리브영
    SetOutbound,        // 세트용 출고
    OutboundAdjustment, // 출고조정
    SetInbound,         // 세트용 입고
    PrepurchaseInbound, // 가구매 입고
    InboundAdjustment,  // 입고조정
    NormalInbound,      // 정상입고
    ReturnInbound,      // 반품입고
    Market,             // 마켓
    Inter,              // 인터
    Qoo10,              // 큐텐
    Goale,              // 고알레
    Marketing,          // 마케팅
    Defective,          // 불량
    Manual,             // 수기
    Unclassified,       // 미분류
    General,            // 일반
    Passthrough(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Rocket => write!(f, "로켓"),
            Label::OliveYoung => write!(f, "올리브영"),
            Label::SetOutbound => write!(f, "세트용 출고"),
            Label::OutboundAdjustment => write!(f, "출고조정"),
            Label::SetInbound => write!(f, "세트용 입고"),
            Label::PrepurchaseInbound => write!(f, "가구매 입고"),
            Label::InboundAdjustment => write!(f, "입고조정"),
            Label::NormalInbound => write!(f, "정상입고"),
            Label::ReturnInbound => write!(f, "반품입고"),
            Label::Market => write!(f, "마켓"),
            Label::Inter => write!(f, "인터"),
            Label::Qoo10 => write!(f, "큐텐"),
            Label::Goale => write!(f, "고알레"),
            Label::Marketing => write!(f, "마케팅"),
            Label::Defective => write!(f, "불량"),
            Label::Manual => write!(f, "수기"),
            Label::Unclassified => write!(f, "미분류"),
            Label::General => write!(f, "일반"),
            Label::Passthrough(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_parse_known() {
        assert_eq!(StatusCode::parse("정상출고"), StatusCode::NormalOut);
        assert_eq!(StatusCode::parse(" (-)조정 "), StatusCode::AdjustMinus);
        assert_eq!(StatusCode::parse("(+)조정"), StatusCode::AdjustPlus);
        assert_eq!(StatusCode::parse("정상입고"), StatusCode::NormalIn);
        assert_eq!(StatusCode::parse("반품입고"), StatusCode::ReturnIn);
    }

    #[test]
    fn test_status_code_parse_other_preserves_text() {
        let code = StatusCode::parse("폐기출고");
        assert_eq!(code, StatusCode::Other("폐기출고".to_string()));
        assert_eq!(code.to_string(), "폐기출고");
    }

    #[test]
    fn test_status_scope_sets() {
        assert!(StatusCode::NormalOut.in_outbound_scope());
        assert!(StatusCode::AdjustMinus.in_outbound_scope());
        assert!(!StatusCode::NormalIn.in_outbound_scope());

        assert!(StatusCode::ReturnIn.in_inbound_scope());
        assert!(StatusCode::NormalIn.in_inbound_scope());
        assert!(StatusCode::AdjustPlus.in_inbound_scope());
        assert!(!StatusCode::NormalOut.in_inbound_scope());
        assert!(!StatusCode::Other("기타".into()).in_inbound_scope());
    }

    #[test]
    fn test_label_display() {
        assert_eq!(Label::Rocket.to_string(), "로켓");
        assert_eq!(Label::SetOutbound.to_string(), "세트용 출고");
        assert_eq!(Label::Passthrough("폐기출고".into()).to_string(), "폐기출고");
    }
}
