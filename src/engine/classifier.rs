// ==========================================
// 정산용 입출고 분류기 - 행 분류 엔진
// ==========================================
// 규칙: 명시적 순서의 결정 테이블, 위에서 아래로 평가,
//       첫 번째로 매칭되는 규칙이 이긴다 (first-match-wins)
// 불변식: 규칙 순서 자체가 업무 규칙이다. 밀크런/올리브영은
//         구분 코드와 무관하게 모든 규칙에 우선한다.
// ==========================================

use crate::domain::record::NormalizedRecord;
use crate::domain::types::{Label, StatusCode};
use crate::importer::market_list::MarketList;

// ==========================================
// 업무 토큰 (대소문자 구분, 부분 문자열 매칭)
// ==========================================
pub const MARKER_MILK_RUN: &str = "밀크런";
pub const MARKER_OLIVE_YOUNG: &str = "올리브영";
pub const MARKER_SET: &str = "세트";
pub const MARKER_PREPURCHASE: &str = "가구매";
pub const MARKER_ONNURI_INTER: &str = "온누리인터";
pub const MARKER_QOO10: &str = "큐텐";
pub const MARKER_GOALE: &str = "고알레";
pub const MARKER_MARKETING: [&str; 3] = ["마케팅", "시딩", "개인구매"];
pub const MARKER_DEFECTIVE: &str = "제품 불량 재발송";
pub const MARKER_MANUAL_ORDER: &str = "수기발주";
pub const MARKER_PHONE_PURCHASE: &str = "전화구매";

// 판매처 정확 일치 (트림 비교)
pub const CHANNEL_COUPANG_SHIPMENT: &str = "*쿠팡(쉽먼트)_미오";
pub const CHANNEL_AIMWEB: &str = "아임웹_미오";

// ==========================================
// 분류 결과
// ==========================================
// Excluded 는 현재 규칙 집합에서는 나오지 않지만, 라벨 없이
// 행을 버려야 하는 경우를 위해 계약에 남겨 둔다. 파이프라인은
// Excluded 행을 최종 테이블에서 제외해야 한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Label(Label),
    Excluded,
}

// ==========================================
// 결정 테이블
// ==========================================

/// 결정 테이블의 한 규칙: 매칭되면 라벨을 돌려준다
pub struct Rule {
    pub name: &'static str,
    pub apply: fn(&NormalizedRecord, &MarketList) -> Option<Label>,
}

/// 분류 규칙 테이블 (순서가 곧 우선순위)
pub const RULES: &[Rule] = &[
    Rule { name: "milk_run_override", apply: milk_run_override },
    Rule { name: "olive_young_override", apply: olive_young_override },
    Rule { name: "adjust_minus_set", apply: adjust_minus_set },
    Rule { name: "adjust_minus", apply: adjust_minus },
    Rule { name: "adjust_plus_set", apply: adjust_plus_set },
    Rule { name: "adjust_plus_prepurchase", apply: adjust_plus_prepurchase },
    Rule { name: "adjust_plus", apply: adjust_plus },
    Rule { name: "normal_in_set", apply: normal_in_set },
    Rule { name: "normal_in", apply: normal_in },
    Rule { name: "return_in", apply: return_in },
    Rule { name: "normal_out_set_without_method", apply: normal_out_set_without_method },
    Rule { name: "normal_out_rocket_channel", apply: normal_out_rocket_channel },
    Rule { name: "normal_out_market", apply: normal_out_market },
    Rule { name: "normal_out_inter", apply: normal_out_inter },
    Rule { name: "normal_out_qoo10", apply: normal_out_qoo10 },
    Rule { name: "normal_out_goale", apply: normal_out_goale },
    Rule { name: "normal_out_marketing", apply: normal_out_marketing },
    Rule { name: "normal_out_defective", apply: normal_out_defective },
    Rule { name: "normal_out_manual", apply: normal_out_manual },
    Rule { name: "normal_out_unclassified", apply: normal_out_unclassified },
    Rule { name: "normal_out_general", apply: normal_out_general },
    Rule { name: "status_pass_through", apply: status_pass_through },
];

/// 한 행을 분류한다
///
/// 결정 테이블을 위에서 아래로 평가한다. 테이블은 모든 구분
/// 코드를 커버하므로 실무에서는 항상 라벨이 나온다. 어떤 규칙도
/// 매칭되지 않으면 Excluded (파이프라인이 행을 버린다).
pub fn classify(record: &NormalizedRecord, market: &MarketList) -> Outcome {
    for rule in RULES {
        if let Some(label) = (rule.apply)(record, market) {
            return Outcome::Label(label);
        }
    }
    Outcome::Excluded
}

// ==========================================
// 규칙 구현
// ==========================================
// 1~2) 비고 기반 최우선 규칙: 구분 코드보다 먼저 평가된다

fn milk_run_override(r: &NormalizedRecord, _: &MarketList) -> Option<Label> {
    r.remarks.contains(MARKER_MILK_RUN).then_some(Label::Rocket)
}

fn olive_young_override(r: &NormalizedRecord, _: &MarketList) -> Option<Label> {
    r.remarks
        .contains(MARKER_OLIVE_YOUNG)
        .then_some(Label::OliveYoung)
}

// 3) (-)조정

fn adjust_minus_set(r: &NormalizedRecord, _: &MarketList) -> Option<Label> {
    (r.status == StatusCode::AdjustMinus && r.remarks.contains(MARKER_SET))
        .then_some(Label::SetOutbound)
}

fn adjust_minus(r: &NormalizedRecord, _: &MarketList) -> Option<Label> {
    (r.status == StatusCode::AdjustMinus).then_some(Label::OutboundAdjustment)
}

// 4) (+)조정

fn adjust_plus_set(r: &NormalizedRecord, _: &MarketList) -> Option<Label> {
    (r.status == StatusCode::AdjustPlus && r.remarks.contains(MARKER_SET))
        .then_some(Label::SetInbound)
}

fn adjust_plus_prepurchase(r: &NormalizedRecord, _: &MarketList) -> Option<Label> {
    (r.status == StatusCode::AdjustPlus && r.remarks.contains(MARKER_PREPURCHASE))
        .then_some(Label::PrepurchaseInbound)
}

fn adjust_plus(r: &NormalizedRecord, _: &MarketList) -> Option<Label> {
    (r.status == StatusCode::AdjustPlus).then_some(Label::InboundAdjustment)
}

// 5) 정상입고

fn normal_in_set(r: &NormalizedRecord, _: &MarketList) -> Option<Label> {
    (r.status == StatusCode::NormalIn && r.remarks.contains(MARKER_SET))
        .then_some(Label::SetInbound)
}

fn normal_in(r: &NormalizedRecord, _: &MarketList) -> Option<Label> {
    (r.status == StatusCode::NormalIn).then_some(Label::NormalInbound)
}

// 6) 반품입고

fn return_in(r: &NormalizedRecord, _: &MarketList) -> Option<Label> {
    (r.status == StatusCode::ReturnIn).then_some(Label::ReturnInbound)
}

// 7) 정상출고: 출고방법 미기재 + 세트 비고 → 세트용 출고

fn normal_out_set_without_method(r: &NormalizedRecord, _: &MarketList) -> Option<Label> {
    (r.status == StatusCode::NormalOut
        && r.shipment_method.trim().is_empty()
        && r.remarks.contains(MARKER_SET))
    .then_some(Label::SetOutbound)
}

// 7-b) 정상출고: 판매처/판매처상품명/판매처옵션명 순서대로 평가

fn normal_out_rocket_channel(r: &NormalizedRecord, _: &MarketList) -> Option<Label> {
    (r.status == StatusCode::NormalOut && r.channel.trim() == CHANNEL_COUPANG_SHIPMENT)
        .then_some(Label::Rocket)
}

fn normal_out_market(r: &NormalizedRecord, market: &MarketList) -> Option<Label> {
    (r.status == StatusCode::NormalOut && market.contains(&r.channel_product_name))
        .then_some(Label::Market)
}

fn normal_out_inter(r: &NormalizedRecord, _: &MarketList) -> Option<Label> {
    (r.status == StatusCode::NormalOut && r.channel_option_name.contains(MARKER_ONNURI_INTER))
        .then_some(Label::Inter)
}

fn normal_out_qoo10(r: &NormalizedRecord, _: &MarketList) -> Option<Label> {
    (r.status == StatusCode::NormalOut && r.channel_option_name.contains(MARKER_QOO10))
        .then_some(Label::Qoo10)
}

fn normal_out_goale(r: &NormalizedRecord, _: &MarketList) -> Option<Label> {
    (r.status == StatusCode::NormalOut && r.channel_product_name.contains(MARKER_GOALE))
        .then_some(Label::Goale)
}

fn normal_out_marketing(r: &NormalizedRecord, _: &MarketList) -> Option<Label> {
    (r.status == StatusCode::NormalOut
        && MARKER_MARKETING
            .iter()
            .any(|m| r.channel_option_name.contains(m)))
    .then_some(Label::Marketing)
}

fn normal_out_defective(r: &NormalizedRecord, _: &MarketList) -> Option<Label> {
    (r.status == StatusCode::NormalOut && r.channel_option_name.contains(MARKER_DEFECTIVE))
        .then_some(Label::Defective)
}

fn normal_out_manual(r: &NormalizedRecord, _: &MarketList) -> Option<Label> {
    (r.status == StatusCode::NormalOut && r.channel.contains(MARKER_MANUAL_ORDER))
        .then_some(Label::Manual)
}

// 아임웹(전화구매 제외)과 판매처 미기재를 하나의 미분류로 묶는
// 현행 정책을 그대로 따른다
fn normal_out_unclassified(r: &NormalizedRecord, _: &MarketList) -> Option<Label> {
    if r.status != StatusCode::NormalOut {
        return None;
    }
    let channel = r.channel.trim();
    let aimweb_without_phone =
        channel == CHANNEL_AIMWEB && !r.channel_option_name.contains(MARKER_PHONE_PURCHASE);
    (aimweb_without_phone || channel.is_empty()).then_some(Label::Unclassified)
}

fn normal_out_general(r: &NormalizedRecord, _: &MarketList) -> Option<Label> {
    (r.status == StatusCode::NormalOut).then_some(Label::General)
}

// 8) 그 외 구분 코드: 원문 그대로 라벨로 통과시킨다

fn status_pass_through(r: &NormalizedRecord, _: &MarketList) -> Option<Label> {
    match &r.status {
        StatusCode::Other(code) => Some(Label::Passthrough(code.clone())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: &str) -> NormalizedRecord {
        NormalizedRecord {
            shipment_date: "2025-06-01".to_string(),
            status: StatusCode::parse(status),
            shipment_method: "택배".to_string(),
            channel: "자사몰".to_string(),
            product_name: "상품A".to_string(),
            available_qty: "1".to_string(),
            remarks: String::new(),
            product_code: "P-001".to_string(),
            recipient: String::new(),
            order_doc_code: String::new(),
            channel_product_name: "상품A".to_string(),
            channel_option_name: String::new(),
            order_qty: "1".to_string(),
            order_number: String::new(),
            line_order_number: String::new(),
        }
    }

    fn market() -> MarketList {
        MarketList::from_names(["마켓전용상품"])
    }

    fn label_of(r: &NormalizedRecord) -> Label {
        match classify(r, &market()) {
            Outcome::Label(l) => l,
            Outcome::Excluded => panic!("라벨이 나와야 한다"),
        }
    }

    #[test]
    fn test_milk_run_beats_everything() {
        // 구분 코드나 판매처가 무엇이든 밀크런 비고가 이긴다
        for status in ["정상출고", "(-)조정", "(+)조정", "정상입고", "반품입고", "기타코드"] {
            let mut r = record(status);
            r.remarks = "쿠팡 밀크런 출고".to_string();
            r.channel = String::new(); // 판매처 미기재여도 무관
            assert_eq!(label_of(&r), Label::Rocket, "구분={}", status);
        }
    }

    #[test]
    fn test_olive_young_beats_status_rules() {
        let mut r = record("(-)조정");
        r.remarks = "올리브영 행사분".to_string();
        assert_eq!(label_of(&r), Label::OliveYoung);
    }

    #[test]
    fn test_milk_run_beats_olive_young() {
        let mut r = record("정상출고");
        r.remarks = "올리브영 밀크런".to_string();
        assert_eq!(label_of(&r), Label::Rocket);
    }

    #[test]
    fn test_adjust_minus_split_on_set_marker() {
        let mut with_set = record("(-)조정");
        with_set.remarks = "세트 해체".to_string();
        assert_eq!(label_of(&with_set), Label::SetOutbound);

        let without_set = record("(-)조정");
        assert_eq!(label_of(&without_set), Label::OutboundAdjustment);
    }

    #[test]
    fn test_adjust_plus_branches() {
        let mut with_set = record("(+)조정");
        with_set.remarks = "세트 구성".to_string();
        assert_eq!(label_of(&with_set), Label::SetInbound);

        let mut prepurchase = record("(+)조정");
        prepurchase.remarks = "가구매 입고분".to_string();
        assert_eq!(label_of(&prepurchase), Label::PrepurchaseInbound);

        let plain = record("(+)조정");
        assert_eq!(label_of(&plain), Label::InboundAdjustment);
    }

    #[test]
    fn test_normal_in_branches() {
        let mut with_set = record("정상입고");
        with_set.remarks = "세트 부속".to_string();
        assert_eq!(label_of(&with_set), Label::SetInbound);

        let plain = record("정상입고");
        assert_eq!(label_of(&plain), Label::NormalInbound);
    }

    #[test]
    fn test_return_in() {
        assert_eq!(label_of(&record("반품입고")), Label::ReturnInbound);
    }

    #[test]
    fn test_normal_out_set_requires_empty_method() {
        let mut r = record("정상출고");
        r.shipment_method = String::new();
        r.remarks = "세트 출고".to_string();
        assert_eq!(label_of(&r), Label::SetOutbound);

        // 출고방법이 있으면 세트 비고가 있어도 하위 규칙으로 내려간다
        let mut r2 = record("정상출고");
        r2.remarks = "세트 출고".to_string();
        assert_eq!(label_of(&r2), Label::General);
    }

    #[test]
    fn test_normal_out_rocket_channel_exact_match() {
        let mut r = record("정상출고");
        r.channel = " *쿠팡(쉽먼트)_미오 ".to_string();
        assert_eq!(label_of(&r), Label::Rocket);
    }

    #[test]
    fn test_market_membership_beats_option_rules() {
        // 판매처상품명이 마켓 목록에 있으면 옵션명이 큐텐이어도 마켓
        let mut r = record("정상출고");
        r.channel_product_name = " 마켓전용상품 ".to_string();
        r.channel_option_name = "큐텐 프로모션".to_string();
        assert_eq!(label_of(&r), Label::Market);
    }

    #[test]
    fn test_option_name_rules_in_order() {
        let mut inter = record("정상출고");
        inter.channel_option_name = "온누리인터 3종".to_string();
        assert_eq!(label_of(&inter), Label::Inter);

        let mut qoo10 = record("정상출고");
        qoo10.channel_option_name = "큐텐 특가".to_string();
        assert_eq!(label_of(&qoo10), Label::Qoo10);

        let mut goale = record("정상출고");
        goale.channel_product_name = "고알레 티셔츠".to_string();
        assert_eq!(label_of(&goale), Label::Goale);

        let mut marketing = record("정상출고");
        marketing.channel_option_name = "시딩 발송".to_string();
        assert_eq!(label_of(&marketing), Label::Marketing);

        let mut defective = record("정상출고");
        defective.channel_option_name = "제품 불량 재발송 건".to_string();
        assert_eq!(label_of(&defective), Label::Defective);

        let mut manual = record("정상출고");
        manual.channel = "수기발주(B2B)".to_string();
        assert_eq!(label_of(&manual), Label::Manual);
    }

    #[test]
    fn test_unclassified_aimweb_without_phone_purchase() {
        let mut r = record("정상출고");
        r.channel = "아임웹_미오".to_string();
        assert_eq!(label_of(&r), Label::Unclassified);

        // 전화구매 옵션이 붙으면 미분류가 아니라 일반
        let mut phone = record("정상출고");
        phone.channel = "아임웹_미오".to_string();
        phone.channel_option_name = "전화구매 접수".to_string();
        assert_eq!(label_of(&phone), Label::General);
    }

    #[test]
    fn test_unclassified_empty_channel() {
        let mut r = record("정상출고");
        r.channel = "  ".to_string();
        assert_eq!(label_of(&r), Label::Unclassified);
    }

    #[test]
    fn test_normal_out_general_fallback() {
        assert_eq!(label_of(&record("정상출고")), Label::General);
    }

    #[test]
    fn test_unknown_status_passes_through_verbatim() {
        let r = record("폐기출고");
        assert_eq!(label_of(&r), Label::Passthrough("폐기출고".to_string()));
    }

    #[test]
    fn test_mixed_inbound_statuses_labels_in_order() {
        // 정상입고/반품입고/알 수 없는 코드 3행 → 정확히 이 라벨 순서
        let statuses = ["정상입고", "반품입고", "폐기출고"];
        let labels: Vec<String> = statuses
            .iter()
            .map(|s| label_of(&record(s)).to_string())
            .collect();
        assert_eq!(labels, vec!["정상입고", "반품입고", "폐기출고"]);
    }

    #[test]
    fn test_rule_table_names_are_unique() {
        let mut names: Vec<&str> = RULES.iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), RULES.len());
    }
}
