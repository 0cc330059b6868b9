// ==========================================
// 정산용 입출고 분류기 - 데이터 클리너
// ==========================================
// 책임: TRIM / 날짜 표준화 (YYYY-MM-DD)
// 정책: 날짜 파싱 실패는 경고 후 빈 값. 행 처리를 중단하지 않는다.
// ==========================================

use chrono::NaiveDate;
use tracing::warn;

/// Excel 시리얼 날짜의 기준일 (1899-12-30)
const EXCEL_EPOCH: (i32, u32, u32) = (1899, 12, 30);

pub struct DataCleaner;

impl DataCleaner {
    /// 트림 정리
    pub fn clean_text(&self, value: &str) -> String {
        value.trim().to_string()
    }

    /// 날짜 셀 값을 NaiveDate 로 해석한다
    ///
    /// 지원 형식: YYYY-MM-DD, YYYY/MM/DD, YYYYMMDD,
    /// 날짜+시각 변형, Excel 시리얼 숫자.
    pub fn parse_date(&self, value: &str) -> Option<NaiveDate> {
        let v = value.trim();
        if v.is_empty() {
            return None;
        }

        const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];
        for fmt in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(v, fmt) {
                return Some(date);
            }
        }

        const DATETIME_FORMATS: [&str; 3] =
            ["%Y-%m-%d %H:%M:%S", "%Y/%m/%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
        for fmt in DATETIME_FORMATS {
            if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(v, fmt) {
                return Some(dt.date());
            }
        }

        // Excel 시리얼 숫자 (calamine 이 날짜 셀을 숫자로 돌려주는 경우)
        if let Ok(serial) = v.parse::<f64>() {
            if serial >= 1.0 && serial < 300_000.0 {
                let epoch =
                    NaiveDate::from_ymd_opt(EXCEL_EPOCH.0, EXCEL_EPOCH.1, EXCEL_EPOCH.2)?;
                return epoch.checked_add_days(chrono::Days::new(serial.floor() as u64));
            }
        }

        None
    }

    /// 날짜 셀 값을 YYYY-MM-DD 문자열로 표준화한다
    ///
    /// 해석 불가능한 값은 경고를 남기고 빈 문자열이 된다.
    pub fn format_date(&self, value: &str, field: &str) -> String {
        let v = value.trim();
        if v.is_empty() {
            return String::new();
        }
        match self.parse_date(v) {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => {
                warn!(field = %field, value = %v, "날짜 해석 실패, 빈 값으로 처리");
                String::new()
            }
        }
    }
}
