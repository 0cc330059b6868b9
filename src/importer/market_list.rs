// ==========================================
// 정산용 입출고 분류기 - 마켓 상품명 목록
// ==========================================
// 분류 단계의 참조 집합. 한 번 만들고 런 내내 불변이다.
// 원본: 마켓 상품명 파일의 첫 번째 컬럼
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::UniversalFileParser;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// 마켓 상품명 집합
///
/// 판매처상품명이 이 집합에 들어 있으면 '마켓' 출고로 분류된다.
#[derive(Debug, Clone, Default)]
pub struct MarketList {
    names: HashSet<String>,
}

impl MarketList {
    /// 트림된 상품명 목록으로 집합을 만든다 (빈 값 제외)
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        Self { names }
    }

    /// 마켓 상품명 파일에서 집합을 만든다
    ///
    /// 첫 번째 시트의 첫 번째 컬럼을 읽는다. 파일 에러는
    /// MarketListError 로 감싸 배치 시작 전에 중단시킨다.
    pub fn load<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let parsed = UniversalFileParser
            .parse(&path)
            .map_err(|e| ImportError::MarketListError(e.to_string()))?;

        let first_column = parsed
            .headers
            .first()
            .cloned()
            .ok_or_else(|| ImportError::MarketListError("헤더가 없습니다".to_string()))?;

        let list = Self::from_names(
            parsed
                .rows
                .iter()
                .filter_map(|row| row.get(&first_column))
                .map(|s| s.as_str()),
        );

        info!(count = list.len(), "마켓 상품명 목록 로드 완료");
        Ok(list)
    }

    /// 트림 후 멤버십 검사
    pub fn contains(&self, product_name: &str) -> bool {
        self.names.contains(product_name.trim())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
