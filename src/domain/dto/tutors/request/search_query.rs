use crate::domain::models::search::TutorSearchFilter;

/// 튜터 검색 쿼리 (`?name=...&colleges=...&colleges=...`)
///
/// `colleges`는 반복될 수 있으며 `colleges[]` 표기도 받습니다.
/// 반복 키를 보존하기 위해 `web::Query<Vec<(String, String)>>`로 받은 쌍에서 만듭니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TutorSearchQuery {
    pub name: Option<String>,
    pub colleges: Vec<String>,
}

impl TutorSearchQuery {
    /// 첫 번째 `name` 값만 사용하며 빈 대학 값은 건너뜁니다.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut search = Self::default();

        for (key, value) in pairs {
            match key.as_str() {
                "name" => {
                    if search.name.is_none() {
                        search.name = Some(value);
                    }
                }
                "colleges" | "colleges[]" => {
                    if !value.trim().is_empty() {
                        search.colleges.push(value);
                    }
                }
                _ => {}
            }
        }

        search
    }

    pub fn to_filter(&self) -> TutorSearchFilter {
        TutorSearchFilter::resolve(self.name.as_deref(), &self.colleges)
    }
}
