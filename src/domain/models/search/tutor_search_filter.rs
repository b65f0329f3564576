//! 튜터 검색 필터
//!
//! 검색 요청의 이름과 대학 목록은 질의 전에 한 번만 해석되어
//! 네 가지 경우 중 하나가 됩니다. 질의 문서는 해석된 필터에서만 만들어집니다.

use mongodb::bson::{doc, oid::ObjectId, Document};

#[derive(Debug, Clone, PartialEq)]
pub enum TutorSearchFilter {
    /// 조건 없음: 전체 목록
    All,
    /// 대학만 지정
    ByCollegeOnly { colleges: Vec<ObjectId> },
    /// 이름만 지정: 이름 또는 성에 부분 일치 (대소문자 무시)
    ByNameOnly { name: String },
    /// 이름과 대학 모두 만족
    ByNameAndCollege { name: String, colleges: Vec<ObjectId> },
}

impl TutorSearchFilter {
    /// 이름(앞뒤 공백 제거)과 대학 ID 문자열 목록으로 필터를 결정합니다.
    ///
    /// 대학 목록이 비어 있지 않으면 대학 조건이 적용됩니다.
    /// ObjectId 형식이 아닌 값은 어떤 튜터와도 일치할 수 없으므로 조건에서 빠집니다.
    pub fn resolve(name: Option<&str>, colleges: &[String]) -> Self {
        let name = name.map(str::trim).filter(|n| !n.is_empty());
        let has_colleges = !colleges.is_empty();

        match (name, has_colleges) {
            (None, false) => TutorSearchFilter::All,
            (None, true) => TutorSearchFilter::ByCollegeOnly {
                colleges: parse_college_ids(colleges),
            },
            (Some(name), false) => TutorSearchFilter::ByNameOnly {
                name: name.to_string(),
            },
            (Some(name), true) => TutorSearchFilter::ByNameAndCollege {
                name: name.to_string(),
                colleges: parse_college_ids(colleges),
            },
        }
    }

    /// MongoDB 질의 문서로 변환합니다.
    pub fn to_document(&self) -> Document {
        match self {
            TutorSearchFilter::All => doc! {},
            TutorSearchFilter::ByCollegeOnly { colleges } => {
                doc! { "college": college_clause(colleges) }
            }
            TutorSearchFilter::ByNameOnly { name } => name_clause(name),
            TutorSearchFilter::ByNameAndCollege { name, colleges } => {
                let mut filter = name_clause(name);
                filter.insert("college", college_clause(colleges));
                filter
            }
        }
    }
}

fn parse_college_ids(colleges: &[String]) -> Vec<ObjectId> {
    colleges
        .iter()
        .filter_map(|id| ObjectId::parse_str(id.trim()).ok())
        .collect()
}

fn name_clause(name: &str) -> Document {
    // 사용자 입력은 리터럴 부분 문자열로만 매칭
    let pattern = regex::escape(name);

    doc! {
        "$or": [
            { "firstName": { "$regex": &pattern, "$options": "i" } },
            { "lastName": { "$regex": &pattern, "$options": "i" } },
        ]
    }
}

fn college_clause(colleges: &[ObjectId]) -> Document {
    doc! { "$in": colleges.to_vec() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    fn hex_ids(n: usize) -> (Vec<ObjectId>, Vec<String>) {
        let ids: Vec<ObjectId> = (0..n).map(|_| ObjectId::new()).collect();
        let raw = ids.iter().map(|id| id.to_hex()).collect();
        (ids, raw)
    }

    #[test]
    fn test_empty_inputs_resolve_to_all() {
        assert_eq!(TutorSearchFilter::resolve(None, &[]), TutorSearchFilter::All);
        assert_eq!(TutorSearchFilter::resolve(Some("   "), &[]), TutorSearchFilter::All);
        assert_eq!(TutorSearchFilter::All.to_document(), doc! {});
    }

    #[test]
    fn test_name_is_trimmed() {
        let filter = TutorSearchFilter::resolve(Some("  ana "), &[]);

        assert_eq!(filter, TutorSearchFilter::ByNameOnly { name: "ana".to_string() });
    }

    #[test]
    fn test_college_only() {
        let (ids, raw) = hex_ids(2);

        let filter = TutorSearchFilter::resolve(None, &raw);

        assert_eq!(filter, TutorSearchFilter::ByCollegeOnly { colleges: ids.clone() });
        assert_eq!(filter.to_document(), doc! { "college": { "$in": ids } });
    }

    #[test]
    fn test_invalid_college_ids_match_nothing() {
        let filter = TutorSearchFilter::resolve(None, &["not-an-id".to_string()]);

        assert_eq!(filter, TutorSearchFilter::ByCollegeOnly { colleges: vec![] });
        let in_list = filter
            .to_document()
            .get_document("college")
            .unwrap()
            .get_array("$in")
            .unwrap()
            .clone();
        assert!(in_list.is_empty());
    }

    #[test]
    fn test_name_and_college_requires_both() {
        let (ids, raw) = hex_ids(1);

        let document = TutorSearchFilter::resolve(Some("ana"), &raw).to_document();

        assert!(document.contains_key("$or"));
        assert_eq!(
            document.get_document("college").unwrap().get_array("$in").unwrap(),
            &vec![Bson::ObjectId(ids[0])]
        );
    }

    #[test]
    fn test_name_clause_is_case_insensitive_substring() {
        let document = TutorSearchFilter::resolve(Some("ana"), &[]).to_document();
        let clauses = document.get_array("$or").unwrap();
        let first_name = clauses[0].as_document().unwrap().get_document("firstName").unwrap();

        let pattern = first_name.get_str("$regex").unwrap();
        assert_eq!(first_name.get_str("$options").unwrap(), "i");

        let matcher = regex::Regex::new(&format!("(?i){}", pattern)).unwrap();
        assert!(matcher.is_match("Ana"));
        assert!(matcher.is_match("Dana"));
        assert!(!matcher.is_match("Ben"));
    }

    #[test]
    fn test_name_metacharacters_are_literal() {
        let document = TutorSearchFilter::resolve(Some("a.*"), &[]).to_document();
        let clauses = document.get_array("$or").unwrap();
        let pattern = clauses[1]
            .as_document()
            .unwrap()
            .get_document("lastName")
            .unwrap()
            .get_str("$regex")
            .unwrap()
            .to_string();

        let matcher = regex::Regex::new(&format!("(?i){}", pattern)).unwrap();
        assert!(!matcher.is_match("Anderson"));
        assert!(matcher.is_match("Ma.*x"));
    }

    #[test]
    fn test_name_with_parentheses_is_escaped() {
        let document = TutorSearchFilter::resolve(Some("(x)"), &[]).to_document();
        let clauses = document.get_array("$or").unwrap();
        let first_name = clauses[0].as_document().unwrap().get_document("firstName").unwrap();

        assert_eq!(first_name.get_str("$regex").unwrap(), "\\(x\\)");
    }
}
