/// 보호된 경로가 요구하는 역할
#[derive(Debug, Clone, PartialEq)]
pub enum RequiredRole {
    /// 해당 역할을 반드시 가져야 함
    Single(String),
    /// 나열된 역할 중 하나 이상
    Any(Vec<String>),
}

impl RequiredRole {
    pub fn is_satisfied(&self, user_roles: &[String]) -> bool {
        match self {
            RequiredRole::Single(required_role) => user_roles.contains(required_role),
            RequiredRole::Any(required_roles) => {
                required_roles.iter().any(|role| user_roles.contains(role))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_role_single() {
        let required = RequiredRole::Single("tutor".to_string());

        assert!(required.is_satisfied(&["tutor".to_string()]));
        assert!(!required.is_satisfied(&["student".to_string()]));
        assert!(!required.is_satisfied(&[]));
    }

    #[test]
    fn test_required_role_any() {
        let required = RequiredRole::Any(vec!["tutor".to_string(), "admin".to_string()]);

        assert!(required.is_satisfied(&["admin".to_string()]));
        assert!(required.is_satisfied(&["student".to_string(), "tutor".to_string()]));
        assert!(!required.is_satisfied(&["student".to_string()]));
    }
}
