//! # Service Registry
//!
//! `singleton_macro`의 `#[service]` / `#[repository]` 매크로가 사용하는
//! 싱글톤 레지스트리입니다.
//!
//! 매크로는 구조체마다 다음을 생성합니다.
//!
//! - `instance()`: `OnceCell`에 보관된 `Arc<Self>` 반환
//! - `new()`: `Arc<T>` 필드를 [`ServiceLocator::get`]으로 주입
//! - `inventory::submit!`: [`ServiceRegistration`] / [`RepositoryRegistration`] 등록
//!
//! `ServiceLocator::get::<T>()`는 타입 이름에서 엔티티 이름을 추출합니다.
//! `TutorRepository` → `"tutor"`, `TokenService` → `"token"` 순서로
//! 등록 이름(`tutor_repository`, `token_service`)과 매칭됩니다.
//! 따라서 매크로의 `name` 인자는 구조체 접두사의 소문자와 같아야 합니다.
//!
//! 매크로로 만들 수 없는 인프라 객체(`Database`)는 [`ServiceLocator::set`]으로
//! 직접 등록합니다.

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use crate::utils::display_terminal::{
    print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete,
    print_step_start, print_sub_task,
};

/// `#[service]` 매크로가 구현하는 trait
#[async_trait]
pub trait Service: Send + Sync {
    fn name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// `#[repository]` 매크로가 구현하는 trait
#[async_trait]
pub trait Repository: Send + Sync {
    fn name(&self) -> &str;

    fn collection_name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 서비스 등록 정보 (`inventory`로 수집)
pub struct ServiceRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 등록 정보 (`inventory`로 수집)
pub struct RepositoryRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 컴포넌트 종류
#[derive(Debug, Clone, Copy, PartialEq)]
enum ComponentKind {
    Repository,
    Service,
}

impl ComponentKind {
    fn suffix(self) -> &'static str {
        match self {
            ComponentKind::Repository => "Repository",
            ComponentKind::Service => "Service",
        }
    }

    /// 타입 이름(`TutorRepository`)으로 컴포넌트 종류를 판별합니다.
    fn of(type_name: &str) -> Option<Self> {
        if type_name.ends_with("Repository") {
            Some(ComponentKind::Repository)
        } else if type_name.ends_with("Service") {
            Some(ComponentKind::Service)
        } else {
            None
        }
    }
}

static SERVICE_CONSTRUCTORS: Lazy<HashMap<String, fn() -> Box<dyn Any + Send + Sync>>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<ServiceRegistration>()
        .map(|registration| (registration_key(registration.name), registration.constructor))
        .collect();

    print_cache_initialized("Service", cache.len());
    cache
});

static REPOSITORY_CONSTRUCTORS: Lazy<HashMap<String, fn() -> Box<dyn Any + Send + Sync>>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<RepositoryRegistration>()
        .map(|registration| (registration_key(registration.name), registration.constructor))
        .collect();

    print_cache_initialized("Repository", cache.len());
    cache
});

/// 등록 이름에서 접미사를 제거합니다. (`tutor_repository` → `tutor`)
fn registration_key(name: &str) -> String {
    name.strip_suffix("_service")
        .or_else(|| name.strip_suffix("_repository"))
        .unwrap_or(name)
        .to_string()
}

/// 전체 경로 타입 이름에서 마지막 세그먼트만 남깁니다.
fn short_type_name(type_name: &str) -> &str {
    type_name.rsplit("::").next().unwrap_or(type_name)
}

/// 타입 기반 싱글톤 레지스트리
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    initializing: RwLock<HashSet<TypeId>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(|| ServiceLocator {
    instances: RwLock::new(HashMap::new()),
    initializing: RwLock::new(HashSet::new()),
});

impl ServiceLocator {
    /// 등록된 인스턴스를 반환하거나, 매크로 등록 정보로 생성합니다.
    ///
    /// # Panics
    ///
    /// * 등록되지 않은 타입을 요청한 경우
    /// * 순환 의존성이 감지된 경우
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if let Some(instance) = Self::lookup::<T>(type_id) {
            return instance;
        }

        {
            let mut initializing = LOCATOR.initializing.write().unwrap();
            if !initializing.insert(type_id) {
                panic!("Circular dependency detected: {} is already being initialized", type_name);
            }
        }

        let instance = Self::construct::<T>(type_name);

        LOCATOR.initializing.write().unwrap().remove(&type_id);
        LOCATOR.instances
            .write()
            .unwrap()
            .insert(type_id, instance.clone() as Arc<dyn Any + Send + Sync>);

        instance
    }

    fn lookup<T: 'static + Send + Sync>(type_id: TypeId) -> Option<Arc<T>> {
        let instances = LOCATOR.instances.read().unwrap();
        instances
            .get(&type_id)
            .map(|instance| instance.clone().downcast::<T>().expect("Type mismatch in ServiceLocator"))
    }

    fn construct<T: 'static + Send + Sync>(type_name: &str) -> Arc<T> {
        let short_name = short_type_name(type_name);

        let kind = ComponentKind::of(short_name).unwrap_or_else(|| {
            panic!(
                "Service not found: {}. Register it with #[service], #[repository] or ServiceLocator::set()",
                type_name
            )
        });

        let entity = short_name
            .strip_suffix(kind.suffix())
            .unwrap_or(short_name)
            .to_lowercase();

        let constructors = match kind {
            ComponentKind::Repository => &*REPOSITORY_CONSTRUCTORS,
            ComponentKind::Service => &*SERVICE_CONSTRUCTORS,
        };

        let constructor = constructors
            .get(&entity)
            .unwrap_or_else(|| panic!("No {:?} registered for entity: {}", kind, entity));

        match constructor().downcast::<Arc<T>>() {
            Ok(instance) => (*instance).clone(),
            Err(_) => panic!("Type mismatch for {:?}: {}", kind, entity),
        }
    }

    /// 인스턴스를 직접 등록합니다. (`Database` 등 인프라 객체)
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = std::any::type_name::<T>();
        log::info!("📦 Registering: {}", short_type_name(type_name));

        LOCATOR.instances
            .write()
            .unwrap()
            .insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 모든 리포지토리와 서비스를 미리 생성합니다.
    ///
    /// 리포지토리를 먼저 생성한 뒤 서비스를 생성합니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repositories: Vec<_> = inventory::iter::<RepositoryRegistration>()
            .map(|r| (r.name, r.constructor))
            .collect();
        let repo_count = Self::create_all(1, "Repository", &repositories);

        let services: Vec<_> = inventory::iter::<ServiceRegistration>()
            .map(|s| (s.name, s.constructor))
            .collect();
        let service_count = Self::create_all(2, "Service", &services);

        print_final_summary(repo_count, service_count);

        Ok(())
    }

    fn create_all(
        step: u8,
        label: &str,
        registrations: &[(&'static str, fn() -> Box<dyn Any + Send + Sync>)],
    ) -> usize {
        if registrations.is_empty() {
            return 0;
        }

        print_step_start(step, &format!("Creating {} instances", label));

        for (name, constructor) in registrations {
            let _instance = constructor();
            print_sub_task(name, "✓ Created");
        }

        print_step_complete(step, &format!("{} instances created", label), registrations.len());
        registrations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_key_strips_suffix() {
        assert_eq!(registration_key("tutor_repository"), "tutor");
        assert_eq!(registration_key("token_service"), "token");
        assert_eq!(registration_key("database"), "database");
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(
            short_type_name("tutor_service_backend::repositories::tutors::tutor_repo::TutorRepository"),
            "TutorRepository"
        );
        assert_eq!(short_type_name("TokenService"), "TokenService");
    }

    #[test]
    fn test_component_kind_of() {
        assert_eq!(ComponentKind::of("TutorRepository"), Some(ComponentKind::Repository));
        assert_eq!(ComponentKind::of("TutorService"), Some(ComponentKind::Service));
        assert_eq!(ComponentKind::of("Database"), None);
    }

    #[test]
    fn test_set_then_get_returns_same_instance() {
        struct ManualComponent(u32);

        ServiceLocator::set(Arc::new(ManualComponent(7)));
        let first = ServiceLocator::get::<ManualComponent>();
        let second = ServiceLocator::get::<ManualComponent>();

        assert_eq!(first.0, 7);
        assert!(Arc::ptr_eq(&first, &second));
    }
}
