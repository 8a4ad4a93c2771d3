//! Route catalog for the interview platform gateway
//!
//! Every operation the client performs is one of these descriptors. Paths
//! containing `{id}` are templates filled in with [`Endpoint::with_id`].

use crate::contract::PageRequest;

/// HTTP methods used by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of one gateway operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: HttpMethod,
    /// Path template relative to the base address
    pub path: &'static str,
    /// Whether the server expects a bearer token
    pub requires_auth: bool,
    /// Whether a successful response carries an `accessToken` to adopt
    pub propagates_token: bool,
}

impl Endpoint {
    const fn new(method: HttpMethod, path: &'static str) -> Self {
        Self {
            method,
            path,
            requires_auth: true,
            propagates_token: false,
        }
    }

    const fn public(self) -> Self {
        Self {
            requires_auth: false,
            ..self
        }
    }

    const fn issues_token(self) -> Self {
        Self {
            propagates_token: true,
            ..self
        }
    }

    /// Path with the `{id}` placeholder filled in.
    pub fn with_id(&self, id: i64) -> String {
        self.path.replace("{id}", &id.to_string())
    }

    /// Path with `page`/`size` query parameters.
    pub fn paged(&self, page: PageRequest) -> String {
        format!("{}?{}", self.path, page.to_query())
    }

    /// Whether a concrete route (query string ignored) matches this template.
    pub fn matches(&self, method: HttpMethod, route: &str) -> bool {
        if self.method != method {
            return false;
        }
        let path = route.split('?').next().unwrap_or(route);
        let mut template = self.path.split('/');
        let mut actual = path.split('/');
        loop {
            match (template.next(), actual.next()) {
                (None, None) => return true,
                (Some("{id}"), Some(segment)) if !segment.is_empty() => {}
                (Some(expected), Some(segment)) if expected == segment => {}
                _ => return false,
            }
        }
    }
}

use HttpMethod::{Delete, Get, Post, Put};

// ===== Auth =====
pub const AUTH_REGISTER: Endpoint = Endpoint::new(Post, "/auth/register").public().issues_token();
pub const AUTH_LOGIN: Endpoint = Endpoint::new(Post, "/auth/login").public().issues_token();
pub const AUTH_USER_INFO: Endpoint = Endpoint::new(Get, "/auth/user-info");
pub const AUTH_REFRESH: Endpoint = Endpoint::new(Post, "/auth/refresh").public().issues_token();
pub const AUTH_VERIFY: Endpoint = Endpoint::new(Get, "/auth/verify").public();

// ===== Questions & taxonomy =====
pub const FIELDS_CREATE: Endpoint = Endpoint::new(Post, "/questions/fields");
pub const FIELDS_LIST: Endpoint = Endpoint::new(Get, "/questions/fields");
pub const FIELD_GET: Endpoint = Endpoint::new(Get, "/questions/fields/{id}");
pub const FIELD_UPDATE: Endpoint = Endpoint::new(Put, "/questions/fields/{id}");
pub const FIELD_DELETE: Endpoint = Endpoint::new(Delete, "/questions/fields/{id}");

pub const TOPICS_CREATE: Endpoint = Endpoint::new(Post, "/questions/topics");
pub const TOPICS_LIST: Endpoint = Endpoint::new(Get, "/questions/topics");
pub const TOPIC_GET: Endpoint = Endpoint::new(Get, "/questions/topics/{id}");
pub const TOPIC_UPDATE: Endpoint = Endpoint::new(Put, "/questions/topics/{id}");
pub const TOPIC_DELETE: Endpoint = Endpoint::new(Delete, "/questions/topics/{id}");

pub const LEVELS_CREATE: Endpoint = Endpoint::new(Post, "/questions/levels");
pub const LEVELS_LIST: Endpoint = Endpoint::new(Get, "/questions/levels");
pub const LEVEL_GET: Endpoint = Endpoint::new(Get, "/questions/levels/{id}");
pub const LEVEL_UPDATE: Endpoint = Endpoint::new(Put, "/questions/levels/{id}");
pub const LEVEL_DELETE: Endpoint = Endpoint::new(Delete, "/questions/levels/{id}");

pub const QUESTION_TYPES_CREATE: Endpoint = Endpoint::new(Post, "/questions/question-types");
pub const QUESTION_TYPES_LIST: Endpoint = Endpoint::new(Get, "/questions/question-types");
pub const QUESTION_TYPE_GET: Endpoint = Endpoint::new(Get, "/questions/question-types/{id}");
pub const QUESTION_TYPE_UPDATE: Endpoint = Endpoint::new(Put, "/questions/question-types/{id}");
pub const QUESTION_TYPE_DELETE: Endpoint =
    Endpoint::new(Delete, "/questions/question-types/{id}");

pub const QUESTIONS_CREATE: Endpoint = Endpoint::new(Post, "/questions/questions");
pub const QUESTIONS_LIST: Endpoint = Endpoint::new(Get, "/questions/questions");
pub const QUESTION_GET: Endpoint = Endpoint::new(Get, "/questions/questions/{id}");
pub const QUESTION_UPDATE: Endpoint = Endpoint::new(Put, "/questions/questions/{id}");
pub const QUESTION_DELETE: Endpoint = Endpoint::new(Delete, "/questions/questions/{id}");

// ===== Users =====
pub const USERS_LIST: Endpoint = Endpoint::new(Get, "/users");
pub const USER_GET: Endpoint = Endpoint::new(Get, "/users/{id}");
pub const USER_ROLE_UPDATE: Endpoint = Endpoint::new(Put, "/users/{id}/role");
pub const USER_STATUS_UPDATE: Endpoint = Endpoint::new(Put, "/users/{id}/status");

// ===== Exams =====
pub const EXAMS_CREATE: Endpoint = Endpoint::new(Post, "/exams");
pub const EXAMS_LIST: Endpoint = Endpoint::new(Get, "/exams");
pub const EXAM_GET: Endpoint = Endpoint::new(Get, "/exams/{id}");
pub const EXAM_UPDATE: Endpoint = Endpoint::new(Put, "/exams/{id}");
pub const EXAM_DELETE: Endpoint = Endpoint::new(Delete, "/exams/{id}");

// ===== News =====
pub const NEWS_CREATE: Endpoint = Endpoint::new(Post, "/news");
pub const NEWS_LIST: Endpoint = Endpoint::new(Get, "/news");
pub const NEWS_GET: Endpoint = Endpoint::new(Get, "/news/{id}");
pub const NEWS_UPDATE: Endpoint = Endpoint::new(Put, "/news/{id}");
pub const NEWS_DELETE: Endpoint = Endpoint::new(Delete, "/news/{id}");

// ===== Careers =====
pub const CAREERS_CREATE: Endpoint = Endpoint::new(Post, "/careers");
pub const CAREERS_LIST: Endpoint = Endpoint::new(Get, "/careers");
pub const CAREER_GET: Endpoint = Endpoint::new(Get, "/careers/{id}");

/// Every endpoint the client knows about
pub const CATALOG: &[Endpoint] = &[
    AUTH_REGISTER,
    AUTH_LOGIN,
    AUTH_USER_INFO,
    AUTH_REFRESH,
    AUTH_VERIFY,
    FIELDS_CREATE,
    FIELDS_LIST,
    FIELD_GET,
    FIELD_UPDATE,
    FIELD_DELETE,
    TOPICS_CREATE,
    TOPICS_LIST,
    TOPIC_GET,
    TOPIC_UPDATE,
    TOPIC_DELETE,
    LEVELS_CREATE,
    LEVELS_LIST,
    LEVEL_GET,
    LEVEL_UPDATE,
    LEVEL_DELETE,
    QUESTION_TYPES_CREATE,
    QUESTION_TYPES_LIST,
    QUESTION_TYPE_GET,
    QUESTION_TYPE_UPDATE,
    QUESTION_TYPE_DELETE,
    QUESTIONS_CREATE,
    QUESTIONS_LIST,
    QUESTION_GET,
    QUESTION_UPDATE,
    QUESTION_DELETE,
    USERS_LIST,
    USER_GET,
    USER_ROLE_UPDATE,
    USER_STATUS_UPDATE,
    EXAMS_CREATE,
    EXAMS_LIST,
    EXAM_GET,
    EXAM_UPDATE,
    EXAM_DELETE,
    NEWS_CREATE,
    NEWS_LIST,
    NEWS_GET,
    NEWS_UPDATE,
    NEWS_DELETE,
    CAREERS_CREATE,
    CAREERS_LIST,
    CAREER_GET,
];

/// Find the catalog entry for a concrete method and route.
pub fn lookup(method: HttpMethod, route: &str) -> Option<&'static Endpoint> {
    CATALOG.iter().find(|endpoint| endpoint.matches(method, route))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_issuing_endpoints() {
        let issuing: Vec<&str> = CATALOG
            .iter()
            .filter(|e| e.propagates_token)
            .map(|e| e.path)
            .collect();
        assert_eq!(
            issuing,
            vec!["/auth/register", "/auth/login", "/auth/refresh"]
        );
        assert!(!AUTH_VERIFY.propagates_token);
    }

    #[test]
    fn test_public_endpoints() {
        assert!(!AUTH_LOGIN.requires_auth);
        assert!(!AUTH_REGISTER.requires_auth);
        assert!(AUTH_USER_INFO.requires_auth);
        assert!(QUESTIONS_LIST.requires_auth);
    }

    #[test]
    fn test_path_rendering() {
        assert_eq!(QUESTION_GET.with_id(42), "/questions/questions/42");
        assert_eq!(USER_ROLE_UPDATE.with_id(5), "/users/5/role");
        assert_eq!(
            QUESTIONS_LIST.paged(PageRequest::default()),
            "/questions/questions?page=0&size=10"
        );
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup(Post, "/auth/login"), Some(&AUTH_LOGIN));
        assert_eq!(lookup(Get, "/users/5"), Some(&USER_GET));
        assert_eq!(lookup(Put, "/users/5/status"), Some(&USER_STATUS_UPDATE));
        assert_eq!(lookup(Get, "/news?page=1&size=5"), Some(&NEWS_LIST));
        assert_eq!(lookup(Get, "/auth/login"), None);
        assert_eq!(lookup(Get, "/users/"), None);
        assert_eq!(lookup(Get, "/unknown"), None);
    }

    #[test]
    fn test_method_conversion() {
        assert_eq!(reqwest::Method::from(Delete), reqwest::Method::DELETE);
        assert_eq!(Put.to_string(), "PUT");
    }
}
