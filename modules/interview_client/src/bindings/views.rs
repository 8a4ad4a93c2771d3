//! Ready-made collections bound to a service trait
//!
//! Each view pairs a [`Collection`] with the service calls that keep it
//! current. Callers read state through [`std::ops::Deref`] to the
//! collection (`snapshot`, `subscribe`, `updates`, `set_page`).

use super::collection::Collection;
use crate::contract::{
    ApiError, Field, FieldRequest, Level, LevelRequest, Page, PageRequest, Question, QuestionApi,
    QuestionRequest, QuestionType, QuestionTypeRequest, Topic, TopicRequest, User, UserApi,
};
use std::ops::Deref;
use std::sync::Arc;

/// Question bank with full create / update / delete support
pub struct QuestionsView {
    api: Arc<dyn QuestionApi>,
    items: Collection<Question>,
}

impl QuestionsView {
    pub fn new(api: Arc<dyn QuestionApi>, page: PageRequest) -> Self {
        Self {
            api,
            items: Collection::new(page),
        }
    }

    pub async fn fetch(&self) -> Result<Page<Question>, ApiError> {
        self.items
            .refresh(|page| self.api.list_questions(page))
            .await
    }

    pub async fn create(&self, request: QuestionRequest) -> Result<Question, ApiError> {
        self.items.insert(self.api.create_question(request)).await
    }

    pub async fn update(&self, id: i64, request: QuestionRequest) -> Result<Question, ApiError> {
        self.items
            .replace(self.api.update_question(id, request))
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.items.remove(id, self.api.delete_question(id)).await
    }
}

impl Deref for QuestionsView {
    type Target = Collection<Question>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

/// User administration list
pub struct UsersView {
    api: Arc<dyn UserApi>,
    items: Collection<User>,
}

impl UsersView {
    pub fn new(api: Arc<dyn UserApi>, page: PageRequest) -> Self {
        Self {
            api,
            items: Collection::new(page),
        }
    }

    pub async fn fetch(&self) -> Result<Page<User>, ApiError> {
        self.items.refresh(|page| self.api.list_users(page)).await
    }

    pub async fn update_role(&self, id: i64, role_id: i64) -> Result<User, ApiError> {
        self.items
            .replace(self.api.update_user_role(id, role_id))
            .await
    }

    pub async fn update_status(&self, id: i64, status: &str) -> Result<User, ApiError> {
        self.items
            .replace(self.api.update_user_status(id, status))
            .await
    }
}

impl Deref for UsersView {
    type Target = Collection<User>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

/// Taxonomy lists only need listing and creation.
macro_rules! taxonomy_view {
    ($(#[$meta:meta])* $view:ident, $item:ty, $request:ty, $list:ident, $create:ident) => {
        $(#[$meta])*
        pub struct $view {
            api: Arc<dyn QuestionApi>,
            items: Collection<$item>,
        }

        impl $view {
            pub fn new(api: Arc<dyn QuestionApi>, page: PageRequest) -> Self {
                Self {
                    api,
                    items: Collection::new(page),
                }
            }

            pub async fn fetch(&self) -> Result<Page<$item>, ApiError> {
                self.items.refresh(|page| self.api.$list(page)).await
            }

            pub async fn create(&self, request: $request) -> Result<$item, ApiError> {
                self.items.insert(self.api.$create(request)).await
            }
        }

        impl Deref for $view {
            type Target = Collection<$item>;

            fn deref(&self) -> &Self::Target {
                &self.items
            }
        }
    };
}

taxonomy_view!(
    /// Knowledge fields
    FieldsView, Field, FieldRequest, list_fields, create_field
);
taxonomy_view!(
    /// Topics within fields
    TopicsView, Topic, TopicRequest, list_topics, create_topic
);
taxonomy_view!(
    /// Difficulty levels
    LevelsView, Level, LevelRequest, list_levels, create_level
);
taxonomy_view!(
    QuestionTypesView,
    QuestionType,
    QuestionTypeRequest,
    list_question_types,
    create_question_type
);
