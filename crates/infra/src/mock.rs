//! # テスト用モックリポジトリ
//!
//! ハンドラテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! zosho-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use zosho_domain::author::Author;

use crate::{
   error::InfraError,
   repository::{AuthorRepository, AuthorSortSpec, SortOrder},
};

/// インメモリの著者リポジトリモック
///
/// PostgreSQL 実装と同じく、ソートはリポジトリ側で行う。
/// 受け取ったソート指定をすべて記録するため、呼び出し側が
/// 期待どおりの指定を渡したかを検証できる。
#[derive(Clone, Default)]
pub struct MockAuthorRepository {
   authors:        Arc<Mutex<Vec<Author>>>,
   fail_with:      Arc<Mutex<Option<String>>>,
   recorded_sorts: Arc<Mutex<Vec<AuthorSortSpec>>>,
}

impl MockAuthorRepository {
   pub fn new() -> Self {
      Self::default()
   }

   /// 著者を追加する
   pub fn add_author(&self, author: Author) {
      self.authors.lock().unwrap().push(author);
   }

   /// 以降の呼び出しを失敗させる
   pub fn fail_with(&self, message: impl Into<String>) {
      *self.fail_with.lock().unwrap() = Some(message.into());
   }

   /// `find_all` が受け取ったソート指定の履歴
   pub fn recorded_sorts(&self) -> Vec<AuthorSortSpec> {
      self.recorded_sorts.lock().unwrap().clone()
   }
}

#[async_trait]
impl AuthorRepository for MockAuthorRepository {
   async fn find_all(&self, sort: AuthorSortSpec) -> Result<Vec<Author>, InfraError> {
      self.recorded_sorts.lock().unwrap().push(sort);

      if let Some(message) = self.fail_with.lock().unwrap().clone() {
         return Err(InfraError::unexpected(message));
      }

      let mut authors = self.authors.lock().unwrap().clone();
      match sort.family_name {
         SortOrder::Ascending => {
            authors.sort_by(|a, b| a.family_name().as_str().cmp(b.family_name().as_str()));
         }
      }

      Ok(authors)
   }
}
