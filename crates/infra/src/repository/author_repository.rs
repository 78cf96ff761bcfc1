//! # AuthorRepository
//!
//! 著者情報の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **ソートはリポジトリの責務**: 呼び出し側はソート指定
//!   （[`AuthorSortSpec`]）を渡すだけで、並び替え自体は SQL の
//!   `ORDER BY` に委譲する
//! - **テスタビリティ**: トレイト経由でモック可能な設計

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;
use zosho_domain::author::{Author, AuthorId, PersonName};

use crate::error::InfraError;

/// ソート順
///
/// 著者一覧が必要とするのは昇順のみのため、降順は定義しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
   Ascending,
}

impl SortOrder {
   /// SQL の `ORDER BY` 句に埋め込むキーワードを返す
   fn as_sql(self) -> &'static str {
      match self {
         Self::Ascending => "ASC",
      }
   }
}

/// 著者一覧のソート指定
///
/// 呼び出し側がどのフィールドをどの順序で並べるかを宣言する。
/// 現時点でソートキーは姓（family_name）の昇順のみ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorSortSpec {
   pub family_name: SortOrder,
}

impl AuthorSortSpec {
   /// 姓の昇順ソート（著者一覧のデフォルト）
   pub fn family_name_ascending() -> Self {
      Self {
         family_name: SortOrder::Ascending,
      }
   }
}

/// 著者リポジトリトレイト
///
/// 著者情報の取得操作を定義する。
/// インフラ層で具体的な実装を提供し、ハンドラ層から利用する。
#[async_trait]
pub trait AuthorRepository: Send + Sync {
   /// すべての著者を取得する
   ///
   /// # 引数
   ///
   /// - `sort`: ソート指定。並び替えはリポジトリが行い、
   ///   呼び出し側は返された順序をそのまま使用する
   ///
   /// # 戻り値
   ///
   /// - `Ok(authors)`: 0 件以上の著者（指定された順序）
   /// - `Err(_)`: データベースエラー
   async fn find_all(&self, sort: AuthorSortSpec) -> Result<Vec<Author>, InfraError>;
}

/// `authors` テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct AuthorRow {
   id:            Uuid,
   first_name:    String,
   family_name:   String,
   date_of_birth: Option<NaiveDate>,
   date_of_death: Option<NaiveDate>,
}

impl AuthorRow {
   /// 行をドメインエンティティに変換する
   ///
   /// 永続化データがドメインの制約を満たさない場合は
   /// `InfraError::Unexpected` を返す。
   fn into_author(self) -> Result<Author, InfraError> {
      let first_name =
         PersonName::new(self.first_name).map_err(|e| InfraError::unexpected(e.to_string()))?;
      let family_name =
         PersonName::new(self.family_name).map_err(|e| InfraError::unexpected(e.to_string()))?;

      Ok(Author::from_db(
         AuthorId::from_uuid(self.id),
         first_name,
         family_name,
         self.date_of_birth,
         self.date_of_death,
      ))
   }
}

/// PostgreSQL 実装の AuthorRepository
#[derive(Debug, Clone)]
pub struct PostgresAuthorRepository {
   pool: PgPool,
}

impl PostgresAuthorRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
   async fn find_all(&self, sort: AuthorSortSpec) -> Result<Vec<Author>, InfraError> {
      // ORDER BY 句にバインド変数は使えないため、検証済みの
      // 静的キーワードのみを埋め込む
      let query = format!(
         r#"
            SELECT
                id,
                first_name,
                family_name,
                date_of_birth,
                date_of_death
            FROM authors
            ORDER BY family_name {}
            "#,
         sort.family_name.as_sql()
      );

      let rows: Vec<AuthorRow> = sqlx::query_as(&query).fetch_all(&self.pool).await?;

      rows.into_iter().map(AuthorRow::into_author).collect()
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_ソート順がsqlキーワードに変換される() {
      assert_eq!(SortOrder::Ascending.as_sql(), "ASC");
   }

   #[test]
   fn test_デフォルトのソート指定は姓の昇順() {
      let spec = AuthorSortSpec::family_name_ascending();
      assert_eq!(spec.family_name, SortOrder::Ascending);
   }

   #[test]
   fn test_不正な行はinto_authorで拒否される() {
      let row = AuthorRow {
         id:            Uuid::now_v7(),
         first_name:    String::new(),
         family_name:   "Doe".to_string(),
         date_of_birth: None,
         date_of_death: None,
      };
      assert!(row.into_author().is_err());
   }
}
