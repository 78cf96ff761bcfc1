//! # リポジトリ実装
//!
//! リポジトリトレイトとその具体的な実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: トレイトを定義し、PostgreSQL 実装を分離
//! - **データベース抽象化**: sqlx を使用し、PostgreSQL 固有の処理をカプセル化
//! - **テスタビリティ**: トレイト経由でモック可能な設計

pub mod author_repository;

pub use author_repository::{
   AuthorRepository,
   AuthorSortSpec,
   PostgresAuthorRepository,
   SortOrder,
};
