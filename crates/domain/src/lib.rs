//! # Zosho ドメイン層
//!
//! 蔵書カタログのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: ID や名前は専用の型でラップし、型安全性を確保
//! - **生成時バリデーション**: 値オブジェクトは不正な値の作成自体を防ぐ
//! - **インフラ非依存**: このクレートはデータベースや HTTP に依存しない
//!
//! ## モジュール構成
//!
//! - [`author`] - 著者エンティティと値オブジェクト
//! - [`error`] - ドメイン層エラー定義

pub mod author;
pub mod error;

pub use error::DomainError;
