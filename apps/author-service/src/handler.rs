//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、データ取得はリポジトリに委譲

pub mod author;
pub mod health;

pub use author::{AuthorDto, AuthorState, list_authors};
pub use health::health_check;
