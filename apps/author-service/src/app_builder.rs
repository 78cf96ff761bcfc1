//! # Author Service アプリケーション構築
//!
//! State の注入とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handler::{AuthorState, health_check, list_authors};

/// アプリケーションのルーターを構築する
///
/// `main.rs` と統合テストの両方から使用する。
pub fn build_app(author_state: Arc<AuthorState>) -> Router {
   Router::new()
      .route("/health", get(health_check))
      .route("/authors", get(list_authors))
      .with_state(author_state)
      .layer(TraceLayer::new_for_http())
}
