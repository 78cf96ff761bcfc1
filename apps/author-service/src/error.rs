//! # Author Service エラー定義
//!
//! Author Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## 設計方針
//!
//! データ取得の失敗はすべて同一の 500 レスポンスに変換する。
//! エラーの詳細はエラーログに出力し、レスポンスボディには含めない。

use axum::{
   http::StatusCode,
   response::{IntoResponse, Response},
};
use thiserror::Error;

/// Author Service で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// データアクセスエラー
   #[error("データアクセスエラー: {0}")]
   DataAccess(#[from] zosho_infra::InfraError),
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      match &self {
         ApiError::DataAccess(e) => {
            tracing::error!("データアクセスエラー: {}", e);
         }
      }

      // エラー詳細はレスポンスに含めない
      (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
   }
}
