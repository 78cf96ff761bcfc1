//! # 著者ハンドラ
//!
//! 著者一覧 API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /authors` - 著者一覧（姓の昇順）
//!
//! ## レスポンス
//!
//! | 状況 | ステータス | ボディ |
//! |------|-----------|--------|
//! | 1 件以上 | 200 | 著者の JSON 配列（リポジトリが返した順序のまま） |
//! | 0 件 | 200 | プレーンテキスト `No authors found` |
//! | 取得失敗 | 500 | プレーンテキスト `Internal Server Error` |

use std::sync::Arc;

use axum::{
   Json,
   extract::State,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use zosho_domain::author::Author;
use zosho_infra::repository::{AuthorRepository, AuthorSortSpec};

use crate::error::ApiError;

/// 著者 API の共有状態
pub struct AuthorState {
   pub author_repository: Arc<dyn AuthorRepository>,
}

/// 著者一覧の要素 DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorDto {
   /// 表示名（`"姓, 名"` 形式）
   pub name:     String,
   /// 生没年（`"1970 - 2020"` 形式）
   pub lifespan: String,
}

impl From<&Author> for AuthorDto {
   fn from(author: &Author) -> Self {
      Self {
         name:     author.name(),
         lifespan: author.lifespan(),
      }
   }
}

/// GET /authors
///
/// すべての著者を姓の昇順で取得する。
/// 並び替えはリポジトリの責務であり、ハンドラは返された順序を
/// そのままレスポンスに反映する。
pub async fn list_authors(
   State(state): State<Arc<AuthorState>>,
) -> Result<Response, ApiError> {
   let authors = state
      .author_repository
      .find_all(AuthorSortSpec::family_name_ascending())
      .await?;

   if authors.is_empty() {
      return Ok((StatusCode::OK, "No authors found").into_response());
   }

   let items: Vec<AuthorDto> = authors.iter().map(AuthorDto::from).collect();
   Ok((StatusCode::OK, Json(items)).into_response())
}
