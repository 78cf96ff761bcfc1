//! # Author Service サーバー
//!
//! 蔵書カタログの著者一覧 API を提供するサービス。
//!
//! ## エンドポイント
//!
//! - `GET /health` - ヘルスチェック
//! - `GET /authors` - 著者一覧（姓の昇順）
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `AUTHOR_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `AUTHOR_PORT` | **Yes** | ポート番号 |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p zosho-author-service
//!
//! # 本番環境
//! AUTHOR_PORT=3001 DATABASE_URL=postgres://... cargo run -p zosho-author-service --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zosho_author_service::{app_builder::build_app, config::AppConfig, handler::AuthorState};
use zosho_infra::{db, repository::PostgresAuthorRepository};

/// Author Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化
   tracing_subscriber::registry()
      .with(
         tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,zosho=debug".into()),
      )
      .with(tracing_subscriber::fmt::layer())
      .init();

   // 設定読み込み
   let config = AppConfig::from_env().expect("設定の読み込みに失敗しました");

   tracing::info!(
      "Author Service サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   // データベース接続プールを作成
   let pool = db::create_pool(&config.database_url)
      .await
      .expect("データベース接続に失敗しました");
   tracing::info!("データベースに接続しました");

   // マイグレーション適用
   db::run_migrations(&pool)
      .await
      .expect("マイグレーションの適用に失敗しました");

   // 依存コンポーネントを初期化
   let author_repository = PostgresAuthorRepository::new(pool);
   let author_state = Arc::new(AuthorState {
      author_repository: Arc::new(author_repository),
   });

   // ルーター構築
   let app = build_app(author_state);

   // サーバー起動
   let addr: SocketAddr = format!("{}:{}", config.host, config.port)
      .parse()
      .expect("アドレスのパースに失敗しました");

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("Author Service サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
