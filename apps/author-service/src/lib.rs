//! # Author Service ライブラリ
//!
//! Author Service のハンドラとルーター構築を公開する。
//! 統合テストから内部モジュールへのアクセスを提供する。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
