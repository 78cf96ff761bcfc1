//! # 著者
//!
//! 著者エンティティとそれに関連する値オブジェクトを定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: [`AuthorId`] は UUID をラップし、型安全性を確保
//! - **不変性**: エンティティフィールドは不変、参照はゲッター経由
//! - **表示用仮想フィールド**: `name` と `lifespan` はフィールドではなく
//!   メソッドとして導出する（詳細ページや一覧表示で使用）
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use chrono::NaiveDate;
//! use zosho_domain::author::{Author, AuthorId, PersonName};
//!
//! let author = Author::new(
//!     AuthorId::new(),
//!     PersonName::new("John")?,
//!     PersonName::new("Doe")?,
//!     NaiveDate::from_ymd_opt(1990, 4, 1),
//!     NaiveDate::from_ymd_opt(2020, 12, 31),
//! )?;
//!
//! assert_eq!(author.name(), "Doe, John");
//! assert_eq!(author.lifespan(), "1990 - 2020");
//! # Ok(())
//! # }
//! ```

use chrono::NaiveDate;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::DomainError;

/// 著者 ID（一意識別子）
///
/// UUID v7 を使用し、生成順にソート可能。
/// Newtype パターンで型安全性を確保。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct AuthorId(Uuid);

impl AuthorId {
   /// 新しい著者 ID を生成する
   pub fn new() -> Self {
      Self(Uuid::now_v7())
   }

   /// 既存の UUID から著者 ID を作成する
   pub fn from_uuid(uuid: Uuid) -> Self {
      Self(uuid)
   }

   /// 内部の UUID 参照を取得する
   pub fn as_uuid(&self) -> &Uuid {
      &self.0
   }
}

impl Default for AuthorId {
   fn default() -> Self {
      Self::new()
   }
}

/// 人名（値オブジェクト）
///
/// 姓・名の両方に使用する。生成時にバリデーションを実行し、
/// 不正な値の作成を防ぐ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName(String);

impl PersonName {
   /// 最大文字数
   pub const MAX_LENGTH: usize = 100;

   /// 人名を作成する
   ///
   /// # バリデーション
   ///
   /// - 空文字列（空白のみを含む）ではない
   /// - 最大 100 文字
   ///
   /// # エラー
   ///
   /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
   pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
      let value = value.into();

      if value.trim().is_empty() {
         return Err(DomainError::Validation("人名は必須です".to_string()));
      }

      if value.chars().count() > Self::MAX_LENGTH {
         return Err(DomainError::Validation(format!(
            "人名は {} 文字以内である必要があります",
            Self::MAX_LENGTH
         )));
      }

      Ok(Self(value))
   }

   /// 文字列参照を取得する
   pub fn as_str(&self) -> &str {
      &self.0
   }
}

/// 著者エンティティ
///
/// 蔵書カタログに登録される著者ひとりを表す。
/// 生没年月日は不明な場合があるため `Option` で保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
   id:            AuthorId,
   first_name:    PersonName,
   family_name:   PersonName,
   date_of_birth: Option<NaiveDate>,
   date_of_death: Option<NaiveDate>,
}

impl Author {
   /// 新しい著者を作成する
   ///
   /// # エラー
   ///
   /// 没年月日が生年月日より前の場合は `DomainError::Validation` を返す。
   pub fn new(
      id: AuthorId,
      first_name: PersonName,
      family_name: PersonName,
      date_of_birth: Option<NaiveDate>,
      date_of_death: Option<NaiveDate>,
   ) -> Result<Self, DomainError> {
      let death_precedes_birth = date_of_birth
         .zip(date_of_death)
         .is_some_and(|(birth, death)| death < birth);
      if death_precedes_birth {
         return Err(DomainError::Validation(
            "没年月日は生年月日より後である必要があります".to_string(),
         ));
      }

      Ok(Self {
         id,
         first_name,
         family_name,
         date_of_birth,
         date_of_death,
      })
   }

   /// データベースの行から著者を復元する
   ///
   /// 永続化済みのデータは作成時に検証済みのため、再検証しない。
   pub fn from_db(
      id: AuthorId,
      first_name: PersonName,
      family_name: PersonName,
      date_of_birth: Option<NaiveDate>,
      date_of_death: Option<NaiveDate>,
   ) -> Self {
      Self {
         id,
         first_name,
         family_name,
         date_of_birth,
         date_of_death,
      }
   }

   pub fn id(&self) -> &AuthorId {
      &self.id
   }

   pub fn first_name(&self) -> &PersonName {
      &self.first_name
   }

   pub fn family_name(&self) -> &PersonName {
      &self.family_name
   }

   pub fn date_of_birth(&self) -> Option<NaiveDate> {
      self.date_of_birth
   }

   pub fn date_of_death(&self) -> Option<NaiveDate> {
      self.date_of_death
   }

   /// 表示用フルネーム（`"姓, 名"` 形式）
   pub fn name(&self) -> String {
      format!("{}, {}", self.family_name.as_str(), self.first_name.as_str())
   }

   /// 表示用生没年（`"1970 - 2020"` 形式）
   ///
   /// 不明な年は空文字列になる（例: 存命の著者は `"1970 - "`）。
   /// 両方不明な場合は空文字列を返す。
   pub fn lifespan(&self) -> String {
      if self.date_of_birth.is_none() && self.date_of_death.is_none() {
         return String::new();
      }

      let year = |date: Option<NaiveDate>| {
         date
            .map(|d| d.format("%Y").to_string())
            .unwrap_or_default()
      };

      format!("{} - {}", year(self.date_of_birth), year(self.date_of_death))
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   fn date(year: i32, month: u32, day: u32) -> NaiveDate {
      NaiveDate::from_ymd_opt(year, month, day).unwrap()
   }

   fn author(
      first: &str,
      family: &str,
      birth: Option<NaiveDate>,
      death: Option<NaiveDate>,
   ) -> Author {
      Author::new(
         AuthorId::new(),
         PersonName::new(first).unwrap(),
         PersonName::new(family).unwrap(),
         birth,
         death,
      )
      .unwrap()
   }

   // ===== PersonName =====

   #[rstest]
   #[case("山田")]
   #[case("John")]
   #[case("O'Brien")]
   fn test_有効な人名を作成できる(#[case] value: &str) {
      let name = PersonName::new(value).unwrap();
      assert_eq!(name.as_str(), value);
   }

   #[rstest]
   #[case("")]
   #[case("   ")]
   fn test_空の人名は拒否される(#[case] value: &str) {
      let result = PersonName::new(value);
      assert!(matches!(result, Err(DomainError::Validation(_))));
   }

   #[test]
   fn test_最大文字数を超える人名は拒否される() {
      let too_long = "あ".repeat(PersonName::MAX_LENGTH + 1);
      let result = PersonName::new(too_long);
      assert!(matches!(result, Err(DomainError::Validation(_))));
   }

   #[test]
   fn test_最大文字数ちょうどの人名は許可される() {
      let max = "あ".repeat(PersonName::MAX_LENGTH);
      assert!(PersonName::new(max).is_ok());
   }

   // ===== Author =====

   #[test]
   fn test_没年月日が生年月日より前の場合は拒否される() {
      let result = Author::new(
         AuthorId::new(),
         PersonName::new("John").unwrap(),
         PersonName::new("Doe").unwrap(),
         Some(date(2000, 1, 1)),
         Some(date(1990, 1, 1)),
      );
      assert!(matches!(result, Err(DomainError::Validation(_))));
   }

   #[test]
   fn test_表示名は姓カンマ名の形式になる() {
      let sut = author("Alice", "Williams", None, None);
      assert_eq!(sut.name(), "Williams, Alice");
   }

   #[rstest]
   #[case(Some(date(1970, 6, 15)), Some(date(2020, 1, 1)), "1970 - 2020")]
   #[case(Some(date(1970, 6, 15)), None, "1970 - ")]
   #[case(None, Some(date(2020, 1, 1)), " - 2020")]
   #[case(None, None, "")]
   fn test_生没年の表示形式(
      #[case] birth: Option<NaiveDate>,
      #[case] death: Option<NaiveDate>,
      #[case] expected: &str,
   ) {
      let sut = author("Jane", "Smith", birth, death);
      assert_eq!(sut.lifespan(), expected);
   }

   #[test]
   fn test_from_dbは生没年の順序を検証しない() {
      // 既存データの復元はバリデーションを通さない
      let sut = Author::from_db(
         AuthorId::new(),
         PersonName::new("John").unwrap(),
         PersonName::new("Doe").unwrap(),
         Some(date(2000, 1, 1)),
         Some(date(1990, 1, 1)),
      );
      assert_eq!(sut.lifespan(), "2000 - 1990");
   }
}
