//! レシピレコードのドメイン型
//!
//! 保存形式のフィールド名はブラウザ版（localStorage の `my-recipes`）と同じにしてあり、
//! エクスポートした値をそのまま取り込める。

use common::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// レシピ ID（作成時刻ミリ秒から採番。コレクション内で一意）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(u64);

impl RecipeId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// 数値として比較するため "007" や "7.0" も 7 として受け付ける
impl FromStr for RecipeId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(v) = s.parse::<u64>() {
            return Ok(Self(v));
        }
        match s.parse::<f64>() {
            Ok(v) if v >= 0.0 && v.fract() == 0.0 && v <= u64::MAX as f64 => Ok(Self(v as u64)),
            _ => Err(Error::invalid_argument(format!("Invalid recipe id: '{}'", s))),
        }
    }
}

/// 保存済みレシピ
///
/// テキスト項目は必須、画像のみ任意。材料と手順は改行区切りの 1 文字列で持つ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub short_desc: String,
    pub ingredients: String,
    /// 作り方（保存形式では `desc`）
    #[serde(rename = "desc")]
    pub steps: String,
    /// 静的パス・URL・data URI のいずれか
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Recipe {
    /// 材料を行ごとに分割する（空なら空リスト）
    pub fn ingredient_list(&self) -> Vec<&str> {
        split_lines(&self.ingredients)
    }

    /// 作り方を行ごとに分割する（空なら空リスト）
    pub fn step_list(&self) -> Vec<&str> {
        split_lines(&self.steps)
    }
}

fn split_lines(s: &str) -> Vec<&str> {
    if s.is_empty() {
        Vec::new()
    } else {
        s.split('\n').collect()
    }
}

/// 追加前のレシピ（ID 未採番）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewRecipe {
    pub title: String,
    pub short_desc: String,
    pub ingredients: String,
    pub steps: String,
    pub image: Option<String>,
}

/// 入力検証エラー（ドメイン層）
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecipeValidationError {
    #[error("Please fill in every field (missing: {0})")]
    MissingField(&'static str),
}

impl From<RecipeValidationError> for Error {
    fn from(e: RecipeValidationError) -> Self {
        Error::validation(e.to_string())
    }
}

impl NewRecipe {
    /// 必須項目（タイトル・概要・材料・作り方）が空でないことだけを確認する
    pub fn validate(&self) -> Result<(), RecipeValidationError> {
        let required = [
            ("title", &self.title),
            ("short description", &self.short_desc),
            ("ingredients", &self.ingredients),
            ("steps", &self.steps),
        ];
        for (name, value) in required {
            if value.is_empty() {
                return Err(RecipeValidationError::MissingField(name));
            }
        }
        Ok(())
    }

    /// ID を与えて保存用レコードにする。画像未指定時は既定画像を使う。
    pub fn into_recipe(self, id: RecipeId) -> Recipe {
        Recipe {
            id,
            title: self.title,
            short_desc: self.short_desc,
            ingredients: self.ingredients,
            steps: self.steps,
            image: Some(
                self.image
                    .unwrap_or_else(|| super::defaults::DEFAULT_IMAGE.to_string()),
            ),
        }
    }
}
