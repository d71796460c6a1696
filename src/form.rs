use std::{fmt, str::FromStr};

use crate::{
    error::Error,
    model::promotion::{Promotion, PromotionBody},
};

/// 表单里可编辑的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
    StartsAt,
    EndsAt,
    Active,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Id,
        Field::Name,
        Field::StartsAt,
        Field::EndsAt,
        Field::Active,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::StartsAt => "starts_at",
            Field::EndsAt => "ends_at",
            Field::Active => "active",
        }
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        let name = name.strip_prefix("promotion_").unwrap_or(&name);
        match name {
            "id" | "_id" => Ok(Field::Id),
            "name" => Ok(Field::Name),
            "starts_at" => Ok(Field::StartsAt),
            "ends_at" => Ok(Field::EndsAt),
            "active" => Ok(Field::Active),
            _ => Err(Error::Params(format!("unknown field: {}", s))),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 促销活动表单。
///
/// 字段值和页面输入框一样都是字符串，`active` 取值为 `"true"`、`"false"` 或空。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromotionForm {
    id: String,
    name: String,
    starts_at: String,
    ends_at: String,
    active: String,
    flash: String,
    search_results: String,
}

impl PromotionForm {
    pub fn new() -> Self {
        PromotionForm::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Id => &self.id,
            Field::Name => &self.name,
            Field::StartsAt => &self.starts_at,
            Field::EndsAt => &self.ends_at,
            Field::Active => &self.active,
        }
    }

    pub fn set<S: Into<String>>(&mut self, field: Field, value: S) {
        let value = value.into();
        match field {
            Field::Id => self.id = value,
            Field::Name => self.name = value,
            Field::StartsAt => self.starts_at = value,
            Field::EndsAt => self.ends_at = value,
            Field::Active => self.active = value,
        }
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn set_id<S: Into<String>>(&mut self, id: S) {
        self.id = id.into();
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    pub fn set_starts_at<S: Into<String>>(&mut self, starts_at: S) {
        self.starts_at = starts_at.into();
    }

    pub fn set_ends_at<S: Into<String>>(&mut self, ends_at: S) {
        self.ends_at = ends_at.into();
    }

    pub fn set_active<S: Into<String>>(&mut self, active: S) {
        self.active = active.into();
    }

    /// 只有 `"true"` 算作有效
    pub fn is_active(&self) -> bool {
        self.active == "true"
    }

    pub fn flash_message(&self) -> &str {
        &self.flash
    }

    pub fn search_results(&self) -> &str {
        &self.search_results
    }

    /// 用响应数据填充表单
    pub fn update_from(&mut self, promotion: &Promotion) {
        self.id = promotion.get_id().to_owned();
        self.name = promotion.get_name().to_owned();
        self.starts_at = promotion.get_starts_at().to_owned();
        self.ends_at = promotion.get_ends_at().to_owned();
        self.active = promotion.is_active().to_string();
    }

    /// 清空可编辑字段，保留 id
    pub fn clear_fields(&mut self) {
        self.name.clear();
        self.starts_at.clear();
        self.ends_at.clear();
        self.active.clear();
    }

    /// 清空 id 和可编辑字段
    pub fn clear_record(&mut self) {
        self.id.clear();
        self.clear_fields();
    }

    pub fn flash<S: Into<String>>(&mut self, message: S) {
        self.flash = message.into();
    }

    pub fn clear_flash(&mut self) {
        self.flash.clear();
    }

    pub(crate) fn set_search_results(&mut self, html: String) {
        self.search_results = html;
    }

    pub fn to_body(&self) -> PromotionBody {
        let mut body = PromotionBody::new();
        body.set_name(self.name.as_str());
        body.set_starts_at(self.starts_at.as_str());
        body.set_ends_at(self.ends_at.as_str());
        body.set_active(self.is_active());
        body
    }
}
