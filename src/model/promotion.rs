use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::util::value_to_string;

/// 服务端返回的促销活动。
///
/// 服务端把 id 序列化为整数 `id`，旧页面读取的是 `_id`，两者都接受，统一保存为字符串。
/// 日期格式为 `YYYY-MM-DD`，客户端不做解析。
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Promotion {
    #[serde(alias = "_id", default, deserialize_with = "opaque_id")]
    id: String,
    name: String,
    #[serde(default)]
    starts_at: String,
    #[serde(default)]
    ends_at: String,
    #[serde(default, deserialize_with = "nullable_flag")]
    active: bool,
}

/// 数据库里 active 列可以为空，null 按 false 处理
fn nullable_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        v => value_to_string(&v),
    })
}

impl Promotion {
    pub fn new<S: Into<String>>(id: S, name: S, starts_at: S, ends_at: S, active: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            starts_at: starts_at.into(),
            ends_at: ends_at.into(),
            active,
        }
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_starts_at(&self) -> &str {
        &self.starts_at
    }

    pub fn get_ends_at(&self) -> &str {
        &self.ends_at
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// 创建、更新时提交的请求体
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PromotionBody {
    name: String,
    starts_at: String,
    ends_at: String,
    active: bool,
}

impl PromotionBody {
    pub fn new() -> Self {
        PromotionBody::default()
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    pub fn get_starts_at(&self) -> &str {
        &self.starts_at
    }

    pub fn set_starts_at<S: Into<String>>(&mut self, starts_at: S) {
        self.starts_at = starts_at.into();
    }

    pub fn get_ends_at(&self) -> &str {
        &self.ends_at
    }

    pub fn set_ends_at<S: Into<String>>(&mut self, ends_at: S) {
        self.ends_at = ends_at.into();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
