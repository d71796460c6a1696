use serde::{Deserialize, Serialize};

/// `GET /` 返回的服务信息
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    /// 列表接口的完整地址
    #[serde(default)]
    pub paths: Option<String>,
}
