use urlencoding::encode;

/// 列表接口的过滤条件
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    name: Option<String>,
    active: bool,
}

impl SearchQuery {
    pub fn new() -> Self {
        SearchQuery::default()
    }

    /// 空字符串视为不过滤
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        let name = name.into();
        self.name = if name.is_empty() { None } else { Some(name) };
        self
    }

    /// 只能筛选“有效”的活动，false 不会出现在查询串里
    pub fn only_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn to_query_string(&self) -> String {
        let mut query = Vec::with_capacity(2);
        if let Some(name) = &self.name {
            query.push(format!("name={}", encode(name)));
        }
        if self.active {
            query.push("active=true".to_owned());
        }
        query.join("&")
    }

    /// 带查询串的列表路径，没有条件时就是 `/promotions`
    pub fn to_path(&self, collection: &str) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            collection.to_owned()
        } else {
            format!("{}?{}", collection, query)
        }
    }
}
