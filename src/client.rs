use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use url::Url;
use urlencoding::encode;

use crate::{
    error::{AdminResult, Error, HttpError},
    model::{
        promotion::{Promotion, PromotionBody},
        service_info::ServiceInfo,
    },
    request::{ApiRequest, ApiResponse, Method, SearchQuery, Transport, UreqTransport},
    util::error_message,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 促销活动集合的路径
pub const COLLECTION: &str = "/promotions";

/// 客户端配置
#[derive(Debug, Clone)]
pub struct PromotionClientConfig {
    /// 服务地址，如 `http://localhost:8080`
    base_url: String,
    /// 请求超时，None 表示不设置
    timeout: Option<Duration>,
    user_agent: String,
}

impl PromotionClientConfig {
    pub fn builder<S: Into<String>>(base_url: S) -> PromotionClientConfigBuilder {
        PromotionClientConfigBuilder::new(base_url.into())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[derive(Default)]
pub struct PromotionClientConfigBuilder {
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl PromotionClientConfigBuilder {
    pub fn new(base_url: String) -> Self {
        PromotionClientConfigBuilder {
            base_url,
            timeout: Default::default(),
            user_agent: Default::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    pub fn build(self) -> AdminResult<PromotionClientConfig> {
        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            return Err(Error::Config("base url 不能为空".to_owned()));
        }

        let parsed = Url::parse(base_url)?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(Error::Config(format!(
                "不支持的协议: {}",
                parsed.scheme()
            )));
        }

        Ok(PromotionClientConfig {
            base_url: base_url.trim_end_matches('/').to_owned(),
            timeout: self.timeout,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| format!("promotion_admin/{}", VERSION)),
        })
    }
}

/// 创建成功的结果，`location` 取自 201 响应的 Location 头
#[derive(Debug, Clone, PartialEq)]
pub struct Created {
    promotion: Promotion,
    location: Option<String>,
}

impl Created {
    pub fn promotion(&self) -> &Promotion {
        &self.promotion
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

/// Promotions REST 服务的客户端
pub struct PromotionClient<T = UreqTransport> {
    config: PromotionClientConfig,
    transport: T,
}

impl PromotionClient<UreqTransport> {
    pub fn new(config: PromotionClientConfig) -> Self {
        let transport = UreqTransport::new(config.base_url(), config.timeout(), config.user_agent());
        Self { config, transport }
    }
}

impl<T: Transport> PromotionClient<T> {
    pub fn with_transport(config: PromotionClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &PromotionClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn item_path(id: &str) -> String {
        format!("{}/{}", COLLECTION, encode(id))
    }

    /// 发送请求，非 2xx 转为 `Error::Http`
    fn exec(&self, request: ApiRequest) -> AdminResult<ApiResponse> {
        let resp = self.transport.send(&request)?;

        if !resp.is_success() {
            let message = error_message(&resp.body);
            debug!(
                "{} {} 返回 {}: {}",
                request.method().as_str(),
                request.path(),
                resp.status,
                message.as_deref().unwrap_or(&resp.body)
            );
            return Err(Error::Http(HttpError::new(resp.status, message, &resp.body)));
        }

        Ok(resp)
    }

    fn exec_json<R: DeserializeOwned>(&self, request: ApiRequest) -> AdminResult<R> {
        let resp = self.exec(request)?;
        Ok(serde_json::from_str(&resp.body)?)
    }

    fn with_json<B: Serialize>(request: ApiRequest, body: &B) -> AdminResult<ApiRequest> {
        let body = serde_json::to_string(body)?;
        debug!("request payload: {}", body);
        Ok(request.with_body(body))
    }

    /// 服务信息
    pub fn index(&self) -> AdminResult<ServiceInfo> {
        self.exec_json(ApiRequest::new(Method::GET, "/"))
    }

    pub fn create(&self, body: &PromotionBody) -> AdminResult<Created> {
        let request = Self::with_json(ApiRequest::new(Method::POST, COLLECTION), body)?;
        let resp = self.exec(request)?;
        let promotion: Promotion = serde_json::from_str(&resp.body)?;

        info!("Promotion with ID [{}] created.", promotion.get_id());

        Ok(Created {
            promotion,
            location: resp.location,
        })
    }

    pub fn update(&self, id: &str, body: &PromotionBody) -> AdminResult<Promotion> {
        let request = Self::with_json(ApiRequest::new(Method::PUT, Self::item_path(id)), body)?;
        let promotion = self.exec_json(request)?;
        info!("Promotion with ID [{}] updated.", id);
        Ok(promotion)
    }

    pub fn get(&self, id: &str) -> AdminResult<Promotion> {
        self.exec_json(ApiRequest::new(Method::GET, Self::item_path(id)))
    }

    /// 删除。服务端对不存在的 id 同样返回 204
    pub fn delete(&self, id: &str) -> AdminResult<()> {
        self.exec(ApiRequest::new(Method::DELETE, Self::item_path(id)))?;
        info!("Promotion with ID [{}] delete complete.", id);
        Ok(())
    }

    pub fn list(&self, query: &SearchQuery) -> AdminResult<Vec<Promotion>> {
        let promotions: Vec<Promotion> =
            self.exec_json(ApiRequest::new(Method::GET, query.to_path(COLLECTION)))?;
        debug!("found {} promotions", promotions.len());
        Ok(promotions)
    }

    /// 删除全部已有的促销活动，再按顺序创建 `bodies`
    pub fn reset_with(&self, bodies: &[PromotionBody]) -> AdminResult<Vec<Created>> {
        let existing = self.list(&SearchQuery::new())?;
        for promotion in existing.iter() {
            self.delete(promotion.get_id())?;
        }
        info!("removed {} promotions", existing.len());

        bodies.iter().map(|body| self.create(body)).collect()
    }
}
