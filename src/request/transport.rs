use std::time::Duration;

use crate::error::AdminResult;

use super::{ApiRequest, ApiResponse};

/// 负责把请求真正发出去。客户端只依赖这个 trait。
pub trait Transport {
    fn send(&self, request: &ApiRequest) -> AdminResult<ApiResponse>;
}

/// 基于 ureq 的同步 HTTP 实现
pub struct UreqTransport {
    agent: ureq::Agent,
    base_url: String,
}

impl UreqTransport {
    pub fn new(base_url: &str, timeout: Option<Duration>, user_agent: &str) -> Self {
        let mut builder = ureq::AgentBuilder::new().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Self {
            agent: builder.build(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: &ApiRequest) -> AdminResult<ApiResponse> {
        let url = format!("{}{}", self.base_url, request.path());
        debug!("{} {}", request.method().as_str(), url);

        let req = self
            .agent
            .request(request.method().as_str(), &url)
            .set("Content-Type", "application/json");

        let result = match request.body() {
            Some(body) => {
                trace!("request body: {}", body);
                req.send_string(body)
            }
            None => req.call(),
        };

        // 4xx/5xx 交给客户端处理，这里只把传输层错误往上抛
        let resp = match result {
            Ok(resp) => resp,
            Err(ureq::Error::Status(_, resp)) => resp,
            Err(e) => {
                debug!("请求 {} 失败: {}", url, e);
                return Err(e.into());
            }
        };

        let status = resp.status();
        let location = resp.header("Location").map(|l| l.to_owned());
        let body = resp.into_string()?;
        debug!("{} {} -> {}", request.method().as_str(), url, status);
        trace!("response body: {}", body);

        Ok(ApiResponse {
            status,
            body,
            location,
        })
    }
}

