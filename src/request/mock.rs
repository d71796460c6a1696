use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::{AdminResult, Error};

use super::{ApiRequest, ApiResponse, Transport};

/// 按顺序返回预设响应，并记录收到的请求
#[derive(Default)]
pub(crate) struct MockTransport {
    responses: RefCell<VecDeque<AdminResult<ApiResponse>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        MockTransport::default()
    }

    pub(crate) fn respond(self, status: u16, body: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub(crate) fn respond_with(self, response: ApiResponse) -> Self {
        self.responses.borrow_mut().push_back(Ok(response));
        self
    }

    pub(crate) fn fail(self, error: Error) -> Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &ApiRequest) -> AdminResult<ApiResponse> {
        self.requests.borrow_mut().push(request.clone());
        match self.responses.borrow_mut().pop_front() {
            Some(response) => response,
            None => Err(Error::Params(format!(
                "no canned response for {} {}",
                request.method().as_str(),
                request.path()
            ))),
        }
    }
}
