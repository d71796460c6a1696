//! 表单控制器：每个按钮对应一个方法，请求结果写回表单。
//!
//! 每个操作只发一次请求，没有重试，也不做去重；失败时优先显示服务端返回的 `message`。

use std::{fmt, str::FromStr};

use crate::{
    client::PromotionClient,
    error::Error,
    form::PromotionForm,
    render::search_results_table,
    request::{SearchQuery, Transport, UreqTransport},
};

pub const SUCCESS: &str = "Success";
pub const DELETED: &str = "Promotion has been Deleted!";
pub const SERVER_ERROR: &str = "Server error!";

/// 页面上的按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Update,
    Retrieve,
    Delete,
    Clear,
    Search,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Create,
        Action::Update,
        Action::Retrieve,
        Action::Delete,
        Action::Clear,
        Action::Search,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Action::Create => "create",
            Action::Update => "update",
            Action::Retrieve => "retrieve",
            Action::Delete => "delete",
            Action::Clear => "clear",
            Action::Search => "search",
        }
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        let name = name.strip_suffix("-btn").unwrap_or(&name);
        Action::ALL
            .iter()
            .find(|a| a.as_str() == name)
            .copied()
            .ok_or_else(|| Error::Params(format!("unknown action: {}", s)))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
}

pub struct FormController<T = UreqTransport> {
    client: PromotionClient<T>,
    form: PromotionForm,
}

impl<T: Transport> FormController<T> {
    pub fn new(client: PromotionClient<T>) -> Self {
        Self {
            client,
            form: PromotionForm::new(),
        }
    }

    pub fn client(&self) -> &PromotionClient<T> {
        &self.client
    }

    pub fn form(&self) -> &PromotionForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PromotionForm {
        &mut self.form
    }

    pub fn click(&mut self, action: Action) -> Outcome {
        debug!("{} clicked", action);
        match action {
            Action::Create => self.create(),
            Action::Update => self.update(),
            Action::Retrieve => self.retrieve(),
            Action::Delete => self.delete(),
            Action::Clear => self.clear(),
            Action::Search => self.search(),
        }
    }

    /// 显示服务端的错误信息，没有时用固定文案
    fn show_error(&mut self, action: Action, err: &Error) -> Outcome {
        error!("{} failed: {}", action, err);
        let message = err.server_message().unwrap_or(SERVER_ERROR).to_owned();
        self.form.flash(message);
        Outcome::Failed
    }

    pub fn create(&mut self) -> Outcome {
        self.form.clear_flash();

        match self.client.create(&self.form.to_body()) {
            Ok(created) => {
                self.form.update_from(created.promotion());
                self.form.flash(SUCCESS);
                Outcome::Succeeded
            }
            Err(e) => self.show_error(Action::Create, &e),
        }
    }

    pub fn update(&mut self) -> Outcome {
        self.form.clear_flash();

        let id = self.form.get_id().to_owned();
        match self.client.update(&id, &self.form.to_body()) {
            Ok(promotion) => {
                self.form.update_from(&promotion);
                self.form.flash(SUCCESS);
                Outcome::Succeeded
            }
            Err(e) => self.show_error(Action::Update, &e),
        }
    }

    pub fn retrieve(&mut self) -> Outcome {
        self.form.clear_flash();

        let id = self.form.get_id().to_owned();
        match self.client.get(&id) {
            Ok(promotion) => {
                self.form.update_from(&promotion);
                self.form.flash(SUCCESS);
                Outcome::Succeeded
            }
            Err(e) => {
                self.form.clear_record();
                self.show_error(Action::Retrieve, &e)
            }
        }
    }

    /// 删除失败时不展示具体原因
    pub fn delete(&mut self) -> Outcome {
        self.form.clear_flash();

        let id = self.form.get_id().to_owned();
        match self.client.delete(&id) {
            Ok(()) => {
                self.form.clear_record();
                self.form.flash(DELETED);
                Outcome::Succeeded
            }
            Err(e) => {
                error!("delete failed: {}", e);
                self.form.flash(SERVER_ERROR);
                Outcome::Failed
            }
        }
    }

    pub fn clear(&mut self) -> Outcome {
        self.form.clear_record();
        self.form.clear_flash();
        Outcome::Succeeded
    }

    /// 按名称和有效状态搜索，结果渲染成表格，第一条写回表单
    pub fn search(&mut self) -> Outcome {
        self.form.clear_flash();

        let query = SearchQuery::new()
            .with_name(self.form.get_name())
            .only_active(self.form.is_active());

        match self.client.list(&query) {
            Ok(promotions) => {
                self.form
                    .set_search_results(search_results_table(&promotions));
                if let Some(first) = promotions.first() {
                    self.form.update_from(first);
                }
                info!("search returned {} promotions", promotions.len());
                self.form.flash(SUCCESS);
                Outcome::Succeeded
            }
            Err(e) => self.show_error(Action::Search, &e),
        }
    }
}
