use crate::{model::promotion::Promotion, util::escape_html};

const HEADERS: [&str; 5] = ["ID", "Name", "Start_At", "End_At", "Active"];

/// 把搜索结果渲染成 HTML 表格，每条结果一行，行 id 为 `row_{序号}`
pub fn search_results_table(promotions: &[Promotion]) -> String {
    let mut table = String::from(r#"<table class="table table-striped" cellpadding="10">"#);

    table.push_str("<thead><tr>");
    for header in HEADERS.iter() {
        table.push_str(&format!(r#"<th class="col-md-2">{}</th>"#, header));
    }
    table.push_str("</tr></thead><tbody>");

    for (i, promotion) in promotions.iter().enumerate() {
        table.push_str(&format!(
            r#"<tr id="row_{}"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>"#,
            i,
            escape_html(promotion.get_id()),
            escape_html(promotion.get_name()),
            escape_html(promotion.get_starts_at()),
            escape_html(promotion.get_ends_at()),
            promotion.is_active()
        ));
    }

    table.push_str("</tbody></table>");
    table
}
