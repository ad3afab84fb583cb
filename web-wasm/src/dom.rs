//! DOMへの書き込み
//!
//! 送信ごとにページから要素を取り直し、`ResultView` として Presenter に渡す。

use gloo::console;
use resume_scanner_common::{
    AnalysisView, BadgeView, ClientConfig, DomainBadge, ElementIds, Error, RankTable, Result,
    ResultView,
};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

/// ドメインバッジ要素
pub struct DomBadge {
    element: HtmlElement,
    hidden_class: String,
}

impl DomainBadge for DomBadge {
    fn show(&mut self, badge: &BadgeView) {
        self.element.set_inner_text(&badge.text);
        self.element.set_class_name(&badge.class_name);
        let _ = self.element.class_list().remove_1(&self.hidden_class);
    }
}

/// ページ上の結果表示要素一式
///
/// 出力欄とローダーだけは必須。ランキング表と解析結果の各欄は、
/// そのモードで書き込むときに初めて必要になる。
pub struct DomView {
    document: Document,
    ids: ElementIds,
    output: HtmlElement,
    loader: HtmlElement,
    rank_table: Option<Element>,
    badge: Option<DomBadge>,
    hidden_class: String,
}

impl DomView {
    pub fn locate(document: &Document, config: &ClientConfig) -> Result<Self> {
        let ids = &config.elements;
        let badge = document
            .get_element_by_id(&ids.domain_badge)
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
            .map(|element| DomBadge {
                element,
                hidden_class: config.hidden_class.clone(),
            });

        Ok(Self {
            document: document.clone(),
            ids: ids.clone(),
            output: html_element(document, &ids.output)?,
            loader: html_element(document, &ids.loader)?,
            rank_table: document.get_element_by_id(&ids.rank_table),
            badge,
            hidden_class: config.hidden_class.clone(),
        })
    }

    fn set_visible(&self, element: &HtmlElement, visible: bool) {
        let classes = element.class_list();
        let _ = if visible {
            classes.remove_1(&self.hidden_class)
        } else {
            classes.add_1(&self.hidden_class)
        };
    }

    fn append_row(&self, table: &Element, cell_tag: &str, cells: &[&str]) -> std::result::Result<(), JsValue> {
        let row = self.document.create_element("tr")?;
        for &text in cells {
            let cell = self.document.create_element(cell_tag)?;
            cell.set_text_content(Some(text));
            row.append_child(&cell)?;
        }
        table.append_child(&row)?;
        Ok(())
    }
}

impl ResultView for DomView {
    type Badge = DomBadge;

    fn set_loader_visible(&mut self, visible: bool) {
        self.set_visible(&self.loader, visible);
    }

    fn set_output_visible(&mut self, visible: bool) {
        self.set_visible(&self.output, visible);
    }

    fn clear_rank_table(&mut self) {
        if let Some(table) = &self.rank_table {
            table.set_inner_html("");
        }
    }

    fn write_rank_table(&mut self, table: &RankTable) -> Result<()> {
        let target = self
            .rank_table
            .clone()
            .ok_or_else(|| Error::Form(format!("#{} が見つかりません", self.ids.rank_table)))?;
        target.set_inner_html("");

        self.append_row(&target, "th", &table.header)
            .and_then(|_| {
                table.rows.iter().try_for_each(|row| {
                    let cells: Vec<&str> = row.iter().map(String::as_str).collect();
                    self.append_row(&target, "td", &cells)
                })
            })
            .map_err(|e| Error::Form(format!("ランキング表の描画に失敗: {:?}", e)))
    }

    fn write_analysis(&mut self, view: &AnalysisView) -> Result<()> {
        // 全欄がそろっているときだけ書き込む
        let decision = html_element(&self.document, &self.ids.decision)?;
        let score = html_element(&self.document, &self.ids.score)?;
        let matched = html_element(&self.document, &self.ids.matched)?;
        let detected = html_element(&self.document, &self.ids.detected)?;

        decision.set_inner_text(&view.decision);
        score.set_inner_text(&view.score);
        matched.set_inner_text(&view.matched);
        detected.set_inner_text(&view.detected);
        Ok(())
    }

    fn badge(&mut self) -> Option<&mut DomBadge> {
        self.badge.as_mut()
    }

    fn alert(&mut self, message: &str) {
        gloo::dialogs::alert(message);
    }

    fn log_error(&mut self, error: &Error) {
        console::error!(error.to_string());
    }
}

fn element(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| Error::Form(format!("#{} が見つかりません", id)))
}

fn html_element(document: &Document, id: &str) -> Result<HtmlElement> {
    element(document, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| Error::Form(format!("#{} がHTML要素ではありません", id)))
}
