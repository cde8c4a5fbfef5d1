//! 页面元数据注入
//!
//! 此模块把一个页面的 SEO 描述写入 HTML 文档的 `<head>`，包括：
//! - 文档标题和 description / keywords meta 标签
//! - Open Graph（og:*）和 Twitter Card（twitter:*）标签
//! - canonical 链接
//! - JSON-LD 结构化数据脚本块
//!
//! 每个标签都采用"更新或创建"语义：文档中已存在对应节点时原地更新，
//! 不存在时创建并追加到 `<head>`，重复调用不会产生重复节点。

use html5ever::interface::{Attribute, QualName};
use html5ever::tendril::format_tendril;
use html5ever::tree_builder::create_element;
use html5ever::{namespace_url, ns, LocalName};
use markup5ever_rcdom::{Handle, RcDom};

use crate::parsers::html::{create_text_node, find_nodes, get_node_attr, set_node_attr};

use super::schema::COMPANY_NAME;

/// 一个页面的 SEO 描述
///
/// `title` 和 `description` 必填；og:* / twitter:* 字段缺省时退回到
/// 标题和描述。
#[derive(Debug, Clone, Default)]
pub struct PageSeo {
    pub title: String,
    pub description: String,
    pub keywords: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub og_url: Option<String>,
    pub twitter_title: Option<String>,
    pub twitter_description: Option<String>,
    pub twitter_image: Option<String>,
    pub canonical: Option<String>,
    pub structured_data: Option<serde_json::Value>,
}

impl PageSeo {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }
}

/// 把页面 SEO 描述写入文档
pub fn apply_page_seo(dom: RcDom, seo: &PageSeo) -> RcDom {
    set_document_title(&dom, &seo.title);

    upsert_meta_named(&dom, "description", &seo.description);
    if let Some(keywords) = &seo.keywords {
        upsert_meta_named(&dom, "keywords", keywords);
    }

    // Open Graph 标签
    upsert_meta_property(&dom, "og:title", seo.og_title.as_deref().unwrap_or(&seo.title));
    upsert_meta_property(
        &dom,
        "og:description",
        seo.og_description.as_deref().unwrap_or(&seo.description),
    );
    upsert_meta_property(&dom, "og:type", "website");
    if let Some(image) = &seo.og_image {
        upsert_meta_property(&dom, "og:image", image);
    }
    if let Some(url) = &seo.og_url {
        upsert_meta_property(&dom, "og:url", url);
    }
    upsert_meta_property(&dom, "og:site_name", COMPANY_NAME);

    // Twitter Card 标签
    upsert_meta_named(&dom, "twitter:card", "summary_large_image");
    upsert_meta_named(
        &dom,
        "twitter:title",
        seo.twitter_title.as_deref().unwrap_or(&seo.title),
    );
    upsert_meta_named(
        &dom,
        "twitter:description",
        seo.twitter_description.as_deref().unwrap_or(&seo.description),
    );
    if let Some(image) = &seo.twitter_image {
        upsert_meta_named(&dom, "twitter:image", image);
    }

    // canonical 链接；未显式给出时退回到 og:url
    if let Some(href) = seo.canonical.as_deref().or(seo.og_url.as_deref()) {
        upsert_canonical(&dom, href);
    }

    if let Some(data) = &seo.structured_data {
        upsert_structured_data(&dom, data);
    }

    dom
}

/// 获取 `<head>` 节点
fn head_node(dom: &RcDom) -> Option<Handle> {
    find_nodes(&dom.document, vec!["html", "head"]).first().cloned()
}

/// 设置文档标题
///
/// 已有 `<title>` 时替换其文本内容，否则创建新的 `<title>` 节点。
fn set_document_title(dom: &RcDom, title: &str) {
    if let Some(title_node) = find_nodes(&dom.document, vec!["html", "head", "title"]).first() {
        let mut children = title_node.children.borrow_mut();
        children.clear();
        children.push(create_text_node(title));
        return;
    }

    if let Some(head) = head_node(dom) {
        let title_node = create_element(
            dom,
            QualName::new(None, ns!(), LocalName::from("title")),
            vec![],
        );
        title_node.children.borrow_mut().push(create_text_node(title));
        head.children.borrow_mut().push(title_node);
    }
}

/// 更新或创建 `<meta name="..." content="...">`
fn upsert_meta_named(dom: &RcDom, name: &str, content: &str) {
    upsert_meta(dom, "name", name, content)
}

/// 更新或创建 `<meta property="..." content="...">`（Open Graph）
fn upsert_meta_property(dom: &RcDom, property: &str, content: &str) {
    upsert_meta(dom, "property", property, content)
}

fn upsert_meta(dom: &RcDom, key_attr: &str, key: &str, content: &str) {
    for meta_node in find_nodes(&dom.document, vec!["html", "head", "meta"]).iter() {
        // 只有第一个匹配的标签起作用（忽略其余的，如果有的话）
        if get_node_attr(meta_node, key_attr)
            .unwrap_or_default()
            .eq_ignore_ascii_case(key)
        {
            set_node_attr(meta_node, "content", Some(content.to_string()));
            return;
        }
    }

    // 手动在 HEAD 中添加 META 节点
    if let Some(head) = head_node(dom) {
        let meta_node: Handle = create_element(
            dom,
            QualName::new(None, ns!(), LocalName::from("meta")),
            vec![
                Attribute {
                    name: QualName::new(None, ns!(), LocalName::from(key_attr)),
                    value: format_tendril!("{}", key),
                },
                Attribute {
                    name: QualName::new(None, ns!(), LocalName::from("content")),
                    value: format_tendril!("{}", content),
                },
            ],
        );

        head.children.borrow_mut().push(meta_node);
    }
}

/// 更新或创建 `<link rel="canonical" href="...">`
fn upsert_canonical(dom: &RcDom, href: &str) {
    for link_node in find_nodes(&dom.document, vec!["html", "head", "link"]).iter() {
        if get_node_attr(link_node, "rel")
            .unwrap_or_default()
            .eq_ignore_ascii_case("canonical")
        {
            set_node_attr(link_node, "href", Some(href.to_string()));
            return;
        }
    }

    if let Some(head) = head_node(dom) {
        let link_node: Handle = create_element(
            dom,
            QualName::new(None, ns!(), LocalName::from("link")),
            vec![
                Attribute {
                    name: QualName::new(None, ns!(), LocalName::from("rel")),
                    value: format_tendril!("canonical"),
                },
                Attribute {
                    name: QualName::new(None, ns!(), LocalName::from("href")),
                    value: format_tendril!("{}", href),
                },
            ],
        );

        head.children.borrow_mut().push(link_node);
    }
}

/// 更新或创建 JSON-LD 结构化数据脚本块
///
/// 使用固定的 `id="structured-data"` 定位已有脚本块，重复应用时
/// 替换其内容而不是追加新块。
fn upsert_structured_data(dom: &RcDom, data: &serde_json::Value) {
    let serialized = data.to_string();

    for script_node in find_nodes(&dom.document, vec!["html", "head", "script"]).iter() {
        if get_node_attr(script_node, "id").unwrap_or_default() == "structured-data" {
            let mut children = script_node.children.borrow_mut();
            children.clear();
            children.push(create_text_node(&serialized));
            return;
        }
    }

    if let Some(head) = head_node(dom) {
        let script_node: Handle = create_element(
            dom,
            QualName::new(None, ns!(), LocalName::from("script")),
            vec![
                Attribute {
                    name: QualName::new(None, ns!(), LocalName::from("type")),
                    value: format_tendril!("application/ld+json"),
                },
                Attribute {
                    name: QualName::new(None, ns!(), LocalName::from("id")),
                    value: format_tendril!("structured-data"),
                },
            ],
        );

        script_node
            .children
            .borrow_mut()
            .push(create_text_node(&serialized));
        head.children.borrow_mut().push(script_node);
    }
}
