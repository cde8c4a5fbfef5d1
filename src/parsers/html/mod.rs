//! HTML 解析和 DOM 操作
//!
//! 封装 html5ever / rcdom，提供页面文档的解析、节点查找、属性读写
//! 和序列化。SEO 元数据注入建立在这些工具之上。

pub mod dom;

pub use dom::{
    create_text_node, find_nodes, get_child_node_by_name, get_node_attr, html_to_dom,
    serialize_document, set_node_attr,
};
