//! 页面 SEO 元数据模块
//!
//! 按页面把 SEO 元数据写入文档 `<head>`：标题、描述/关键词、
//! Open Graph 标签、Twitter Card 标签、canonical 链接和 JSON-LD
//! 结构化数据。所有写入都是"更新或创建"语义，绝不产生重复节点。

pub mod metadata;
pub mod schema;

pub use metadata::{apply_page_seo, PageSeo};
pub use schema::{local_business_schema, organization_schema, product_schema};
