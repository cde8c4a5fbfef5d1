//! 文档解析器模块

pub mod html;
