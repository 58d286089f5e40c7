//! # 文件名过滤与重命名
//!
//! `-m MATCH/REPLACE` 的解析与应用：
//! - 只有 MATCH：文件名中能搜索到匹配才保留，主干不变
//! - MATCH 与 REPLACE：全部保留，主干中所有不重叠的匹配被替换
//!
//! 替换文本支持 `$1` / `${name}`，也接受 `\1` / `\g<name>` 写法。
//!
//! ## 依赖关系
//! - 被 `models/config.rs`, `commands/convert.rs` 使用
//! - 使用 `regex` crate

use crate::error::{QbcError, Result};
use crate::models::RenamedFile;

use regex::Regex;
use std::path::PathBuf;

/// 匹配模式与可选的替换文本
#[derive(Debug, Clone)]
pub struct NamePattern {
    matcher: Regex,
    replacement: Option<String>,
}

impl NamePattern {
    /// 解析 `MATCH/REPLACE`，在第一个 `/` 处分割；MATCH 为空时视为未指定
    pub fn parse(spec: &str) -> Result<Option<Self>> {
        let (match_pattern, replacement) = match spec.split_once('/') {
            Some((m, r)) => (m, Some(r)),
            None => (spec, None),
        };

        if match_pattern.is_empty() {
            return Ok(None);
        }

        Self::new(match_pattern, replacement).map(Some)
    }

    /// 编译匹配模式
    pub fn new(match_pattern: &str, replacement: Option<&str>) -> Result<Self> {
        let matcher = Regex::new(match_pattern).map_err(|e| QbcError::InvalidPattern {
            pattern: match_pattern.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            matcher,
            replacement: replacement.map(translate_backreferences),
        })
    }

    /// 原始匹配模式
    pub fn as_str(&self) -> &str {
        self.matcher.as_str()
    }

    /// 是否保留该文件（按完整文件名搜索，不锚定）
    pub fn keeps(&self, file_name: &str) -> bool {
        self.replacement.is_some() || self.matcher.is_match(file_name)
    }

    /// 计算新的文件名主干
    pub fn rename(&self, stem: &str) -> String {
        match &self.replacement {
            Some(replacement) => self
                .matcher
                .replace_all(stem, replacement.as_str())
                .into_owned(),
            None => stem.to_string(),
        }
    }
}

/// 把 `\1`、`\g<name>` 转成 regex crate 的 `${1}`、`${name}`
fn translate_backreferences(replacement: &str) -> String {
    let mut out = String::with_capacity(replacement.len());
    let mut chars = replacement.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.peek().copied() {
            Some(d) if d.is_ascii_digit() => {
                let mut group = String::new();
                while let Some(d) = chars.peek().copied().filter(char::is_ascii_digit) {
                    group.push(d);
                    chars.next();
                }
                out.push_str(&format!("${{{}}}", group));
            }
            Some('g') => {
                let mut lookahead = chars.clone();
                lookahead.next();
                if lookahead.next() == Some('<') {
                    let name: String = lookahead.by_ref().take_while(|&ch| ch != '>').collect();
                    out.push_str(&format!("${{{}}}", name));
                    chars = lookahead;
                } else {
                    out.push('\\');
                }
            }
            Some('\\') => {
                chars.next();
                out.push('\\');
            }
            _ => out.push('\\'),
        }
    }

    out
}

/// 按模式过滤候选文件，并计算每个文件的新主干
pub fn filter_and_rename(files: Vec<PathBuf>, pattern: Option<&NamePattern>) -> Vec<RenamedFile> {
    files
        .into_iter()
        .filter_map(|source| {
            let file_name = source.file_name()?.to_string_lossy().to_string();
            let stem = source.file_stem()?.to_string_lossy().to_string();

            let new_stem = match pattern {
                None => stem,
                Some(p) if p.keeps(&file_name) => p.rename(&stem),
                Some(_) => return None,
            };

            Some(RenamedFile { source, new_stem })
        })
        .collect()
}
