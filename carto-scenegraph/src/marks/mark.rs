use std::sync::Arc;

use crate::error::CartoSceneGraphError;
use crate::marks::group::SceneGroup;
use crate::marks::path::ScenePathMark;
use crate::marks::rect::SceneRectMark;
use crate::marks::rule::SceneRuleMark;
use crate::marks::symbol::SceneSymbolMark;
use crate::marks::text::SceneTextMark;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SceneMark {
    Path(ScenePathMark),
    Symbol(SceneSymbolMark),
    Rect(SceneRectMark),
    Rule(SceneRuleMark),
    Text(Arc<SceneTextMark>),
    Group(SceneGroup),
}

impl SceneMark {
    pub fn name(&self) -> &str {
        match self {
            Self::Path(mark) => &mark.name,
            Self::Symbol(mark) => &mark.name,
            Self::Rect(mark) => &mark.name,
            Self::Rule(mark) => &mark.name,
            Self::Text(mark) => &mark.name,
            Self::Group(mark) => &mark.name,
        }
    }

    pub fn zindex(&self) -> Option<i32> {
        match self {
            Self::Path(mark) => mark.zindex,
            Self::Symbol(mark) => mark.zindex,
            Self::Rect(mark) => mark.zindex,
            Self::Rule(mark) => mark.zindex,
            Self::Text(mark) => mark.zindex,
            Self::Group(mark) => mark.zindex,
        }
    }

    /// Number of drawable instances, groups count their children recursively
    pub fn instance_count(&self) -> usize {
        match self {
            Self::Path(mark) => mark.len as usize,
            Self::Symbol(mark) => mark.len as usize,
            Self::Rect(mark) => mark.len as usize,
            Self::Rule(mark) => mark.len as usize,
            Self::Text(mark) => mark.len as usize,
            Self::Group(group) => group.marks.iter().map(|m| m.instance_count()).sum(),
        }
    }

    pub fn children(&self) -> &[SceneMark] {
        match self {
            Self::Group(mark) => &mark.marks,
            _ => &[],
        }
    }

    pub fn validate(&self) -> Result<(), CartoSceneGraphError> {
        match self {
            Self::Path(mark) => mark.validate(),
            Self::Symbol(mark) => mark.validate(),
            Self::Rect(mark) => mark.validate(),
            Self::Rule(mark) => mark.validate(),
            Self::Text(mark) => mark.validate(),
            Self::Group(group) => group.marks.iter().try_for_each(|m| m.validate()),
        }
    }
}
