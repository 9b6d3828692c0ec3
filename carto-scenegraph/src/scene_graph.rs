use std::collections::HashMap;

use crate::error::CartoSceneGraphError;
use crate::marks::{group::SceneGroup, mark::SceneMark};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneGraph {
    pub marks: Vec<SceneMark>,
    /// Width in points
    pub width: f32,
    /// Height in points
    pub height: f32,
    pub origin: [f32; 2],
}

impl SceneGraph {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            marks: vec![],
            width,
            height,
            origin: [0.0, 0.0],
        }
    }

    pub fn get_mark(&self, mark_path: &[usize]) -> Option<&SceneMark> {
        // empty path is the root, which is not a mark
        let (first, rest) = mark_path.split_first()?;
        let mut child = self.marks.get(*first)?;
        for index in rest {
            child = child.children().get(*index)?;
        }
        Some(child)
    }

    /// Returns all of the group paths in the scene graph
    pub fn group_paths(&self) -> Vec<Vec<usize>> {
        let mut paths = vec![];
        for (index, mark) in self.marks.iter().enumerate() {
            let SceneMark::Group(group) = mark else {
                continue;
            };
            paths.push(vec![index]);
            for sub_path in group.group_paths() {
                let mut path = vec![index];
                path.extend(sub_path);
                paths.push(path);
            }
        }
        paths
    }

    /// Returns mapping from the names of each named group to their path
    pub fn group_names(&self) -> HashMap<String, Vec<usize>> {
        let mut names = HashMap::new();
        for path in self.group_paths() {
            let Some(SceneMark::Group(group)) = self.get_mark(&path) else {
                continue;
            };
            if !group.name.is_empty() {
                names.insert(group.name.clone(), path);
            }
        }
        names
    }

    /// Find a group anywhere in the scene by name
    pub fn find_group(&self, name: &str) -> Option<&SceneGroup> {
        let path = self.group_names().remove(name)?;
        match self.get_mark(&path)? {
            SceneMark::Group(group) => Some(group),
            _ => None,
        }
    }

    /// Check that every mark has consistent channel lengths
    pub fn validate(&self) -> Result<(), CartoSceneGraphError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(CartoSceneGraphError::InternalError(format!(
                "Scene graph has non-positive size {}x{}",
                self.width, self.height
            )));
        }
        self.marks.iter().try_for_each(|m| m.validate())
    }
}
