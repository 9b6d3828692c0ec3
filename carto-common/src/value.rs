#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A mark channel that is either shared by every instance or given per instance
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "kebab-case"))]
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarOrArray<T: Sync + Clone> {
    Scalar { value: T },
    Array { values: Vec<T> },
}

impl<T: Sync + Clone> ScalarOrArray<T> {
    pub fn new_scalar(value: T) -> Self {
        ScalarOrArray::Scalar { value }
    }

    pub fn new_array(values: Vec<T>) -> Self {
        ScalarOrArray::Array { values }
    }

    /// Number of values, 1 for scalars
    pub fn len(&self) -> usize {
        match self {
            ScalarOrArray::Scalar { .. } => 1,
            ScalarOrArray::Array { values } => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_iter<'a>(
        &'a self,
        scalar_len: usize,
        indices: Option<&'a Vec<usize>>,
    ) -> Box<dyn Iterator<Item = &'a T> + 'a> {
        match self {
            ScalarOrArray::Scalar { value } => Box::new(std::iter::repeat_n(value, scalar_len)),
            ScalarOrArray::Array { values } => match indices {
                None => Box::new(values.iter()),
                Some(indices) => Box::new(indices.iter().map(|i| &values[*i])),
            },
        }
    }

    pub fn as_vec(&self, scalar_len: usize, indices: Option<&Vec<usize>>) -> Vec<T> {
        self.as_iter(scalar_len, indices).cloned().collect()
    }

    /// Value for a single instance. Scalars answer for every index.
    pub fn get(&self, index: usize) -> Option<&T> {
        match self {
            ScalarOrArray::Scalar { value } => Some(value),
            ScalarOrArray::Array { values } => values.get(index),
        }
    }

    pub fn map<U: Sync + Clone>(&self, f: impl Fn(&T) -> U) -> ScalarOrArray<U> {
        match self {
            ScalarOrArray::Scalar { value } => ScalarOrArray::Scalar { value: f(value) },
            ScalarOrArray::Array { values } => ScalarOrArray::Array {
                values: values.iter().map(f).collect(),
            },
        }
    }
}

impl<T: Sync + Clone> From<Vec<T>> for ScalarOrArray<T> {
    fn from(values: Vec<T>) -> Self {
        ScalarOrArray::Array { values }
    }
}

impl<T: Sync + Clone> From<T> for ScalarOrArray<T> {
    fn from(value: T) -> Self {
        ScalarOrArray::Scalar { value }
    }
}
