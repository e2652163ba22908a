//! Step descriptors and step files.
//!
//! A [`Step`] is one frame of an algorithm trace. There is no type tag:
//! which fields are populated decides the algorithm family (see
//! [`Step::family`]). Every field is optional and every index is signed, so
//! malformed traces still parse and are handled at reconciliation time.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::VizError;

// ---------------------------------------------------------------------------
// Step
// ---------------------------------------------------------------------------

/// Identifier of a pointer-family array. Traces use either numbers or
/// strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArrayKey {
    /// Numeric id.
    Number(f64),
    /// Named id.
    Text(String),
}

impl fmt::Display for ArrayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One array of a pointer step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayLane {
    /// Id pointers refer to this array by.
    pub id: Option<ArrayKey>,
    /// Element values.
    pub values: Vec<f64>,
    /// Highlighted element indices.
    pub highlights: Vec<i64>,
}

impl ArrayLane {
    /// Whether `column` is in the highlight set.
    #[must_use]
    pub fn is_highlighted(&self, column: usize) -> bool {
        contains_index(&self.highlights, column)
    }
}

/// A named pointer into one of the step's arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerSpec {
    /// Label drawn on the marker.
    pub name: String,
    /// Id of the array the pointer points into.
    #[serde(rename = "arrayId")]
    pub array_id: Option<ArrayKey>,
    /// Column the pointer points at. May lie past either end of the array.
    pub index: i64,
}

/// Algorithm family a step belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Several arrays with named pointers.
    Pointer,
    /// One array with comparisons, sorted marks and swaps.
    Sorting,
    /// One array with an inclusive index window.
    SlidingWindow,
}

impl Family {
    /// All families.
    pub const ALL: [Self; 3] = [Self::Pointer, Self::Sorting, Self::SlidingWindow];

    /// Short name for logging.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Pointer => "pointer",
            Self::Sorting => "sorting",
            Self::SlidingWindow => "sliding-window",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One frame of an algorithm trace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Step {
    /// Pointer family: arrays, one lane each.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrays: Option<Vec<ArrayLane>>,
    /// Pointer family: pointer markers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointers: Option<Vec<PointerSpec>>,
    /// Sorting and sliding-window families: the single array.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub array: Option<Vec<f64>>,
    /// Sorting: indices being compared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparing: Option<Vec<i64>>,
    /// Sorting: indices in their final position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorted: Option<Vec<i64>>,
    /// Sorting: pair of indices to swap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap: Option<Vec<i64>>,
    /// Sliding window: inclusive `[start, end]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<Vec<i64>>,
    /// Human-readable explanation of the step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Step {
    /// Classify the step by which fields are populated. Pointer arrays win
    /// over a single array; a single array with a two-element window is a
    /// sliding-window step; any other non-empty single array is a sorting
    /// step. Anything else has no visualization.
    #[must_use]
    pub fn family(&self) -> Option<Family> {
        if !self.arrays().is_empty() {
            return Some(Family::Pointer);
        }
        if self.array().is_empty() {
            return None;
        }
        if self.window.as_ref().is_some_and(|w| w.len() == 2) {
            Some(Family::SlidingWindow)
        } else {
            Some(Family::Sorting)
        }
    }

    /// Pointer-family arrays (empty when absent).
    #[must_use]
    pub fn arrays(&self) -> &[ArrayLane] {
        self.arrays.as_deref().unwrap_or_default()
    }

    /// Pointer markers (empty when absent).
    #[must_use]
    pub fn pointers(&self) -> &[PointerSpec] {
        self.pointers.as_deref().unwrap_or_default()
    }

    /// Single-array values (empty when absent).
    #[must_use]
    pub fn array(&self) -> &[f64] {
        self.array.as_deref().unwrap_or_default()
    }

    /// Compared indices (empty when absent).
    #[must_use]
    pub fn comparing(&self) -> &[i64] {
        self.comparing.as_deref().unwrap_or_default()
    }

    /// Sorted indices (empty when absent).
    #[must_use]
    pub fn sorted(&self) -> &[i64] {
        self.sorted.as_deref().unwrap_or_default()
    }

    /// Lane index of the array whose id is `key`.
    #[must_use]
    pub fn lane_of(&self, key: &ArrayKey) -> Option<usize> {
        self.arrays()
            .iter()
            .position(|lane| lane.id.as_ref() == Some(key))
    }

    /// The swap pair, if it names exactly two distinct in-range indices.
    #[must_use]
    pub fn swap_pair(&self) -> Option<(usize, usize)> {
        let len = self.array().len();
        match self.swap.as_deref()? {
            &[a, b] => {
                let a = checked_index(a, len)?;
                let b = checked_index(b, len)?;
                (a != b).then_some((a, b))
            }
            _ => None,
        }
    }

    /// Raw signed `[start, end]` window, if it is a pair.
    #[must_use]
    pub fn window_bounds(&self) -> Option<(i64, i64)> {
        match self.window.as_deref()? {
            &[start, end] => Some((start, end)),
            _ => None,
        }
    }

    /// Whether `index` lies inside the inclusive window. Endpoints are not
    /// required to be in range.
    #[must_use]
    pub fn in_window(&self, index: usize) -> bool {
        let Ok(index) = i64::try_from(index) else {
            return false;
        };
        self.window_bounds()
            .is_some_and(|(start, end)| start <= index && index <= end)
    }

    /// Window range for the frame: two in-range indices with
    /// `start <= end`.
    #[must_use]
    pub fn window_range(&self) -> Option<(usize, usize)> {
        let len = self.array().len();
        let (start, end) = self.window_bounds()?;
        let start = checked_index(start, len)?;
        let end = checked_index(end, len)?;
        (start <= end).then_some((start, end))
    }
}

/// `index` as a `usize` if it lies in `0..len`.
#[must_use]
pub fn checked_index(index: i64, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < len)
}

/// Whether the signed index list contains `index`.
#[must_use]
pub fn contains_index(indices: &[i64], index: usize) -> bool {
    indices
        .iter()
        .any(|&i| usize::try_from(i).is_ok_and(|i| i == index))
}

// ---------------------------------------------------------------------------
// StepFile
// ---------------------------------------------------------------------------

/// Big-O summary shown with a trace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Complexity {
    /// Time complexity, e.g. `O(n log n)`.
    pub time: Option<String>,
    /// Space complexity.
    pub space: Option<String>,
}

/// Trace metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepMeta {
    /// Algorithm name.
    pub title: Option<String>,
    /// Algorithm category, e.g. `sorting`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Complexity summary.
    pub complexity: Option<Complexity>,
}

/// A full algorithm trace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepFile {
    /// Optional metadata block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<StepMeta>,
    /// Steps in playback order.
    pub steps: Vec<Step>,
}

/// Accepted top-level shapes: a full file or a bare list of steps.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawStepFile {
    Bare(Vec<Step>),
    Full(StepFile),
}

impl StepFile {
    /// Parse a trace from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, VizError> {
        let raw: RawStepFile = serde_json::from_str(json)
            .map_err(|e| VizError::StepParse(e.to_string()))?;
        Ok(match raw {
            RawStepFile::Bare(steps) => Self { meta: None, steps },
            RawStepFile::Full(file) => file,
        })
    }

    /// Read and parse a trace file.
    pub fn load(path: &Path) -> Result<Self, VizError> {
        let content = std::fs::read_to_string(path).map_err(VizError::Io)?;
        let file = Self::from_json_str(&content)?;
        log::debug!("loaded {} steps from {}", file.steps.len(), path.display());
        Ok(file)
    }

    /// Title from the metadata block, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.meta.as_ref()?.title.as_deref()
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the trace has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(json: &str) -> Step {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn classifies_by_field_presence() {
        let pointer = step(
            r#"{"arrays":[{"id":1,"values":[1,2]}],"pointers":[],"array":[3]}"#,
        );
        assert_eq!(pointer.family(), Some(Family::Pointer));

        let window = step(r#"{"array":[5,3,8],"window":[0,1]}"#);
        assert_eq!(window.family(), Some(Family::SlidingWindow));

        let sorting = step(r#"{"array":[4,2,7],"comparing":[0,1],"swap":null}"#);
        assert_eq!(sorting.family(), Some(Family::Sorting));

        // A window that is not a pair does not make a sliding-window step.
        let odd_window = step(r#"{"array":[1,2],"window":[0]}"#);
        assert_eq!(odd_window.family(), Some(Family::Sorting));
    }

    #[test]
    fn empty_or_unknown_shapes_have_no_family() {
        assert_eq!(step("{}").family(), None);
        assert_eq!(step(r#"{"array":[]}"#).family(), None);
        assert_eq!(step(r#"{"arrays":[],"description":"x"}"#).family(), None);
    }

    #[test]
    fn swap_pair_rejects_bad_indices() {
        let ok = step(r#"{"array":[4,2,7],"swap":[0,2]}"#);
        assert_eq!(ok.swap_pair(), Some((0, 2)));
        assert_eq!(step(r#"{"array":[4,2,7],"swap":[0,3]}"#).swap_pair(), None);
        assert_eq!(step(r#"{"array":[4,2,7],"swap":[-1,1]}"#).swap_pair(), None);
        assert_eq!(step(r#"{"array":[4,2,7],"swap":[1,1]}"#).swap_pair(), None);
        assert_eq!(step(r#"{"array":[4,2,7],"swap":[0,1,2]}"#).swap_pair(), None);
        assert_eq!(step(r#"{"array":[4,2,7]}"#).swap_pair(), None);
    }

    #[test]
    fn window_range_is_inclusive_and_validated() {
        let s = step(r#"{"array":[5,3,8,1,9],"window":[1,3]}"#);
        assert_eq!(s.window_range(), Some((1, 3)));
        let single = step(r#"{"array":[5,3,8],"window":[2,2]}"#);
        assert_eq!(single.window_range(), Some((2, 2)));
        let reversed = step(r#"{"array":[5,3,8],"window":[2,1]}"#);
        assert_eq!(reversed.window_range(), None);
        let past_end = step(r#"{"array":[5,3,8],"window":[1,5]}"#);
        assert_eq!(past_end.window_range(), None);
        let before_start = step(r#"{"array":[5,3,8],"window":[-1,1]}"#);
        assert_eq!(before_start.window_range(), None);
    }

    #[test]
    fn window_membership_ignores_array_bounds() {
        let past_end = step(r#"{"array":[5,3,8,1,9],"window":[2,7]}"#);
        assert_eq!(past_end.window_bounds(), Some((2, 7)));
        let members: Vec<usize> = (0..5).filter(|&i| past_end.in_window(i)).collect();
        assert_eq!(members, [2, 3, 4]);

        let before_start = step(r#"{"array":[5,3,8,1,9],"window":[-1,2]}"#);
        let members: Vec<usize> = (0..5).filter(|&i| before_start.in_window(i)).collect();
        assert_eq!(members, [0, 1, 2]);

        let reversed = step(r#"{"array":[5,3,8,1,9],"window":[3,1]}"#);
        assert!((0..5).all(|i| !reversed.in_window(i)));

        let odd = step(r#"{"array":[5,3,8],"window":[1]}"#);
        assert_eq!(odd.window_bounds(), None);
        assert!(!odd.in_window(1));
    }

    #[test]
    fn array_ids_match_numbers_and_strings() {
        let s = step(
            r#"{"arrays":[{"id":"nums","values":[1]},{"id":2,"values":[3]}]}"#,
        );
        assert_eq!(s.lane_of(&ArrayKey::Text("nums".to_owned())), Some(0));
        assert_eq!(s.lane_of(&ArrayKey::Number(2.0)), Some(1));
        assert_eq!(s.lane_of(&ArrayKey::Number(9.0)), None);
    }

    #[test]
    fn highlight_lookup_ignores_negative_indices() {
        let lane = ArrayLane {
            id: None,
            values: vec![1.0, 2.0],
            highlights: vec![-1, 1],
        };
        assert!(lane.is_highlighted(1));
        assert!(!lane.is_highlighted(0));
    }

    #[test]
    fn parses_full_step_file() {
        let json = r#"{
            "meta": {
                "title": "Two Sum (sorted)",
                "type": "pointer",
                "complexity": {"time": "O(n)", "space": "O(1)"}
            },
            "steps": [
                {
                    "arrays": [{"id": 0, "values": [1, 3, 5], "highlights": [0, 2]}],
                    "pointers": [
                        {"name": "left", "arrayId": 0, "index": 0},
                        {"name": "right", "arrayId": 0, "index": 2}
                    ],
                    "description": "Start with both ends"
                }
            ]
        }"#;
        let file = StepFile::from_json_str(json).unwrap();
        assert_eq!(file.title(), Some("Two Sum (sorted)"));
        assert_eq!(file.meta.as_ref().and_then(|m| m.kind.as_deref()), Some("pointer"));
        assert_eq!(file.len(), 1);
        let first = &file.steps[0];
        assert_eq!(first.pointers().len(), 2);
        assert_eq!(first.pointers()[1].array_id, Some(ArrayKey::Number(0.0)));
        assert_eq!(first.description.as_deref(), Some("Start with both ends"));
    }

    #[test]
    fn parses_bare_step_list() {
        let file = StepFile::from_json_str(r#"[{"array":[1,2]},{"array":[2,1]}]"#).unwrap();
        assert!(file.meta.is_none());
        assert_eq!(file.len(), 2);
    }

    #[test]
    fn invalid_json_is_a_step_parse_error() {
        let err = StepFile::from_json_str("{steps: ").unwrap_err();
        assert!(matches!(err, VizError::StepParse(_)));
    }
}
