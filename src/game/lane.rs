/// Name to x-position table for lanes, loaded from the level file.
///
/// Registration order is preserved so lane rendering and tie-breaks stay
/// deterministic across runs.
#[derive(Clone, Debug, Default)]
pub struct LaneRegistry {
    lanes: Vec<(String, i32)>,
}

impl LaneRegistry {
    pub fn new() -> LaneRegistry {
        LaneRegistry::default()
    }

    /// Registers a lane position. A repeated name overwrites in place,
    /// keeping the original registration slot.
    pub fn set(&mut self, name: &str, x: i32) {
        if let Some(entry) = self.lanes.iter_mut().find(|(n, _)| n == name) {
            entry.1 = x;
        } else {
            self.lanes.push((name.to_string(), x));
        }
    }

    pub fn get(&self, name: &str) -> Option<i32> {
        self.lanes.iter().find(|(n, _)| n == name).map(|(_, x)| *x)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.lanes.iter().map(|(n, x)| (n.as_str(), *x))
    }

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }
}
