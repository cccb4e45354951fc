//! Two-level cursor over the result tree (group -> entry)

use super::content::ResultGroup;
use super::types::{GroupingLevel, InputDevice, Selection};

/// Index-based cursor location. `entry` is `None` for a selected group
/// without a selected entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub group: usize,
    pub entry: Option<usize>,
}

pub struct Cursor<'a> {
    groups: &'a [ResultGroup],
}

impl<'a> Cursor<'a> {
    pub fn new(groups: &'a [ResultGroup]) -> Self {
        Self { groups }
    }

    /// Position of `selection`, or `None` when it does not fit the tree
    pub fn locate(&self, selection: &Selection) -> Option<Position> {
        let group = self.groups.iter().position(|g| g.id == selection.group_id)?;
        let entry = match &selection.entry_id {
            Some(entry_id) => Some(self.groups[group].entry_index(entry_id)?),
            None => None,
        };
        Some(Position { group, entry })
    }

    pub fn selection_at(&self, position: Position, source: InputDevice) -> Option<Selection> {
        let group = self.groups.get(position.group)?;
        let entry_id = match position.entry {
            Some(index) => Some(group.entries.get(index)?.id.clone()),
            None => None,
        };
        Some(Selection {
            group_id: group.id.clone(),
            entry_id,
            source,
        })
    }

    fn first_in(&self, group: usize) -> Position {
        let entry = (!self.groups[group].entries.is_empty()).then_some(0);
        Position { group, entry }
    }

    fn last_in(&self, group: usize) -> Position {
        let entry = self.groups[group].entries.len().checked_sub(1);
        Position { group, entry }
    }

    pub fn next(&self, from: Option<Position>, level: GroupingLevel) -> Option<Position> {
        if self.groups.is_empty() {
            return None;
        }
        let Some(from) = from else {
            return Some(self.first_in(0));
        };
        let last_group = self.groups.len() - 1;

        match level {
            GroupingLevel::Entry => {
                let len = self.groups[from.group].entries.len();
                let next_entry = match from.entry {
                    None if len > 0 => Some(0),
                    Some(e) if e + 1 < len => Some(e + 1),
                    _ => None,
                };
                match next_entry {
                    Some(entry) => Some(Position { group: from.group, entry: Some(entry) }),
                    None if from.group < last_group => Some(self.first_in(from.group + 1)),
                    None => None,
                }
            }
            GroupingLevel::Group => {
                if from.group < last_group {
                    return Some(self.first_in(from.group + 1));
                }
                let tail = self.last_in(last_group);
                (tail != from).then_some(tail)
            }
        }
    }

    pub fn previous(&self, from: Option<Position>, level: GroupingLevel) -> Option<Position> {
        let from = from?;
        if self.groups.is_empty() {
            return None;
        }

        match level {
            GroupingLevel::Entry => match from.entry {
                Some(e) if e > 0 => Some(Position { group: from.group, entry: Some(e - 1) }),
                _ if from.group > 0 => Some(self.last_in(from.group - 1)),
                _ => None,
            },
            GroupingLevel::Group => {
                let head = self.first_in(from.group);
                if from != head && from.entry.is_some() {
                    Some(head)
                } else if from.group > 0 {
                    Some(self.first_in(from.group - 1))
                } else {
                    None
                }
            }
        }
    }
}
