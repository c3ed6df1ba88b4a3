//! Attribute projection.
//!
//! A cell carries one attribute per kind, which is far too many icons to
//! draw. Projection picks the few slots that still say the same thing:
//!
//! 1. An `Include` slot, or a lone `OneOf` slot, becomes the anchor. The
//!    caller draws the anchor tile itself, and only the other half of the
//!    catalog (fixed or movable) is examined further.
//! 2. Ranges where the constraint is degenerate project to nothing.
//! 3. When both `Exclude` and `Ok` show up, the minority polarity is
//!    dropped, `Ok` on a tie.
//! 4. The surviving slots are reduced to one icon per attribute value.

use std::ops::Range;

use crate::rules::{AttrType, Kind, Project, RuleId, RulesError};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Projection {
    pub anchor: Option<Kind>,
    pub slots: Vec<Kind>,
    /// Attribute icons to draw over the anchor, one per distinct value of
    /// `slots` in slot order.
    pub icons: Vec<AttrType>,
}

impl Projection {
    pub fn is_empty(&self) -> bool {
        self.anchor.is_none() && self.slots.is_empty()
    }
}

fn distinct_icons(attrs: &[AttrType], slots: &[Kind]) -> Vec<AttrType> {
    let mut done: Vec<AttrType> = Vec::with_capacity(4);
    for slot in slots {
        if let Some(attr) = attrs.get(slot.0) {
            if !done.contains(attr) {
                done.push(*attr);
            }
        }
    }
    done
}

/// First slot at or after `begin` holding `attr`.
pub fn attr_index(attrs: &[AttrType], attr: AttrType, begin: usize) -> Option<Kind> {
    attrs
        .iter()
        .enumerate()
        .skip(begin)
        .find(|(_, value)| **value == attr)
        .map(|(index, _)| Kind(index))
}

/// The first `Include` slot, otherwise the `OneOf` slot if there is exactly
/// one.
pub fn find_anchor(attrs: &[AttrType]) -> Option<Kind> {
    if let Some(include) = attr_index(attrs, AttrType::Include, 0) {
        return Some(include);
    }
    let one_of = attr_index(attrs, AttrType::OneOf, 0)?;
    match attr_index(attrs, AttrType::OneOf, one_of.0 + 1) {
        Some(_) => None,
        None => Some(one_of),
    }
}

/// Slots of `range` worth drawing. Slots past the end of `attrs` are
/// ignored.
pub fn project_range(attrs: &[AttrType], range: Range<usize>) -> Vec<Kind> {
    let total = attrs.len();
    let end = range.end.min(total);
    let range = range.start.min(end)..end;
    let slots = &attrs[range.clone()];
    let count = |attr: AttrType| slots.iter().filter(|value| **value == attr).count();
    let exclude = count(AttrType::Exclude);
    let ok = count(AttrType::Ok);
    let size = range.len();
    if ok == total || exclude == size || (range.start == 0 && ok == size) {
        return vec![];
    }
    let dropped = if exclude != 0 && ok != 0 {
        if exclude < ok {
            Some(AttrType::Exclude)
        } else {
            Some(AttrType::Ok)
        }
    } else {
        None
    };
    range
        .filter(|index| Some(attrs[*index]) != dropped)
        .map(Kind)
        .collect()
}

/// Projects a whole attribute list whose first `fixed` slots belong to
/// fixed tiles.
pub fn project_attributes(attrs: &[AttrType], fixed: usize) -> Projection {
    let total = attrs.len();
    let fixed = fixed.min(total);
    let anchor = find_anchor(attrs);
    let range = match anchor {
        Some(anchor) if anchor.0 < fixed => fixed..total,
        Some(_) => 0..fixed,
        None => 0..total,
    };
    let slots = project_range(attrs, range);
    Projection {
        anchor,
        icons: distinct_icons(attrs, &slots),
        slots,
    }
}

impl Project {
    pub fn project_when_do(&self, rule: RuleId, when_do: usize) -> Result<Projection, RulesError> {
        let attrs = self.get_attrs(rule, when_do)?;
        Ok(project_attributes(attrs, self.fixed().len()))
    }

    /// Projection of the cell at `col`, `row`, or nothing when the rule has
    /// no cell there.
    pub fn project_cell(
        &self,
        rule: RuleId,
        col: usize,
        row: usize,
    ) -> Result<Option<Projection>, RulesError> {
        match self.get_when_do(rule, col, row)? {
            Some(when_do) => self.project_when_do(rule, when_do).map(Some),
            None => Ok(None),
        }
    }
}
