use {
  crate::{
    geometry::Color,
    stroke::{Stroke, StrokeId}
  },
};

/// A stroke slot. Removing a stroke keeps its slot, so identities never shift.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Slot {
  Active(Stroke),
  /// Erased stroke; paints as blank.
  Inert,
}

/// Append-only arena of stroke slots, indexed by [`StrokeId`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slots {
  slots: Vec<Slot>,
  active: usize,
}

impl Slots {
  /// Total slots, active and inert. Also the id of the next fresh slot.
  pub fn len(&self) -> usize { self.slots.len() }

  pub fn is_empty(&self) -> bool { self.slots.is_empty() }

  pub fn active_count(&self) -> usize { self.active }

  /// The stroke in `id`, if the slot exists and is active.
  pub fn get(&self, id: StrokeId) -> Option<&Stroke> {
    match self.slots.get(id) {
      Some(Slot::Active(stroke)) => Some(stroke),
      _ => None
    }
  }

  pub fn slot(&self, id: StrokeId) -> Option<&Slot> {
    self.slots.get(id)
  }

  /// Color painted by `id`; blank for inert or unknown slots.
  pub fn color(&self, id: StrokeId) -> Color {
    self.get(id).map_or(Color::BLANK, |stroke| stroke.color)
  }

  pub fn iter_active(&self) -> impl Iterator<Item = (StrokeId, &Stroke)> {
    self.slots.iter()
      .enumerate()
      .filter_map(|(id, slot)| match slot {
        Slot::Active(stroke) => Some((id, stroke)),
        Slot::Inert => None
      })
  }

  /// Store `stroke` in slot `id`, or append when `id == len()`. Returns `false` for ids past
  /// the end, which are left alone.
  pub(crate) fn place(&mut self, id: StrokeId, stroke: Stroke) -> bool {
    let len = self.slots.len();
    match self.slots.get_mut(id) {
      Some(slot) => {
        if let Slot::Inert = slot { self.active += 1; }
        *slot = Slot::Active(stroke);
      }
      None if id == len => {
        self.slots.push(Slot::Active(stroke));
        self.active += 1;
      }
      None => return false
    }
    true
  }

  /// Turn `id` inert, returning the stroke it held.
  pub(crate) fn retire(&mut self, id: StrokeId) -> Option<Stroke> {
    let slot = self.slots.get_mut(id)?;
    match std::mem::replace(slot, Slot::Inert) {
      Slot::Active(stroke) => {
        self.active -= 1;
        Some(stroke)
      }
      Slot::Inert => None
    }
  }

  /// Drop the last slot, which must be inert.
  pub(crate) fn pop_inert(&mut self) {
    if let Some(Slot::Inert) = self.slots.last() {
      self.slots.pop();
    }
  }
}
