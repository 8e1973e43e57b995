//! Output canvas, per-pixel ownership index, and the stroke arena.
//!
//! Every pixel keeps the ordered set of stroke ids whose footprint covers it. The visible
//! color is the color of the largest id in that set (the most recent stroke), or blank when
//! the set is empty. Drawing and erasing keep this invariant and report the change of the
//! summed squared error against the reference picture.

use {
  crate::{
    fractal::Occupancy,
    geometry::{Color, Picture, Size},
    stroke::{Stroke, StrokeId}
  },
  log::warn,
  std::{
    collections::BTreeSet,
    fmt::{Debug, Formatter}
  },
};

pub mod slots;
pub use slots::{Slot, Slots};


pub struct Canvas {
  reference: Picture,
  image: Picture,
  owners: Vec<BTreeSet<StrokeId>>,
  slots: Slots,
}

impl Canvas {
  /// Blank canvas matching the size of `reference`.
  pub fn new(reference: Picture) -> Self {
    let size = reference.size();
    Self {
      image: Picture::new(size, Color::BLANK),
      owners: vec![BTreeSet::new(); size.width * size.height],
      slots: Slots::default(),
      reference,
    }
  }

  pub fn size(&self) -> Size { self.reference.size() }
  pub fn reference(&self) -> &Picture { &self.reference }
  pub fn image(&self) -> &Picture { &self.image }
  pub fn slots(&self) -> &Slots { &self.slots }

  pub fn into_image(self) -> Picture { self.image }

  /// Stroke ids covering a pixel, oldest first.
  pub fn owners(&self, row: usize, col: usize) -> &BTreeSet<StrokeId> {
    &self.owners[self.image.offset(row, col)]
  }

  /// Id a freshly appended stroke would get.
  pub fn next_id(&self) -> StrokeId { self.slots.len() }

  /// Paint `stroke` into slot `id` and return the change of the pixel error.
  ///
  /// `id` is either [`next_id`](Self::next_id) or an existing slot. An active slot is erased
  /// first, so its old geometry is overwritten. Ids past `next_id` draw nothing. The stroke only
  /// shows where `id` is the largest owner of a pixel.
  pub fn draw(&mut self, id: StrokeId, stroke: Stroke, occupancy: &mut impl Occupancy) -> i64 {
    if id > self.next_id() {
      warn!("stroke slot {} is past the end of the arena ({} slots)", id, self.slots.len());
      return 0;
    }
    let mut delta = self.erase(id, occupancy);
    self.slots.place(id, stroke);

    let Self { reference, image, owners, slots } = self;
    stroke.trace(reference.size(), |row, col| {
      let owners = &mut owners[image.offset(row, col)];
      owners.insert(id);
      let visible = owners.last().map_or(Color::BLANK, |&top| slots.color(top));
      delta += repaint(image, reference, row, col, visible, occupancy);
    });
    delta
  }

  /// Remove slot `id` from every pixel it covers, turn it inert, and return the change of the
  /// pixel error. Erasing an inert slot does nothing.
  pub fn erase(&mut self, id: StrokeId, occupancy: &mut impl Occupancy) -> i64 {
    let stroke = match self.slots.get(id) {
      Some(&stroke) => stroke,
      None => return 0
    };

    let Self { reference, image, owners, slots } = self;
    let mut delta = 0;
    stroke.trace(reference.size(), |row, col| {
      let owners = &mut owners[image.offset(row, col)];
      owners.remove(&id);
      let visible = owners.last().map_or(Color::BLANK, |&top| slots.color(top));
      delta += repaint(image, reference, row, col, visible, occupancy);
    });
    self.slots.retire(id);
    delta
  }

  /// Drop the most recently appended slot after it has been erased.
  pub fn pop_erased(&mut self) {
    self.slots.pop_inert();
  }

  /// Summed squared error against the reference, from scratch.
  pub fn pixel_error(&self) -> i64 {
    self.image.distance_sq(&self.reference)
  }

  /// Approximate heap usage of the ownership index, in bytes.
  pub fn ownership_bytes(&self) -> usize {
    let entries: usize = self.owners.iter().map(BTreeSet::len).sum();
    self.owners.len() * std::mem::size_of::<BTreeSet<StrokeId>>()
      + entries * std::mem::size_of::<StrokeId>()
  }
}

/// Show `visible` at a pixel and return the resulting error change.
fn repaint(
  image: &mut Picture,
  reference: &Picture,
  row: usize,
  col: usize,
  visible: Color,
  occupancy: &mut impl Occupancy
) -> i64 {
  let before = image.get(row, col);
  if before == visible {
    return 0;
  }
  image.set(row, col, visible);
  if before.is_blank() != visible.is_blank() {
    occupancy.on_pixel_transition(row, col, !visible.is_blank());
  }
  let target = reference.get(row, col);
  visible.distance_sq(target) - before.distance_sq(target)
}

impl Debug for Canvas {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    use humansize::{FileSize, file_size_opts as options};

    f.debug_struct("Canvas")
      .field("size", &self.size())
      .field("strokes", &self.slots.len())
      .field("active", &self.slots.active_count())
      .field("ownership", &self.ownership_bytes().file_size(options::BINARY).unwrap_or_default())
      .finish()
  }
}
